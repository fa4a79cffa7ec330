mod client;
mod client_builder;

pub use client::Client;
pub use client::ClientError;
pub use client_builder::ClientBuildError;
pub use client_builder::ClientBuilder;
