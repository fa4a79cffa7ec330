//! Links inspect or augment an outgoing operation before the transport
//! sends it.

mod auth_link;
mod header_set;

pub use auth_link::AuthLink;
pub use auth_link::LinkError;
pub use auth_link::is_credential_refresh;
pub use header_set::HeaderSet;

/// Header carrying the access token on authenticated operations.
pub const AUTHORIZATION_HEADER: &str = "authorization";

#[cfg(test)]
mod tests;
