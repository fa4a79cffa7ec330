pub use gqlink_core::*;

pub mod catalog;
pub mod client;
pub mod config;
pub mod link;
pub mod session;
pub mod storage;
pub mod transport;

#[cfg(test)]
mod tests;
