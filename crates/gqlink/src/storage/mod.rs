//! Persistence for the session's [`CredentialPair`].
//!
//! The transport link only ever reads from a [`CredentialStore`]; writes
//! happen when a session logs in, refreshes or logs out.

mod credential_pair;
mod credential_store;
mod file_credential_store;
mod memory_credential_store;

pub use credential_pair::CredentialPair;
pub use credential_store::CredentialStore;
pub use credential_store::CredentialStoreError;
pub use file_credential_store::FileCredentialStore;
pub use memory_credential_store::MemoryCredentialStore;
