use crate::storage::CredentialPair;
use std::future::Future;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

/// Asynchronous storage for the current [`CredentialPair`].
///
/// `read` returns `Ok(None)` when no session is stored; that is not an
/// error.
pub trait CredentialStore: Send + Sync {
    fn read(&self) -> impl Future<Output = Result<Option<CredentialPair>, CredentialStoreError>> + Send;

    /// Replace whatever pair is currently stored.
    fn write(
        &self,
        credentials: CredentialPair,
    ) -> impl Future<Output = Result<(), CredentialStoreError>> + Send;

    fn clear(&self) -> impl Future<Output = Result<(), CredentialStoreError>> + Send;
}

impl<S: CredentialStore> CredentialStore for Arc<S> {
    fn read(&self) -> impl Future<Output = Result<Option<CredentialPair>, CredentialStoreError>> + Send {
        (**self).read()
    }

    fn write(
        &self,
        credentials: CredentialPair,
    ) -> impl Future<Output = Result<(), CredentialStoreError>> + Send {
        (**self).write(credentials)
    }

    fn clear(&self) -> impl Future<Output = Result<(), CredentialStoreError>> + Send {
        (**self).clear()
    }
}

#[derive(Debug, Error)]
pub enum CredentialStoreError {
    #[error("Stored credentials at {path:?} could not be decoded: {source}")]
    Decode {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Credentials could not be encoded: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("Error accessing stored credentials at {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// For stores backed by a service that cannot be reached right now,
    /// such as a locked keychain.
    #[error("Credential store is unavailable: {0}")]
    Unavailable(String),
}
