use crate::link::AUTHORIZATION_HEADER;
use crate::link::HeaderSet;
use crate::operation::OperationDescriptor;
use crate::operation::OperationRole;
use crate::storage::CredentialStore;
use crate::storage::CredentialStoreError;
use thiserror::Error;

/// Whether `operation` is the one that exchanges a refresh token for a new
/// credential pair.
///
/// Decided solely by the [`OperationRole`] tag assigned when the operation
/// was built.
pub fn is_credential_refresh(operation: &OperationDescriptor) -> bool {
    operation.role() == OperationRole::CredentialRefresh
}

/// Attaches the stored access token to every outgoing operation except the
/// credential-refresh operation.
///
/// The link only reads from its store. Each call performs its own read, so
/// concurrent operations never wait on each other here.
#[derive(Debug)]
pub struct AuthLink<S> {
    store: S,
}
impl<S: CredentialStore> AuthLink<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Produce the headers `operation` should be sent with.
    ///
    /// * Refresh operation: no `authorization` header at all.
    /// * Any other operation: `authorization` set to the stored access
    ///   token, or to `""` when nothing is stored. The server is expected to
    ///   reject the latter.
    pub async fn resolve_headers(
        &self,
        operation: &OperationDescriptor,
    ) -> Result<HeaderSet, LinkError> {
        let credentials = self.store.read().await?;

        let mut headers = HeaderSet::new();
        if is_credential_refresh(operation) {
            log::trace!(
                "Skipping `{AUTHORIZATION_HEADER}` for credential refresh operation {:?}.",
                operation.name(),
            );
            return Ok(headers);
        }

        match credentials {
            Some(credentials) => headers.insert(AUTHORIZATION_HEADER, credentials.token),
            None => {
                log::debug!(
                    "No stored credentials; sending {:?} with an empty `{AUTHORIZATION_HEADER}`.",
                    operation.name(),
                );
                headers.insert(AUTHORIZATION_HEADER, "");
            },
        }
        Ok(headers)
    }
}

#[derive(Debug, Error)]
pub enum LinkError {
    #[error("Failed to read stored credentials: {0}")]
    CredentialStore(#[from] CredentialStoreError),
}
