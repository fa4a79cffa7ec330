use crate::storage::CredentialPair;
use crate::storage::CredentialStore;
use crate::storage::CredentialStoreError;
use tokio::sync::RwLock;

/// Keeps the credential pair in process memory only.
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    credentials: RwLock<Option<CredentialPair>>,
}
impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_credentials(credentials: CredentialPair) -> Self {
        Self {
            credentials: RwLock::new(Some(credentials)),
        }
    }
}

impl CredentialStore for MemoryCredentialStore {
    async fn read(&self) -> Result<Option<CredentialPair>, CredentialStoreError> {
        Ok(self.credentials.read().await.clone())
    }

    async fn write(&self, credentials: CredentialPair) -> Result<(), CredentialStoreError> {
        *self.credentials.write().await = Some(credentials);
        Ok(())
    }

    async fn clear(&self) -> Result<(), CredentialStoreError> {
        *self.credentials.write().await = None;
        Ok(())
    }
}
