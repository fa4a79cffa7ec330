use crate::storage::CredentialPair;
use crate::storage::CredentialStore;
use crate::storage::CredentialStoreError;
use std::io::ErrorKind;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

/// Persists the credential pair as a small JSON document on disk so a
/// session survives process restarts.
///
/// A missing file reads as "no credentials".
#[derive(Clone, Debug)]
pub struct FileCredentialStore {
    path: PathBuf,
}
impl FileCredentialStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        self.path.as_path()
    }

    fn io_error(&self, source: std::io::Error) -> CredentialStoreError {
        CredentialStoreError::Io {
            path: self.path.to_owned(),
            source,
        }
    }
}

impl CredentialStore for FileCredentialStore {
    async fn read(&self) -> Result<Option<CredentialPair>, CredentialStoreError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                log::trace!("No stored credentials at {:?}.", self.path);
                return Ok(None);
            },
            Err(err) => return Err(self.io_error(err)),
        };

        serde_json::from_slice(&bytes)
            .map(Some)
            .map_err(|source| CredentialStoreError::Decode {
                path: self.path.to_owned(),
                source,
            })
    }

    async fn write(&self, credentials: CredentialPair) -> Result<(), CredentialStoreError> {
        let bytes = serde_json::to_vec(&credentials)
            .map_err(CredentialStoreError::Encode)?;

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        tokio::fs::create_dir_all(&dir)
            .await
            .map_err(|err| self.io_error(err))?;

        // Readers must never observe a half-written document, and each
        // writer stages its bytes in a temp file of its own.
        let path = self.path.to_owned();
        tokio::task::spawn_blocking(move || -> std::io::Result<()> {
            let mut tmp_file = tempfile::NamedTempFile::new_in(&dir)?;
            tmp_file.write_all(&bytes)?;
            tmp_file.persist(&path).map_err(|err| err.error)?;
            Ok(())
        })
        .await
        .map_err(|err| self.io_error(std::io::Error::other(err)))?
        .map_err(|err| self.io_error(err))?;

        log::debug!("Stored credentials at {:?}.", self.path);
        Ok(())
    }

    async fn clear(&self) -> Result<(), CredentialStoreError> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => {
                log::debug!("Cleared stored credentials at {:?}.", self.path);
                Ok(())
            },
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(self.io_error(err)),
        }
    }
}
