use crate::client::Client;
use crate::storage::CredentialStore;
use crate::transport::Transport;
use thiserror::Error;

#[derive(Debug)]
pub struct ClientBuilder<S, T> {
    store: Option<S>,
    transport: Option<T>,
}
impl<S: CredentialStore, T: Transport> ClientBuilder<S, T> {
    pub fn new() -> Self {
        Self {
            store: None,
            transport: None,
        }
    }

    pub fn build(self) -> Result<Client<S, T>, ClientBuildError> {
        let store = self.store.ok_or(ClientBuildError::MissingCredentialStore)?;
        let transport = self.transport.ok_or(ClientBuildError::MissingTransport)?;
        Ok(Client::new(store, transport))
    }

    pub fn with_store(mut self, store: S) -> Self {
        self.store = Some(store);
        self
    }

    pub fn with_transport(mut self, transport: T) -> Self {
        self.transport = Some(transport);
        self
    }
}

impl<S: CredentialStore, T: Transport> Default for ClientBuilder<S, T> {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum ClientBuildError {
    #[error("No credential store was provided")]
    MissingCredentialStore,

    #[error("No transport was provided")]
    MissingTransport,
}
