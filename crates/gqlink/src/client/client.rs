use crate::client::ClientBuilder;
use crate::config::ClientConfig;
use crate::link::AuthLink;
use crate::link::LinkError;
use crate::storage::CredentialStore;
use crate::transport::GraphQLResponse;
use crate::transport::HttpTransport;
use crate::transport::OutgoingRequest;
use crate::transport::Transport;
use crate::transport::TransportError;
use thiserror::Error;

/// The application's GraphQL client: an [`AuthLink`] in front of a
/// [`Transport`].
///
/// Construct one at the composition root and hand it (or an `Arc` of it) to
/// whatever needs to run operations.
#[derive(Debug)]
pub struct Client<S, T> {
    pub(super) auth_link: AuthLink<S>,
    pub(super) transport: T,
}
impl<S: CredentialStore, T: Transport> Client<S, T> {
    pub fn builder() -> ClientBuilder<S, T> {
        ClientBuilder::new()
    }

    pub fn new(store: S, transport: T) -> Self {
        Self {
            auth_link: AuthLink::new(store),
            transport,
        }
    }

    pub fn auth_link(&self) -> &AuthLink<S> {
        &self.auth_link
    }

    pub fn credential_store(&self) -> &S {
        self.auth_link.store()
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Run one operation: resolve headers through the auth link, then hand
    /// the request to the transport.
    ///
    /// GraphQL-level errors (including authorization rejections) come back
    /// inside the [`GraphQLResponse`], not as a [`ClientError`].
    pub async fn execute(&self, request: &OutgoingRequest) -> Result<GraphQLResponse, ClientError> {
        let headers = self.auth_link.resolve_headers(request.operation()).await?;
        let response = self.transport.send(request, &headers).await?;
        if response.has_errors() {
            log::debug!(
                "Operation {:?} returned {} GraphQL error(s).",
                request.operation_name(),
                response.errors.len(),
            );
        }
        Ok(response)
    }
}

impl<S: CredentialStore> Client<S, HttpTransport> {
    /// Assemble a client that talks HTTP to `config.endpoint`.
    pub fn from_config(config: &ClientConfig, store: S) -> Result<Self, ClientError> {
        let transport = HttpTransport::new(
            config.endpoint.to_owned(),
            config.request_timeout,
        )?;
        Ok(Self::new(store, transport))
    }
}

#[derive(Debug, Error)]
pub enum ClientError {
    #[error(transparent)]
    Link(#[from] LinkError),

    #[error(transparent)]
    Transport(#[from] TransportError),
}
