//! Collaborators shared by the crate's unit tests.

use crate::link::AUTHORIZATION_HEADER;
use crate::link::HeaderSet;
use crate::storage::CredentialPair;
use crate::storage::CredentialStore;
use crate::storage::CredentialStoreError;
use crate::transport::GraphQLResponse;
use crate::transport::OutgoingRequest;
use crate::transport::Transport;
use crate::transport::TransportError;
use std::sync::Mutex;

/// What a [`RecordingTransport`] saw for one `send`.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct SentRequest {
    pub authorization: Option<String>,
    pub headers: HeaderSet,
    pub operation_name: Option<String>,
    pub variables: serde_json::Map<String, serde_json::Value>,
}

/// Answers every request with the same canned response and remembers what
/// it was asked to send.
#[derive(Debug, Default)]
pub(crate) struct RecordingTransport {
    response: GraphQLResponse,
    sent: Mutex<Vec<SentRequest>>,
}
impl RecordingTransport {
    pub fn responding_with(response: GraphQLResponse) -> Self {
        Self {
            response,
            sent: Mutex::new(vec![]),
        }
    }

    pub fn sent(&self) -> Vec<SentRequest> {
        self.sent.lock().unwrap().clone()
    }
}
impl Transport for RecordingTransport {
    async fn send(
        &self,
        request: &OutgoingRequest,
        headers: &HeaderSet,
    ) -> Result<GraphQLResponse, TransportError> {
        self.sent.lock().unwrap().push(SentRequest {
            authorization: headers.get(AUTHORIZATION_HEADER).map(str::to_string),
            headers: headers.clone(),
            operation_name: request.operation_name().map(str::to_string),
            variables: request.variables().clone(),
        });
        Ok(self.response.clone())
    }
}

/// A store whose every call fails, standing in for an unreachable backing
/// store.
#[derive(Debug, Default)]
pub(crate) struct UnavailableStore;
impl CredentialStore for UnavailableStore {
    async fn read(&self) -> Result<Option<CredentialPair>, CredentialStoreError> {
        Err(CredentialStoreError::Unavailable("keychain locked".to_string()))
    }

    async fn write(&self, _credentials: CredentialPair) -> Result<(), CredentialStoreError> {
        Err(CredentialStoreError::Unavailable("keychain locked".to_string()))
    }

    async fn clear(&self) -> Result<(), CredentialStoreError> {
        Err(CredentialStoreError::Unavailable("keychain locked".to_string()))
    }
}
