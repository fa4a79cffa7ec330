//! Getting an [`OutgoingRequest`] onto the wire and a [`GraphQLResponse`]
//! back.

mod graphql_response;
mod http_transport;
mod outgoing_request;

pub use graphql_response::GraphQLError;
pub use graphql_response::GraphQLResponse;
pub use http_transport::HttpTransport;
pub use outgoing_request::OutgoingRequest;
pub use outgoing_request::OutgoingRequestBuilder;
pub use outgoing_request::RequestBuildError;

use crate::link::HeaderSet;
use std::future::Future;
use thiserror::Error;

/// The network-sending end of the link chain.
///
/// Timeouts and retries, if any, belong to the implementation.
pub trait Transport: Send + Sync {
    fn send(
        &self,
        request: &OutgoingRequest,
        headers: &HeaderSet,
    ) -> impl Future<Output = Result<GraphQLResponse, TransportError>> + Send;
}

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("Response body is not a GraphQL response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Header `{name}` has a value that cannot be sent over HTTP")]
    InvalidHeader {
        name: String,
    },

    #[error("Endpoint responded with HTTP {status}: {body}")]
    Status {
        body: String,
        status: u16,
    },
}
