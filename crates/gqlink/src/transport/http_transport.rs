use crate::link::HeaderSet;
use crate::transport::GraphQLResponse;
use crate::transport::OutgoingRequest;
use crate::transport::Transport;
use crate::transport::TransportError;
use reqwest::header::HeaderMap;
use reqwest::header::HeaderName;
use reqwest::header::HeaderValue;
use std::time::Duration;

/// Sends operations as JSON `POST`s to a single GraphQL endpoint.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    endpoint: reqwest::Url,
    // Cheap to clone; reqwest::Client is behind an Arc.
    http_client: reqwest::Client,
}
impl HttpTransport {
    pub fn new(endpoint: reqwest::Url, request_timeout: Duration) -> Result<Self, TransportError> {
        let http_client = reqwest::Client::builder()
            .timeout(request_timeout)
            .build()?;
        Ok(Self::with_client(endpoint, http_client))
    }

    pub fn with_client(endpoint: reqwest::Url, http_client: reqwest::Client) -> Self {
        Self {
            endpoint,
            http_client,
        }
    }

    pub fn endpoint(&self) -> &reqwest::Url {
        &self.endpoint
    }
}

impl Transport for HttpTransport {
    async fn send(
        &self,
        request: &OutgoingRequest,
        headers: &HeaderSet,
    ) -> Result<GraphQLResponse, TransportError> {
        let header_map = to_header_map(headers)?;
        log::debug!(
            "Sending {} {:?} to {}.",
            request.operation().kind(),
            request.operation_name(),
            self.endpoint,
        );

        let response = self.http_client
            .post(self.endpoint.clone())
            .headers(header_map)
            .json(request)
            .send()
            .await?;
        let status = response.status();
        let body = response.bytes().await?;
        log::trace!("Endpoint responded with HTTP {status} ({} bytes).", body.len());

        decode_response(status, &body)
    }
}

/// Decode an endpoint's answer.
///
/// Non-2xx answers are still returned as a [`GraphQLResponse`] when their
/// body carries a GraphQL error list, since that is how many servers report
/// authorization failures.
pub(super) fn decode_response(
    status: reqwest::StatusCode,
    body: &[u8],
) -> Result<GraphQLResponse, TransportError> {
    let decoded = serde_json::from_slice::<GraphQLResponse>(body);
    if status.is_success() {
        return Ok(decoded?);
    }

    match decoded {
        Ok(response) if response.has_errors() => Ok(response),
        _ => Err(TransportError::Status {
            body: String::from_utf8_lossy(body).into_owned(),
            status: status.as_u16(),
        }),
    }
}

pub(super) fn to_header_map(headers: &HeaderSet) -> Result<HeaderMap, TransportError> {
    let mut header_map = HeaderMap::with_capacity(headers.len());
    for (name, value) in headers.iter() {
        let invalid = || TransportError::InvalidHeader {
            name: name.to_string(),
        };
        let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|_| invalid())?;
        let header_value = HeaderValue::from_str(value).map_err(|_| invalid())?;
        header_map.insert(header_name, header_value);
    }
    Ok(header_map)
}
