//! The credential-pair lifecycle: obtaining a pair, rotating it and
//! discarding it.

use crate::catalog::Catalog;
use crate::client::Client;
use crate::client::ClientError;
use crate::storage::CredentialPair;
use crate::storage::CredentialStore;
use crate::storage::CredentialStoreError;
use crate::transport::GraphQLError;
use crate::transport::GraphQLResponse;
use crate::transport::OutgoingRequest;
use crate::transport::RequestBuildError;
use crate::transport::Transport;
use serde::Serialize;
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterInput {
    pub email: String,
    pub name: Option<String>,
    pub password: String,
}

/// Runs the catalog's credential operations through a [`Client`] and keeps
/// the client's credential store in step with their results.
#[derive(Debug)]
pub struct Session<S, T> {
    catalog: Catalog,
    client: Client<S, T>,
}
impl<S: CredentialStore, T: Transport> Session<S, T> {
    pub fn new(client: Client<S, T>, catalog: Catalog) -> Self {
        Self { catalog, client }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn client(&self) -> &Client<S, T> {
        &self.client
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<CredentialPair, SessionError> {
        let request = OutgoingRequest::builder(self.catalog.login().clone())
            .bind("email", email)
            .bind("password", password)
            .build()?;
        self.obtain_credentials(&request, "login").await
    }

    pub async fn register(&self, input: &RegisterInput) -> Result<CredentialPair, SessionError> {
        let request = OutgoingRequest::builder(self.catalog.register().clone())
            .bind_serialized("input", input)
            .build()?;
        self.obtain_credentials(&request, "register").await
    }

    /// Exchange the stored refresh token for a new pair.
    pub async fn refresh(&self) -> Result<CredentialPair, SessionError> {
        let current = self.client.credential_store()
            .read()
            .await?
            .ok_or(SessionError::NotAuthenticated)?;

        let request = OutgoingRequest::builder(self.catalog.refresh_token().clone())
            .bind("refreshToken", current.refresh_token)
            .build()?;
        self.obtain_credentials(&request, "refreshToken").await
    }

    /// End the session remotely, then forget the stored pair.
    ///
    /// The store is cleared even when the remote call fails; the remote
    /// failure is still reported.
    pub async fn logout(&self) -> Result<(), SessionError> {
        let remote_result = match OutgoingRequest::builder(self.catalog.logout().clone()).build() {
            Ok(request) => self.client.execute(&request).await
                .map_err(SessionError::from)
                .and_then(into_data_response),
            Err(errors) => Err(SessionError::from(errors)),
        };

        self.client.credential_store().clear().await?;
        log::debug!("Cleared stored credentials.");
        remote_result.map(|_| ())
    }

    async fn obtain_credentials(
        &self,
        request: &OutgoingRequest,
        root_field: &'static str,
    ) -> Result<CredentialPair, SessionError> {
        let response = into_data_response(self.client.execute(request).await?)?;
        let credentials = response.root_field(root_field)
            .and_then(|payload| serde_json::from_value::<CredentialPair>(payload.clone()).ok())
            .ok_or(SessionError::MissingCredentials { operation: root_field })?;

        self.client.credential_store().write(credentials.clone()).await?;
        log::debug!("Stored credentials returned by `{root_field}`.");
        Ok(credentials)
    }
}

fn into_data_response(response: GraphQLResponse) -> Result<GraphQLResponse, SessionError> {
    if response.has_errors() {
        Err(SessionError::GraphQL(response.errors))
    } else {
        Ok(response)
    }
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Client(#[from] ClientError),

    #[error(transparent)]
    CredentialStore(#[from] CredentialStoreError),

    #[error("The endpoint reported errors: {}", format_graphql_errors(.0))]
    GraphQL(Vec<GraphQLError>),

    #[error("Response to `{operation}` did not contain a token and refresh token")]
    MissingCredentials {
        operation: &'static str,
    },

    #[error("No credentials are stored")]
    NotAuthenticated,

    #[error("Request could not be built: {0:?}")]
    RequestBuild(Vec<RequestBuildError>),
}
impl From<Vec<RequestBuildError>> for SessionError {
    fn from(errors: Vec<RequestBuildError>) -> Self {
        Self::RequestBuild(errors)
    }
}

fn format_graphql_errors(errors: &[GraphQLError]) -> String {
    errors.iter()
        .map(|err| err.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::RegisterInput;
    use super::Session;
    use super::SessionError;
    use crate::catalog::Catalog;
    use crate::client::Client;
    use crate::storage::CredentialPair;
    use crate::storage::CredentialStore;
    use crate::storage::MemoryCredentialStore;
    use crate::tests::RecordingTransport;
    use crate::transport::GraphQLResponse;
    use serde_json::json;

    fn session_with(
        store: MemoryCredentialStore,
        response: GraphQLResponse,
    ) -> Session<MemoryCredentialStore, RecordingTransport> {
        Session::new(
            Client::new(store, RecordingTransport::responding_with(response)),
            Catalog::build().unwrap(),
        )
    }

    fn data(value: serde_json::Value) -> GraphQLResponse {
        GraphQLResponse {
            data: Some(value),
            errors: vec![],
        }
    }

    #[tokio::test]
    async fn login_stores_returned_pair() {
        let session = session_with(
            MemoryCredentialStore::new(),
            data(json!({"login": {"token": "abc", "refreshToken": "xyz", "user": null}})),
        );

        let pair = session.login("a@example.com", "hunter2").await.unwrap();
        assert_eq!(pair, CredentialPair::new("abc", "xyz"));
        assert_eq!(
            session.client().credential_store().read().await.unwrap(),
            Some(CredentialPair::new("abc", "xyz")),
        );

        let sent = session.client().transport().sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].operation_name.as_deref(), Some("Login"));
        assert_eq!(sent[0].variables["email"], json!("a@example.com"));
        assert_eq!(sent[0].authorization.as_deref(), Some(""));
    }

    #[tokio::test]
    async fn register_sends_input_object() {
        let session = session_with(
            MemoryCredentialStore::new(),
            data(json!({"register": {"token": "t", "refreshToken": "r"}})),
        );

        session.register(&RegisterInput {
            email: "new@example.com".to_string(),
            name: None,
            password: "pw".to_string(),
        }).await.unwrap();

        let sent = session.client().transport().sent();
        assert_eq!(
            sent[0].variables["input"],
            json!({"email": "new@example.com", "name": null, "password": "pw"}),
        );
    }

    #[tokio::test]
    async fn refresh_sends_stored_refresh_token_without_authorization() {
        let session = session_with(
            MemoryCredentialStore::with_credentials(CredentialPair::new("abc", "xyz")),
            data(json!({"refreshToken": {"token": "abc2", "refreshToken": "xyz2"}})),
        );

        let pair = session.refresh().await.unwrap();
        assert_eq!(pair, CredentialPair::new("abc2", "xyz2"));

        let sent = session.client().transport().sent();
        assert_eq!(sent[0].operation_name.as_deref(), Some("RefreshToken"));
        assert_eq!(sent[0].variables["refreshToken"], json!("xyz"));
        assert_eq!(sent[0].authorization, None);
        assert_eq!(
            session.client().credential_store().read().await.unwrap(),
            Some(CredentialPair::new("abc2", "xyz2")),
        );
    }

    #[tokio::test]
    async fn refresh_without_stored_pair_sends_nothing() {
        let session = session_with(MemoryCredentialStore::new(), GraphQLResponse::default());

        assert!(matches!(session.refresh().await, Err(SessionError::NotAuthenticated)));
        assert!(session.client().transport().sent().is_empty());
    }

    #[tokio::test]
    async fn graphql_errors_leave_the_store_untouched() {
        let session = session_with(
            MemoryCredentialStore::with_credentials(CredentialPair::new("abc", "xyz")),
            serde_json::from_value(json!({
                "data": null,
                "errors": [{"message": "Invalid credentials", "path": ["login"]}],
            })).unwrap(),
        );

        let err = session.login("a@example.com", "wrong").await.unwrap_err();
        assert!(matches!(err, SessionError::GraphQL(ref errors) if errors.len() == 1));
        assert_eq!(err.to_string(), "The endpoint reported errors: Invalid credentials (at login)");
        assert_eq!(
            session.client().credential_store().read().await.unwrap(),
            Some(CredentialPair::new("abc", "xyz")),
        );
    }

    #[tokio::test]
    async fn response_without_tokens_is_missing_credentials() {
        let session = session_with(
            MemoryCredentialStore::new(),
            data(json!({"login": {"token": "abc"}})),
        );

        assert!(matches!(
            session.login("a@example.com", "pw").await,
            Err(SessionError::MissingCredentials { operation: "login" }),
        ));
        assert_eq!(session.client().credential_store().read().await.unwrap(), None);
    }

    #[tokio::test]
    async fn logout_clears_store_even_when_remote_call_fails() {
        let session = session_with(
            MemoryCredentialStore::with_credentials(CredentialPair::new("abc", "xyz")),
            serde_json::from_value(json!({
                "errors": [{"message": "Session already ended"}],
            })).unwrap(),
        );

        assert!(matches!(session.logout().await, Err(SessionError::GraphQL(_))));
        assert_eq!(session.client().credential_store().read().await.unwrap(), None);

        let sent = session.client().transport().sent();
        assert_eq!(sent[0].authorization.as_deref(), Some("abc"));
    }

    #[tokio::test]
    async fn logout_succeeds_on_clean_response() {
        let session = session_with(
            MemoryCredentialStore::with_credentials(CredentialPair::new("abc", "xyz")),
            data(json!({"logout": true})),
        );

        session.logout().await.unwrap();
        assert_eq!(session.client().credential_store().read().await.unwrap(), None);
    }
}
