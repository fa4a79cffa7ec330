use crate::catalog::Catalog;
use crate::link::AUTHORIZATION_HEADER;
use crate::link::AuthLink;
use crate::link::LinkError;
use crate::link::is_credential_refresh;
use crate::operation::FieldSelection;
use crate::operation::OperationDescriptor;
use crate::operation::OperationRole;
use crate::operation::Variable;
use crate::storage::CredentialPair;
use crate::storage::CredentialStore;
use crate::storage::CredentialStoreError;
use crate::storage::MemoryCredentialStore;
use crate::tests::UnavailableStore;
use crate::types::TypeAnnotation;
use crate::Value;
use proptest::prelude::*;

fn block_on<F: std::future::Future>(future: F) -> F::Output {
    tokio::runtime::Builder::new_current_thread()
        .build()
        .unwrap()
        .block_on(future)
}

fn operation_selecting(
    operation_name: &str,
    field_name: &str,
    role: OperationRole,
) -> OperationDescriptor {
    OperationDescriptor::mutation(operation_name)
        .set_role(role)
        .add_selection(FieldSelection::new(field_name))
        .build()
        .unwrap()
}

fn graphql_name() -> impl Strategy<Value = String> {
    prop_oneof![
        "[_A-Za-z][_0-9A-Za-z]{0,24}",
        // Names around the literal "refreshToken", which must not matter.
        ("([_A-Za-z][_0-9A-Za-z]{0,6})?", "[_0-9A-Za-z]{0,6}")
            .prop_map(|(prefix, suffix)| format!("{prefix}refreshToken{suffix}")),
        Just("refreshToken".to_string()),
        Just("refresh".to_string()),
        Just("token".to_string()),
    ]
}

fn role() -> impl Strategy<Value = OperationRole> {
    prop_oneof![Just(OperationRole::Standard), Just(OperationRole::CredentialRefresh)]
}

fn stored_pair() -> impl Strategy<Value = Option<CredentialPair>> {
    proptest::option::of(
        ("[ -~]{0,40}", "[ -~]{0,40}")
            .prop_map(|(token, refresh_token)| CredentialPair::new(token, refresh_token)),
    )
}

fn store_holding(credentials: Option<CredentialPair>) -> MemoryCredentialStore {
    match credentials {
        Some(credentials) => MemoryCredentialStore::with_credentials(credentials),
        None => MemoryCredentialStore::new(),
    }
}

proptest! {
    #[test]
    fn standard_operations_carry_the_stored_token(
        operation_name in graphql_name(),
        field_name in graphql_name(),
        credentials in stored_pair(),
    ) {
        let op = operation_selecting(&operation_name, &field_name, OperationRole::Standard);
        let link = AuthLink::new(store_holding(credentials.clone()));

        let headers = block_on(link.resolve_headers(&op)).unwrap();

        let expected = credentials.map(|pair| pair.token).unwrap_or_default();
        prop_assert_eq!(headers.get(AUTHORIZATION_HEADER), Some(expected.as_str()));
        prop_assert_eq!(headers.len(), 1);
    }

    #[test]
    fn refresh_operation_never_carries_authorization(
        operation_name in graphql_name(),
        field_name in graphql_name(),
        credentials in stored_pair(),
    ) {
        let op = operation_selecting(
            &operation_name,
            &field_name,
            OperationRole::CredentialRefresh,
        );
        let link = AuthLink::new(store_holding(credentials));

        let headers = block_on(link.resolve_headers(&op)).unwrap();

        prop_assert!(!headers.contains(AUTHORIZATION_HEADER));
        prop_assert!(headers.is_empty());
    }

    #[test]
    fn refresh_detection_depends_only_on_role(
        operation_name in graphql_name(),
        field_name in graphql_name(),
        role in role(),
    ) {
        let op = operation_selecting(&operation_name, &field_name, role);
        prop_assert_eq!(is_credential_refresh(&op), role == OperationRole::CredentialRefresh);
    }

    #[test]
    fn resolving_headers_leaves_the_store_unchanged(
        role in role(),
        credentials in stored_pair(),
    ) {
        let op = operation_selecting("Op", "field", role);
        let link = AuthLink::new(store_holding(credentials.clone()));

        block_on(async {
            link.resolve_headers(&op).await.unwrap();
            assert_eq!(link.store().read().await.unwrap(), credentials);
        });
    }
}

#[tokio::test]
async fn login_and_refresh_with_a_stored_pair() {
    let catalog = Catalog::build().unwrap();
    let link = AuthLink::new(MemoryCredentialStore::with_credentials(
        CredentialPair::new("abc", "xyz"),
    ));

    let login_headers = link.resolve_headers(catalog.login()).await.unwrap();
    assert_eq!(login_headers.iter().collect::<Vec<_>>(), vec![("authorization", "abc")]);

    let refresh_headers = link.resolve_headers(catalog.refresh_token()).await.unwrap();
    assert!(!refresh_headers.contains("authorization"));
}

#[tokio::test]
async fn every_standard_operation_sends_empty_authorization_without_a_pair() {
    let catalog = Catalog::build().unwrap();
    let link = AuthLink::new(MemoryCredentialStore::new());

    for op in catalog.all() {
        let headers = link.resolve_headers(op).await.unwrap();
        if is_credential_refresh(op) {
            assert!(headers.is_empty(), "{:?} got {headers:?}", op.name());
        } else {
            assert_eq!(headers.get("authorization"), Some(""), "{:?}", op.name());
        }
    }
}

#[test]
fn operations_resembling_the_refresh_marker_are_not_refresh_operations() {
    let catalog = Catalog::build().unwrap();

    // `revokeRefreshTokens` and `refreshTokenExpiresAt` both contain the
    // marker text.
    assert!(!is_credential_refresh(catalog.revoke_refresh_tokens()));
    assert!(!is_credential_refresh(catalog.session()));
    assert!(is_credential_refresh(catalog.refresh_token()));

    let standard_refresh_field = OperationDescriptor::mutation("RefreshToken")
        .add_variable(Variable::new("refreshToken", TypeAnnotation::non_null("String")))
        .unwrap()
        .add_selection(
            FieldSelection::new("refreshToken")
                .with_arg("refreshToken", Value::var("refreshToken"))
                .select_fields(["token"]),
        )
        .build()
        .unwrap();
    assert!(!is_credential_refresh(&standard_refresh_field));
}

#[tokio::test]
async fn token_replaced_between_calls_is_picked_up() {
    let catalog = Catalog::build().unwrap();
    let link = AuthLink::new(MemoryCredentialStore::with_credentials(
        CredentialPair::new("abc", "xyz"),
    ));

    link.store().write(CredentialPair::new("def", "uvw")).await.unwrap();
    let headers = link.resolve_headers(catalog.me()).await.unwrap();
    assert_eq!(headers.get("authorization"), Some("def"));

    link.store().clear().await.unwrap();
    let headers = link.resolve_headers(catalog.me()).await.unwrap();
    assert_eq!(headers.get("authorization"), Some(""));
}

#[tokio::test]
async fn store_failure_is_propagated() {
    let catalog = Catalog::build().unwrap();
    let link = AuthLink::new(UnavailableStore);

    for op in [catalog.me(), catalog.refresh_token()] {
        let err = link.resolve_headers(op).await.unwrap_err();
        assert!(matches!(
            err,
            LinkError::CredentialStore(CredentialStoreError::Unavailable(_)),
        ));
    }
}
