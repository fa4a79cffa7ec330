use crate::operation::FieldSelection;
use crate::operation::OperationBuildError;
use crate::operation::OperationBuilder;
use crate::operation::OperationDescriptor;
use crate::operation::OperationKind;
use crate::operation::OperationRole;
use crate::operation::Variable;
use crate::types::TypeAnnotation;
use crate::Value;

fn login_builder() -> OperationBuilder {
    OperationDescriptor::mutation("Login")
        .add_variable(Variable::new("email", TypeAnnotation::non_null("String")))
        .unwrap()
        .add_variable(Variable::new("password", TypeAnnotation::non_null("String")))
        .unwrap()
}

#[test]
fn builds_mutation_with_bound_variables() {
    let op = login_builder()
        .add_selection(
            FieldSelection::new("login")
                .with_arg("email", Value::var("email"))
                .with_arg("password", Value::var("password"))
                .select_fields(["token", "refreshToken"]),
        )
        .build()
        .unwrap();

    assert_eq!(op.kind(), OperationKind::Mutation);
    assert_eq!(op.name(), Some("Login"));
    assert_eq!(op.role(), OperationRole::Standard);
    assert_eq!(op.variables().len(), 2);
    assert_eq!(op.referenced_variable_names(), vec!["email", "password"]);
    assert_eq!(op.selection_set()[0].selection_set().len(), 2);
    assert_eq!(
        op.selection_set()[0].argument("email"),
        Some(&Value::var("email")),
    );
}

#[test]
fn role_defaults_to_standard_and_can_be_tagged() {
    let op = OperationDescriptor::mutation("RefreshToken")
        .set_role(OperationRole::CredentialRefresh)
        .add_variable(Variable::new("refreshToken", TypeAnnotation::non_null("String")))
        .unwrap()
        .add_selection(
            FieldSelection::new("refreshToken")
                .with_arg("refreshToken", Value::var("refreshToken"))
                .select_fields(["token", "refreshToken"]),
        )
        .build()
        .unwrap();

    assert_eq!(op.role(), OperationRole::CredentialRefresh);
}

#[test]
fn duplicate_variable_is_rejected_immediately() {
    let result = login_builder()
        .add_variable(Variable::new("email", TypeAnnotation::optional("String")));

    assert_eq!(
        result.unwrap_err(),
        vec![OperationBuildError::DuplicateVariableName {
            variable_name: "email".to_string(),
        }],
    );
}

#[test]
fn undefined_and_unused_variables_are_reported_together() {
    let errors = OperationDescriptor::query("Me")
        .add_variable(Variable::new("unused", TypeAnnotation::optional("Int")))
        .unwrap()
        .add_selection(
            FieldSelection::new("user")
                .with_arg("id", Value::var("id"))
                .select_fields(["id"]),
        )
        .build()
        .unwrap_err();

    assert_eq!(errors, vec![
        OperationBuildError::UndefinedVariable {
            variable_name: "id".to_string(),
        },
        OperationBuildError::UnusedVariable {
            variable_name: "unused".to_string(),
        },
    ]);
}

#[test]
fn variables_nested_in_input_objects_count_as_referenced() {
    let input: indexmap::IndexMap<String, Value> = [
        ("email".to_string(), Value::var("email")),
        ("tags".to_string(), Value::List(vec![Value::var("tag"), "x".into()])),
    ].into_iter().collect();

    let op = OperationDescriptor::mutation("Register")
        .add_variable(Variable::new("email", TypeAnnotation::non_null("String")))
        .unwrap()
        .add_variable(Variable::new("tag", TypeAnnotation::optional("String")))
        .unwrap()
        .add_selection(
            FieldSelection::new("register")
                .with_arg("input", Value::Object(input))
                .select_fields(["token"]),
        )
        .build()
        .unwrap();

    assert_eq!(op.referenced_variable_names(), vec!["email", "tag"]);
}

#[test]
fn empty_operation_is_rejected() {
    let errors = OperationBuilder::new(OperationKind::Query).build().unwrap_err();
    assert_eq!(errors, vec![
        OperationBuildError::EmptySelectionSet { operation_name: None },
    ]);
}

#[test]
fn duplicate_field_arguments_are_rejected() {
    let errors = OperationDescriptor::query("Users")
        .add_selection(
            FieldSelection::new("users")
                .with_arg("first", 1)
                .with_arg("first", 2)
                .select_fields(["id"]),
        )
        .build()
        .unwrap_err();

    assert_eq!(errors, vec![
        OperationBuildError::DuplicateFieldArgument {
            argument_name: "first".to_string(),
            field_name: "users".to_string(),
        },
    ]);
}

#[test]
fn conflicting_response_keys_are_rejected() {
    let errors = OperationDescriptor::query("Me")
        .add_selection(FieldSelection::new("me").select_fields(["id"]))
        .add_selection(
            FieldSelection::new("viewer")
                .with_alias("me")
                .select_fields(["id"]),
        )
        .build()
        .unwrap_err();

    assert_eq!(errors, vec![
        OperationBuildError::ConflictingResponseKey {
            response_key: "me".to_string(),
        },
    ]);
}

#[test]
fn identical_repeated_selections_are_allowed() {
    let result = OperationDescriptor::query("Me")
        .add_selection(FieldSelection::new("me").select_fields(["id"]))
        .add_selection(FieldSelection::new("me").select_fields(["email"]))
        .build();

    assert!(result.is_ok());
}

#[test]
fn invalid_names_are_rejected() {
    let errors = OperationDescriptor::query("My Query")
        .add_selection(FieldSelection::new("1st").select_fields(["id"]))
        .build()
        .unwrap_err();

    assert_eq!(errors, vec![
        OperationBuildError::InvalidName { name: "My Query".to_string() },
        OperationBuildError::InvalidName { name: "1st".to_string() },
    ]);
}

#[test]
fn names_inside_argument_values_are_checked() {
    let errors = OperationDescriptor::query("Users")
        .add_variable(
            Variable::new("filter", TypeAnnotation::optional("UserFilter"))
                .with_default_value(Value::Object(
                    [("has space".to_string(), Value::enum_value("ADMIN"))]
                        .into_iter()
                        .collect(),
                )),
        )
        .unwrap()
        .add_selection(
            FieldSelection::new("users")
                .with_arg("filter", Value::var("filter"))
                .with_arg("role", Value::enum_value("a b"))
                .with_arg("order", Value::List(vec![Value::enum_value("null")]))
                .select_fields(["id"]),
        )
        .build()
        .unwrap_err();

    assert_eq!(errors, vec![
        OperationBuildError::InvalidName { name: "has space".to_string() },
        OperationBuildError::InvalidName { name: "a b".to_string() },
        OperationBuildError::InvalidName { name: "null".to_string() },
    ]);
}

#[test]
fn valid_enum_and_object_names_build() {
    let op = OperationDescriptor::query("Users")
        .add_selection(
            FieldSelection::new("users")
                .with_arg("role", Value::enum_value("ADMIN"))
                .with_arg("filter", Value::Object(
                    [("_createdAfter".to_string(), Value::from("2024-01-01"))]
                        .into_iter()
                        .collect(),
                ))
                .select_fields(["id"]),
        )
        .build()
        .unwrap();

    assert!(crate::ast::operation::parse(&op.to_graphql_string()).is_ok());
}

#[test]
fn default_values_must_be_constant() {
    let errors = OperationDescriptor::query("Users")
        .add_variable(
            Variable::new("first", TypeAnnotation::optional("Int"))
                .with_default_value(Value::var("other")),
        )
        .unwrap()
        .add_selection(
            FieldSelection::new("users")
                .with_arg("first", Value::var("first"))
                .select_fields(["id"]),
        )
        .build()
        .unwrap_err();

    assert_eq!(errors, vec![
        OperationBuildError::VariableInDefaultValue {
            variable_name: "first".to_string(),
        },
    ]);
}

#[test]
fn required_variables() {
    assert!(Variable::new("a", TypeAnnotation::non_null("Int")).is_required());
    assert!(!Variable::new("a", TypeAnnotation::optional("Int")).is_required());
    assert!(
        !Variable::new("a", TypeAnnotation::non_null("Int"))
            .with_default_value(10)
            .is_required()
    );
}

#[test]
fn set_variables_replaces_previous_variables() {
    let builder = login_builder()
        .set_variables(vec![
            Variable::new("token", TypeAnnotation::non_null("String")),
        ])
        .unwrap()
        .add_selection(
            FieldSelection::new("verify")
                .with_arg("token", Value::var("token")),
        );

    let op = builder.build().unwrap();
    assert_eq!(op.variables().keys().collect::<Vec<_>>(), vec!["token"]);
}
