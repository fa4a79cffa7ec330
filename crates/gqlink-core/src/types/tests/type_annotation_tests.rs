use crate::types::TypeAnnotation;
use crate::types::TypeAnnotationParseError;

#[test]
fn parse_named_types() {
    let required = TypeAnnotation::parse("String!").unwrap();
    assert_eq!(required, TypeAnnotation::non_null("String"));
    assert!(!required.nullable());

    let optional = TypeAnnotation::parse("Int").unwrap();
    assert_eq!(optional, TypeAnnotation::optional("Int"));
    assert!(optional.nullable());
}

#[test]
fn parse_nested_list_types() {
    let annot = TypeAnnotation::parse("[[ID!]]!").unwrap();
    let expected = TypeAnnotation::list(
        TypeAnnotation::list(TypeAnnotation::non_null("ID"), true),
        false,
    );
    assert_eq!(annot, expected);
    assert_eq!(annot.innermost_named_type_annotation().graphql_type_name(), "ID");
}

#[test]
fn parse_rejects_garbage() {
    let err = TypeAnnotation::parse("String!!").unwrap_err();
    assert!(matches!(
        err,
        TypeAnnotationParseError::InvalidSyntax { ref source_text, .. }
            if source_text == "String!!",
    ));
}

#[test]
fn parse_rejects_default_values_and_extra_variables() {
    assert!(TypeAnnotation::parse("String = \"x\"").is_err());
    assert!(TypeAnnotation::parse("String, $w: Int").is_err());
    assert!(TypeAnnotation::parse("").is_err());
}

#[test]
fn renders_graphql_type_syntax() {
    for source in ["String", "String!", "[String]", "[String!]!", "[[Int]!]"] {
        let annot = TypeAnnotation::parse(source).unwrap();
        assert_eq!(annot.to_graphql_string(), source);
    }
}

#[test]
fn equivalence_ignores_nothing_but_identity() {
    let a = TypeAnnotation::parse("[String!]").unwrap();
    assert!(a.is_equivalent_to(&TypeAnnotation::parse("[String!]").unwrap()));
    assert!(!a.is_equivalent_to(&TypeAnnotation::parse("[String]").unwrap()));
    assert!(!a.is_equivalent_to(&TypeAnnotation::parse("[String!]!").unwrap()));
    assert!(!a.is_equivalent_to(&TypeAnnotation::parse("String!").unwrap()));
}

#[test]
fn required_variable_flows_into_optional_location() {
    let var = TypeAnnotation::non_null("String");
    assert!(var.is_assignable_to(&TypeAnnotation::optional("String")));
    assert!(var.is_assignable_to(&TypeAnnotation::non_null("String")));
}

#[test]
fn optional_variable_cannot_fill_required_location() {
    let var = TypeAnnotation::optional("String");
    assert!(!var.is_assignable_to(&TypeAnnotation::non_null("String")));
}

#[test]
fn assignability_checks_list_items_and_names() {
    let var = TypeAnnotation::parse("[ID!]!").unwrap();
    assert!(var.is_assignable_to(&TypeAnnotation::parse("[ID]").unwrap()));
    assert!(!var.is_assignable_to(&TypeAnnotation::parse("[String]").unwrap()));
    assert!(!var.is_assignable_to(&TypeAnnotation::parse("ID").unwrap()));

    let loose = TypeAnnotation::parse("[ID]").unwrap();
    assert!(!loose.is_assignable_to(&TypeAnnotation::parse("[ID!]").unwrap()));
}

#[test]
fn with_nullable_only_touches_outermost_level() {
    let annot = TypeAnnotation::parse("[String!]").unwrap();
    assert_eq!(annot.with_nullable(false).to_graphql_string(), "[String!]!");
    assert_eq!(
        TypeAnnotation::non_null("Int").with_nullable(true),
        TypeAnnotation::optional("Int"),
    );
}
