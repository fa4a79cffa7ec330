use crate::ast;
use crate::ToGraphQLString;
use crate::types::ListTypeAnnotation;
use crate::types::NamedTypeAnnotation;
use inherent::inherent;
use thiserror::Error;

/// Represents the wire type of a [`Variable`](crate::operation::Variable),
/// or of a field argument declared in a schema.
#[derive(Clone, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum TypeAnnotation {
    List(ListTypeAnnotation),
    Named(NamedTypeAnnotation),
}
impl TypeAnnotation {
    pub fn named(name: impl Into<String>, nullable: bool) -> Self {
        Self::Named(NamedTypeAnnotation {
            name: name.into(),
            nullable,
        })
    }

    /// Shorthand for a required named type (e.g. `String!`).
    pub fn non_null(name: impl Into<String>) -> Self {
        Self::named(name, /* nullable = */ false)
    }

    /// Shorthand for an optional named type (e.g. `String`).
    pub fn optional(name: impl Into<String>) -> Self {
        Self::named(name, /* nullable = */ true)
    }

    pub fn list(inner: TypeAnnotation, nullable: bool) -> Self {
        Self::List(ListTypeAnnotation {
            inner_type_ref: Box::new(inner),
            nullable,
        })
    }

    /// Parse a GraphQL type reference such as `String!` or `[ID!]`.
    pub fn parse(source: &str) -> Result<Self, TypeAnnotationParseError> {
        let invalid = |message: String| TypeAnnotationParseError::InvalidSyntax {
            message,
            source_text: source.to_string(),
        };

        let doc = ast::operation::parse(&format!("query($v: {source}) {{ __typename }}"))
            .map_err(|err| invalid(err.to_string()))?;

        let var_defs = match doc.definitions.as_slice() {
            [ast::operation::Definition::Operation(
                ast::operation::OperationDefinition::Query(query),
            )] => &query.variable_definitions,
            _ => return Err(invalid("expected a single type reference".to_string())),
        };

        match var_defs.as_slice() {
            [var_def] if var_def.default_value.is_none()
                => Ok(Self::from_ast_type(&var_def.var_type)),
            _ => Err(invalid("expected a single type reference".to_string())),
        }
    }

    pub(crate) fn from_ast_type(ast_type: &ast::operation::Type) -> Self {
        Self::from_ast_type_impl(ast_type, /* nullable = */ true)
    }

    fn from_ast_type_impl(ast_type: &ast::operation::Type, nullable: bool) -> Self {
        match ast_type {
            ast::operation::Type::ListType(inner) =>
                Self::list(Self::from_ast_type_impl(inner, true), nullable),

            ast::operation::Type::NamedType(name) =>
                Self::named(name.as_str(), nullable),

            ast::operation::Type::NonNullType(inner) =>
                Self::from_ast_type_impl(inner, false),
        }
    }

    /// Unwrap the [`ListTypeAnnotation`] if this annotation is one.
    pub fn as_list_annotation(&self) -> Option<&ListTypeAnnotation> {
        if let Self::List(annot) = self {
            Some(annot)
        } else {
            None
        }
    }

    /// Unwrap the [`NamedTypeAnnotation`] if this annotation is one.
    pub fn as_named_annotation(&self) -> Option<&NamedTypeAnnotation> {
        if let Self::Named(annot) = self {
            Some(annot)
        } else {
            None
        }
    }

    /// Recursively unwrap this [`TypeAnnotation`] and return the inner-most
    /// [`NamedTypeAnnotation`] from it.
    pub fn innermost_named_type_annotation(&self) -> &NamedTypeAnnotation {
        match self {
            Self::List(list_annot) =>
                list_annot.inner_type_annotation().innermost_named_type_annotation(),
            Self::Named(named_annot) => named_annot,
        }
    }

    /// Check if two type annotations are definitionally equal.
    ///
    /// Two type annotations are equivalent if they have:
    /// - Same type structure (Named vs List)
    /// - Same nullability at each level
    /// - Same innermost type name
    pub fn is_equivalent_to(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::List(self_list), Self::List(other_list))
                => self_list.is_equivalent_to(other_list),
            (Self::Named(self_named), Self::Named(other_named))
                => self_named.is_equivalent_to(other_named),
            _ => false, // List vs Named mismatch
        }
    }

    /// Whether a variable declared with this type may be passed where
    /// `location` is expected.
    ///
    /// A required variable may flow into an optional location but not the
    /// other way around. List nesting and the innermost type name must
    /// match exactly.
    pub fn is_assignable_to(&self, location: &Self) -> bool {
        if !location.nullable() && self.nullable() {
            return false;
        }

        match (self, location) {
            (Self::List(var_list), Self::List(location_list))
                => var_list.inner_type_annotation().is_assignable_to(
                    location_list.inner_type_annotation(),
                ),
            (Self::Named(var_named), Self::Named(location_named))
                => var_named.graphql_type_name() == location_named.graphql_type_name(),
            _ => false,
        }
    }

    pub fn nullable(&self) -> bool {
        match self {
            Self::List(annot) => annot.nullable(),
            Self::Named(annot) => annot.nullable(),
        }
    }

    /// A copy of this annotation with the outermost nullability replaced.
    pub fn with_nullable(&self, nullable: bool) -> Self {
        match self {
            Self::List(annot) => Self::List(ListTypeAnnotation {
                inner_type_ref: annot.inner_type_ref.clone(),
                nullable,
            }),
            Self::Named(annot) => Self::named(annot.graphql_type_name(), nullable),
        }
    }
}

#[inherent]
impl ToGraphQLString for TypeAnnotation {
    pub fn to_graphql_string(&self) -> String {
        match self {
            Self::Named(named_annot) => named_annot.to_graphql_string(),
            Self::List(list_annot) => list_annot.to_graphql_string(),
        }
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum TypeAnnotationParseError {
    #[error("Invalid type reference `{source_text}`: {message}")]
    InvalidSyntax {
        message: String,
        source_text: String,
    },
}
