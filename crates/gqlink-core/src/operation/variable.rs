use crate::ToGraphQLString;
use crate::types::TypeAnnotation;
use crate::Value;
use inherent::inherent;

#[derive(Clone, Debug, PartialEq)]
pub struct Variable {
    pub(super) default_value: Option<Value>,
    pub(super) name: String,
    pub(super) type_annotation: TypeAnnotation,
}
impl Variable {
    pub fn new(name: impl Into<String>, type_annotation: TypeAnnotation) -> Self {
        Self {
            default_value: None,
            name: name.into(),
            type_annotation,
        }
    }

    pub fn with_default_value(mut self, default_value: impl Into<Value>) -> Self {
        self.default_value = Some(default_value.into());
        self
    }

    pub fn default_value(&self) -> Option<&Value> {
        self.default_value.as_ref()
    }

    /// A variable must be given a value by the caller if its wire type is
    /// non-null and it has no default.
    pub fn is_required(&self) -> bool {
        !self.type_annotation.nullable() && self.default_value.is_none()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_annotation
    }
}

#[inherent]
impl ToGraphQLString for Variable {
    /// Renders the definition as it appears in an operation header, e.g.
    /// `$first: Int = 10`.
    pub fn to_graphql_string(&self) -> String {
        match &self.default_value {
            Some(default_value) => format!(
                "${}: {} = {}",
                self.name,
                self.type_annotation.to_graphql_string(),
                default_value.to_graphql_string(),
            ),
            None => format!(
                "${}: {}",
                self.name,
                self.type_annotation.to_graphql_string(),
            ),
        }
    }
}
