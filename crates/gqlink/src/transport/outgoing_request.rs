use crate::operation::OperationDescriptor;
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;

type Result<T> = std::result::Result<T, Vec<RequestBuildError>>;

/// One operation plus the variable values bound for a single call.
///
/// Serializes to the standard GraphQL-over-HTTP body:
/// `{"query": …, "operationName": …, "variables": {…}}`.
#[derive(Clone, Debug, Serialize)]
pub struct OutgoingRequest {
    #[serde(skip)]
    operation: Arc<OperationDescriptor>,

    query: String,

    #[serde(rename = "operationName", skip_serializing_if = "Option::is_none")]
    operation_name: Option<String>,

    variables: serde_json::Map<String, serde_json::Value>,
}
impl OutgoingRequest {
    pub fn builder(operation: Arc<OperationDescriptor>) -> OutgoingRequestBuilder {
        OutgoingRequestBuilder::new(operation)
    }

    pub fn operation(&self) -> &OperationDescriptor {
        &self.operation
    }

    pub fn operation_name(&self) -> Option<&str> {
        self.operation_name.as_deref()
    }

    pub fn query(&self) -> &str {
        self.query.as_str()
    }

    pub fn variables(&self) -> &serde_json::Map<String, serde_json::Value> {
        &self.variables
    }
}

#[derive(Clone, Debug)]
pub struct OutgoingRequestBuilder {
    errors: Vec<RequestBuildError>,
    operation: Arc<OperationDescriptor>,
    variables: serde_json::Map<String, serde_json::Value>,
}
impl OutgoingRequestBuilder {
    pub fn new(operation: Arc<OperationDescriptor>) -> Self {
        Self {
            errors: vec![],
            operation,
            variables: serde_json::Map::new(),
        }
    }

    /// Bind `value` to the variable `name`, replacing any earlier binding.
    pub fn bind(
        mut self,
        name: impl Into<String>,
        value: impl Into<serde_json::Value>,
    ) -> Self {
        self.variables.insert(name.into(), value.into());
        self
    }

    /// Like [`bind`](Self::bind), for any serializable value (e.g. an input
    /// object struct).
    pub fn bind_serialized(mut self, name: impl Into<String>, value: &impl Serialize) -> Self {
        let name = name.into();
        match serde_json::to_value(value) {
            Ok(value) => {
                self.variables.insert(name, value);
            },
            Err(err) => self.errors.push(RequestBuildError::Encode {
                message: err.to_string(),
                variable_name: name,
            }),
        }
        self
    }

    /// Check the bindings against the operation's variable definitions and
    /// produce the [`OutgoingRequest`].
    pub fn build(self) -> Result<OutgoingRequest> {
        let mut errors = self.errors;
        let var_defs = self.operation.variables();

        for (name, value) in &self.variables {
            match var_defs.get(name) {
                None => errors.push(RequestBuildError::UndeclaredVariable {
                    variable_name: name.to_owned(),
                }),
                Some(var_def) if value.is_null() && !var_def.type_annotation().nullable() =>
                    errors.push(RequestBuildError::NullForNonNullVariable {
                        variable_name: name.to_owned(),
                    }),
                Some(_) => (),
            }
        }

        for var_def in var_defs.values() {
            if var_def.is_required() && !self.variables.contains_key(var_def.name()) {
                errors.push(RequestBuildError::MissingRequiredVariable {
                    variable_name: var_def.name().to_string(),
                });
            }
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(OutgoingRequest {
            query: self.operation.to_graphql_string(),
            operation_name: self.operation.name().map(str::to_string),
            operation: self.operation,
            variables: self.variables,
        })
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum RequestBuildError {
    #[error("Value for `${variable_name}` could not be encoded as JSON: {message}")]
    Encode {
        message: String,
        variable_name: String,
    },

    #[error("Variable `${variable_name}` is required but was not bound")]
    MissingRequiredVariable {
        variable_name: String,
    },

    #[error("Variable `${variable_name}` is non-null but was bound to null")]
    NullForNonNullVariable {
        variable_name: String,
    },

    #[error("Operation does not declare a variable named `${variable_name}`")]
    UndeclaredVariable {
        variable_name: String,
    },
}
