use crate::operation::FieldSelection;
use crate::operation::OperationDescriptor;
use crate::operation::OperationKind;
use crate::operation::OperationRole;
use crate::operation::Variable;
use crate::Value;
use indexmap::IndexMap;
use std::collections::HashSet;
use thiserror::Error;

type Result<T> = std::result::Result<T, Vec<OperationBuildError>>;

#[derive(Clone, Debug, PartialEq)]
pub struct OperationBuilder {
    kind: OperationKind,
    name: Option<String>,
    role: OperationRole,
    selection_set: Vec<FieldSelection>,
    variables: IndexMap<String, Variable>,
}
impl OperationBuilder {
    pub fn new(kind: OperationKind) -> Self {
        Self {
            kind,
            name: None,
            role: OperationRole::default(),
            selection_set: vec![],
            variables: IndexMap::new(),
        }
    }

    /// Add a root [`FieldSelection`] after any previously added ones.
    pub fn add_selection(mut self, selection: FieldSelection) -> Self {
        self.selection_set.push(selection);
        self
    }

    /// Add a [`Variable`] after any previously added `Variable`s.
    pub fn add_variable(mut self, variable: Variable) -> Result<Self> {
        if self.variables.contains_key(variable.name()) {
            return Err(vec![
                OperationBuildError::DuplicateVariableName {
                    variable_name: variable.name().to_string(),
                }
            ]);
        }
        self.variables.insert(variable.name().to_string(), variable);
        Ok(self)
    }

    /// Consume this [`OperationBuilder`] to produce an
    /// [`OperationDescriptor`].
    ///
    /// All problems found in the operation are reported together.
    pub fn build(self) -> Result<OperationDescriptor> {
        let mut errors = vec![];

        if self.selection_set.is_empty() {
            errors.push(OperationBuildError::EmptySelectionSet {
                operation_name: self.name.clone(),
            });
        }

        if let Some(name) = &self.name {
            check_name(name, &mut errors);
        }

        for var in self.variables.values() {
            check_name(var.name(), &mut errors);
            if let Some(default_value) = var.default_value() {
                check_value(default_value, &mut errors);
                let mut nested_vars = vec![];
                default_value.referenced_variable_names(&mut nested_vars);
                if !nested_vars.is_empty() {
                    errors.push(OperationBuildError::VariableInDefaultValue {
                        variable_name: var.name().to_string(),
                    });
                }
            }
        }

        check_selection_set(&self.selection_set, &mut errors);

        let mut referenced = vec![];
        for selection in &self.selection_set {
            selection.referenced_variable_names(&mut referenced);
        }
        let referenced: HashSet<&str> = referenced.into_iter().collect();

        let mut undefined: Vec<&str> = referenced.iter()
            .copied()
            .filter(|name| !self.variables.contains_key(*name))
            .collect();
        undefined.sort_unstable();
        for variable_name in undefined {
            errors.push(OperationBuildError::UndefinedVariable {
                variable_name: variable_name.to_string(),
            });
        }

        for var_name in self.variables.keys() {
            if !referenced.contains(var_name.as_str()) {
                errors.push(OperationBuildError::UnusedVariable {
                    variable_name: var_name.to_owned(),
                });
            }
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(OperationDescriptor {
            kind: self.kind,
            name: self.name,
            role: self.role,
            selection_set: self.selection_set,
            variables: self.variables,
        })
    }

    /// Set the name of the operation.
    pub fn set_name(mut self, name: Option<String>) -> Self {
        self.name = name;
        self
    }

    /// Set the [`OperationRole`] the transport will see for this operation.
    pub fn set_role(mut self, role: OperationRole) -> Self {
        self.role = role;
        self
    }

    /// Set the list of [`Variable`]s.
    ///
    /// NOTE: If any previous variables were added (either using this function
    /// or [`OperationBuilder::add_variable`]), they will be fully replaced by
    /// the collection of variables passed here.
    pub fn set_variables(mut self, variables: Vec<Variable>) -> Result<Self> {
        self.variables = IndexMap::new();
        for var in variables {
            self = self.add_variable(var)?;
        }
        Ok(self)
    }
}

fn check_selection_set(
    selection_set: &[FieldSelection],
    errors: &mut Vec<OperationBuildError>,
) {
    let mut by_response_key = IndexMap::<&str, &FieldSelection>::new();
    for selection in selection_set {
        check_name(selection.name(), errors);
        if let Some(alias) = selection.alias() {
            check_name(alias, errors);
        }

        let mut arg_names = HashSet::new();
        for (arg_name, value) in selection.arguments() {
            check_name(arg_name, errors);
            check_value(value, errors);
            if !arg_names.insert(arg_name.as_str()) {
                errors.push(OperationBuildError::DuplicateFieldArgument {
                    argument_name: arg_name.to_owned(),
                    field_name: selection.name().to_string(),
                });
            }
        }

        let response_key = selection.selected_name();
        if let Some(existing) = by_response_key.get(response_key) {
            if existing.name() != selection.name()
                || existing.arguments() != selection.arguments() {
                errors.push(OperationBuildError::ConflictingResponseKey {
                    response_key: response_key.to_string(),
                });
            }
        } else {
            by_response_key.insert(response_key, selection);
        }

        check_selection_set(selection.selection_set(), errors);
    }
}

/// Names embedded in a value (enum values, input object keys, variable
/// references) must be valid GraphQL names too.
fn check_value(value: &Value, errors: &mut Vec<OperationBuildError>) {
    match value {
        Value::Enum(name) => {
            if matches!(name.as_str(), "true" | "false" | "null") {
                errors.push(OperationBuildError::InvalidName {
                    name: name.to_owned(),
                });
            } else {
                check_name(name, errors);
            }
        },
        Value::Var(name) => check_name(name, errors),
        Value::List(values) => {
            for value in values {
                check_value(value, errors);
            }
        },
        Value::Object(entries) => {
            for (key, value) in entries {
                check_name(key, errors);
                check_value(value, errors);
            }
        },
        Value::Bool(_)
            | Value::Float(_)
            | Value::Int(_)
            | Value::Null
            | Value::String(_) => (),
    }
}

fn check_name(name: &str, errors: &mut Vec<OperationBuildError>) {
    let mut chars = name.chars();
    let valid = match chars.next() {
        Some(first) if first == '_' || first.is_ascii_alphabetic() =>
            chars.all(|ch| ch == '_' || ch.is_ascii_alphanumeric()),
        _ => false,
    };
    if !valid {
        errors.push(OperationBuildError::InvalidName {
            name: name.to_string(),
        });
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum OperationBuildError {
    #[error("Two different fields are selected under the same response key `{response_key}`")]
    ConflictingResponseKey {
        response_key: String,
    },

    #[error("Found multiple arguments named `{argument_name}` on field `{field_name}`")]
    DuplicateFieldArgument {
        argument_name: String,
        field_name: String,
    },

    #[error("Found multiple variables defined with the name `{variable_name}` on this operation")]
    DuplicateVariableName {
        variable_name: String,
    },

    #[error("Operation {operation_name:?} does not select any fields")]
    EmptySelectionSet {
        operation_name: Option<String>,
    },

    #[error("`{name}` is not a valid GraphQL name")]
    InvalidName {
        name: String,
    },

    #[error("Variable `${variable_name}` is referenced but never defined on this operation")]
    UndefinedVariable {
        variable_name: String,
    },

    #[error("Variable `${variable_name}` is defined but never referenced by any field")]
    UnusedVariable {
        variable_name: String,
    },

    #[error("The default value of `${variable_name}` must not reference other variables")]
    VariableInDefaultValue {
        variable_name: String,
    },
}
