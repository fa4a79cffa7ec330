use crate::ast;
use crate::operation::FieldSelection;
use crate::operation::OperationDescriptor;
use crate::operation::OperationKind;
use crate::schema_check::SchemaCheckError;
use crate::schema_check::SchemaIndexError;
use crate::types::TypeAnnotation;
use crate::Value;
use indexmap::IndexMap;
use std::collections::HashMap;

const BUILTIN_SCALARS: [&str; 5] = ["Boolean", "Float", "ID", "Int", "String"];

#[derive(Clone, Debug, PartialEq)]
pub struct IndexedArgument {
    pub(super) has_default: bool,
    pub(super) type_annotation: TypeAnnotation,
}
impl IndexedArgument {
    pub fn has_default(&self) -> bool {
        self.has_default
    }

    /// An argument must be supplied if it is non-null and has no default.
    pub fn is_required(&self) -> bool {
        !self.type_annotation.nullable() && !self.has_default
    }

    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_annotation
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct IndexedField {
    pub(super) arguments: IndexMap<String, IndexedArgument>,
    pub(super) field_type: TypeAnnotation,
}
impl IndexedField {
    pub fn arguments(&self) -> &IndexMap<String, IndexedArgument> {
        &self.arguments
    }

    pub fn field_type(&self) -> &TypeAnnotation {
        &self.field_type
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum IndexedType {
    Enum,
    InputObject,
    Interface(IndexMap<String, IndexedField>),
    Object(IndexMap<String, IndexedField>),
    Scalar,
    Union(Vec<String>),
}
impl IndexedType {
    fn fields(&self) -> Option<&IndexMap<String, IndexedField>> {
        match self {
            Self::Interface(fields) | Self::Object(fields) => Some(fields),
            Self::Enum | Self::InputObject | Self::Scalar | Self::Union(_) => None,
        }
    }

    fn is_leaf(&self) -> bool {
        matches!(self, Self::Enum | Self::Scalar)
    }
}

/// A lookup-oriented view of a schema: just enough of each type definition
/// to decide whether an operation's fields, arguments and variable types
/// are acceptable.
#[derive(Clone, Debug, PartialEq)]
pub struct SchemaIndex {
    mutation_type: Option<String>,
    query_type: Option<String>,
    subscription_type: Option<String>,
    types: HashMap<String, IndexedType>,
}
impl SchemaIndex {
    pub fn from_sdl(content: &str) -> Result<Self, Vec<SchemaIndexError>> {
        Self::from_sdl_documents([content])
    }

    /// Index the union of several SDL documents (e.g. one per file).
    ///
    /// Type extensions may appear in any document; they are applied after
    /// every definition has been collected.
    pub fn from_sdl_documents<I, S>(contents: I) -> Result<Self, Vec<SchemaIndexError>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut errors = vec![];
        let mut docs = vec![];
        for content in contents {
            match ast::schema::parse(content.as_ref()) {
                Ok(doc) => docs.push(doc),
                Err(err) => errors.push(SchemaIndexError::ParseError {
                    message: err.to_string(),
                }),
            }
        }
        if !errors.is_empty() {
            return Err(errors);
        }

        let mut types = HashMap::<String, IndexedType>::new();
        for scalar_name in BUILTIN_SCALARS {
            types.insert(scalar_name.to_string(), IndexedType::Scalar);
        }

        let mut schema_def = None;
        let mut extensions = vec![];
        for def in docs.iter().flat_map(|doc| doc.definitions.iter()) {
            match def {
                ast::schema::Definition::SchemaDefinition(def) =>
                    schema_def = Some(def),

                ast::schema::Definition::TypeDefinition(type_def) => {
                    let (name, indexed) = index_type_definition(type_def);
                    if types.contains_key(name) && !BUILTIN_SCALARS.contains(&name) {
                        errors.push(SchemaIndexError::DuplicateTypeDefinition {
                            type_name: name.to_string(),
                        });
                        continue
                    }
                    types.insert(name.to_string(), indexed);
                },

                ast::schema::Definition::TypeExtension(ext) =>
                    extensions.push(ext),

                ast::schema::Definition::DirectiveDefinition(_) => (),
            }
        }

        for ext in extensions {
            if let Err(err) = apply_type_extension(&mut types, ext) {
                errors.push(err);
            }
        }

        let root_type = |kind: OperationKind, declared: Option<&String>| {
            match declared {
                Some(type_name) => Some(type_name.to_owned()),
                None => {
                    let default_name = match kind {
                        OperationKind::Mutation => "Mutation",
                        OperationKind::Query => "Query",
                        OperationKind::Subscription => "Subscription",
                    };
                    types.contains_key(default_name).then(|| default_name.to_string())
                },
            }
        };
        let query_type = root_type(
            OperationKind::Query,
            schema_def.and_then(|def| def.query.as_ref()),
        );
        let mutation_type = root_type(
            OperationKind::Mutation,
            schema_def.and_then(|def| def.mutation.as_ref()),
        );
        let subscription_type = root_type(
            OperationKind::Subscription,
            schema_def.and_then(|def| def.subscription.as_ref()),
        );

        for (kind, type_name) in [
            (OperationKind::Query, &query_type),
            (OperationKind::Mutation, &mutation_type),
            (OperationKind::Subscription, &subscription_type),
        ] {
            if let Some(type_name) = type_name
                && !matches!(types.get(type_name), Some(IndexedType::Object(_))) {
                errors.push(SchemaIndexError::UndefinedRootType {
                    kind,
                    type_name: type_name.to_owned(),
                });
            }
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(Self {
            mutation_type,
            query_type,
            subscription_type,
            types,
        })
    }

    pub fn lookup_type(&self, name: &str) -> Option<&IndexedType> {
        self.types.get(name)
    }

    /// Name of the root object type for operations of the given kind, if
    /// the schema defines one.
    pub fn root_type_name(&self, kind: OperationKind) -> Option<&str> {
        match kind {
            OperationKind::Mutation => self.mutation_type.as_deref(),
            OperationKind::Query => self.query_type.as_deref(),
            OperationKind::Subscription => self.subscription_type.as_deref(),
        }
    }

    /// Check `operation` against this schema, collecting every problem.
    pub fn check(&self, operation: &OperationDescriptor) -> Result<(), Vec<SchemaCheckError>> {
        let root_type_name = self.root_type_name(operation.kind())
            .ok_or_else(|| vec![
                SchemaCheckError::MissingRootType { kind: operation.kind() },
            ])?;

        let mut errors = vec![];
        for var in operation.variables().values() {
            let type_name =
                var.type_annotation().innermost_named_type_annotation().graphql_type_name();
            if !self.types.contains_key(type_name) {
                errors.push(SchemaCheckError::UnknownType {
                    type_name: type_name.to_string(),
                });
            }
        }

        self.check_selection_set(
            operation,
            root_type_name,
            operation.selection_set(),
            &mut errors,
        );

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn check_selection_set(
        &self,
        operation: &OperationDescriptor,
        parent_type_name: &str,
        selection_set: &[FieldSelection],
        errors: &mut Vec<SchemaCheckError>,
    ) {
        let Some(parent_type) = self.types.get(parent_type_name) else {
            errors.push(SchemaCheckError::UnknownType {
                type_name: parent_type_name.to_string(),
            });
            return;
        };

        for selection in selection_set {
            if selection.name() == "__typename" {
                if !selection.selection_set().is_empty() {
                    errors.push(SchemaCheckError::SelectionOnLeafField {
                        field_name: selection.name().to_string(),
                        type_name: parent_type_name.to_string(),
                    });
                }
                continue
            }

            let Some(field) = parent_type.fields()
                .and_then(|fields| fields.get(selection.name())) else {
                errors.push(SchemaCheckError::UnknownField {
                    field_name: selection.name().to_string(),
                    type_name: parent_type_name.to_string(),
                });
                continue
            };

            self.check_arguments(operation, parent_type_name, selection, field, errors);

            let field_type_name =
                field.field_type.innermost_named_type_annotation().graphql_type_name();
            let Some(field_type) = self.types.get(field_type_name) else {
                errors.push(SchemaCheckError::UnknownType {
                    type_name: field_type_name.to_string(),
                });
                continue
            };

            match (field_type.is_leaf(), selection.selection_set().is_empty()) {
                (true, false) => errors.push(SchemaCheckError::SelectionOnLeafField {
                    field_name: selection.name().to_string(),
                    type_name: parent_type_name.to_string(),
                }),
                (false, true) => errors.push(SchemaCheckError::MissingSelectionSet {
                    field_name: selection.name().to_string(),
                    type_name: parent_type_name.to_string(),
                }),
                (false, false) => self.check_selection_set(
                    operation,
                    field_type_name,
                    selection.selection_set(),
                    errors,
                ),
                (true, true) => (),
            }
        }
    }

    fn check_arguments(
        &self,
        operation: &OperationDescriptor,
        parent_type_name: &str,
        selection: &FieldSelection,
        field: &IndexedField,
        errors: &mut Vec<SchemaCheckError>,
    ) {
        for (arg_name, value) in selection.arguments() {
            let Some(arg) = field.arguments.get(arg_name) else {
                errors.push(SchemaCheckError::UnknownArgument {
                    argument_name: arg_name.to_owned(),
                    field_name: selection.name().to_string(),
                    type_name: parent_type_name.to_string(),
                });
                continue
            };

            // Literal arguments are left to the server; only variable usages
            // carry a declared wire type that can be compared here.
            let Value::Var(var_name) = value else {
                continue
            };
            let Some(var) = operation.variables().get(var_name) else {
                continue
            };

            let var_type = var.type_annotation();
            let has_non_null_default =
                var.default_value().is_some_and(|default| !default.is_null());
            let allowed =
                var_type.is_assignable_to(&arg.type_annotation)
                    || ((has_non_null_default || arg.has_default)
                        && var_type.with_nullable(false).is_assignable_to(&arg.type_annotation));
            if !allowed {
                errors.push(SchemaCheckError::VariableTypeMismatch {
                    argument_name: arg_name.to_owned(),
                    expected_type: arg.type_annotation.to_graphql_string(),
                    field_name: selection.name().to_string(),
                    variable_name: var_name.to_owned(),
                    variable_type: var_type.to_graphql_string(),
                });
            }
        }

        for (arg_name, arg) in &field.arguments {
            if arg.is_required() && selection.argument(arg_name).is_none() {
                errors.push(SchemaCheckError::MissingRequiredArgument {
                    argument_name: arg_name.to_owned(),
                    field_name: selection.name().to_string(),
                    type_name: parent_type_name.to_string(),
                });
            }
        }
    }
}

fn index_fields(fields: &[ast::schema::Field]) -> IndexMap<String, IndexedField> {
    fields.iter()
        .map(|field| (field.name.to_owned(), IndexedField {
            arguments: field.arguments.iter()
                .map(|arg| (arg.name.to_owned(), IndexedArgument {
                    has_default: arg.default_value.is_some(),
                    type_annotation: TypeAnnotation::from_ast_type(&arg.value_type),
                }))
                .collect(),
            field_type: TypeAnnotation::from_ast_type(&field.field_type),
        }))
        .collect()
}

fn index_type_definition(type_def: &ast::schema::TypeDefinition) -> (&str, IndexedType) {
    use graphql_parser::schema::TypeDefinition;
    match type_def {
        TypeDefinition::Enum(def) => (def.name.as_str(), IndexedType::Enum),
        TypeDefinition::InputObject(def) => (def.name.as_str(), IndexedType::InputObject),
        TypeDefinition::Interface(def) =>
            (def.name.as_str(), IndexedType::Interface(index_fields(&def.fields))),
        TypeDefinition::Object(def) =>
            (def.name.as_str(), IndexedType::Object(index_fields(&def.fields))),
        TypeDefinition::Scalar(def) => (def.name.as_str(), IndexedType::Scalar),
        TypeDefinition::Union(def) =>
            (def.name.as_str(), IndexedType::Union(def.types.to_owned())),
    }
}

fn apply_type_extension(
    types: &mut HashMap<String, IndexedType>,
    ext: &ast::schema::TypeExtension,
) -> Result<(), SchemaIndexError> {
    use graphql_parser::schema::TypeExtension;
    let (type_name, existing) = match ext {
        TypeExtension::Enum(ext) => (&ext.name, types.get_mut(&ext.name)),
        TypeExtension::InputObject(ext) => (&ext.name, types.get_mut(&ext.name)),
        TypeExtension::Interface(ext) => (&ext.name, types.get_mut(&ext.name)),
        TypeExtension::Object(ext) => (&ext.name, types.get_mut(&ext.name)),
        TypeExtension::Scalar(ext) => (&ext.name, types.get_mut(&ext.name)),
        TypeExtension::Union(ext) => (&ext.name, types.get_mut(&ext.name)),
    };
    let invalid = || SchemaIndexError::InvalidTypeExtension {
        type_name: type_name.to_owned(),
    };

    match (ext, existing) {
        (TypeExtension::Object(ext), Some(IndexedType::Object(fields)))
            => fields.extend(index_fields(&ext.fields)),
        (TypeExtension::Interface(ext), Some(IndexedType::Interface(fields)))
            => fields.extend(index_fields(&ext.fields)),
        (TypeExtension::Union(ext), Some(IndexedType::Union(members)))
            => members.extend(ext.types.iter().cloned()),
        (TypeExtension::Enum(_), Some(IndexedType::Enum))
            | (TypeExtension::InputObject(_), Some(IndexedType::InputObject))
            | (TypeExtension::Scalar(_), Some(IndexedType::Scalar)) => (),
        _ => return Err(invalid()),
    }
    Ok(())
}
