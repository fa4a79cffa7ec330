use crate::operation::OperationKind;
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum SchemaIndexError {
    #[error("Type `{type_name}` is defined more than once")]
    DuplicateTypeDefinition {
        type_name: String,
    },

    #[error("Extension of type `{type_name}` does not match a compatible definition")]
    InvalidTypeExtension {
        type_name: String,
    },

    #[error("Error parsing schema document: {message}")]
    ParseError {
        message: String,
    },

    #[error("The schema declares `{type_name}` as its {kind} root type, but no such object type exists")]
    UndefinedRootType {
        kind: OperationKind,
        type_name: String,
    },
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum SchemaCheckError {
    #[error("Field `{type_name}.{field_name}` requires argument `{argument_name}`")]
    MissingRequiredArgument {
        argument_name: String,
        field_name: String,
        type_name: String,
    },

    #[error("The schema defines no {kind} root type")]
    MissingRootType {
        kind: OperationKind,
    },

    #[error("Field `{type_name}.{field_name}` returns a composite type and needs a selection set")]
    MissingSelectionSet {
        field_name: String,
        type_name: String,
    },

    #[error("Field `{type_name}.{field_name}` returns a leaf type and cannot have a selection set")]
    SelectionOnLeafField {
        field_name: String,
        type_name: String,
    },

    #[error("Field `{type_name}.{field_name}` has no argument named `{argument_name}`")]
    UnknownArgument {
        argument_name: String,
        field_name: String,
        type_name: String,
    },

    #[error("Type `{type_name}` has no field named `{field_name}`")]
    UnknownField {
        field_name: String,
        type_name: String,
    },

    #[error("Type `{type_name}` is referenced but never defined")]
    UnknownType {
        type_name: String,
    },

    #[error(
        "Variable `${variable_name}` of type `{variable_type}` cannot be used for \
        `{field_name}({argument_name}:)`, which expects `{expected_type}`"
    )]
    VariableTypeMismatch {
        argument_name: String,
        expected_type: String,
        field_name: String,
        variable_name: String,
        variable_type: String,
    },
}
