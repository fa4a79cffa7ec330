//! Checks [`OperationDescriptor`](crate::operation::OperationDescriptor)s
//! against a schema's SDL, the way a code generator would before shipping
//! them: fields must exist, arguments must exist and variable wire types
//! must be accepted where they are used.

mod schema_check_error;
mod schema_index;

pub use schema_check_error::SchemaCheckError;
pub use schema_check_error::SchemaIndexError;
pub use schema_index::IndexedArgument;
pub use schema_index::IndexedField;
pub use schema_index::IndexedType;
pub use schema_index::SchemaIndex;
