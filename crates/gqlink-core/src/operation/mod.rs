mod field_selection;
mod operation_builder;
mod operation_descriptor;
mod operation_kind;
mod operation_role;
mod variable;

pub use field_selection::FieldSelection;
pub use operation_builder::OperationBuildError;
pub use operation_builder::OperationBuilder;
pub use operation_descriptor::OperationDescriptor;
pub use operation_kind::OperationKind;
pub use operation_role::OperationRole;
pub use variable::Variable;

#[cfg(test)]
mod tests;
