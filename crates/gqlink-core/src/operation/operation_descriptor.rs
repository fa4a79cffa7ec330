use crate::ToGraphQLString;
use crate::operation::FieldSelection;
use crate::operation::OperationBuilder;
use crate::operation::OperationKind;
use crate::operation::OperationRole;
use crate::operation::Variable;
use indexmap::IndexMap;
use inherent::inherent;

/// An immutable description of one GraphQL query, mutation or subscription:
/// which fields to request and which variables the caller must bind.
///
/// Descriptors are only produced by [`OperationBuilder::build()`], so every
/// descriptor has a non-empty selection set and a variable table that
/// matches the `$name` references in its field tree exactly.
#[derive(Clone, Debug, PartialEq)]
pub struct OperationDescriptor {
    pub(super) kind: OperationKind,
    pub(super) name: Option<String>,
    pub(super) role: OperationRole,
    pub(super) selection_set: Vec<FieldSelection>,
    pub(super) variables: IndexMap<String, Variable>,
}
impl OperationDescriptor {
    /// Convenience wrapper around [`OperationBuilder::new()`] for a named
    /// query.
    pub fn query(name: impl Into<String>) -> OperationBuilder {
        OperationBuilder::new(OperationKind::Query).set_name(Some(name.into()))
    }

    /// Convenience wrapper around [`OperationBuilder::new()`] for a named
    /// mutation.
    pub fn mutation(name: impl Into<String>) -> OperationBuilder {
        OperationBuilder::new(OperationKind::Mutation).set_name(Some(name.into()))
    }

    pub fn kind(&self) -> OperationKind {
        self.kind
    }

    /// Access the name of this operation (if one was specified).
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn role(&self) -> OperationRole {
        self.role
    }

    /// The root fields selected by this operation.
    pub fn selection_set(&self) -> &[FieldSelection] {
        &self.selection_set
    }

    /// The variables defined on this operation, in declaration order.
    pub fn variables(&self) -> &IndexMap<String, Variable> {
        &self.variables
    }

    /// Every `$name` referenced anywhere in the field tree, in document
    /// order and without duplicates.
    pub fn referenced_variable_names(&self) -> Vec<&str> {
        let mut names = vec![];
        for selection in &self.selection_set {
            selection.referenced_variable_names(&mut names);
        }
        let mut seen = std::collections::HashSet::new();
        names.retain(|name| seen.insert(*name));
        names
    }
}

#[inherent]
impl ToGraphQLString for OperationDescriptor {
    pub fn to_graphql_string(&self) -> String {
        let mut out = String::from(self.kind.keyword());
        if let Some(name) = &self.name {
            out.push(' ');
            out.push_str(name);
        }
        if !self.variables.is_empty() {
            out.push('(');
            out.push_str(
                &self.variables.values()
                    .map(|var| var.to_graphql_string())
                    .collect::<Vec<_>>()
                    .join(", "),
            );
            out.push(')');
        }
        out.push_str(" {\n");
        for selection in &self.selection_set {
            selection.write_graphql(&mut out, 1);
        }
        out.push('}');
        out
    }
}
