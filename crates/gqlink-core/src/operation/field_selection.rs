use crate::ToGraphQLString;
use crate::Value;
use inherent::inherent;

/// One selected field, with its arguments and (for object-typed fields) the
/// nested fields selected beneath it.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldSelection {
    pub(super) alias: Option<String>,
    pub(super) arguments: Vec<(String, Value)>,
    pub(super) name: String,
    pub(super) selection_set: Vec<FieldSelection>,
}
impl FieldSelection {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            alias: None,
            arguments: vec![],
            name: name.into(),
            selection_set: vec![],
        }
    }

    /// Add an argument after any previously added arguments.
    ///
    /// Duplicate argument names are kept here and reported when the
    /// enclosing operation is built.
    pub fn with_arg(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.arguments.push((name.into(), value.into()));
        self
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    /// Add a nested [`FieldSelection`] after any previously added ones.
    pub fn select(mut self, selection: FieldSelection) -> Self {
        self.selection_set.push(selection);
        self
    }

    /// Add several argument-less leaf fields at once.
    pub fn select_fields<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selection_set.extend(names.into_iter().map(FieldSelection::new));
        self
    }

    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    pub fn argument(&self, name: &str) -> Option<&Value> {
        self.arguments.iter()
            .find(|(arg_name, _)| arg_name == name)
            .map(|(_, value)| value)
    }

    pub fn arguments(&self) -> &[(String, Value)] {
        &self.arguments
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// If an alias was specified for this selection, return the alias.
    /// Otherwise return the name of the field.
    pub fn selected_name(&self) -> &str {
        self.alias().unwrap_or_else(|| self.name())
    }

    pub fn selection_set(&self) -> &[FieldSelection] {
        &self.selection_set
    }

    pub(crate) fn referenced_variable_names<'a>(&'a self, names: &mut Vec<&'a str>) {
        for (_, value) in &self.arguments {
            value.referenced_variable_names(names);
        }
        for child in &self.selection_set {
            child.referenced_variable_names(names);
        }
    }

    pub(crate) fn write_graphql(&self, out: &mut String, depth: usize) {
        let indent = "  ".repeat(depth);
        out.push_str(&indent);
        if let Some(alias) = &self.alias {
            out.push_str(alias);
            out.push_str(": ");
        }
        out.push_str(&self.name);

        if !self.arguments.is_empty() {
            out.push('(');
            out.push_str(
                &self.arguments.iter()
                    .map(|(name, value)| format!("{name}: {}", value.to_graphql_string()))
                    .collect::<Vec<_>>()
                    .join(", "),
            );
            out.push(')');
        }

        if !self.selection_set.is_empty() {
            out.push_str(" {\n");
            for child in &self.selection_set {
                child.write_graphql(out, depth + 1);
            }
            out.push_str(&indent);
            out.push('}');
        }
        out.push('\n');
    }
}

#[inherent]
impl ToGraphQLString for FieldSelection {
    pub fn to_graphql_string(&self) -> String {
        let mut out = String::new();
        self.write_graphql(&mut out, 0);
        out
    }
}
