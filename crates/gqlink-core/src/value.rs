use crate::ToGraphQLString;
use indexmap::IndexMap;
use inherent::inherent;

/// An argument value as written inside an operation's selection set.
///
/// [`Value::Var`] is the `$name` binder: it refers to one of the
/// [`Variable`](crate::operation::Variable)s declared on the enclosing
/// operation.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Var(String),
    Int(i64),
    Float(f64),
    String(String),
    Bool(bool),
    Null,
    Enum(String),
    List(Vec<Value>),
    Object(IndexMap<String, Value>),
}
impl Value {
    /// Reference the operation variable named `name` (without the `$`).
    pub fn var(name: impl Into<String>) -> Self {
        Self::Var(name.into())
    }

    pub fn enum_value(name: impl Into<String>) -> Self {
        Self::Enum(name.into())
    }

    pub fn as_str(&self) -> Option<&str> {
        if let Self::String(str) = self {
            Some(str.as_str())
        } else {
            None
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Collect the names of every variable referenced by this value,
    /// including those nested inside lists and input objects.
    pub fn referenced_variable_names<'a>(&'a self, names: &mut Vec<&'a str>) {
        match self {
            Self::Var(name) => names.push(name.as_str()),
            Self::List(values) => {
                for value in values {
                    value.referenced_variable_names(names);
                }
            },
            Self::Object(entries) => {
                for value in entries.values() {
                    value.referenced_variable_names(names);
                }
            },
            Self::Int(_)
                | Self::Float(_)
                | Self::String(_)
                | Self::Bool(_)
                | Self::Null
                | Self::Enum(_) => (),
        }
    }
}

#[inherent]
impl ToGraphQLString for Value {
    pub fn to_graphql_string(&self) -> String {
        match self {
            Self::Var(name) => format!("${name}"),
            Self::Int(int) => int.to_string(),
            Self::Float(float) if float.is_finite() => format!("{float:?}"),
            // GraphQL has no literal for NaN or the infinities.
            Self::Float(_) => "null".to_string(),
            Self::String(str) => escape_string(str),
            Self::Bool(bool) => bool.to_string(),
            Self::Null => "null".to_string(),
            Self::Enum(name) => name.to_owned(),
            Self::List(values) => format!(
                "[{}]",
                values.iter()
                    .map(|value| value.to_graphql_string())
                    .collect::<Vec<_>>()
                    .join(", "),
            ),
            Self::Object(entries) => format!(
                "{{{}}}",
                entries.iter()
                    .map(|(key, value)| format!("{key}: {}", value.to_graphql_string()))
                    .collect::<Vec<_>>()
                    .join(", "),
            ),
        }
    }
}

fn escape_string(str: &str) -> String {
    let mut escaped = String::with_capacity(str.len() + 2);
    escaped.push('"');
    for ch in str.chars() {
        match ch {
            '"' => escaped.push_str("\\\""),
            '\\' => escaped.push_str("\\\\"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            '\u{08}' => escaped.push_str("\\b"),
            '\u{0C}' => escaped.push_str("\\f"),
            ch if ch.is_control() => {
                escaped.push_str(&format!("\\u{:04X}", ch as u32));
            },
            ch => escaped.push(ch),
        }
    }
    escaped.push('"');
    escaped
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Int(value.into())
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}
