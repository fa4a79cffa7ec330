/// The JSON body a GraphQL endpoint answers with.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct GraphQLResponse {
    #[serde(default)]
    pub data: Option<serde_json::Value>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<GraphQLError>,
}
impl GraphQLResponse {
    /// The value selected under the root field `response_key`, if the
    /// response carries one.
    pub fn root_field(&self, response_key: &str) -> Option<&serde_json::Value> {
        self.data.as_ref()
            .and_then(|data| data.get(response_key))
            .filter(|value| !value.is_null())
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct GraphQLError {
    pub message: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub path: Vec<serde_json::Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<serde_json::Value>,
}
impl std::fmt::Display for GraphQLError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.path.is_empty() {
            f.write_str(&self.message)
        } else {
            let path = self.path.iter()
                .map(|segment| match segment {
                    serde_json::Value::String(key) => key.to_owned(),
                    other => other.to_string(),
                })
                .collect::<Vec<_>>()
                .join(".");
            write!(f, "{} (at {path})", self.message)
        }
    }
}
