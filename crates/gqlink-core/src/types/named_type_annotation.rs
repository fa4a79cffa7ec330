#[derive(Clone, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct NamedTypeAnnotation {
    pub(super) name: String,
    pub(super) nullable: bool,
}

impl NamedTypeAnnotation {
    pub fn graphql_type_name(&self) -> &str {
        self.name.as_str()
    }

    /// Check if two named type annotations are definitionally equal.
    ///
    /// Two named type annotations are equivalent if they have:
    /// - Same type name
    /// - Same nullability
    pub fn is_equivalent_to(&self, other: &Self) -> bool {
        self.nullable == other.nullable && self.name == other.name
    }

    pub fn nullable(&self) -> bool {
        self.nullable
    }

    pub fn to_graphql_string(&self) -> String {
        format!(
            "{}{}",
            self.name,
            if self.nullable { "" } else { "!" },
        )
    }
}
