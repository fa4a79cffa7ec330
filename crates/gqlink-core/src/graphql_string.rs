/// Implemented by anything that can be written back out as GraphQL source
/// text (wire types, argument values, selections and whole operations).
pub trait ToGraphQLString {
    fn to_graphql_string(&self) -> String;
}
