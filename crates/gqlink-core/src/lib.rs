pub mod ast;
mod graphql_string;
pub mod operation;
pub mod schema_check;
pub mod types;
mod value;

pub use graphql_string::ToGraphQLString;
pub use value::Value;
