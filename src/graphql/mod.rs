pub mod mutations;
pub mod queries;
pub mod schema;

pub use mutations::MutationRoot;
pub use queries::QueryRoot;
pub use schema::{configure, create_schema, graphiql, graphql_handler, Schema};
