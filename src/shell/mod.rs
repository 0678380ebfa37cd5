// Composition root for the court board.
//
// Responsibilities
// - Read config from the environment.
// - Wire the match store into the use case handlers.
// - Expose the HTTP routes and the GraphQL schema.

pub mod config;
pub mod graphql;
pub mod http;
pub mod state;
