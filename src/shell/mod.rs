// Composition root for the case_information bounded context.
//
// Responsibilities
// - Read config from file and environment.
// - Instantiate the command gateway.
// - Wire the gateway into the use case handlers.
// - Expose the handlers over HTTP and GraphQL.

pub mod config;
pub mod graphql;
pub mod http;
pub mod state;
