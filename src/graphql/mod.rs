//! # GraphQL-over-HTTP Adapter
//!
//! Accepts HTTP requests, extracts a GraphQL query (query string, JSON body,
//! raw `application/graphql` body, or an interactive explorer page for
//! browsers), executes it against an application-supplied
//! [`ExecutionEngine`], and maps the outcome onto the right status code.
//!
//! Everything is request-scoped; the engine and configuration are shared
//! read-only for the process lifetime.

pub mod adapter;
pub mod config;
pub mod context;
pub mod engine;
pub mod errors;
pub mod explorer;
pub mod request;
pub mod response;
pub mod server;

pub use adapter::GraphQLAdapter;
pub use config::GraphQLConfig;
pub use context::RequestContext;
pub use engine::{ErrorLocation, ExecutionEngine, ExecutionResult, GraphQLError};
pub use errors::{AdapterError, ExtractResult};
pub use explorer::ExplorerRenderer;
pub use request::{ExtractedQuery, GraphQLRequest};
pub use response::GraphQLResponse;
pub use server::GraphQLServer;
