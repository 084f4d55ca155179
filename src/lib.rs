//! aeroql - A strict, predictable GraphQL-over-HTTP adapter for axum
//!
//! The crate turns an application-supplied execution engine into an HTTP
//! endpoint: see [`graphql`] for the adapter, its configuration and the
//! engine contract.

pub mod graphql;
