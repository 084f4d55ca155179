//! # Execution Engine Contract
//!
//! The seam between the HTTP adapter and the GraphQL execution engine.
//!
//! The adapter treats the engine as a black box: it parses, validates and
//! resolves the query however it likes (synchronously or across await
//! points) and reports the outcome as an [`ExecutionResult`]. The adapter
//! awaits every invocation uniformly, so callers never observe whether
//! resolution was sync or async.

use async_trait::async_trait;
use serde::Serialize;
use serde_json::{Map, Value};

use super::context::RequestContext;

/// A line/column position inside the query source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ErrorLocation {
    pub line: u32,
    pub column: u32,
}

/// A single error reported by the engine, passed through to the response
/// body verbatim.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphQLError {
    pub message: String,
    /// Source positions, when the engine can attribute the error to one.
    /// Omitted from the serialized error when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locations: Option<Vec<ErrorLocation>>,
}

impl GraphQLError {
    /// An error with no source position
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            locations: None,
        }
    }

    /// An error attributed to a single source position
    pub fn at(message: impl Into<String>, line: u32, column: u32) -> Self {
        Self {
            message: message.into(),
            locations: Some(vec![ErrorLocation { line, column }]),
        }
    }
}

/// Outcome of executing one query.
///
/// Invariants (owed by engine implementations):
/// - `errors` is non-empty whenever any validation or field resolution failed
/// - `data` is `Value::Null` when the query never passed parse/validation;
///   otherwise it is present, possibly with null leaves for failed fields
#[derive(Debug, Clone, PartialEq)]
pub struct ExecutionResult {
    pub data: Value,
    pub errors: Vec<GraphQLError>,
}

impl ExecutionResult {
    /// A fully successful execution
    pub fn ok(data: Value) -> Self {
        Self {
            data,
            errors: Vec::new(),
        }
    }

    /// Execution that produced data alongside field errors
    pub fn partial(data: Value, errors: Vec<GraphQLError>) -> Self {
        Self { data, errors }
    }

    /// The query was rejected before any field resolved (syntax or
    /// validation failure); `data` is null
    pub fn rejected(errors: Vec<GraphQLError>) -> Self {
        Self {
            data: Value::Null,
            errors,
        }
    }
}

/// The execution engine collaborator.
///
/// Implementations are shared read-only across concurrent requests; the
/// schema and resolver configuration behind them must be immutable after
/// startup.
#[async_trait]
pub trait ExecutionEngine: Send + Sync {
    /// Parse, validate and execute `query` against the schema.
    ///
    /// `ctx` carries host-middleware state (see
    /// [`RequestContext`](super::context::RequestContext)) and must reach
    /// resolvers unmodified.
    async fn execute(
        &self,
        query: &str,
        variables: &Map<String, Value>,
        operation_name: Option<&str>,
        ctx: &RequestContext,
    ) -> ExecutionResult;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_error_without_location_omits_field() {
        let err = GraphQLError::new("boom");
        let value = serde_json::to_value(&err).unwrap();
        assert_eq!(value, json!({"message": "boom"}));
    }

    #[test]
    fn test_error_with_location() {
        let err = GraphQLError::at("bad field", 1, 3);
        let value = serde_json::to_value(&err).unwrap();
        assert_eq!(
            value,
            json!({"message": "bad field", "locations": [{"line": 1, "column": 3}]})
        );
    }

    #[test]
    fn test_constructor_shapes() {
        let ok = ExecutionResult::ok(json!({"hello": "world"}));
        assert!(ok.errors.is_empty());

        let partial = ExecutionResult::partial(
            json!({"hello": null}),
            vec![GraphQLError::new("resolver failed")],
        );
        assert!(!partial.data.is_null());
        assert!(!partial.errors.is_empty());

        let rejected = ExecutionResult::rejected(vec![GraphQLError::at("syntax", 1, 1)]);
        assert!(rejected.data.is_null());
        assert!(!rejected.errors.is_empty());
    }
}
