//! # Response Envelope
//!
//! The JSON body shape for execution responses and its HTTP status rules.
//!
//! Every execution response carries both keys: `errors` is an explicit
//! `null` on full success, never omitted. Partial success (data plus field
//! errors) is still HTTP 200; only a query that was rejected before any
//! field resolved (`data: null`) maps to 400.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::Value;

use super::engine::{ExecutionResult, GraphQLError};

/// JSON envelope for one execution outcome
#[derive(Debug, Clone, Serialize)]
pub struct GraphQLResponse {
    pub data: Value,
    /// `None` serializes as `"errors": null`
    pub errors: Option<Vec<GraphQLError>>,
}

impl GraphQLResponse {
    /// HTTP status for this envelope
    pub fn status(&self) -> StatusCode {
        if self.data.is_null() && self.errors.is_some() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::OK
        }
    }
}

impl From<ExecutionResult> for GraphQLResponse {
    fn from(result: ExecutionResult) -> Self {
        let errors = if result.errors.is_empty() {
            None
        } else {
            Some(result.errors)
        };
        Self {
            data: result.data,
            errors,
        }
    }
}

impl IntoResponse for GraphQLResponse {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, Json(self)).into_response()
    }
}
