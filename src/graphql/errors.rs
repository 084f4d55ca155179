//! # Adapter Errors
//!
//! Protocol-level failures raised before the execution engine is involved.
//!
//! Every variant maps to exactly one status code and a plain-text body.
//! GraphQL-level errors (syntax, validation, resolver failures) are not
//! represented here: those flow through the JSON envelope in
//! [`response`](super::response).

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Result type for query extraction
pub type ExtractResult<T> = Result<T, AdapterError>;

/// Request-protocol errors, all terminal for the request
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AdapterError {
    /// No source (query string or body) yielded a query
    #[error("No GraphQL query found in the request")]
    NoQueryFound,

    /// A source was present but could not be decoded (malformed JSON body,
    /// non-object variables, invalid UTF-8, ...)
    #[error("{0}")]
    InvalidRequest(String),

    /// Method outside GET/POST
    #[error("Method Not Allowed")]
    MethodNotAllowed,

    /// POST with an unrecognized content-type and no query-string fallback
    #[error("Unsupported Media Type")]
    UnsupportedMediaType,
}

impl AdapterError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AdapterError::NoQueryFound => StatusCode::BAD_REQUEST,
            AdapterError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            AdapterError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AdapterError::UnsupportedMediaType => StatusCode::UNSUPPORTED_MEDIA_TYPE,
        }
    }
}

impl IntoResponse for AdapterError {
    fn into_response(self) -> Response {
        // Plain-text bodies, matching the documented status+body pairs
        (self.status_code(), self.to_string()).into_response()
    }
}
