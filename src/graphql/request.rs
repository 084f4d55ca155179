//! # Request Capture & Query Extraction
//!
//! Normalizes one inbound HTTP request into a [`GraphQLRequest`] and pulls
//! the query/variables/operationName out of it by precedence:
//!
//! - GET reads the query string
//! - POST branches on the normalized content-type: `application/json` body,
//!   `application/graphql` body, or a query-string fallback for anything
//!   else (form posts, clients sending `POST /?query=...`)
//!
//! Content-type is authoritative for POST: a JSON body that lacks a `query`
//! field is an extraction failure, never a fall-through to the query string.

use std::collections::HashMap;

use axum::body::Bytes;
use axum::http::header::{ACCEPT, CONTENT_TYPE};
use axum::http::{HeaderMap, Method};
use serde_json::{Map, Value};

use super::errors::{AdapterError, ExtractResult};

/// One inbound request, captured immutably for the adapter.
///
/// Built fresh per request; the body has already been read exactly once by
/// the time this exists.
#[derive(Debug, Clone)]
pub struct GraphQLRequest {
    method: Method,
    accepts_html: bool,
    content_type: Option<String>,
    query_params: HashMap<String, String>,
    raw_body: Bytes,
}

/// The extracted GraphQL operation, ready for the engine
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedQuery {
    pub query: String,
    pub variables: Map<String, Value>,
    pub operation_name: Option<String>,
}

/// Lowercase the media type and strip parameters (`; charset=...`)
fn normalize_content_type(headers: &HeaderMap) -> Option<String> {
    let raw = headers.get(CONTENT_TYPE)?.to_str().ok()?;
    let media_type = raw.split(';').next().unwrap_or("").trim();
    if media_type.is_empty() {
        return None;
    }
    Some(media_type.to_ascii_lowercase())
}

impl GraphQLRequest {
    /// Capture a request from its already-extracted parts
    pub fn new(
        method: Method,
        headers: &HeaderMap,
        query_params: HashMap<String, String>,
        raw_body: Bytes,
    ) -> Self {
        let accepts_html = headers
            .get(ACCEPT)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.contains("text/html"))
            .unwrap_or(false);

        Self {
            method,
            accepts_html,
            content_type: normalize_content_type(headers),
            query_params,
            raw_body,
        }
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Whether the Accept header asked for `text/html`
    pub fn accepts_html(&self) -> bool {
        self.accepts_html
    }

    /// Normalized media type, if a Content-Type header was sent
    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    /// Extract the query by the precedence rules above.
    ///
    /// Fails with a typed [`AdapterError`] on any malformed input; never
    /// panics on bad bytes.
    pub fn extract(&self) -> ExtractResult<ExtractedQuery> {
        if self.method == Method::GET {
            self.extract_from_params()
        } else if self.method == Method::POST {
            match self.content_type() {
                Some("application/json") => self.extract_from_json_body(),
                Some("application/graphql") => self.extract_from_raw_body(),
                // Form posts and bare `POST /?query=...` fall back to the
                // query string; without one the content-type is rejected.
                _ => {
                    if self.query_params.contains_key("query") {
                        self.extract_from_params()
                    } else {
                        Err(AdapterError::UnsupportedMediaType)
                    }
                }
            }
        } else {
            Err(AdapterError::MethodNotAllowed)
        }
    }

    /// GET path (and POST query-string fallback)
    fn extract_from_params(&self) -> ExtractResult<ExtractedQuery> {
        let query = self
            .query_params
            .get("query")
            .ok_or(AdapterError::NoQueryFound)?
            .clone();

        let variables = match self.query_params.get("variables") {
            Some(raw) => parse_variables(raw)?,
            None => Map::new(),
        };

        Ok(ExtractedQuery {
            query,
            variables,
            operation_name: self.query_params.get("operationName").cloned(),
        })
    }

    /// POST `application/json` path
    fn extract_from_json_body(&self) -> ExtractResult<ExtractedQuery> {
        let body: Value = serde_json::from_slice(&self.raw_body)
            .map_err(|e| AdapterError::InvalidRequest(format!("Malformed JSON body: {}", e)))?;

        let obj = body.as_object().ok_or_else(|| {
            AdapterError::InvalidRequest("JSON body must be an object".to_string())
        })?;

        let query = match obj.get("query") {
            Some(Value::String(q)) => q.clone(),
            Some(Value::Null) | None => return Err(AdapterError::NoQueryFound),
            Some(_) => {
                return Err(AdapterError::InvalidRequest(
                    "\"query\" must be a string".to_string(),
                ))
            }
        };

        let variables = match obj.get("variables") {
            Some(Value::Object(map)) => map.clone(),
            Some(Value::Null) | None => Map::new(),
            Some(_) => {
                return Err(AdapterError::InvalidRequest(
                    "\"variables\" must be an object".to_string(),
                ))
            }
        };

        let operation_name = match obj.get("operationName") {
            Some(Value::String(name)) => Some(name.clone()),
            Some(Value::Null) | None => None,
            Some(_) => {
                return Err(AdapterError::InvalidRequest(
                    "\"operationName\" must be a string".to_string(),
                ))
            }
        };

        Ok(ExtractedQuery {
            query,
            variables,
            operation_name,
        })
    }

    /// POST `application/graphql` path: the whole body is the query
    fn extract_from_raw_body(&self) -> ExtractResult<ExtractedQuery> {
        let query = std::str::from_utf8(&self.raw_body)
            .map_err(|_| AdapterError::InvalidRequest("Body is not valid UTF-8".to_string()))?;

        if query.is_empty() {
            return Err(AdapterError::NoQueryFound);
        }

        Ok(ExtractedQuery {
            query: query.to_string(),
            variables: Map::new(),
            operation_name: None,
        })
    }
}

/// Parse the `variables` query parameter as a JSON object
fn parse_variables(raw: &str) -> ExtractResult<Map<String, Value>> {
    let value: Value = serde_json::from_str(raw)
        .map_err(|e| AdapterError::InvalidRequest(format!("Malformed \"variables\": {}", e)))?;
    match value {
        Value::Object(map) => Ok(map),
        Value::Null => Ok(Map::new()),
        _ => Err(AdapterError::InvalidRequest(
            "\"variables\" must be a JSON object".to_string(),
        )),
    }
}
