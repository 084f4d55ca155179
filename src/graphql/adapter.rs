//! # Request Adapter
//!
//! The protocol state machine: explorer negotiation, method validation,
//! query extraction, engine invocation and result mapping.
//!
//! The adapter is stateless and reentrant. It holds only shared read-only
//! configuration (the engine and the pre-rendered explorer page); nothing
//! request-scoped survives a call to [`GraphQLAdapter::handle`].

use std::sync::Arc;

use axum::http::Method;
use axum::response::{Html, IntoResponse, Response};

use super::context::RequestContext;
use super::engine::ExecutionEngine;
use super::errors::AdapterError;
use super::explorer::ExplorerRenderer;
use super::request::GraphQLRequest;
use super::response::GraphQLResponse;

/// Coordinates one request/response cycle against the execution engine
pub struct GraphQLAdapter<E: ExecutionEngine> {
    engine: Arc<E>,
    explorer: Option<ExplorerRenderer>,
}

impl<E: ExecutionEngine> GraphQLAdapter<E> {
    pub fn new(engine: Arc<E>, explorer: Option<ExplorerRenderer>) -> Self {
        Self { engine, explorer }
    }

    /// Handle one captured request to completion.
    ///
    /// Every failure path maps to a documented status+body pair; malformed
    /// input never propagates as a fault to the host framework.
    pub async fn handle(&self, request: GraphQLRequest, ctx: RequestContext) -> Response {
        // A browser navigating here always sees the explorer, even with a
        // query string present; the engine is never invoked.
        if request.method() == Method::GET && request.accepts_html() {
            if let Some(renderer) = &self.explorer {
                tracing::debug!("serving explorer page");
                return Html(renderer.render().to_string()).into_response();
            }
        }

        if request.method() != Method::GET && request.method() != Method::POST {
            tracing::debug!(method = %request.method(), "rejecting method");
            return AdapterError::MethodNotAllowed.into_response();
        }

        let extracted = match request.extract() {
            Ok(extracted) => extracted,
            Err(err) => {
                tracing::debug!(%err, "query extraction failed");
                return err.into_response();
            }
        };

        // Awaited uniformly; sync engines just return a ready future.
        let result = self
            .engine
            .execute(
                &extracted.query,
                &extracted.variables,
                extracted.operation_name.as_deref(),
                &ctx,
            )
            .await;

        if !result.errors.is_empty() {
            tracing::debug!(errors = result.errors.len(), "execution reported errors");
        }

        GraphQLResponse::from(result).into_response()
    }
}
