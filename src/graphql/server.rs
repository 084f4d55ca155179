//! # GraphQL HTTP Server
//!
//! Axum wiring for the adapter: builds the router (one `any`-method route,
//! so the adapter owns method validation), applies CORS and request tracing,
//! and serves.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{Extension, Query, State};
use axum::http::{HeaderMap, Method};
use axum::response::Response;
use axum::routing::any;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::adapter::GraphQLAdapter;
use super::config::GraphQLConfig;
use super::context::RequestContext;
use super::engine::ExecutionEngine;
use super::explorer::ExplorerRenderer;
use super::request::GraphQLRequest;

/// GraphQL server: one engine, one route
pub struct GraphQLServer<E: ExecutionEngine> {
    adapter: Arc<GraphQLAdapter<E>>,
    config: GraphQLConfig,
}

impl<E: ExecutionEngine + 'static> GraphQLServer<E> {
    /// Create a server with default configuration
    pub fn new(engine: E) -> Self {
        Self::with_config(engine, GraphQLConfig::default())
    }

    /// Create a server with custom configuration
    pub fn with_config(engine: E, config: GraphQLConfig) -> Self {
        Self::from_shared(Arc::new(engine), config)
    }

    /// Create a server around an engine the caller keeps a handle on
    pub fn from_shared(engine: Arc<E>, config: GraphQLConfig) -> Self {
        let explorer = config
            .explorer
            .then(|| ExplorerRenderer::new(&config.path));
        let adapter = Arc::new(GraphQLAdapter::new(engine, explorer));
        Self { adapter, config }
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Build the Axum router
    pub fn router(&self) -> Router {
        // Configure CORS from config; no origins means permissive (dev)
        let cors = if self.config.cors_origins.is_empty() {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            use tower_http::cors::AllowOrigin;
            let origins: Vec<_> = self
                .config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        Router::new()
            .route(&self.config.path, any(graphql_handler::<E>))
            .layer(TraceLayer::new_for_http())
            .layer(cors)
            .with_state(self.adapter.clone())
    }

    /// Bind and serve until the process exits
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr: SocketAddr = self
            .config
            .socket_addr()
            .parse()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;

        tracing::info!(%addr, path = %self.config.path, "starting GraphQL server");

        let router = self.router();
        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, router).await?;

        Ok(())
    }
}

/// The single route handler. Reads the body exactly once, recovers the
/// middleware-injected context (empty if none), and hands off to the
/// adapter.
async fn graphql_handler<E: ExecutionEngine + 'static>(
    State(adapter): State<Arc<GraphQLAdapter<E>>>,
    method: Method,
    Query(params): Query<HashMap<String, String>>,
    headers: HeaderMap,
    ctx: Option<Extension<RequestContext>>,
    body: Bytes,
) -> Response {
    let ctx = ctx.map(|Extension(c)| c).unwrap_or_default();
    let request = GraphQLRequest::new(method, &headers, params, body);
    adapter.handle(request, ctx).await
}
