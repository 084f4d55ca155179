//! aeroql demo server entry point
//!
//! Serves a fixed single-field schema so the adapter can be exercised
//! end-to-end (curl, a browser hitting the explorer, a GraphQL client).
//! Real applications depend on the library and bring their own engine.

use async_trait::async_trait;
use clap::Parser;
use serde_json::{json, Map, Value};

use aeroql::graphql::{
    ExecutionEngine, ExecutionResult, GraphQLConfig, GraphQLError, GraphQLServer, RequestContext,
};

#[derive(Parser)]
#[command(name = "aeroql", about = "Demo GraphQL-over-HTTP server")]
struct Args {
    /// Host to bind to
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Port to bind to
    #[arg(long, default_value_t = 4000)]
    port: u16,

    /// Route to mount the adapter at
    #[arg(long, default_value = "/")]
    path: String,
}

/// Toy engine answering `{ hello }` only
struct DemoEngine;

#[async_trait]
impl ExecutionEngine for DemoEngine {
    async fn execute(
        &self,
        query: &str,
        _variables: &Map<String, Value>,
        _operation_name: Option<&str>,
        _ctx: &RequestContext,
    ) -> ExecutionResult {
        if query.split_whitespace().collect::<String>() == "{hello}" {
            ExecutionResult::ok(json!({"hello": "Hello stranger"}))
        } else {
            ExecutionResult::rejected(vec![GraphQLError::new(
                "The demo schema only supports { hello }",
            )])
        }
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "aeroql=info,tower_http=info".into()),
        )
        .init();

    let args = Args::parse();
    let config = GraphQLConfig {
        host: args.host,
        port: args.port,
        path: args.path,
        ..Default::default()
    };

    let server = GraphQLServer::with_config(DemoEngine, config);
    if let Err(e) = server.start().await {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
