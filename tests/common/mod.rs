//! Shared test fixtures: a stub execution engine with a two-field schema.
//!
//! The engine understands flat selection sets like `{ hello whoami }` just
//! well enough to exercise the adapter's protocol behavior:
//! - `hello` resolves to "Hello stranger"
//! - `whoami` reads the middleware-injected `user` context value
//! - `boom` resolves to null and reports a field error (partial success)
//! - anything else is rejected at validation with a located error
//!
//! With `async_resolvers` set, the engine yields back to the runtime before
//! resolving, so tests can compare sync and async execution byte for byte.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use serde_json::{json, Map, Value};

use aeroql::graphql::{ExecutionEngine, ExecutionResult, GraphQLError, RequestContext};

pub struct StubSchema {
    pub async_resolvers: bool,
    pub executions: AtomicUsize,
}

impl StubSchema {
    pub fn sync() -> Self {
        Self {
            async_resolvers: false,
            executions: AtomicUsize::new(0),
        }
    }

    pub fn with_async_resolvers() -> Self {
        Self {
            async_resolvers: true,
            executions: AtomicUsize::new(0),
        }
    }

    pub fn execution_count(&self) -> usize {
        self.executions.load(Ordering::SeqCst)
    }
}

/// Pull the field names (with 1-based column positions) out of a flat
/// selection set like `{ hello whoami }`. Anything structurally fancier
/// counts as a syntax error for this stub.
fn parse_selection(query: &str) -> Result<Vec<(String, u32)>, GraphQLError> {
    let trimmed = query.trim();
    if !trimmed.starts_with('{') || !trimmed.ends_with('}') {
        return Err(GraphQLError::at("Syntax Error: expected selection set", 1, 1));
    }

    let mut fields = Vec::new();
    let mut current = String::new();
    let mut start = 0u32;
    for (i, c) in query.char_indices() {
        if c.is_alphanumeric() || c == '_' {
            if current.is_empty() {
                start = i as u32 + 1; // columns are 1-based
            }
            current.push(c);
        } else if !current.is_empty() {
            fields.push((std::mem::take(&mut current), start));
        }
    }
    if !current.is_empty() {
        fields.push((current, start));
    }
    Ok(fields)
}

#[async_trait]
impl ExecutionEngine for StubSchema {
    async fn execute(
        &self,
        query: &str,
        _variables: &Map<String, Value>,
        _operation_name: Option<&str>,
        ctx: &RequestContext,
    ) -> ExecutionResult {
        self.executions.fetch_add(1, Ordering::SeqCst);

        if self.async_resolvers {
            tokio::task::yield_now().await;
        }

        let fields = match parse_selection(query) {
            Ok(fields) => fields,
            Err(err) => return ExecutionResult::rejected(vec![err]),
        };

        // Validation: every field must exist on Query
        for (name, column) in &fields {
            if !matches!(name.as_str(), "hello" | "whoami" | "boom") {
                return ExecutionResult::rejected(vec![GraphQLError::at(
                    format!("Cannot query field \"{}\" on type \"Query\".", name),
                    1,
                    *column,
                )]);
            }
        }

        let mut data = Map::new();
        let mut errors = Vec::new();
        for (name, _) in &fields {
            match name.as_str() {
                "hello" => {
                    data.insert("hello".to_string(), json!("Hello stranger"));
                }
                "whoami" => {
                    let who = match ctx.get("user") {
                        Some(Value::String(user)) => user.clone(),
                        _ => "a mystery".to_string(),
                    };
                    data.insert("whoami".to_string(), json!(who));
                }
                "boom" => {
                    data.insert("boom".to_string(), Value::Null);
                    errors.push(GraphQLError::new("boom blew up"));
                }
                _ => unreachable!("validated above"),
            }
        }

        ExecutionResult::partial(Value::Object(data), errors)
    }
}
