//! # Request Context
//!
//! Opaque per-request state passed from host middleware into resolver
//! execution. The adapter never inspects the values; it only carries them.

use std::collections::HashMap;

use serde_json::Value;

/// Per-request context forwarded verbatim into the execution engine.
///
/// Host middleware (authentication, tenancy, tracing ids, ...) builds one of
/// these and stores it in the request extensions before the request reaches
/// the adapter. Resolvers read it back through the engine's context argument.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    values: HashMap<String, Value>,
}

impl RequestContext {
    /// Create an empty context
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a value under a key, replacing any previous value
    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        self.values.insert(key.into(), value);
    }

    /// Builder-style insert
    pub fn with_value(mut self, key: impl Into<String>, value: Value) -> Self {
        self.insert(key, value);
        self
    }

    /// Look up a value by key
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Whether any values have been stored
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_context() {
        let ctx = RequestContext::new();
        assert!(ctx.is_empty());
        assert!(ctx.get("user").is_none());
    }

    #[test]
    fn test_insert_and_get() {
        let mut ctx = RequestContext::new();
        ctx.insert("user", json!("Jane"));
        assert_eq!(ctx.get("user"), Some(&json!("Jane")));
    }

    #[test]
    fn test_builder_style() {
        let ctx = RequestContext::new()
            .with_value("user", json!("Jane"))
            .with_value("tenant", json!(42));
        assert_eq!(ctx.get("tenant"), Some(&json!(42)));
    }

    #[test]
    fn test_insert_replaces() {
        let mut ctx = RequestContext::new();
        ctx.insert("user", json!("Jane"));
        ctx.insert("user", Value::Null);
        assert_eq!(ctx.get("user"), Some(&Value::Null));
    }
}
