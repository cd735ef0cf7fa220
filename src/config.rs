//! Execution limits. Not part of the source this core is modeled on — a
//! conventional ambient addition for running untrusted query documents —
//! but built the same builder-plus-`Default` way the rest of the schema
//! construction API is: see `schema::builder::SchemaBuilder`.

/// Limits enforced while executing a single request.
#[derive(Debug, Clone)]
pub struct ExecutionConfig {
    /// Stop recording new execution errors once this many have accumulated,
    /// so a pathological document (e.g. a huge list of failing resolvers)
    /// can't grow the error list unboundedly. Does not stop execution
    /// itself — only further error recording.
    pub max_errors: usize,

    /// Whether `__schema`/`__type` resolve at all. `__typename` is always
    /// available regardless of this flag; it's not introspection over the
    /// schema's shape, only a name lookup on the current object.
    pub introspection_enabled: bool,

    /// Maximum nesting depth of selection sets a query may contain.
    /// Exceeding it is logged via `log_support::warn_depth_exceeded` and
    /// reported as a single execution error rather than silently truncated.
    pub max_selection_depth: usize,
}

impl Default for ExecutionConfig {
    fn default() -> Self {
        ExecutionConfig { max_errors: 100, introspection_enabled: true, max_selection_depth: 64 }
    }
}

impl ExecutionConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn max_errors(mut self, max_errors: usize) -> Self {
        self.max_errors = max_errors;
        self
    }

    pub fn introspection_enabled(mut self, enabled: bool) -> Self {
        self.introspection_enabled = enabled;
        self
    }

    pub fn max_selection_depth(mut self, depth: usize) -> Self {
        self.max_selection_depth = depth;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_allows_introspection() {
        let config = ExecutionConfig::default();
        assert!(config.introspection_enabled);
        assert_eq!(config.max_errors, 100);
    }

    #[test]
    fn builder_overrides_defaults() {
        let config = ExecutionConfig::new().max_errors(5).introspection_enabled(false).max_selection_depth(8);
        assert_eq!(config.max_errors, 5);
        assert!(!config.introspection_enabled);
        assert_eq!(config.max_selection_depth, 8);
    }
}
