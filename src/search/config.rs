use std::fmt;

use crate::diagnostics::DotError;

/// Caller-supplied edge cost, given origin and target names.
pub type CostFn = Box<dyn Fn(&str, &str) -> Result<f64, DotError>>;

/// Caller-supplied heuristic, given a vertex name.
pub type HeuristicFn = Box<dyn Fn(&str) -> Result<f64, DotError>>;

/// How cost and heuristic values are resolved. A function wins over an
/// attribute key; with neither, the domain defaults apply.
#[derive(Default)]
pub struct SearchConfig {
    pub(crate) cost_fn: Option<CostFn>,
    pub(crate) heuristic_fn: Option<HeuristicFn>,
    pub(crate) cost_key: Option<String>,
    pub(crate) heuristic_key: Option<String>,
}

impl SearchConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cost_fn<F>(mut self, f: F) -> Self
    where
        F: Fn(&str, &str) -> Result<f64, DotError> + 'static,
    {
        self.cost_fn = Some(Box::new(f));
        self
    }

    pub fn with_heuristic_fn<F>(mut self, f: F) -> Self
    where
        F: Fn(&str) -> Result<f64, DotError> + 'static,
    {
        self.heuristic_fn = Some(Box::new(f));
        self
    }

    /// Reads edge costs from this edge attribute.
    pub fn with_cost_key(mut self, key: impl Into<String>) -> Self {
        self.cost_key = Some(key.into());
        self
    }

    /// Reads heuristics from this vertex attribute.
    pub fn with_heuristic_key(mut self, key: impl Into<String>) -> Self {
        self.heuristic_key = Some(key.into());
        self
    }

    pub fn cost_key(&self) -> Option<&str> {
        self.cost_key.as_deref()
    }

    pub fn heuristic_key(&self) -> Option<&str> {
        self.heuristic_key.as_deref()
    }
}

impl fmt::Debug for SearchConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchConfig")
            .field("cost_fn", &self.cost_fn.is_some())
            .field("heuristic_fn", &self.heuristic_fn.is_some())
            .field("cost_key", &self.cost_key)
            .field("heuristic_key", &self.heuristic_key)
            .finish()
    }
}
