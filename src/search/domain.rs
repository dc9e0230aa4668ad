use crate::diagnostics::DotError;
use crate::graph::AttributedGraph;
use crate::search::config::SearchConfig;
use crate::search::vertex::Vertex;

/// Cost of an edge when neither a cost function nor a cost key is configured.
pub const UNIT_COST: f64 = 1.0;

/// Heuristic when neither a heuristic function nor a key is configured.
pub const DEFAULT_HEURISTIC: f64 = 0.0;

#[derive(Debug)]
pub struct SearchDomain<'g> {
    graph: &'g AttributedGraph,
    config: SearchConfig,
}

impl<'g> SearchDomain<'g> {
    pub fn new(graph: &'g AttributedGraph, config: SearchConfig) -> Self {
        Self { graph, config }
    }

    pub fn graph(&self) -> &'g AttributedGraph {
        self.graph
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn neighbors(&self, vertex: &str) -> &'g [String] {
        self.graph.neighbors(vertex)
    }

    /// Cost of moving from `origin` to `target`.
    ///
    /// A configured cost key that is missing on the edge is a lookup error; a
    /// value that is not numeric is a coercion error.
    pub fn cost(&self, origin: &str, target: &str) -> Result<f64, DotError> {
        if let Some(cost_fn) = &self.config.cost_fn {
            return cost_fn(origin, target);
        }
        match self.config.cost_key() {
            Some(key) => self.graph.get_edge_attribute(origin, target, key)?.as_f64(),
            None => Ok(UNIT_COST),
        }
    }

    /// Estimated remaining cost from `vertex`.
    pub fn heuristic(&self, vertex: &str) -> Result<f64, DotError> {
        if let Some(heuristic_fn) = &self.config.heuristic_fn {
            return heuristic_fn(vertex);
        }
        match self.config.heuristic_key() {
            Some(key) => self.graph.get_vertex_attribute(vertex, key)?.as_f64(),
            None => Ok(DEFAULT_HEURISTIC),
        }
    }

    pub fn vertex<'a>(&'a self, name: &'a str) -> Vertex<'a> {
        Vertex::new(name, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::AttributeValue;
    use crate::ErrorType;

    fn sample() -> AttributedGraph {
        let mut g = AttributedGraph::new();
        g.add_edge("s", "a", false);
        g.add_edge("a", "t", false);
        g.set_edge_attribute("s", "a", false, "k", AttributeValue::Int(2));
        g.set_edge_attribute("a", "t", false, "k", AttributeValue::Bool(true));
        g.set_vertex_attribute("a", "h", AttributeValue::Float(1.5));
        g
    }

    #[test]
    fn test_defaults_without_config() {
        let g = sample();
        let domain = SearchDomain::new(&g, SearchConfig::new());
        assert_eq!(domain.cost("s", "a").unwrap(), UNIT_COST);
        assert_eq!(domain.heuristic("a").unwrap(), DEFAULT_HEURISTIC);
        assert_eq!(domain.neighbors("s"), ["a"]);
        assert!(domain.neighbors("t").is_empty());
    }

    #[test]
    fn test_cost_key_resolution() {
        let g = sample();
        let domain = SearchDomain::new(&g, SearchConfig::new().with_cost_key("k"));
        assert_eq!(domain.cost("s", "a").unwrap(), 2.0);
        assert_eq!(domain.cost("a", "t").unwrap_err().error_type(), ErrorType::Coercion);
        assert_eq!(domain.cost("t", "s").unwrap_err().error_type(), ErrorType::Lookup);
    }

    #[test]
    fn test_heuristic_key_resolution() {
        let g = sample();
        let domain = SearchDomain::new(&g, SearchConfig::new().with_heuristic_key("h"));
        assert_eq!(domain.heuristic("a").unwrap(), 1.5);
        assert_eq!(domain.heuristic("s").unwrap_err().error_type(), ErrorType::Lookup);
    }

    #[test]
    fn test_function_wins_over_key() {
        let g = sample();
        let config = SearchConfig::new()
            .with_cost_key("k")
            .with_cost_fn(|origin, target| Ok((origin.len() + target.len()) as f64 * 10.0))
            .with_heuristic_key("h")
            .with_heuristic_fn(|_| Ok(42.0));
        let domain = SearchDomain::new(&g, config);
        assert_eq!(domain.cost("s", "a").unwrap(), 20.0);
        assert_eq!(domain.heuristic("a").unwrap(), 42.0);
    }
}
