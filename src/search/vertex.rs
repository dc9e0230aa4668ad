use std::fmt;
use std::hash::{Hash, Hasher};

use crate::search::domain::{SearchDomain, DEFAULT_HEURISTIC};
use crate::value::AttributeValue;

/// Cost reported by [`Vertex::cost`] when the domain cannot produce one.
pub const FALLBACK_COST: f64 = 10e9;

/// The interface a search algorithm needs from a state.
///
/// `cost` and `heuristic` are infallible here: implementations decide what a
/// failed lookup means.
pub trait SearchState: Sized {
    fn name(&self) -> &str;
    fn neighbors(&self) -> Vec<Self>;
    fn cost(&self, target: &Self) -> f64;
    fn heuristic(&self) -> f64;
}

/// A named vertex seen through a [`SearchDomain`].
///
/// Unlike the domain's own lookups, an unconfigured cost is
/// [`FALLBACK_COST`] rather than a unit cost, and text attributes are never
/// read as numbers.
#[derive(Clone, Copy)]
pub struct Vertex<'a> {
    name: &'a str,
    domain: &'a SearchDomain<'a>,
}

impl<'a> Vertex<'a> {
    pub fn new(name: &'a str, domain: &'a SearchDomain<'a>) -> Self {
        Self { name, domain }
    }
}

impl<'a> SearchState for Vertex<'a> {
    fn name(&self) -> &str {
        self.name
    }

    fn neighbors(&self) -> Vec<Self> {
        self.domain
            .neighbors(self.name)
            .iter()
            .map(|n| Vertex::new(n, self.domain))
            .collect()
    }

    /// Cost from a configured function, else the numeric cost attribute on
    /// the edge. Anything else, including no configuration at all, a missing
    /// attribute or a text value, is [`FALLBACK_COST`].
    fn cost(&self, target: &Self) -> f64 {
        let config = self.domain.config();
        if config.cost_fn.is_some() {
            return self
                .domain
                .cost(self.name, target.name)
                .unwrap_or(FALLBACK_COST);
        }
        config
            .cost_key()
            .and_then(|key| {
                self.domain
                    .graph()
                    .get_edge_attribute(self.name, target.name, key)
                    .ok()
            })
            .and_then(AttributeValue::as_number)
            .unwrap_or(FALLBACK_COST)
    }

    /// Heuristic from a configured function, else the numeric heuristic
    /// attribute on the vertex, else `0.0`.
    fn heuristic(&self) -> f64 {
        let config = self.domain.config();
        if config.heuristic_fn.is_some() {
            return self
                .domain
                .heuristic(self.name)
                .unwrap_or(DEFAULT_HEURISTIC);
        }
        config
            .heuristic_key()
            .and_then(|key| self.domain.graph().get_vertex_attribute(self.name, key).ok())
            .and_then(AttributeValue::as_number)
            .unwrap_or(DEFAULT_HEURISTIC)
    }
}

impl PartialEq for Vertex<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Vertex<'_> {}

impl Hash for Vertex<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl fmt::Debug for Vertex<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Vertex").field(&self.name).finish()
    }
}
