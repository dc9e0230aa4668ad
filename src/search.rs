//! Read-only adapter exposing a parsed graph to external search algorithms.
//!
//! [`SearchDomain`] answers neighbour, cost and heuristic queries against a
//! finished graph. [`Vertex`] is the per-state boundary object a search library
//! walks through the [`SearchState`] trait.

pub mod config;
pub mod domain;
pub mod vertex;

pub use config::{CostFn, HeuristicFn, SearchConfig};
pub use domain::{SearchDomain, DEFAULT_HEURISTIC, UNIT_COST};
pub use vertex::{SearchState, Vertex, FALLBACK_COST};
