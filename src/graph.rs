//! The attributed graph produced by the parser.
//!
//! Vertices are identified by name. Adjacency lists keep discovery order and
//! duplicates. Vertex and edge attribute maps are created on first write, so
//! "no entry" and "empty map" stay distinguishable.
//!
//! Undirected edges are stored as two mirrored directed entries. Mirroring is
//! decided per call through the `undirected` flag, never by [`GraphKind`].

use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

use crate::diagnostics::DotError;
use crate::err_msg;
use crate::value::{AttributeMap, AttributeValue};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GraphKind {
    #[default]
    Graph,
    Digraph,
}

impl GraphKind {
    /// Case-insensitive keyword lookup.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword.to_ascii_lowercase().as_str() {
            "graph" => Some(GraphKind::Graph),
            "digraph" => Some(GraphKind::Digraph),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GraphKind::Graph => "graph",
            GraphKind::Digraph => "digraph",
        }
    }

    pub fn is_directed(&self) -> bool {
        matches!(self, GraphKind::Digraph)
    }
}

impl fmt::Display for GraphKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AttributedGraph {
    name: String,
    kind: GraphKind,
    adjacency: HashMap<String, Vec<String>>,
    vertex_attributes: HashMap<String, AttributeMap>,
    edge_attributes: HashMap<String, HashMap<String, AttributeMap>>,
}

impl AttributedGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_header(kind: GraphKind, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind,
            ..Self::default()
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn kind(&self) -> GraphKind {
        self.kind
    }

    pub fn set_kind(&mut self, kind: GraphKind) {
        self.kind = kind;
    }

    pub fn adjacency(&self) -> &HashMap<String, Vec<String>> {
        &self.adjacency
    }

    /// Ordered successors of `vertex`; empty for unknown vertices.
    pub fn neighbors(&self, vertex: &str) -> &[String] {
        self.adjacency.get(vertex).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Names of every known vertex, sorted.
    pub fn vertices(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .adjacency
            .keys()
            .chain(self.vertex_attributes.keys())
            .map(String::as_str)
            .collect();
        names.sort_unstable();
        names.dedup();
        names
    }

    pub fn contains_vertex(&self, vertex: &str) -> bool {
        self.adjacency.contains_key(vertex) || self.vertex_attributes.contains_key(vertex)
    }

    /// Number of directed adjacency entries; an undirected edge counts twice.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    /// Registers `vertex` with no successors if it is not known yet.
    pub fn add_vertex(&mut self, vertex: &str) {
        if !self.adjacency.contains_key(vertex) {
            self.adjacency.insert(vertex.to_string(), Vec::new());
        }
    }

    /// Appends `target` to `origin`'s successors, and the reverse when `undirected`.
    pub fn add_edge(&mut self, origin: &str, target: &str, undirected: bool) {
        self.add_vertex(target);
        self.adjacency
            .entry(origin.to_string())
            .or_default()
            .push(target.to_string());
        if undirected {
            self.adjacency
                .entry(target.to_string())
                .or_default()
                .push(origin.to_string());
        }
    }

    pub fn vertex_attributes(&self, vertex: &str) -> Option<&AttributeMap> {
        self.vertex_attributes.get(vertex)
    }

    pub fn set_vertex_attribute(
        &mut self,
        vertex: &str,
        key: impl Into<String>,
        value: AttributeValue,
    ) {
        self.vertex_attributes
            .entry(vertex.to_string())
            .or_default()
            .insert(key.into(), value);
    }

    /// Merges `attributes` into the vertex's map, last write per key wins.
    pub fn merge_vertex_attributes(&mut self, vertex: &str, attributes: AttributeMap) {
        if attributes.is_empty() {
            return;
        }
        self.vertex_attributes
            .entry(vertex.to_string())
            .or_default()
            .extend(attributes);
    }

    pub fn get_vertex_attribute(&self, vertex: &str, key: &str) -> Result<&AttributeValue, DotError> {
        let attributes = self
            .vertex_attributes
            .get(vertex)
            .ok_or_else(|| err_msg!(Lookup, "vertex {} has no attributes", vertex))?;
        attributes
            .get(key)
            .ok_or_else(|| err_msg!(Lookup, "vertex {} has no attribute {}", vertex, key))
    }

    /// Replaces the whole attribute map of `origin -> target`.
    ///
    /// Does nothing for an empty map. With `undirected` the same map is also
    /// stored on `target -> origin`.
    pub fn set_edge_attributes(
        &mut self,
        origin: &str,
        target: &str,
        undirected: bool,
        attributes: AttributeMap,
    ) {
        if attributes.is_empty() {
            return;
        }
        if undirected {
            self.set_edge_attributes(target, origin, false, attributes.clone());
        }
        self.edge_attributes
            .entry(origin.to_string())
            .or_default()
            .insert(target.to_string(), attributes);
    }

    /// Attributes stored for exactly `origin -> target`. The reverse direction
    /// is never consulted.
    pub fn get_edge_attributes(&self, origin: &str, target: &str) -> Result<&AttributeMap, DotError> {
        self.edge_attributes
            .get(origin)
            .ok_or_else(|| err_msg!(Lookup, "no edge attributes start at {}", origin))?
            .get(target)
            .ok_or_else(|| err_msg!(Lookup, "edge {} -> {} has no attributes", origin, target))
    }

    /// Sets one key on `origin -> target`, mirroring it only when `undirected`
    /// is set on this call.
    pub fn set_edge_attribute(
        &mut self,
        origin: &str,
        target: &str,
        undirected: bool,
        key: &str,
        value: AttributeValue,
    ) {
        if undirected {
            self.set_edge_attribute(target, origin, false, key, value.clone());
        }
        self.edge_attributes
            .entry(origin.to_string())
            .or_default()
            .entry(target.to_string())
            .or_default()
            .insert(key.to_string(), value);
    }

    pub fn get_edge_attribute(
        &self,
        origin: &str,
        target: &str,
        key: &str,
    ) -> Result<&AttributeValue, DotError> {
        self.get_edge_attributes(origin, target)?.get(key).ok_or_else(|| {
            err_msg!(Lookup, "edge {} -> {} has no attribute {}", origin, target, key)
        })
    }
}
