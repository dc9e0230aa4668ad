//! dotgraph reads a reduced dialect of the DOT graph language and builds an
//! attributed graph that can be queried and handed to a search algorithm.
//!
//! ```rust
//! use dotgraph::{parse, AttributeValue, GraphKind};
//!
//! let graph = parse("digraph ex { s [h=2] -> a; a -> s; }", false).unwrap();
//! assert_eq!(graph.kind(), GraphKind::Digraph);
//! assert_eq!(graph.neighbors("s"), ["a"]);
//! assert_eq!(graph.get_vertex_attribute("s", "h").unwrap(), &AttributeValue::Int(2));
//! ```

use std::path::Path;

pub use crate::diagnostics::{DotError, ErrorContext, ErrorType, Span};
pub use crate::graph::{AttributedGraph, GraphKind};
pub use crate::search::{SearchConfig, SearchDomain, SearchState, Vertex};
pub use crate::source::SourceContext;
pub use crate::syntax::strip_comments;
pub use crate::value::{coerce, AttributeMap, AttributeValue};

pub mod cli;
pub mod diagnostics;
pub mod graph;
pub mod search;
pub mod source;
pub mod syntax;
pub mod trace;
pub mod value;

use crate::trace::{ConsoleSink, NullSink, TraceSink};

/// Parses `text` into a graph. `verbose` prints every recognised token to
/// stdout and has no other effect.
pub fn parse(text: &str, verbose: bool) -> Result<AttributedGraph, DotError> {
    parse_named(SourceContext::anonymous(text), verbose)
}

/// Parses `source`, sending token traces to `trace`.
pub fn parse_with_sink(source: &SourceContext, trace: &mut dyn TraceSink) -> Result<AttributedGraph, DotError> {
    syntax::parse_source(source, trace)
}

/// Reads the file at `path` and parses it; diagnostics name the file.
pub fn parse_file(path: impl AsRef<Path>, verbose: bool) -> Result<AttributedGraph, DotError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| DotError::io(path.display(), e))?;
    parse_named(SourceContext::from_file(path.display().to_string(), content), verbose)
}

fn parse_named(source: SourceContext, verbose: bool) -> Result<AttributedGraph, DotError> {
    if verbose {
        parse_with_sink(&source, &mut ConsoleSink::new())
    } else {
        parse_with_sink(&source, &mut NullSink)
    }
}
