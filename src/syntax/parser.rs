//! dotgraph parser - single pass, all or nothing.
//!
//! Walks the graph header, the body block and its statements, feeding every
//! recognised element straight into an [`AttributedGraph`]. The first mandatory
//! element that fails to match aborts the parse with a syntax error; the
//! partially built graph is dropped with the builder.

use crate::diagnostics::{DotError, SourceArc, Span};
use crate::err_ctx;
use crate::graph::{AttributedGraph, GraphKind};
use crate::source::SourceContext;
use crate::syntax::comments::strip_comments;
use crate::syntax::patterns::Pattern;
use crate::syntax::scanner::{Cursor, Token};
use crate::trace::TraceSink;
use crate::value::{coerce, AttributeMap};

// ============================================================================
// PUBLIC API
// ============================================================================

/// Parses a complete graph description, reporting tokens to `trace`.
pub fn parse_source(source: &SourceContext, trace: &mut dyn TraceSink) -> Result<AttributedGraph, DotError> {
    let cleaned = source.with_content(strip_comments(&source.content));
    let named = cleaned.to_named_source();
    GraphBuilder::new(&cleaned.content, named, trace).build()
}

// ============================================================================
// GRAPH BUILDER
// ============================================================================

/// Direction of one statement's edges, from its operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeOp {
    Undirected,
    Directed,
}

impl EdgeOp {
    pub fn is_undirected(self) -> bool {
        matches!(self, EdgeOp::Undirected)
    }
}

struct GraphBuilder<'a, 't> {
    cursor: Cursor<'a>,
    source: SourceArc,
    graph: AttributedGraph,
    trace: &'t mut dyn TraceSink,
}

impl<'a, 't> GraphBuilder<'a, 't> {
    fn new(text: &'a str, source: SourceArc, trace: &'t mut dyn TraceSink) -> Self {
        Self {
            cursor: Cursor::new(text),
            source,
            graph: AttributedGraph::new(),
            trace,
        }
    }

    fn build(mut self) -> Result<AttributedGraph, DotError> {
        self.parse_header()?;
        self.expect(Pattern::BlockBegin, "graph body must open with '{'")?;
        self.emit("--- BLOCK BEGIN ---", None);

        while self.cursor.eat(Pattern::BlockEnd).is_none() {
            self.parse_statement()?;
        }
        self.emit("--- BLOCK END ---", None);
        Ok(self.graph)
    }

    fn parse_header(&mut self) -> Result<(), DotError> {
        let keyword = self.expect(Pattern::GraphKind, "a graph starts with 'graph' or 'digraph'")?;
        // the pattern only admits the two keywords
        let kind = GraphKind::from_keyword(keyword.value).unwrap_or_default();
        self.graph.set_kind(kind);
        self.emit(&format!("TYPE {}", kind), Some(keyword.span));

        let name = self.expect(Pattern::Identifier, "graph names are alphanumeric")?;
        self.graph.set_name(name.value);
        self.emit(&format!("NAME {}", name.value), Some(name.span));
        Ok(())
    }

    /// `source [attrs]? op [attrs]? (target [attrs]? | { (target [attrs]?)* }) ;?`
    fn parse_statement(&mut self) -> Result<(), DotError> {
        let source = self
            .expect(Pattern::Identifier, "each statement starts with a vertex name")?
            .value;
        self.emit(&format!("VERTEX NAME {}", source), None);
        self.graph.add_vertex(source);
        self.parse_vertex_attributes(source)?;

        let op = self.parse_edge_op()?;
        // targets are unknown yet, so edge attributes wait
        let edge_attributes = self.parse_attributes()?.unwrap_or_default();

        if let Some(target) = self.cursor.eat(Pattern::Identifier) {
            self.connect(source, &target, op);
            self.graph
                .set_edge_attributes(source, target.value, op.is_undirected(), edge_attributes);
            self.parse_vertex_attributes(target.value)?;
        } else {
            self.expect(Pattern::BlockBegin, "expected a target vertex name or a '{' target block")?;
            let targets = self.parse_target_block(source, op)?;
            for target in targets {
                self.graph.set_edge_attributes(
                    source,
                    target,
                    op.is_undirected(),
                    edge_attributes.clone(),
                );
            }
        }

        self.cursor.eat(Pattern::Terminator);
        Ok(())
    }

    fn parse_target_block(&mut self, source: &str, op: EdgeOp) -> Result<Vec<&'a str>, DotError> {
        self.emit("--- TARGET BLOCK BEGIN ---", None);
        let mut targets = Vec::new();
        while self.cursor.eat(Pattern::BlockEnd).is_none() {
            let target = self.expect(Pattern::Identifier, "a target block lists vertex names")?;
            self.connect(source, &target, op);
            self.parse_vertex_attributes(target.value)?;
            targets.push(target.value);
        }
        self.emit("--- TARGET BLOCK END ---", None);
        Ok(targets)
    }

    fn connect(&mut self, source: &str, target: &Token<'a>, op: EdgeOp) {
        self.emit(&format!("TARGET VERTEX NAME {}", target.value), Some(target.span));
        self.graph.add_edge(source, target.value, op.is_undirected());
    }

    fn parse_edge_op(&mut self) -> Result<EdgeOp, DotError> {
        let token = self.expect(Pattern::EdgeOp, "vertices are joined by '--' or '->'")?;
        self.emit(&format!("EDGE TYPE {}", token.value), Some(token.span));
        Ok(if token.value == "--" {
            EdgeOp::Undirected
        } else {
            EdgeOp::Directed
        })
    }

    fn parse_vertex_attributes(&mut self, vertex: &str) -> Result<(), DotError> {
        if let Some(attributes) = self.parse_attributes()? {
            self.graph.merge_vertex_attributes(vertex, attributes);
        }
        Ok(())
    }

    /// `[ key = value (, key = value)* ]`, or nothing. Once `[` has matched the
    /// rest of the list is mandatory.
    fn parse_attributes(&mut self) -> Result<Option<AttributeMap>, DotError> {
        if self.cursor.eat(Pattern::AttrListBegin).is_none() {
            return Ok(None);
        }
        let mut attributes = AttributeMap::new();
        if self.cursor.eat(Pattern::AttrListEnd).is_some() {
            return Ok(Some(attributes));
        }

        loop {
            let name = self.expect(Pattern::AttrName, "attributes are written as key=value")?;
            self.emit(&format!("\tATTRIBUTE {}", name.value), Some(name.span));

            let (value, last) = match self.cursor.eat(Pattern::AttrValueEnd) {
                Some(value) => (value, true),
                None => (
                    self.expect(
                        Pattern::AttrValueNext,
                        "an attribute value must be followed by ',' or ']'",
                    )?,
                    false,
                ),
            };
            let raw = unquote(value.value);
            self.emit(&format!("\tVALUE {}", raw), Some(value.span));
            attributes.insert(name.value.to_string(), coerce(raw));

            if last {
                return Ok(Some(attributes));
            }
        }
    }

    fn expect(&mut self, pattern: Pattern, help: &str) -> Result<Token<'a>, DotError> {
        match self.cursor.eat(pattern) {
            Some(token) => Ok(token),
            None => Err(self.syntax_error(pattern, help)),
        }
    }

    fn syntax_error(&self, pattern: Pattern, help: &str) -> DotError {
        let found = if self.cursor.is_at_end() {
            "end of input".to_string()
        } else {
            let span = self.cursor.next_token_span();
            let rest = self.cursor.rest().trim_start();
            format!("'{}'", &rest[..span.len()])
        };
        let message = format!("expected {}, found {}", pattern.describe(), found);
        err_ctx!(Syntax, message, &self.source, self.cursor.next_token_span(), help)
    }

    fn emit(&mut self, text: &str, span: Option<Span>) {
        self.trace.emit(text, span.as_ref());
    }
}

/// Strips one pair of surrounding double quotes.
fn unquote(raw: &str) -> &str {
    raw.strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(raw)
}
