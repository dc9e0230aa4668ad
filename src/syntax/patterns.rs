//! Anchored patterns for every lexical unit of the grammar.
//!
//! Each pattern only matches at the very start of the remaining text and
//! swallows any leading whitespace first.

use once_cell::sync::Lazy;
use regex::Regex;

/// Any run of spaces, tabs or newlines.
const WS: &str = r"[[:space:]]*";

/// Signed decimal number, bare token, or double-quoted string.
const VALUE: &str = r#"[+-]?(?:\.[[:digit:]]+|[[:digit:]]+(?:\.[[:digit:]]*)?)|[[:alnum:]_]+|"[^"]*""#;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pattern {
    GraphKind,
    Identifier,
    BlockBegin,
    BlockEnd,
    EdgeOp,
    Terminator,
    AttrListBegin,
    AttrListEnd,
    AttrName,
    AttrValueEnd,
    AttrValueNext,
}

impl Pattern {
    pub fn regex(self) -> &'static Regex {
        match self {
            Pattern::GraphKind => &GRAPH_KIND,
            Pattern::Identifier => &IDENTIFIER,
            Pattern::BlockBegin => &BLOCK_BEGIN,
            Pattern::BlockEnd => &BLOCK_END,
            Pattern::EdgeOp => &EDGE_OP,
            Pattern::Terminator => &TERMINATOR,
            Pattern::AttrListBegin => &ATTR_LIST_BEGIN,
            Pattern::AttrListEnd => &ATTR_LIST_END,
            Pattern::AttrName => &ATTR_NAME,
            Pattern::AttrValueEnd => &ATTR_VALUE_END,
            Pattern::AttrValueNext => &ATTR_VALUE_NEXT,
        }
    }

    /// What the pattern stands for, as used in error messages.
    pub fn describe(self) -> &'static str {
        match self {
            Pattern::GraphKind => "graph keyword ('graph' or 'digraph')",
            Pattern::Identifier => "identifier",
            Pattern::BlockBegin => "'{'",
            Pattern::BlockEnd => "'}'",
            Pattern::EdgeOp => "edge operator ('--' or '->')",
            Pattern::Terminator => "';'",
            Pattern::AttrListBegin => "'['",
            Pattern::AttrListEnd => "']'",
            Pattern::AttrName => "attribute name followed by '='",
            Pattern::AttrValueEnd => "attribute value followed by ']'",
            Pattern::AttrValueNext => "attribute value followed by ','",
        }
    }
}

fn anchored(body: &str) -> Regex {
    Regex::new(&format!("^{WS}{body}")).expect("grammar patterns are valid regexes")
}

static GRAPH_KIND: Lazy<Regex> = Lazy::new(|| anchored(r"((?i:digraph|graph))"));
static IDENTIFIER: Lazy<Regex> = Lazy::new(|| anchored(r"([[:alnum:]]+)"));
static BLOCK_BEGIN: Lazy<Regex> = Lazy::new(|| anchored(&format!(r"\{{{WS}")));
static BLOCK_END: Lazy<Regex> = Lazy::new(|| anchored(&format!(r"\}};?{WS}")));
static EDGE_OP: Lazy<Regex> = Lazy::new(|| anchored(r"(--|->)"));
static TERMINATOR: Lazy<Regex> = Lazy::new(|| anchored(&format!(r";{WS}")));
static ATTR_LIST_BEGIN: Lazy<Regex> = Lazy::new(|| anchored(r"\["));
static ATTR_LIST_END: Lazy<Regex> = Lazy::new(|| anchored(r"\]"));
static ATTR_NAME: Lazy<Regex> = Lazy::new(|| anchored(&format!(r"([[:alnum:]_]+){WS}=")));
static ATTR_VALUE_END: Lazy<Regex> = Lazy::new(|| anchored(&format!(r"({VALUE}){WS}\]")));
static ATTR_VALUE_NEXT: Lazy<Regex> = Lazy::new(|| anchored(&format!(r"({VALUE}){WS},")));

/// `//` to end of line, with the whitespace in front of it.
pub static LINE_COMMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!(r"(?m){WS}//.*(?:\n|$)")).expect("valid comment regex"));

/// `/* ... */`, shortest match, possibly spanning lines.
pub static BLOCK_COMMENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"{WS}/\*[^*]*\*+(?:[^/*][^*]*\*+)*/(?:\n|$)?"))
        .expect("valid comment regex")
});
