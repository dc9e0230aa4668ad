//! Diagnostic tracing for the parser.
//!
//! The parser reports every token it recognises to a [`TraceSink`]. Callers pick
//! where that goes: nowhere ([`NullSink`]), into memory ([`TraceBuffer`]), or to
//! the terminal ([`ConsoleSink`]).

use std::io::Write;

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::diagnostics::Span;

pub trait TraceSink {
    fn emit(&mut self, text: &str, span: Option<&Span>);
}

/// Discards everything.
pub struct NullSink;

impl TraceSink for NullSink {
    fn emit(&mut self, _text: &str, _span: Option<&Span>) {}
}

/// Collects trace lines in memory.
#[derive(Debug, Default)]
pub struct TraceBuffer {
    pub lines: Vec<String>,
}

impl TraceBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|l| l.contains(needle))
    }
}

impl TraceSink for TraceBuffer {
    fn emit(&mut self, text: &str, _span: Option<&Span>) {
        self.lines.push(text.to_string());
    }
}

/// Prints each trace line to stdout as `[ text ]`.
pub struct ConsoleSink {
    stream: StandardStream,
}

impl ConsoleSink {
    pub fn new() -> Self {
        Self {
            stream: StandardStream::stdout(ColorChoice::Auto),
        }
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new()
    }
}

impl TraceSink for ConsoleSink {
    fn emit(&mut self, text: &str, span: Option<&Span>) {
        // write failures are ignored, tracing never fails a parse
        let _ = self.stream.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)));
        let _ = write!(self.stream, "[ {} ]", text);
        let _ = self.stream.reset();
        if let Some(span) = span {
            let _ = self
                .stream
                .set_color(ColorSpec::new().set_fg(Some(Color::Black)).set_intense(true));
            let _ = write!(self.stream, " @{}..{}", span.start, span.end);
            let _ = self.stream.reset();
        }
        let _ = writeln!(self.stream);
    }
}
