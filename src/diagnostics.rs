//! Unified, `miette`-based diagnostics for dotgraph.
//!
//! Every failure the crate reports is a [`DotError`]. Parse-time failures are
//! always [`DotError::Syntax`] and carry the source they were raised against so
//! they render with a labelled snippet. Query-time failures ([`DotError::Lookup`],
//! [`DotError::Coercion`]) are ordinary recoverable results.
//!
//! Build errors with the `err_msg!` and `err_ctx!` macros rather than by hand:
//!
//! - `err_msg!(Lookup, "vertex {} has no attributes", vertex)`
//! - `err_ctx!(Syntax, "expected graph name", src, span)`
//! - `err_ctx!(Syntax, "expected graph name", src, span, help)`

use std::fmt;
use std::sync::Arc;

use miette::{Diagnostic, LabeledSpan, NamedSource, SourceCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub type SourceArc = Arc<NamedSource<String>>;

/// Byte range into the comment-stripped source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Zero-width span at `pos`.
    pub fn point(pos: usize) -> Self {
        Self {
            start: pos,
            end: pos,
        }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Type-safe classification of a [`DotError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorType {
    /// A mandatory grammar element failed to match.
    Syntax,
    /// An attribute was requested for a vertex, edge or key that was never set.
    Lookup,
    /// An attribute value could not be read as a number.
    Coercion,
    /// Reading the input failed.
    Io,
    /// One or more files in a batch check failed.
    Check,
}

impl ErrorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::Syntax => "Syntax",
            ErrorType::Lookup => "Lookup",
            ErrorType::Coercion => "Coercion",
            ErrorType::Io => "Io",
            ErrorType::Check => "Check",
        }
    }
}

impl fmt::Display for ErrorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Source, span and help attached to a syntax error.
#[derive(Debug, Default)]
pub struct ErrorContext {
    pub source: Option<SourceArc>,
    pub span: Option<Span>,
    pub help: Option<String>,
}

impl ErrorContext {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn with_source_and_span(source: SourceArc, span: Span) -> Self {
        Self {
            source: Some(source),
            span: Some(span),
            help: None,
        }
    }

    pub fn with_all(source: SourceArc, span: Span, help: String) -> Self {
        Self {
            source: Some(source),
            span: Some(span),
            help: Some(help),
        }
    }
}

#[derive(Debug, Error)]
pub enum DotError {
    #[error("Syntax error: {message}")]
    Syntax { message: String, ctx: ErrorContext },
    #[error("Lookup error: {message}")]
    Lookup { message: String },
    #[error("Coercion error: {message}")]
    Coercion { message: String },
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Check failed: {message}")]
    Check { message: String },
}

impl DotError {
    pub fn error_type(&self) -> ErrorType {
        match self {
            DotError::Syntax { .. } => ErrorType::Syntax,
            DotError::Lookup { .. } => ErrorType::Lookup,
            DotError::Coercion { .. } => ErrorType::Coercion,
            DotError::Io { .. } => ErrorType::Io,
            DotError::Check { .. } => ErrorType::Check,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            DotError::Syntax { message, .. }
            | DotError::Lookup { message }
            | DotError::Coercion { message }
            | DotError::Io { message, .. }
            | DotError::Check { message } => message,
        }
    }

    /// Span of the offending input, for syntax errors.
    pub fn span(&self) -> Option<Span> {
        match self {
            DotError::Syntax { ctx, .. } => ctx.span,
            _ => None,
        }
    }

    pub fn io(path: impl fmt::Display, source: std::io::Error) -> Self {
        DotError::Io {
            message: format!("failed to read {}", path),
            source,
        }
    }

    fn ctx(&self) -> Option<&ErrorContext> {
        match self {
            DotError::Syntax { ctx, .. } => Some(ctx),
            _ => None,
        }
    }
}

impl Diagnostic for DotError {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match self.error_type() {
            ErrorType::Syntax => "dotgraph::syntax",
            ErrorType::Lookup => "dotgraph::lookup",
            ErrorType::Coercion => "dotgraph::coercion",
            ErrorType::Io => "dotgraph::io",
            ErrorType::Check => "dotgraph::check",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.ctx()?
            .help
            .as_ref()
            .map(|h| Box::new(h) as Box<dyn fmt::Display + 'a>)
    }

    fn source_code(&self) -> Option<&dyn SourceCode> {
        self.ctx()?
            .source
            .as_ref()
            .map(|s| &**s as &dyn SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let ctx = self.ctx()?;
        let span = ctx.span?;
        // miette needs a visible width even at end of input
        let len = span.len().max(1);
        let label = LabeledSpan::new(Some(self.message().to_string()), span.start, len);
        Some(Box::new(std::iter::once(label)))
    }
}

/// Constructs a message-only `DotError` variant.
#[macro_export]
macro_rules! err_msg {
    ($variant:ident, $msg:expr, $($arg:expr),+ $(,)?) => {
        $crate::DotError::$variant {
            message: format!($msg, $($arg),+),
        }
    };
    ($variant:ident, $msg:expr) => {
        $crate::DotError::$variant {
            message: format!("{}", $msg),
        }
    };
}

/// Constructs a `DotError` variant carrying a source, span and optional help.
#[macro_export]
macro_rules! err_ctx {
    ($variant:ident, $msg:expr, $src:expr, $span:expr, $help:expr) => {
        $crate::DotError::$variant {
            message: $msg.to_string(),
            ctx: $crate::ErrorContext::with_all(
                $crate::diagnostics::SourceArc::clone($src),
                $span,
                format!("{}", $help),
            ),
        }
    };
    ($variant:ident, $msg:expr, $src:expr, $span:expr) => {
        $crate::DotError::$variant {
            message: $msg.to_string(),
            ctx: $crate::ErrorContext::with_source_and_span(
                $crate::diagnostics::SourceArc::clone($src),
                $span,
            ),
        }
    };
}
