use miette::NamedSource;
use std::sync::Arc;

use crate::diagnostics::SourceArc;

/// Named source text handed to the parser, used for error reporting.
#[derive(Debug, Clone)]
pub struct SourceContext {
    pub name: String,
    pub content: String,
}

impl SourceContext {
    /// Source read from a file; `name` is what diagnostics display.
    pub fn from_file(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }

    /// Source with no backing file.
    pub fn anonymous(content: impl Into<String>) -> Self {
        Self {
            name: "<input>".to_string(),
            content: content.into(),
        }
    }

    /// Same name, different text. Used once comments have been stripped so
    /// spans and snippets agree.
    pub fn with_content(&self, content: impl Into<String>) -> Self {
        Self {
            name: self.name.clone(),
            content: content.into(),
        }
    }

    pub fn to_named_source(&self) -> SourceArc {
        Arc::new(NamedSource::new(self.name.clone(), self.content.clone()))
    }
}

impl Default for SourceContext {
    fn default() -> Self {
        Self::anonymous("")
    }
}
