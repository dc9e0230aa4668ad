//! The scanning primitive every parsing step is built from.

use crate::diagnostics::Span;
use crate::syntax::patterns::Pattern;

/// Read position over immutable source text. Cheap to copy; advancing never
/// mutates the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor<'a> {
    source: &'a str,
    pos: usize,
}

/// A successful match at the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    /// Everything the pattern consumed, surrounding whitespace included.
    pub text: &'a str,
    /// The first capture group if the pattern has one, else `text` trimmed.
    pub value: &'a str,
    /// Where `value` sits in the source.
    pub span: Span,
}

impl<'a> Cursor<'a> {
    pub fn new(source: &'a str) -> Self {
        Self { source, pos: 0 }
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn rest(&self) -> &'a str {
        &self.source[self.pos..]
    }

    pub fn is_at_end(&self) -> bool {
        self.rest().trim_start().is_empty()
    }

    /// Span of the next non-whitespace character, for error labels.
    pub fn next_token_span(&self) -> Span {
        let rest = self.rest();
        let skipped = rest.len() - rest.trim_start().len();
        let start = self.pos + skipped;
        match self.source[start..].chars().next() {
            Some(c) => Span::new(start, start + c.len_utf8()),
            None => {
                // end of input: point at the last character instead
                let end = self.source.len();
                let last = self.source[..end].chars().next_back().map_or(0, char::len_utf8);
                Span::new(end - last, end)
            }
        }
    }

    /// Matches `pattern` at the cursor and advances past it; leaves the
    /// cursor alone on failure.
    pub fn eat(&mut self, pattern: Pattern) -> Option<Token<'a>> {
        let (token, next) = try_match(*self, pattern)?;
        *self = next;
        Some(token)
    }
}

/// Tries `pattern` at the cursor. On success returns the token and the cursor
/// just past it; the input cursor is never modified.
pub fn try_match<'a>(cursor: Cursor<'a>, pattern: Pattern) -> Option<(Token<'a>, Cursor<'a>)> {
    let rest = cursor.rest();
    let captures = pattern.regex().captures(rest)?;
    let whole = captures.get(0)?;

    let (value, start, end) = match captures.get(1) {
        Some(group) => (group.as_str(), group.start(), group.end()),
        None => {
            let trimmed = whole.as_str().trim();
            let start = whole.as_str().find(trimmed).unwrap_or(0);
            (trimmed, start, start + trimmed.len())
        }
    };

    let token = Token {
        text: whole.as_str(),
        value,
        span: Span::new(cursor.pos + start, cursor.pos + end),
    };
    let next = Cursor {
        source: cursor.source,
        pos: cursor.pos + whole.end(),
    };
    Some((token, next))
}
