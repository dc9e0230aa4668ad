use std::borrow::Cow;

use crate::syntax::patterns::{BLOCK_COMMENT, LINE_COMMENT};

/// Replaces `//` line comments with a newline, then `/* */` block comments
/// with a space, so a comment still separates the tokens around it.
///
/// Both passes repeat until the text stops changing. Every replacement is
/// shorter than its match, so the loop ends.
pub fn strip_comments(text: &str) -> String {
    let mut current = text.to_string();
    loop {
        let without_lines = LINE_COMMENT.replace_all(&current, "\n");
        let stripped = match BLOCK_COMMENT.replace_all(&without_lines, " ") {
            Cow::Borrowed(s) => s.to_string(),
            Cow::Owned(s) => s,
        };
        if stripped == current {
            return stripped;
        }
        current = stripped;
    }
}
