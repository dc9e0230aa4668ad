//! Syntax layer: pattern catalog, scanner, comment stripping and the parser.

pub mod comments;
pub mod parser;
pub mod patterns;
pub mod scanner;

pub use comments::strip_comments;
pub use parser::{parse_source, EdgeOp};
pub use patterns::Pattern;
pub use scanner::{try_match, Cursor, Token};
