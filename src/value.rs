use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

use crate::diagnostics::DotError;
use crate::err_msg;

/// Attribute name to value, for one vertex or one edge.
pub type AttributeMap = HashMap<String, AttributeValue>;

/// A typed attribute value attached to a vertex or an edge.
///
/// # Examples
///
/// ```rust
/// use dotgraph::value::{coerce, AttributeValue};
/// assert_eq!(coerce("3"), AttributeValue::Int(3));
/// assert_eq!(coerce("3.0"), AttributeValue::Float(3.0));
/// assert_eq!(coerce("hello").type_name(), "Text");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Float(f64),
    Int(i64),
    Bool(bool),
    Text(String),
}

impl AttributeValue {
    pub fn type_name(&self) -> &'static str {
        match self {
            AttributeValue::Float(_) => "Float",
            AttributeValue::Int(_) => "Int",
            AttributeValue::Bool(_) => "Bool",
            AttributeValue::Text(_) => "Text",
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            AttributeValue::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            AttributeValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            AttributeValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// `Int` or `Float` as a float; no conversion from text.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            AttributeValue::Float(f) => Some(*f),
            AttributeValue::Int(n) => Some(*n as f64),
            _ => None,
        }
    }

    /// Reads the value as a number for cost and heuristic lookups.
    ///
    /// Integers widen, text is parsed as a float, booleans are rejected.
    pub fn as_f64(&self) -> Result<f64, DotError> {
        match self {
            AttributeValue::Float(f) => Ok(*f),
            AttributeValue::Int(n) => Ok(*n as f64),
            AttributeValue::Text(s) => s
                .parse::<f64>()
                .map_err(|_| err_msg!(Coercion, "cannot convert text '{}' to a number", s)),
            AttributeValue::Bool(b) => {
                Err(err_msg!(Coercion, "cannot convert boolean '{}' to a number", b))
            }
        }
    }
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeValue::Float(n) => write!(f, "{:?}", n),
            AttributeValue::Int(n) => write!(f, "{}", n),
            AttributeValue::Bool(b) => write!(f, "{}", b),
            AttributeValue::Text(s) => write!(f, "\"{}\"", s),
        }
    }
}

impl From<i64> for AttributeValue {
    fn from(n: i64) -> Self {
        AttributeValue::Int(n)
    }
}

impl From<f64> for AttributeValue {
    fn from(n: f64) -> Self {
        AttributeValue::Float(n)
    }
}

impl From<bool> for AttributeValue {
    fn from(b: bool) -> Self {
        AttributeValue::Bool(b)
    }
}

impl From<&str> for AttributeValue {
    fn from(s: &str) -> Self {
        AttributeValue::Text(s.to_string())
    }
}

/// Converts a raw attribute token into a typed value.
///
/// Text containing a `.` may only become a float; anything else may only
/// become an integer. When the numeric reading fails the token is tried as a
/// boolean, and finally kept as text.
pub fn coerce(raw: &str) -> AttributeValue {
    let numeric = if raw.contains('.') {
        raw.parse::<f64>().ok().map(AttributeValue::Float)
    } else {
        raw.parse::<i64>().ok().map(AttributeValue::Int)
    };
    numeric
        .or_else(|| parse_bool(raw).map(AttributeValue::Bool))
        .unwrap_or_else(|| AttributeValue::Text(raw.to_string()))
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw {
        "true" | "True" | "TRUE" | "t" | "T" => Some(true),
        "false" | "False" | "FALSE" | "f" | "F" => Some(false),
        _ => None,
    }
}
