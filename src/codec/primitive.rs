//! Wire primitive shapes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The value shapes a codec may put on the wire: a string or an integer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Primitive {
    Str(String),
    Int(i64),
}

impl Primitive {
    /// Returns the string payload, if this is a string primitive.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Primitive::Str(s) => Some(s),
            Primitive::Int(_) => None,
        }
    }

    /// Returns the integer payload, if this is an integer primitive.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Primitive::Str(_) => None,
            Primitive::Int(n) => Some(*n),
        }
    }

    /// Name of this primitive's shape, for error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Primitive::Str(_) => "string",
            Primitive::Int(_) => "integer",
        }
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Primitive::Str(s) => write!(f, "{}", s),
            Primitive::Int(n) => write!(f, "{}", n),
        }
    }
}

impl From<String> for Primitive {
    fn from(s: String) -> Self {
        Primitive::Str(s)
    }
}

impl From<&str> for Primitive {
    fn from(s: &str) -> Self {
        Primitive::Str(s.to_owned())
    }
}

impl From<i64> for Primitive {
    fn from(n: i64) -> Self {
        Primitive::Int(n)
    }
}
