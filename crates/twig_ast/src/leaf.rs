//! Leaf values.
//!
//! Leaves are the non-traversable payload of a tree: literals, identifiers,
//! flags. The engine moves them around with their slot but never looks inside.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An opaque, non-traversable slot value.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Leaf {
    /// Absent value.
    #[default]
    Null,
    /// Boolean flag.
    Bool(bool),
    /// Integer literal.
    Int(i64),
    /// Integer literal above `i64::MAX`.
    UInt(u64),
    /// Floating point literal.
    Float(f64),
    /// String literal or identifier.
    Str(String),
}

impl Leaf {
    /// Returns true for [`Leaf::Null`].
    #[inline]
    pub const fn is_null(&self) -> bool {
        matches!(self, Leaf::Null)
    }

    /// Returns the string payload, if any.
    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Leaf::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the integer payload, if any.
    #[inline]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Leaf::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns the unsigned payload, if any.
    #[inline]
    pub const fn as_uint(&self) -> Option<u64> {
        match self {
            Leaf::UInt(u) => Some(*u),
            _ => None,
        }
    }

    /// Returns the boolean payload, if any.
    #[inline]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Leaf::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl fmt::Display for Leaf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Leaf::Null => f.write_str("null"),
            Leaf::Bool(b) => write!(f, "{b}"),
            Leaf::Int(i) => write!(f, "{i}"),
            Leaf::UInt(u) => write!(f, "{u}"),
            Leaf::Float(x) => write!(f, "{x}"),
            Leaf::Str(s) => write!(f, "{s:?}"),
        }
    }
}

impl From<bool> for Leaf {
    fn from(value: bool) -> Self {
        Leaf::Bool(value)
    }
}

impl From<i64> for Leaf {
    fn from(value: i64) -> Self {
        Leaf::Int(value)
    }
}

impl From<u64> for Leaf {
    fn from(value: u64) -> Self {
        match i64::try_from(value) {
            Ok(value) => Leaf::Int(value),
            Err(_) => Leaf::UInt(value),
        }
    }
}

impl From<f64> for Leaf {
    fn from(value: f64) -> Self {
        Leaf::Float(value)
    }
}

impl From<&str> for Leaf {
    fn from(value: &str) -> Self {
        Leaf::Str(value.to_string())
    }
}

impl From<String> for Leaf {
    fn from(value: String) -> Self {
        Leaf::Str(value)
    }
}
