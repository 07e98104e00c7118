//! Declared field types and dynamically typed field values.
//!
//! Records are strongly typed, but reflective consumers (dictionary and JSON
//! export, schema listings) need a single value type to carry any field.
//!
//! ## FieldValue Types
//!
//! - `Int`: Numbers (id, cost, health) and enumeration codes
//! - `Bool`: Flags (collectible)
//! - `Text`: Strings (card id, localized name)
//! - `IntPair`: Dust cost pairs
//! - `Null`: Absent field

use serde::{Deserialize, Serialize};

/// Declared (semantic) type of a field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum FieldKind {
    /// Plain or localized string.
    Text,
    /// Signed integer.
    Int,
    /// Boolean flag.
    Bool,
    /// Member of the named enumeration.
    Enum(&'static str),
}

impl std::fmt::Display for FieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldKind::Text => f.write_str("text"),
            FieldKind::Int => f.write_str("int"),
            FieldKind::Bool => f.write_str("bool"),
            FieldKind::Enum(name) => write!(f, "enum {}", name),
        }
    }
}

/// Value of a stored or computed field.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Integer value (cost, health, enumeration code).
    Int(i64),
    /// Boolean flag.
    Bool(bool),
    /// Text value.
    Text(String),
    /// Pair of integers (normal and golden dust).
    IntPair(i64, i64),
    /// Field is absent.
    Null,
}

impl FieldValue {
    /// Get as integer if this is an Int value.
    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            FieldValue::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Get as bool if this is a Bool value.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FieldValue::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// Get as string reference if this is a Text value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Get the pair if this is an IntPair value.
    #[must_use]
    pub fn as_pair(&self) -> Option<(i64, i64)> {
        match self {
            FieldValue::IntPair(a, b) => Some((*a, *b)),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }
}

impl From<i64> for FieldValue {
    fn from(v: i64) -> Self {
        FieldValue::Int(v)
    }
}

impl From<i32> for FieldValue {
    fn from(v: i32) -> Self {
        FieldValue::Int(i64::from(v))
    }
}

impl From<u32> for FieldValue {
    fn from(v: u32) -> Self {
        FieldValue::Int(i64::from(v))
    }
}

impl From<bool> for FieldValue {
    fn from(v: bool) -> Self {
        FieldValue::Bool(v)
    }
}

impl From<String> for FieldValue {
    fn from(v: String) -> Self {
        FieldValue::Text(v)
    }
}

impl From<&str> for FieldValue {
    fn from(v: &str) -> Self {
        FieldValue::Text(v.to_string())
    }
}

impl From<(u32, u32)> for FieldValue {
    fn from((a, b): (u32, u32)) -> Self {
        FieldValue::IntPair(i64::from(a), i64::from(b))
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(FieldValue::Null, Into::into)
    }
}
