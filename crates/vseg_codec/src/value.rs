//! Dynamic segment value type.

use serde::{Deserialize, Serialize};

/// The payload of a persisted segment.
///
/// Segments carry an opaque, JSON-representable fact ("in bucket B",
/// "referred by campaign X"). The enum serializes untagged so a scalar
/// costs no wrapper bytes in the cookie.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SegmentValue {
    /// Null value.
    Null,
    /// Boolean value.
    Bool(bool),
    /// Signed integer (full i64 range).
    Integer(i64),
    /// Floating-point number.
    Float(f64),
    /// Text string (UTF-8).
    Text(String),
    /// Array of values.
    Array(Vec<SegmentValue>),
}

impl SegmentValue {
    /// Check if this value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, SegmentValue::Null)
    }

    /// Get this value as a boolean, if it is one.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            SegmentValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Get this value as an integer, if it is one.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            SegmentValue::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// Get this value as a float, if it is one.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            SegmentValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Get this value as a string, if it is a text string.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            SegmentValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Get this value as an array, if it is one.
    pub fn as_array(&self) -> Option<&[SegmentValue]> {
        match self {
            SegmentValue::Array(a) => Some(a),
            _ => None,
        }
    }

    /// Whether this value can be represented in the cookie wire format.
    ///
    /// JSON has no `NaN` or infinity, so a non-finite float cannot be
    /// encoded. Callers admitting values into a store check this up front
    /// rather than discovering the problem when the whole snapshot fails
    /// to serialize.
    pub fn is_encodable(&self) -> bool {
        match self {
            SegmentValue::Float(f) => f.is_finite(),
            SegmentValue::Array(a) => a.iter().all(SegmentValue::is_encodable),
            _ => true,
        }
    }
}

impl From<bool> for SegmentValue {
    fn from(b: bool) -> Self {
        SegmentValue::Bool(b)
    }
}

impl From<i64> for SegmentValue {
    fn from(n: i64) -> Self {
        SegmentValue::Integer(n)
    }
}

impl From<i32> for SegmentValue {
    fn from(n: i32) -> Self {
        SegmentValue::Integer(i64::from(n))
    }
}

impl From<u32> for SegmentValue {
    fn from(n: u32) -> Self {
        SegmentValue::Integer(i64::from(n))
    }
}

impl From<f64> for SegmentValue {
    fn from(f: f64) -> Self {
        SegmentValue::Float(f)
    }
}

impl From<String> for SegmentValue {
    fn from(s: String) -> Self {
        SegmentValue::Text(s)
    }
}

impl From<&str> for SegmentValue {
    fn from(s: &str) -> Self {
        SegmentValue::Text(s.to_string())
    }
}

impl<T: Into<SegmentValue>> From<Vec<T>> for SegmentValue {
    fn from(v: Vec<T>) -> Self {
        SegmentValue::Array(v.into_iter().map(Into::into).collect())
    }
}

impl From<()> for SegmentValue {
    fn from((): ()) -> Self {
        SegmentValue::Null
    }
}
