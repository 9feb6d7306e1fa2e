//! Persisted segment record.

use crate::value::SegmentValue;
use serde::{Deserialize, Serialize};

/// The on-wire form of one persisted segment.
///
/// Field tags are a single letter to keep the cookie small. This is a hard
/// wire-format constraint: the whole snapshot has to fit comfortably inside
/// one cookie value alongside whatever else the platform stores there.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersistedSegment {
    /// The name of the segment.
    #[serde(rename = "k")]
    pub key: String,

    /// The value of the segment.
    #[serde(rename = "v")]
    pub value: SegmentValue,

    /// Whether this segment is to be persisted.
    #[serde(rename = "p", default)]
    pub persist: bool,
}

impl PersistedSegment {
    /// Creates a new persisted record.
    pub fn new(key: impl Into<String>, value: impl Into<SegmentValue>, persist: bool) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            persist,
        }
    }
}
