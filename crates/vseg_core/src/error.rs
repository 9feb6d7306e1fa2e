//! Error types for vseg core.

use thiserror::Error;

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur in segment store operations.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Cookie codec error.
    #[error("codec error: {0}")]
    Codec(#[from] vseg_codec::CodecError),

    /// A segment was added with an empty key.
    ///
    /// The key is a segment's sole identity and must be well-formed.
    #[error("segment key must not be empty")]
    EmptyKey,

    /// Both a sliding and an absolute expiry policy were supplied.
    #[error("segment {key:?} has both a sliding and an absolute expiry")]
    ConflictingExpiry {
        /// Key of the offending segment.
        key: String,
    },

    /// A segment value cannot be represented in the cookie wire format.
    ///
    /// JSON has no `NaN` or infinity; admitting such a value would make
    /// the whole snapshot fail to serialize later.
    #[error("segment {key:?} has a non-encodable value")]
    UnencodableValue {
        /// Key of the offending segment.
        key: String,
    },
}

impl CoreError {
    /// Creates a conflicting expiry error.
    pub fn conflicting_expiry(key: impl Into<String>) -> Self {
        Self::ConflictingExpiry { key: key.into() }
    }

    /// Creates an unencodable value error.
    pub fn unencodable_value(key: impl Into<String>) -> Self {
        Self::UnencodableValue { key: key.into() }
    }
}
