//! Cookie value encoding.

use crate::error::{CodecError, CodecResult};
use crate::record::PersistedSegment;

/// Encodes a persistable snapshot into a single cookie value.
///
/// The output is a JSON array of one-letter-tagged records, e.g.
/// `[{"k":"ab","v":"b2","p":true}]`.
pub fn to_cookie_value(segments: &[PersistedSegment]) -> CodecResult<String> {
    serde_json::to_string(segments).map_err(|e| CodecError::encoding_failed(e.to_string()))
}
