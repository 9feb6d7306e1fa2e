//! Cookie value decoding.

use crate::error::{CodecError, CodecResult};
use crate::record::PersistedSegment;

/// Decodes a cookie value back into persisted records.
///
/// Cookies are client-controlled input: the value may have been tampered
/// with, truncated by a browser, or mangled by a proxy. Every structural
/// problem surfaces as a [`CodecError`] so the caller can fall back to an
/// empty segment set instead of failing the request.
pub fn from_cookie_value(raw: &str) -> CodecResult<Vec<PersistedSegment>> {
    let segments: Vec<PersistedSegment> =
        serde_json::from_str(raw).map_err(|e| CodecError::decoding_failed(e.to_string()))?;

    if segments.iter().any(|s| s.key.is_empty()) {
        return Err(CodecError::EmptyKey);
    }

    Ok(segments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::to_cookie_value;
    use crate::value::SegmentValue;

    #[test]
    fn roundtrip_scalars() {
        let segments = vec![
            PersistedSegment::new("s", "text", true),
            PersistedSegment::new("i", -3i64, true),
            PersistedSegment::new("f", 2.5f64, true),
            PersistedSegment::new("b", false, true),
            PersistedSegment::new("n", (), true),
        ];
        let encoded = to_cookie_value(&segments).unwrap();
        let decoded = from_cookie_value(&encoded).unwrap();
        assert_eq!(decoded, segments);
    }

    #[test]
    fn garbage_is_an_error() {
        assert!(from_cookie_value("garbage-not-a-valid-encoding").is_err());
    }

    #[test]
    fn truncated_value_is_an_error() {
        let encoded = to_cookie_value(&[PersistedSegment::new("ab", "b2", true)]).unwrap();
        let truncated = &encoded[..encoded.len() - 4];
        assert!(from_cookie_value(truncated).is_err());
    }

    #[test]
    fn top_level_object_is_an_error() {
        assert!(from_cookie_value(r#"{"k":"a","v":1,"p":true}"#).is_err());
    }

    #[test]
    fn empty_key_is_rejected() {
        let err = from_cookie_value(r#"[{"k":"","v":1,"p":true}]"#).unwrap_err();
        assert_eq!(err, CodecError::EmptyKey);
    }

    #[test]
    fn unknown_tags_are_ignored() {
        // Forward compatibility: an older deploy can still read a cookie
        // written by a newer one that added a tag.
        let decoded = from_cookie_value(r#"[{"k":"a","v":1,"p":true,"x":9}]"#).unwrap();
        assert_eq!(decoded[0].value, SegmentValue::Integer(1));
    }

    #[test]
    fn empty_array_decodes_to_empty_set() {
        assert_eq!(from_cookie_value("[]").unwrap(), vec![]);
    }
}
