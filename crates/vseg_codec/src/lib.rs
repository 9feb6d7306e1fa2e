//! # vseg codec
//!
//! Compact cookie wire format for visitor segments.
//!
//! A persistable snapshot of segments is serialized into a single short
//! cookie value. Field tags are a single letter (`k`, `v`, `p`) by design
//! to keep the cookie small, and values serialize untagged so scalars cost
//! no wrapper bytes.
//!
//! ## Usage
//!
//! ```
//! use vseg_codec::{from_cookie_value, to_cookie_value, PersistedSegment};
//!
//! let snapshot = vec![PersistedSegment::new("ab", "b2", true)];
//! let cookie = to_cookie_value(&snapshot).unwrap();
//! assert_eq!(cookie, r#"[{"k":"ab","v":"b2","p":true}]"#);
//!
//! let decoded = from_cookie_value(&cookie).unwrap();
//! assert_eq!(decoded, snapshot);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod decoder;
mod encoder;
mod error;
mod record;
mod value;

pub use decoder::from_cookie_value;
pub use encoder::to_cookie_value;
pub use error::{CodecError, CodecResult};
pub use record::PersistedSegment;
pub use value::SegmentValue;

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// Strategy for generating valid segment keys.
    fn key_strategy() -> impl Strategy<Value = String> {
        prop::string::string_regex("[a-zA-Z][a-zA-Z0-9_-]{0,15}").expect("Invalid regex")
    }

    /// Strategy for generating scalar segment values.
    fn scalar_strategy() -> impl Strategy<Value = SegmentValue> {
        prop_oneof![
            Just(SegmentValue::Null),
            any::<bool>().prop_map(SegmentValue::Bool),
            any::<i64>().prop_map(SegmentValue::Integer),
            any::<f64>()
                .prop_filter("JSON has no non-finite numbers", |f| f.is_finite())
                .prop_map(SegmentValue::Float),
            "[ -~]{0,24}".prop_map(SegmentValue::Text),
        ]
    }

    /// Strategy for generating segment values, including shallow arrays.
    fn value_strategy() -> impl Strategy<Value = SegmentValue> {
        prop_oneof![
            scalar_strategy(),
            prop::collection::vec(scalar_strategy(), 0..4).prop_map(SegmentValue::Array),
        ]
    }

    proptest! {
        #[test]
        fn roundtrip_any_snapshot(
            records in prop::collection::vec(
                (key_strategy(), value_strategy(), any::<bool>())
                    .prop_map(|(k, v, p)| PersistedSegment { key: k, value: v, persist: p }),
                0..8,
            )
        ) {
            let encoded = to_cookie_value(&records).unwrap();
            let decoded = from_cookie_value(&encoded).unwrap();
            prop_assert_eq!(decoded, records);
        }

        #[test]
        fn arbitrary_input_never_panics(raw in "\\PC{0,64}") {
            // Decoding client-controlled bytes must fail cleanly, never panic.
            let _ = from_cookie_value(&raw);
        }
    }
}
