//! The segment entity.

use crate::error::{CoreError, CoreResult};
use std::hash::{Hash, Hasher};
use std::time::SystemTime;
use vseg_codec::SegmentValue;

/// Expiry policy of a segment.
///
/// A segment has at most one policy. Representing the policy as an enum
/// makes the both-at-once state unrepresentable; the validating factory
/// rejects inputs that supply both (see [`Segment::with_expiry_policy`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expiry {
    /// Expires N days after the segment was last touched; every read or
    /// rewrite restarts the window.
    Sliding {
        /// Window length in days.
        days: u32,
    },
    /// Expires at a fixed point in time regardless of access.
    Absolute {
        /// The expiry instant.
        at: SystemTime,
    },
}

/// One named fact attached to a visitor's session.
///
/// Identity is the key alone: `PartialEq`, `Eq`, and `Hash` ignore the
/// value, persist flag, and expiry policy, so any keyed or hash-based
/// collection dedups segments by key. Use [`Segment::content_eq`] where
/// full structural comparison is wanted (debugging, logging).
///
/// Fields are set at construction and never mutated; a segment changes by
/// being replaced in the store under the same key.
#[derive(Debug, Clone)]
pub struct Segment {
    key: String,
    value: SegmentValue,
    persist: bool,
    expiry: Option<Expiry>,
}

impl Segment {
    /// Creates a transient segment: not persisted, no expiry.
    pub fn new(key: impl Into<String>, value: impl Into<SegmentValue>) -> Self {
        Self::with_persist(key, value, false)
    }

    /// Creates a segment with an explicit persistence flag and no expiry.
    pub fn with_persist(
        key: impl Into<String>,
        value: impl Into<SegmentValue>,
        persist: bool,
    ) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            persist,
            expiry: None,
        }
    }

    /// Creates a segment with a sliding expiry window.
    ///
    /// Expiry policy is a store-level concern, so this is not part of the
    /// public creation API.
    pub(crate) fn with_sliding_days(
        key: impl Into<String>,
        value: impl Into<SegmentValue>,
        persist: bool,
        days: u32,
    ) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            persist,
            expiry: Some(Expiry::Sliding { days }),
        }
    }

    /// Creates a segment with an absolute expiry instant.
    pub(crate) fn with_absolute_expiry(
        key: impl Into<String>,
        value: impl Into<SegmentValue>,
        persist: bool,
        at: SystemTime,
    ) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            persist,
            expiry: Some(Expiry::Absolute { at }),
        }
    }

    /// Validating factory over both optional policy inputs.
    ///
    /// Rejects the combination of a sliding and an absolute expiry; a
    /// segment has at most one policy.
    pub(crate) fn with_expiry_policy(
        key: impl Into<String>,
        value: impl Into<SegmentValue>,
        persist: bool,
        sliding_days: Option<u32>,
        absolute_expiry: Option<SystemTime>,
    ) -> CoreResult<Self> {
        let key = key.into();
        match (sliding_days, absolute_expiry) {
            (Some(_), Some(_)) => Err(CoreError::conflicting_expiry(key)),
            (Some(days), None) => Ok(Self::with_sliding_days(key, value, persist, days)),
            (None, Some(at)) => Ok(Self::with_absolute_expiry(key, value, persist, at)),
            (None, None) => Ok(Self::with_persist(key, value, persist)),
        }
    }

    /// The name of the segment.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The value of the segment.
    pub fn value(&self) -> &SegmentValue {
        &self.value
    }

    /// Whether this segment is to be persisted (default is false).
    pub fn persist(&self) -> bool {
        self.persist
    }

    /// The expiry policy, if any.
    pub fn expiry(&self) -> Option<Expiry> {
        self.expiry
    }

    /// Full structural comparison, unlike the key-only `==`.
    pub fn content_eq(&self, other: &Segment) -> bool {
        self.key == other.key
            && self.value == other.value
            && self.persist == other.persist
            && self.expiry == other.expiry
    }
}

impl PartialEq for Segment {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Segment {}

impl Hash for Segment {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::time::Duration;

    #[test]
    fn equality_is_key_only() {
        let a = Segment::new("x", 1i64);
        let b = Segment::with_persist("x", "different", true);
        let c = Segment::new("y", 1i64);

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert!(!a.content_eq(&b));
        assert!(a.content_eq(&a.clone()));
    }

    #[test]
    fn hash_based_collections_dedup_by_key() {
        let mut set = HashSet::new();
        set.insert(Segment::new("x", 1i64));
        set.insert(Segment::with_persist("x", 2i64, true));
        set.insert(Segment::new("y", 1i64));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn public_constructors_have_no_expiry() {
        assert_eq!(Segment::new("x", 1i64).expiry(), None);
        assert!(!Segment::new("x", 1i64).persist());
        assert!(Segment::with_persist("x", 1i64, true).persist());
    }

    #[test]
    fn both_policies_rejected() {
        let at = SystemTime::UNIX_EPOCH + Duration::from_secs(1_000);
        let result = Segment::with_expiry_policy("x", 1i64, true, Some(3), Some(at));
        assert!(matches!(
            result,
            Err(CoreError::ConflictingExpiry { key }) if key == "x"
        ));
    }

    #[test]
    fn single_policy_accepted() {
        let seg = Segment::with_expiry_policy("x", 1i64, true, Some(3), None).unwrap();
        assert_eq!(seg.expiry(), Some(Expiry::Sliding { days: 3 }));

        let at = SystemTime::UNIX_EPOCH + Duration::from_secs(1_000);
        let seg = Segment::with_expiry_policy("x", 1i64, true, None, Some(at)).unwrap();
        assert_eq!(seg.expiry(), Some(Expiry::Absolute { at }));

        let seg = Segment::with_expiry_policy("x", 1i64, true, None, None).unwrap();
        assert_eq!(seg.expiry(), None);
    }
}
