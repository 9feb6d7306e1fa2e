//! Request-scoped segment store.

use crate::error::{CoreError, CoreResult};
use crate::segment::{Expiry, Segment};
use std::time::{Duration, SystemTime};
use vseg_codec::SegmentValue;

const SECONDS_PER_DAY: u64 = 86_400;

/// A segment plus the bookkeeping the immutable entity cannot carry itself.
#[derive(Debug, Clone)]
struct Entry {
    segment: Segment,
    /// When the segment was last added or read; drives sliding expiry.
    last_touched: SystemTime,
    /// Whether this entry came from the request cookie rather than
    /// application code. `load_from` replaces restored entries only.
    restored: bool,
}

/// The per-request collection of segments, keyed by segment key.
///
/// One instance exists per inbound request/response cycle and is not shared
/// across requests, so no locking happens here (see
/// [`SessionCache`](crate::SessionCache) for the shared layer above).
///
/// Entries are kept in insertion order in a Vec with linear key lookup: a
/// cookie-backed collection holds a handful of segments, and the order makes
/// serialization deterministic.
///
/// Clocked operations come in pairs: a convenience form that reads the
/// system clock, and an `_at(..., now)` form for deterministic tests.
#[derive(Debug, Default)]
pub struct SegmentStore {
    entries: Vec<Entry>,
}

impl SegmentStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.segment.key() == key)
    }

    /// Inserts or replaces a segment by key.
    ///
    /// Replacement is total: value, persist flag, and expiry policy all come
    /// from the new segment. Rejects an empty key (the key is the sole
    /// identity and must be well-formed) and a value the wire format cannot
    /// represent, so one bad segment can never block the whole snapshot at
    /// serialization time.
    pub fn add(&mut self, segment: Segment) -> CoreResult<()> {
        self.add_at(segment, SystemTime::now())
    }

    /// [`add`](Self::add) with an explicit clock.
    pub fn add_at(&mut self, segment: Segment, now: SystemTime) -> CoreResult<()> {
        if segment.key().is_empty() {
            return Err(CoreError::EmptyKey);
        }
        if !segment.value().is_encodable() {
            return Err(CoreError::unencodable_value(segment.key()));
        }
        let entry = Entry {
            segment,
            last_touched: now,
            restored: false,
        };
        match self.position(entry.segment.key()) {
            Some(i) => self.entries[i] = entry,
            None => self.entries.push(entry),
        }
        Ok(())
    }

    /// Inserts a segment with an optional expiry policy.
    ///
    /// This is the factory for expiry-bearing segments; expiry is a
    /// store-level concern, so the entity's policy constructors are not
    /// public. Rejects the combination of both policies.
    pub fn add_with_policy(
        &mut self,
        key: impl Into<String>,
        value: impl Into<SegmentValue>,
        persist: bool,
        sliding_days: Option<u32>,
        absolute_expiry: Option<SystemTime>,
    ) -> CoreResult<()> {
        let segment = Segment::with_expiry_policy(key, value, persist, sliding_days, absolute_expiry)?;
        self.add(segment)
    }

    /// Looks up a segment by key, touching it.
    ///
    /// A miss is an ordinary empty result; callers probe optionally.
    pub fn get(&mut self, key: &str) -> Option<&Segment> {
        self.get_at(key, SystemTime::now())
    }

    /// [`get`](Self::get) with an explicit clock.
    pub fn get_at(&mut self, key: &str, now: SystemTime) -> Option<&Segment> {
        let i = self.position(key)?;
        self.entries[i].last_touched = now;
        Some(&self.entries[i].segment)
    }

    /// Looks up a segment without touching it.
    pub fn peek(&self, key: &str) -> Option<&Segment> {
        self.position(key).map(|i| &self.entries[i].segment)
    }

    /// Iterates over all current segments in insertion order.
    pub fn all(&self) -> impl Iterator<Item = &Segment> {
        self.entries.iter().map(|e| &e.segment)
    }

    /// Number of segments in the store.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store holds no segments.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Evaluates a segment's expiry policy at `now`.
    ///
    /// No policy means never expired. Sliding expiry depends on when the
    /// store last touched the segment; a segment the store has never seen
    /// has no touch history and is treated as unexpired.
    pub fn is_expired(&self, segment: &Segment, now: SystemTime) -> bool {
        match segment.expiry() {
            None => false,
            Some(Expiry::Absolute { at }) => now >= at,
            Some(Expiry::Sliding { days }) => match self.position(segment.key()) {
                Some(i) => {
                    let window = Duration::from_secs(u64::from(days) * SECONDS_PER_DAY);
                    now >= self.entries[i].last_touched + window
                }
                None => false,
            },
        }
    }

    /// The segments eligible for durable storage at `now`: persisted and not
    /// expired, in insertion order. This exact set feeds the cookie codec.
    pub fn persistable_snapshot(&self, now: SystemTime) -> Vec<&Segment> {
        self.entries
            .iter()
            .map(|e| &e.segment)
            .filter(|s| s.persist() && !self.is_expired(s, now))
            .collect()
    }

    /// Replaces the cookie-restored entries with `decoded`, leaving every
    /// segment added by application code this request untouched.
    ///
    /// Called once per request, before application logic runs. On a key
    /// collision the locally-added entry wins: it was written during this
    /// request and is newer than the cookie.
    pub fn load_from(&mut self, decoded: Vec<Segment>, now: SystemTime) {
        self.entries.retain(|e| !e.restored);
        for segment in decoded {
            if segment.key().is_empty()
                || !segment.value().is_encodable()
                || self.position(segment.key()).is_some()
            {
                continue;
            }
            self.entries.push(Entry {
                segment,
                last_touched: now,
                restored: true,
            });
        }
    }
}
