//! Cookie restore/emit orchestration for the segment store.
//!
//! The HTTP layer hands the raw cookie string in before application logic
//! runs and writes the emitted string back on the response; cookie
//! attributes (domain, path, secure flags) are its concern, not ours.

use crate::error::CoreResult;
use crate::segment::Segment;
use crate::store::SegmentStore;
use std::time::SystemTime;
use tracing::{debug, warn};
use vseg_codec::PersistedSegment;

impl SegmentStore {
    /// Rebuilds the restored portion of the store from a request cookie.
    ///
    /// Cookies are client-controlled and may be tampered with or truncated;
    /// any decode failure resets the restored set to empty rather than
    /// failing the request.
    pub fn restore_cookie(&mut self, raw: &str) {
        self.restore_cookie_at(raw, SystemTime::now());
    }

    /// [`restore_cookie`](Self::restore_cookie) with an explicit clock.
    pub fn restore_cookie_at(&mut self, raw: &str, now: SystemTime) {
        let decoded = match vseg_codec::from_cookie_value(raw) {
            Ok(records) => records,
            Err(e) => {
                warn!(error = %e, "discarding undecodable segment cookie");
                self.load_from(Vec::new(), now);
                return;
            }
        };
        debug!(count = decoded.len(), "restored segments from cookie");
        let segments = decoded
            .into_iter()
            .map(|r| Segment::with_persist(r.key, r.value, r.persist))
            .collect();
        self.load_from(segments, now);
    }

    /// Encodes the persistable snapshot at `now` into a response cookie
    /// value.
    ///
    /// Returns `Ok(None)` when nothing is persistable so the HTTP layer can
    /// drop the cookie instead of writing an empty array.
    pub fn cookie_value(&self, now: SystemTime) -> CoreResult<Option<String>> {
        let snapshot = self.persistable_snapshot(now);
        if snapshot.is_empty() {
            return Ok(None);
        }
        debug!(count = snapshot.len(), "emitting segment cookie");
        let records: Vec<PersistedSegment> = snapshot
            .iter()
            .map(|s| PersistedSegment::new(s.key(), s.value().clone(), s.persist()))
            .collect();
        Ok(Some(vseg_codec::to_cookie_value(&records)?))
    }
}
