//! Session-scoped cache of decoded segment stores.

use crate::store::SegmentStore;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::SystemTime;

/// Caches one [`SegmentStore`] per session so the cookie is decoded at most
/// once per session instead of once per request.
///
/// Multiple requests from the same client may arrive concurrently (parallel
/// asset requests carrying the same session cookie), so each store is behind
/// its own mutex; the outer lock only guards the session map itself.
///
/// The cache's lifetime is bound explicitly to whatever owns it (the
/// application's session registry), not a process-wide singleton, which
/// keeps the core testable in isolation.
#[derive(Debug, Default)]
pub struct SessionCache {
    stores: Mutex<HashMap<String, Arc<Mutex<SegmentStore>>>>,
}

impl SessionCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the store for `session_id`, decoding `cookie` into a fresh
    /// store on first sight of the session.
    ///
    /// Later requests of the same session get the cached store and their
    /// cookie value is ignored; the cache is authoritative once populated.
    pub fn store_for(
        &self,
        session_id: &str,
        cookie: Option<&str>,
        now: SystemTime,
    ) -> Arc<Mutex<SegmentStore>> {
        let mut stores = self.stores.lock();
        Arc::clone(stores.entry(session_id.to_string()).or_insert_with(|| {
            let mut store = SegmentStore::new();
            if let Some(raw) = cookie {
                store.restore_cookie_at(raw, now);
            }
            Arc::new(Mutex::new(store))
        }))
    }

    /// Drops the store for `session_id`, if cached.
    pub fn evict(&self, session_id: &str) {
        self.stores.lock().remove(session_id);
    }

    /// Drops all cached stores.
    pub fn clear(&self) {
        self.stores.lock().clear();
    }

    /// Number of sessions currently cached.
    pub fn len(&self) -> usize {
        self.stores.lock().len()
    }

    /// Whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.stores.lock().is_empty()
    }
}
