//! # vseg core
//!
//! Request-scoped visitor segment store with cookie persistence.
//!
//! A [`Segment`] is one named fact about a visitor's session ("in an A/B
//! test bucket", "referred by campaign X"), used for downstream
//! personalization decisions. The [`SegmentStore`] owns the per-request
//! collection of segments, mediates all mutation through key-based replace,
//! and decides at serialization time which segments survive into the next
//! request. The persistable subset round-trips through a single compact
//! cookie value via [`vseg_codec`].
//!
//! ## Request lifecycle
//!
//! ```
//! use std::time::SystemTime;
//! use vseg_core::{Segment, SegmentStore};
//!
//! let now = SystemTime::now();
//!
//! // Inbound: rebuild the store from the request cookie.
//! let mut store = SegmentStore::new();
//! store.restore_cookie_at(r#"[{"k":"ab","v":"b2","p":true}]"#, now);
//!
//! // Application code reads and writes segments while handling the request.
//! assert_eq!(store.get_at("ab", now).unwrap().value().as_text(), Some("b2"));
//! store.add_at(Segment::with_persist("ref", "campaign-12", true), now).unwrap();
//!
//! // Outbound: re-encode whatever is still persistable.
//! let cookie = store.cookie_value(now).unwrap().unwrap();
//! assert!(cookie.contains(r#""k":"ref""#));
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod cookie;
mod error;
mod segment;
mod session;
mod store;

pub use error::{CoreError, CoreResult};
pub use segment::{Expiry, Segment};
pub use session::SessionCache;
pub use store::SegmentStore;
pub use vseg_codec::SegmentValue;
