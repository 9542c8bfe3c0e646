//! Persistence of correction and explanation results.
//!
//! An append-only log ordered by creation time, queried newest first in
//! fixed-size pages, with a live subscription that republishes the first
//! page after every change.

mod record;
mod store;

pub use record::{HistoryRecord, RecordPayload};
pub use store::{HistoryStore, PAGE_SIZE};
