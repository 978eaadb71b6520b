//! Historical-Context Store
//!
//! Append-only SQLite log of past classifications, used to correlate the
//! current input against recent attack campaigns. Records are never updated
//! or deleted here; retention is out of scope.

pub mod store;
pub mod types;

pub use store::MemoryStore;
pub use types::{HistoricalRecord, HistoryContext};

/// Trailing correlation window in days.
pub const HISTORY_WINDOW_DAYS: i64 = 7;
