//! # mind-store
//!
//! Append-only mood log backed by a single CSV file.
//!
//! The file has a header row and exactly four columns in fixed order:
//! `date, mood, note, score`. Reads are fail-soft: a missing, unreadable, or
//! malformed file loads as an empty log and the problem is logged through
//! `tracing`. Writes rewrite the whole file through a temp file and rename,
//! so a reader never observes a half-written log.
//!
//! One process is assumed to own the file. There is no locking between
//! processes.
//!
//! # Usage
//!
//! ```no_run
//! use mind_store::MoodLogStore;
//!
//! let store = MoodLogStore::new("mood_log.csv");
//! store.append("2024-01-01", "Happy", "good day").expect("append");
//! for record in store.read_all() {
//!     println!("{} {} {}", record.date, record.mood, record.score_value());
//! }
//! ```

mod error;
pub mod history;
mod record;
mod store;

pub use error::StoreError;
pub use history::{HistoryRow, MoodHistory, MoodStats, TrendPoint};
pub use record::{COLUMNS, MoodRecord};
pub use store::MoodLogStore;
