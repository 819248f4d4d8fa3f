//! Record store: where time records live.
//!
//! The core only talks to [`RecordStore`]. Two backends exist: a flat SQLite
//! table (one row per record) and a directory of per-user JSON documents.
//! Neither backend offers cross-user transactions to callers; last write wins.

pub mod document;
pub mod sqlite;

use crate::config::{Backend, Config};
use crate::errors::AppResult;
use crate::models::record::TimeRecord;
use chrono::NaiveDate;

pub use document::DocumentStore;
pub use sqlite::SqliteStore;

pub trait RecordStore {
    /// Every record of every user. An empty store yields an empty vector.
    /// Records that cannot be decoded are skipped with a warning.
    fn load_all(&mut self) -> AppResult<Vec<TimeRecord>>;

    /// Replace everything stored for `user` with `records`.
    ///
    /// `records` must hold the user's complete record set, including periods
    /// that were not edited.
    fn save_user_slice(&mut self, user: &str, records: &[TimeRecord]) -> AppResult<()>;

    /// Replace the whole store with `records`.
    fn replace_all(&mut self, records: &[TimeRecord]) -> AppResult<()>;

    /// Human-readable location, for messages.
    fn describe(&self) -> String;
}

/// Open the backend selected by the configuration.
pub fn open(cfg: &Config) -> AppResult<Box<dyn RecordStore>> {
    match cfg.backend {
        Backend::Sqlite => Ok(Box::new(SqliteStore::open(&cfg.database_path())?)),
        Backend::Documents => Ok(Box::new(DocumentStore::open(&cfg.documents_path())?)),
    }
}

/// Earliest record date, used when periods are listed from the first entry.
pub fn earliest_date(records: &[TimeRecord]) -> Option<NaiveDate> {
    records.iter().map(|r| r.date).min()
}
