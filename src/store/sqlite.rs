//! Tabular backend: every record is one row of the `records` table.

use super::RecordStore;
use crate::db::pool::DbPool;
use crate::db::queries::{delete_decoded_records, insert_record, load_all_records};
use crate::errors::AppResult;
use crate::models::record::TimeRecord;
use crate::ui::messages::warning;
use std::path::{Path, PathBuf};

pub struct SqliteStore {
    pool: DbPool,
    path: PathBuf,
}

impl SqliteStore {
    pub fn open(path: &Path) -> AppResult<Self> {
        Ok(Self {
            pool: DbPool::new(path)?,
            path: path.to_path_buf(),
        })
    }

    pub fn pool(&mut self) -> &mut DbPool {
        &mut self.pool
    }
}

impl RecordStore for SqliteStore {
    fn load_all(&mut self) -> AppResult<Vec<TimeRecord>> {
        let (records, skipped) = load_all_records(&self.pool.conn)?;
        for msg in skipped {
            warning(format!("Skipping malformed record ({msg})"));
        }
        Ok(records)
    }

    fn save_user_slice(&mut self, user: &str, records: &[TimeRecord]) -> AppResult<()> {
        self.pool.with_conn(|conn| {
            let tx = conn.transaction()?;
            delete_decoded_records(&tx, Some(user))?;
            for rec in records {
                insert_record(&tx, rec)?;
            }
            tx.commit()?;
            Ok(())
        })
    }

    fn replace_all(&mut self, records: &[TimeRecord]) -> AppResult<()> {
        self.pool.with_conn(|conn| {
            let tx = conn.transaction()?;
            delete_decoded_records(&tx, None)?;
            for rec in records {
                insert_record(&tx, rec)?;
            }
            tx.commit()?;
            Ok(())
        })
    }

    fn describe(&self) -> String {
        format!("SQLite database {}", self.path.display())
    }
}
