// src/export/model.rs

use crate::models::record::TimeRecord;
use serde::Serialize;

/// Flat row for CSV / JSON export: the same columns as the tabular store.
#[derive(Serialize, Clone, Debug)]
pub struct RecordExport {
    pub user: String,
    pub date: String,
    pub category: String,
    pub hours: f64,
    pub last_updated: String,
    pub entered_payment: String,
}

impl From<&TimeRecord> for RecordExport {
    fn from(r: &TimeRecord) -> Self {
        Self {
            user: r.user.clone(),
            date: r.date_str(),
            category: r.category.to_db_str().to_string(),
            hours: r.hours,
            last_updated: r.last_updated_str(),
            entered_payment: r.entered_payment_str(),
        }
    }
}
