// src/export/logic.rs

use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::write_rows;
use crate::export::model::RecordExport;
use crate::export::range::parse_range;
use crate::models::record::TimeRecord;
use crate::store::RecordStore;
use crate::ui::messages::warning;
use chrono::NaiveDate;
use std::path::Path;

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Export the record set.
    ///
    /// - `range`: `None`, `"all"` or one of
    ///   `YYYY`, `YYYY-MM`, `YYYY-MM-DD`, `YYYY:YYYY`, `YYYY-MM:YYYY-MM`,
    ///   `YYYY-MM-DD:YYYY-MM-DD`
    ///
    /// Returns the number of exported records.
    pub fn export(
        store: &mut dyn RecordStore,
        format: ExportFormat,
        file: &str,
        range: Option<&str>,
        force: bool,
    ) -> AppResult<usize> {
        let path = Path::new(file);

        let date_bounds: Option<(NaiveDate, NaiveDate)> = match range {
            None => None,
            Some(r) if r.eq_ignore_ascii_case("all") => None,
            Some(r) => Some(parse_range(r)?),
        };

        let rows = select_records(store.load_all()?, date_bounds);

        if rows.is_empty() {
            warning("No records found for selected range.");
            return Ok(0);
        }

        ensure_writable(path, force)?;

        write_rows(&rows, path, format)?;

        Ok(rows.len())
    }
}

/// Records inside `bounds` (inclusive), ordered by user, date, category.
fn select_records(
    records: Vec<TimeRecord>,
    bounds: Option<(NaiveDate, NaiveDate)>,
) -> Vec<RecordExport> {
    let mut selected: Vec<TimeRecord> = records
        .into_iter()
        .filter(|r| bounds.is_none_or(|(start, end)| r.date >= start && r.date <= end))
        .collect();

    selected.sort_by(|a, b| {
        a.user
            .cmp(&b.user)
            .then(a.date.cmp(&b.date))
            .then(a.category.index().cmp(&b.category.index()))
    });

    selected.iter().map(RecordExport::from).collect()
}
