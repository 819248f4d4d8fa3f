// src/export/range.rs

use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate};

/// Parse --range (year / month / day / interval).
///
/// Supports:
/// - YYYY
/// - YYYY-MM
/// - YYYY-MM-DD
/// - YYYY:YYYY
/// - YYYY-MM:YYYY-MM
/// - YYYY-MM-DD:YYYY-MM-DD
pub(crate) fn parse_range(r: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    if let Some((start_raw, end_raw)) = r.split_once(':') {
        let start = start_raw.trim();
        let end = end_raw.trim();

        if start.len() != end.len() {
            return Err(AppError::InvalidDate(format!(
                "{r}: start and end must have same format"
            )));
        }

        let (first, _) = bounds_of(start)?;
        let (_, last) = bounds_of(end)?;
        if first > last {
            return Err(AppError::InvalidDate(format!("{r}: start is after end")));
        }
        Ok((first, last))
    } else {
        bounds_of(r.trim())
    }
}

/// First and last day covered by a single `YYYY`, `YYYY-MM` or `YYYY-MM-DD`.
fn bounds_of(s: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let invalid = || AppError::InvalidDate(s.to_string());

    match s.len() {
        // YYYY
        4 => {
            let y: i32 = s.parse().map_err(|_| invalid())?;
            let d1 = NaiveDate::from_ymd_opt(y, 1, 1).ok_or_else(invalid)?;
            let d2 = NaiveDate::from_ymd_opt(y, 12, 31).ok_or_else(invalid)?;
            Ok((d1, d2))
        }
        // YYYY-MM
        7 => {
            let d1 = NaiveDate::parse_from_str(&format!("{s}-01"), "%Y-%m-%d")
                .map_err(|_| invalid())?;
            let next_month = if d1.month() == 12 {
                NaiveDate::from_ymd_opt(d1.year() + 1, 1, 1)
            } else {
                NaiveDate::from_ymd_opt(d1.year(), d1.month() + 1, 1)
            };
            let d2 = next_month.and_then(|d| d.pred_opt()).ok_or_else(invalid)?;
            Ok((d1, d2))
        }
        // YYYY-MM-DD
        10 => {
            let d = NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| invalid())?;
            Ok((d, d))
        }
        _ => Err(AppError::InvalidDate(format!(
            "{s}: unsupported --range format"
        ))),
    }
}
