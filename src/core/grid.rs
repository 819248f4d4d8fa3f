//! Sparse records ⇄ dense 14-day grid.

use crate::errors::{AppError, AppResult};
use crate::models::category::Category;
use crate::models::grid::{Grid, GridRow};
use crate::models::period::Period;
use crate::models::record::TimeRecord;
use chrono::{Days, NaiveDateTime};

/// Allowed hour values: `0..=max_hours` in multiples of `step`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HourRules {
    pub max_hours: f64,
    pub step: f64,
}

impl Default for HourRules {
    fn default() -> Self {
        Self {
            max_hours: 24.0,
            step: 0.25,
        }
    }
}

impl HourRules {
    pub fn is_valid(&self, hours: f64) -> bool {
        if !hours.is_finite() || hours < 0.0 || hours > self.max_hours {
            return false;
        }
        let steps = hours / self.step;
        (steps - steps.round()).abs() < 1e-9
    }
}

/// Check one cell, naming it on failure.
pub fn validate_hours(
    row: &GridRow,
    category: Category,
    hours: f64,
    rules: &HourRules,
) -> AppResult<()> {
    if rules.is_valid(hours) {
        Ok(())
    } else {
        Err(AppError::InvalidHours {
            row: row.label(),
            category: category.to_string(),
            value: hours.to_string(),
        })
    }
}

/// Dense grid of `user`'s hours for `period`.
///
/// Always 14 rows in date order. Duplicate records for the same cell are
/// summed; days and categories without records are 0.
pub fn build_grid(records: &[TimeRecord], user: &str, period: Period) -> Grid {
    let mut grid = Grid::empty(period);

    for rec in records
        .iter()
        .filter(|r| r.belongs_to(user) && r.in_period(&period))
    {
        if let Some(row) = grid.row_for_mut(rec.date) {
            row.hours[rec.category.index()] += rec.hours;
        }
    }

    grid
}

/// Sparse records for every non-zero cell of `grid`.
///
/// Every cell is validated before anything is emitted: one bad cell rejects
/// the whole grid. Row dates are the period start plus the row offset.
pub fn grid_to_records(
    grid: &Grid,
    user: &str,
    now: NaiveDateTime,
    rules: &HourRules,
) -> AppResult<Vec<TimeRecord>> {
    let period = grid.period;
    if grid.rows.len() != period.days().len() {
        return Err(AppError::InvalidDate(format!(
            "grid for {} has {} rows",
            period,
            grid.rows.len()
        )));
    }

    for (offset, row) in grid.rows.iter().enumerate() {
        let expected = period.start + Days::new(offset as u64);
        if row.date != expected {
            return Err(AppError::InvalidDate(format!(
                "row {} is {}, expected {}",
                offset + 1,
                row.date,
                expected
            )));
        }
        for category in Category::DISPLAY {
            validate_hours(row, category, row.get(category), rules)?;
        }
    }

    let mut out = Vec::new();
    for row in &grid.rows {
        for category in Category::DISPLAY {
            let hours = row.get(category);
            if hours > 0.0 {
                out.push(TimeRecord::new(user, row.date, category, hours, now));
            }
        }
    }

    Ok(out)
}
