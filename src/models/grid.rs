//! Dense per-period view of one user's hours.
//! Built fresh from the record set on every render and never persisted.

use super::category::Category;
use super::period::Period;
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GridRow {
    pub date: NaiveDate,
    /// Indexed by `Category::index()`.
    pub hours: [f64; 4],
}

impl GridRow {
    pub fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            hours: [0.0; 4],
        }
    }

    /// Row label as shown on screen, e.g. `Wed 01/03`.
    pub fn label(&self) -> String {
        self.date.format("%a %m/%d").to_string()
    }

    pub fn get(&self, category: Category) -> f64 {
        self.hours[category.index()]
    }

    pub fn set(&mut self, category: Category, hours: f64) {
        self.hours[category.index()] = hours;
    }

    pub fn is_zero(&self) -> bool {
        self.hours.iter().all(|h| *h == 0.0)
    }

    pub fn total(&self) -> f64 {
        self.hours.iter().sum()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Grid {
    pub period: Period,
    pub rows: Vec<GridRow>,
}

impl Grid {
    /// All-zero grid with one row per day of the period.
    pub fn empty(period: Period) -> Self {
        Self {
            period,
            rows: period.days().into_iter().map(GridRow::empty).collect(),
        }
    }

    pub fn row_for(&self, date: NaiveDate) -> Option<&GridRow> {
        self.rows.iter().find(|r| r.date == date)
    }

    pub fn row_for_mut(&mut self, date: NaiveDate) -> Option<&mut GridRow> {
        self.rows.iter_mut().find(|r| r.date == date)
    }

    /// Set one cell. Returns `false` when the date is outside the period.
    pub fn set(&mut self, date: NaiveDate, category: Category, hours: f64) -> bool {
        match self.row_for_mut(date) {
            Some(row) => {
                row.set(category, hours);
                true
            }
            None => false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.iter().all(GridRow::is_zero)
    }

    /// Rows with at least one non-zero cell (reviewer view).
    pub fn non_zero_rows(&self) -> Vec<&GridRow> {
        self.rows.iter().filter(|r| !r.is_zero()).collect()
    }
}
