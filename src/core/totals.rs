use crate::models::category::Category;
use crate::models::grid::Grid;
use crate::models::record::TimeRecord;
use chrono::NaiveDateTime;

/// Biweekly per-category sums of a grid.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Totals {
    by_category: [f64; 4],
}

impl Totals {
    pub fn from_grid(grid: &Grid) -> Self {
        let mut by_category = [0.0; 4];
        for row in &grid.rows {
            for (sum, h) in by_category.iter_mut().zip(row.hours.iter()) {
                *sum += h;
            }
        }
        Self { by_category }
    }

    pub fn get(&self, category: Category) -> f64 {
        self.by_category[category.index()]
    }

    pub fn total(&self) -> f64 {
        self.by_category.iter().sum()
    }
}

/// Latest write that touched any of `user`'s records, in any period.
pub fn last_updated_for(records: &[TimeRecord], user: &str) -> Option<NaiveDateTime> {
    records
        .iter()
        .filter(|r| r.belongs_to(user))
        .map(|r| r.last_updated)
        .max()
}
