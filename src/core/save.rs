use crate::core::grid::{HourRules, grid_to_records};
use crate::errors::AppResult;
use crate::models::grid::Grid;
use crate::models::record::TimeRecord;
use crate::store::RecordStore;
use chrono::NaiveDateTime;

/// What a save did to the user's slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaveOutcome {
    /// Records written for the edited period.
    pub written: usize,
    /// Records that previously existed for the edited period.
    pub replaced: usize,
    /// The user's records outside the period, carried over unchanged.
    pub kept: usize,
}

/// High-level business logic for saving an edited grid.
pub struct SaveLogic;

impl SaveLogic {
    /// Replace `user`'s records for `grid.period` with the grid contents.
    ///
    /// The store replaces per user, so the write carries the user's records
    /// from every other period as well. Nothing is written when a cell fails
    /// validation. After `Ok`, callers reload from the store before showing
    /// totals.
    pub fn apply(
        store: &mut dyn RecordStore,
        user: &str,
        grid: &Grid,
        now: NaiveDateTime,
        rules: &HourRules,
    ) -> AppResult<SaveOutcome> {
        let period = grid.period;

        // 1️⃣ Validate and convert the edited grid
        let new_for_user = grid_to_records(grid, user, now, rules)?;

        // 2️⃣ Everything currently stored
        let all_records = store.load_all()?;

        // 3️⃣ The user's records outside the edited period
        let (in_period, outside): (Vec<TimeRecord>, Vec<TimeRecord>) = all_records
            .into_iter()
            .filter(|r| r.belongs_to(user))
            .partition(|r| r.in_period(&period));

        let outcome = SaveOutcome {
            written: new_for_user.len(),
            replaced: in_period.len(),
            kept: outside.len(),
        };

        // 4️⃣ Full replace of the user's document
        let mut slice = outside;
        slice.extend(new_for_user);
        slice.sort_by(|a, b| {
            a.date
                .cmp(&b.date)
                .then(a.category.index().cmp(&b.category.index()))
        });
        store.save_user_slice(user, &slice)?;

        Ok(outcome)
    }
}
