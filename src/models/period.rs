use chrono::{Days, NaiveDate};
use serde::Serialize;
use std::fmt;

/// Number of calendar days in a pay period.
pub const PERIOD_DAYS: u64 = 14;

/// A 14-day biweekly window, identified by its first day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Period {
    pub start: NaiveDate,
}

impl Period {
    pub fn new(start: NaiveDate) -> Self {
        Self { start }
    }

    /// Last day of the period (start + 13 days).
    pub fn end(&self) -> NaiveDate {
        self.start + Days::new(PERIOD_DAYS - 1)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end()
    }

    /// All 14 days in order.
    pub fn days(&self) -> Vec<NaiveDate> {
        self.start.iter_days().take(PERIOD_DAYS as usize).collect()
    }

    /// The period immediately before this one.
    pub fn previous(&self) -> Self {
        Self::new(self.start - Days::new(PERIOD_DAYS))
    }

    /// The period immediately after this one.
    pub fn next(&self) -> Self {
        Self::new(self.start + Days::new(PERIOD_DAYS))
    }

    pub fn start_str(&self) -> String {
        self.start.format("%m/%d/%Y").to_string()
    }

    pub fn end_str(&self) -> String {
        self.end().format("%m/%d/%Y").to_string()
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.start_str(), self.end_str())
    }
}
