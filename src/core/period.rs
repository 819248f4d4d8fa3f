//! Biweekly pay-period arithmetic.
//!
//! Periods start on the weekday of the configured anchor date and repeat
//! every 14 days from it, in both directions. The anchor fixes the parity, so
//! the set of valid period starts never shifts with the day the list is built.

use crate::models::period::{PERIOD_DAYS, Period};
use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// Where the list of selectable periods begins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PeriodOrigin {
    /// The period containing today.
    #[default]
    Today,
    /// The period containing the earliest stored record (or today, if earlier).
    Earliest,
}

#[derive(Debug, Clone)]
pub struct PeriodCalculator {
    anchor: NaiveDate,
    horizon_weeks: u32,
    origin: PeriodOrigin,
}

impl PeriodCalculator {
    pub fn new(anchor: NaiveDate, horizon_weeks: u32, origin: PeriodOrigin) -> Self {
        Self {
            anchor,
            horizon_weeks,
            origin,
        }
    }

    pub fn anchor_weekday(&self) -> Weekday {
        self.anchor.weekday()
    }

    /// Days from the anchor, modulo `modulus` (always non-negative).
    fn offset(&self, date: NaiveDate, modulus: i64) -> u64 {
        (date - self.anchor).num_days().rem_euclid(modulus) as u64
    }

    pub fn is_period_start(&self, date: NaiveDate) -> bool {
        self.offset(date, PERIOD_DAYS as i64) == 0
    }

    /// The aligned period that contains `date`.
    pub fn period_containing(&self, date: NaiveDate) -> Period {
        Period::new(date - Days::new(self.offset(date, PERIOD_DAYS as i64)))
    }

    /// Every anchor-weekday boundary from the one on or before `from` through `to`.
    pub fn weekly_boundaries(&self, from: NaiveDate, to: NaiveDate) -> Vec<NaiveDate> {
        let mut out = Vec::new();
        let mut d = from - Days::new(self.offset(from, 7));

        while d <= to {
            out.push(d);
            d = d + Days::new(7);
        }

        out
    }

    /// Ordered, selectable period starts.
    ///
    /// The window runs from the period containing the origin date through
    /// `horizon_weeks` weeks after today. Weekly boundaries in that window are
    /// enumerated and every other one is kept, so consecutive entries are
    /// exactly 14 days apart.
    pub fn list_period_starts(
        &self,
        today: NaiveDate,
        earliest_record: Option<NaiveDate>,
    ) -> Vec<NaiveDate> {
        let origin = match self.origin {
            PeriodOrigin::Today => today,
            PeriodOrigin::Earliest => earliest_record.filter(|d| *d < today).unwrap_or(today),
        };

        let window_start = self.period_containing(origin).start;
        let window_end = today + Days::new(u64::from(self.horizon_weeks) * 7);

        self.weekly_boundaries(window_start, window_end)
            .into_iter()
            .filter(|d| self.is_period_start(*d))
            .collect()
    }

    /// Start of the period that holds `today`, chosen among `starts`.
    ///
    /// Before the first candidate we step back 14 days at a time, after the
    /// last we step forward; with no candidates at all the period is anchored
    /// at today.
    pub fn current_period_start(&self, starts: &[NaiveDate], today: NaiveDate) -> NaiveDate {
        let (Some(first), Some(last)) = (starts.first(), starts.last()) else {
            return today;
        };

        if let Some(found) = starts.iter().find(|s| Period::new(**s).contains(today)) {
            return *found;
        }

        let mut period = Period::new(*first);
        if today < period.start {
            while today < period.start {
                period = period.previous();
            }
            return period.start;
        }

        period = Period::new(*last);
        while today > period.end() {
            period = period.next();
        }
        period.start
    }

    /// The default period for a session.
    pub fn current_period(&self, today: NaiveDate, earliest_record: Option<NaiveDate>) -> Period {
        let starts = self.list_period_starts(today, earliest_record);
        Period::new(self.current_period_start(&starts, today))
    }
}
