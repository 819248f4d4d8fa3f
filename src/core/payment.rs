//! Entered-for-payment state of a period.
//!
//! A record matches when its user is in `users`, its date is in the period and
//! it has hours. Marking and resetting rewrite the whole store, since one
//! action spans every user.

use crate::errors::AppResult;
use crate::models::period::Period;
use crate::models::record::TimeRecord;
use crate::store::RecordStore;
use chrono::NaiveDateTime;

fn matches(rec: &TimeRecord, users: &[String], period: &Period) -> bool {
    users.iter().any(|u| rec.belongs_to(u)) && rec.in_period(period) && rec.hours > 0.0
}

/// True only when at least one record matches and every match is marked.
pub fn is_period_paid(records: &[TimeRecord], users: &[String], period: &Period) -> bool {
    let mut matching = records.iter().filter(|r| matches(r, users, period)).peekable();
    matching.peek().is_some() && matching.all(TimeRecord::is_paid)
}

/// Most recent payment mark among matching records.
pub fn latest_payment(
    records: &[TimeRecord],
    users: &[String],
    period: &Period,
) -> Option<NaiveDateTime> {
    records
        .iter()
        .filter(|r| matches(r, users, period))
        .filter_map(|r| r.entered_for_payment)
        .max()
}

pub fn mark_paid(
    records: Vec<TimeRecord>,
    users: &[String],
    period: &Period,
    timestamp: NaiveDateTime,
) -> Vec<TimeRecord> {
    records
        .into_iter()
        .map(|mut r| {
            if matches(&r, users, period) {
                r.entered_for_payment = Some(timestamp);
            }
            r
        })
        .collect()
}

pub fn reset_paid(records: Vec<TimeRecord>, users: &[String], period: &Period) -> Vec<TimeRecord> {
    records
        .into_iter()
        .map(|mut r| {
            if matches(&r, users, period) {
                r.entered_for_payment = None;
            }
            r
        })
        .collect()
}

/// Result of a payment action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentChange {
    /// This many records changed state.
    Updated(usize),
    /// The period was already in the requested state.
    Unchanged,
    /// No record in the period has hours.
    NothingToMark,
}

pub struct PaymentLogic;

impl PaymentLogic {
    /// Mark the period entered for payment for `users` (load, mutate, write all).
    pub fn enter(
        store: &mut dyn RecordStore,
        users: &[String],
        period: &Period,
        now: NaiveDateTime,
    ) -> AppResult<PaymentChange> {
        let records = store.load_all()?;

        if is_period_paid(&records, users, period) {
            return Ok(PaymentChange::Unchanged);
        }

        let to_mark = records.iter().filter(|r| matches(r, users, period)).count();
        if to_mark == 0 {
            return Ok(PaymentChange::NothingToMark);
        }

        let updated = mark_paid(records, users, period, now);
        store.replace_all(&updated)?;
        Ok(PaymentChange::Updated(to_mark))
    }

    /// Clear the payment mark for `users` in the period.
    pub fn reset(
        store: &mut dyn RecordStore,
        users: &[String],
        period: &Period,
    ) -> AppResult<PaymentChange> {
        let records = store.load_all()?;

        let marked = records
            .iter()
            .filter(|r| matches(r, users, period) && r.is_paid())
            .count();
        if marked == 0 {
            return Ok(PaymentChange::Unchanged);
        }

        let updated = reset_paid(records, users, period);
        store.replace_all(&updated)?;
        Ok(PaymentChange::Updated(marked))
    }
}
