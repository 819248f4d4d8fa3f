//! Date helpers: clock selection, lenient parsing of stored values, display formats.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, Timelike, Utc};
use serde::{Deserialize, Serialize};

/// Which wall clock "today" and "now" are read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Clock {
    #[default]
    Local,
    Utc,
}

impl Clock {
    /// Current time truncated to whole seconds (the stored precision).
    pub fn now(&self) -> NaiveDateTime {
        let now = match self {
            Clock::Local => Local::now().naive_local(),
            Clock::Utc => Utc::now().naive_utc(),
        };
        now.with_nanosecond(0).unwrap_or(now)
    }
}

/// Parse a user-supplied date: `YYYY-MM-DD` or `MM/DD/YYYY`.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(s, "%m/%d/%Y"))
        .ok()
}

/// Parse a stored record date.
///
/// Older documents carry a full timestamp (`2024-01-03 00:00:00-05:00` or
/// `2024-01-03T00:00:00`); only the calendar part is meaningful.
pub fn parse_record_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if let Some(d) = parse_date(s) {
        return Some(d);
    }
    s.get(..10)
        .and_then(|head| NaiveDate::parse_from_str(head, "%Y-%m-%d").ok())
}

/// Parse a stored timestamp. Empty input means "no timestamp".
pub fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S"))
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.naive_local()))
}

/// `January 03, 2024 at 10:15 AM`
pub fn format_pretty(ts: &NaiveDateTime) -> String {
    ts.format("%B %d, %Y at %I:%M %p").to_string()
}
