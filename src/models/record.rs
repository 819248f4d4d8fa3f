use super::category::Category;
use crate::models::period::Period;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Format used for `LastUpdated` / `EnteredPayment` in every backend.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One entry of hours for one user, one date, one category.
///
/// Field names on the wire follow the shared document layout
/// (`User`, `Date`, `TimeType`, `Hours`, `LastUpdated`, `EnteredPayment`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeRecord {
    #[serde(rename = "User")]
    pub user: String,

    #[serde(rename = "Date", with = "serde_date")]
    pub date: NaiveDate,

    #[serde(rename = "TimeType")]
    pub category: Category,

    #[serde(rename = "Hours")]
    pub hours: f64,

    #[serde(rename = "LastUpdated", with = "serde_timestamp")]
    pub last_updated: NaiveDateTime,

    /// Empty string on the wire when the period is not yet entered for payment.
    #[serde(rename = "EnteredPayment", default, with = "serde_optional_timestamp")]
    pub entered_for_payment: Option<NaiveDateTime>,
}

impl TimeRecord {
    pub fn new(
        user: &str,
        date: NaiveDate,
        category: Category,
        hours: f64,
        last_updated: NaiveDateTime,
    ) -> Self {
        Self {
            user: user.to_string(),
            date,
            category,
            hours,
            last_updated,
            entered_for_payment: None,
        }
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn last_updated_str(&self) -> String {
        self.last_updated.format(TIMESTAMP_FORMAT).to_string()
    }

    /// Stored form of `entered_for_payment` ("" when unset).
    pub fn entered_payment_str(&self) -> String {
        self.entered_for_payment
            .map(|ts| ts.format(TIMESTAMP_FORMAT).to_string())
            .unwrap_or_default()
    }

    pub fn belongs_to(&self, user: &str) -> bool {
        self.user == user
    }

    pub fn in_period(&self, period: &Period) -> bool {
        period.contains(self.date)
    }

    pub fn is_paid(&self) -> bool {
        self.entered_for_payment.is_some()
    }
}

mod serde_date {
    use crate::utils::date::parse_record_date;
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn serialize<S: Serializer>(d: &NaiveDate, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&d.format("%Y-%m-%d").to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(d)?;
        parse_record_date(&raw).ok_or_else(|| de::Error::custom(format!("invalid date '{raw}'")))
    }
}

mod serde_timestamp {
    use super::TIMESTAMP_FORMAT;
    use crate::utils::date::parse_timestamp;
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn serialize<S: Serializer>(ts: &NaiveDateTime, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&ts.format(TIMESTAMP_FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(d)?;
        parse_timestamp(&raw).ok_or_else(|| de::Error::custom(format!("invalid timestamp '{raw}'")))
    }
}

mod serde_optional_timestamp {
    use super::TIMESTAMP_FORMAT;
    use crate::utils::date::parse_timestamp;
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(ts: &Option<NaiveDateTime>, s: S) -> Result<S::Ok, S::Error> {
        match ts {
            Some(t) => s.serialize_str(&t.format(TIMESTAMP_FORMAT).to_string()),
            None => s.serialize_str(""),
        }
    }

    /// Empty, null and unparsable markers all read as "not entered".
    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<NaiveDateTime>, D::Error> {
        let raw: Option<String> = Option::deserialize(d)?;
        Ok(raw.as_deref().and_then(parse_timestamp))
    }
}
