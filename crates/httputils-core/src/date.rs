//! Calendar date model.
//!
//! [`Date`] is a year-month-day value without a time of day. It is written
//! and read as `YYYY-MM-DD`, both in URLs and in JSON.

use chrono::{Datelike, DateTime, NaiveDate, NaiveTime, Utc};
use regex::Regex;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;
use thiserror::Error;

/// Layout used for parsing and formatting dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Earliest year a [`Date`] can hold.
pub const MIN_YEAR: i32 = 0;

/// Latest year a [`Date`] can hold.
pub const MAX_YEAR: i32 = 9999;

fn date_shape() -> &'static Regex {
    static SHAPE: OnceLock<Regex> = OnceLock::new();
    SHAPE.get_or_init(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("valid regex"))
}

/// Error returned when a string is not a valid `YYYY-MM-DD` date.
#[derive(Debug, Error)]
pub enum DateParseError {
    /// The input does not have the `YYYY-MM-DD` shape.
    #[error("cannot parse {0:?} as YYYY-MM-DD")]
    Format(String),

    /// The input has the right shape but names no calendar day.
    #[error("invalid calendar date: {0}")]
    Calendar(#[from] chrono::ParseError),

    /// The year has no four-digit `YYYY` form.
    #[error("year {0} is outside 0..=9999")]
    YearOutOfRange(i32),
}

/// A calendar date, represented internally as midnight UTC of that day.
///
/// # Example
///
/// ```
/// use httputils_core::Date;
///
/// let date = Date::parse("2006-01-02").unwrap();
/// assert_eq!(date.to_string(), "2006-01-02");
/// assert_eq!(date.midnight_utc().to_rfc3339(), "2006-01-02T00:00:00+00:00");
///
/// assert!(Date::parse("9999-99-99").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(NaiveDate);

impl Date {
    /// Parses a strict `YYYY-MM-DD` string.
    pub fn parse(value: &str) -> Result<Self, DateParseError> {
        if !date_shape().is_match(value) {
            return Err(DateParseError::Format(value.to_string()));
        }

        let date = NaiveDate::parse_from_str(value, DATE_FORMAT)?;
        Ok(Self(date))
    }

    /// Creates a date from year, month and day, if they name a real day
    /// with a year in `MIN_YEAR..=MAX_YEAR`.
    #[must_use]
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return None;
        }
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// Returns the underlying `chrono` date.
    #[must_use]
    pub fn naive(&self) -> NaiveDate {
        self.0
    }

    /// Returns the instant at midnight UTC of this day.
    #[must_use]
    pub fn midnight_utc(&self) -> DateTime<Utc> {
        self.0.and_time(NaiveTime::MIN).and_utc()
    }
}

impl TryFrom<NaiveDate> for Date {
    type Error = DateParseError;

    fn try_from(date: NaiveDate) -> Result<Self, Self::Error> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&date.year()) {
            return Err(DateParseError::YearOutOfRange(date.year()));
        }
        Ok(Self(date))
    }
}

impl From<Date> for DateTime<Utc> {
    fn from(date: Date) -> Self {
        date.midnight_utc()
    }
}

impl FromStr for Date {
    type Err = DateParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

impl Serialize for Date {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Date {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Self::parse(&value).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn test_parse_valid_date() {
        let date = Date::parse("2006-01-02").unwrap();

        assert_eq!(date.naive().year(), 2006);
        assert_eq!(date.naive().month(), 1);
        assert_eq!(date.naive().day(), 2);
        assert_eq!(date, Date::from_ymd(2006, 1, 2).unwrap());
    }

    #[test]
    fn test_midnight_utc() {
        let instant = Date::parse("2006-01-02").unwrap().midnight_utc();

        assert_eq!(instant.hour(), 0);
        assert_eq!(instant.minute(), 0);
        assert_eq!(instant.second(), 0);
        assert_eq!(instant.timestamp(), 1_136_160_000);
    }

    #[test]
    fn test_parse_invalid_calendar_date() {
        let err = Date::parse("9999-99-99").unwrap_err();
        assert!(matches!(err, DateParseError::Calendar(_)));

        assert!(Date::parse("2023-02-29").is_err());
    }

    #[test]
    fn test_parse_wrong_shape() {
        for input in ["2006-1-2", "06-01-02", "2006/01/02", "2006-01-02T00:00:00Z", ""] {
            let err = Date::parse(input).unwrap_err();
            assert!(matches!(err, DateParseError::Format(_)), "{input}");
        }
    }

    #[test]
    fn test_display_pads_fields() {
        let date = Date::from_ymd(987, 3, 4).unwrap();
        assert_eq!(date.to_string(), "0987-03-04");
    }

    #[test]
    fn test_years_without_four_digit_form_are_rejected() {
        assert!(Date::from_ymd(10000, 1, 1).is_none());
        assert!(Date::from_ymd(-1, 1, 1).is_none());

        let err = Date::try_from(NaiveDate::from_ymd_opt(10000, 1, 1).unwrap()).unwrap_err();
        assert!(matches!(err, DateParseError::YearOutOfRange(10000)));
        assert!(Date::try_from(NaiveDate::from_ymd_opt(-1, 12, 31).unwrap()).is_err());
    }

    #[test]
    fn test_range_edges_round_trip_through_json() {
        for date in [
            Date::from_ymd(MIN_YEAR, 1, 1).unwrap(),
            Date::from_ymd(7, 8, 9).unwrap(),
            Date::from_ymd(MAX_YEAR, 12, 31).unwrap(),
        ] {
            let json = serde_json::to_string(&date).unwrap();
            let back: Date = serde_json::from_str(&json).unwrap();
            assert_eq!(back, date, "{json}");
        }

        assert_eq!(Date::from_ymd(0, 1, 1).unwrap().to_string(), "0000-01-01");
    }

    #[test]
    fn test_json_representation() {
        let date = Date::parse("2006-01-02").unwrap();

        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, r#""2006-01-02""#);

        let back: Date = serde_json::from_str(&json).unwrap();
        assert_eq!(back, date);

        assert!(serde_json::from_str::<Date>(r#""2006-13-02""#).is_err());
        assert!(serde_json::from_str::<Date>("20060102").is_err());
    }
}
