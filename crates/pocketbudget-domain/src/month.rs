//! Month keys identifying budgeting periods.

use std::{fmt, str::FromStr};

use chrono::{Datelike, NaiveDate};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// Identifies one budgeting period as a `YYYY-MM` calendar month.
///
/// Keys order chronologically and serialize to their `YYYY-MM` form, so they
/// can be used directly as JSON map keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthKey {
    year: i32,
    month: u32,
}

impl MonthKey {
    /// Builds a key from its parts. Returns an error unless `month` is 1-12.
    pub fn new(year: i32, month: u32) -> Result<Self, ParseMonthKeyError> {
        if !(1..=12).contains(&month) {
            return Err(ParseMonthKeyError::MonthOutOfRange);
        }
        Ok(Self { year, month })
    }

    /// Returns the key of the calendar month containing `date`.
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Steps back one calendar month; January wraps to December of the
    /// previous year.
    pub fn previous(self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    pub fn year(self) -> i32 {
        self.year
    }

    pub fn month(self) -> u32 {
        self.month
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for MonthKey {
    type Err = ParseMonthKeyError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let (year, month) = raw.split_once('-').ok_or(ParseMonthKeyError::Format)?;
        let year: i32 = year.parse().map_err(|_| ParseMonthKeyError::Format)?;
        let month: u32 = month.parse().map_err(|_| ParseMonthKeyError::Format)?;
        Self::new(year, month)
    }
}

impl Serialize for MonthKey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for MonthKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Errors that can occur when parsing a [`MonthKey`].
pub enum ParseMonthKeyError {
    Format,
    MonthOutOfRange,
}

impl fmt::Display for ParseMonthKeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseMonthKeyError::Format => f.write_str("month key must have the form YYYY-MM"),
            ParseMonthKeyError::MonthOutOfRange => f.write_str("month must be between 01 and 12"),
        }
    }
}

impl std::error::Error for ParseMonthKeyError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_displays_canonical_form() {
        let key: MonthKey = "2024-03".parse().unwrap();
        assert_eq!(key.year(), 2024);
        assert_eq!(key.month(), 3);
        assert_eq!(key.to_string(), "2024-03");
    }

    #[test]
    fn rejects_malformed_input() {
        assert_eq!("2024".parse::<MonthKey>(), Err(ParseMonthKeyError::Format));
        assert_eq!(
            "2024-xx".parse::<MonthKey>(),
            Err(ParseMonthKeyError::Format)
        );
        assert_eq!(
            "2024-13".parse::<MonthKey>(),
            Err(ParseMonthKeyError::MonthOutOfRange)
        );
        assert_eq!(
            "2024-00".parse::<MonthKey>(),
            Err(ParseMonthKeyError::MonthOutOfRange)
        );
    }

    #[test]
    fn previous_wraps_january_to_prior_december() {
        let january = MonthKey::new(2024, 1).unwrap();
        assert_eq!(january.previous(), MonthKey::new(2023, 12).unwrap());
        let march = MonthKey::new(2024, 3).unwrap();
        assert_eq!(march.previous(), MonthKey::new(2024, 2).unwrap());
    }

    #[test]
    fn orders_chronologically() {
        let earlier = MonthKey::new(2023, 12).unwrap();
        let later = MonthKey::new(2024, 1).unwrap();
        assert!(earlier < later);
    }

    #[test]
    fn containing_uses_the_calendar_month() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        assert_eq!(MonthKey::containing(date), MonthKey::new(2024, 3).unwrap());
    }

    #[test]
    fn serializes_as_a_plain_string() {
        let key = MonthKey::new(2024, 3).unwrap();
        assert_eq!(serde_json::to_string(&key).unwrap(), "\"2024-03\"");
        let back: MonthKey = serde_json::from_str("\"2024-03\"").unwrap();
        assert_eq!(back, key);
    }
}
