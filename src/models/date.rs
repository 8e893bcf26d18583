//! Expense dates
//!
//! Dates are entered and stored as `DD-MM-YYYY` text. Validation is strict:
//! two-digit day, two-digit month, four-digit year, and the day must exist
//! in that month of that year.

use chrono::{Local, NaiveDate};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::{ExpenseError, ExpenseResult};

/// chrono format string matching the artifact encoding
pub const DATE_FORMAT: &str = "%d-%m-%Y";

/// Days in each month of a non-leap year, January first
const DAYS_IN_MONTH: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Gregorian leap year rule
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Number of days in `month` (1-12) of `year`; 0 for an out-of-range month
pub fn days_in_month(month: u32, year: i32) -> u32 {
    match month {
        2 if is_leap_year(year) => 29,
        1..=12 => DAYS_IN_MONTH[(month - 1) as usize],
        _ => 0,
    }
}

/// Check whether `input` is a valid `DD-MM-YYYY` date
pub fn is_valid_date(input: &str) -> bool {
    ExpenseDate::parse(input).is_ok()
}

/// A validated calendar date for an expense
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ExpenseDate(NaiveDate);

impl ExpenseDate {
    /// Parse and validate `DD-MM-YYYY` text
    pub fn parse(input: &str) -> ExpenseResult<Self> {
        let invalid = || ExpenseError::InvalidDate(input.to_string());

        let bytes = input.as_bytes();
        let shape_ok = bytes.len() == 10
            && bytes[2] == b'-'
            && bytes[5] == b'-'
            && bytes
                .iter()
                .enumerate()
                .all(|(i, b)| i == 2 || i == 5 || b.is_ascii_digit());
        if !shape_ok {
            return Err(invalid());
        }

        let day: u32 = input[0..2].parse().map_err(|_| invalid())?;
        let month: u32 = input[3..5].parse().map_err(|_| invalid())?;
        let year: i32 = input[6..10].parse().map_err(|_| invalid())?;

        if !(1..=12).contains(&month) || day < 1 || day > days_in_month(month, year) {
            return Err(invalid());
        }

        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or_else(invalid)
    }

    /// Today's date in the local timezone
    pub fn today() -> Self {
        Self(Local::now().date_naive())
    }
}

impl fmt::Display for ExpenseDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

impl FromStr for ExpenseDate {
    type Err = ExpenseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for ExpenseDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ExpenseDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        ExpenseDate::parse(&text).map_err(de::Error::custom)
    }
}
