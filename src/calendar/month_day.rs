//! Month-day value object (`MM-dd`).

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use super::CalendarError;

/// A day of a month without a year, such as `02-29` or `12-25`.
///
/// February 29 is a valid month-day; whether it occurs in a given year is a
/// question for the caller pairing it with a [`super::Year`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthDay {
    month: u8,
    day: u8,
}

impl MonthDay {
    /// Creates a month-day, returning error if either component is out of range.
    pub fn new(month: u8, day: u8) -> Result<Self, CalendarError> {
        if !(1..=12).contains(&month) {
            return Err(CalendarError::MonthOutOfRange { month });
        }
        if day < 1 || day > Self::max_day(month) {
            return Err(CalendarError::DayOutOfRange { month, day });
        }
        Ok(Self { month, day })
    }

    /// Returns the month component (1-12).
    pub fn month(&self) -> u8 {
        self.month
    }

    /// Returns the day component (1 to the month's maximum length).
    pub fn day(&self) -> u8 {
        self.day
    }

    fn max_day(month: u8) -> u8 {
        match month {
            1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
            4 | 6 | 9 | 11 => 30,
            2 => 29,
            _ => 0,
        }
    }
}

impl fmt::Display for MonthDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}-{:02}", self.month, self.day)
    }
}

impl FromStr for MonthDay {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        const EXPECTED: &str = "month-day (MM-dd)";
        let (month_part, day_part) = s
            .split_once('-')
            .ok_or_else(|| CalendarError::malformed(s, EXPECTED))?;
        // Both components are exactly two digits; u8 parsing alone would
        // also take a sign, which is outside the grammar.
        let well_formed = month_part.len() == 2
            && day_part.len() == 2
            && month_part.bytes().all(|b| b.is_ascii_digit())
            && day_part.bytes().all(|b| b.is_ascii_digit());
        if !well_formed {
            return Err(CalendarError::malformed(s, EXPECTED));
        }
        let month = month_part
            .parse::<u8>()
            .map_err(|_| CalendarError::malformed(s, EXPECTED))?;
        let day = day_part
            .parse::<u8>()
            .map_err(|_| CalendarError::malformed(s, EXPECTED))?;
        Self::new(month, day)
    }
}

impl Serialize for MonthDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for MonthDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(D::Error::custom)
    }
}
