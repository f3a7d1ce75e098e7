//! Year-month value object (`yyyy-MM`).

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use super::{CalendarError, Year};

/// A specific month within a specific year, such as `2023-07`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    year: i32,
    month: u8,
}

impl YearMonth {
    /// Creates a year-month, returning error if the month is out of range.
    pub fn new(year: i32, month: u8) -> Result<Self, CalendarError> {
        if !(1..=12).contains(&month) {
            return Err(CalendarError::MonthOutOfRange { month });
        }
        Ok(Self { year, month })
    }

    /// Returns the year component.
    pub fn year(&self) -> Year {
        Year::of(self.year)
    }

    /// Returns the month component (1-12).
    pub fn month(&self) -> u8 {
        self.month
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.year < 0 {
            write!(f, "-{:04}-{:02}", -i64::from(self.year), self.month)
        } else {
            write!(f, "{:04}-{:02}", self.year, self.month)
        }
    }
}

impl FromStr for YearMonth {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        const EXPECTED: &str = "year-month (yyyy-MM)";
        // rsplit keeps a leading sign on the year component intact.
        let (year_part, month_part) = s
            .rsplit_once('-')
            .ok_or_else(|| CalendarError::malformed(s, EXPECTED))?;
        // Month is exactly two digits; the year is at least four digits with
        // an optional leading minus. A `+` sign or stray characters anywhere
        // are outside the grammar even where i32/u8 parsing would take them.
        let year_digits = year_part.strip_prefix('-').unwrap_or(year_part);
        let well_formed = month_part.len() == 2
            && month_part.bytes().all(|b| b.is_ascii_digit())
            && year_digits.len() >= 4
            && year_digits.bytes().all(|b| b.is_ascii_digit());
        if !well_formed {
            return Err(CalendarError::malformed(s, EXPECTED));
        }
        let year = year_part
            .parse::<i32>()
            .map_err(|_| CalendarError::malformed(s, EXPECTED))?;
        let month = month_part
            .parse::<u8>()
            .map_err(|_| CalendarError::malformed(s, EXPECTED))?;
        Self::new(year, month)
    }
}

impl Serialize for YearMonth {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for YearMonth {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(D::Error::custom)
    }
}
