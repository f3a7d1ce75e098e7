//! Error types for calendar value objects.

use thiserror::Error;

/// Errors that occur when constructing or parsing calendar values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalendarError {
    #[error("Month must be between 1 and 12, got {month}")]
    MonthOutOfRange { month: u8 },

    #[error("Day {day} is out of range for month {month}")]
    DayOutOfRange { month: u8, day: u8 },

    #[error("'{input}' is not a valid {expected}")]
    Malformed { input: String, expected: &'static str },
}

impl CalendarError {
    /// Creates a malformed-input error for the given grammar name.
    pub fn malformed(input: impl Into<String>, expected: &'static str) -> Self {
        CalendarError::Malformed {
            input: input.into(),
            expected,
        }
    }
}
