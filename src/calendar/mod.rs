//! Calendar value objects and year sequences.
//!
//! `Year`, `YearMonth`, and `MonthDay` are the partial-date vocabulary of
//! service payloads; `YearProgression` and `YearRange` provide steppable
//! sequences and closed-range membership over years.

mod errors;
mod month_day;
mod progression;
pub mod year;
mod year_month;

pub use errors::CalendarError;
pub use month_day::MonthDay;
pub use progression::{
    year_range, year_range_from_i32, ProgressionError, YearProgression, YearProgressionIter,
    YearRange,
};
pub use year::Year;
pub use year_month::YearMonth;
