//! Zone-aware "current value" helpers.
//!
//! Thin wrappers that answer "what year/month/date is it right now in this
//! zone" without the caller juggling time zone conversions.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Utc};
use chrono_tz::Tz;

use crate::calendar::{MonthDay, Year, YearMonth};

/// The current instant in UTC.
pub fn current_instant() -> DateTime<Utc> {
    Utc::now()
}

/// The current wall-clock date-time in the given zone.
pub fn current_local_datetime(zone: Tz) -> NaiveDateTime {
    Utc::now().with_timezone(&zone).naive_local()
}

/// The current calendar date in the given zone.
pub fn current_local_date(zone: Tz) -> NaiveDate {
    current_local_datetime(zone).date()
}

/// The current year in the given zone.
pub fn current_year(zone: Tz) -> Year {
    Year::of(current_local_date(zone).year())
}

/// The current year-month in the given zone.
pub fn current_year_month(zone: Tz) -> YearMonth {
    let date = current_local_date(zone);
    // Month from chrono is always 1-12, so construction cannot fail.
    YearMonth::new(date.year(), date.month() as u8)
        .unwrap_or_else(|_| unreachable!("chrono produced an out-of-range month"))
}

/// The current month-day in the given zone.
pub fn current_month_day(zone: Tz) -> MonthDay {
    let date = current_local_date(zone);
    MonthDay::new(date.month() as u8, date.day() as u8)
        .unwrap_or_else(|_| unreachable!("chrono produced an out-of-range month-day"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn current_values_are_internally_consistent() {
        let zone = chrono_tz::America::Chicago;
        let date = current_local_date(zone);
        let year = current_year(zone);
        // Tolerate a year rollover between the two calls.
        assert!((year.value() - date.year()).abs() <= 1);
    }

    #[test]
    fn zones_across_the_date_line_differ_by_at_most_a_day() {
        let west = current_local_date(chrono_tz::Pacific::Honolulu);
        let east = current_local_date(chrono_tz::Pacific::Kiritimati);
        let gap = (east - west).num_days();
        assert!((0..=2).contains(&gap), "unexpected gap: {gap}");
    }

    #[test]
    fn current_month_day_matches_current_date() {
        let zone = chrono_tz::Europe::London;
        let date = current_local_date(zone);
        let md = current_month_day(zone);
        // A midnight rollover between calls can shift the day; re-read and
        // accept either snapshot.
        let date_after = current_local_date(zone);
        let matches_before =
            md.month() == date.month() as u8 && md.day() == date.day() as u8;
        let matches_after =
            md.month() == date_after.month() as u8 && md.day() == date_after.day() as u8;
        assert!(matches_before || matches_after);
    }

    #[test]
    fn current_instant_is_utc_now_adjacent() {
        let before = Utc::now();
        let instant = current_instant();
        let after = Utc::now();
        assert!(before <= instant && instant <= after);
    }
}
