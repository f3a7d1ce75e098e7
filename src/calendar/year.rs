//! Calendar year value object.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use super::CalendarError;

/// A calendar year in the proleptic Gregorian calendar.
///
/// On the wire a year is a plain integer by default; the string form is
/// available through [`as_string`] for payloads that carry years as text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Year(i32);

impl Year {
    /// Creates a year from its numeric value.
    pub fn of(value: i32) -> Self {
        Self(value)
    }

    /// Returns the numeric value.
    pub fn value(&self) -> i32 {
        self.0
    }

    /// Returns this year shifted by the given number of years.
    ///
    /// Saturates at the i32 bounds rather than wrapping.
    pub fn plus_years(&self, years: i64) -> Self {
        let shifted = i64::from(self.0).saturating_add(years);
        Self(shifted.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32)
    }

    /// Returns this year shifted backwards by the given number of years.
    pub fn minus_years(&self, years: i64) -> Self {
        self.plus_years(-years)
    }

    /// Returns true if this year is a leap year.
    pub fn is_leap(&self) -> bool {
        (self.0 % 4 == 0 && self.0 % 100 != 0) || self.0 % 400 == 0
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Year {
    type Err = CalendarError;

    /// Parses the canonical decimal form: an optional `-`, then digits with
    /// no leading zeros and no `+` sign.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix('-').unwrap_or(s);
        let canonical = !digits.is_empty()
            && digits.bytes().all(|b| b.is_ascii_digit())
            && (digits.len() == 1 || !digits.starts_with('0'))
            && s != "-0";
        if !canonical {
            return Err(CalendarError::malformed(s, "year"));
        }
        s.parse::<i32>()
            .map(Year)
            .map_err(|_| CalendarError::malformed(s, "year"))
    }
}

impl Serialize for Year {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i32(self.0)
    }
}

impl<'de> Deserialize<'de> for Year {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        i32::deserialize(deserializer).map(Year)
    }
}

/// Serde adapter for fields that carry the year as a decimal string.
///
/// ```ignore
/// #[serde(with = "domain_wire::calendar::year::as_string")]
/// vintage: Year,
/// ```
pub mod as_string {
    use super::Year;
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(year: &Year, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&year.value().to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Year, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse::<Year>().map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_exposes_its_value() {
        assert_eq!(Year::of(2023).value(), 2023);
    }

    #[test]
    fn year_ordering_follows_numeric_order() {
        assert!(Year::of(1999) < Year::of(2000));
        assert!(Year::of(-44) < Year::of(44));
    }

    #[test]
    fn plus_years_shifts_forward_and_backward() {
        assert_eq!(Year::of(2000).plus_years(10), Year::of(2010));
        assert_eq!(Year::of(2000).plus_years(-10), Year::of(1990));
        assert_eq!(Year::of(2000).minus_years(5), Year::of(1995));
    }

    #[test]
    fn plus_years_saturates_at_i32_bounds() {
        assert_eq!(Year::of(i32::MAX).plus_years(1), Year::of(i32::MAX));
        assert_eq!(Year::of(i32::MIN).plus_years(-1), Year::of(i32::MIN));
    }

    #[test]
    fn leap_years_follow_gregorian_rules() {
        assert!(Year::of(2000).is_leap());
        assert!(Year::of(2024).is_leap());
        assert!(!Year::of(1900).is_leap());
        assert!(!Year::of(2023).is_leap());
    }

    #[test]
    fn year_parses_from_string() {
        assert_eq!("2023".parse::<Year>().unwrap(), Year::of(2023));
        assert_eq!("-500".parse::<Year>().unwrap(), Year::of(-500));
    }

    #[test]
    fn year_rejects_non_numeric_string() {
        assert!("twenty".parse::<Year>().is_err());
        assert!("".parse::<Year>().is_err());
    }

    #[test]
    fn year_rejects_signed_and_padded_forms() {
        assert!("+2023".parse::<Year>().is_err());
        assert!("02023".parse::<Year>().is_err());
        assert!("-0500".parse::<Year>().is_err());
        assert!("-0".parse::<Year>().is_err());
    }

    #[test]
    fn year_zero_parses_from_single_digit() {
        assert_eq!("0".parse::<Year>().unwrap(), Year::of(0));
    }

    #[test]
    fn year_rejects_out_of_i32_range_input() {
        assert!("9999999999".parse::<Year>().is_err());
    }

    #[test]
    fn year_serializes_as_integer() {
        let json = serde_json::to_string(&Year::of(2023)).unwrap();
        assert_eq!(json, "2023");
    }

    #[test]
    fn year_deserializes_from_integer() {
        let year: Year = serde_json::from_str("1984").unwrap();
        assert_eq!(year, Year::of(1984));
    }

    #[test]
    fn as_string_adapter_uses_text_form() {
        use serde::{Deserialize, Serialize};

        #[derive(Serialize, Deserialize)]
        struct Dto {
            #[serde(with = "super::as_string")]
            vintage: Year,
        }

        let dto = Dto {
            vintage: Year::of(2019),
        };
        let json = serde_json::to_string(&dto).unwrap();
        assert_eq!(json, r#"{"vintage":"2019"}"#);

        let back: Dto = serde_json::from_str(&json).unwrap();
        assert_eq!(back.vintage, Year::of(2019));
    }
}
