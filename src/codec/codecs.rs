//! Reversible codecs for the domain value types.
//!
//! Every codec satisfies the round-trip law `decode(encode(x)) == x` for all
//! valid `x`. Encoding is total; decoding rejects anything outside the
//! grammar with a [`DecodeError`]. No codec converts time zones or rounds
//! numbers — decode is the exact left inverse of encode.

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use chrono_tz::Tz;
use oxilangtag::LanguageTag;
use rust_decimal::Decimal;
use uuid::Uuid;

use super::{DecodeError, Primitive};
use crate::calendar::{MonthDay, Year, YearMonth};

/// A paired encode/decode for one domain type and one wire primitive.
pub trait Codec<T>: Send + Sync {
    /// Encodes a valid in-memory value. Never fails.
    fn encode(&self, value: &T) -> Primitive;

    /// Decodes a wire value, rejecting anything outside the grammar.
    fn decode(&self, wire: &Primitive) -> Result<T, DecodeError>;
}

fn expect_str<'a>(wire: &'a Primitive, expected: &'static str) -> Result<&'a str, DecodeError> {
    wire.as_str().ok_or(DecodeError::WrongShape {
        expected,
        got: wire.kind(),
    })
}

fn expect_int(wire: &Primitive, expected: &'static str) -> Result<i64, DecodeError> {
    wire.as_int().ok_or(DecodeError::WrongShape {
        expected,
        got: wire.kind(),
    })
}

/// UUID as canonical hyphenated hex, lowercase on encode; decode accepts
/// either case.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidCodec;

impl Codec<Uuid> for UuidCodec {
    fn encode(&self, value: &Uuid) -> Primitive {
        Primitive::Str(value.as_hyphenated().to_string())
    }

    fn decode(&self, wire: &Primitive) -> Result<Uuid, DecodeError> {
        let text = expect_str(wire, "UUID string")?;
        Uuid::parse_str(text).map_err(|e| DecodeError::malformed("UUID", text, e))
    }
}

/// Local date-time as ISO-8601 without offset or zone, such as
/// `2023-07-14T08:30:00`; fractional seconds appear only when non-zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalDateTimeCodec;

impl Codec<NaiveDateTime> for LocalDateTimeCodec {
    fn encode(&self, value: &NaiveDateTime) -> Primitive {
        Primitive::Str(value.format("%Y-%m-%dT%H:%M:%S%.f").to_string())
    }

    fn decode(&self, wire: &Primitive) -> Result<NaiveDateTime, DecodeError> {
        let text = expect_str(wire, "local date-time string")?;
        text.parse::<NaiveDateTime>()
            .map_err(|e| DecodeError::malformed("local date-time", text, e))
    }
}

/// Calendar date as ISO-8601 `yyyy-MM-dd`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalDateCodec;

impl Codec<NaiveDate> for LocalDateCodec {
    fn encode(&self, value: &NaiveDate) -> Primitive {
        Primitive::Str(value.format("%Y-%m-%d").to_string())
    }

    fn decode(&self, wire: &Primitive) -> Result<NaiveDate, DecodeError> {
        let text = expect_str(wire, "date string")?;
        text.parse::<NaiveDate>()
            .map_err(|e| DecodeError::malformed("date", text, e))
    }
}

/// UTC instant as ISO-8601 with `Z` suffix, such as `2023-07-14T08:30:00Z`.
#[derive(Debug, Clone, Copy, Default)]
pub struct InstantCodec;

impl Codec<DateTime<Utc>> for InstantCodec {
    fn encode(&self, value: &DateTime<Utc>) -> Primitive {
        Primitive::Str(value.to_rfc3339_opts(SecondsFormat::AutoSi, true))
    }

    fn decode(&self, wire: &Primitive) -> Result<DateTime<Utc>, DecodeError> {
        let text = expect_str(wire, "instant string")?;
        DateTime::parse_from_rfc3339(text)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|e| DecodeError::malformed("instant", text, e))
    }
}

/// Exact decimal in its canonical string form; scale is preserved, nothing
/// is rounded.
#[derive(Debug, Clone, Copy, Default)]
pub struct DecimalCodec;

impl Codec<Decimal> for DecimalCodec {
    fn encode(&self, value: &Decimal) -> Primitive {
        Primitive::Str(value.to_string())
    }

    fn decode(&self, wire: &Primitive) -> Result<Decimal, DecodeError> {
        let text = expect_str(wire, "decimal string")?;
        text.parse::<Decimal>()
            .map_err(|e| DecodeError::malformed("decimal", text, e))
    }
}

/// IANA time zone identifier, such as `America/Chicago`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZoneIdCodec;

impl Codec<Tz> for ZoneIdCodec {
    fn encode(&self, value: &Tz) -> Primitive {
        Primitive::Str(value.name().to_owned())
    }

    fn decode(&self, wire: &Primitive) -> Result<Tz, DecodeError> {
        let text = expect_str(wire, "zone id string")?;
        text.parse::<Tz>()
            .map_err(|e| DecodeError::malformed("zone id", text, e))
    }
}

/// BCP-47 language tag, such as `en-US`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocaleCodec;

impl Codec<LanguageTag<String>> for LocaleCodec {
    fn encode(&self, value: &LanguageTag<String>) -> Primitive {
        Primitive::Str(value.as_str().to_owned())
    }

    fn decode(&self, wire: &Primitive) -> Result<LanguageTag<String>, DecodeError> {
        let text = expect_str(wire, "language tag string")?;
        LanguageTag::parse(text.to_owned())
            .map_err(|e| DecodeError::malformed("language tag", text, e))
    }
}

/// Year as a plain integer.
#[derive(Debug, Clone, Copy, Default)]
pub struct YearAsIntCodec;

impl Codec<Year> for YearAsIntCodec {
    fn encode(&self, value: &Year) -> Primitive {
        Primitive::Int(i64::from(value.value()))
    }

    fn decode(&self, wire: &Primitive) -> Result<Year, DecodeError> {
        let number = expect_int(wire, "year integer")?;
        i32::try_from(number)
            .map(Year::of)
            .map_err(|_| DecodeError::malformed("year", number.to_string(), "out of i32 range"))
    }
}

/// Year as decimal digits in a string.
#[derive(Debug, Clone, Copy, Default)]
pub struct YearAsStringCodec;

impl Codec<Year> for YearAsStringCodec {
    fn encode(&self, value: &Year) -> Primitive {
        Primitive::Str(value.to_string())
    }

    fn decode(&self, wire: &Primitive) -> Result<Year, DecodeError> {
        let text = expect_str(wire, "year string")?;
        text.parse::<Year>()
            .map_err(|e| DecodeError::malformed("year", text, e))
    }
}

/// Year-month as `yyyy-MM`.
#[derive(Debug, Clone, Copy, Default)]
pub struct YearMonthCodec;

impl Codec<YearMonth> for YearMonthCodec {
    fn encode(&self, value: &YearMonth) -> Primitive {
        Primitive::Str(value.to_string())
    }

    fn decode(&self, wire: &Primitive) -> Result<YearMonth, DecodeError> {
        let text = expect_str(wire, "year-month string")?;
        text.parse::<YearMonth>()
            .map_err(|e| DecodeError::malformed("year-month", text, e))
    }
}

/// Month-day as `MM-dd`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MonthDayCodec;

impl Codec<MonthDay> for MonthDayCodec {
    fn encode(&self, value: &MonthDay) -> Primitive {
        Primitive::Str(value.to_string())
    }

    fn decode(&self, wire: &Primitive) -> Result<MonthDay, DecodeError> {
        let text = expect_str(wire, "month-day string")?;
        text.parse::<MonthDay>()
            .map_err(|e| DecodeError::malformed("month-day", text, e))
    }
}
