//! Optional property for partial-update payloads.
//!
//! Distinguishes "field not supplied" from "field explicitly null": a field
//! of type `OptionalProperty<Option<T>>` can be `NotPresent` (omitted),
//! `Present(None)` (explicit null), or `Present(Some(v))`.

use serde::ser::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Error returned when forcing a value out of an absent property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("No value present on optional property")]
pub struct MissingValueError;

/// A field value that is either absent or present.
///
/// `Default` is `NotPresent`, so record fields deserialize missing keys to
/// absent with `#[serde(default)]`. Serializing a `NotPresent` value is a
/// logic error and fails loudly (see [`Serialize`] below); correct usage
/// skips absent fields:
///
/// ```ignore
/// #[serde(default, skip_serializing_if = "OptionalProperty::is_absent")]
/// display_name: OptionalProperty<Option<String>>,
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionalProperty<T> {
    /// The field was not supplied at all.
    NotPresent,
    /// The field was supplied with this value (which may itself be `None`).
    Present(T),
}

impl<T> OptionalProperty<T> {
    /// Wraps a value; always yields `Present`.
    pub fn wrap(value: T) -> Self {
        OptionalProperty::Present(value)
    }

    /// Returns true if a value is present.
    pub fn is_present(&self) -> bool {
        matches!(self, OptionalProperty::Present(_))
    }

    /// Returns true if no value was supplied.
    pub fn is_absent(&self) -> bool {
        matches!(self, OptionalProperty::NotPresent)
    }

    /// Returns a reference to the value, if present.
    pub fn value(&self) -> Option<&T> {
        match self {
            OptionalProperty::NotPresent => None,
            OptionalProperty::Present(value) => Some(value),
        }
    }

    /// Consumes the property, returning the value or an error if absent.
    pub fn into_value(self) -> Result<T, MissingValueError> {
        match self {
            OptionalProperty::NotPresent => Err(MissingValueError),
            OptionalProperty::Present(value) => Ok(value),
        }
    }

    /// Consumes the property, returning the value or the given default.
    pub fn value_or(self, default: T) -> T {
        match self {
            OptionalProperty::NotPresent => default,
            OptionalProperty::Present(value) => value,
        }
    }

    /// Converts `&OptionalProperty<T>` to `OptionalProperty<&T>`.
    pub fn as_ref(&self) -> OptionalProperty<&T> {
        match self {
            OptionalProperty::NotPresent => OptionalProperty::NotPresent,
            OptionalProperty::Present(value) => OptionalProperty::Present(value),
        }
    }

    /// Maps the present value, leaving absence untouched.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> OptionalProperty<U> {
        match self {
            OptionalProperty::NotPresent => OptionalProperty::NotPresent,
            OptionalProperty::Present(value) => OptionalProperty::Present(f(value)),
        }
    }
}

impl<T> Default for OptionalProperty<T> {
    fn default() -> Self {
        OptionalProperty::NotPresent
    }
}

impl<T> From<T> for OptionalProperty<T> {
    fn from(value: T) -> Self {
        OptionalProperty::Present(value)
    }
}

/// Wraps a value in a present property.
pub fn present<T>(value: T) -> OptionalProperty<T> {
    OptionalProperty::wrap(value)
}

impl<T: Serialize> Serialize for OptionalProperty<T> {
    /// Serializes the present value directly.
    ///
    /// Serializing `NotPresent` fails instead of emitting null: an absent
    /// field must be skipped by the emitting layer, and reaching this point
    /// means the skip configuration is missing.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            OptionalProperty::NotPresent => Err(S::Error::custom(
                "Tried to serialize an optional property that had no value present. \
                 Is the field missing `skip_serializing_if = \"OptionalProperty::is_absent\"`?",
            )),
            OptionalProperty::Present(value) => value.serialize(serializer),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for OptionalProperty<T> {
    /// Deserializes to `Present`; absence only arises from the field being
    /// missing entirely, which serde routes through `Default`.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        T::deserialize(deserializer).map(OptionalProperty::Present)
    }
}
