//! Domain Wire - Round-trip-safe wire primitives for service payloads
//!
//! This crate provides the serialization vocabulary shared by the service's
//! request and response payloads: reversible codecs for domain value types,
//! an optional-property type for partial updates, and steppable year
//! ranges. Everything here is an immutable value type or a publish-once
//! read-only table, safe to share across threads without coordination.

pub mod calendar;
pub mod clock;
pub mod codec;
pub mod encoding;
pub mod optional;
pub mod uuid_ext;

pub use calendar::{Year, YearProgression, YearRange};
pub use codec::{common_registry, Codec, CodecRegistry, DecodeError, Primitive};
pub use optional::{MissingValueError, OptionalProperty};
