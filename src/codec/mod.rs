//! Round-trip-safe wire codecs and their registry.
//!
//! A codec pairs a total `encode` with a grammar-checked `decode` for one
//! domain type and one wire primitive; the registry makes codecs reachable
//! by domain type (contextual lookup) or by explicit key.

mod codecs;
mod error;
mod primitive;
mod registry;

pub use codecs::{
    Codec, DecimalCodec, InstantCodec, LocalDateCodec, LocalDateTimeCodec, LocaleCodec,
    MonthDayCodec, UuidCodec, YearAsIntCodec, YearAsStringCodec, YearMonthCodec, ZoneIdCodec,
};
pub use error::DecodeError;
pub use primitive::Primitive;
pub use registry::{
    common_registry, CodecRegistry, CodecRegistryBuilder, YearWireFormat, YEAR_INT_KEY,
    YEAR_STRING_KEY,
};
