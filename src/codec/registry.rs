//! Type-indexed codec registry.
//!
//! Built once, then shared read-only; lookups are pure reads with no
//! locking. Contextual lookup dispatches on the domain type; named lookup
//! selects a specific codec where one type has more than one wire form
//! (the two Year codecs).

use once_cell::sync::Lazy;
use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::Arc;

use super::codecs::{
    Codec, DecimalCodec, InstantCodec, LocalDateCodec, LocalDateTimeCodec, LocaleCodec,
    MonthDayCodec, UuidCodec, YearAsIntCodec, YearAsStringCodec, YearMonthCodec, ZoneIdCodec,
};

/// Registry key for the integer Year codec.
pub const YEAR_INT_KEY: &str = "year-int";

/// Registry key for the string Year codec.
pub const YEAR_STRING_KEY: &str = "year-string";

/// Which wire form the contextual Year codec uses.
///
/// Both Year codecs are always registered under [`YEAR_INT_KEY`] and
/// [`YEAR_STRING_KEY`]; this only selects which one answers contextual
/// lookups for `Year`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum YearWireFormat {
    /// Year travels as a plain integer.
    #[default]
    Integer,
    /// Year travels as decimal digits in a string.
    Text,
}

// Box holds an Arc<dyn Codec<T>> for some T; get() downcasts it back.
type ErasedCodec = Box<dyn Any + Send + Sync>;

/// Immutable mapping from domain type (and explicit key) to codec.
pub struct CodecRegistry {
    by_type: HashMap<TypeId, ErasedCodec>,
    by_key: HashMap<&'static str, ErasedCodec>,
}

impl CodecRegistry {
    /// Starts building a registry.
    pub fn builder() -> CodecRegistryBuilder {
        CodecRegistryBuilder {
            by_type: HashMap::new(),
            by_key: HashMap::new(),
        }
    }

    /// Builds the standard registry covering all supported domain types.
    pub fn common(year_format: YearWireFormat) -> Self {
        let builder = Self::builder()
            .register("uuid", UuidCodec)
            .register("local-date-time", LocalDateTimeCodec)
            .register("local-date", LocalDateCodec)
            .register("instant", InstantCodec)
            .register("decimal", DecimalCodec)
            .register("zone-id", ZoneIdCodec)
            .register("locale", LocaleCodec)
            .register("year-month", YearMonthCodec)
            .register("month-day", MonthDayCodec);
        let builder = match year_format {
            YearWireFormat::Integer => builder
                .register(YEAR_INT_KEY, YearAsIntCodec)
                .register_named(YEAR_STRING_KEY, YearAsStringCodec),
            YearWireFormat::Text => builder
                .register(YEAR_STRING_KEY, YearAsStringCodec)
                .register_named(YEAR_INT_KEY, YearAsIntCodec),
        };
        builder.build()
    }

    /// Contextual lookup: the default codec for the domain type `T`.
    pub fn get<T: 'static>(&self) -> Option<Arc<dyn Codec<T>>> {
        self.by_type
            .get(&TypeId::of::<T>())
            .and_then(|erased| erased.downcast_ref::<Arc<dyn Codec<T>>>())
            .cloned()
    }

    /// Explicit lookup by registration key.
    ///
    /// Returns `None` when the key is unknown or registered for a different
    /// domain type than `T`.
    pub fn get_named<T: 'static>(&self, key: &str) -> Option<Arc<dyn Codec<T>>> {
        self.by_key
            .get(key)
            .and_then(|erased| erased.downcast_ref::<Arc<dyn Codec<T>>>())
            .cloned()
    }

    /// Returns true if a contextual codec is registered for `T`.
    pub fn contains<T: 'static>(&self) -> bool {
        self.by_type.contains_key(&TypeId::of::<T>())
    }

    /// Number of registered codec entries (named keys).
    pub fn len(&self) -> usize {
        self.by_key.len()
    }

    /// Returns true if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.by_key.is_empty()
    }
}

impl std::fmt::Debug for CodecRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CodecRegistry")
            .field("entries", &self.by_key.len())
            .finish()
    }
}

/// Accumulates registrations, then freezes them into a [`CodecRegistry`].
pub struct CodecRegistryBuilder {
    by_type: HashMap<TypeId, ErasedCodec>,
    by_key: HashMap<&'static str, ErasedCodec>,
}

impl CodecRegistryBuilder {
    /// Registers a codec under `key` and claims the contextual slot for `T`
    /// if no codec holds it yet.
    pub fn register<T: 'static>(
        mut self,
        key: &'static str,
        codec: impl Codec<T> + 'static,
    ) -> Self {
        let codec: Arc<dyn Codec<T>> = Arc::new(codec);
        self.by_type
            .entry(TypeId::of::<T>())
            .or_insert_with(|| Box::new(codec.clone()));
        self.by_key.insert(key, Box::new(codec));
        self
    }

    /// Registers a codec under `key` only, leaving the contextual slot for
    /// `T` untouched.
    pub fn register_named<T: 'static>(
        mut self,
        key: &'static str,
        codec: impl Codec<T> + 'static,
    ) -> Self {
        let codec: Arc<dyn Codec<T>> = Arc::new(codec);
        self.by_key.insert(key, Box::new(codec));
        self
    }

    /// Freezes the registrations into an immutable registry.
    pub fn build(self) -> CodecRegistry {
        tracing::debug!(entries = self.by_key.len(), "codec registry built");
        CodecRegistry {
            by_type: self.by_type,
            by_key: self.by_key,
        }
    }
}

static COMMON: Lazy<CodecRegistry> = Lazy::new(|| CodecRegistry::common(YearWireFormat::Integer));

/// Process-wide default registry: all standard codecs, integer Year form.
///
/// Built on first use, then shared read-only across threads.
pub fn common_registry() -> &'static CodecRegistry {
    &COMMON
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::{MonthDay, Year, YearMonth};
    use crate::codec::Primitive;
    use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
    use oxilangtag::LanguageTag;
    use rust_decimal::Decimal;
    use uuid::Uuid;

    #[test]
    fn common_registry_covers_every_domain_type() {
        let registry = common_registry();
        assert!(registry.contains::<Uuid>());
        assert!(registry.contains::<NaiveDateTime>());
        assert!(registry.contains::<NaiveDate>());
        assert!(registry.contains::<DateTime<Utc>>());
        assert!(registry.contains::<Decimal>());
        assert!(registry.contains::<chrono_tz::Tz>());
        assert!(registry.contains::<LanguageTag<String>>());
        assert!(registry.contains::<Year>());
        assert!(registry.contains::<YearMonth>());
        assert!(registry.contains::<MonthDay>());
        assert_eq!(registry.len(), 11);
    }

    #[test]
    fn contextual_lookup_returns_working_codec() {
        let codec = common_registry().get::<Uuid>().unwrap();
        let uuid = Uuid::parse_str("27c3e7c6-88dc-4fcb-a54d-234abc0901fc").unwrap();
        let wire = codec.encode(&uuid);
        assert_eq!(codec.decode(&wire).unwrap(), uuid);
    }

    #[test]
    fn lookup_for_unregistered_type_returns_none() {
        assert!(common_registry().get::<String>().is_none());
        assert!(!common_registry().contains::<String>());
    }

    #[test]
    fn default_year_codec_is_integer() {
        let codec = common_registry().get::<Year>().unwrap();
        assert_eq!(codec.encode(&Year::of(2023)), Primitive::from(2023));
    }

    #[test]
    fn text_year_format_moves_contextual_slot() {
        let registry = CodecRegistry::common(YearWireFormat::Text);
        let codec = registry.get::<Year>().unwrap();
        assert_eq!(codec.encode(&Year::of(2023)), Primitive::from("2023"));
    }

    #[test]
    fn both_year_codecs_stay_reachable_by_key() {
        for registry in [
            CodecRegistry::common(YearWireFormat::Integer),
            CodecRegistry::common(YearWireFormat::Text),
        ] {
            let as_int = registry.get_named::<Year>(YEAR_INT_KEY).unwrap();
            let as_string = registry.get_named::<Year>(YEAR_STRING_KEY).unwrap();
            assert_eq!(as_int.encode(&Year::of(1999)), Primitive::from(1999));
            assert_eq!(as_string.encode(&Year::of(1999)), Primitive::from("1999"));
        }
    }

    #[test]
    fn named_lookup_with_wrong_type_returns_none() {
        assert!(common_registry().get_named::<Uuid>(YEAR_INT_KEY).is_none());
        assert!(common_registry().get_named::<Year>("no-such-key").is_none());
    }

    #[test]
    fn first_contextual_registration_wins() {
        let registry = CodecRegistry::builder()
            .register("year-a", YearAsStringCodec)
            .register("year-b", YearAsIntCodec)
            .build();
        let codec = registry.get::<Year>().unwrap();
        assert_eq!(codec.encode(&Year::of(2000)), Primitive::from("2000"));
        // The later registration is still reachable by key.
        assert!(registry.get_named::<Year>("year-b").is_some());
    }

    #[test]
    fn registry_is_usable_from_multiple_threads() {
        let handles: Vec<_> = (0..4)
            .map(|i| {
                std::thread::spawn(move || {
                    let codec = common_registry().get::<Year>().unwrap();
                    let year = Year::of(2000 + i);
                    codec.decode(&codec.encode(&year)).unwrap()
                })
            })
            .collect();
        for (i, handle) in handles.into_iter().enumerate() {
            assert_eq!(handle.join().unwrap(), Year::of(2000 + i as i32));
        }
    }
}
