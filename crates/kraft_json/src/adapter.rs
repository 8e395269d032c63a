use alloc::boxed::Box;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::any::Any;
use core::fmt;

use serde_core::de::{DeserializeSeed, Deserializer, Error, Visitor};
use serde_core::ser::{SerializeMap, SerializeSeq};
use serde_core::{Serialize, Serializer};

use kraft_reflect::info::TypeInfo;

use crate::Json;
use crate::error::{AdapterError, Expecting};

// -----------------------------------------------------------------------------
// TypeAdapter

/// Converts values of one type from and to JSON.
///
/// Values travel as `dyn Any`, the adapter knows the concrete type.
/// Adapters are built once per type by a [`TypeAdapterFactory`] and then
/// shared between threads.
pub trait TypeAdapter: Send + Sync {
    /// Checks that values can be read at all, before any input is consumed.
    fn check_read(&self) -> Result<(), AdapterError> {
        Ok(())
    }

    /// Reads one value, `Ok(None)` stands for JSON `null`.
    fn read(
        &self,
        deserializer: &mut dyn erased_serde::Deserializer<'_>,
    ) -> Result<Option<Box<dyn Any>>, erased_serde::Error>;

    /// Writes one value, `None` stands for a missing value.
    fn write<'a>(&self, value: Option<&'a dyn Any>) -> Result<Encoded<'a>, AdapterError>;
}

// -----------------------------------------------------------------------------
// TypeAdapterFactory

/// Creates adapters for the types it supports.
///
/// Factories are asked in registration order. A factory returns `Ok(None)`
/// for a type it does not handle, so that the next one is asked. An error
/// stops the lookup.
pub trait TypeAdapterFactory: Send + Sync + 'static {
    fn create(
        &self,
        json: &Json,
        info: &'static TypeInfo,
    ) -> Result<Option<Arc<dyn TypeAdapter>>, AdapterError>;
}

// -----------------------------------------------------------------------------
// Encoded

/// The output of [`TypeAdapter::write`], serialized by any serde serializer.
pub enum Encoded<'a> {
    Null,
    Value(&'a dyn erased_serde::Serialize),
    Array(Vec<Encoded<'a>>),
    Object(Vec<(&'static str, Encoded<'a>)>),
}

impl Encoded<'_> {
    #[inline]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl Serialize for Encoded<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Null => serializer.serialize_unit(),
            Self::Value(value) => erased_serde::serialize(*value, serializer),
            Self::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Self::Object(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (key, value) in entries {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
        }
    }
}

impl fmt::Debug for Encoded<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("Null"),
            Self::Value(_) => f.write_str("Value(..)"),
            Self::Array(items) => f.debug_list().entries(items).finish(),
            Self::Object(entries) => f
                .debug_map()
                .entries(entries.iter().map(|(key, value)| (key, value)))
                .finish(),
        }
    }
}

// -----------------------------------------------------------------------------
// AdapterSeed

/// Drives a [`TypeAdapter`] from a concrete deserializer.
pub(crate) struct AdapterSeed<'a>(pub &'a dyn TypeAdapter);

impl<'de> DeserializeSeed<'de> for AdapterSeed<'_> {
    type Value = Option<Box<dyn Any>>;

    fn deserialize<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        let mut erased = <dyn erased_serde::Deserializer>::erase(deserializer);
        self.0.read(&mut erased).map_err(D::Error::custom)
    }
}

// -----------------------------------------------------------------------------
// Nullable reads

/// Reads `null` as `None`, and anything else through `read`.
pub(crate) fn read_nullable<'de, F>(
    deserializer: &mut dyn erased_serde::Deserializer<'de>,
    expecting: &'static str,
    read: F,
) -> Result<Option<Box<dyn Any>>, erased_serde::Error>
where
    F: FnOnce(&mut dyn erased_serde::Deserializer<'de>) -> Result<Box<dyn Any>, erased_serde::Error>,
{
    struct NullableVisitor<F> {
        expecting: &'static str,
        read: F,
    }

    impl<'de, F> Visitor<'de> for NullableVisitor<F>
    where
        F: FnOnce(
            &mut dyn erased_serde::Deserializer<'de>,
        ) -> Result<Box<dyn Any>, erased_serde::Error>,
    {
        type Value = Option<Box<dyn Any>>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            write!(formatter, "{} or null", Expecting(self.expecting))
        }

        #[inline]
        fn visit_none<E: Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        #[inline]
        fn visit_unit<E: Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
            let mut erased = <dyn erased_serde::Deserializer>::erase(deserializer);
            (self.read)(&mut erased)
                .map(Some)
                .map_err(D::Error::custom)
        }
    }

    deserializer.deserialize_option(NullableVisitor { expecting, read })
}
