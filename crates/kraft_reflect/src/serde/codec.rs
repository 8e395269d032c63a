use core::any::{Any, type_name};
use core::fmt;

use serde_core::{Serialize, de::DeserializeOwned};

/// A pair of type-erased serde functions for one type.
///
/// # Examples
///
/// ```
/// use kraft_reflect::serde::SerdeCodec;
///
/// let codec = SerdeCodec::of::<u32>();
///
/// let mut de = serde_json::Deserializer::from_str("17");
/// let mut erased = <dyn erased_serde::Deserializer>::erase(&mut de);
/// let value = codec.deserialize(&mut erased).unwrap();
/// assert_eq!(value.downcast_ref::<u32>(), Some(&17));
///
/// let output = serde_json::to_string(codec.serialize(&*value).unwrap()).unwrap();
/// assert_eq!(output, "17");
/// ```
#[derive(Clone, Copy)]
pub struct SerdeCodec {
    type_name: fn() -> &'static str,
    serialize: for<'a> fn(&'a dyn Any) -> Option<&'a dyn erased_serde::Serialize>,
    deserialize: for<'de> fn(
        &mut dyn erased_serde::Deserializer<'de>,
    ) -> Result<Box<dyn Any>, erased_serde::Error>,
}

fn serialize_erased<T: Serialize + Any>(value: &dyn Any) -> Option<&dyn erased_serde::Serialize> {
    value
        .downcast_ref::<T>()
        .map(|value| value as &dyn erased_serde::Serialize)
}

fn deserialize_erased<T: DeserializeOwned + Any>(
    deserializer: &mut dyn erased_serde::Deserializer<'_>,
) -> Result<Box<dyn Any>, erased_serde::Error> {
    let value = erased_serde::deserialize::<T>(deserializer)?;
    Ok(Box::new(value))
}

impl SerdeCodec {
    /// Creates the codec of `T`.
    #[inline]
    pub fn of<T: Serialize + DeserializeOwned + Any>() -> Self {
        Self {
            type_name: type_name::<T>,
            serialize: serialize_erased::<T>,
            deserialize: deserialize_erased::<T>,
        }
    }

    /// Borrows `value` as a serializable value.
    ///
    /// Returns `None` if `value` is not of the codec's type.
    #[inline]
    pub fn serialize<'a>(&self, value: &'a dyn Any) -> Option<&'a dyn erased_serde::Serialize> {
        (self.serialize)(value)
    }

    /// Deserializes a boxed value of the codec's type.
    #[inline]
    pub fn deserialize(
        &self,
        deserializer: &mut dyn erased_serde::Deserializer<'_>,
    ) -> Result<Box<dyn Any>, erased_serde::Error> {
        (self.deserialize)(deserializer)
    }
}

impl fmt::Debug for SerdeCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SerdeCodec")
            .field(&(self.type_name)())
            .finish()
    }
}
