use alloc::boxed::Box;
use alloc::sync::Arc;
use core::any::Any;

use kraft_reflect::info::TypeInfo;
use kraft_reflect::serde::SerdeCodec;

use crate::adapter::{Encoded, TypeAdapter, TypeAdapterFactory, read_nullable};
use crate::error::AdapterError;
use crate::Json;

// -----------------------------------------------------------------------------
// CodecAdapter

/// Reads and writes a type through its own serde implementation.
pub struct CodecAdapter {
    type_path: &'static str,
    codec: &'static SerdeCodec,
}

impl CodecAdapter {
    pub const fn new(type_path: &'static str, codec: &'static SerdeCodec) -> Self {
        Self { type_path, codec }
    }
}

impl TypeAdapter for CodecAdapter {
    fn read(
        &self,
        deserializer: &mut dyn erased_serde::Deserializer<'_>,
    ) -> Result<Option<Box<dyn Any>>, erased_serde::Error> {
        read_nullable(deserializer, self.type_path, |de| self.codec.deserialize(de))
    }

    fn write<'a>(&self, value: Option<&'a dyn Any>) -> Result<Encoded<'a>, AdapterError> {
        let Some(value) = value else {
            return Ok(Encoded::Null);
        };
        self.codec
            .serialize(value)
            .map(Encoded::Value)
            .ok_or(AdapterError::TypeMismatch { expected: self.type_path })
    }
}

// -----------------------------------------------------------------------------
// CodecAdapterFactory

/// Handles opaque types and classes that carry a serde codec.
pub struct CodecAdapterFactory;

impl TypeAdapterFactory for CodecAdapterFactory {
    fn create(
        &self,
        _json: &Json,
        info: &'static TypeInfo,
    ) -> Result<Option<Arc<dyn TypeAdapter>>, AdapterError> {
        let codec = match info {
            TypeInfo::Opaque(info) => info.codec(),
            TypeInfo::Class(info) => info.codec(),
            TypeInfo::Option(_) | TypeInfo::List(_) => None,
        };

        Ok(codec.map(|codec| Arc::new(CodecAdapter::new(info.type_path(), codec)) as Arc<dyn TypeAdapter>))
    }
}

#[cfg(test)]
mod tests {
    use kraft_reflect::info::{TypeInfo, Typed};

    use super::*;

    #[test]
    fn primitives_are_null_aware() {
        let json = Json::new();
        let adapter = CodecAdapterFactory.create(&json, i32::type_info()).unwrap().unwrap();

        let mut de = serde_json::Deserializer::from_str("null");
        let mut erased = <dyn erased_serde::Deserializer>::erase(&mut de);
        assert!(adapter.read(&mut erased).unwrap().is_none());

        let mut de = serde_json::Deserializer::from_str("42");
        let mut erased = <dyn erased_serde::Deserializer>::erase(&mut de);
        let value = adapter.read(&mut erased).unwrap().unwrap();
        assert_eq!(*value.downcast::<i32>().unwrap(), 42);
    }

    #[test]
    fn write_checks_the_type() {
        let json = Json::new();
        let adapter = CodecAdapterFactory.create(&json, String::type_info()).unwrap().unwrap();

        let value = String::from("foo");
        let encoded = adapter.write(Some(&value as &dyn Any)).unwrap();
        assert_eq!(serde_json::to_string(&encoded).unwrap(), "\"foo\"");

        assert!(matches!(adapter.write(None), Ok(Encoded::Null)));
        assert!(matches!(
            adapter.write(Some(&1_u8 as &dyn Any)),
            Err(AdapterError::TypeMismatch { .. })
        ));
    }

    #[test]
    fn declines_containers() {
        let json = Json::new();
        let info: &'static TypeInfo = <Option<i32>>::type_info();
        assert!(CodecAdapterFactory.create(&json, info).unwrap().is_none());
    }
}
