use alloc::boxed::Box;
use alloc::sync::Arc;
use core::any::Any;

use kraft_reflect::info::{OptionInfo, TypeInfo};

use crate::adapter::{Encoded, TypeAdapter, TypeAdapterFactory};
use crate::error::{AdapterError, stash};
use crate::Json;

// -----------------------------------------------------------------------------
// OptionAdapter

/// Maps JSON `null` to `None` and everything else to `Some` of the inner adapter.
pub struct OptionAdapter {
    info: &'static OptionInfo,
    inner: Arc<dyn TypeAdapter>,
}

impl OptionAdapter {
    pub fn new(info: &'static OptionInfo, inner: Arc<dyn TypeAdapter>) -> Self {
        Self { info, inner }
    }
}

impl TypeAdapter for OptionAdapter {
    fn read(
        &self,
        deserializer: &mut dyn erased_serde::Deserializer<'_>,
    ) -> Result<Option<Box<dyn Any>>, erased_serde::Error> {
        let value = match self.inner.read(deserializer)? {
            None => self.info.none(),
            Some(inner) => self.info.wrap(inner).map_err(|_| {
                stash::<erased_serde::Error>(AdapterError::TypeMismatch {
                    expected: self.info.inner_info().type_path(),
                })
            })?,
        };
        Ok(Some(value))
    }

    fn write<'a>(&self, value: Option<&'a dyn Any>) -> Result<Encoded<'a>, AdapterError> {
        let Some(value) = value else {
            return Ok(Encoded::Null);
        };
        match self.info.project(value) {
            Some(Some(inner)) => self.inner.write(Some(inner)),
            Some(None) => Ok(Encoded::Null),
            None => Err(AdapterError::TypeMismatch { expected: self.info.type_path() }),
        }
    }
}

// -----------------------------------------------------------------------------
// OptionAdapterFactory

pub struct OptionAdapterFactory;

impl TypeAdapterFactory for OptionAdapterFactory {
    fn create(
        &self,
        json: &Json,
        info: &'static TypeInfo,
    ) -> Result<Option<Arc<dyn TypeAdapter>>, AdapterError> {
        let TypeInfo::Option(info) = info else {
            return Ok(None);
        };
        let inner = json.get_adapter(info.inner_info())?;
        Ok(Some(Arc::new(OptionAdapter::new(info, inner))))
    }
}

#[cfg(test)]
mod tests {
    use kraft_reflect::info::Typed;

    use super::*;

    #[test]
    fn null_reads_as_none() {
        let json = Json::new();
        let adapter = json.get_adapter(<Option<String>>::type_info()).unwrap();

        let mut de = serde_json::Deserializer::from_str("null");
        let mut erased = <dyn erased_serde::Deserializer>::erase(&mut de);
        let value = adapter.read(&mut erased).unwrap().unwrap();
        assert_eq!(*value.downcast::<Option<String>>().unwrap(), None);

        let mut de = serde_json::Deserializer::from_str("\"a\"");
        let mut erased = <dyn erased_serde::Deserializer>::erase(&mut de);
        let value = adapter.read(&mut erased).unwrap().unwrap();
        assert_eq!(*value.downcast::<Option<String>>().unwrap(), Some("a".to_owned()));
    }

    #[test]
    fn none_writes_null() {
        let json = Json::new();
        let adapter = json.get_adapter(<Option<u8>>::type_info()).unwrap();

        let none: Option<u8> = None;
        assert!(adapter.write(Some(&none as &dyn Any)).unwrap().is_null());

        let some = Some(7_u8);
        let encoded = adapter.write(Some(&some as &dyn Any)).unwrap();
        assert_eq!(serde_json::to_string(&encoded).unwrap(), "7");
    }
}
