use alloc::boxed::Box;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::any::Any;
use core::fmt;

use serde_core::de::{SeqAccess, Visitor};

use kraft_reflect::info::{ListInfo, TypeInfo};

use crate::adapter::{AdapterSeed, Encoded, TypeAdapter, TypeAdapterFactory, read_nullable};
use crate::error::{AdapterError, Expecting, stash};
use crate::Json;

// -----------------------------------------------------------------------------
// ListAdapter

/// Reads and writes a list as a JSON array.
///
/// Elements go through the element adapter. A `null` element is rejected
/// unless the element type is an `Option`.
pub struct ListAdapter {
    info: &'static ListInfo,
    item: Arc<dyn TypeAdapter>,
}

impl ListAdapter {
    pub fn new(info: &'static ListInfo, item: Arc<dyn TypeAdapter>) -> Self {
        Self { info, item }
    }
}

struct ListVisitor<'a>(&'a ListAdapter);

impl<'de> Visitor<'de> for ListVisitor<'_> {
    type Value = Box<dyn Any>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&Expecting(self.0.info.type_path()), formatter)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let info = self.0.info;
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or_default());

        while let Some(item) = seq.next_element_seed(AdapterSeed(&*self.0.item))? {
            match item {
                Some(item) => items.push(item),
                None => return Err(stash(AdapterError::NullElement(info.type_path()))),
            }
        }

        info.from_items(items).ok_or_else(|| {
            stash(AdapterError::TypeMismatch {
                expected: info.item_info().type_path(),
            })
        })
    }
}

impl TypeAdapter for ListAdapter {
    fn read(
        &self,
        deserializer: &mut dyn erased_serde::Deserializer<'_>,
    ) -> Result<Option<Box<dyn Any>>, erased_serde::Error> {
        read_nullable(deserializer, self.info.type_path(), |de| {
            serde_core::Deserializer::deserialize_seq(de, ListVisitor(self))
        })
    }

    fn write<'a>(&self, value: Option<&'a dyn Any>) -> Result<Encoded<'a>, AdapterError> {
        let Some(value) = value else {
            return Ok(Encoded::Null);
        };
        let items = self
            .info
            .items(value)
            .ok_or(AdapterError::TypeMismatch { expected: self.info.type_path() })?;

        items
            .into_iter()
            .map(|item| self.item.write(Some(item)))
            .collect::<Result<Vec<_>, _>>()
            .map(Encoded::Array)
    }
}

// -----------------------------------------------------------------------------
// ListAdapterFactory

pub struct ListAdapterFactory;

impl TypeAdapterFactory for ListAdapterFactory {
    fn create(
        &self,
        json: &Json,
        info: &'static TypeInfo,
    ) -> Result<Option<Arc<dyn TypeAdapter>>, AdapterError> {
        let TypeInfo::List(info) = info else {
            return Ok(None);
        };
        let item = json.get_adapter(info.item_info())?;
        Ok(Some(Arc::new(ListAdapter::new(info, item))))
    }
}
