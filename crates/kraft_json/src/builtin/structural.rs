use alloc::boxed::Box;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::any::Any;

use kraft_reflect::info::{ClassInfo, FieldInfo, TypeInfo};

use crate::adapter::{Encoded, TypeAdapter, TypeAdapterFactory};
use crate::constructor::types::resolve_type;
use crate::error::{AdapterError, stash};
use crate::Json;

// -----------------------------------------------------------------------------
// StructuralAdapter

struct BoundField {
    info: &'static FieldInfo,
    adapter: Arc<dyn TypeAdapter>,
}

/// Writes a class as a JSON object of its non-transient fields.
///
/// Fields are written in declaration order under their JSON name, computed
/// fields included. Null fields are omitted unless `serialize_nulls` is set.
/// Reading is not supported: classes are only built through a constructor.
pub struct StructuralAdapter {
    class: &'static ClassInfo,
    fields: Box<[BoundField]>,
    serialize_nulls: bool,
}

impl TypeAdapter for StructuralAdapter {
    fn check_read(&self) -> Result<(), AdapterError> {
        Err(AdapterError::Unsupported(self.class.type_path()))
    }

    fn read(
        &self,
        _deserializer: &mut dyn erased_serde::Deserializer<'_>,
    ) -> Result<Option<Box<dyn Any>>, erased_serde::Error> {
        Err(stash(AdapterError::Unsupported(self.class.type_path())))
    }

    fn write<'a>(&self, value: Option<&'a dyn Any>) -> Result<Encoded<'a>, AdapterError> {
        let Some(value) = value else {
            return Ok(Encoded::Null);
        };

        let mut entries = Vec::with_capacity(self.fields.len());
        for field in &self.fields {
            let field_value = field.info.get(value).ok_or(AdapterError::TypeMismatch {
                expected: self.class.type_path(),
            })?;
            let encoded = field.adapter.write(Some(field_value))?;
            if encoded.is_null() && !self.serialize_nulls {
                continue;
            }
            entries.push((field.info.json_name(), encoded));
        }

        Ok(Encoded::Object(entries))
    }
}

// -----------------------------------------------------------------------------
// StructuralAdapterFactory

/// Handles every class, registered last.
pub struct StructuralAdapterFactory;

impl TypeAdapterFactory for StructuralAdapterFactory {
    fn create(
        &self,
        json: &Json,
        info: &'static TypeInfo,
    ) -> Result<Option<Arc<dyn TypeAdapter>>, AdapterError> {
        let TypeInfo::Class(class) = info else {
            return Ok(None);
        };

        let fields = class
            .iter()
            .filter(|field| !field.is_transient())
            .map(|field| {
                let adapter = json.get_adapter(resolve_type(class, field.ty())?)?;
                Ok(BoundField { info: field, adapter })
            })
            .collect::<Result<_, AdapterError>>()?;

        Ok(Some(Arc::new(StructuralAdapter {
            class,
            fields,
            serialize_nulls: json.serializes_nulls(),
        })))
    }
}

#[cfg(test)]
mod tests {
    use kraft_reflect::derive::Reflect;
    use kraft_reflect::info::Typed;

    use super::*;

    #[derive(Reflect)]
    struct Labelled {
        #[reflect(rename = "title")]
        label: String,
        note: Option<String>,
        #[reflect(transient, default = 0)]
        hits: u32,
    }

    #[test]
    fn writes_declared_fields() {
        let json = Json::new();
        let adapter = StructuralAdapterFactory
            .create(&json, Labelled::type_info())
            .unwrap()
            .unwrap();

        let value = Labelled { label: "a".into(), note: None, hits: 3 };
        let encoded = adapter.write(Some(&value as &dyn Any)).unwrap();
        assert_eq!(serde_json::to_string(&encoded).unwrap(), r#"{"title":"a"}"#);

        assert!(matches!(
            adapter.check_read(),
            Err(AdapterError::Unsupported(_))
        ));
    }

    #[test]
    fn serialize_nulls() {
        let json = Json::builder().serialize_nulls().build();
        let value = Labelled { label: "a".into(), note: None, hits: 0 };
        assert_eq!(
            json.to_string(&value).unwrap(),
            r#"{"title":"a","note":null}"#
        );
    }
}
