use alloc::sync::Arc;
use alloc::vec::Vec;

use kraft_reflect::info::{ClassFlags, TypeInfo};
use kraft_utils::hash::HashMap;

use super::adapter::{ConstructorAdapter, ParamSlot};
use super::names::names_for;
use super::types::{Fallback, is_primitive, resolve_type, zero_value_for};
use crate::adapter::{TypeAdapter, TypeAdapterFactory};
use crate::error::AdapterError;
use crate::Json;

// -----------------------------------------------------------------------------
// ConstructorAdapterFactory

/// Creates [`ConstructorAdapter`]s for `DATA` classes.
///
/// With `enable_default_primitive_values`, a non-nullable primitive
/// parameter that the input omits and that has no default receives its zero
/// value instead of failing the read.
///
/// # Examples
///
/// ```
/// use kraft_json::{Json, constructor::ConstructorAdapterFactory};
/// use kraft_reflect::derive::Reflect;
///
/// #[derive(Reflect, Debug, PartialEq)]
/// struct Point {
///     x: i32,
///     y: Option<i32>,
/// }
///
/// let json = Json::builder()
///     .register_factory(ConstructorAdapterFactory::new(false))
///     .build();
///
/// let point: Point = json.from_str(r#"{"x":5}"#).unwrap().unwrap();
/// assert_eq!(point, Point { x: 5, y: None });
///
/// let err = json.from_str::<Point>("{}").unwrap_err();
/// assert!(err.to_string().contains("`x`"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ConstructorAdapterFactory {
    enable_default_primitive_values: bool,
}

impl ConstructorAdapterFactory {
    pub const fn new(enable_default_primitive_values: bool) -> Self {
        Self { enable_default_primitive_values }
    }

    /// Returns the reason a class is skipped, checked in order.
    fn declines(flags: ClassFlags) -> Option<&'static str> {
        if flags.contains(ClassFlags::LOCAL) {
            Some("local class")
        } else if flags.contains(ClassFlags::INTERFACE) {
            Some("interface")
        } else if flags.contains(ClassFlags::ENUM) {
            Some("enum")
        } else if flags.contains(ClassFlags::JSON_ADAPTER) {
            Some("custom adapter")
        } else if !flags.contains(ClassFlags::DATA) {
            Some("not a data class")
        } else {
            None
        }
    }
}

impl TypeAdapterFactory for ConstructorAdapterFactory {
    fn create(
        &self,
        json: &Json,
        info: &'static TypeInfo,
    ) -> Result<Option<Arc<dyn TypeAdapter>>, AdapterError> {
        let TypeInfo::Class(class) = info else {
            return Ok(None);
        };

        if let Some(reason) = Self::declines(class.flags()) {
            log::debug!("constructor adapter skips `{}`: {reason}", class.type_path());
            return Ok(None);
        }

        if class.flags().contains(ClassFlags::INNER) {
            return Err(AdapterError::InnerClass(class.type_path()));
        }

        let Some(constructor) = class.constructor() else {
            log::debug!("constructor adapter skips `{}`: no constructor", class.type_path());
            return Ok(None);
        };

        let enabled = self.enable_default_primitive_values;
        let mut names = HashMap::default();
        let mut slots = Vec::with_capacity(constructor.param_len());
        let mut invalid = Vec::new();

        for param in constructor.params() {
            let param_names = names_for(param, class);

            let resolved = if param_names.is_empty() && param.is_optional() {
                None
            } else {
                Some(resolve_type(class, param.ty())?)
            };

            let delegate = match resolved {
                Some(info) if !param_names.is_empty() => Some(json.get_adapter(info)?),
                _ => None,
            };

            let fallback = match resolved {
                Some(info) if !param.is_optional() => {
                    if param_names.is_empty() && (!enabled || !is_primitive(info)) {
                        invalid.push(param);
                    }
                    let fallback = if enabled { zero_value_for(info) } else { Fallback::Null };
                    Some((fallback, info))
                }
                _ => None,
            };

            // A name repeated within one parameter's own list is allowed.
            for name in param_names {
                if let Some(previous) = names.insert(name, param.index())
                    && previous != param.index()
                {
                    return Err(AdapterError::DuplicateName {
                        class: class.type_name(),
                        name,
                    });
                }
            }

            slots.push(ParamSlot { param, delegate, fallback });
        }

        let structural = json.get_delegate_adapter(self, info)?;

        log::debug!(
            "constructor adapter created for `{}` ({} parameters, {} names)",
            class.type_path(),
            slots.len(),
            names.len(),
        );

        Ok(Some(Arc::new(ConstructorAdapter::new(
            class,
            constructor,
            names,
            slots.into_boxed_slice(),
            invalid,
            structural,
        ))))
    }
}
