use alloc::boxed::Box;
use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::any::Any;
use core::fmt;

use serde_core::de::{Error, IgnoredAny, MapAccess, Visitor};
use serde_core::{Deserialize, Deserializer};

use kraft_reflect::info::{ClassFlags, ClassInfo, ConstructorInfo, ParamInfo, TypeInfo};
use kraft_reflect::ops::Arguments;
use kraft_utils::hash::HashMap;

use super::types::Fallback;
use crate::adapter::{AdapterSeed, Encoded, TypeAdapter, read_nullable};
use crate::error::{AdapterError, Expecting, stash};

// -----------------------------------------------------------------------------
// ParamSlot

/// Everything resolved for one constructor parameter.
pub(super) struct ParamSlot {
    pub param: &'static ParamInfo,
    /// Present when the parameter has at least one JSON name.
    pub delegate: Option<Arc<dyn TypeAdapter>>,
    /// Present unless the parameter is optional.
    pub fallback: Option<(Fallback, &'static TypeInfo)>,
}

// -----------------------------------------------------------------------------
// ConstructorAdapter

/// Builds values by calling the primary constructor with the JSON fields.
///
/// Reading binds each known key to its parameter, skips unknown keys and
/// rejects a parameter supplied twice. Parameters the input omits take, in
/// order: their manual default, their automatic fallback, or fail the read.
/// Writing is delegated to the structural adapter.
pub struct ConstructorAdapter {
    class: &'static ClassInfo,
    constructor: &'static ConstructorInfo,
    names: HashMap<&'static str, usize>,
    slots: Box<[ParamSlot]>,
    invalid: Vec<&'static ParamInfo>,
    structural: Arc<dyn TypeAdapter>,
}

impl ConstructorAdapter {
    pub(super) fn new(
        class: &'static ClassInfo,
        constructor: &'static ConstructorInfo,
        names: HashMap<&'static str, usize>,
        slots: Box<[ParamSlot]>,
        invalid: Vec<&'static ParamInfo>,
        structural: Arc<dyn TypeAdapter>,
    ) -> Self {
        Self {
            class,
            constructor,
            names,
            slots,
            invalid,
            structural,
        }
    }

    /// Returns the parameter bound to a JSON name.
    pub fn param_for(&self, name: &str) -> Option<&'static ParamInfo> {
        self.names.get(name).map(|&index| self.slots[index].param)
    }

    /// Fills the slots the input left unset.
    fn fill_fallbacks(&self, args: &mut Arguments<'_>) {
        for (index, slot) in self.slots.iter().enumerate() {
            let Some((fallback, info)) = slot.fallback else {
                continue;
            };
            if args.is_set(index) {
                continue;
            }
            match (fallback, info) {
                (Fallback::Zero(kind), _) => {
                    args.insert(index, Some(kind.zero_value()));
                }
                (Fallback::Null, TypeInfo::Option(option)) => {
                    args.insert(index, Some(option.none()));
                }
                // Left unset, the constructor reports the missing parameter.
                (Fallback::Null, _) => {}
            }
        }
    }
}

// -----------------------------------------------------------------------------
// JSON keys

struct Key(String);

impl<'de> Deserialize<'de> for Key {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct KeyVisitor;

        impl<'de> Visitor<'de> for KeyVisitor {
            type Value = Key;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("field name")
            }

            #[inline]
            fn visit_str<E: Error>(self, value: &str) -> Result<Self::Value, E> {
                Ok(Key(value.into()))
            }

            #[inline]
            fn visit_string<E: Error>(self, value: String) -> Result<Self::Value, E> {
                Ok(Key(value))
            }
        }

        deserializer.deserialize_identifier(KeyVisitor)
    }
}

// -----------------------------------------------------------------------------
// Object visitor

struct ObjectVisitor<'a>(&'a ConstructorAdapter);

impl<'de> Visitor<'de> for ObjectVisitor<'_> {
    type Value = Box<dyn Any>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&Expecting(self.0.class.type_path()), formatter)
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let adapter = self.0;
        let mut args = adapter.constructor.arguments();

        while let Some(Key(key)) = map.next_key::<Key>()? {
            let Some(&index) = adapter.names.get(key.as_str()) else {
                log::trace!("`{}` skips unknown JSON field `{key}`", adapter.class.type_name());
                map.next_value::<IgnoredAny>()?;
                continue;
            };

            let slot = &adapter.slots[index];
            let Some(delegate) = &slot.delegate else {
                map.next_value::<IgnoredAny>()?;
                continue;
            };

            let value = map.next_value_seed(AdapterSeed(&**delegate))?;
            if !args.insert(index, value) {
                return Err(stash(AdapterError::DuplicateField {
                    class: adapter.class.type_name(),
                    param: slot.param.label(),
                }));
            }
        }

        adapter.fill_fallbacks(&mut args);

        adapter
            .constructor
            .invoke(&mut args)
            .map_err(|err| stash(AdapterError::from_construct(adapter.class.type_name(), err)))
    }
}

// -----------------------------------------------------------------------------
// TypeAdapter

impl TypeAdapter for ConstructorAdapter {
    fn check_read(&self) -> Result<(), AdapterError> {
        let flags = self.class.flags();
        if flags.contains(ClassFlags::ABSTRACT) {
            return Err(AdapterError::AbstractClass(self.class.type_name()));
        }
        if flags.contains(ClassFlags::SEALED) {
            return Err(AdapterError::SealedClass(self.class.type_name()));
        }
        if !self.invalid.is_empty() {
            let params = self
                .invalid
                .iter()
                .map(|param| match param.name() {
                    Some(name) => name.into(),
                    None => format!("#{}", param.index()),
                })
                .collect();
            return Err(AdapterError::InvalidParameters {
                class: self.class.type_name(),
                params,
            });
        }
        Ok(())
    }

    fn read(
        &self,
        deserializer: &mut dyn erased_serde::Deserializer<'_>,
    ) -> Result<Option<Box<dyn Any>>, erased_serde::Error> {
        self.check_read().map_err(stash::<erased_serde::Error>)?;

        read_nullable(deserializer, self.class.type_path(), |de| {
            Deserializer::deserialize_map(de, ObjectVisitor(self))
        })
    }

    fn write<'a>(&self, value: Option<&'a dyn Any>) -> Result<Encoded<'a>, AdapterError> {
        match value {
            None => Ok(Encoded::Null),
            Some(value) => self.structural.write(Some(value)),
        }
    }
}
