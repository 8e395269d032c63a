//! Containers for static storage of type information.
//!
//! ## NonGenericTypeCell
//!
//! For non generic types, [`NonGenericTypeInfoCell`] stores the [`TypeInfo`]
//! in a [`OnceLock`]. A type path needs no cell, it is a string literal.
//!
//! ## GenericTypeCell
//!
//! For generic types, the `static CELL` inside the function is shared by every
//! instantiation. Therefore, the inner of this container is a [`TypeIdMap`]
//! wrapped in [`RwLock`], and the values are leaked once per instantiation.
//!
//! ```
//! use kraft_reflect::impls::{GenericTypeInfoCell, concat, GenericTypePathCell};
//! use kraft_reflect::info::{ClassInfo, TypeInfo, TypePath, Typed};
//!
//! struct Wrapper<T>(T);
//!
//! impl<T: TypePath> TypePath for Wrapper<T> {
//!     fn type_path() -> &'static str {
//!         static CELL: GenericTypePathCell = GenericTypePathCell::new();
//!         CELL.get_or_insert::<Self>(|| concat(&["demo::Wrapper<", T::type_path(), ">"]))
//!     }
//!     fn type_name() -> &'static str {
//!         static CELL: GenericTypePathCell = GenericTypePathCell::new();
//!         CELL.get_or_insert::<Self>(|| concat(&["Wrapper<", T::type_name(), ">"]))
//!     }
//! }
//!
//! impl<T: Typed> Typed for Wrapper<T> {
//!     fn type_info() -> &'static TypeInfo {
//!         static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
//!         CELL.get_or_insert::<Self>(|| TypeInfo::Class(ClassInfo::new::<Self>(&[])))
//!     }
//! }
//!
//! assert_eq!(<Wrapper<u8>>::type_name(), "Wrapper<u8>");
//! assert_eq!(<Wrapper<i8>>::type_path(), "demo::Wrapper<i8>");
//! assert!(core::ptr::eq(<Wrapper<u8>>::type_info(), <Wrapper<u8>>::type_info()));
//! ```

use core::any::{Any, TypeId};
use std::sync::{OnceLock, PoisonError, RwLock};

use kraft_utils::TypeIdMap;

use crate::info::TypeInfo;

mod sealed {
    use crate::info::TypeInfo;

    pub trait TypedProperty: 'static {}

    impl TypedProperty for String {}
    impl TypedProperty for TypeInfo {}
}

use sealed::TypedProperty;

// -----------------------------------------------------------------------------
// NonGenericTypeCell

/// A static cell for non generic types, see the [module documentation](self).
pub struct NonGenericTypeCell<T: TypedProperty>(OnceLock<T>);

/// A [`NonGenericTypeCell`] storing [`TypeInfo`].
pub type NonGenericTypeInfoCell = NonGenericTypeCell<TypeInfo>;

impl<T: TypedProperty> NonGenericTypeCell<T> {
    /// Creates an empty cell.
    #[inline]
    pub const fn new() -> Self {
        Self(OnceLock::new())
    }

    /// Returns the stored value, initializing it with `f` on first access.
    #[inline]
    pub fn get_or_init(&self, f: impl FnOnce() -> T) -> &T {
        self.0.get_or_init(f)
    }
}

// -----------------------------------------------------------------------------
// GenericTypeCell

/// A static cell for generic types, see the [module documentation](self).
pub struct GenericTypeCell<T: TypedProperty>(RwLock<TypeIdMap<&'static T>>);

/// A [`GenericTypeCell`] storing [`TypeInfo`].
pub type GenericTypeInfoCell = GenericTypeCell<TypeInfo>;

/// A [`GenericTypeCell`] storing type paths.
pub type GenericTypePathCell = GenericTypeCell<String>;

impl<T: TypedProperty> GenericTypeCell<T> {
    /// Creates an empty cell.
    #[inline]
    pub const fn new() -> Self {
        Self(RwLock::new(TypeIdMap::new()))
    }

    /// Returns the value stored for `G`, initializing it with `f` on first access.
    ///
    /// `f` runs without holding the lock, so it may access other cells,
    /// including this one for another instantiation.
    #[inline(always)]
    pub fn get_or_insert<G: Any + ?Sized>(&self, f: impl FnOnce() -> T) -> &'static T {
        // Separate to reduce code compilation times
        self.get_or_insert_by_type_id(TypeId::of::<G>(), f)
    }

    #[inline(never)]
    fn get_or_insert_by_type_id(&self, type_id: TypeId, f: impl FnOnce() -> T) -> &'static T {
        match self.get_by_type_id(type_id) {
            Some(info) => info,
            None => self.insert_by_type_id(type_id, f()),
        }
    }

    #[inline(never)]
    fn get_by_type_id(&self, type_id: TypeId) -> Option<&'static T> {
        self.0
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&type_id)
            .copied()
    }

    #[inline(never)]
    fn insert_by_type_id(&self, type_id: TypeId, value: T) -> &'static T {
        *self
            .0
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .get_or_insert(type_id, || Box::leak(Box::new(value)))
    }
}
