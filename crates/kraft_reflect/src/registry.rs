//! Link-time collection of reflected types.
//!
//! Types marked `#[reflect(auto_register)]` submit their [`TypeInfo`]
//! accessor through the [`inventory`] crate. Generic types cannot be
//! collected this way, since their instantiations are unknown.
//!
//! ```
//! use kraft_reflect::derive::Reflect;
//! use kraft_reflect::info::Typed;
//! use kraft_reflect::registry::registered_types;
//!
//! #[derive(Reflect)]
//! #[reflect(auto_register)]
//! struct Registered {
//!     value: i32,
//! }
//!
//! assert!(registered_types().any(|info| info.type_is::<Registered>()));
//! ```

use crate::info::{TypeInfo, Typed};

/// A registered type, see the [module documentation](self).
pub struct RegisteredType {
    type_info: fn() -> &'static TypeInfo,
}

impl RegisteredType {
    /// Creates a registration entry for `T`.
    #[inline]
    pub const fn of<T: Typed>() -> Self {
        Self {
            type_info: T::type_info,
        }
    }

    /// Returns the registered type's [`TypeInfo`].
    #[inline]
    pub fn type_info(&self) -> &'static TypeInfo {
        (self.type_info)()
    }
}

inventory::collect!(RegisteredType);

/// Iterates over every type registered with `#[reflect(auto_register)]`.
///
/// The order is unspecified.
pub fn registered_types() -> impl Iterator<Item = &'static TypeInfo> {
    inventory::iter::<RegisteredType>
        .into_iter()
        .map(RegisteredType::type_info)
}
