//! Compile-time type information.
//!
//! ## Menu
//!
//! - [`TypePath`]: stable type names, without the `::` prefix.
//! - [`Type`]: a [`TypeId`] with its names.
//! - [`Typed`]: a static accessor to a type's [`TypeInfo`].
//! - [`TypeInfo`]: one of
//!     - [`OpaqueInfo`]: values handled by a serde codec (numbers, strings...),
//!       optionally tagged with a [`PrimitiveKind`].
//!     - [`OptionInfo`]: the nullable wrapper `Option<T>`.
//!     - [`ListInfo`]: `Vec<T>`.
//!     - [`ClassInfo`]: a class with [`FieldInfo`]s, [`ClassFlags`] and an
//!       optional primary [`ConstructorInfo`].
//! - [`TypeRef`]: a declared field or parameter type, either concrete or a
//!   type variable resolved through the owner's [`Generics`].
//!
//! [`TypeId`]: core::any::TypeId

// -----------------------------------------------------------------------------
// Modules

mod class_info;
mod constructor_info;
mod field_info;
mod generics;
mod list_info;
mod opaque_info;
mod option_info;
mod type_info;
mod type_path;
mod typed;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use type_path::impl_type_fn;

// -----------------------------------------------------------------------------
// Exports

pub use class_info::{ClassFlags, ClassInfo};
pub use constructor_info::{ConstructFn, ConstructorInfo, ParamInfo};
pub use field_info::{FieldGetter, FieldInfo, SerializedName};
pub use generics::{Generics, TypeParamInfo};
pub use list_info::ListInfo;
pub use opaque_info::{OpaqueInfo, PrimitiveKind};
pub use option_info::OptionInfo;
pub use type_info::{ReflectKind, ReflectKindError, TypeInfo};
pub use type_path::{Type, TypePath};
pub use typed::{TypeRef, Typed};
