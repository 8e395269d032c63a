//! JSON adapters over [`kraft_reflect`] descriptors.
//!
//! A [`Json`] registry resolves one [`TypeAdapter`] per type by asking its
//! [`TypeAdapterFactory`]s in order. The central factory is
//! [`ConstructorAdapterFactory`](constructor::ConstructorAdapterFactory),
//! which builds immutable values through their primary constructor:
//!
//! - JSON names come from the constructor parameters, honoring renames,
//!   alternates and transient fields.
//! - Absent parameters take their manual default, or optionally the zero
//!   value of their primitive type.
//! - A parameter supplied twice, under any of its names, fails the read.
//!
//! Everything else is handled by the adapters in [`builtin`].
//!
//! ```
//! use kraft_json::{ErrorKind, Json};
//! use kraft_reflect::derive::Reflect;
//!
//! #[derive(Reflect, Debug, PartialEq)]
//! struct Point {
//!     x: i32,
//!     y: Option<i32>,
//! }
//!
//! let json = Json::new();
//!
//! let point: Point = json.from_str(r#"{"x":5}"#).unwrap().unwrap();
//! assert_eq!(point, Point { x: 5, y: None });
//!
//! let err = json.from_str::<Point>("{}").unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::Configuration);
//! ```

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod adapter;
mod error;
mod json;

pub mod builtin;
pub mod constructor;

#[cfg(test)]
mod tests;

// -----------------------------------------------------------------------------
// Exports

pub use adapter::{Encoded, TypeAdapter, TypeAdapterFactory};
pub use error::{AdapterError, ErrorKind, JsonError};
pub use json::{Json, JsonBuilder};
