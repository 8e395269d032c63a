//! Static type descriptors for constructor-driven (de)serialization.
//!
//! A type describes itself once through [`Typed`](info::Typed), usually by
//! `#[derive(Reflect)]`. The resulting [`TypeInfo`](info::TypeInfo) lists
//! the fields of a class, its primary constructor and the flags that decide
//! whether the class may be built from its constructor at all.
//!
//! Construction goes through [`Arguments`](ops::Arguments), an ordered
//! positional builder that distinguishes "not supplied" from "supplied as
//! null", so that manual defaults can be applied by the generated
//! constructor function itself.
//!
//! ```
//! use kraft_reflect::derive::Reflect;
//! use kraft_reflect::info::{ClassFlags, Typed};
//!
//! #[derive(Reflect)]
//! struct Point {
//!     x: i32,
//!     #[reflect(default = 7)]
//!     y: i32,
//! }
//!
//! let info = Point::type_info().as_class().unwrap();
//! assert!(info.flags().contains(ClassFlags::DATA));
//!
//! let constructor = info.constructor().unwrap();
//! let mut args = constructor.arguments();
//! args.insert(0, Some(Box::new(3_i32)));
//!
//! let point = constructor.invoke(&mut args).unwrap();
//! let point = point.downcast::<Point>().unwrap();
//! assert_eq!((point.x, point.y), (3, 7));
//! ```

// -----------------------------------------------------------------------------
// Extern Self

// Generated code names this crate by its absolute path, which must also
// resolve inside the crate itself (doc tests and unit tests).
extern crate self as kraft_reflect;

// -----------------------------------------------------------------------------
// Modules

pub mod impls;
pub mod info;
pub mod ops;
pub mod serde;

#[cfg(feature = "auto_register")]
pub mod registry;

// -----------------------------------------------------------------------------
// Top-Level exports

#[doc(hidden)]
pub mod __macro_exports;

pub use kraft_reflect_derive as derive;
