//! Implementations of [`Typed`](crate::info::Typed) for foreign types,
//! and the static cells used by every implementation.
//!
//! | Type | Kind |
//! |---|---|
//! | `bool`, `char`, `i8`..`i64`, `u8`..`u64`, `f32`, `f64` | primitive [`Opaque`](crate::info::OpaqueInfo) |
//! | `String` | [`Opaque`](crate::info::OpaqueInfo) |
//! | `Option<T>` | [`Option`](crate::info::OptionInfo) |
//! | `Vec<T>` | [`List`](crate::info::ListInfo) |

// -----------------------------------------------------------------------------
// Modules

mod cell;
mod native;
mod option;
mod vec;

// -----------------------------------------------------------------------------
// Exports

pub use cell::{GenericTypeCell, GenericTypeInfoCell, GenericTypePathCell};
pub use cell::{NonGenericTypeCell, NonGenericTypeInfoCell};

/// Concatenates string slices, used to build generic type paths.
///
/// ```
/// assert_eq!(kraft_reflect::impls::concat(&["Vec", "<", "u8", ">"]), "Vec<u8>");
/// ```
pub fn concat(arr: &[&str]) -> String {
    let len = arr.iter().map(|s| s.len()).sum();
    let mut res = String::with_capacity(len);
    for s in arr {
        res.push_str(s);
    }
    res
}
