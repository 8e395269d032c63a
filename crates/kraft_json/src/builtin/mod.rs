//! Adapters registered by every [`Json`](crate::Json), after the user's
//! factories.
//!
//! | Factory | Handles |
//! |---|---|
//! | [`CodecAdapterFactory`] | opaque types and `JSON_ADAPTER` classes, through their serde codec |
//! | [`OptionAdapterFactory`] | `Option<T>` |
//! | [`ListAdapterFactory`] | `Vec<T>` |
//! | [`StructuralAdapterFactory`] | any class, write only |

// -----------------------------------------------------------------------------
// Modules

mod codec;
mod list;
mod option;
mod structural;

// -----------------------------------------------------------------------------
// Exports

pub use codec::{CodecAdapter, CodecAdapterFactory};
pub use list::{ListAdapter, ListAdapterFactory};
pub use option::{OptionAdapter, OptionAdapterFactory};
pub use structural::{StructuralAdapter, StructuralAdapterFactory};
