//! Runtime operations on reflected types.
//!
//! - [`Arguments`]: an ordered positional argument builder for constructors.
//! - [`ConstructError`]: failures reported by a constructor function.

// -----------------------------------------------------------------------------
// Modules

mod arguments;
mod construct_error;

// -----------------------------------------------------------------------------
// Exports

pub use arguments::Arguments;
pub use construct_error::ConstructError;
