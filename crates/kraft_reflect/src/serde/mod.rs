//! Type-erased serde hooks.
//!
//! [`SerdeCodec`] stores two function pointers that (de)serialize a value
//! through [`erased_serde`], so that a `dyn Any` can be handed to any serde
//! format without knowing its concrete type.

// -----------------------------------------------------------------------------
// Modules

mod codec;

// -----------------------------------------------------------------------------
// Exports

pub use codec::SerdeCodec;
