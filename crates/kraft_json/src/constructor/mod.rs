//! Adapters that build values through their primary constructor.
//!
//! [`ConstructorAdapterFactory`] accepts `DATA` classes with a constructor.
//! For every parameter it resolves the JSON names ([`names`]), the concrete
//! type and the fallback used when the input omits it ([`types`]). The
//! resulting [`ConstructorAdapter`] streams a JSON object into the
//! constructor's [`Arguments`](kraft_reflect::ops::Arguments) and writes
//! values through the structural adapter.

// -----------------------------------------------------------------------------
// Modules

mod adapter;
mod factory;

pub mod names;
pub mod types;

// -----------------------------------------------------------------------------
// Exports

pub use adapter::ConstructorAdapter;
pub use factory::ConstructorAdapterFactory;
