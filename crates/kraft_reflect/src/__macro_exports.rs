//! Items used by the code generated by `#[derive(Reflect)]`.

/// Bounds of `#[reflect(serde)]` types.
pub mod serde {
    pub use serde_core::Serialize;
    pub use serde_core::de::DeserializeOwned;
}

/// Re-exported for `#[reflect(auto_register)]`.
#[cfg(feature = "auto_register")]
pub mod auto_register {
    pub use crate::registry::RegisteredType;
    pub use inventory;
}
