use core::any::Any;
use core::fmt;

use crate::info::{Type, TypePath};
use crate::serde::SerdeCodec;

// -----------------------------------------------------------------------------
// PrimitiveKind

/// Primitive-like value kinds, the ones that have an automatic zero value.
///
/// # Examples
///
/// ```
/// use kraft_reflect::info::PrimitiveKind;
///
/// let zero = PrimitiveKind::I32.zero_value();
/// assert_eq!(zero.downcast_ref::<i32>(), Some(&0));
///
/// let nul = PrimitiveKind::Char.zero_value();
/// assert_eq!(nul.downcast_ref::<char>(), Some(&'\0'));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    Bool,
    Char,
    I8,
    I16,
    I32,
    I64,
    U8,
    U16,
    U32,
    U64,
    F32,
    F64,
}

impl PrimitiveKind {
    /// Returns the canonical zero of this kind: `false`, `0`, `0.0` or `'\0'`.
    ///
    /// The boxed value has the concrete Rust type of the kind.
    pub fn zero_value(self) -> Box<dyn Any> {
        match self {
            Self::Bool => Box::new(false),
            Self::Char => Box::new('\0'),
            Self::I8 => Box::new(0_i8),
            Self::I16 => Box::new(0_i16),
            Self::I32 => Box::new(0_i32),
            Self::I64 => Box::new(0_i64),
            Self::U8 => Box::new(0_u8),
            Self::U16 => Box::new(0_u16),
            Self::U32 => Box::new(0_u32),
            Self::U64 => Box::new(0_u64),
            Self::F32 => Box::new(0.0_f32),
            Self::F64 => Box::new(0.0_f64),
        }
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

// -----------------------------------------------------------------------------
// OpaqueInfo

/// A container for compile-time info of values without visible structure.
///
/// Opaque values are (de)serialized as a whole by their [`SerdeCodec`].
#[derive(Clone, Debug)]
pub struct OpaqueInfo {
    ty: Type,
    primitive: Option<PrimitiveKind>,
    codec: Option<SerdeCodec>,
}

impl OpaqueInfo {
    /// Creates a new [`OpaqueInfo`] without a codec.
    #[inline]
    pub const fn new<T: TypePath>() -> Self {
        Self {
            ty: Type::of::<T>(),
            primitive: None,
            codec: None,
        }
    }

    /// Marks the type as a primitive of the given kind.
    #[inline]
    pub const fn with_primitive(mut self, kind: PrimitiveKind) -> Self {
        self.primitive = Some(kind);
        self
    }

    /// Sets the serde codec of the type.
    #[inline]
    pub const fn with_codec(mut self, codec: SerdeCodec) -> Self {
        self.codec = Some(codec);
        self
    }

    /// Returns the [`Type`] of the described type.
    #[inline]
    pub const fn ty(&self) -> &Type {
        &self.ty
    }

    crate::info::impl_type_fn!();

    /// Returns the primitive kind, if this is a primitive.
    #[inline]
    pub const fn primitive(&self) -> Option<PrimitiveKind> {
        self.primitive
    }

    /// Returns the serde codec, if any.
    #[inline]
    pub const fn codec(&self) -> Option<&SerdeCodec> {
        self.codec.as_ref()
    }
}
