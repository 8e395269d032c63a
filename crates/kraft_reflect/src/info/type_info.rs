use core::{error, fmt};

use crate::info::{ClassInfo, ListInfo, OpaqueInfo, OptionInfo, Type};

// -----------------------------------------------------------------------------
// ReflectKind

/// The kind of a [`TypeInfo`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReflectKind {
    Opaque,
    Option,
    List,
    Class,
}

impl fmt::Display for ReflectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Opaque => f.pad("Opaque"),
            Self::Option => f.pad("Option"),
            Self::List => f.pad("List"),
            Self::Class => f.pad("Class"),
        }
    }
}

/// Returned by the `as_*` casts of [`TypeInfo`] on a kind mismatch.
#[derive(Debug)]
pub struct ReflectKindError {
    pub expected: ReflectKind,
    pub received: ReflectKind,
}

impl fmt::Display for ReflectKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "reflect kind mismatch: expected {}, received {}",
            self.expected, self.received
        )
    }
}

impl error::Error for ReflectKindError {}

// -----------------------------------------------------------------------------
// TypeInfo

/// Compile-time information of a type.
///
/// Obtained through [`Typed::type_info`](crate::info::Typed::type_info),
/// which always returns the same `&'static` instance for a type.
///
/// # Examples
///
/// ```
/// use kraft_reflect::info::{PrimitiveKind, Typed};
///
/// let info = <Option<u8>>::type_info().as_option().unwrap();
/// let inner = info.inner_info().as_opaque().unwrap();
///
/// assert_eq!(inner.primitive(), Some(PrimitiveKind::U8));
/// assert!(<Vec<u8>>::type_info().as_class().is_err());
/// ```
#[derive(Debug)]
pub enum TypeInfo {
    Opaque(OpaqueInfo),
    Option(OptionInfo),
    List(ListInfo),
    Class(ClassInfo),
}

// Helper macro that implements type-safe accessor methods like `as_class`.
macro_rules! impl_cast_method {
    ($name:ident : $kind:ident => $info:ident) => {
        #[doc = concat!("Returns the [`", stringify!($info), "`], or an error on a kind mismatch.")]
        pub const fn $name(&self) -> Result<&$info, ReflectKindError> {
            match self {
                Self::$kind(info) => Ok(info),
                _ => Err(ReflectKindError {
                    expected: ReflectKind::$kind,
                    received: self.kind(),
                }),
            }
        }
    };
}

impl TypeInfo {
    impl_cast_method!(as_opaque: Opaque => OpaqueInfo);
    impl_cast_method!(as_option: Option => OptionInfo);
    impl_cast_method!(as_list: List => ListInfo);
    impl_cast_method!(as_class: Class => ClassInfo);

    /// Returns the [`Type`] of the described type.
    pub const fn ty(&self) -> &Type {
        match self {
            Self::Opaque(info) => info.ty(),
            Self::Option(info) => info.ty(),
            Self::List(info) => info.ty(),
            Self::Class(info) => info.ty(),
        }
    }

    crate::info::impl_type_fn!();

    /// Returns the [`ReflectKind`].
    pub const fn kind(&self) -> ReflectKind {
        match self {
            Self::Opaque(_) => ReflectKind::Opaque,
            Self::Option(_) => ReflectKind::Option,
            Self::List(_) => ReflectKind::List,
            Self::Class(_) => ReflectKind::Class,
        }
    }
}
