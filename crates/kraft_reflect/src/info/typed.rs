use crate::info::{TypeInfo, TypePath};

// -----------------------------------------------------------------------------
// Typed

/// A static accessor to compile-time type information.
///
/// Usually implemented by `#[derive(Reflect)]`. Implementations store the
/// [`TypeInfo`] in a static cell, see [`impls`](crate::impls).
///
/// # Examples
///
/// ```
/// use kraft_reflect::info::{ReflectKind, Typed};
///
/// assert_eq!(i32::type_info().kind(), ReflectKind::Opaque);
/// assert_eq!(<Option<i32>>::type_info().kind(), ReflectKind::Option);
/// assert_eq!(<Vec<String>>::type_info().kind(), ReflectKind::List);
/// ```
pub trait Typed: TypePath {
    /// Returns the compile-time info for the underlying type.
    fn type_info() -> &'static TypeInfo;
}

// -----------------------------------------------------------------------------
// TypeRef

/// A declared type, as written on a field or a constructor parameter.
///
/// `Concrete` types are known when the descriptor is built. A `Variable`
/// names one of the owner's type parameters and is substituted with the
/// owner's concrete type argument, see [`Generics`](crate::info::Generics).
#[derive(Clone, Copy, Debug)]
pub enum TypeRef {
    Concrete(fn() -> &'static TypeInfo),
    Variable(&'static str),
}

impl TypeRef {
    /// A concrete reference to `T`.
    #[inline]
    pub const fn of<T: Typed>() -> Self {
        Self::Concrete(T::type_info)
    }

    /// Returns the concrete info, or `None` for a type variable.
    #[inline]
    pub fn concrete(&self) -> Option<&'static TypeInfo> {
        match self {
            Self::Concrete(type_info) => Some(type_info()),
            Self::Variable(_) => None,
        }
    }
}
