use crate::info::{Type, TypeInfo, Typed};

// -----------------------------------------------------------------------------
// TypeParamInfo

/// An instantiated type parameter: its declared name and the concrete type.
#[derive(Clone, Debug)]
pub struct TypeParamInfo {
    name: &'static str,
    ty: Type,
    type_info: fn() -> &'static TypeInfo,
}

impl TypeParamInfo {
    /// Creates a type parameter `name` instantiated with `T`.
    #[inline]
    pub const fn new<T: Typed>(name: &'static str) -> Self {
        Self {
            name,
            ty: Type::of::<T>(),
            type_info: T::type_info,
        }
    }

    /// Returns the declared parameter name, e.g. `T`.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the [`Type`] of the concrete argument.
    #[inline]
    pub const fn ty(&self) -> &Type {
        &self.ty
    }

    /// Returns the [`TypeInfo`] of the concrete argument.
    #[inline]
    pub fn type_info(&self) -> &'static TypeInfo {
        (self.type_info)()
    }
}

// -----------------------------------------------------------------------------
// Generics

/// The instantiated type parameters of a generic type, in declaration order.
///
/// # Examples
///
/// ```
/// use kraft_reflect::info::{Generics, TypeParamInfo};
///
/// let generics = Generics::from([TypeParamInfo::new::<String>("T")]);
///
/// assert_eq!(generics.len(), 1);
/// assert!(generics.get_named("T").unwrap().ty().is::<String>());
/// assert!(generics.get_named("U").is_none());
/// ```
#[derive(Clone, Debug, Default)]
pub struct Generics(Box<[TypeParamInfo]>);

impl Generics {
    /// Creates an empty list.
    #[inline]
    pub fn new() -> Self {
        Self(Box::new([]))
    }

    /// Finds a type parameter by its declared name.
    pub fn get_named(&self, name: &str) -> Option<&TypeParamInfo> {
        self.0.iter().find(|param| param.name == name)
    }

    /// Iterates over the parameters in declaration order.
    #[inline]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &TypeParamInfo> {
        self.0.iter()
    }

    /// Returns the number of type parameters.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` for non-generic types.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<const N: usize> From<[TypeParamInfo; N]> for Generics {
    #[inline]
    fn from(value: [TypeParamInfo; N]) -> Self {
        Self(Box::new(value))
    }
}
