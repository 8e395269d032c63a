//! Parameter types and the values used when the input omits a parameter.

use kraft_reflect::info::{ClassInfo, PrimitiveKind, TypeInfo, TypeParamInfo, TypeRef};

use crate::error::AdapterError;

/// What an absent, non-optional parameter is filled with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fallback {
    /// `None` for an `Option` parameter, nothing otherwise.
    Null,
    /// The zero value of a primitive.
    Zero(PrimitiveKind),
}

/// Resolves a declared type against the generics of `owner`.
pub fn resolve_type(owner: &ClassInfo, ty: TypeRef) -> Result<&'static TypeInfo, AdapterError> {
    match ty {
        TypeRef::Concrete(type_info) => Ok(type_info()),
        TypeRef::Variable(name) => owner
            .generics()
            .get_named(name)
            .map(TypeParamInfo::type_info)
            .ok_or(AdapterError::UnresolvedTypeVariable {
                owner: owner.type_path(),
                name,
            }),
    }
}

/// Returns `true` for `Option`.
#[inline]
pub fn is_nullable(info: &TypeInfo) -> bool {
    matches!(info, TypeInfo::Option(_))
}

/// Returns `true` for primitives, looking through `Option`.
pub fn is_primitive(info: &TypeInfo) -> bool {
    match info {
        TypeInfo::Opaque(info) => info.primitive().is_some(),
        TypeInfo::Option(info) => is_primitive(info.inner_info()),
        TypeInfo::List(_) | TypeInfo::Class(_) => false,
    }
}

/// The automatic fallback of a parameter of type `info`.
///
/// | Type | Fallback |
/// |---|---|
/// | `bool` | `false` |
/// | integers | `0` |
/// | `char` | `'\0'` |
/// | `f32`, `f64` | `0.0` |
/// | `Option<_>` | null |
/// | anything else | null |
pub fn zero_value_for(info: &TypeInfo) -> Fallback {
    match info {
        TypeInfo::Opaque(info) => info.primitive().map_or(Fallback::Null, Fallback::Zero),
        _ => Fallback::Null,
    }
}

#[cfg(test)]
mod tests {
    use kraft_reflect::derive::Reflect;
    use kraft_reflect::info::{PrimitiveKind, TypeRef, Typed};

    use super::*;

    #[derive(Reflect)]
    struct Holder<T> {
        value: T,
    }

    #[test]
    fn primitives() {
        assert!(is_primitive(i32::type_info()));
        assert!(is_primitive(<Option<char>>::type_info()));
        assert!(!is_primitive(String::type_info()));
        assert!(!is_primitive(<Vec<u8>>::type_info()));

        assert!(is_nullable(<Option<char>>::type_info()));
        assert!(!is_nullable(char::type_info()));
    }

    #[test]
    fn fallbacks() {
        assert_eq!(zero_value_for(bool::type_info()), Fallback::Zero(PrimitiveKind::Bool));
        assert_eq!(zero_value_for(u16::type_info()), Fallback::Zero(PrimitiveKind::U16));
        assert_eq!(zero_value_for(<Option<u16>>::type_info()), Fallback::Null);
        assert_eq!(zero_value_for(String::type_info()), Fallback::Null);
    }

    #[test]
    fn type_variables() {
        let owner = <Holder<u8>>::type_info().as_class().unwrap();

        let resolved = resolve_type(owner, TypeRef::Variable("T")).unwrap();
        assert!(resolved.type_is::<u8>());

        let err = resolve_type(owner, TypeRef::Variable("U")).unwrap_err();
        assert!(matches!(err, AdapterError::UnresolvedTypeVariable { name: "U", .. }));
    }
}
