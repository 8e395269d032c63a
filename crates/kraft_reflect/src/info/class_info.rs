use bitflags::bitflags;
use kraft_utils::hash::HashMap;

use crate::info::{ConstructorInfo, FieldInfo, Generics, Type, TypePath};
use crate::serde::SerdeCodec;

// -----------------------------------------------------------------------------
// ClassFlags

bitflags! {
    /// Shape flags of a class, deciding which adapters may handle it.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct ClassFlags: u16 {
        /// The class supports constructor-based decoding.
        const DATA          = 1 << 0;
        /// The class cannot be instantiated directly.
        const ABSTRACT      = 1 << 1;
        /// The class is the root of a closed hierarchy.
        const SEALED        = 1 << 2;
        /// The class needs an enclosing instance to be built.
        const INNER         = 1 << 3;
        /// The class is declared inside a function body.
        const LOCAL         = 1 << 4;
        /// The type only describes behavior.
        const INTERFACE     = 1 << 5;
        /// The type is an enumeration.
        const ENUM          = 1 << 6;
        /// The type carries its own JSON codec.
        const JSON_ADAPTER  = 1 << 7;
    }
}

// -----------------------------------------------------------------------------
// ClassInfo

/// A container for compile-time class info.
///
/// # Examples
///
/// ```rust
/// use kraft_reflect::{derive::Reflect, info::{ClassFlags, Typed}};
///
/// #[derive(Reflect)]
/// struct A {
///     #[reflect(rename = "b")]
///     val: f32,
/// }
///
/// let info = A::type_info().as_class().unwrap();
///
/// assert_eq!(info.field_len(), 1);
/// assert_eq!(info.field("val").unwrap().json_name(), "b");
/// assert_eq!(info.flags(), ClassFlags::DATA);
/// assert_eq!(info.constructor().unwrap().param_len(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct ClassInfo {
    ty: Type,
    flags: ClassFlags,
    generics: Generics,
    fields: Box<[FieldInfo]>,
    field_indices: HashMap<&'static str, usize>,
    constructor: Option<ConstructorInfo>,
    codec: Option<SerdeCodec>,
}

impl ClassInfo {
    /// Create a new [`ClassInfo`] without flags or constructor.
    ///
    /// The order of fields is fixed, it depends on the input order.
    pub fn new<T: TypePath>(fields: &[FieldInfo]) -> Self {
        let field_indices = fields
            .iter()
            .enumerate()
            .map(|(index, field)| (field.name(), index))
            .collect();

        Self {
            ty: Type::of::<T>(),
            flags: ClassFlags::empty(),
            generics: Generics::new(),
            fields: fields.into(),
            field_indices,
            constructor: None,
            codec: None,
        }
    }

    /// Adds shape flags.
    #[inline]
    pub fn with_flags(mut self, flags: ClassFlags) -> Self {
        self.flags |= flags;
        self
    }

    /// Sets the instantiated type parameters.
    #[inline]
    pub fn with_generics(mut self, generics: Generics) -> Self {
        self.generics = generics;
        self
    }

    /// Sets the primary constructor.
    #[inline]
    pub fn with_constructor(mut self, constructor: ConstructorInfo) -> Self {
        self.constructor = Some(constructor);
        self
    }

    /// Sets the class's own codec, which also marks it [`ClassFlags::JSON_ADAPTER`].
    #[inline]
    pub fn with_codec(mut self, codec: SerdeCodec) -> Self {
        self.codec = Some(codec);
        self.flags |= ClassFlags::JSON_ADAPTER;
        self
    }

    /// Returns the [`Type`] of the described type.
    #[inline]
    pub const fn ty(&self) -> &Type {
        &self.ty
    }

    crate::info::impl_type_fn!();

    /// Returns the shape flags.
    #[inline]
    pub const fn flags(&self) -> ClassFlags {
        self.flags
    }

    /// Returns the instantiated type parameters.
    #[inline]
    pub const fn generics(&self) -> &Generics {
        &self.generics
    }

    /// Returns the [`FieldInfo`] for the given `name`, if present.
    pub fn field(&self, name: &str) -> Option<&FieldInfo> {
        self.fields.get(*self.field_indices.get(name)?)
    }

    /// Returns the [`FieldInfo`] at the given index, if present.
    #[inline]
    pub fn field_at(&self, index: usize) -> Option<&FieldInfo> {
        self.fields.get(index)
    }

    /// Returns an iterator over the fields in **declaration order**.
    #[inline]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &FieldInfo> {
        self.fields.iter()
    }

    /// Returns the number of fields.
    #[inline]
    pub fn field_len(&self) -> usize {
        self.fields.len()
    }

    /// Returns the primary constructor, if any.
    #[inline]
    pub const fn constructor(&self) -> Option<&ConstructorInfo> {
        self.constructor.as_ref()
    }

    /// Returns the class's own codec, if any.
    #[inline]
    pub const fn codec(&self) -> Option<&SerdeCodec> {
        self.codec.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use core::any::Any;

    use super::{ClassFlags, ClassInfo};
    use crate::info::{ConstructorInfo, FieldInfo, ParamInfo, TypePath};

    struct Inner {
        value: i32,
    }

    impl TypePath for Inner {
        fn type_path() -> &'static str {
            "tests::Outer::Inner"
        }
        fn type_name() -> &'static str {
            "Inner"
        }
    }

    #[test]
    fn manual_descriptor() {
        let info = ClassInfo::new::<Inner>(&[FieldInfo::new::<i32>("value", |owner| {
            owner.downcast_ref::<Inner>().map(|v| &v.value as &dyn Any)
        })])
        .with_flags(ClassFlags::DATA)
        .with_flags(ClassFlags::INNER)
        .with_constructor(ConstructorInfo::new(&[ParamInfo::new::<i32>("value")], |args| {
            Ok(Box::new(Inner {
                value: args.take(0)?,
            }))
        }));

        assert!(info.flags().contains(ClassFlags::DATA | ClassFlags::INNER));
        assert_eq!(info.type_name(), "Inner");
        assert!(info.field("missing").is_none());
        assert_eq!(info.field_at(0).map(|f| f.name()), Some("value"));
        assert!(info.codec().is_none());
        assert!(info.generics().is_empty());

        let inner = Inner { value: 4 };
        let value = info.field("value").and_then(|f| f.get(&inner));
        assert_eq!(value.and_then(|v| v.downcast_ref::<i32>()), Some(&4));
    }
}
