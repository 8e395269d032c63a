use core::any::Any;

use crate::info::{TypeRef, Typed};

// -----------------------------------------------------------------------------
// SerializedName

/// A renamed JSON field: the primary name used for writing, plus alternate
/// names also accepted on reading.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SerializedName {
    value: &'static str,
    alternate: &'static [&'static str],
}

impl SerializedName {
    /// A rename without alternates.
    #[inline]
    pub const fn new(value: &'static str) -> Self {
        Self {
            value,
            alternate: &[],
        }
    }

    /// Sets the alternate names.
    #[inline]
    pub const fn with_alternate(mut self, alternate: &'static [&'static str]) -> Self {
        self.alternate = alternate;
        self
    }

    /// Returns the primary name.
    #[inline]
    pub const fn value(&self) -> &'static str {
        self.value
    }

    /// Returns the alternate names, in declaration order.
    #[inline]
    pub const fn alternate(&self) -> &'static [&'static str] {
        self.alternate
    }
}

// -----------------------------------------------------------------------------
// FieldInfo

/// Borrows a field from its owner, `None` if the owner has the wrong type.
pub type FieldGetter = for<'a> fn(&'a dyn Any) -> Option<&'a dyn Any>;

/// Information for a named class field.
///
/// Every stored field is described, including fields that are not
/// constructor parameters. The field order is the declaration order, which
/// is also the output order of the structural writer.
///
/// # Examples
///
/// ```
/// use core::any::Any;
/// use kraft_reflect::info::{FieldInfo, SerializedName};
///
/// struct Foo {
///     bar: String,
/// }
///
/// let field = FieldInfo::new::<String>("bar", |owner| {
///     owner.downcast_ref::<Foo>().map(|foo| &foo.bar as &dyn Any)
/// })
/// .with_serialized_name(SerializedName::new("baz").with_alternate(&["qux"]));
///
/// let foo = Foo { bar: "text".into() };
/// let value = field.get(&foo).unwrap();
///
/// assert_eq!(value.downcast_ref::<String>().unwrap(), "text");
/// assert_eq!(field.json_name(), "baz");
/// assert!(!field.is_transient());
/// ```
#[derive(Clone, Debug)]
pub struct FieldInfo {
    name: &'static str,
    ty: TypeRef,
    transient: bool,
    serialized_name: Option<SerializedName>,
    getter: FieldGetter,
}

impl FieldInfo {
    /// Creates a field of type `T`.
    #[inline]
    pub const fn new<T: Typed>(name: &'static str, getter: FieldGetter) -> Self {
        Self::from_ref(name, TypeRef::of::<T>(), getter)
    }

    /// Creates a field from a declared [`TypeRef`].
    #[inline]
    pub const fn from_ref(name: &'static str, ty: TypeRef, getter: FieldGetter) -> Self {
        Self {
            name,
            ty,
            transient: false,
            serialized_name: None,
            getter,
        }
    }

    /// Marks the field transient: it is neither written nor matched on reading.
    #[inline]
    pub const fn with_transient(mut self) -> Self {
        self.transient = true;
        self
    }

    /// Sets the serialized name.
    #[inline]
    pub const fn with_serialized_name(mut self, name: SerializedName) -> Self {
        self.serialized_name = Some(name);
        self
    }

    /// Returns the field name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the declared type.
    #[inline]
    pub const fn ty(&self) -> TypeRef {
        self.ty
    }

    /// Returns `true` if the field is transient.
    #[inline]
    pub const fn is_transient(&self) -> bool {
        self.transient
    }

    /// Returns the serialized name, if the field is renamed.
    #[inline]
    pub const fn serialized_name(&self) -> Option<&SerializedName> {
        self.serialized_name.as_ref()
    }

    /// Returns the name used when writing: the serialized name if present,
    /// otherwise the field name.
    #[inline]
    pub const fn json_name(&self) -> &'static str {
        match &self.serialized_name {
            Some(name) => name.value(),
            None => self.name,
        }
    }

    /// Borrows this field from `owner`.
    #[inline]
    pub fn get<'a>(&self, owner: &'a dyn Any) -> Option<&'a dyn Any> {
        (self.getter)(owner)
    }
}
