use core::any::Any;

use crate::info::{TypeRef, Typed};
use crate::ops::{Arguments, ConstructError};

// -----------------------------------------------------------------------------
// ParamInfo

/// One formal parameter of a primary constructor.
///
/// A parameter is matched to JSON through the field of the same name on the
/// owning class. Parameters without a name (stripped metadata) or without a
/// matching field can never be supplied from JSON.
#[derive(Clone, Debug)]
pub struct ParamInfo {
    name: Option<&'static str>,
    index: usize,
    ty: TypeRef,
    optional: bool,
}

impl ParamInfo {
    /// Creates a named parameter of type `T`.
    #[inline]
    pub const fn new<T: Typed>(name: &'static str) -> Self {
        Self::from_ref(Some(name), TypeRef::of::<T>())
    }

    /// Creates a parameter from an optional name and a declared [`TypeRef`].
    ///
    /// The position is assigned by [`ConstructorInfo::new`].
    #[inline]
    pub const fn from_ref(name: Option<&'static str>, ty: TypeRef) -> Self {
        Self {
            name,
            index: 0,
            ty,
            optional: false,
        }
    }

    /// Marks the parameter optional: the constructor function supplies its
    /// own default when no argument is given.
    #[inline]
    pub const fn with_optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Returns the declared name, `None` if it is unavailable.
    #[inline]
    pub const fn name(&self) -> Option<&'static str> {
        self.name
    }

    /// Returns the name for diagnostics, `_` if it is unavailable.
    #[inline]
    pub const fn label(&self) -> &'static str {
        match self.name {
            Some(name) => name,
            None => "_",
        }
    }

    /// Returns the position in the constructor signature.
    #[inline]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Returns the declared type.
    #[inline]
    pub const fn ty(&self) -> TypeRef {
        self.ty
    }

    /// Returns `true` if the parameter has a manual default.
    #[inline]
    pub const fn is_optional(&self) -> bool {
        self.optional
    }
}

// -----------------------------------------------------------------------------
// ConstructorInfo

/// Invokes a constructor with positional arguments, returning the boxed instance.
pub type ConstructFn = fn(&mut Arguments<'_>) -> Result<Box<dyn Any>, ConstructError>;

/// A primary constructor: its parameters in declaration order and the
/// function building an instance from [`Arguments`].
///
/// # Examples
///
/// ```
/// use kraft_reflect::info::{ConstructorInfo, ParamInfo};
///
/// struct Pair {
///     a: i32,
///     b: String,
/// }
///
/// let constructor = ConstructorInfo::new(
///     &[
///         ParamInfo::new::<i32>("a"),
///         ParamInfo::new::<String>("b").with_optional(),
///     ],
///     |args| {
///         let a = args.take::<i32>(0)?;
///         let b = args.take_or_else::<String>(1, || "b".into())?;
///         Ok(Box::new(Pair { a, b }))
///     },
/// );
///
/// assert_eq!(constructor.param_len(), 2);
/// assert_eq!(constructor.params()[1].index(), 1);
///
/// let mut args = constructor.arguments();
/// assert!(args.insert(0, Some(Box::new(1_i32))));
/// let pair = constructor.invoke(&mut args).unwrap();
/// let pair = pair.downcast::<Pair>().unwrap();
/// assert_eq!((pair.a, pair.b.as_str()), (1, "b"));
/// ```
#[derive(Clone, Debug)]
pub struct ConstructorInfo {
    params: Box<[ParamInfo]>,
    invoke: ConstructFn,
}

impl ConstructorInfo {
    /// Creates a constructor, assigning parameter positions in input order.
    pub fn new(params: &[ParamInfo], invoke: ConstructFn) -> Self {
        let params = params
            .iter()
            .enumerate()
            .map(|(index, param)| ParamInfo {
                index,
                ..param.clone()
            })
            .collect();
        Self { params, invoke }
    }

    /// Returns the parameters in declaration order.
    #[inline]
    pub fn params(&self) -> &[ParamInfo] {
        &self.params
    }

    /// Returns the number of parameters.
    #[inline]
    pub fn param_len(&self) -> usize {
        self.params.len()
    }

    /// Creates an empty argument list for this constructor.
    #[inline]
    pub fn arguments(&self) -> Arguments<'_> {
        Arguments::new(&self.params)
    }

    /// Invokes the constructor.
    #[inline]
    pub fn invoke(&self, args: &mut Arguments<'_>) -> Result<Box<dyn Any>, ConstructError> {
        (self.invoke)(args)
    }
}
