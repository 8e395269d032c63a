use core::any::Any;

use crate::info::{Type, TypeInfo, Typed};

/// A container for compile-time info of the nullable wrapper `Option<T>`.
///
/// The functions are type-erased, values are passed as `dyn Any` of
/// `Option<T>` (or `T` for [`wrap`](OptionInfo::wrap)).
///
/// # Examples
///
/// ```
/// use core::any::Any;
/// use kraft_reflect::info::Typed;
///
/// let info = <Option<i32>>::type_info().as_option().unwrap();
/// assert!(info.inner_info().type_is::<i32>());
///
/// let some = info.wrap(Box::new(3_i32)).unwrap();
/// assert_eq!(some.downcast_ref::<Option<i32>>(), Some(&Some(3)));
///
/// let none = info.none();
/// assert!(matches!(info.project(&*none), Some(None)));
/// assert!(info.project(&5_u8 as &dyn Any).is_none());
/// ```
#[derive(Clone, Debug)]
pub struct OptionInfo {
    ty: Type,
    inner_info: fn() -> &'static TypeInfo,
    none: fn() -> Box<dyn Any>,
    wrap: fn(Box<dyn Any>) -> Result<Box<dyn Any>, Box<dyn Any>>,
    project: for<'a> fn(&'a dyn Any) -> Option<Option<&'a dyn Any>>,
}

fn none_of<T: Any>() -> Box<dyn Any> {
    Box::new(None::<T>)
}

fn wrap_some<T: Any>(value: Box<dyn Any>) -> Result<Box<dyn Any>, Box<dyn Any>> {
    let value = value.downcast::<T>()?;
    Ok(Box::new(Some(*value)))
}

fn project_some<T: Any>(value: &dyn Any) -> Option<Option<&dyn Any>> {
    let value = value.downcast_ref::<Option<T>>()?;
    Some(value.as_ref().map(|v| v as &dyn Any))
}

impl OptionInfo {
    /// Creates the info of `Option<T>`.
    #[inline]
    pub fn new<T: Typed>() -> Self {
        Self {
            ty: Type::of::<Option<T>>(),
            inner_info: T::type_info,
            none: none_of::<T>,
            wrap: wrap_some::<T>,
            project: project_some::<T>,
        }
    }

    /// Returns the [`Type`] of the described type.
    #[inline]
    pub const fn ty(&self) -> &Type {
        &self.ty
    }

    crate::info::impl_type_fn!();

    /// Returns the [`TypeInfo`] of `T`.
    #[inline]
    pub fn inner_info(&self) -> &'static TypeInfo {
        (self.inner_info)()
    }

    /// Returns a boxed `None::<T>`.
    #[inline]
    pub fn none(&self) -> Box<dyn Any> {
        (self.none)()
    }

    /// Wraps a boxed `T` into a boxed `Some(T)`.
    ///
    /// Returns the input back if it is not a `T`.
    #[inline]
    pub fn wrap(&self, value: Box<dyn Any>) -> Result<Box<dyn Any>, Box<dyn Any>> {
        (self.wrap)(value)
    }

    /// Looks through an `Option<T>`.
    ///
    /// - `None` if `value` is not an `Option<T>`.
    /// - `Some(None)` if `value` is `None`.
    /// - `Some(Some(inner))` otherwise.
    #[inline]
    pub fn project<'a>(&self, value: &'a dyn Any) -> Option<Option<&'a dyn Any>> {
        (self.project)(value)
    }
}
