use core::any::Any;

use crate::info::{Type, TypeInfo, Typed};

/// A container for compile-time info of `Vec<T>`.
///
/// # Examples
///
/// ```
/// use core::any::Any;
/// use kraft_reflect::info::Typed;
///
/// let info = <Vec<u8>>::type_info().as_list().unwrap();
///
/// let items: Vec<Box<dyn Any>> = vec![Box::new(1_u8), Box::new(2_u8)];
/// let list = info.from_items(items).unwrap();
/// assert_eq!(list.downcast_ref::<Vec<u8>>(), Some(&vec![1, 2]));
///
/// assert_eq!(info.items(&*list).map(|v| v.len()), Some(2));
/// ```
#[derive(Clone, Debug)]
pub struct ListInfo {
    ty: Type,
    item_info: fn() -> &'static TypeInfo,
    from_items: fn(Vec<Box<dyn Any>>) -> Option<Box<dyn Any>>,
    items: for<'a> fn(&'a dyn Any) -> Option<Vec<&'a dyn Any>>,
}

fn list_from_items<T: Any>(items: Vec<Box<dyn Any>>) -> Option<Box<dyn Any>> {
    let mut list = Vec::<T>::with_capacity(items.len());
    for item in items {
        list.push(*item.downcast::<T>().ok()?);
    }
    Some(Box::new(list))
}

fn list_items<T: Any>(value: &dyn Any) -> Option<Vec<&dyn Any>> {
    let list = value.downcast_ref::<Vec<T>>()?;
    Some(list.iter().map(|v| v as &dyn Any).collect())
}

impl ListInfo {
    /// Creates the info of `Vec<T>`.
    #[inline]
    pub fn new<T: Typed>() -> Self {
        Self {
            ty: Type::of::<Vec<T>>(),
            item_info: T::type_info,
            from_items: list_from_items::<T>,
            items: list_items::<T>,
        }
    }

    /// Returns the [`Type`] of the described type.
    #[inline]
    pub const fn ty(&self) -> &Type {
        &self.ty
    }

    crate::info::impl_type_fn!();

    /// Returns the [`TypeInfo`] of the items.
    #[inline]
    pub fn item_info(&self) -> &'static TypeInfo {
        (self.item_info)()
    }

    /// Collects boxed items into a boxed list.
    ///
    /// Returns `None` if any item has the wrong type.
    #[inline]
    pub fn from_items(&self, items: Vec<Box<dyn Any>>) -> Option<Box<dyn Any>> {
        (self.from_items)(items)
    }

    /// Borrows the items of a list in order.
    ///
    /// Returns `None` if `value` is not a list of this type.
    #[inline]
    pub fn items<'a>(&self, value: &'a dyn Any) -> Option<Vec<&'a dyn Any>> {
        (self.items)(value)
    }
}
