use core::any::{Any, type_name};
use core::mem;

use crate::info::ParamInfo;
use crate::ops::ConstructError;

// The state of one argument position.
enum Slot {
    Unset,
    Null,
    Value(Box<dyn Any>),
}

/// An ordered positional argument list for a constructor.
///
/// Each position is either unset, supplied as null, or supplied with a value.
/// Keeping "unset" apart from "null" lets a constructor function apply its
/// manual default only when no argument was supplied at all.
///
/// # Examples
///
/// ```
/// use kraft_reflect::info::ParamInfo;
/// use kraft_reflect::ops::{Arguments, ConstructError};
///
/// let params = [ParamInfo::new::<i32>("x"), ParamInfo::new::<i32>("y")];
/// let mut args = Arguments::new(&params);
///
/// assert!(args.insert(0, Some(Box::new(5_i32))));
/// assert!(!args.insert(0, Some(Box::new(6_i32))));
/// assert!(args.is_set(0));
///
/// assert_eq!(args.take::<i32>(0), Ok(5));
/// assert_eq!(args.take_or_else::<i32>(1, || 9), Ok(9));
/// assert!(matches!(args.take::<i32>(1), Err(ConstructError::Missing { .. })));
/// ```
pub struct Arguments<'a> {
    params: &'a [ParamInfo],
    slots: Vec<Slot>,
}

impl<'a> Arguments<'a> {
    /// Creates an argument list with every position unset.
    pub fn new(params: &'a [ParamInfo]) -> Self {
        let mut slots = Vec::with_capacity(params.len());
        slots.resize_with(params.len(), || Slot::Unset);
        Self { params, slots }
    }

    /// Returns the number of positions.
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if the position holds a value or an explicit null.
    #[inline]
    pub fn is_set(&self, index: usize) -> bool {
        matches!(self.slots.get(index), Some(Slot::Null | Slot::Value(_)))
    }

    /// Supplies an argument, `None` meaning null.
    ///
    /// Returns `false` and leaves the list unchanged if the position is
    /// already set or out of range.
    pub fn insert(&mut self, index: usize, value: Option<Box<dyn Any>>) -> bool {
        match self.slots.get_mut(index) {
            Some(slot @ Slot::Unset) => {
                *slot = match value {
                    Some(value) => Slot::Value(value),
                    None => Slot::Null,
                };
                true
            }
            _ => false,
        }
    }

    /// Takes a required argument.
    pub fn take<T: Any>(&mut self, index: usize) -> Result<T, ConstructError> {
        self.take_with(index, None::<fn() -> T>)
    }

    /// Takes an optional argument, calling `default` if it was not supplied.
    pub fn take_or_else<T: Any>(
        &mut self,
        index: usize,
        default: impl FnOnce() -> T,
    ) -> Result<T, ConstructError> {
        self.take_with(index, Some(default))
    }

    fn take_with<T: Any>(
        &mut self,
        index: usize,
        default: Option<impl FnOnce() -> T>,
    ) -> Result<T, ConstructError> {
        let param = self.params.get(index).map_or("_", ParamInfo::label);
        let slot = self
            .slots
            .get_mut(index)
            .map_or(Slot::Unset, |slot| mem::replace(slot, Slot::Unset));

        match (slot, default) {
            (Slot::Value(value), _) => match value.downcast::<T>() {
                Ok(value) => Ok(*value),
                Err(_) => Err(ConstructError::Mismatch {
                    index,
                    param,
                    expected: type_name::<T>(),
                }),
            },
            (Slot::Unset, Some(default)) => Ok(default()),
            (Slot::Unset, None) => Err(ConstructError::Missing { index, param }),
            (Slot::Null, _) => Err(ConstructError::Null { index, param }),
        }
    }
}
