use crate::impls::{GenericTypeInfoCell, GenericTypePathCell, concat};
use crate::info::{OptionInfo, TypeInfo, TypePath, Typed};

impl<T: TypePath> TypePath for Option<T> {
    fn type_path() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| concat(&["core::option::Option<", T::type_path(), ">"]))
    }

    fn type_name() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| concat(&["Option<", T::type_name(), ">"]))
    }
}

impl<T: Typed> Typed for Option<T> {
    fn type_info() -> &'static TypeInfo {
        static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
        CELL.get_or_insert::<Self>(|| TypeInfo::Option(OptionInfo::new::<T>()))
    }
}

#[cfg(test)]
mod tests {
    use crate::info::{TypePath, Typed};

    #[test]
    fn nested_names() {
        assert_eq!(<Option<Vec<u8>>>::type_name(), "Option<Vec<u8>>");
        assert_eq!(
            <Option<String>>::type_path(),
            "core::option::Option<alloc::string::String>"
        );
    }

    #[test]
    fn info_is_shared_per_instantiation() {
        let a = <Option<i32>>::type_info();
        let b = <Option<i64>>::type_info();
        assert!(a.type_is::<Option<i32>>());
        assert!(b.type_is::<Option<i64>>());
        assert!(core::ptr::eq(a, <Option<i32>>::type_info()));
    }
}
