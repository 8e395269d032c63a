//! JSON names of constructor parameters.

use alloc::vec::Vec;
use core::iter;

use kraft_reflect::info::{ClassInfo, ParamInfo};

/// Returns every JSON name that binds to `param`.
///
/// - An unnamed parameter, or one without a matching field on `owner`,
///   has no names.
/// - A transient field has no names.
/// - A renamed field answers to its serialized name, then its alternates.
/// - Otherwise the parameter name is used.
///
/// Names are not deduplicated.
pub fn names_for(param: &ParamInfo, owner: &ClassInfo) -> Vec<&'static str> {
    let Some(name) = param.name() else {
        return Vec::new();
    };

    match owner.field(name) {
        None => Vec::new(),
        Some(field) if field.is_transient() => Vec::new(),
        Some(field) => match field.serialized_name() {
            Some(serialized) => iter::once(serialized.value())
                .chain(serialized.alternate().iter().copied())
                .collect(),
            None => alloc::vec![name],
        },
    }
}

#[cfg(test)]
mod tests {
    use kraft_reflect::info::{
        ClassInfo, FieldInfo, ParamInfo, SerializedName, TypePath, TypeRef,
    };

    use super::names_for;

    struct Owner;

    impl TypePath for Owner {
        fn type_path() -> &'static str {
            "tests::Owner"
        }
        fn type_name() -> &'static str {
            "Owner"
        }
    }

    fn owner() -> ClassInfo {
        ClassInfo::new::<Owner>(&[
            FieldInfo::new::<String>("plain", |_| None),
            FieldInfo::new::<String>("renamed", |_| None).with_serialized_name(
                SerializedName::new("bar").with_alternate(&["foo", "bar"]),
            ),
            FieldInfo::new::<String>("skipped", |_| None).with_transient(),
        ])
    }

    #[test]
    fn resolution() {
        let owner = owner();
        let ty = TypeRef::of::<String>();

        assert_eq!(names_for(&ParamInfo::new::<String>("plain"), &owner), ["plain"]);
        assert_eq!(
            names_for(&ParamInfo::new::<String>("renamed"), &owner),
            ["bar", "foo", "bar"]
        );
        assert!(names_for(&ParamInfo::new::<String>("skipped"), &owner).is_empty());
        assert!(names_for(&ParamInfo::new::<String>("absent"), &owner).is_empty());
        assert!(names_for(&ParamInfo::from_ref(None, ty), &owner).is_empty());
    }
}
