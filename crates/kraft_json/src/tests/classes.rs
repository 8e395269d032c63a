//! Classes shared by the fixture tests.

use core::any::Any;

use kraft_reflect::derive::Reflect;
use kraft_reflect::impls::NonGenericTypeInfoCell;
use kraft_reflect::info::{
    ClassFlags, ClassInfo, ConstructorInfo, FieldInfo, ParamInfo, TypeInfo, TypePath, Typed,
};
use serde::{Deserialize, Serialize};

// -----------------------------------------------------------------------------
// Data classes

#[derive(Reflect, Debug, PartialEq)]
pub(super) struct BooleanData {
    pub nonnull_boolean: bool,
    pub nullable_boolean1: Option<bool>,
    pub nullable_boolean2: Option<bool>,
    pub missing_boolean: Option<bool>,
}

#[derive(Reflect, Debug, PartialEq)]
pub(super) struct DoubleData {
    pub nonnull_double: f64,
    pub nullable_double1: Option<f64>,
    pub nullable_double2: Option<f64>,
    pub missing_double: Option<f64>,
}

#[derive(Reflect, Debug, PartialEq)]
pub(super) struct IntData {
    pub nonnull_int: i32,
    pub nullable_int1: Option<i32>,
    pub nullable_int2: Option<i32>,
    pub missing_int: Option<i32>,
}

#[derive(Reflect, Debug, PartialEq)]
pub(super) struct LongData {
    pub nonnull_long: i64,
    pub nullable_long1: Option<i64>,
    pub nullable_long2: Option<i64>,
    pub missing_long: Option<i64>,
}

#[derive(Reflect, Debug, PartialEq)]
pub(super) struct StringData {
    pub nonnull_string: String,
    pub nullable_string1: Option<String>,
    pub nullable_string2: Option<String>,
    pub missing_string: Option<String>,
}

#[derive(Reflect, Debug, PartialEq)]
pub(super) struct ObjectData {
    pub nonnull_object: StringData,
    pub nullable_object1: Option<StringData>,
    pub nullable_object2: Option<StringData>,
    pub missing_object: Option<StringData>,
}

#[derive(Reflect, Debug, PartialEq)]
pub(super) struct GenericData<T> {
    pub value: T,
}

#[derive(Reflect, Debug, PartialEq)]
pub(super) struct SingletonData;

#[derive(Reflect, Debug, PartialEq)]
pub(super) struct NonConstructorData {
    pub value_a: bool,
    #[reflect(computed = false)]
    pub value_b: bool,
    #[reflect(computed = !value_a)]
    pub value_c: bool,
}

#[derive(Reflect, Debug, PartialEq)]
pub(super) struct SerializableNameData {
    pub nonnull_string: String,
    #[reflect(rename = "bar")]
    pub nullable_string1: Option<String>,
    pub nullable_string2: Option<String>,
    #[reflect(rename = "gone")]
    pub missing_string: Option<String>,
}

#[derive(Reflect, Debug, PartialEq)]
pub(super) struct SerializableNameAlternateData {
    pub nonnull_string: String,
    #[reflect(rename = "bar", alternate = ["foo"])]
    pub nullable_string1: Option<String>,
    pub nullable_string2: Option<String>,
    #[reflect(rename = "gone")]
    pub missing_string: Option<String>,
}

#[derive(Reflect, Debug, PartialEq)]
pub(super) struct StringDataWithDefaults {
    #[reflect(default = "foo".to_owned())]
    pub nonnull_string: String,
    #[reflect(default = Some("bar".to_owned()))]
    pub nullable_string: Option<String>,
}

#[derive(Reflect, Debug, PartialEq)]
pub(super) struct DefaultPrimitiveData {
    pub nonnull_boolean: bool,
    pub nonnull_char: char,
    pub nonnull_int: i32,
    pub nonnull_long: i64,
    pub nonnull_double: f64,
    pub nullable_int: Option<i32>,
    pub string: String,
}

#[derive(Reflect, Debug, PartialEq)]
pub(super) struct Point {
    pub x: i32,
    pub y: Option<i32>,
}

#[derive(Reflect, Debug, PartialEq)]
pub(super) struct Tree {
    pub name: String,
    pub children: Vec<Tree>,
}

#[derive(Reflect, Debug, PartialEq)]
pub(super) struct Clashing {
    #[reflect(rename = "b")]
    pub a: String,
    pub b: String,
}

#[derive(Reflect, Debug, PartialEq)]
pub(super) struct SelfAliased {
    #[reflect(rename = "bar", alternate = ["foo", "bar"])]
    pub value: i32,
}

#[derive(Reflect, Debug, PartialEq, Serialize, Deserialize)]
#[reflect(serde)]
pub(super) enum Color {
    Red,
    Green,
}

#[derive(Reflect, Debug, PartialEq)]
pub(super) struct Palette {
    pub primary: Color,
    pub accents: Vec<Color>,
}

// -----------------------------------------------------------------------------
// Manual descriptors

/// A constructor-only parameter without a backing field, and a transient
/// field, both with defaults.
#[derive(Debug, PartialEq)]
pub(super) struct TransientStringData {
    pub transient_string1: String,
    pub string: String,
}

/// As [`TransientStringData`], without the defaults.
#[derive(Debug, PartialEq)]
pub(super) struct InvalidTransientStringData {
    pub transient_string1: String,
    pub string: String,
}

macro_rules! impl_transient_data {
    ($name:ident, $($optional:ident)?) => {
        impl TypePath for $name {
            fn type_path() -> &'static str {
                concat!("kraft_json::tests::classes::", stringify!($name))
            }

            fn type_name() -> &'static str {
                stringify!($name)
            }
        }

        impl Typed for $name {
            fn type_info() -> &'static TypeInfo {
                static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
                CELL.get_or_init(|| {
                    let fields = [
                        FieldInfo::new::<String>("transient_string1", |owner| {
                            owner
                                .downcast_ref::<Self>()
                                .map(|this| &this.transient_string1 as &dyn Any)
                        })
                        .with_transient(),
                        FieldInfo::new::<String>("string", |owner| {
                            owner.downcast_ref::<Self>().map(|this| &this.string as &dyn Any)
                        }),
                    ];
                    let params = [
                        ParamInfo::new::<String>("transient_string1")$(.$optional())?,
                        ParamInfo::new::<String>("transient_string2")$(.$optional())?,
                        ParamInfo::new::<String>("string"),
                    ];
                    let constructor = ConstructorInfo::new(&params, |args| {
                        let transient_string1 =
                            args.take_or_else::<String>(0, || "foobar".to_owned())?;
                        let _transient_string2 =
                            args.take_or_else::<String>(1, || "foobar".to_owned())?;
                        let string = args.take::<String>(2)?;
                        let value: Box<dyn Any> = Box::new(Self { transient_string1, string });
                        Ok(value)
                    });

                    TypeInfo::Class(
                        ClassInfo::new::<Self>(&fields)
                            .with_flags(ClassFlags::DATA)
                            .with_constructor(constructor),
                    )
                })
            }
        }
    };
}

impl_transient_data!(TransientStringData, with_optional);
impl_transient_data!(InvalidTransientStringData,);

/// A class with a single `value` parameter and the given flags.
macro_rules! flagged_class {
    ($name:ident, $flags:expr) => {
        #[derive(Debug, PartialEq)]
        pub(super) struct $name {
            pub value: String,
        }

        impl TypePath for $name {
            fn type_path() -> &'static str {
                concat!("kraft_json::tests::classes::", stringify!($name))
            }

            fn type_name() -> &'static str {
                stringify!($name)
            }
        }

        impl Typed for $name {
            fn type_info() -> &'static TypeInfo {
                static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
                CELL.get_or_init(|| {
                    let field = FieldInfo::new::<String>("value", |owner| {
                        owner.downcast_ref::<Self>().map(|this| &this.value as &dyn Any)
                    });
                    let constructor =
                        ConstructorInfo::new(&[ParamInfo::new::<String>("value")], |args| {
                            let value: Box<dyn Any> = Box::new(Self { value: args.take(0)? });
                            Ok(value)
                        });

                    TypeInfo::Class(
                        ClassInfo::new::<Self>(&[field])
                            .with_flags($flags)
                            .with_constructor(constructor),
                    )
                })
            }
        }
    };
}

flagged_class!(AbstractData, ClassFlags::DATA | ClassFlags::ABSTRACT);
flagged_class!(SealedData, ClassFlags::DATA | ClassFlags::SEALED);
flagged_class!(InnerData, ClassFlags::DATA | ClassFlags::INNER);
flagged_class!(LocalData, ClassFlags::DATA | ClassFlags::LOCAL);
flagged_class!(InterfaceData, ClassFlags::DATA | ClassFlags::INTERFACE);
flagged_class!(EnumLikeData, ClassFlags::DATA | ClassFlags::ENUM);
flagged_class!(PlainData, ClassFlags::empty());

/// A primitive constructor parameter whose name was stripped.
#[derive(Debug, PartialEq)]
pub(super) struct UnnamedData {
    pub count: u32,
    pub label: String,
}

impl TypePath for UnnamedData {
    fn type_path() -> &'static str {
        "kraft_json::tests::classes::UnnamedData"
    }

    fn type_name() -> &'static str {
        "UnnamedData"
    }
}

impl Typed for UnnamedData {
    fn type_info() -> &'static TypeInfo {
        static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
        CELL.get_or_init(|| {
            let field = FieldInfo::new::<String>("label", |owner| {
                owner.downcast_ref::<Self>().map(|this| &this.label as &dyn Any)
            });
            let params = [
                ParamInfo::from_ref(None, kraft_reflect::info::TypeRef::of::<u32>()),
                ParamInfo::new::<String>("label"),
            ];
            let constructor = ConstructorInfo::new(&params, |args| {
                let value: Box<dyn Any> = Box::new(Self {
                    count: args.take(0)?,
                    label: args.take(1)?,
                });
                Ok(value)
            });

            TypeInfo::Class(
                ClassInfo::new::<Self>(&[field])
                    .with_flags(ClassFlags::DATA)
                    .with_constructor(constructor),
            )
        })
    }
}
