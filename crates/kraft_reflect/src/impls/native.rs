use crate::impls::NonGenericTypeInfoCell;
use crate::info::{OpaqueInfo, PrimitiveKind, TypeInfo, TypePath, Typed};
use crate::serde::SerdeCodec;

macro_rules! impl_native {
    ($($ty:ty : $path:literal, $name:literal $(=> $kind:ident)?;)*) => {$(
        impl TypePath for $ty {
            #[inline]
            fn type_path() -> &'static str {
                $path
            }

            #[inline]
            fn type_name() -> &'static str {
                $name
            }
        }

        impl Typed for $ty {
            fn type_info() -> &'static TypeInfo {
                static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
                CELL.get_or_init(|| {
                    TypeInfo::Opaque(
                        OpaqueInfo::new::<Self>()
                            .with_codec(SerdeCodec::of::<Self>())
                            $(.with_primitive(PrimitiveKind::$kind))?
                    )
                })
            }
        }
    )*};
}

impl_native! {
    bool: "bool", "bool" => Bool;
    char: "char", "char" => Char;
    i8: "i8", "i8" => I8;
    i16: "i16", "i16" => I16;
    i32: "i32", "i32" => I32;
    i64: "i64", "i64" => I64;
    u8: "u8", "u8" => U8;
    u16: "u16", "u16" => U16;
    u32: "u32", "u32" => U32;
    u64: "u64", "u64" => U64;
    f32: "f32", "f32" => F32;
    f64: "f64", "f64" => F64;
    String: "alloc::string::String", "String";
}
