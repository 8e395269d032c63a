//! See [`Reflect`](macro@Reflect).
#![allow(clippy::std_instead_of_core, reason = "proc-macro lib")]
#![allow(clippy::std_instead_of_alloc, reason = "proc-macro lib")]

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

static REFLECT_ATTRIBUTE_NAME: &str = "reflect";

// -----------------------------------------------------------------------------
// Modules

mod derive_data;
mod impls;
mod path;

// -----------------------------------------------------------------------------
// Macros

/// # Reflection Derivation
///
/// `#[derive(Reflect)]` implements `TypePath` and `Typed`, describing the
/// type as a class whose primary constructor takes every field in
/// declaration order.
///
/// ```rust, ignore
/// #[derive(Reflect)]
/// struct User {
///     name: String,
///     age: Option<u32>,
/// }
/// ```
///
/// Unit structs have a constructor without parameters. Tuple structs and
/// types with lifetime or const parameters are rejected.
///
/// ## Type Attributes
///
/// ### Custom Type Path
///
/// ```rust, ignore
/// #[derive(Reflect)]
/// #[reflect(type_path = "you::me::Foo")]
/// struct Foo { /* ... */ }
/// ```
///
/// This path does not need to include generics (they will be automatically appended).
///
/// ### serde
///
/// `#[reflect(serde)]` hands the whole type to its own `serde` implementation.
/// The class is marked `JSON_ADAPTER`, its fields are not described, and it
/// has no constructor. Enums must use it.
///
/// ```rust, ignore
/// #[derive(Reflect, Serialize, Deserialize)]
/// #[reflect(serde)]
/// enum Color { Red, Green }
/// ```
///
/// ### auto_register
///
/// `#[reflect(auto_register)]` collects the type for `registry::registered_types`.
/// It has no effect on generic types, and is a no-op when the `auto_register`
/// feature is disabled.
///
/// ## Field Attributes
///
/// - `rename = "name"`: the JSON name used for writing and reading.
/// - `alternate = ["a", "b"]`: additional names accepted on reading, requires `rename`.
/// - `transient`: the field is neither written nor matched on reading.
/// - `default = expr`: the parameter is optional; `expr` is used when no value is supplied.
///   It may refer to earlier fields by name.
/// - `computed = expr`: the field is not a constructor parameter; `expr` computes
///   it from the constructor parameters after they are bound.
///
/// ```rust, ignore
/// #[derive(Reflect)]
/// struct Item {
///     #[reflect(rename = "bar", alternate = ["foo"])]
///     name: String,
///     #[reflect(transient, default = 0)]
///     cache: u32,
///     #[reflect(computed = name.len())]
///     length: usize,
/// }
/// ```
#[proc_macro_derive(Reflect, attributes(reflect))]
pub fn derive_reflect(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);

    match derive_data::ReflectDerive::from_input(&ast) {
        Ok(derive) => impls::impl_reflect(&derive).into(),
        Err(err) => err.into_compile_error().into(),
    }
}
