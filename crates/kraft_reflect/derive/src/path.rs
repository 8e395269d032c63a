//! This independent module is used to provide the required paths,
//! so as to minimize changes when the `kraft_reflect` structure is modified.

use proc_macro2::TokenStream;
use quote::quote;

// -----------------------------------------------------------------------------
// Crate Path

/// Get the correct access path to the `kraft_reflect` crate.
///
/// 1. For crates that depend on `kraft_reflect`, `::kraft_reflect` is returned.
/// 2. For crates that depend on `kraft`, `::kraft::reflect` is returned.
/// 3. For other situations, `::kraft_reflect` is returned, but this may be incorrect.
///
/// Reading the manifest is not cheap, so the path is obtained once per
/// derive and passed around.
pub(crate) fn kraft_reflect() -> syn::Path {
    kraft_macro_utils::Manifest::shared(|manifest| manifest.get_crate_path("kraft_reflect"))
}

// -----------------------------------------------------------------------------
// Items

#[inline(always)]
pub(crate) fn info_(path: &syn::Path) -> TokenStream {
    quote! { #path::info }
}

#[inline(always)]
pub(crate) fn impls_(path: &syn::Path) -> TokenStream {
    quote! { #path::impls }
}

#[inline(always)]
pub(crate) fn serde_codec_(path: &syn::Path) -> TokenStream {
    quote! { #path::serde::SerdeCodec }
}

#[inline(always)]
pub(crate) fn serde_bounds_(path: &syn::Path) -> TokenStream {
    quote! { #path::__macro_exports::serde }
}

#[cfg(feature = "auto_register")]
#[inline(always)]
pub(crate) fn auto_register_(path: &syn::Path) -> TokenStream {
    quote! { #path::__macro_exports::auto_register }
}
