// -----------------------------------------------------------------------------
// Modules

mod auto_register;
mod class_kind;
mod trait_type_path;
mod trait_typed;

// -----------------------------------------------------------------------------
// Internal API

use auto_register::get_auto_register_impl;
use class_kind::get_class_info_tokens;
use trait_type_path::impl_trait_type_path;
use trait_typed::impl_trait_typed;

use crate::derive_data::ReflectDerive;

/// Generate `TypePath`, `Typed` and the optional registration.
pub(crate) fn impl_reflect(derive: &ReflectDerive) -> proc_macro2::TokenStream {
    let type_path_impl = impl_trait_type_path(derive);
    let typed_impl = impl_trait_typed(derive, get_class_info_tokens(derive));
    let auto_register_impl = get_auto_register_impl(derive);

    quote::quote! {
        #type_path_impl

        #typed_impl

        #auto_register_impl
    }
}
