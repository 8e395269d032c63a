use crate::derive_data::ReflectDerive;

/// Generate `auto_register` implementation
#[cfg(feature = "auto_register")]
pub(crate) fn get_auto_register_impl(derive: &ReflectDerive) -> proc_macro2::TokenStream {
    use quote::quote_spanned;

    let Some(span) = derive.attrs.auto_register else {
        return proc_macro2::TokenStream::new();
    };

    // Invalid for generic types.
    if derive.is_generic() {
        return proc_macro2::TokenStream::new();
    }

    let auto_register_ = crate::path::auto_register_(&derive.kraft_reflect_path);
    let ident = derive.ident;

    quote_spanned! { span =>
        #auto_register_::inventory::submit!{
            #auto_register_::RegisteredType::of::<#ident>()
        }
    }
}

/// Generate `auto_register` implementation
#[cfg(not(feature = "auto_register"))]
pub(crate) fn get_auto_register_impl(_: &ReflectDerive) -> proc_macro2::TokenStream {
    proc_macro2::TokenStream::new()
}
