use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::ReflectDerive;

fn static_path_cell(derive: &ReflectDerive, base: TokenStream, method: TokenStream) -> TokenStream {
    let impls_ = crate::path::impls_(&derive.kraft_reflect_path);
    let info_ = crate::path::info_(&derive.kraft_reflect_path);

    let mut parts = Vec::with_capacity(derive.type_params.len() * 2);
    for (index, param) in derive.type_params.iter().enumerate() {
        if index > 0 {
            parts.push(quote! { ", " });
        }
        parts.push(quote! { <#param as #info_::TypePath>::#method() });
    }

    quote! {
        static CELL: #impls_::GenericTypePathCell = #impls_::GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| {
            #impls_::concat(&[#base, "<", #(#parts,)* ">"])
        })
    }
}

/// Generate implementation codes for `TypePath`
pub(crate) fn impl_trait_type_path(derive: &ReflectDerive) -> TokenStream {
    let info_ = crate::path::info_(&derive.kraft_reflect_path);
    let ident = derive.ident;
    let ident_str = ident.to_string();

    let (base_path, base_name) = match &derive.attrs.type_path {
        Some(lit) => {
            let name = derive.attrs.custom_type_name().unwrap_or_else(|| ident_str.clone());
            (quote! { #lit }, quote! { #name })
        }
        None => (
            quote! { ::core::concat!(::core::module_path!(), "::", #ident_str) },
            quote! { #ident_str },
        ),
    };

    let (type_path, type_name, inline_flag) = if derive.is_generic() {
        (
            static_path_cell(derive, base_path, quote! { type_path }),
            static_path_cell(derive, base_name, quote! { type_name }),
            TokenStream::new(),
        )
    } else {
        (base_path, base_name, quote! { #[inline] })
    };

    let (impl_generics, ty_generics, _) = derive.generics.split_for_impl();
    let where_clause = derive.where_clause_with(
        derive.type_params.iter().map(|param| quote! { #param: #info_::TypePath }),
    );

    quote! {
        impl #impl_generics #info_::TypePath for #ident #ty_generics #where_clause {
            #inline_flag
            fn type_path() -> &'static str {
                #type_path
            }

            #inline_flag
            fn type_name() -> &'static str {
                #type_name
            }
        }
    }
}
