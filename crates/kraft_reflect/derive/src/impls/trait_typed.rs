use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::{ReflectDerive, ReflectShape};

/// Generate implementation code for `Typed`
///
/// For param `type_info_tokens`, See [`get_class_info_tokens`](super::get_class_info_tokens).
///
/// Every type parameter is bounded by `Typed`. Field types are not bounded
/// individually, so recursive types do not overflow the trait solver.
pub(crate) fn impl_trait_typed(derive: &ReflectDerive, type_info_tokens: TokenStream) -> TokenStream {
    let kraft_reflect_path = &derive.kraft_reflect_path;
    let info_ = crate::path::info_(kraft_reflect_path);
    let impls_ = crate::path::impls_(kraft_reflect_path);

    let inner_cell_tokens = if derive.is_generic() {
        quote! {
            static CELL: #impls_::GenericTypeInfoCell = #impls_::GenericTypeInfoCell::new();
            CELL.get_or_insert::<Self>(|| {
                #type_info_tokens
            })
        }
    } else {
        quote! {
            static CELL: #impls_::NonGenericTypeInfoCell = #impls_::NonGenericTypeInfoCell::new();
            CELL.get_or_init(|| {
                #type_info_tokens
            })
        }
    };

    let ident = derive.ident;
    let (impl_generics, ty_generics, _) = derive.generics.split_for_impl();

    let mut bounds = derive
        .type_params
        .iter()
        .map(|param| quote! { #param: #info_::Typed })
        .collect::<Vec<_>>();

    if let ReflectShape::Serde { .. } = derive.shape {
        let serde_ = crate::path::serde_bounds_(kraft_reflect_path);
        bounds.push(quote! {
            #ident #ty_generics: #serde_::Serialize + #serde_::DeserializeOwned
        });
    }

    let where_clause = derive.where_clause_with(bounds);

    quote! {
        impl #impl_generics #info_::Typed for #ident #ty_generics #where_clause {
            fn type_info() -> &'static #info_::TypeInfo {
                #inner_cell_tokens
            }
        }
    }
}
