use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::{ClassField, ReflectDerive, ReflectShape};

/// The JSON-facing name of a field, without the raw identifier prefix.
fn field_name(field: &ClassField) -> String {
    let name = field.ident.to_string();
    match name.strip_prefix("r#") {
        Some(stripped) => stripped.to_owned(),
        None => name,
    }
}

fn type_ref_tokens(info_: &TokenStream, field: &ClassField) -> TokenStream {
    match field.variable {
        Some(param) => {
            let param = param.to_string();
            quote! { #info_::TypeRef::Variable(#param) }
        }
        None => {
            let ty = field.ty;
            quote! { #info_::TypeRef::of::<#ty>() }
        }
    }
}

fn field_info_tokens(info_: &TokenStream, field: &ClassField) -> TokenStream {
    let name = field_name(field);
    let ident = field.ident;
    let type_ref = type_ref_tokens(info_, field);

    let mut tokens = quote! {
        #info_::FieldInfo::from_ref(
            #name,
            #type_ref,
            |__owner| {
                __owner
                    .downcast_ref::<Self>()
                    .map(|__this| &__this.#ident as &dyn ::core::any::Any)
            },
        )
    };

    if field.attrs.transient.is_some() {
        tokens.extend(quote! { .with_transient() });
    }

    if let Some(rename) = &field.attrs.rename {
        let alternate = field.attrs.alternate.iter().flatten();
        tokens.extend(quote! {
            .with_serialized_name(
                #info_::SerializedName::new(#rename).with_alternate(&[#(#alternate),*])
            )
        });
    }

    tokens
}

fn param_info_tokens(info_: &TokenStream, field: &ClassField) -> TokenStream {
    let name = field_name(field);
    let type_ref = type_ref_tokens(info_, field);

    let optional = field.attrs.default.as_ref().map(|_| quote! { .with_optional() });

    quote! {
        #info_::ParamInfo::from_ref(::core::option::Option::Some(#name), #type_ref) #optional
    }
}

/// The body of the constructor.
///
/// Parameters are bound in declaration order, so that `default` expressions
/// can refer to earlier fields. Computed fields are bound last.
fn invoke_tokens(fields: &[ClassField]) -> TokenStream {
    let mut bindings = Vec::with_capacity(fields.len());
    let mut computed = Vec::new();

    let mut index = 0_usize;
    for field in fields {
        let ident = field.ident;
        let ty = field.ty;
        match (&field.attrs.computed, &field.attrs.default) {
            (Some(expr), _) => computed.push(quote! { let #ident: #ty = #expr; }),
            (None, Some(expr)) => {
                bindings.push(quote! {
                    let #ident: #ty = __args.take_or_else::<#ty>(#index, || #expr)?;
                });
                index += 1;
            }
            (None, None) => {
                bindings.push(quote! {
                    let #ident: #ty = __args.take::<#ty>(#index)?;
                });
                index += 1;
            }
        }
    }

    let idents = fields.iter().map(|field| field.ident);
    let args = if index == 0 { quote! { _ } } else { quote! { __args } };

    quote! {
        |#args| {
            #(#bindings)*
            #(#computed)*
            let __value: ::std::boxed::Box<dyn ::core::any::Any> =
                ::std::boxed::Box::new(Self { #(#idents),* });
            ::core::result::Result::Ok(__value)
        }
    }
}

/// Generate the `TypeInfo` expression of the derived type.
pub(crate) fn get_class_info_tokens(derive: &ReflectDerive) -> TokenStream {
    let kraft_reflect_path = &derive.kraft_reflect_path;
    let info_ = crate::path::info_(kraft_reflect_path);

    let class = match &derive.shape {
        ReflectShape::Serde { is_enum } => {
            let codec_ = crate::path::serde_codec_(kraft_reflect_path);
            let flags = is_enum.then(|| quote! { .with_flags(#info_::ClassFlags::ENUM) });
            quote! {
                #info_::ClassInfo::new::<Self>(&[])
                    #flags
                    .with_codec(#codec_::of::<Self>())
            }
        }
        ReflectShape::Unit => quote! {
            #info_::ClassInfo::new::<Self>(&[])
                .with_flags(#info_::ClassFlags::DATA)
                .with_constructor(#info_::ConstructorInfo::new(&[], |_| {
                    let __value: ::std::boxed::Box<dyn ::core::any::Any> =
                        ::std::boxed::Box::new(Self);
                    ::core::result::Result::Ok(__value)
                }))
        },
        ReflectShape::Named(fields) => {
            let field_infos = fields.iter().map(|field| field_info_tokens(&info_, field));
            let param_infos = fields
                .iter()
                .filter(|field| field.is_param())
                .map(|field| param_info_tokens(&info_, field));
            let invoke = invoke_tokens(fields);

            quote! {
                #info_::ClassInfo::new::<Self>(&[#(#field_infos),*])
                    .with_flags(#info_::ClassFlags::DATA)
                    .with_constructor(#info_::ConstructorInfo::new(&[#(#param_infos),*], #invoke))
            }
        }
    };

    let generics = derive.is_generic().then(|| {
        let params = derive.type_params.iter().map(|param| {
            let name = param.to_string();
            quote! { #info_::TypeParamInfo::new::<#param>(#name) }
        });
        quote! { .with_generics(#info_::Generics::from([#(#params),*])) }
    });

    quote! {
        #info_::TypeInfo::Class(#class #generics)
    }
}
