use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Field, Fields, GenericParam, Generics, Ident, Type};

use super::{FieldAttributes, TypeAttributes};

// -----------------------------------------------------------------------------
// ClassField

/// A named field of a derived class.
pub(crate) struct ClassField<'a> {
    pub ident: &'a Ident,
    pub ty: &'a Type,
    pub attrs: FieldAttributes,
    /// Set when the declared type is exactly one of the type parameters.
    pub variable: Option<&'a Ident>,
}

impl<'a> ClassField<'a> {
    fn new(field: &'a Field, type_params: &[&'a Ident]) -> syn::Result<Self> {
        let ident = field
            .ident
            .as_ref()
            .ok_or_else(|| syn::Error::new_spanned(field, "expected a named field"))?;

        let variable = match &field.ty {
            Type::Path(ty) if ty.qself.is_none() => ty
                .path
                .get_ident()
                .and_then(|ident| type_params.iter().copied().find(|p| *p == ident)),
            _ => None,
        };

        Ok(Self {
            ident,
            ty: &field.ty,
            attrs: FieldAttributes::parse_attrs(&field.attrs)?,
            variable,
        })
    }

    /// Returns `true` if the field is a constructor parameter.
    #[inline]
    pub fn is_param(&self) -> bool {
        self.attrs.computed.is_none()
    }
}

// -----------------------------------------------------------------------------
// ReflectShape

pub(crate) enum ReflectShape<'a> {
    /// `struct A { .. }`
    Named(Vec<ClassField<'a>>),
    /// `struct A;`
    Unit,
    /// `#[reflect(serde)]`, the type's own serde implementation is used.
    Serde { is_enum: bool },
}

// -----------------------------------------------------------------------------
// ReflectDerive

pub(crate) struct ReflectDerive<'a> {
    pub kraft_reflect_path: syn::Path,
    pub attrs: TypeAttributes,
    pub ident: &'a Ident,
    pub generics: &'a Generics,
    pub type_params: Vec<&'a Ident>,
    pub shape: ReflectShape<'a>,
}

impl<'a> ReflectDerive<'a> {
    pub fn from_input(ast: &'a DeriveInput) -> syn::Result<Self> {
        let attrs = TypeAttributes::parse_attrs(&ast.attrs)?;

        let mut type_params = Vec::new();
        for param in &ast.generics.params {
            match param {
                GenericParam::Type(param) => type_params.push(&param.ident),
                GenericParam::Lifetime(param) => {
                    return Err(syn::Error::new_spanned(
                        param,
                        "`Reflect` cannot be derived for types with lifetime parameters",
                    ));
                }
                GenericParam::Const(param) => {
                    return Err(syn::Error::new_spanned(
                        param,
                        "`Reflect` cannot be derived for types with const parameters",
                    ));
                }
            }
        }

        let shape = match &ast.data {
            Data::Enum(_) if attrs.serde.is_some() => ReflectShape::Serde { is_enum: true },
            Data::Enum(data) => {
                return Err(syn::Error::new_spanned(
                    data.enum_token,
                    "enums are reflected through their serde implementation, add `#[reflect(serde)]`",
                ));
            }
            Data::Struct(_) if attrs.serde.is_some() => ReflectShape::Serde { is_enum: false },
            Data::Struct(data) => match &data.fields {
                Fields::Named(fields) => ReflectShape::Named(
                    fields
                        .named
                        .iter()
                        .map(|field| ClassField::new(field, &type_params))
                        .collect::<syn::Result<_>>()?,
                ),
                Fields::Unit => ReflectShape::Unit,
                Fields::Unnamed(fields) => {
                    return Err(syn::Error::new_spanned(
                        fields,
                        "tuple structs are not supported, use named fields",
                    ));
                }
            },
            Data::Union(data) => {
                return Err(syn::Error::new_spanned(
                    data.union_token,
                    "unions are not supported",
                ));
            }
        };

        Ok(Self {
            kraft_reflect_path: crate::path::kraft_reflect(),
            attrs,
            ident: &ast.ident,
            generics: &ast.generics,
            type_params,
            shape,
        })
    }

    #[inline]
    pub fn is_generic(&self) -> bool {
        !self.type_params.is_empty()
    }

    /// Generate the where clause with additional predicates.
    ///
    /// Similar to following:
    ///
    /// ```ignore
    /// where (user predicates,)* (bounds,)*
    /// ```
    pub fn where_clause_with(&self, bounds: impl IntoIterator<Item = TokenStream>) -> TokenStream {
        let predicates = self
            .generics
            .where_clause
            .iter()
            .flat_map(|clause| clause.predicates.iter())
            .map(|predicate| quote!(#predicate))
            .chain(bounds)
            .collect::<Vec<_>>();

        if predicates.is_empty() {
            return TokenStream::new();
        }

        quote! { where #(#predicates),* }
    }
}
