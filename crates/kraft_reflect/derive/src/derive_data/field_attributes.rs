use proc_macro2::Span;
use syn::meta::ParseNestedMeta;
use syn::punctuated::Punctuated;
use syn::spanned::Spanned;
use syn::{Attribute, Expr, LitStr, Token, bracketed};

use super::type_attributes::set_once;
use crate::REFLECT_ATTRIBUTE_NAME;

/// Field level `#[reflect(...)]` attributes.
#[derive(Default)]
pub(crate) struct FieldAttributes {
    /// `rename = "name"`
    pub rename: Option<LitStr>,
    /// `alternate = ["a", "b"]`
    pub alternate: Option<Vec<LitStr>>,
    /// `transient`
    pub transient: Option<Span>,
    /// `default = expr`
    pub default: Option<Expr>,
    /// `computed = expr`
    pub computed: Option<Expr>,
}

impl FieldAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();
        for attr in attrs {
            if attr.path().is_ident(REFLECT_ATTRIBUTE_NAME) {
                attr.parse_nested_meta(|meta| this.parse_meta(meta))?;
            }
        }
        this.validity(attrs)?;
        Ok(this)
    }

    fn parse_meta(&mut self, meta: ParseNestedMeta) -> syn::Result<()> {
        let span = meta.path.get_ident().map_or_else(Span::call_site, |ident| ident.span());

        if meta.path.is_ident("rename") {
            let lit: LitStr = meta.value()?.parse()?;
            set_once(&mut self.rename, lit, span, "rename")
        } else if meta.path.is_ident("alternate") {
            let value = meta.value()?;
            let content;
            bracketed!(content in value);
            let names = Punctuated::<LitStr, Token![,]>::parse_terminated(&content)?;
            set_once(&mut self.alternate, names.into_iter().collect(), span, "alternate")
        } else if meta.path.is_ident("transient") {
            set_once(&mut self.transient, span, span, "transient")
        } else if meta.path.is_ident("default") {
            let expr: Expr = meta.value()?.parse()?;
            set_once(&mut self.default, expr, span, "default")
        } else if meta.path.is_ident("computed") {
            let expr: Expr = meta.value()?.parse()?;
            set_once(&mut self.computed, expr, span, "computed")
        } else {
            Err(meta.error(
                "unknown field attribute, expected `rename`, `alternate`, `transient`, `default` or `computed`",
            ))
        }
    }

    fn validity(&self, attrs: &[Attribute]) -> syn::Result<()> {
        let span = attrs
            .iter()
            .find(|attr| attr.path().is_ident(REFLECT_ATTRIBUTE_NAME))
            .map_or_else(Span::call_site, |attr| attr.span());

        if self.alternate.is_some() && self.rename.is_none() {
            return Err(syn::Error::new(span, "`alternate` requires `rename`"));
        }
        if self.default.is_some() && self.computed.is_some() {
            return Err(syn::Error::new(
                span,
                "`default` and `computed` cannot be used together",
            ));
        }
        Ok(())
    }
}
