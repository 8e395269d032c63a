use proc_macro2::Span;
use syn::meta::ParseNestedMeta;
use syn::{Attribute, LitStr};

use crate::REFLECT_ATTRIBUTE_NAME;

/// Type level `#[reflect(...)]` attributes.
#[derive(Default)]
pub(crate) struct TypeAttributes {
    /// `type_path = "a::b::C"`
    pub type_path: Option<LitStr>,
    /// `auto_register`
    pub auto_register: Option<Span>,
    /// `serde`
    pub serde: Option<Span>,
}

impl TypeAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();
        for attr in attrs {
            if attr.path().is_ident(REFLECT_ATTRIBUTE_NAME) {
                attr.parse_nested_meta(|meta| this.parse_meta(meta))?;
            }
        }
        Ok(this)
    }

    fn parse_meta(&mut self, meta: ParseNestedMeta) -> syn::Result<()> {
        let span = meta.path.get_ident().map_or_else(Span::call_site, |ident| ident.span());

        if meta.path.is_ident("type_path") {
            let lit: LitStr = meta.value()?.parse()?;
            let value = lit.value();
            if value.is_empty() || value.starts_with("::") || value.ends_with("::") {
                return Err(syn::Error::new(
                    lit.span(),
                    "expected a path like `my_crate::foo::Foo`, without a leading `::`",
                ));
            }
            set_once(&mut self.type_path, lit, span, "type_path")
        } else if meta.path.is_ident("auto_register") {
            set_once(&mut self.auto_register, span, span, "auto_register")
        } else if meta.path.is_ident("serde") {
            set_once(&mut self.serde, span, span, "serde")
        } else {
            Err(meta.error(
                "unknown type attribute, expected `type_path`, `auto_register` or `serde`",
            ))
        }
    }

    /// Returns the last segment of the custom type path.
    pub fn custom_type_name(&self) -> Option<String> {
        let value = self.type_path.as_ref()?.value();
        value.rsplit("::").next().map(str::to_owned)
    }
}

/// Sets an attribute slot, rejecting duplicates.
pub(crate) fn set_once<T>(slot: &mut Option<T>, value: T, span: Span, name: &str) -> syn::Result<()> {
    if slot.is_some() {
        return Err(syn::Error::new(span, format!("duplicate `{name}` attribute")));
    }
    *slot = Some(value);
    Ok(())
}
