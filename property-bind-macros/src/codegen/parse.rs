use proc_macro2::Span;
use syn::parse::{Parse, ParseStream};
use syn::punctuated::Punctuated;
use syn::spanned::Spanned;
use syn::{Attribute, Ident, LitStr, Token};

use super::msgs::{ERR_ARG_KIND, ERR_ARITY, ERR_UNKNOWN_OPTION};

pub const ATTR_NAME: &str = "property_bind";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Generation {
    Multi,
    Single,
}

/// One `#[property_bind(collection, back_reference)]` attachment, names taken positionally.
/// Names are kept verbatim; whether they name anything is decided during resolution.
#[derive(Clone, Debug)]
pub struct BindingDeclaration {
    pub collection: String,
    pub back_reference: String,
    pub attr_span: Span,
    /// Span of the collection argument, where skip warnings point.
    pub name_span: Span,
}

#[derive(Default)]
pub struct Extracted {
    pub declarations: Vec<BindingDeclaration>,
    pub crate_path: Option<syn::Path>,
}

enum BindArg {
    Name(String, Span),
    Crate(syn::Path),
}

impl Parse for BindArg {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        if input.peek(Token![crate]) && input.peek2(Token![=]) {
            input.parse::<Token![crate]>()?;
            input.parse::<Token![=]>()?;
            let lit: LitStr = input.parse()?;
            return Ok(BindArg::Crate(lit.parse()?));
        }
        if input.peek(LitStr) {
            let lit: LitStr = input.parse()?;
            return Ok(BindArg::Name(lit.value(), lit.span()));
        }
        if input.peek(Ident) {
            let ident: Ident = input.parse()?;
            if input.peek(Token![=]) {
                return Err(syn::Error::new(ident.span(), ERR_UNKNOWN_OPTION));
            }
            return Ok(BindArg::Name(ident.to_string(), ident.span()));
        }
        Err(input.error(ERR_ARG_KIND))
    }
}

fn is_bind_attr(a: &Attribute) -> bool {
    a.path().is_ident(ATTR_NAME)
}

/// Reads every binding attribute in declaration order. No emptiness checks happen here.
pub fn extract(attrs: &[Attribute]) -> syn::Result<Extracted> {
    let mut out = Extracted::default();
    for attr in attrs.iter().filter(|a| is_bind_attr(a)) {
        let args = attr.parse_args_with(Punctuated::<BindArg, Token![,]>::parse_terminated)?;
        let mut names = Vec::new();
        for arg in args {
            match arg {
                BindArg::Name(n, span) => names.push((n, span)),
                BindArg::Crate(p) => out.crate_path = Some(p),
            }
        }
        match names.as_slice() {
            [] => {} // option-only attribute
            [(collection, name_span), (back_reference, _)] => {
                out.declarations.push(BindingDeclaration {
                    collection: collection.clone(),
                    back_reference: back_reference.clone(),
                    attr_span: attr.span(),
                    name_span: *name_span,
                });
            }
            _ => return Err(syn::Error::new_spanned(attr, ERR_ARITY)),
        }
    }
    Ok(out)
}
