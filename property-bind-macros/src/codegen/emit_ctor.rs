use proc_macro2::TokenStream;
use quote::quote;

use super::analyze::{Member, ResolvedBinding};
use super::emit::{create_fn_ident, subscribe_stmt};

/// Multi generation: every bound field comes from its initializer, every other field from `Default`.
pub fn multi_ctor(members: &[Member], bindings: &[ResolvedBinding]) -> TokenStream {
    let inits = members.iter().map(|m| {
        let field = &m.ident;
        if bindings.iter().any(|b| b.field == m.ident) {
            let create = create_fn_ident(field);
            quote! { #field: Self::#create(__owner) }
        } else {
            quote! { #field: ::core::default::Default::default() }
        }
    });
    quote! {
        pub fn new() -> ::std::sync::Arc<Self> {
            ::std::sync::Arc::new_cyclic(|__owner: &::std::sync::Weak<Self>| Self {
                #( #inits, )*
            })
        }
    }
}

/// Single generation: the caller's `Default` supplies the collection, the constructor only subscribes.
/// Without a resolved binding the constructor still exists but wires nothing.
pub fn single_ctor(binding: Option<&ResolvedBinding>, identity: &str) -> TokenStream {
    match binding {
        Some(b) => {
            let field = &b.field;
            let sub = subscribe_stmt(&quote! { &__this.#field }, b, identity);
            quote! {
                pub fn new() -> ::std::sync::Arc<Self> {
                    ::std::sync::Arc::new_cyclic(|__owner: &::std::sync::Weak<Self>| {
                        let __this = <Self as ::core::default::Default>::default();
                        #sub
                        __this
                    })
                }
            }
        }
        None => quote! {
            pub fn new() -> ::std::sync::Arc<Self> {
                ::std::sync::Arc::new(<Self as ::core::default::Default>::default())
            }
        },
    }
}
