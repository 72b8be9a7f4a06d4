use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::Ident;

use super::analyze::{ContainerShape, ResolvedBinding, Unresolved};
use super::parse::{BindingDeclaration, Generation};
use super::unit::type_text;

pub fn create_fn_ident(field: &Ident) -> Ident {
    format_ident!("__create_{}", field)
}

/// Handler closure: only `Add` notifications with items are acted on, in notification order.
pub fn handler(b: &ResolvedBinding, identity: &str) -> TokenStream {
    let elem = &b.element;
    let bind = &b.back_reference;
    let collection = b.field.to_string();
    let owner = qualified_identity(identity);
    quote! {
        ::std::boxed::Box::new(move |__change: &__CollectionChanged<'_, #elem>| {
            if __change.action() != __ChangeAction::Add {
                return;
            }
            let ::core::option::Option::Some(__items) = __change.new_items() else {
                return;
            };
            __tracing::trace!(owner = #owner, collection = #collection, count = __items.len(), "assigning back-references");
            for __item in __items {
                __BackReference::assign(&__item.#bind, &__owner);
            }
        })
    }
}

/// Attaches one binding's handler to `target`. Expects `__owner: &Weak<Self>` in scope.
pub fn subscribe_stmt(target: &TokenStream, b: &ResolvedBinding, identity: &str) -> TokenStream {
    let elem = &b.element;
    let handler = handler(b, identity);
    quote! {
        {
            let __owner = ::std::sync::Weak::clone(__owner);
            __ObservableCollection::<#elem>::subscribe(#target, #handler);
        }
    }
}

/// Groups bindings by collection field, keeping first-declaration order, so that two
/// bindings on one field share a single initializer.
pub fn group_by_field(bindings: &[ResolvedBinding]) -> Vec<Vec<&ResolvedBinding>> {
    let mut groups: Vec<Vec<&ResolvedBinding>> = Vec::new();
    for b in bindings {
        match groups.iter_mut().find(|g| g.first().is_some_and(|f| f.field == b.field)) {
            Some(group) => group.push(b),
            None => groups.push(vec![b]),
        }
    }
    groups
}

/// `fn __create_<field>(__owner) -> <declared>`: instantiate, subscribe every binding, return.
pub fn create_fn(group: &[&ResolvedBinding], identity: &str) -> TokenStream {
    let Some((first, _)) = group.split_first() else {
        return TokenStream::new();
    };
    let name = create_fn_ident(&first.field);
    let declared = first.container.declared();
    let elem = &first.element;
    let (make, finish) = match &first.container {
        ContainerShape::Concrete(ty) => (
            quote! { <#ty as ::core::default::Default>::default() },
            quote! { __list },
        ),
        ContainerShape::Abstract { pointer, .. } => (
            quote! { __ObservableVec::<#elem>::default() },
            quote! { #pointer::new(__list) },
        ),
    };
    let target = quote! { &__list };
    let subs = group.iter().map(|b| subscribe_stmt(&target, b, identity));
    quote! {
        #[doc(hidden)]
        fn #name(__owner: &::std::sync::Weak<Self>) -> #declared {
            let __list = #make;
            #( #subs )*
            #finish
        }
    }
}

/// Module-qualified identity as a `&'static str` expression; the module path is only known to rustc.
pub fn qualified_identity(identity: &str) -> TokenStream {
    quote! { ::core::concat!(::core::module_path!(), "::", #identity) }
}

/// Warning marker for a dropped declaration: a deprecated const referenced right away.
/// The reference carries the span of the collection argument. Deprecation uses spanned
/// inside a derive expansion are not reported, a user span is.
pub fn skipped_marker(idx: usize, decl: &BindingDeclaration, why: Unresolved, owner: &str) -> TokenStream {
    let marker = format_ident!("__property_bind_skipped_{}", idx);
    let use_site = Ident::new(&marker.to_string(), decl.name_span);
    let note = format!(
        "property_bind: binding `{}` -> `{}` on `{}` was skipped: {}",
        decl.collection,
        decl.back_reference,
        owner,
        why.reason()
    );
    quote! {
        #[deprecated(note = #note)]
        const #marker: () = ();
        const _: () = #use_site;
    }
}

/// inventory submissions; generic owners have no single type name and are skipped.
pub fn registrations(
    owner: &Ident,
    generic: bool,
    bindings: &[ResolvedBinding],
    generation: Generation,
    identity: &str,
) -> TokenStream {
    if generic || bindings.is_empty() {
        return TokenStream::new();
    }
    let gen = match generation {
        Generation::Multi => quote!(Multi),
        Generation::Single => quote!(Single),
    };
    let qualified = qualified_identity(identity);
    let entries = bindings.iter().enumerate().map(|(i, b)| {
        let collection = b.field.to_string();
        let back_reference = b.back_reference.to_string();
        let element = type_text(&b.element);
        quote! {
            const _: () = {
                __inventory::submit! {
                    __registry::BindingInfo {
                        owner: __owner_type_name,
                        identity: #qualified,
                        ordinal: #i,
                        collection: #collection,
                        back_reference: #back_reference,
                        element: #element,
                        generation: __registry::Generation::#gen,
                    }
                }
            };
        }
    });
    quote! {
        fn __owner_type_name() -> &'static str {
            ::core::any::type_name::<#owner>()
        }
        #( #entries )*
    }
}
