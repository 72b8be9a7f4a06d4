mod analyze;
mod crate_path;
mod emit;
mod emit_ctor;
mod msgs;
mod parse;
mod unit;

use proc_macro2::TokenStream;
use quote::quote;
use syn::{parse_quote, DeriveInput, Generics};

use analyze::{members_of, resolve, ResolvedBinding};
use emit::{create_fn, group_by_field, registrations, skipped_marker};
use emit_ctor::{multi_ctor, single_ctor};
use msgs::ERR_SINGLE_REPEATED;
use unit::{output_identity, publish, wrap, EmissionSink, TokenSink};

pub use parse::Generation;

pub fn entrypoint(input: proc_macro::TokenStream, generation: Generation) -> proc_macro::TokenStream {
    let item = match syn::parse::<DeriveInput>(input) {
        Ok(item) => item,
        Err(e) => return e.to_compile_error().into(),
    };
    let mut sink = TokenSink::default();
    match expand(&item, generation, &mut sink) {
        Ok(()) => sink.into_tokens().into(),
        Err(e) => e.to_compile_error().into(),
    }
}

// Generated impls capture `Weak<Self>` in `Send + Sync + 'static` handlers.
fn handler_bounds(generics: &Generics, bindings: &[ResolvedBinding]) -> Generics {
    let mut g = generics.clone();
    if g.params.is_empty() {
        return g;
    }
    let wc = g.make_where_clause();
    wc.predicates
        .push(parse_quote!(Self: ::core::marker::Send + ::core::marker::Sync + 'static));
    for b in bindings {
        let elem = &b.element;
        wc.predicates
            .push(parse_quote!(#elem: ::core::marker::Send + ::core::marker::Sync + 'static));
    }
    g
}

/// Extract -> resolve -> synthesize -> publish for one deriving type.
/// Pure: identical input yields identical tokens.
pub(crate) fn expand(
    item: &DeriveInput,
    generation: Generation,
    sink: &mut dyn EmissionSink,
) -> syn::Result<()> {
    let members = members_of(item)?;
    let mut extracted = parse::extract(&item.attrs)?;
    let mut compile_errors = TokenStream::new();
    if generation == Generation::Single && extracted.declarations.len() > 1 {
        for extra in &extracted.declarations[1..] {
            compile_errors.extend(syn::Error::new(extra.attr_span, ERR_SINGLE_REPEATED).to_compile_error());
        }
        extracted.declarations.truncate(1);
    }

    let identity = output_identity(&item.ident, &item.generics);
    let krate = crate_path::resolve(extracted.crate_path.as_ref());

    let mut resolved = Vec::new();
    let mut skipped = TokenStream::new();
    for (idx, decl) in extracted.declarations.iter().enumerate() {
        match resolve(&members, decl) {
            Ok(b) => resolved.push(b),
            Err(why) => skipped.extend(skipped_marker(idx, decl, why, &identity)),
        }
    }

    let ident = &item.ident;
    let generics = handler_bounds(&item.generics, &resolved);
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();
    let members_impl = match generation {
        Generation::Multi => {
            let ctor = multi_ctor(&members, &resolved);
            let creates = group_by_field(&resolved)
                .into_iter()
                .map(|g| create_fn(&g, &identity));
            quote! { #ctor #( #creates )* }
        }
        Generation::Single => single_ctor(resolved.first(), &identity),
    };
    let regs = registrations(
        ident,
        !item.generics.params.is_empty(),
        &resolved,
        generation,
        &identity,
    );
    let body = quote! {
        impl #impl_generics #ident #ty_generics #where_clause {
            #members_impl
        }
        #regs
        #skipped
    };
    let mut tokens = wrap(&krate, body);
    tokens.extend(compile_errors);
    publish(sink, &identity, tokens);
    Ok(())
}
