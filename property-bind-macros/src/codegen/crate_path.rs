use proc_macro2::TokenStream;
use quote::quote;

/// Runtime crate path used by generated code: `::property_bind` unless overridden with
/// `#[property_bind(crate = "...")]` for renamed dependencies.
pub fn resolve(crate_path: Option<&syn::Path>) -> TokenStream {
    crate_path.map_or_else(|| quote! { ::property_bind }, |path| quote! { #path })
}
