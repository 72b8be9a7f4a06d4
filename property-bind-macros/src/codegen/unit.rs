use proc_macro2::TokenStream;
use quote::{quote, ToTokens};
use syn::{Generics, Ident};

/// Accepts finished units, one per deriving type, named by the owner's identity.
/// Acceptance is unconditional.
pub trait EmissionSink {
    fn add_source(&mut self, identity: &str, tokens: TokenStream);
}

/// Sink used by the derive entry points: concatenates unit tokens into the macro output.
#[derive(Default)]
pub struct TokenSink {
    out: TokenStream,
}

impl TokenSink {
    pub fn into_tokens(self) -> TokenStream {
        self.out
    }
}

impl EmissionSink for TokenSink {
    // rustc places the output next to the deriving type, so the name is not needed here
    fn add_source(&mut self, _identity: &str, tokens: TokenStream) {
        self.out.extend(tokens);
    }
}

fn is_word(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '\''
}

/// Source-like text for a type, without the token spacing `to_string` puts everywhere.
pub fn type_text<T: ToTokens>(t: &T) -> String {
    let raw = t.to_token_stream().to_string();
    let mut out = String::with_capacity(raw.len());
    for tok in raw.split_whitespace() {
        // a lone `'` belongs to the lifetime name that follows it
        let joins = out.chars().last().is_some_and(|c| is_word(c) && c != '\'')
            && tok.chars().next().is_some_and(is_word);
        if joins || out.ends_with(',') {
            out.push(' ');
        }
        out.push_str(tok);
    }
    out
}

/// Name for a unit: the owner with its generic parameters, brackets neutralised.
/// `Container<T, U>` becomes `Container_T_U_`. Unique within the owner's module; generated code
/// prefixes it with `module_path!()` wherever it is recorded at runtime.
pub fn output_identity(ident: &Ident, generics: &Generics) -> String {
    let (_, ty_generics, _) = generics.split_for_impl();
    type_text(&quote!(#ident #ty_generics))
        .replace(", ", "_")
        .replace(|c| c == '<' || c == '>', "_")
        .replace('\'', "")
}

/// Wraps a unit body in its own anonymous scope with the runtime imports the fragments use.
pub fn wrap(krate: &TokenStream, body: TokenStream) -> TokenStream {
    quote! {
        #[doc(hidden)]
        #[allow(non_snake_case, non_upper_case_globals, unused_imports, clippy::all)]
        const _: () = {
            use #krate::{
                BackReference as __BackReference,
                ChangeAction as __ChangeAction,
                CollectionChanged as __CollectionChanged,
                ObservableCollection as __ObservableCollection,
                ObservableVec as __ObservableVec,
            };
            use #krate::registry as __registry;
            use #krate::__private::{inventory as __inventory, tracing as __tracing};

            #body
        };
    }
}

pub fn publish(sink: &mut dyn EmissionSink, identity: &str, tokens: TokenStream) {
    sink.add_source(identity, tokens);
}
