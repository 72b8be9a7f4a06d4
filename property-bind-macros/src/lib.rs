//! Derives for parent/child back-reference wiring.
//!
//! `#[derive(PropertyBind)]` reads repeatable `#[property_bind(collection, back_reference)]`
//! attributes and generates `new() -> Arc<Self>` that creates each bound collection, subscribes
//! to its notifications and points the back-reference of every added element at the parent.
//! `#[derive(PropertyBindSingle)]` takes one binding and leaves the collection to `Default`.
use proc_macro::TokenStream;

mod codegen;

use codegen::Generation;

/// Multi-binding derive. Bound fields are initialised by the generated constructor; every
/// other field comes from `Default`.
///
/// ```ignore
/// #[derive(PropertyBind)]
/// #[property_bind(posts, blog)]
/// #[property_bind(drafts, blog)]
/// struct Blog {
///     posts: ObservableVec<Arc<Post>>,
///     drafts: Box<dyn ObservableCollection<Arc<Post>>>,
/// }
/// ```
#[proc_macro_derive(PropertyBind, attributes(property_bind))]
pub fn derive_property_bind(input: TokenStream) -> TokenStream {
    codegen::entrypoint(input, Generation::Multi)
}

/// Single-binding derive. The owner must implement `Default`, which supplies the collection.
#[proc_macro_derive(PropertyBindSingle, attributes(property_bind))]
pub fn derive_property_bind_single(input: TokenStream) -> TokenStream {
    codegen::entrypoint(input, Generation::Single)
}
