#![deny(deprecated)]

use std::sync::Arc;

use property_bind::prelude::*;

#[derive(PropertyBind)]
#[property_bind(missing, owner)]
#[property_bind(items, owner)]
struct Shelf {
    items: ObservableVec<Arc<Book>>,
}

#[derive(Default)]
struct Book {
    owner: ParentRef<Shelf>,
}

fn main() {
    let shelf = Shelf::new();
    let book = Arc::new(Book::default());
    shelf.items.push(book.clone());
    assert!(book.owner.points_to(&shelf));
}
