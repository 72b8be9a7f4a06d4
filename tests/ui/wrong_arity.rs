use property_bind::prelude::*;

#[derive(PropertyBind)]
#[property_bind(items)]
struct Shelf {
    items: ObservableVec<u8>,
}

fn main() {
    let shelf = Shelf { items: ObservableVec::new() };
    shelf.items.push(1);
}
