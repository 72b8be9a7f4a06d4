use std::sync::Arc;

use property_bind::prelude::*;

#[derive(Default, PropertyBindSingle)]
#[property_bind(entries, journal)]
struct Journal {
    entries: ObservableVec<Entry>,
}

#[derive(Default)]
struct Entry {
    journal: ParentRef<Journal>,
}

fn main() {
    let journal: Arc<Journal> = Journal::new();
    journal.entries.push(Entry::default());
    assert!(journal.entries.read()[0].journal.points_to(&journal));
}
