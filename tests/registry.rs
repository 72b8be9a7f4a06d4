use std::sync::Arc;

use property_bind::prelude::*;
use property_bind::registry::{self, Generation};

#[derive(PropertyBind)]
#[property_bind(tracks, album)]
#[property_bind(bonus, album)]
struct Album {
    tracks: ObservableVec<Arc<Track>>,
    bonus: Box<dyn ObservableCollection<Arc<Track>>>,
}

#[derive(Default)]
struct Track {
    album: ParentRef<Album>,
}

#[derive(Default, PropertyBindSingle)]
#[property_bind(songs, playlist)]
struct Playlist {
    songs: ObservableVec<Arc<Song>>,
}

#[derive(Default)]
struct Song {
    playlist: ParentRef<Playlist>,
}

// Same type name in two modules.
mod shop {
    use std::sync::Arc;

    use property_bind::prelude::*;

    #[derive(PropertyBind)]
    #[property_bind(items, catalog)]
    pub struct Catalog {
        pub items: ObservableVec<Arc<Item>>,
    }

    #[derive(Default)]
    pub struct Item {
        pub catalog: ParentRef<Catalog>,
    }
}

mod archive {
    use std::sync::Arc;

    use property_bind::prelude::*;

    #[derive(PropertyBind)]
    #[property_bind(items, catalog)]
    pub struct Catalog {
        pub items: ObservableVec<Arc<Item>>,
    }

    #[derive(Default)]
    pub struct Item {
        pub catalog: ParentRef<Catalog>,
    }
}

#[test]
fn same_named_owners_in_different_modules_stay_distinct() {
    let shop = registry::for_owner::<shop::Catalog>();
    let archive = registry::for_owner::<archive::Catalog>();
    assert_eq!(shop.len(), 1);
    assert_eq!(archive.len(), 1);
    assert_eq!(shop[0].identity, "registry::shop::Catalog");
    assert_eq!(archive[0].identity, "registry::archive::Catalog");

    let identities: Vec<&str> = registry::all().iter().map(|b| b.identity).collect();
    assert_eq!(
        identities,
        vec![
            "registry::Album",
            "registry::Album",
            "registry::Playlist",
            "registry::archive::Catalog",
            "registry::shop::Catalog",
        ]
    );

    let catalog = shop::Catalog::new();
    let item = Arc::new(shop::Item::default());
    catalog.items.push(item.clone());
    assert!(item.catalog.points_to(&catalog));
}

#[test]
fn bindings_are_listed_in_declaration_order() {
    let regs = registry::for_owner::<Album>();
    let names: Vec<(&str, &str)> = regs.iter().map(|b| (b.collection, b.back_reference)).collect();
    assert_eq!(names, vec![("tracks", "album"), ("bonus", "album")]);
    assert!(regs.iter().all(|b| b.identity == "registry::Album" && b.generation == Generation::Multi));
    assert_eq!(regs[0].element, "Arc<Track>");
    assert_eq!((regs[0].ordinal, regs[1].ordinal), (0, 1));
}

#[test]
fn owners_are_kept_apart() {
    let playlist = registry::for_owner::<Playlist>();
    assert_eq!(playlist.len(), 1);
    assert_eq!(playlist[0].generation, Generation::Single);
    assert!(registry::for_owner::<Track>().is_empty());
    assert_eq!(registry::all().len(), 5);
}

#[test]
fn json_view_carries_every_binding() {
    let json = registry::to_json();
    let entries = json.as_array().expect("array");
    assert_eq!(entries.len(), 5);
    assert_eq!(entries[0]["identity"], "registry::Album");
    assert_eq!(entries[0]["collection"], "tracks");
    assert_eq!(entries[2]["identity"], "registry::Playlist");
    assert_eq!(entries[2]["generation"], "Single");
    assert!(entries[2]["owner"].as_str().is_some_and(|o| o.ends_with("Playlist")));
}

#[test]
fn registered_owners_still_wire() {
    let album = Album::new();
    let playlist = Playlist::new();
    let track = Arc::new(Track::default());
    let song = Arc::new(Song::default());
    album.bonus.push(track.clone());
    playlist.songs.push(song.clone());
    assert!(track.album.points_to(&album));
    assert!(song.playlist.points_to(&playlist));
    assert!(album.tracks.is_empty());
}
