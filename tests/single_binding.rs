use std::sync::Arc;

use property_bind::prelude::*;

#[derive(Default, PropertyBindSingle)]
#[property_bind(posts, blog)]
struct Blog {
    posts: ObservableVec<Arc<Post>>,
}

#[derive(Default)]
struct Post {
    blog: ParentRef<Blog>,
}

// Caller-provided initialisation through a hand-written Default.
#[derive(PropertyBindSingle)]
#[property_bind("entries", "journal")]
struct Journal {
    entries: Box<dyn ObservableCollection<Entry>>,
}

impl Default for Journal {
    fn default() -> Self {
        Self {
            entries: Box::new(ObservableVec::from(vec![Entry::default()])),
        }
    }
}

#[derive(Default)]
struct Entry {
    journal: ParentRef<Journal>,
}

#[derive(Default, PropertyBindSingle)]
#[property_bind(nothing_here, blog)]
struct Broken {
    posts: ObservableVec<Arc<Post>>,
}

#[test]
fn single_binding_assigns_owner() {
    let blog = Blog::new();
    let post = Arc::new(Post::default());
    assert!(!post.blog.points_to(&blog));
    blog.posts.push(post.clone());
    assert!(post.blog.points_to(&blog));
}

#[test]
fn seeded_items_are_not_bound_but_later_ones_are() {
    let journal = Journal::new();
    assert_eq!(journal.entries.len(), 1);
    let mut seeded_bound = true;
    journal.entries.for_each(&mut |e| seeded_bound = e.journal.is_set());
    assert!(!seeded_bound);

    journal.entries.push(Entry::default());
    let mut bound = Vec::new();
    journal.entries.for_each(&mut |e| bound.push(e.journal.points_to(&journal)));
    assert_eq!(bound, vec![false, true]);
}

#[test]
fn failed_single_binding_is_a_no_op() {
    let broken = Broken::new();
    let post = Arc::new(Post::default());
    broken.posts.push(post.clone());
    assert!(!post.blog.is_set());
    assert_eq!(broken.posts.subscriber_count(), 0);
}

#[test]
fn single_binding_is_registered_as_single() {
    let regs = property_bind::registry::for_owner::<Blog>();
    assert_eq!(regs.len(), 1);
    assert_eq!(regs[0].generation, property_bind::registry::Generation::Single);
    assert_eq!(regs[0].back_reference, "blog");
}
