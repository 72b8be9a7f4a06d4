use std::sync::Arc;

use property_bind::prelude::*;

#[derive(PropertyBind)]
#[property_bind(posts, blog)]
#[property_bind("drafts", "blog")]
struct Blog {
    posts: ObservableVec<Arc<Post>>,
    drafts: Box<dyn ObservableCollection<Arc<Post>>>,
}

#[derive(Default)]
struct Post {
    blog: ParentRef<Blog>,
}

fn main() {
    let blog = Blog::new();
    let post = Arc::new(Post::default());
    blog.posts.push(post.clone());
    blog.drafts.push(post.clone());
    assert!(post.blog.points_to(&blog));
}
