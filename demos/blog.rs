//! Blog/post wiring: posts added to a blog point back at it.

use std::sync::Arc;

use property_bind::prelude::*;

#[derive(PropertyBind)]
#[property_bind(posts, blog)]
#[property_bind(drafts, blog)]
struct Blog {
    title: String,
    posts: ObservableVec<Arc<Post>>,
    drafts: Box<dyn ObservableCollection<Arc<Post>>>,
}

#[derive(Default)]
struct Post {
    title: String,
    blog: ParentRef<Blog>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    let blog = Blog::new();
    let post = Arc::new(Post {
        title: "hello".into(),
        ..Default::default()
    });
    let draft = Arc::new(Post::default());

    blog.posts.push(post.clone());
    blog.drafts.push(draft.clone());

    let owner = post
        .blog
        .get()
        .ok_or_else(|| anyhow::anyhow!("post was not bound to its blog"))?;
    tracing::info!(target = "demo.blog", post = %post.title, blog_title = %owner.title, bound = draft.blog.points_to(&blog));
    println!("{}", serde_json::to_string_pretty(&property_bind::registry::to_json())?);
    Ok(())
}
