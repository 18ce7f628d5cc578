use std::sync::Arc;

use at_core::ports::{ApiError, PostsPort};
use at_core::post::Post;

pub struct ListMyPosts {
    posts: Arc<dyn PostsPort>,
}

impl ListMyPosts {
    pub fn new(posts: Arc<dyn PostsPort>) -> Self {
        Self { posts }
    }

    /// Posts of the signed-in user, newest first.
    pub async fn execute(&self) -> Result<Vec<Post>, ApiError> {
        let mut posts = self.posts.my_posts().await?;
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(posts)
    }
}
