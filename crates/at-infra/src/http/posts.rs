use async_trait::async_trait;
use at_core::ports::{ApiError, PostsPort};
use at_core::post::Post;

use super::client::ApiClient;
use super::Method;

#[async_trait]
impl PostsPort for ApiClient {
    async fn my_posts(&self) -> Result<Vec<Post>, ApiError> {
        self.request_json("/api/posts/mine", None, Method::GET).await
    }
}
