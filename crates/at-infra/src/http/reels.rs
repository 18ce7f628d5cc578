use async_trait::async_trait;
use at_core::comments::CommentNode;
use at_core::ids::ReelId;
use at_core::ports::{ApiError, ReelsPort};

use super::client::ApiClient;
use super::Method;

#[async_trait]
impl ReelsPort for ApiClient {
    async fn reel_comments(&self, reel_id: &ReelId) -> Result<Vec<CommentNode>, ApiError> {
        let path = format!("/api/reels/{reel_id}/comments");
        self.request_json(&path, None, Method::GET).await
    }
}
