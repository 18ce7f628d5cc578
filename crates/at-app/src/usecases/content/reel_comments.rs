use std::sync::Arc;

use tracing::debug;

use at_core::comments::{flatten_tree, normalize_comments, Comment};
use at_core::ports::{ApiError, ReelsPort};
use at_core::ReelId;

/// Comments of a reel, flattened to at most one reply level.
pub struct LoadReelComments {
    reels: Arc<dyn ReelsPort>,
}

impl LoadReelComments {
    pub fn new(reels: Arc<dyn ReelsPort>) -> Self {
        Self { reels }
    }

    pub async fn execute(&self, reel_id: &ReelId) -> Result<Vec<Comment>, ApiError> {
        let tree = self.reels.reel_comments(reel_id).await?;
        let comments = normalize_comments(flatten_tree(tree));
        debug!(reel_id = %reel_id, count = comments.len(), "reel comments loaded");
        Ok(comments)
    }
}
