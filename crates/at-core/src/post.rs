use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::PostId;

/// A post authored by the signed-in user (`/api/posts/mine`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    #[serde(alias = "_id")]
    pub id: PostId,
    #[serde(default)]
    pub caption: String,
    #[serde(default)]
    pub media_url: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub likes: u64,
}
