use std::path::Path;

use async_trait::async_trait;
use at_core::portfolio::DocumentKind;
use at_core::ports::{ApiError, MediaUploadPort};

use super::client::ApiClient;

#[async_trait]
impl MediaUploadPort for ApiClient {
    async fn upload_avatar(&self, path: &Path) -> Result<String, ApiError> {
        self.upload("/api/profile/avatar", "avatar", path, &[]).await
    }

    async fn upload_document(&self, kind: DocumentKind, path: &Path) -> Result<String, ApiError> {
        self.upload("/api/documents/upload", "file", path, &[("kind", kind.as_str())])
            .await
    }

    async fn upload_video(&self, path: &Path) -> Result<String, ApiError> {
        self.upload("/api/videos/upload", "video", path, &[]).await
    }
}
