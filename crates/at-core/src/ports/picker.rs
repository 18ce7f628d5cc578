use std::path::PathBuf;

use async_trait::async_trait;

use crate::ports::PickerError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Document,
    Video,
}

/// Native file, image and video picker.
#[async_trait]
pub trait MediaPickerPort: Send + Sync {
    async fn pick(&self, kind: MediaKind) -> Result<PathBuf, PickerError>;
}
