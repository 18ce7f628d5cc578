use thiserror::Error;

/// Errors produced by the backend API client.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Non-2xx response. `message` is the server's `error` field or the status text.
    #[error("{message}")]
    Server { status: u16, message: String },

    #[error("network error: {0}")]
    Network(String),

    #[error("unexpected response: {0}")]
    Decode(String),

    #[error("invalid backend url: {0}")]
    InvalidBaseUrl(String),

    #[error("local file error: {0}")]
    Io(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Server { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage io failed: {0}")]
    Io(String),

    #[error("storage data corrupt: {0}")]
    Corrupt(String),
}

/// Native picker outcome other than a picked file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PickerError {
    /// User dismissed the picker. Not an error from the user's point of view.
    #[error("picker cancelled")]
    Cancelled,

    #[error("permission denied: {0}")]
    PermissionDenied(String),

    #[error("picker failed: {0}")]
    Failed(String),
}
