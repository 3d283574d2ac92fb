use thiserror::Error;

/// Errors emitted while reading content files.
#[derive(Debug, Error)]
pub(crate) enum ContentError {
    #[error("content IO failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("content JSON failed: {0}")]
    Json(#[from] serde_json::Error),
}
