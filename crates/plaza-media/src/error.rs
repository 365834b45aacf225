use plaza_types::MediaHandle;

/// Errors produced by media ingestion.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MediaError {
    #[error("upload contains no data")]
    EmptyUpload,

    #[error("no media stored under {0}")]
    NotFound(MediaHandle),
}

/// Result alias for media operations.
pub type MediaResult<T> = Result<T, MediaError>;
