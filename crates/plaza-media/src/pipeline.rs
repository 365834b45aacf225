use std::time::Duration;

use async_trait::async_trait;

use plaza_types::Media;

use crate::error::MediaResult;
use crate::upload::MediaUpload;

/// Longest video an event may carry; longer uploads are trimmed to this.
pub const MAX_VIDEO_DURATION: Duration = Duration::from_secs(10);

/// The media-preprocessing boundary.
///
/// `ingest` persists the blob and resolves the reference an event will
/// carry. It may re-sample or trim before resolving; the caller must not
/// commit the event until it does. Implementations must be shareable
/// across the engine and any background ingestion (`Send + Sync`).
#[async_trait]
pub trait MediaPipeline: Send + Sync {
    /// Persist an upload and resolve its media reference.
    async fn ingest(&self, upload: MediaUpload) -> MediaResult<Media>;
}
