use std::collections::HashMap;
use std::sync::RwLock;
use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use plaza_types::{Media, MediaHandle, MediaKind};

use crate::error::{MediaError, MediaResult};
use crate::pipeline::{MediaPipeline, MAX_VIDEO_DURATION};
use crate::upload::MediaUpload;

/// A blob the pipeline has persisted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoredMedia {
    pub kind: MediaKind,
    pub content_type: String,
    pub bytes: Vec<u8>,
    /// Playback length after trimming, for videos.
    pub duration: Option<Duration>,
}

/// In-process media pipeline.
///
/// Blobs are held in memory behind a `RwLock`, keyed by fresh
/// [`MediaHandle`]s; the resolved reference is the handle's
/// `media:<uuid>` URL. Videos longer than [`MAX_VIDEO_DURATION`] are
/// trimmed by truncating their recorded playback length -- a stand-in for
/// the re-encoding a production pipeline would do behind the same trait.
pub struct LocalMediaPipeline {
    blobs: RwLock<HashMap<MediaHandle, StoredMedia>>,
}

impl LocalMediaPipeline {
    /// Create an empty pipeline.
    pub fn new() -> Self {
        Self {
            blobs: RwLock::new(HashMap::new()),
        }
    }

    /// Number of persisted blobs.
    pub fn len(&self) -> usize {
        self.blobs.read().expect("lock poisoned").len()
    }

    /// Returns `true` if nothing has been ingested.
    pub fn is_empty(&self) -> bool {
        self.blobs.read().expect("lock poisoned").is_empty()
    }

    /// Fetch a persisted blob by handle.
    pub fn fetch(&self, handle: MediaHandle) -> MediaResult<StoredMedia> {
        self.blobs
            .read()
            .expect("lock poisoned")
            .get(&handle)
            .cloned()
            .ok_or(MediaError::NotFound(handle))
    }
}

impl Default for LocalMediaPipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MediaPipeline for LocalMediaPipeline {
    async fn ingest(&self, upload: MediaUpload) -> MediaResult<Media> {
        if upload.bytes.is_empty() {
            return Err(MediaError::EmptyUpload);
        }

        let duration = match (upload.kind, upload.duration) {
            (MediaKind::Video, Some(d)) if d > MAX_VIDEO_DURATION => {
                debug!(original_secs = d.as_secs(), "trimming long video");
                Some(MAX_VIDEO_DURATION)
            }
            (_, d) => d,
        };

        let handle = MediaHandle::new();
        let stored = StoredMedia {
            kind: upload.kind,
            content_type: upload.content_type,
            bytes: upload.bytes,
            duration,
        };
        self.blobs
            .write()
            .expect("lock poisoned")
            .insert(handle, stored);

        debug!(%handle, kind = %upload.kind, "media ingested");

        let mut media = Media::new(upload.kind, handle.to_url());
        if let Some(text) = upload.overlay_text {
            media = media.with_overlay(text);
        }
        Ok(media)
    }
}

impl std::fmt::Debug for LocalMediaPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocalMediaPipeline")
            .field("blob_count", &self.len())
            .finish()
    }
}
