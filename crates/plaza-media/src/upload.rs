use std::time::Duration;

use plaza_types::MediaKind;

/// A raw media blob handed to the pipeline for ingestion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MediaUpload {
    pub kind: MediaKind,
    pub content_type: String,
    pub bytes: Vec<u8>,
    /// Playback length, when the uploader's metadata carries one.
    /// Only meaningful for videos.
    pub duration: Option<Duration>,
    pub overlay_text: Option<String>,
}

impl MediaUpload {
    /// An image upload.
    pub fn image(content_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            kind: MediaKind::Image,
            content_type: content_type.into(),
            bytes,
            duration: None,
            overlay_text: None,
        }
    }

    /// A video upload with known playback length.
    pub fn video(content_type: impl Into<String>, bytes: Vec<u8>, duration: Duration) -> Self {
        Self {
            kind: MediaKind::Video,
            content_type: content_type.into(),
            bytes,
            duration: Some(duration),
            overlay_text: None,
        }
    }

    /// Attach an overlay caption. Blank input clears the caption.
    pub fn with_overlay(mut self, text: impl Into<String>) -> Self {
        let text = text.into();
        self.overlay_text = if text.trim().is_empty() { None } else { Some(text) };
        self
    }
}
