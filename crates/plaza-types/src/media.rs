use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// The kind of media attached to an event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Image => write!(f, "image"),
            Self::Video => write!(f, "video"),
        }
    }
}

/// Opaque handle to a media blob persisted by the preprocessing pipeline.
///
/// Rendered as `media:<uuid>` wherever a URL-like string is expected.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MediaHandle(uuid::Uuid);

impl MediaHandle {
    /// Issue a fresh handle.
    pub fn new() -> Self {
        Self(uuid::Uuid::now_v7())
    }

    pub fn from_uuid(uuid: uuid::Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &uuid::Uuid {
        &self.0
    }

    /// URL-like rendering (`media:<uuid>`).
    pub fn to_url(self) -> String {
        format!("media:{}", self.0)
    }
}

impl Default for MediaHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for MediaHandle {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.strip_prefix("media:").unwrap_or(s);
        let uuid = uuid::Uuid::parse_str(raw)
            .map_err(|e| TypeError::InvalidHandle(e.to_string()))?;
        Ok(Self(uuid))
    }
}

impl fmt::Debug for MediaHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MediaHandle({})", self.0)
    }
}

impl fmt::Display for MediaHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "media:{}", self.0)
    }
}

/// A media attachment carried by an event.
///
/// `url` is whatever reference the preprocessing pipeline resolved: an
/// external URL, a `data:` reference, or a `media:<uuid>` handle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Media {
    pub kind: MediaKind,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overlay_text: Option<String>,
}

impl Media {
    pub fn new(kind: MediaKind, url: impl Into<String>) -> Self {
        Self {
            kind,
            url: url.into(),
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
