//! Media preprocessing for the Plaza feed engine.
//!
//! Event creation hands a raw [`MediaUpload`] to a [`MediaPipeline`], which
//! persists the blob and resolves a [`Media`](plaza_types::Media) reference.
//! The pipeline is asynchronous: an event is only committed once ingestion
//! resolves, and an upload whose pipeline never resolves is simply never
//! committed.
//!
//! Videos longer than [`MAX_VIDEO_DURATION`] are trimmed best-effort to
//! that length during ingestion. Raw bytes (profile pictures) are turned
//! into `data:` references with [`data_reference`].
//!
//! [`LocalMediaPipeline`] is the in-process reference backend; a real
//! deployment would put transcoding and blob storage behind the same trait.

pub mod encode;
pub mod error;
pub mod local;
pub mod pipeline;
pub mod upload;

pub use encode::data_reference;
pub use error::{MediaError, MediaResult};
pub use local::{LocalMediaPipeline, StoredMedia};
pub use pipeline::{MediaPipeline, MAX_VIDEO_DURATION};
pub use upload::MediaUpload;
