//! High-level engine for the Plaza content feed.
//!
//! Provides a unified API over the feed collections, the follow graph, the
//! session, and snapshot persistence. This is the main entry point for
//! applications embedding Plaza: construct a [`Plaza`] over a snapshot
//! store and a media pipeline, log a user in, and drive every mutation
//! through it.
//!
//! State is rehydrated from the snapshot store exactly once, at
//! construction; every successful mutation writes the affected collection
//! back through the store before returning.

pub mod engine;
pub mod error;
pub mod snapshot;

pub use engine::Plaza;
pub use error::{EngineError, EngineResult};
pub use snapshot::{SnapshotGateway, EVENTS_KEY, POSTS_KEY, USERS_KEY};

// Re-export key types
pub use plaza_feed::{Comment, FeedItem, FeedStore, ItemKind};
pub use plaza_media::{MediaPipeline, MediaUpload};
pub use plaza_session::{Account, PreferenceKind, Preferences};
pub use plaza_store::SnapshotStore;
pub use plaza_types::{CommentId, ItemId, Media, MediaKind, ReactionKind, Username};
