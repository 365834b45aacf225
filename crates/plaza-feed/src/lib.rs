//! Feed content collections for the Plaza engine.
//!
//! This crate owns the two top-level content collections -- posts and
//! events -- and the comment threads attached to their items. It provides:
//!
//! - [`FeedItem`] -- one feed entry; an event is an entry with media attached
//! - [`Comment`] -- a reactable text reply owned by exactly one item
//! - [`FeedCollection`] -- one ordered collection with monotonic id issuance
//! - [`FeedStore`] -- the post and event collections behind one surface,
//!   addressed by [`ItemKind`]
//!
//! # Ownership
//!
//! Items own their comments exclusively; deleting an item drops its whole
//! thread. Nothing is shared by reference across parents and comments never
//! move between parents.
//!
//! # Ordering
//!
//! Collections are most-recent-first: creation prepends. Reactions and
//! comment edits never reorder a collection; the only reordering operation
//! is the explicit [`FeedStore::move_to_back`].

pub mod collection;
pub mod comment;
pub mod error;
pub mod item;
pub mod store;

pub use collection::FeedCollection;
pub use comment::Comment;
pub use error::{FeedError, FeedResult};
pub use item::FeedItem;
pub use store::{FeedStore, ItemKind};
