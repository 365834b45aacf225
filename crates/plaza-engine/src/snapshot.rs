//! Snapshot persistence for the engine's collections.
//!
//! Three fixed slots hold the durable state, one full collection each:
//! `posts`, `events`, and `users`. A slot is rewritten wholesale after
//! every successful mutation of its collection; there is no batching and
//! no partial write. Loading happens once, before the engine serves its
//! first operation; a slot that is missing or fails to decode falls back
//! to that collection's empty default so startup never fails on bad data.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use plaza_feed::{FeedItem, FeedStore};
use plaza_session::{Account, AccountDirectory};
use plaza_store::SnapshotStore;

use crate::error::EngineResult;

/// Slot holding the ordered post collection.
pub const POSTS_KEY: &str = "posts";
/// Slot holding the ordered event collection.
pub const EVENTS_KEY: &str = "events";
/// Slot holding the account directory.
pub const USERS_KEY: &str = "users";

/// Serializes the engine's collections into the snapshot store and back.
pub struct SnapshotGateway {
    store: Arc<dyn SnapshotStore>,
}

impl SnapshotGateway {
    pub fn new(store: Arc<dyn SnapshotStore>) -> Self {
        Self { store }
    }

    /// Rehydrate everything the store holds.
    ///
    /// Runs once at engine construction. Missing slots yield empty
    /// collections; undecodable slots are logged and likewise degrade to
    /// empty rather than failing startup.
    pub fn load(&self) -> EngineResult<(FeedStore, AccountDirectory)> {
        let posts: Vec<FeedItem> = self.read_slot(POSTS_KEY)?;
        let events: Vec<FeedItem> = self.read_slot(EVENTS_KEY)?;
        let accounts: Vec<Account> = self.read_slot(USERS_KEY)?;
        Ok((
            FeedStore::from_snapshots(posts, events),
            AccountDirectory::from_accounts(accounts),
        ))
    }

    fn read_slot<T: DeserializeOwned + Default>(&self, key: &str) -> EngineResult<T> {
        let Some(bytes) = self.store.read(key)? else {
            debug!(key, "no snapshot; starting empty");
            return Ok(T::default());
        };
        match serde_json::from_slice(&bytes) {
            Ok(value) => Ok(value),
            Err(e) => {
                warn!(key, error = %e, "snapshot failed to decode; starting empty");
                Ok(T::default())
            }
        }
    }

    fn write_slot<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> EngineResult<()> {
        let bytes = serde_json::to_vec(value)?;
        self.store.write(key, &bytes)?;
        Ok(())
    }

    /// Overwrite the `posts` slot with the full collection.
    pub fn save_posts(&self, posts: &[FeedItem]) -> EngineResult<()> {
        self.write_slot(POSTS_KEY, posts)
    }

    /// Overwrite the `events` slot with the full collection.
    pub fn save_events(&self, events: &[FeedItem]) -> EngineResult<()> {
        self.write_slot(EVENTS_KEY, events)
    }

    /// Overwrite the `users` slot with the full directory.
    pub fn save_accounts(&self, directory: &AccountDirectory) -> EngineResult<()> {
        self.write_slot(USERS_KEY, directory)
    }
}

impl std::fmt::Debug for SnapshotGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SnapshotGateway").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use plaza_store::InMemorySnapshotStore;
    use plaza_types::Username;

    fn user(name: &str) -> Username {
        Username::new(name).unwrap()
    }

    #[test]
    fn load_on_an_empty_store_yields_empty_collections() {
        let gateway = SnapshotGateway::new(Arc::new(InMemorySnapshotStore::new()));
        let (feed, directory) = gateway.load().unwrap();
        assert!(feed.posts().is_empty());
        assert!(feed.events().is_empty());
        assert!(directory.is_empty());
    }

    #[test]
    fn save_and_load_roundtrip() {
        let store = Arc::new(InMemorySnapshotStore::new());
        let gateway = SnapshotGateway::new(store.clone());

        let mut feed = FeedStore::new();
        feed.create_post(user("alice"), "hello", "").unwrap();
        let mut directory = AccountDirectory::new();
        directory.register(user("alice"), "pw").unwrap();

        gateway.save_posts(feed.posts()).unwrap();
        gateway.save_events(feed.events()).unwrap();
        gateway.save_accounts(&directory).unwrap();

        let reloaded = SnapshotGateway::new(store);
        let (feed_back, directory_back) = reloaded.load().unwrap();
        assert_eq!(feed_back.posts(), feed.posts());
        assert_eq!(directory_back, directory);
    }

    #[test]
    fn corrupt_slots_degrade_to_empty() {
        let store = Arc::new(InMemorySnapshotStore::new());
        store.write(POSTS_KEY, b"{not json").unwrap();
        store.write(USERS_KEY, b"42").unwrap(); // valid JSON, wrong shape

        let gateway = SnapshotGateway::new(store);
        let (feed, directory) = gateway.load().unwrap();
        assert!(feed.posts().is_empty());
        assert!(directory.is_empty());
    }

    #[test]
    fn slots_are_overwritten_not_appended() {
        let store = Arc::new(InMemorySnapshotStore::new());
        let gateway = SnapshotGateway::new(store.clone());

        let mut feed = FeedStore::new();
        let alice = user("alice");
        let id = feed.create_post(alice.clone(), "first", "").unwrap();
        gateway.save_posts(feed.posts()).unwrap();

        feed.delete_item(plaza_feed::ItemKind::Post, id, &alice).unwrap();
        gateway.save_posts(feed.posts()).unwrap();

        let (feed_back, _) = SnapshotGateway::new(store).load().unwrap();
        assert!(feed_back.posts().is_empty());
    }
}
