use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use plaza_types::{CommentId, ItemId, Media, ReactionKind, Username};

use crate::collection::FeedCollection;
use crate::error::{FeedError, FeedResult};
use crate::item::FeedItem;

/// Which top-level collection an item lives in.
///
/// Post ids and event ids are independent sequences; every lookup carries
/// the kind alongside the id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Post,
    Event,
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Post => write!(f, "post"),
            Self::Event => write!(f, "event"),
        }
    }
}

/// The post and event collections behind one surface.
///
/// Both collections share the same contract; events additionally require a
/// media attachment at creation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FeedStore {
    posts: FeedCollection,
    events: FeedCollection,
}

impl FeedStore {
    /// Two empty collections.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild both collections from persisted snapshots.
    pub fn from_snapshots(posts: Vec<FeedItem>, events: Vec<FeedItem>) -> Self {
        Self {
            posts: FeedCollection::from_items(posts),
            events: FeedCollection::from_items(events),
        }
    }

    /// The posts, most recent first.
    pub fn posts(&self) -> &[FeedItem] {
        self.posts.items()
    }

    /// The events, most recent first.
    pub fn events(&self) -> &[FeedItem] {
        self.events.items()
    }

    fn collection(&self, kind: ItemKind) -> &FeedCollection {
        match kind {
            ItemKind::Post => &self.posts,
            ItemKind::Event => &self.events,
        }
    }

    fn collection_mut(&mut self, kind: ItemKind) -> &mut FeedCollection {
        match kind {
            ItemKind::Post => &mut self.posts,
            ItemKind::Event => &mut self.events,
        }
    }

    /// Look up an item by collection and id.
    pub fn get(&self, kind: ItemKind, id: ItemId) -> Option<&FeedItem> {
        self.collection(kind).get(id)
    }

    // ---- Item operations ----

    /// Prepend a fresh post.
    pub fn create_post(
        &mut self,
        author: Username,
        content: &str,
        author_avatar: &str,
    ) -> FeedResult<ItemId> {
        let id = self.posts.create(author, content, author_avatar, None)?;
        debug!(%id, "post created");
        Ok(id)
    }

    /// Prepend a fresh event. The media attachment is required.
    pub fn create_event(
        &mut self,
        author: Username,
        content: &str,
        author_avatar: &str,
        media: Option<Media>,
    ) -> FeedResult<ItemId> {
        let media = media.ok_or(FeedError::MissingMedia)?;
        let id = self
            .events
            .create(author, content, author_avatar, Some(media))?;
        debug!(%id, "event created");
        Ok(id)
    }

    /// Replace an item's text. Only its author may edit.
    pub fn edit_item(
        &mut self,
        kind: ItemKind,
        id: ItemId,
        actor: &Username,
        new_content: impl Into<String>,
    ) -> FeedResult<()> {
        self.collection_mut(kind).edit(id, actor, new_content)
    }

    /// Remove an item and its whole comment thread. Only its author may
    /// delete.
    pub fn delete_item(
        &mut self,
        kind: ItemKind,
        id: ItemId,
        actor: &Username,
    ) -> FeedResult<FeedItem> {
        let removed = self.collection_mut(kind).delete(id, actor)?;
        debug!(%kind, %id, "item deleted");
        Ok(removed)
    }

    /// Toggle a vote on an item. Any identity may vote.
    pub fn react_to_item(
        &mut self,
        kind: ItemKind,
        id: ItemId,
        reaction: ReactionKind,
        actor: &Username,
    ) -> FeedResult<()> {
        let item = self.collection_mut(kind).get_mut(id)?;
        plaza_reactions::toggle(item, reaction, actor);
        Ok(())
    }

    /// Move an item to the back of its collection.
    pub fn move_to_back(&mut self, kind: ItemKind, id: ItemId) -> FeedResult<()> {
        self.collection_mut(kind).move_to_back(id)
    }

    // ---- Comment operations ----

    /// Append a comment to an item.
    pub fn add_comment(
        &mut self,
        kind: ItemKind,
        id: ItemId,
        author: Username,
        content: &str,
    ) -> FeedResult<CommentId> {
        self.collection_mut(kind).get_mut(id)?.add_comment(author, content)
    }

    /// Replace a comment's text. Only its author may edit.
    pub fn edit_comment(
        &mut self,
        kind: ItemKind,
        id: ItemId,
        comment: CommentId,
        actor: &Username,
        new_content: impl Into<String>,
    ) -> FeedResult<()> {
        self.collection_mut(kind)
            .get_mut(id)?
            .edit_comment(comment, actor, new_content)
    }

    /// Remove a comment. Only its author may delete.
    pub fn delete_comment(
        &mut self,
        kind: ItemKind,
        id: ItemId,
        comment: CommentId,
        actor: &Username,
    ) -> FeedResult<()> {
        self.collection_mut(kind)
            .get_mut(id)?
            .delete_comment(comment, actor)?;
        Ok(())
    }

    /// Toggle a vote on a comment. Any identity may vote.
    pub fn react_to_comment(
        &mut self,
        kind: ItemKind,
        id: ItemId,
        comment: CommentId,
        reaction: ReactionKind,
        actor: &Username,
    ) -> FeedResult<()> {
        self.collection_mut(kind)
            .get_mut(id)?
            .react_to_comment(comment, reaction, actor)
    }
}
