use plaza_types::{ItemId, Media, Timestamp, Username};

use crate::error::{FeedError, FeedResult};
use crate::item::FeedItem;

/// One ordered feed collection (the posts, or the events).
///
/// Most-recent-first: creation prepends. Ids are issued from a monotonic
/// counter and never reassigned within the collection's process lifetime,
/// deletions included.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedCollection {
    items: Vec<FeedItem>,
    next_id: ItemId,
}

impl Default for FeedCollection {
    fn default() -> Self {
        Self::new()
    }
}

impl FeedCollection {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            next_id: ItemId::FIRST,
        }
    }

    /// Rebuild a collection from a persisted snapshot.
    ///
    /// The id counter restarts past the largest live id; per-item comment
    /// counters are restored the same way.
    pub fn from_items(mut items: Vec<FeedItem>) -> Self {
        let next_id = items
            .iter()
            .map(|item| item.id)
            .max()
            .map_or(ItemId::FIRST, ItemId::successor);
        for item in &mut items {
            item.restore_comment_counter();
        }
        Self { items, next_id }
    }

    /// The items, most recent first.
    pub fn items(&self) -> &[FeedItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Look up an item by id.
    pub fn get(&self, id: ItemId) -> Option<&FeedItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Mutable lookup, reported as [`FeedError::ItemNotFound`] when absent.
    pub(crate) fn get_mut(&mut self, id: ItemId) -> FeedResult<&mut FeedItem> {
        self.items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or(FeedError::ItemNotFound(id))
    }

    fn issue_id(&mut self) -> ItemId {
        let id = self.next_id;
        self.next_id = id.successor();
        id
    }

    /// Prepend a fresh item. Blank content is rejected before any change.
    pub fn create(
        &mut self,
        author: Username,
        content: &str,
        author_avatar: &str,
        media: Option<Media>,
    ) -> FeedResult<ItemId> {
        if content.trim().is_empty() {
            return Err(FeedError::EmptyContent);
        }
        let id = self.issue_id();
        let item = FeedItem::new(
            id,
            author,
            content,
            author_avatar,
            Timestamp::now(),
            media,
        );
        self.items.insert(0, item);
        Ok(id)
    }

    /// Replace an item's text. Only its author may edit.
    pub fn edit(
        &mut self,
        id: ItemId,
        actor: &Username,
        new_content: impl Into<String>,
    ) -> FeedResult<()> {
        let item = self.get_mut(id)?;
        if &item.author != actor {
            return Err(FeedError::Unauthorized {
                actor: actor.clone(),
            });
        }
        item.content = new_content.into();
        Ok(())
    }

    /// Remove an item and, with it, its whole comment thread.
    /// Only its author may delete.
    pub fn delete(&mut self, id: ItemId, actor: &Username) -> FeedResult<FeedItem> {
        let pos = self
            .items
            .iter()
            .position(|item| item.id == id)
            .ok_or(FeedError::ItemNotFound(id))?;
        if &self.items[pos].author != actor {
            return Err(FeedError::Unauthorized {
                actor: actor.clone(),
            });
        }
        Ok(self.items.remove(pos))
    }

    /// Move an item to the back of the collection.
    ///
    /// Used when an item's inline playback finishes so the next one
    /// surfaces. Membership and every other position are preserved.
    pub fn move_to_back(&mut self, id: ItemId) -> FeedResult<()> {
        let pos = self
            .items
            .iter()
            .position(|item| item.id == id)
            .ok_or(FeedError::ItemNotFound(id))?;
        let item = self.items.remove(pos);
        self.items.push(item);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use plaza_reactions::Reactable;
    use plaza_types::{MediaKind, ReactionKind};

    fn user(name: &str) -> Username {
        Username::new(name).unwrap()
    }

    // -----------------------------------------------------------------------
    // Creation and ordering
    // -----------------------------------------------------------------------

    #[test]
    fn creation_prepends() {
        let mut feed = FeedCollection::new();
        feed.create(user("alice"), "first", "", None).unwrap();
        feed.create(user("alice"), "second", "", None).unwrap();
        assert_eq!(feed.items()[0].content, "second");
        assert_eq!(feed.items()[1].content, "first");
    }

    #[test]
    fn blank_content_is_rejected_without_mutation() {
        let mut feed = FeedCollection::new();
        assert_eq!(
            feed.create(user("alice"), "   ", "", None),
            Err(FeedError::EmptyContent)
        );
        assert!(feed.is_empty());
    }

    #[test]
    fn ids_are_sequential_from_one() {
        let mut feed = FeedCollection::new();
        let a = feed.create(user("alice"), "a", "", None).unwrap();
        let b = feed.create(user("alice"), "b", "", None).unwrap();
        assert_eq!(a, ItemId::new(1));
        assert_eq!(b, ItemId::new(2));
    }

    #[test]
    fn deleted_ids_are_never_reissued() {
        let mut feed = FeedCollection::new();
        let alice = user("alice");
        let a = feed.create(alice.clone(), "a", "", None).unwrap();
        let b = feed.create(alice.clone(), "b", "", None).unwrap();
        feed.delete(b, &alice).unwrap();
        let c = feed.create(alice.clone(), "c", "", None).unwrap();
        assert_eq!(c, ItemId::new(3));
        assert_ne!(c, b);
        let _ = a;
    }

    #[test]
    fn reactions_never_reorder() {
        let mut feed = FeedCollection::new();
        let a = feed.create(user("alice"), "a", "", None).unwrap();
        feed.create(user("alice"), "b", "", None).unwrap();
        feed.get_mut(a)
            .unwrap()
            .reactions_mut()
            .toggle(ReactionKind::Like, &user("bob"));
        assert_eq!(feed.items()[0].content, "b");
        assert_eq!(feed.items()[1].content, "a");
    }

    // -----------------------------------------------------------------------
    // Edit / delete authorization
    // -----------------------------------------------------------------------

    #[test]
    fn only_the_author_may_edit() {
        let mut feed = FeedCollection::new();
        let id = feed.create(user("alice"), "original", "", None).unwrap();
        let err = feed.edit(id, &user("mallory"), "defaced").unwrap_err();
        assert!(matches!(err, FeedError::Unauthorized { .. }));
        assert_eq!(feed.get(id).unwrap().content, "original");

        feed.edit(id, &user("alice"), "revised").unwrap();
        assert_eq!(feed.get(id).unwrap().content, "revised");
    }

    #[test]
    fn only_the_author_may_delete() {
        let mut feed = FeedCollection::new();
        let id = feed.create(user("alice"), "mine", "", None).unwrap();
        assert!(matches!(
            feed.delete(id, &user("mallory")),
            Err(FeedError::Unauthorized { .. })
        ));
        feed.delete(id, &user("alice")).unwrap();
        assert!(feed.get(id).is_none());
    }

    #[test]
    fn deleting_an_item_drops_its_comments() {
        let mut feed = FeedCollection::new();
        let alice = user("alice");
        let id = feed.create(alice.clone(), "with thread", "", None).unwrap();
        feed.get_mut(id)
            .unwrap()
            .add_comment(user("bob"), "reply")
            .unwrap();
        let removed = feed.delete(id, &alice).unwrap();
        assert_eq!(removed.comments.len(), 1);
        // Nothing about the thread remains queryable.
        assert!(feed.get(id).is_none());
    }

    #[test]
    fn missing_items_are_reported() {
        let mut feed = FeedCollection::new();
        assert_eq!(
            feed.edit(ItemId::new(9), &user("alice"), "x"),
            Err(FeedError::ItemNotFound(ItemId::new(9)))
        );
    }

    // -----------------------------------------------------------------------
    // Explicit reordering
    // -----------------------------------------------------------------------

    #[test]
    fn move_to_back_rotates() {
        let mut feed = FeedCollection::new();
        let alice = user("alice");
        feed.create(alice.clone(), "a", "", None).unwrap();
        feed.create(alice.clone(), "b", "", None).unwrap();
        let c = feed.create(alice.clone(), "c", "", None).unwrap();
        // Front item rotates to the back; the rest shift up.
        feed.move_to_back(c).unwrap();
        let contents: Vec<_> = feed.items().iter().map(|i| i.content.as_str()).collect();
        assert_eq!(contents, vec!["b", "a", "c"]);
        assert_eq!(feed.len(), 3);
    }

    #[test]
    fn move_to_back_of_last_item_is_a_noop() {
        let mut feed = FeedCollection::new();
        let alice = user("alice");
        feed.create(alice.clone(), "a", "", None).unwrap();
        let contents_before: Vec<_> =
            feed.items().iter().map(|i| i.content.clone()).collect();
        feed.move_to_back(ItemId::new(1)).unwrap();
        let contents_after: Vec<_> =
            feed.items().iter().map(|i| i.content.clone()).collect();
        assert_eq!(contents_before, contents_after);
    }

    // -----------------------------------------------------------------------
    // Rehydration
    // -----------------------------------------------------------------------

    #[test]
    fn from_items_restarts_the_counter_past_live_ids() {
        let mut feed = FeedCollection::new();
        let alice = user("alice");
        feed.create(alice.clone(), "a", "", None).unwrap();
        feed.create(alice.clone(), "b", "", None).unwrap();

        let mut restored = FeedCollection::from_items(feed.items().to_vec());
        let fresh = restored.create(alice, "c", "", None).unwrap();
        assert_eq!(fresh, ItemId::new(3));
    }

    #[test]
    fn from_items_on_empty_starts_at_one() {
        let mut feed = FeedCollection::from_items(Vec::new());
        let id = feed.create(user("alice"), "a", "", None).unwrap();
        assert_eq!(id, ItemId::FIRST);
    }

    #[test]
    fn events_carry_their_media_through() {
        let mut feed = FeedCollection::new();
        let media = Media::new(MediaKind::Video, "media:clip").with_overlay("yard");
        let id = feed
            .create(user("mary"), "I love my 2 kids", "", Some(media.clone()))
            .unwrap();
        assert_eq!(feed.get(id).unwrap().media.as_ref(), Some(&media));
    }
}
