use serde::{Deserialize, Serialize};

use plaza_reactions::{Reactable, ReactionState};
use plaza_types::{CommentId, ItemId, Media, ReactionKind, Timestamp, Username};

use crate::comment::Comment;
use crate::error::{FeedError, FeedResult};

fn default_next_comment_id() -> CommentId {
    CommentId::FIRST
}

/// One feed entry: a post, or an event when media is attached.
///
/// Posts and events share this shape and differ only in the presence of
/// `media`; they live in separate collections and never share ids. The item
/// exclusively owns its comment thread.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedItem {
    pub id: ItemId,
    pub author: Username,
    pub content: String,
    /// Data reference for the author's avatar; may be empty.
    pub author_avatar: String,
    pub created_at: Timestamp,
    #[serde(flatten)]
    pub reactions: ReactionState,
    pub comments: Vec<Comment>,
    /// Monotonic comment id counter; deleted comment ids are never reissued.
    #[serde(default = "default_next_comment_id")]
    next_comment_id: CommentId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media: Option<Media>,
}

impl FeedItem {
    pub fn new(
        id: ItemId,
        author: Username,
        content: impl Into<String>,
        author_avatar: impl Into<String>,
        created_at: Timestamp,
        media: Option<Media>,
    ) -> Self {
        Self {
            id,
            author,
            content: content.into(),
            author_avatar: author_avatar.into(),
            created_at,
            reactions: ReactionState::new(),
            comments: Vec::new(),
            next_comment_id: CommentId::FIRST,
            media,
        }
    }

    /// Whether this entry is an event (carries media).
    pub fn is_event(&self) -> bool {
        self.media.is_some()
    }

    /// Append a comment. Blank content is rejected; stored text is trimmed.
    pub fn add_comment(&mut self, author: Username, content: &str) -> FeedResult<CommentId> {
        let trimmed = content.trim();
        if trimmed.is_empty() {
            return Err(FeedError::EmptyContent);
        }
        let id = self.next_comment_id;
        self.next_comment_id = id.successor();
        self.comments.push(Comment::new(id, author, trimmed));
        Ok(id)
    }

    /// Look up a comment by id.
    pub fn comment(&self, id: CommentId) -> Option<&Comment> {
        self.comments.iter().find(|c| c.id == id)
    }

    fn comment_mut(&mut self, id: CommentId) -> FeedResult<&mut Comment> {
        let item = self.id;
        self.comments
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(FeedError::CommentNotFound { item, comment: id })
    }

    /// Replace a comment's text. Only its author may edit.
    pub fn edit_comment(
        &mut self,
        id: CommentId,
        actor: &Username,
        new_content: impl Into<String>,
    ) -> FeedResult<()> {
        let comment = self.comment_mut(id)?;
        if &comment.author != actor {
            return Err(FeedError::Unauthorized {
                actor: actor.clone(),
            });
        }
        comment.content = new_content.into();
        Ok(())
    }

    /// Remove a comment. Only its author may delete.
    pub fn delete_comment(&mut self, id: CommentId, actor: &Username) -> FeedResult<Comment> {
        let pos = self
            .comments
            .iter()
            .position(|c| c.id == id)
            .ok_or(FeedError::CommentNotFound {
                item: self.id,
                comment: id,
            })?;
        if &self.comments[pos].author != actor {
            return Err(FeedError::Unauthorized {
                actor: actor.clone(),
            });
        }
        Ok(self.comments.remove(pos))
    }

    /// Toggle a vote on one comment. Any identity may vote.
    pub fn react_to_comment(
        &mut self,
        id: CommentId,
        kind: ReactionKind,
        actor: &Username,
    ) -> FeedResult<()> {
        let comment = self.comment_mut(id)?;
        plaza_reactions::toggle(comment, kind, actor);
        Ok(())
    }

    /// Ensure the comment counter is past every live comment id.
    ///
    /// Used on rehydration, where older snapshots may lack the counter.
    pub(crate) fn restore_comment_counter(&mut self) {
        if let Some(max) = self.comments.iter().map(|c| c.id).max() {
            if self.next_comment_id <= max {
                self.next_comment_id = max.successor();
            }
        }
    }
}

impl Reactable for FeedItem {
    fn reactions(&self) -> &ReactionState {
        &self.reactions
    }

    fn reactions_mut(&mut self) -> &mut ReactionState {
        &mut self.reactions
    }
}
