use serde::{Deserialize, Serialize};

use plaza_reactions::{Reactable, ReactionState};
use plaza_types::{CommentId, Username};

/// A reactable text reply owned by exactly one feed item.
///
/// Comment ids are issued per parent item and are meaningless outside it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: CommentId,
    pub author: Username,
    pub content: String,
    #[serde(flatten)]
    pub reactions: ReactionState,
}

impl Comment {
    /// Create a fresh comment with no votes.
    pub fn new(id: CommentId, author: Username, content: impl Into<String>) -> Self {
        Self {
            id,
            author,
            content: content.into(),
            reactions: ReactionState::new(),
        }
    }
}

impl Reactable for Comment {
    fn reactions(&self) -> &ReactionState {
        &self.reactions
    }

    fn reactions_mut(&mut self) -> &mut ReactionState {
        &mut self.reactions
    }
}
