use plaza_types::{CommentId, ItemId, Username};

/// Errors produced by feed operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FeedError {
    #[error("content must not be blank")]
    EmptyContent,

    #[error("an event requires a media attachment")]
    MissingMedia,

    #[error("no item with id {0}")]
    ItemNotFound(ItemId),

    #[error("no comment with id {comment} on item {item}")]
    CommentNotFound { item: ItemId, comment: CommentId },

    #[error("{actor} is not the author")]
    Unauthorized { actor: Username },
}

/// Result alias for feed operations.
pub type FeedResult<T> = Result<T, FeedError>;
