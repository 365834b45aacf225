use plaza_types::Username;

/// Errors produced by follow-graph operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SocialError {
    #[error("{0} cannot follow themselves")]
    SelfFollow(Username),
}

/// Result alias for follow-graph operations.
pub type SocialResult<T> = Result<T, SocialError>;
