use plaza_types::Username;

/// Errors produced by session and account operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("no user is logged in")]
    NotLoggedIn,

    #[error("unknown user {0}")]
    UnknownUser(Username),

    #[error("incorrect credentials")]
    BadCredentials,

    #[error("username {0} is already taken")]
    UsernameTaken(Username),
}

/// Result alias for session operations.
pub type SessionResult<T> = Result<T, SessionError>;
