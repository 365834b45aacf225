use thiserror::Error;

/// Errors produced by type construction and parsing.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("identity must not be empty")]
    EmptyIdentity,

    #[error("invalid media handle: {0}")]
    InvalidHandle(String),
}
