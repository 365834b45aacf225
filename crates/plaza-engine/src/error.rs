use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("feed error: {0}")]
    Feed(#[from] plaza_feed::FeedError),

    #[error("follow error: {0}")]
    Social(#[from] plaza_social::SocialError),

    #[error("session error: {0}")]
    Session(#[from] plaza_session::SessionError),

    #[error("media error: {0}")]
    Media(#[from] plaza_media::MediaError),

    #[error("store error: {0}")]
    Store(#[from] plaza_store::StoreError),

    #[error("snapshot encoding error: {0}")]
    Encoding(#[from] serde_json::Error),
}

pub type EngineResult<T> = Result<T, EngineError>;
