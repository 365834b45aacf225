//! The follow graph for the Plaza feed engine.
//!
//! One [`FollowSet`] records which authors the current session identity
//! follows. The relationship is one-directional (no mutual-follow concept)
//! and session-scoped: it is cleared on logout and never persisted. Follow
//! state gates no visibility; it only informs what the caller renders.

pub mod error;
pub mod graph;

pub use error::{SocialError, SocialResult};
pub use graph::FollowSet;
