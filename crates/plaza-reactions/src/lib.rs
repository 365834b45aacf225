//! The like/dislike vote rule shared by every reactable entity in Plaza.
//!
//! Posts, events, and comments all carry the same vote state and obey the
//! same toggle rule; this crate implements that rule exactly once. It owns
//! no storage -- it operates on whatever [`ReactionState`] it is handed.
//!
//! # The Toggle Rule
//!
//! - Voting a kind the actor already holds removes that vote (un-react).
//! - Voting a kind the actor does not hold adds it, and clears the actor's
//!   vote of the opposite kind if present.
//! - An actor is never present in both vote sets, and the counts always
//!   equal the set sizes.
//!
//! Any identity may vote, including the entity's own author.

pub mod state;
pub mod toggle;

pub use state::ReactionState;
pub use toggle::{toggle, Reactable};
