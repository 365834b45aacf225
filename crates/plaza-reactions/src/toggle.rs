use plaza_types::{ReactionKind, Username};

use crate::state::ReactionState;

/// Capability trait for anything carrying vote state.
///
/// Posts, events, and comments implement this; the toggle rule and its
/// callers are written against the trait so the algorithm exists in exactly
/// one place.
pub trait Reactable {
    fn reactions(&self) -> &ReactionState;
    fn reactions_mut(&mut self) -> &mut ReactionState;

    /// Current like count.
    fn likes(&self) -> u32 {
        self.reactions().likes
    }

    /// Current dislike count.
    fn dislikes(&self) -> u32 {
        self.reactions().dislikes
    }

    /// The vote `actor` currently holds on this entity, if any.
    fn vote_of(&self, actor: &Username) -> Option<ReactionKind> {
        self.reactions().vote_of(actor)
    }
}

/// Apply one vote toggle to any reactable entity.
pub fn toggle<R: Reactable + ?Sized>(entity: &mut R, kind: ReactionKind, actor: &Username) {
    entity.reactions_mut().toggle(kind, actor);
}
