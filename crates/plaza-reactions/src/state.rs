use serde::{Deserialize, Serialize};

use plaza_types::{ReactionKind, Username};

/// Vote state carried by every reactable entity.
///
/// `liked_by` and `disliked_by` have set semantics (no duplicates) but keep
/// insertion order so reactions render stably. The counts are a derived
/// cache of the sets, kept in lockstep by [`toggle`](Self::toggle) — they
/// are serialized alongside the sets because the persisted shape exposes
/// both.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReactionState {
    pub likes: u32,
    pub dislikes: u32,
    pub liked_by: Vec<Username>,
    pub disliked_by: Vec<Username>,
}

impl ReactionState {
    /// Fresh state with no votes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one vote toggle for `actor`.
    ///
    /// If the actor already holds a vote of `kind`, it is removed.
    /// Otherwise the vote is added and any vote of the opposite kind is
    /// cleared. The actor is never left in both sets.
    pub fn toggle(&mut self, kind: ReactionKind, actor: &Username) {
        match kind {
            ReactionKind::Like => Self::toggle_in(
                (&mut self.liked_by, &mut self.likes),
                (&mut self.disliked_by, &mut self.dislikes),
                actor,
            ),
            ReactionKind::Dislike => Self::toggle_in(
                (&mut self.disliked_by, &mut self.dislikes),
                (&mut self.liked_by, &mut self.likes),
                actor,
            ),
        }
    }

    fn toggle_in(
        own: (&mut Vec<Username>, &mut u32),
        opposite: (&mut Vec<Username>, &mut u32),
        actor: &Username,
    ) {
        let (own_set, own_count) = own;
        let (opp_set, opp_count) = opposite;

        if let Some(pos) = own_set.iter().position(|u| u == actor) {
            own_set.remove(pos);
            *own_count -= 1;
            return;
        }

        own_set.push(actor.clone());
        *own_count += 1;

        if let Some(pos) = opp_set.iter().position(|u| u == actor) {
            opp_set.remove(pos);
            *opp_count -= 1;
        }
    }

    /// The vote `actor` currently holds, if any.
    pub fn vote_of(&self, actor: &Username) -> Option<ReactionKind> {
        if self.liked_by.iter().any(|u| u == actor) {
            Some(ReactionKind::Like)
        } else if self.disliked_by.iter().any(|u| u == actor) {
            Some(ReactionKind::Dislike)
        } else {
            None
        }
    }

    /// Whether the counts match the sets and no actor appears in both.
    pub fn is_consistent(&self) -> bool {
        self.likes as usize == self.liked_by.len()
            && self.dislikes as usize == self.disliked_by.len()
            && !self
                .liked_by
                .iter()
                .any(|u| self.disliked_by.iter().any(|d| d == u))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(name: &str) -> Username {
        Username::new(name).unwrap()
    }

    // -----------------------------------------------------------------------
    // Basic toggling
    // -----------------------------------------------------------------------

    #[test]
    fn like_adds_actor() {
        let mut state = ReactionState::new();
        state.toggle(ReactionKind::Like, &user("bob"));
        assert_eq!(state.likes, 1);
        assert_eq!(state.liked_by, vec![user("bob")]);
        assert!(state.disliked_by.is_empty());
    }

    #[test]
    fn second_like_removes_it() {
        let mut state = ReactionState::new();
        let bob = user("bob");
        state.toggle(ReactionKind::Like, &bob);
        state.toggle(ReactionKind::Like, &bob);
        assert_eq!(state, ReactionState::new());
    }

    #[test]
    fn dislike_mirrors_like() {
        let mut state = ReactionState::new();
        let bob = user("bob");
        state.toggle(ReactionKind::Dislike, &bob);
        assert_eq!(state.dislikes, 1);
        assert_eq!(state.disliked_by, vec![bob.clone()]);
        state.toggle(ReactionKind::Dislike, &bob);
        assert_eq!(state, ReactionState::new());
    }

    // -----------------------------------------------------------------------
    // Mutual exclusivity
    // -----------------------------------------------------------------------

    #[test]
    fn like_clears_existing_dislike() {
        let mut state = ReactionState::new();
        let bob = user("bob");
        state.toggle(ReactionKind::Dislike, &bob);
        state.toggle(ReactionKind::Like, &bob);
        assert_eq!(state.likes, 1);
        assert_eq!(state.dislikes, 0);
        assert_eq!(state.liked_by, vec![bob]);
        assert!(state.disliked_by.is_empty());
    }

    #[test]
    fn dislike_clears_existing_like() {
        let mut state = ReactionState::new();
        let bob = user("bob");
        state.toggle(ReactionKind::Like, &bob);
        state.toggle(ReactionKind::Dislike, &bob);
        assert_eq!(state.likes, 0);
        assert_eq!(state.dislikes, 1);
        assert!(state.liked_by.is_empty());
        assert_eq!(state.disliked_by, vec![bob]);
    }

    #[test]
    fn actor_never_in_both_sets() {
        let mut state = ReactionState::new();
        let bob = user("bob");
        for kind in [
            ReactionKind::Like,
            ReactionKind::Dislike,
            ReactionKind::Dislike,
            ReactionKind::Like,
            ReactionKind::Like,
        ] {
            state.toggle(kind, &bob);
            assert!(state.is_consistent());
            let in_both = state.liked_by.contains(&bob) && state.disliked_by.contains(&bob);
            assert!(!in_both);
        }
    }

    // -----------------------------------------------------------------------
    // Independent actors
    // -----------------------------------------------------------------------

    #[test]
    fn votes_from_other_actors_are_untouched() {
        let mut state = ReactionState::new();
        let alice = user("alice");
        let bob = user("bob");
        state.toggle(ReactionKind::Like, &alice);
        state.toggle(ReactionKind::Dislike, &bob);
        state.toggle(ReactionKind::Like, &bob);
        assert_eq!(state.liked_by, vec![alice, bob]);
        assert_eq!(state.likes, 2);
        assert_eq!(state.dislikes, 0);
    }

    #[test]
    fn vote_of_reports_current_vote() {
        let mut state = ReactionState::new();
        let bob = user("bob");
        assert_eq!(state.vote_of(&bob), None);
        state.toggle(ReactionKind::Like, &bob);
        assert_eq!(state.vote_of(&bob), Some(ReactionKind::Like));
        state.toggle(ReactionKind::Dislike, &bob);
        assert_eq!(state.vote_of(&bob), Some(ReactionKind::Dislike));
    }

    // -----------------------------------------------------------------------
    // Serialization
    // -----------------------------------------------------------------------

    #[test]
    fn serde_roundtrip() {
        let mut state = ReactionState::new();
        state.toggle(ReactionKind::Like, &user("alice"));
        state.toggle(ReactionKind::Dislike, &user("bob"));
        let json = serde_json::to_string(&state).unwrap();
        let parsed: ReactionState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, parsed);
    }
}
