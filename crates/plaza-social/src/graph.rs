use serde::{Deserialize, Serialize};

use plaza_types::Username;

use crate::error::{SocialError, SocialResult};

/// The authors followed by the current session identity.
///
/// Set semantics with insertion order preserved. The owner is supplied per
/// call; following yourself is rejected, following someone twice is a
/// silent no-op.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FollowSet {
    following: Vec<Username>,
}

impl FollowSet {
    /// An empty follow set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Follow `target`. Returns `true` if the follow was newly added.
    pub fn follow(&mut self, owner: &Username, target: Username) -> SocialResult<bool> {
        if owner == &target {
            return Err(SocialError::SelfFollow(target));
        }
        if self.is_following(&target) {
            return Ok(false);
        }
        self.following.push(target);
        Ok(true)
    }

    /// Unfollow `target`. Returns `true` if they were followed.
    pub fn unfollow(&mut self, target: &Username) -> bool {
        let before = self.following.len();
        self.following.retain(|u| u != target);
        self.following.len() != before
    }

    /// Whether `target` is currently followed.
    pub fn is_following(&self, target: &Username) -> bool {
        self.following.iter().any(|u| u == target)
    }

    /// The followed authors, in follow order.
    pub fn all(&self) -> &[Username] {
        &self.following
    }

    pub fn len(&self) -> usize {
        self.following.len()
    }

    pub fn is_empty(&self) -> bool {
        self.following.is_empty()
    }

    /// Drop every follow. Used on logout.
    pub fn clear(&mut self) {
        self.following.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(name: &str) -> Username {
        Username::new(name).unwrap()
    }

    #[test]
    fn follow_adds_once() {
        let mut set = FollowSet::new();
        let alice = user("alice");
        assert!(set.follow(&alice, user("bob")).unwrap());
        assert!(!set.follow(&alice, user("bob")).unwrap());
        assert_eq!(set.len(), 1);
        assert!(set.is_following(&user("bob")));
    }

    #[test]
    fn self_follow_is_rejected() {
        let mut set = FollowSet::new();
        let alice = user("alice");
        assert_eq!(
            set.follow(&alice, alice.clone()),
            Err(SocialError::SelfFollow(alice))
        );
        assert!(set.is_empty());
    }

    #[test]
    fn unfollow_removes_if_present() {
        let mut set = FollowSet::new();
        let alice = user("alice");
        set.follow(&alice, user("bob")).unwrap();
        assert!(set.unfollow(&user("bob")));
        assert!(!set.unfollow(&user("bob")));
        assert!(set.is_empty());
    }

    #[test]
    fn follow_order_is_preserved() {
        let mut set = FollowSet::new();
        let alice = user("alice");
        set.follow(&alice, user("carol")).unwrap();
        set.follow(&alice, user("bob")).unwrap();
        assert_eq!(set.all(), &[user("carol"), user("bob")]);
    }

    #[test]
    fn clear_empties_the_set() {
        let mut set = FollowSet::new();
        let alice = user("alice");
        set.follow(&alice, user("bob")).unwrap();
        set.follow(&alice, user("carol")).unwrap();
        set.clear();
        assert!(set.is_empty());
    }

    #[test]
    fn serde_is_a_bare_list() {
        let mut set = FollowSet::new();
        set.follow(&user("alice"), user("bob")).unwrap();
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, "[\"bob\"]");
    }
}
