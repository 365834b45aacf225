use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier for a feed item (post or event) within one collection.
///
/// Ids are issued sequentially by the owning collection and are never
/// reassigned within that collection's process lifetime, deletions
/// included. Post ids and event ids are independent sequences, so a post
/// and an event may share a numeric id; callers address items by
/// (collection, id), never by id alone.
#[derive(
    Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ItemId(u64);

impl ItemId {
    /// The first id a fresh collection issues.
    pub const FIRST: Self = Self(1);

    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub const fn get(self) -> u64 {
        self.0
    }

    /// The next id in sequence.
    pub const fn successor(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Debug for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ItemId({})", self.0)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier for a comment within one parent item.
///
/// Issued sequentially per parent; independent across parents.
#[derive(
    Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct CommentId(u64);

impl CommentId {
    /// The first id a fresh comment sequence issues.
    pub const FIRST: Self = Self(1);

    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub const fn get(self) -> u64 {
        self.0
    }

    /// The next id in sequence.
    pub const fn successor(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Debug for CommentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CommentId({})", self.0)
    }
}

impl fmt::Display for CommentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
