//! Foundation types for the Plaza feed engine.
//!
//! This crate provides the identity, id, temporal, and media types used
//! throughout the Plaza system. Every other Plaza crate depends on
//! `plaza-types`.
//!
//! # Key Types
//!
//! - [`Username`] — validated identity string, the sole identity key
//! - [`ItemId`] / [`CommentId`] — per-collection sequential identifiers
//! - [`Timestamp`] — wall-clock creation time in milliseconds
//! - [`ReactionKind`] — the two mutually exclusive vote kinds
//! - [`Media`] / [`MediaKind`] / [`MediaHandle`] — media attachment references

pub mod error;
pub mod id;
pub mod identity;
pub mod media;
pub mod reaction;
pub mod temporal;

pub use error::TypeError;
pub use id::{CommentId, ItemId};
pub use identity::Username;
pub use media::{Media, MediaHandle, MediaKind};
pub use reaction::ReactionKind;
pub use temporal::Timestamp;
