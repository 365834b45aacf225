//! Durable snapshot storage for the Plaza feed engine.
//!
//! This crate implements a name-keyed blob store. Each slot holds one full
//! serialized collection (the `posts`, `events`, and `users` snapshots) and
//! is overwritten wholesale on every write -- last write wins, no history.
//!
//! # Storage Backends
//!
//! All backends implement the [`SnapshotStore`] trait:
//!
//! - [`InMemorySnapshotStore`] -- `HashMap`-based store for tests and embedding
//! - [`FsSnapshotStore`] -- one file per slot under a root directory
//!
//! # Design Rules
//!
//! 1. The store never interprets slot contents -- it is a pure key-value store.
//! 2. Writes replace the previous value atomically (filesystem backend writes
//!    to a temporary file, then renames).
//! 3. Reading an absent slot is `Ok(None)`, never an error.
//! 4. All I/O errors are propagated, never silently ignored.

pub mod error;
pub mod fs;
pub mod keys;
pub mod memory;
pub mod traits;

// Re-export primary types at crate root for ergonomic imports.
pub use error::{StoreError, StoreResult};
pub use fs::FsSnapshotStore;
pub use keys::validate_key;
pub use memory::InMemorySnapshotStore;
pub use traits::SnapshotStore;
