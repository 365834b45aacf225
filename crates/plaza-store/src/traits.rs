use crate::error::StoreResult;

/// Name-keyed blob store for full-collection snapshots.
///
/// All implementations must satisfy these invariants:
/// - A write replaces the slot's previous value wholesale (last write wins).
/// - Reading an absent slot returns `Ok(None)`, never an error.
/// - The store never interprets slot contents — it is a pure key-value store.
/// - All I/O errors are propagated, never silently ignored.
pub trait SnapshotStore: Send + Sync {
    /// Read the current value of a slot.
    ///
    /// Returns `Ok(None)` if the slot has never been written.
    fn read(&self, key: &str) -> StoreResult<Option<Vec<u8>>>;

    /// Write a slot, replacing any previous value.
    fn write(&self, key: &str, data: &[u8]) -> StoreResult<()>;

    /// Check whether a slot currently holds a value.
    fn exists(&self, key: &str) -> StoreResult<bool>;

    /// Delete a slot. Returns `true` if it held a value.
    fn delete(&self, key: &str) -> StoreResult<bool>;

    /// Return a sorted list of all populated slot keys.
    fn keys(&self) -> StoreResult<Vec<String>>;
}
