use std::collections::HashMap;
use std::sync::RwLock;

use crate::error::StoreResult;
use crate::keys::validate_key;
use crate::traits::SnapshotStore;

/// In-memory, HashMap-based snapshot store.
///
/// Intended for tests and embedding. All slots are held in memory behind a
/// `RwLock` for safe concurrent access. Data is lost when the store is
/// dropped.
pub struct InMemorySnapshotStore {
    slots: RwLock<HashMap<String, Vec<u8>>>,
}

impl InMemorySnapshotStore {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self {
            slots: RwLock::new(HashMap::new()),
        }
    }

    /// Number of populated slots.
    pub fn len(&self) -> usize {
        self.slots.read().expect("lock poisoned").len()
    }

    /// Returns `true` if no slot holds a value.
    pub fn is_empty(&self) -> bool {
        self.slots.read().expect("lock poisoned").is_empty()
    }

    /// Total bytes across all slots.
    pub fn total_bytes(&self) -> u64 {
        self.slots
            .read()
            .expect("lock poisoned")
            .values()
            .map(|data| data.len() as u64)
            .sum()
    }

    /// Remove all slots.
    pub fn clear(&self) {
        self.slots.write().expect("lock poisoned").clear();
    }
}

impl Default for InMemorySnapshotStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SnapshotStore for InMemorySnapshotStore {
    fn read(&self, key: &str) -> StoreResult<Option<Vec<u8>>> {
        validate_key(key)?;
        let slots = self.slots.read().expect("lock poisoned");
        Ok(slots.get(key).cloned())
    }

    fn write(&self, key: &str, data: &[u8]) -> StoreResult<()> {
        validate_key(key)?;
        let mut slots = self.slots.write().expect("lock poisoned");
        slots.insert(key.to_string(), data.to_vec());
        Ok(())
    }

    fn exists(&self, key: &str) -> StoreResult<bool> {
        validate_key(key)?;
        let slots = self.slots.read().expect("lock poisoned");
        Ok(slots.contains_key(key))
    }

    fn delete(&self, key: &str) -> StoreResult<bool> {
        validate_key(key)?;
        let mut slots = self.slots.write().expect("lock poisoned");
        Ok(slots.remove(key).is_some())
    }

    fn keys(&self) -> StoreResult<Vec<String>> {
        let slots = self.slots.read().expect("lock poisoned");
        let mut keys: Vec<String> = slots.keys().cloned().collect();
        keys.sort();
        Ok(keys)
    }
}

impl std::fmt::Debug for InMemorySnapshotStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemorySnapshotStore")
            .field("slot_count", &self.len())
            .finish()
    }
}
