//! Filesystem-backed snapshot store.
//!
//! Each slot is a single file named after its key under a root directory.
//! Writes go to a temporary sibling first and are renamed into place, so a
//! crash mid-write leaves the previous snapshot intact.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::StoreResult;
use crate::keys::validate_key;
use crate::traits::SnapshotStore;

/// Snapshot store persisting each slot as a file under `root`.
#[derive(Debug)]
pub struct FsSnapshotStore {
    root: PathBuf,
}

impl FsSnapshotStore {
    /// Open (or create) a store rooted at the given directory.
    pub fn open(root: &Path) -> StoreResult<Self> {
        fs::create_dir_all(root)?;
        Ok(Self {
            root: root.to_path_buf(),
        })
    }

    /// The root directory of this store.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn slot_path(&self, key: &str) -> PathBuf {
        self.root.join(key)
    }
}

impl SnapshotStore for FsSnapshotStore {
    fn read(&self, key: &str) -> StoreResult<Option<Vec<u8>>> {
        validate_key(key)?;
        match fs::read(self.slot_path(key)) {
            Ok(data) => Ok(Some(data)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&self, key: &str, data: &[u8]) -> StoreResult<()> {
        validate_key(key)?;
        let path = self.slot_path(key);
        let tmp = self.root.join(format!(".{key}.tmp"));

        let mut file = fs::File::create(&tmp)?;
        file.write_all(data)?;
        file.sync_all()?;
        fs::rename(&tmp, &path)?;

        debug!(key, bytes = data.len(), "snapshot slot written");
        Ok(())
    }

    fn exists(&self, key: &str) -> StoreResult<bool> {
        validate_key(key)?;
        Ok(self.slot_path(key).is_file())
    }

    fn delete(&self, key: &str) -> StoreResult<bool> {
        validate_key(key)?;
        match fs::remove_file(self.slot_path(key)) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    fn keys(&self) -> StoreResult<Vec<String>> {
        let mut keys = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            let name = entry.file_name();
            let Some(name) = name.to_str() else { continue };
            // Skip leftovers from interrupted writes.
            if validate_key(name).is_ok() {
                keys.push(name.to_string());
            }
        }
        keys.sort();
        Ok(keys)
    }
}
