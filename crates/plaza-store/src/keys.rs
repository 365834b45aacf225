//! Slot key validation.
//!
//! Valid slot keys:
//! - Must be non-empty
//! - Lowercase ASCII letters, digits, `.`, `_`, `-` only
//! - Must not start with `.` (hidden files on the filesystem backend)
//!
//! Keys double as file names in [`FsSnapshotStore`](crate::FsSnapshotStore),
//! so anything path-like is rejected outright.

use crate::error::{StoreError, StoreResult};

/// Validate a slot key, returning `Ok(())` if valid.
pub fn validate_key(key: &str) -> StoreResult<()> {
    if key.is_empty() {
        return Err(StoreError::InvalidKey {
            key: key.to_string(),
            reason: "key must not be empty".into(),
        });
    }

    if key.starts_with('.') {
        return Err(StoreError::InvalidKey {
            key: key.to_string(),
            reason: "must not start with '.'".into(),
        });
    }

    for ch in key.chars() {
        let ok = ch.is_ascii_lowercase() || ch.is_ascii_digit() || matches!(ch, '.' | '_' | '-');
        if !ok {
            return Err(StoreError::InvalidKey {
                key: key.to_string(),
                reason: format!("contains forbidden character: {ch:?}"),
            });
        }
    }

    Ok(())
}
