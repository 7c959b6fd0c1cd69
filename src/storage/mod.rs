// SPDX-License-Identifier: MIT

//! Persistence layer: named JSON-array records behind a pluggable backend.
//!
//! The stores treat each record as an opaque array they fully overwrite on
//! every mutation; there are no partial writes. Failures at this boundary
//! are logged and swallowed — the in-memory collections stay authoritative
//! for the session, and a corrupt record degrades to a fresh-start state.

pub mod json_file;
pub mod memory;

pub use json_file::JsonFileStorage;
pub use memory::MemoryStorage;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::Result;

/// Record names as constants.
///
/// `moodActivities` and `customActivities` match the keys the persisted
/// data has always used; `achievements` holds badge unlock instants.
pub mod records {
    pub const LOGGED_ACTIVITIES: &str = "moodActivities";
    pub const CUSTOM_ACTIVITIES: &str = "customActivities";
    pub const ACHIEVEMENTS: &str = "achievements";
}

/// Raw record storage.
///
/// Implementations store whole serialized records keyed by name; they are
/// not expected to understand the payloads.
pub trait StorageBackend: Send + Sync {
    /// Read a record's raw payload. `Ok(None)` if it was never written.
    fn read_record(&self, key: &str) -> Result<Option<String>>;

    /// Overwrite a record's raw payload.
    fn write_record(&self, key: &str, payload: &str) -> Result<()>;
}

/// Load a JSON-array record, degrading to empty on any failure.
///
/// A missing record is a normal first run. A read error or corrupt/
/// mis-shaped payload is logged and treated the same way; it never
/// propagates to the caller.
pub fn load_json_array<T: DeserializeOwned>(backend: &dyn StorageBackend, key: &str) -> Vec<T> {
    let payload = match backend.read_record(key) {
        Ok(Some(payload)) => payload,
        Ok(None) => return Vec::new(),
        Err(err) => {
            tracing::error!(record = key, error = %err, "Failed to read record");
            return Vec::new();
        }
    };

    match serde_json::from_str(&payload) {
        Ok(items) => items,
        Err(err) => {
            tracing::warn!(record = key, error = %err, "Corrupt record, starting empty");
            Vec::new()
        }
    }
}

/// Persist a full JSON-array record, best effort.
///
/// Returns whether the write succeeded; callers keep their in-memory
/// state either way.
pub fn store_json_array<T: Serialize>(
    backend: &dyn StorageBackend,
    key: &str,
    items: &[T],
) -> bool {
    let payload = match serde_json::to_string(items) {
        Ok(payload) => payload,
        Err(err) => {
            tracing::error!(record = key, error = %err, "Failed to serialize record");
            return false;
        }
    };

    match backend.write_record(key, &payload) {
        Ok(()) => true,
        Err(err) => {
            tracing::error!(record = key, error = %err, "Failed to write record");
            false
        }
    }
}
