// SPDX-License-Identifier: MIT

//! In-memory storage backend for tests and ephemeral sessions.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use crate::error::{AppError, Result};
use crate::storage::StorageBackend;

/// Keeps records in a map; optionally fails writes to exercise the
/// best-effort persistence path.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    records: Mutex<HashMap<String, String>>,
    writes_fail: AtomicBool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make subsequent `write_record` calls fail.
    pub fn fail_writes(&self, fail: bool) {
        self.writes_fail.store(fail, Ordering::Relaxed);
    }

    /// Raw record contents, for asserting on what was persisted.
    pub fn raw_record(&self, key: &str) -> Option<String> {
        self.records.lock().unwrap().get(key).cloned()
    }
}

impl StorageBackend for MemoryStorage {
    fn read_record(&self, key: &str) -> Result<Option<String>> {
        Ok(self.records.lock().unwrap().get(key).cloned())
    }

    fn write_record(&self, key: &str, payload: &str) -> Result<()> {
        if self.writes_fail.load(Ordering::Relaxed) {
            return Err(AppError::Storage(format!(
                "simulated write failure for record {key}"
            )));
        }
        self.records
            .lock()
            .unwrap()
            .insert(key.to_string(), payload.to_string());
        Ok(())
    }
}
