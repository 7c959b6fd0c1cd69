// SPDX-License-Identifier: MIT

//! File-backed storage: one `<key>.json` file per record.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::error::{AppError, Result};
use crate::storage::StorageBackend;

/// Stores each record as a standalone JSON file under a data directory.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    data_dir: PathBuf,
}

impl JsonFileStorage {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    fn record_path(&self, key: &str) -> PathBuf {
        self.data_dir.join(format!("{key}.json"))
    }

    fn ensure_data_dir(&self) -> Result<&Path> {
        fs::create_dir_all(&self.data_dir)
            .with_context(|| format!("creating data dir {}", self.data_dir.display()))?;
        Ok(&self.data_dir)
    }
}

impl StorageBackend for JsonFileStorage {
    fn read_record(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.record_path(key)) {
            Ok(payload) => Ok(Some(payload)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(AppError::Storage(format!("reading record {key}: {err}"))),
        }
    }

    fn write_record(&self, key: &str, payload: &str) -> Result<()> {
        self.ensure_data_dir()?;
        let path = self.record_path(key);

        // Write via a temp file so a crash mid-write can't corrupt the record
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, payload)
            .map_err(|err| AppError::Storage(format!("writing record {key}: {err}")))?;
        fs::rename(&tmp, &path)
            .map_err(|err| AppError::Storage(format!("committing record {key}: {err}")))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::records;

    #[test]
    fn test_missing_record_reads_none() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::new(dir.path());

        let read = storage.read_record(records::LOGGED_ACTIVITIES).unwrap();
        assert!(read.is_none());
    }

    #[test]
    fn test_write_then_read_back() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::new(dir.path().join("nested"));

        storage
            .write_record(records::CUSTOM_ACTIVITIES, "[]")
            .unwrap();

        let read = storage.read_record(records::CUSTOM_ACTIVITIES).unwrap();
        assert_eq!(read.as_deref(), Some("[]"));
    }

    #[test]
    fn test_records_are_independent_files() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::new(dir.path());

        storage.write_record(records::LOGGED_ACTIVITIES, "[1]").unwrap();
        storage.write_record(records::CUSTOM_ACTIVITIES, "[2]").unwrap();

        assert!(dir.path().join("moodActivities.json").exists());
        assert!(dir.path().join("customActivities.json").exists());
        assert_eq!(
            storage
                .read_record(records::LOGGED_ACTIVITIES)
                .unwrap()
                .as_deref(),
            Some("[1]")
        );
    }
}
