// SPDX-License-Identifier: MIT

//! Logged-activity journal.
//!
//! The single source of truth for everything derived: entries are
//! appended when the user logs an activity and removed only by explicit
//! deletion, never edited. Each entry snapshots the catalog definition at
//! log time, so a custom activity renamed or re-pointed later leaves
//! history untouched.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};

use crate::models::{ActivityDefinition, LoggedActivity};
use crate::storage::{self, records, StorageBackend};
use crate::time_utils::format_utc_rfc3339;

/// Append/remove-only collection of journal entries, persisted as the
/// `moodActivities` record.
pub struct Journal {
    storage: Arc<dyn StorageBackend>,
    entries: Vec<LoggedActivity>,
}

impl Journal {
    /// Load the journal from storage. A missing or corrupt record
    /// degrades to an empty journal.
    pub fn load(storage: Arc<dyn StorageBackend>) -> Self {
        let entries = storage::load_json_array(storage.as_ref(), records::LOGGED_ACTIVITIES);
        Self { storage, entries }
    }

    /// Log an activity on the given day.
    ///
    /// Snapshots the definition's current name/icon/points/category,
    /// stamps the real-time instant, appends, and persists best-effort.
    /// Blank notes are dropped.
    pub fn log(
        &mut self,
        activity: &ActivityDefinition,
        date: NaiveDate,
        notes: Option<&str>,
    ) -> &LoggedActivity {
        let now = Utc::now();
        let mut id = format!("{}-{}", activity.id, now.timestamp_micros());
        // Burst logging within one clock tick must still produce unique IDs
        while self.entries.iter().any(|e| e.id == id) {
            id.push('0');
        }

        let entry = LoggedActivity {
            id,
            activity_id: activity.id.clone(),
            name: activity.name.clone(),
            icon: if activity.icon.is_empty() {
                "⭐".to_string()
            } else {
                activity.icon.clone()
            },
            points: activity.points,
            category: activity.category,
            date,
            timestamp: format_utc_rfc3339(now),
            notes: notes
                .map(str::trim)
                .filter(|n| !n.is_empty())
                .map(String::from),
        };

        tracing::debug!(
            activity_id = %entry.activity_id,
            date = %entry.date,
            points = entry.points,
            "Logged activity"
        );

        self.entries.push(entry);
        self.persist();
        &self.entries[self.entries.len() - 1]
    }

    /// Delete the entry with the given ID, if present, and persist.
    pub fn remove(&mut self, id: &str) {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        if self.entries.len() != before {
            self.persist();
        }
    }

    /// Entries attributed to one calendar day.
    pub fn for_date(&self, date: NaiveDate) -> Vec<&LoggedActivity> {
        self.entries.iter().filter(|e| e.date == date).collect()
    }

    /// The full history, insertion order.
    pub fn all(&self) -> &[LoggedActivity] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Re-read the persisted copy, e.g. after another session wrote it.
    /// Last write wins.
    pub fn refresh_from_storage(&mut self) {
        self.entries = storage::load_json_array(self.storage.as_ref(), records::LOGGED_ACTIVITIES);
    }

    fn persist(&self) {
        storage::store_json_array(
            self.storage.as_ref(),
            records::LOGGED_ACTIVITIES,
            &self.entries,
        );
    }
}
