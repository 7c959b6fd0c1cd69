// SPDX-License-Identifier: MIT

//! Moodlog: log daily activities and track the mood score they add up to.
//!
//! This crate provides the core engine behind a personal mood tracker:
//! an activity catalog, an append-only journal of logged activities, and
//! pure aggregation/progression functions deriving daily moods, streaks,
//! levels, and achievement unlocks from the journal. Everything persists
//! as named JSON-array records behind a pluggable [`storage`] backend;
//! there is no server and no background work.

pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;
pub mod time_utils;

use std::sync::Arc;

use chrono::{NaiveDate, Utc};

use config::Config;
use models::{achievement, Achievement, DailyMood, LoggedActivity, MoodBand, UserStats};
use models::{ActivityFrequency, CategoryBreakdown, TrendPoint, TrendWindow};
use services::{insights, progression, ActivityCatalog, Journal, StatSnapshot};
use storage::{records, JsonFileStorage, StorageBackend};

/// The assembled tracker: catalog + journal + persisted badge state.
///
/// The journal is the single source of truth; [`MoodTracker::stats`] and
/// the query methods recompute their projections from it on every call.
pub struct MoodTracker {
    storage: Arc<dyn StorageBackend>,
    pub catalog: ActivityCatalog,
    pub journal: Journal,
    achievements: Vec<Achievement>,
}

impl MoodTracker {
    /// Open a tracker backed by JSON files in the configured data
    /// directory.
    pub fn open(config: &Config) -> Self {
        Self::with_storage(Arc::new(JsonFileStorage::new(config.data_dir.clone())))
    }

    /// Open a tracker on any storage backend. Missing or corrupt records
    /// degrade to a fresh-start state.
    pub fn with_storage(storage: Arc<dyn StorageBackend>) -> Self {
        let catalog = ActivityCatalog::load(storage.clone());
        let journal = Journal::load(storage.clone());
        let achievements = load_achievements(storage.as_ref());
        Self {
            storage,
            catalog,
            journal,
            achievements,
        }
    }

    /// Log a catalog activity on the given day and re-evaluate badges.
    ///
    /// Returns the appended entry, or `None` when the ID matches nothing
    /// in the catalog.
    pub fn log_activity(
        &mut self,
        activity_id: &str,
        date: NaiveDate,
        notes: Option<&str>,
    ) -> Option<LoggedActivity> {
        let definition = self.catalog.find_by_id(activity_id)?.clone();
        let entry = self.journal.log(&definition, date, notes).clone();
        self.refresh_achievements();
        Some(entry)
    }

    /// Delete a journal entry. Unlocked badges stay unlocked, but the
    /// remaining stats are re-evaluated: removing a negative entry can
    /// lengthen the current streak.
    pub fn remove_activity(&mut self, entry_id: &str) {
        self.journal.remove(entry_id);
        self.refresh_achievements();
    }

    /// Headline statistics derived from the full journal.
    pub fn stats(&self) -> UserStats {
        let moods = insights::daily_moods(self.journal.all());
        let total_activities = self.journal.len() as u32;
        let experience = progression::experience_for(total_activities);

        UserStats {
            current_streak: insights::current_streak(&moods),
            best_streak: insights::best_streak(&moods),
            total_activities,
            level: progression::level_for(experience),
            experience,
            achievements: self.achievements.clone(),
        }
    }

    /// Badge catalog with current unlock state.
    pub fn achievements(&self) -> &[Achievement] {
        &self.achievements
    }

    /// One day's mood: score plus the contributing entries.
    pub fn daily_mood(&self, date: NaiveDate) -> DailyMood {
        let activities: Vec<LoggedActivity> = self
            .journal
            .for_date(date)
            .into_iter()
            .cloned()
            .collect();
        DailyMood {
            date,
            total_points: activities.iter().map(|a| a.points).sum(),
            activities,
        }
    }

    /// Calendar-cell classification for one day's score.
    pub fn mood_band(&self, date: NaiveDate) -> MoodBand {
        MoodBand::for_score(insights::daily_score(self.journal.all(), date))
    }

    /// Daily scores within the window ending today.
    pub fn trend(&self, window: TrendWindow, today: NaiveDate) -> Vec<TrendPoint> {
        insights::trend(self.journal.all(), window, today)
    }

    /// Most frequently logged activities.
    pub fn top_activities(&self, limit: usize) -> Vec<ActivityFrequency> {
        insights::top_activities(self.journal.all(), limit)
    }

    /// Categories ranked by accumulated points.
    pub fn top_categories(&self, limit: usize) -> Vec<CategoryBreakdown> {
        insights::top_categories(self.journal.all(), limit)
    }

    /// Mean daily score over days with entries.
    pub fn average_daily_score(&self) -> f64 {
        insights::average_daily_score(self.journal.all())
    }

    /// Re-read all records from storage after an external change
    /// notification (e.g. another tab wrote them). Last write wins.
    pub fn refresh_from_storage(&mut self) {
        self.journal.refresh_from_storage();
        self.catalog.refresh_from_storage();
        self.achievements = load_achievements(self.storage.as_ref());
    }

    /// Evaluate badge predicates against the current journal and persist
    /// any new unlocks.
    fn refresh_achievements(&mut self) {
        let moods = insights::daily_moods(self.journal.all());
        let snapshot = StatSnapshot {
            total_activities: self.journal.len() as u32,
            current_streak: insights::current_streak(&moods),
        };

        let unlocked_before = self.achievements.iter().filter(|a| a.is_unlocked()).count();
        self.achievements = progression::evaluate_achievements(
            std::mem::take(&mut self.achievements),
            &snapshot,
            Utc::now(),
        );
        let unlocked_after = self.achievements.iter().filter(|a| a.is_unlocked()).count();

        if unlocked_after != unlocked_before {
            storage::store_json_array(
                self.storage.as_ref(),
                records::ACHIEVEMENTS,
                &self.achievements,
            );
        }
    }
}

/// Load badge state, merging persisted unlock instants into the canonical
/// catalog so badges added later still appear (locked).
fn load_achievements(backend: &dyn StorageBackend) -> Vec<Achievement> {
    let persisted: Vec<Achievement> = storage::load_json_array(backend, records::ACHIEVEMENTS);
    let mut badges = achievement::catalog();
    for badge in &mut badges {
        if let Some(saved) = persisted.iter().find(|p| p.id == badge.id) {
            badge.unlocked_at = saved.unlocked_at.clone();
        }
    }
    badges
}
