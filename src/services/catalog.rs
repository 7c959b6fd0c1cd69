// SPDX-License-Identifier: MIT

//! Activity catalog service.
//!
//! Combines the fixed predefined activity list with the user's custom
//! activities. Custom entries live in the `customActivities` record and
//! the full list is rewritten after every mutation.

use std::sync::{Arc, OnceLock};

use validator::Validate;

use crate::models::{ActivityCategory, ActivityDefinition, LoggedActivity};
use crate::storage::{self, records, StorageBackend};

/// Draft for a user-created activity.
#[derive(Debug, Clone, Validate)]
pub struct NewActivity {
    #[validate(length(min = 1))]
    pub name: String,
    pub category: ActivityCategory,
    pub points: i32,
    pub description: Option<String>,
}

/// Partial update for a custom activity. `None` fields are left as-is.
#[derive(Debug, Clone, Default)]
pub struct ActivityPatch {
    pub name: Option<String>,
    pub category: Option<ActivityCategory>,
    pub points: Option<i32>,
    pub description: Option<String>,
}

/// Predefined + custom activity definitions.
pub struct ActivityCatalog {
    storage: Arc<dyn StorageBackend>,
    custom: Vec<ActivityDefinition>,
}

impl ActivityCatalog {
    /// Load the custom list from storage. A missing or corrupt record
    /// degrades to an empty custom list.
    pub fn load(storage: Arc<dyn StorageBackend>) -> Self {
        let custom = storage::load_json_array(storage.as_ref(), records::CUSTOM_ACTIVITIES);
        Self { storage, custom }
    }

    /// The build-time activity list, in fixed presentation order.
    pub fn predefined() -> &'static [ActivityDefinition] {
        static PREDEFINED: OnceLock<Vec<ActivityDefinition>> = OnceLock::new();
        PREDEFINED.get_or_init(predefined_activities)
    }

    /// Predefined entries followed by custom entries in insertion order.
    pub fn list_all(&self) -> Vec<&ActivityDefinition> {
        Self::predefined().iter().chain(self.custom.iter()).collect()
    }

    /// The user's custom entries, insertion order.
    pub fn custom(&self) -> &[ActivityDefinition] {
        &self.custom
    }

    /// Look up a definition by ID across both sets.
    pub fn find_by_id(&self, id: &str) -> Option<&ActivityDefinition> {
        Self::predefined()
            .iter()
            .find(|a| a.id == id)
            .or_else(|| self.custom.iter().find(|a| a.id == id))
    }

    /// Create a custom activity and persist the custom list.
    ///
    /// The icon is derived from the category. An invalid draft (empty
    /// name) is a no-op returning `None`.
    pub fn create(&mut self, draft: NewActivity) -> Option<&ActivityDefinition> {
        let name = draft.name.trim().to_string();
        let draft = NewActivity { name, ..draft };
        if draft.validate().is_err() {
            tracing::debug!("Rejected custom activity with empty name");
            return None;
        }

        let mut millis = chrono::Utc::now().timestamp_millis();
        let mut id = format!("custom-{millis}");
        // Two creations in the same millisecond must not share an ID
        while self.find_by_id(&id).is_some() {
            millis += 1;
            id = format!("custom-{millis}");
        }

        let activity = ActivityDefinition {
            id,
            name: draft.name,
            category: draft.category,
            points: draft.points,
            icon: draft.category.default_icon().to_string(),
            description: draft.description.filter(|d| !d.trim().is_empty()),
        };

        self.custom.push(activity);
        self.persist();
        self.custom.last()
    }

    /// Apply a patch to a custom activity and persist the custom list.
    ///
    /// Predefined entries are immutable, and a patch that would blank the
    /// name is rejected; both cases are no-ops. Changing the category
    /// re-derives the icon.
    pub fn update(&mut self, id: &str, patch: ActivityPatch) {
        if Self::predefined().iter().any(|a| a.id == id) {
            tracing::debug!(id, "Ignoring update to predefined activity");
            return;
        }
        let Some(activity) = self.custom.iter_mut().find(|a| a.id == id) else {
            return;
        };

        if let Some(name) = &patch.name {
            if name.trim().is_empty() {
                tracing::debug!(id, "Ignoring update with empty name");
                return;
            }
        }

        if let Some(name) = patch.name {
            activity.name = name.trim().to_string();
        }
        if let Some(category) = patch.category {
            if category != activity.category {
                activity.icon = category.default_icon().to_string();
            }
            activity.category = category;
        }
        if let Some(points) = patch.points {
            activity.points = points;
        }
        if let Some(description) = patch.description {
            activity.description = Some(description).filter(|d| !d.trim().is_empty());
        }

        self.persist();
    }

    /// Remove a custom activity and persist the custom list.
    ///
    /// No-op for predefined or unknown IDs.
    pub fn delete(&mut self, id: &str) {
        let before = self.custom.len();
        self.custom.retain(|a| a.id != id);
        if self.custom.len() != before {
            self.persist();
        }
    }

    /// Positive-point activities, highest reward first.
    pub fn suggested(&self, limit: usize) -> Vec<&ActivityDefinition> {
        let mut positive: Vec<&ActivityDefinition> = self
            .list_all()
            .into_iter()
            .filter(|a| a.points > 0)
            .collect();
        positive.sort_by(|a, b| b.points.cmp(&a.points));
        positive.truncate(limit);
        positive
    }

    /// Quick-add shortcuts: the user's most frequently logged definitions,
    /// padded with the highest-point remaining activities up to `limit`.
    pub fn quick_add(&self, entries: &[LoggedActivity], limit: usize) -> Vec<&ActivityDefinition> {
        let mut counts: Vec<(&str, u32)> = Vec::new();
        for entry in entries {
            match counts.iter_mut().find(|(id, _)| *id == entry.activity_id) {
                Some((_, n)) => *n += 1,
                None => counts.push((entry.activity_id.as_str(), 1)),
            }
        }
        counts.sort_by(|a, b| b.1.cmp(&a.1));

        let mut picks: Vec<&ActivityDefinition> = counts
            .iter()
            .take(limit)
            .filter_map(|(id, _)| self.find_by_id(id))
            .collect();

        if picks.len() < limit {
            let mut fillers: Vec<&ActivityDefinition> = self
                .list_all()
                .into_iter()
                .filter(|a| !picks.iter().any(|p| p.id == a.id))
                .collect();
            fillers.sort_by(|a, b| b.points.cmp(&a.points));
            let missing = limit - picks.len();
            picks.extend(fillers.into_iter().take(missing));
        }

        picks
    }

    /// Re-read the custom list from storage, e.g. after another session
    /// wrote it. Last write wins.
    pub fn refresh_from_storage(&mut self) {
        self.custom =
            storage::load_json_array(self.storage.as_ref(), records::CUSTOM_ACTIVITIES);
    }

    fn persist(&self) {
        storage::store_json_array(self.storage.as_ref(), records::CUSTOM_ACTIVITIES, &self.custom);
    }
}

fn def(
    id: &str,
    name: &str,
    category: ActivityCategory,
    icon: &str,
    points: i32,
    description: &str,
) -> ActivityDefinition {
    ActivityDefinition {
        id: id.to_string(),
        name: name.to_string(),
        category,
        points,
        icon: icon.to_string(),
        description: Some(description.to_string()),
    }
}

fn predefined_activities() -> Vec<ActivityDefinition> {
    use ActivityCategory::*;

    vec![
        // Hobbies
        def("surf", "Surf", Hobbies, "🏄", 5, "Going surfing"),
        def("surfskate", "SurfSkate", Hobbies, "🛹", 4, "SurfSkate session"),
        def(
            "reading-fiction",
            "Reading Fiction",
            Hobbies,
            "📚",
            3,
            "Reading fiction books",
        ),
        // Sports & exercise
        def(
            "natural-gymnastics",
            "Natural Gymnastics",
            Exercise,
            "🤸",
            5,
            "Natural gymnastics training",
        ),
        def("cycling", "Cycling", Exercise, "🚴", 4, "Going for a bike ride"),
        def("swimming", "Swimming", Exercise, "🏊", 4, "Swimming session"),
        def("walking", "Walking", Exercise, "🚶", 3, "Going for a walk"),
        // Obligations & responsibilities
        def("work", "Work", Work, "💼", 2, "Working on professional tasks"),
        def(
            "family-tasks",
            "Family Tasks",
            Obligations,
            "👨‍👩‍👧‍",
            2,
            "Taking care of family-related responsibilities",
        ),
        def(
            "home-maintenance",
            "Home Maintenance",
            Obligations,
            "🏡",
            2,
            "Taking care of home maintenance tasks",
        ),
        // Personal growth
        def(
            "reading-non-fiction",
            "Reading Non-Fiction",
            PersonalGrowth,
            "📖",
            4,
            "Reading educational or self-improvement materials",
        ),
        def(
            "learning",
            "Learning Something New",
            PersonalGrowth,
            "🧠",
            5,
            "Learning a new skill or concept",
        ),
        def(
            "personal-projects",
            "Personal Projects",
            PersonalGrowth,
            "🛠️",
            4,
            "Working on personal development projects",
        ),
        // Other
        def(
            "travel-planning",
            "Travel Planning",
            Other,
            "✈️",
            3,
            "Planning trips or travel activities",
        ),
        def(
            "outdoors",
            "Spending Time Outdoors",
            Other,
            "🌲",
            4,
            "Spending time in nature",
        ),
        def(
            "exploring",
            "Exploring New Places",
            Other,
            "🗺️",
            4,
            "Exploring new restaurants, cafes, or cultural spots",
        ),
        // Negative activities
        def("fast-food", "Fast Food", Food, "🍔", -3, "Eating fast food"),
        def(
            "skip-workout",
            "Skip Workout",
            Exercise,
            "🚫",
            -2,
            "Skipping planned workout",
        ),
        def(
            "procrastination",
            "Procrastination",
            Work,
            "⏳",
            -3,
            "Unproductive time or procrastination",
        ),
    ]
}
