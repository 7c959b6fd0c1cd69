// SPDX-License-Identifier: MIT

//! Activity catalog and journal entry models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Category of a loggable activity.
///
/// Serialized using the display names the persisted records carry
/// (notably `"Personal Growth"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActivityCategory {
    Food,
    Exercise,
    Hobbies,
    Obligations,
    Work,
    #[serde(rename = "Personal Growth")]
    PersonalGrowth,
    Other,
}

impl ActivityCategory {
    /// Every category, in presentation order.
    pub const ALL: [ActivityCategory; 7] = [
        ActivityCategory::Food,
        ActivityCategory::Exercise,
        ActivityCategory::Hobbies,
        ActivityCategory::Obligations,
        ActivityCategory::Work,
        ActivityCategory::PersonalGrowth,
        ActivityCategory::Other,
    ];

    /// Display name, matching the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityCategory::Food => "Food",
            ActivityCategory::Exercise => "Exercise",
            ActivityCategory::Hobbies => "Hobbies",
            ActivityCategory::Obligations => "Obligations",
            ActivityCategory::Work => "Work",
            ActivityCategory::PersonalGrowth => "Personal Growth",
            ActivityCategory::Other => "Other",
        }
    }

    /// Default icon assigned to custom activities in this category.
    pub fn default_icon(&self) -> &'static str {
        match self {
            ActivityCategory::Food => "🍽️",
            ActivityCategory::Exercise => "🏃‍♂️",
            ActivityCategory::Hobbies => "🎨",
            ActivityCategory::Obligations => "📝",
            ActivityCategory::Work => "💼",
            ActivityCategory::PersonalGrowth => "🌱",
            ActivityCategory::Other => "⭐",
        }
    }
}

impl std::fmt::Display for ActivityCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Catalog entry describing a loggable activity and its mood-point weight.
///
/// Predefined entries are fixed at build time; custom entries are created
/// by the user and persisted in the `customActivities` record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityDefinition {
    /// Unique across the predefined and custom sets
    pub id: String,
    pub name: String,
    pub category: ActivityCategory,
    /// Mood-point weight; negative for detrimental activities
    pub points: i32,
    pub icon: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A record that a specific activity occurred on a specific day.
///
/// Name/icon/points/category are a denormalized snapshot of the catalog
/// entry at log time. Later edits to a custom activity never rewrite
/// these fields; historical scores are frozen.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoggedActivity {
    /// Unique entry ID, generated at log time
    pub id: String,
    /// Catalog ID of the logged definition (not guaranteed to still exist)
    pub activity_id: String,
    pub name: String,
    pub icon: String,
    pub points: i32,
    pub category: ActivityCategory,
    /// Calendar day the activity is attributed to
    pub date: NaiveDate,
    /// Exact log instant (RFC3339)
    pub timestamp: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}
