// SPDX-License-Identifier: MIT

//! Achievement badges and the static badge catalog.

use serde::{Deserialize, Serialize};

/// Stable achievement IDs, matched against predicates in
/// [`crate::services::progression`].
pub mod ids {
    pub const FIRST_ACTIVITY: &str = "first-activity";
    pub const WEEK_STREAK: &str = "week-streak";
    pub const MONTH_STREAK: &str = "month-streak";
    pub const HUNDRED_ACTIVITIES: &str = "hundred-activities";
}

/// A one-way unlockable badge tied to a stat threshold.
///
/// `unlocked_at` is stamped the first time the badge's predicate holds
/// and is never cleared afterwards, even if the underlying stat later
/// regresses below the threshold.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Achievement {
    pub id: String,
    pub name: String,
    pub description: String,
    pub icon: String,
    /// RFC3339 instant of first unlock; `None` while still locked
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unlocked_at: Option<String>,
}

impl Achievement {
    pub fn is_unlocked(&self) -> bool {
        self.unlocked_at.is_some()
    }
}

/// The canonical badge catalog, all locked.
///
/// Persisted copies are merged against this list on load so that badges
/// added in later versions appear locked rather than vanishing.
pub fn catalog() -> Vec<Achievement> {
    let defs: [(&str, &str, &str, &str); 4] = [
        (
            ids::FIRST_ACTIVITY,
            "First Activity",
            "Log your first activity",
            "🎯",
        ),
        (
            ids::WEEK_STREAK,
            "Week Warrior",
            "Maintain a positive streak for 7 days",
            "🔥",
        ),
        (
            ids::MONTH_STREAK,
            "Monthly Master",
            "Maintain a positive streak for 30 days",
            "🌟",
        ),
        (
            ids::HUNDRED_ACTIVITIES,
            "Century Club",
            "Log 100 activities",
            "🏆",
        ),
    ];

    defs.into_iter()
        .map(|(id, name, description, icon)| Achievement {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            icon: icon.to_string(),
            unlocked_at: None,
        })
        .collect()
}
