//! Derived user statistics for the dashboard.
//!
//! Everything here is a projection recomputed from the journal on demand.
//! Only achievement unlock instants are persisted (see
//! [`crate::models::Achievement`]); the rest would drift if stored.

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::Achievement;

/// Headline statistics derived from the full journal.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
    /// Consecutive positive days ending at the most recent logged day
    pub current_streak: u32,
    /// Longest positive run ever recorded
    pub best_streak: u32,
    /// Total journal entries
    pub total_activities: u32,
    pub level: u32,
    pub experience: u32,
    pub achievements: Vec<Achievement>,
}

/// Leaderboard row for the most frequently logged activities.
///
/// Grouped by display name, so a renamed custom activity splits its
/// history between the old and new names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityFrequency {
    pub name: String,
    pub icon: String,
    pub count: u32,
    pub total_points: i32,
}

/// Per-category totals, ranked by accumulated points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryBreakdown {
    pub category: String,
    pub count: u32,
    pub total_points: i32,
}

/// One day in a trend series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub score: i32,
}

/// Time window for trend queries, anchored at "today".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendWindow {
    Week,
    Month,
    Year,
}
