// SPDX-License-Identifier: MIT

//! Data models for the application.

pub mod achievement;
pub mod activity;
pub mod mood;
pub mod stats;

pub use achievement::Achievement;
pub use activity::{ActivityCategory, ActivityDefinition, LoggedActivity};
pub use mood::{DailyMood, MoodBand};
pub use stats::{ActivityFrequency, CategoryBreakdown, TrendPoint, TrendWindow, UserStats};
