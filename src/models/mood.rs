// SPDX-License-Identifier: MIT

//! Derived per-day mood projections.

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::LoggedActivity;

/// One calendar day's mood: the sum of logged points plus the entries
/// that contributed.
///
/// Always recomputed from the journal; never persisted, so there is no
/// second source of truth to keep in sync.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyMood {
    pub date: NaiveDate,
    pub total_points: i32,
    pub activities: Vec<LoggedActivity>,
}

/// Coarse classification of a daily score, used for calendar cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MoodBand {
    Great,
    Good,
    Neutral,
    Low,
    Bad,
}

impl MoodBand {
    /// Band thresholds: >=5, >=2, >=0, >=-2, else.
    pub fn for_score(points: i32) -> Self {
        if points >= 5 {
            MoodBand::Great
        } else if points >= 2 {
            MoodBand::Good
        } else if points >= 0 {
            MoodBand::Neutral
        } else if points >= -2 {
            MoodBand::Low
        } else {
            MoodBand::Bad
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_thresholds() {
        assert_eq!(MoodBand::for_score(7), MoodBand::Great);
        assert_eq!(MoodBand::for_score(5), MoodBand::Great);
        assert_eq!(MoodBand::for_score(4), MoodBand::Good);
        assert_eq!(MoodBand::for_score(2), MoodBand::Good);
        assert_eq!(MoodBand::for_score(0), MoodBand::Neutral);
        assert_eq!(MoodBand::for_score(-1), MoodBand::Low);
        assert_eq!(MoodBand::for_score(-2), MoodBand::Low);
        assert_eq!(MoodBand::for_score(-3), MoodBand::Bad);
    }
}
