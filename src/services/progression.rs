// SPDX-License-Identifier: MIT

//! Progression engine: experience, levels, and achievement unlocks.

use chrono::{DateTime, Utc};

use crate::models::achievement::ids;
use crate::models::Achievement;
use crate::time_utils::format_utc_rfc3339;

/// Experience per logged activity.
///
/// Flat regardless of the activity's point value; the points feed the
/// mood score, not the level curve.
const EXPERIENCE_PER_ACTIVITY: u32 = 10;

/// The stats achievement predicates are tested against.
#[derive(Debug, Clone, Copy)]
pub struct StatSnapshot {
    pub total_activities: u32,
    pub current_streak: u32,
}

/// Cumulative experience for a number of logged activities.
pub fn experience_for(activity_count: u32) -> u32 {
    activity_count * EXPERIENCE_PER_ACTIVITY
}

/// Level for an experience total: `floor(sqrt(xp / 100)) + 1`.
///
/// Monotonic non-decreasing; level 1 at zero experience.
pub fn level_for(experience: u32) -> u32 {
    (f64::from(experience) / 100.0).sqrt().floor() as u32 + 1
}

/// Experience threshold at which `level` begins: `(level - 1)^2 * 100`.
/// Used as the progress-bar denominator.
pub fn experience_for_next_level(level: u32) -> u32 {
    level.saturating_sub(1).pow(2) * 100
}

/// Evaluate the badge predicates and stamp first unlocks with `now`.
///
/// Already-unlocked badges pass through untouched, so a badge stays
/// unlocked even if the stats later regress below its threshold.
pub fn evaluate_achievements(
    achievements: Vec<Achievement>,
    stats: &StatSnapshot,
    now: DateTime<Utc>,
) -> Vec<Achievement> {
    achievements
        .into_iter()
        .map(|mut achievement| {
            if achievement.is_unlocked() {
                return achievement;
            }

            let unlocked = match achievement.id.as_str() {
                ids::FIRST_ACTIVITY => stats.total_activities >= 1,
                ids::WEEK_STREAK => stats.current_streak >= 7,
                ids::MONTH_STREAK => stats.current_streak >= 30,
                ids::HUNDRED_ACTIVITIES => stats.total_activities >= 100,
                _ => false,
            };

            if unlocked {
                tracing::info!(id = %achievement.id, "Achievement unlocked");
                achievement.unlocked_at = Some(format_utc_rfc3339(now));
            }
            achievement
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::achievement::catalog;

    fn stats(total: u32, streak: u32) -> StatSnapshot {
        StatSnapshot {
            total_activities: total,
            current_streak: streak,
        }
    }

    fn now() -> DateTime<Utc> {
        "2024-01-15T12:00:00Z".parse().unwrap()
    }

    #[test]
    fn test_level_one_at_zero_experience() {
        assert_eq!(level_for(0), 1);
    }

    #[test]
    fn test_level_curve() {
        assert_eq!(level_for(99), 1);
        assert_eq!(level_for(100), 2);
        assert_eq!(level_for(399), 2);
        assert_eq!(level_for(400), 3);
        assert_eq!(level_for(900), 4);
    }

    #[test]
    fn test_level_monotonic_in_activity_count() {
        let mut previous = 0;
        for count in 0..500 {
            let level = level_for(experience_for(count));
            assert!(level >= previous);
            previous = level;
        }
    }

    #[test]
    fn test_next_level_threshold_is_curve_inverse() {
        assert_eq!(experience_for_next_level(1), 0);
        assert_eq!(experience_for_next_level(2), 100);
        assert_eq!(experience_for_next_level(3), 400);

        // Round-trip: the threshold for the current level never exceeds
        // the experience that produced it, and is a non-decreasing step
        let mut previous_threshold = 0;
        for experience in (0..2000).step_by(10) {
            let threshold = experience_for_next_level(level_for(experience));
            assert!(threshold <= experience);
            assert!(threshold >= previous_threshold);
            previous_threshold = threshold;
        }
    }

    #[test]
    fn test_first_activity_unlocks_at_one() {
        let evaluated = evaluate_achievements(catalog(), &stats(1, 0), now());

        let first = evaluated.iter().find(|a| a.id == ids::FIRST_ACTIVITY).unwrap();
        assert_eq!(first.unlocked_at.as_deref(), Some("2024-01-15T12:00:00Z"));

        let week = evaluated.iter().find(|a| a.id == ids::WEEK_STREAK).unwrap();
        assert!(!week.is_unlocked());
    }

    #[test]
    fn test_streak_badges_unlock_at_thresholds() {
        let evaluated = evaluate_achievements(catalog(), &stats(50, 30), now());

        assert!(evaluated.iter().find(|a| a.id == ids::WEEK_STREAK).unwrap().is_unlocked());
        assert!(evaluated.iter().find(|a| a.id == ids::MONTH_STREAK).unwrap().is_unlocked());
        assert!(!evaluated
            .iter()
            .find(|a| a.id == ids::HUNDRED_ACTIVITIES)
            .unwrap()
            .is_unlocked());
    }

    #[test]
    fn test_unlock_survives_stat_regression() {
        let unlocked = evaluate_achievements(catalog(), &stats(10, 7), now());
        let later: DateTime<Utc> = "2024-02-01T00:00:00Z".parse().unwrap();

        // Streak has since collapsed to zero
        let re_evaluated = evaluate_achievements(unlocked, &stats(10, 0), later);

        let week = re_evaluated.iter().find(|a| a.id == ids::WEEK_STREAK).unwrap();
        // Still unlocked, and the original unlock instant is retained
        assert_eq!(week.unlocked_at.as_deref(), Some("2024-01-15T12:00:00Z"));
    }

    #[test]
    fn test_unknown_badge_id_stays_locked() {
        let mut badges = catalog();
        badges.push(Achievement {
            id: "unmapped-badge".to_string(),
            name: "Unmapped".to_string(),
            description: "No predicate".to_string(),
            icon: "❓".to_string(),
            unlocked_at: None,
        });

        let evaluated = evaluate_achievements(badges, &stats(1000, 1000), now());
        let unmapped = evaluated.iter().find(|a| a.id == "unmapped-badge").unwrap();
        assert!(!unmapped.is_unlocked());
    }
}
