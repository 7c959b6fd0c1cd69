// SPDX-License-Identifier: MIT

//! Aggregation engine: pure projections over the journal.
//!
//! Every function here recomputes from the entry slice it is given; there
//! is no hidden state, so calling on every render is safe at the
//! personal data volumes this tool sees.

use std::collections::BTreeMap;

use chrono::{Duration, Months, NaiveDate};

use crate::models::{
    ActivityFrequency, CategoryBreakdown, DailyMood, LoggedActivity, TrendPoint, TrendWindow,
};

/// Sum of points logged on one calendar day. Days without entries score 0.
pub fn daily_score(entries: &[LoggedActivity], date: NaiveDate) -> i32 {
    entries
        .iter()
        .filter(|e| e.date == date)
        .map(|e| e.points)
        .sum()
}

/// Entries bucketed by calendar day, ascending.
pub fn group_by_date(entries: &[LoggedActivity]) -> BTreeMap<NaiveDate, Vec<&LoggedActivity>> {
    let mut grouped: BTreeMap<NaiveDate, Vec<&LoggedActivity>> = BTreeMap::new();
    for entry in entries {
        grouped.entry(entry.date).or_default().push(entry);
    }
    grouped
}

/// One [`DailyMood`] per day with at least one entry, ascending by date.
pub fn daily_moods(entries: &[LoggedActivity]) -> Vec<DailyMood> {
    group_by_date(entries)
        .into_iter()
        .map(|(date, activities)| DailyMood {
            date,
            total_points: activities.iter().map(|a| a.points).sum(),
            activities: activities.into_iter().cloned().collect(),
        })
        .collect()
}

/// Days in the streak ending at the most recent logged day.
///
/// Scans backward over consecutive calendar dates with a positive score.
/// A non-positive day ends it, and so does a missing day: a day with no
/// entries has an implicit score of 0, which is not positive.
pub fn current_streak(moods: &[DailyMood]) -> u32 {
    let mut streak = 0;
    let mut expected: Option<NaiveDate> = None;

    for mood in moods.iter().rev() {
        if mood.total_points <= 0 {
            break;
        }
        if let Some(expected) = expected {
            if mood.date != expected {
                break;
            }
        }
        streak += 1;
        expected = Some(mood.date - Duration::days(1));
    }

    streak
}

/// Longest positive run ever recorded.
///
/// Forward scan with a running counter that resets on a non-positive day
/// or a calendar gap (implicit zero day), retaining the maximum.
pub fn best_streak(moods: &[DailyMood]) -> u32 {
    let mut best = 0;
    let mut run = 0;
    let mut previous: Option<NaiveDate> = None;

    for mood in moods {
        if let Some(previous) = previous {
            if mood.date != previous + Duration::days(1) {
                run = 0;
            }
        }
        if mood.total_points > 0 {
            run += 1;
            best = best.max(run);
        } else {
            run = 0;
        }
        previous = Some(mood.date);
    }

    best
}

/// Most frequently logged activities, count descending.
///
/// Grouped by display name rather than catalog ID, matching the recorded
/// behavior: a renamed custom activity splits its history between names.
pub fn top_activities(entries: &[LoggedActivity], limit: usize) -> Vec<ActivityFrequency> {
    let mut rows: Vec<ActivityFrequency> = Vec::new();
    for entry in entries {
        match rows.iter_mut().find(|r| r.name == entry.name) {
            Some(row) => {
                row.count += 1;
                row.total_points += entry.points;
            }
            None => rows.push(ActivityFrequency {
                name: entry.name.clone(),
                icon: entry.icon.clone(),
                count: 1,
                total_points: entry.points,
            }),
        }
    }

    rows.sort_by(|a, b| b.count.cmp(&a.count));
    rows.truncate(limit);
    rows
}

/// Per-category totals, accumulated points descending.
pub fn top_categories(entries: &[LoggedActivity], limit: usize) -> Vec<CategoryBreakdown> {
    let mut rows: Vec<CategoryBreakdown> = Vec::new();
    for entry in entries {
        let name = entry.category.as_str();
        match rows.iter_mut().find(|r| r.category == name) {
            Some(row) => {
                row.count += 1;
                row.total_points += entry.points;
            }
            None => rows.push(CategoryBreakdown {
                category: name.to_string(),
                count: 1,
                total_points: entry.points,
            }),
        }
    }

    rows.sort_by(|a, b| b.total_points.cmp(&a.total_points));
    rows.truncate(limit);
    rows
}

/// Daily scores within `[today - window, today]`, ascending.
pub fn trend(entries: &[LoggedActivity], window: TrendWindow, today: NaiveDate) -> Vec<TrendPoint> {
    let cutoff = match window {
        TrendWindow::Week => today - Duration::days(7),
        TrendWindow::Month => today.checked_sub_months(Months::new(1)).unwrap_or(today),
        TrendWindow::Year => today.checked_sub_months(Months::new(12)).unwrap_or(today),
    };

    daily_moods(entries)
        .into_iter()
        .filter(|m| m.date >= cutoff && m.date <= today)
        .map(|m| TrendPoint {
            date: m.date,
            score: m.total_points,
        })
        .collect()
}

/// Mean daily score over days with at least one entry. 0 for an empty
/// journal.
pub fn average_daily_score(entries: &[LoggedActivity]) -> f64 {
    let moods = daily_moods(entries);
    if moods.is_empty() {
        return 0.0;
    }
    let total: i32 = moods.iter().map(|m| m.total_points).sum();
    f64::from(total) / moods.len() as f64
}
