// SPDX-License-Identifier: MIT

//! Custom-activity lifecycle and the denormalization invariant.

mod common;

use common::{day, test_tracker};
use moodlog::models::ActivityCategory;
use moodlog::services::{ActivityPatch, NewActivity};

fn pottery() -> NewActivity {
    NewActivity {
        name: "Pottery".to_string(),
        category: ActivityCategory::Hobbies,
        points: 4,
        description: Some("Wheel throwing".to_string()),
    }
}

#[test]
fn empty_name_is_rejected_without_side_effects() {
    let (mut tracker, storage) = test_tracker();

    let created = tracker.catalog.create(NewActivity {
        name: "  ".to_string(),
        ..pottery()
    });

    assert!(created.is_none());
    assert!(tracker.catalog.custom().is_empty());
    // Nothing was persisted either
    assert!(storage
        .raw_record(moodlog::storage::records::CUSTOM_ACTIVITIES)
        .is_none());
}

#[test]
fn renaming_a_custom_activity_leaves_history_frozen() {
    let (mut tracker, _) = test_tracker();
    let id = tracker.catalog.create(pottery()).unwrap().id.clone();

    for d in 1..=3 {
        tracker.log_activity(&id, day(2024, 3, d), None);
    }

    tracker.catalog.update(
        &id,
        ActivityPatch {
            name: Some("Ceramics".to_string()),
            points: Some(1),
            ..Default::default()
        },
    );

    // The catalog entry changed...
    let updated = tracker.catalog.find_by_id(&id).unwrap();
    assert_eq!(updated.name, "Ceramics");
    assert_eq!(updated.points, 1);

    // ...but all three historical entries keep their snapshot
    let history = tracker.journal.all();
    assert_eq!(history.len(), 3);
    for entry in history {
        assert_eq!(entry.name, "Pottery");
        assert_eq!(entry.points, 4);
    }

    // New logs pick up the new definition
    let fresh = tracker.log_activity(&id, day(2024, 3, 4), None).unwrap();
    assert_eq!(fresh.name, "Ceramics");
    assert_eq!(fresh.points, 1);
}

#[test]
fn deleting_a_definition_keeps_its_logged_entries() {
    let (mut tracker, _) = test_tracker();
    let id = tracker.catalog.create(pottery()).unwrap().id.clone();
    tracker.log_activity(&id, day(2024, 3, 1), None);

    tracker.catalog.delete(&id);

    assert!(tracker.catalog.find_by_id(&id).is_none());
    // The dangling activity_id reference is allowed by design
    assert_eq!(tracker.journal.all().len(), 1);
    assert_eq!(tracker.journal.all()[0].activity_id, id);
    // And logging the deleted ID is now a no-op
    assert!(tracker.log_activity(&id, day(2024, 3, 2), None).is_none());
}

#[test]
fn corrupt_custom_record_degrades_to_defaults_only() {
    let (_, storage) = test_tracker();
    use moodlog::storage::StorageBackend;
    storage
        .write_record(moodlog::storage::records::CUSTOM_ACTIVITIES, "not json at all")
        .unwrap();

    let tracker = moodlog::MoodTracker::with_storage(storage);
    assert!(tracker.catalog.custom().is_empty());
    // Predefined catalog is unaffected
    assert!(tracker.catalog.find_by_id("surf").is_some());
}

#[test]
fn quick_add_prefers_frequent_then_high_points() {
    let (mut tracker, _) = test_tracker();
    // Walking logged most, then work
    for d in 1..=4 {
        tracker.log_activity("walking", day(2024, 3, d), None);
    }
    tracker.log_activity("work", day(2024, 3, 1), None);

    let picks = tracker.catalog.quick_add(tracker.journal.all(), 6);

    assert_eq!(picks.len(), 6);
    assert_eq!(picks[0].id, "walking");
    assert_eq!(picks[1].id, "work");
    // Padding comes from the highest-reward definitions: the three
    // 5-point activities, then the best 4-pointer
    assert!(picks[2..5].iter().all(|a| a.points == 5));
    assert_eq!(picks[5].points, 4);
}

#[test]
fn refresh_from_storage_picks_up_external_writes() {
    let (mut tracker, storage) = test_tracker();

    // A second session on the same backend logs an activity
    let mut other = moodlog::MoodTracker::with_storage(storage);
    other.log_activity("surf", day(2024, 3, 1), None);

    assert!(tracker.journal.is_empty());
    tracker.refresh_from_storage();
    assert_eq!(tracker.journal.len(), 1);
}
