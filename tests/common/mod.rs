// SPDX-License-Identifier: MIT

use std::sync::Arc;

use chrono::NaiveDate;
use moodlog::storage::MemoryStorage;
use moodlog::MoodTracker;

/// Create a tracker on a fresh in-memory backend.
#[allow(dead_code)]
pub fn test_tracker() -> (MoodTracker, Arc<MemoryStorage>) {
    init_tracing();
    let storage = Arc::new(MemoryStorage::new());
    (MoodTracker::with_storage(storage.clone()), storage)
}

/// `YYYY-MM-DD` day shorthand for fixtures.
#[allow(dead_code)]
pub fn day(year: i32, month: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, d).expect("valid test date")
}

/// Install a test subscriber once; `RUST_LOG` controls verbosity.
pub fn init_tracing() {
    use std::sync::Once;
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}
