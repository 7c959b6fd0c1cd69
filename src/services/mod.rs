// SPDX-License-Identifier: MIT

//! Services module - business logic layer.

pub mod catalog;
pub mod insights;
pub mod journal;
pub mod progression;

pub use catalog::{ActivityCatalog, ActivityPatch, NewActivity};
pub use journal::Journal;
pub use progression::StatSnapshot;
