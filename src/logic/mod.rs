//! Business Logic
//!
//! Pure functions that can be unit tested without a terminal or a network:
//! - errors: Typed submission errors and their classification
//! - formatting: Confidence and verdict display strings
//! - history: Capped most-recent-first result ledger
//! - layout: Panel sizing and the expand animation
//! - normalize: Mapping service answers onto one result record
//! - tags: Tag frequency aggregation
//! - ui: UI state transitions and cycling

pub mod errors;
pub mod formatting;
pub mod history;
pub mod layout;
pub mod normalize;
pub mod tags;
pub mod ui;
