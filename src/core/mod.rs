//! Core module for the planner engines

pub mod catalog;
pub mod config;
pub mod conflicts;
pub mod error;
pub mod grid;
pub mod models;
pub mod report;
pub mod selection;

/// Returns the current version of the `course-planner` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
