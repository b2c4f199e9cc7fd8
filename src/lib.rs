//! Shared library for the course planner
//! Contains the catalog, selection, conflict and grid engines used by the CLI

pub mod core;
pub mod logger;

pub use core::{config, get_version};
