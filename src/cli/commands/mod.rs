//! CLI command handlers for the course planner.
//!
//! Each command is implemented in its own submodule. Handlers that need course
//! data share the catalog loading and selection building helpers below.

pub mod catalog;
pub mod cell;
pub mod config;
pub mod schedule;

use crate::args::SelectionArgs;
use course_planner::config::Config;
use course_planner::core::catalog::{load_catalog_file, Catalog};
use course_planner::core::selection::SelectionStore;
use course_planner::{debug, error, info, warn};

/// Load the catalog named by `paths.catalog`
///
/// # Errors
/// Returns a printable message if no catalog is configured or it fails to load
pub fn load_catalog(config: &Config) -> Result<Catalog, String> {
    let path = &config.paths.catalog;
    if path.is_empty() {
        return Err(
            "✗ No catalog configured. Pass --catalog PATH or run `courseplanner config set catalog PATH`"
                .to_string(),
        );
    }

    let catalog = load_catalog_file(path).map_err(|e| {
        error!("Catalog load failed for {path}: {e}");
        format!("✗ Failed to load catalog {path}: {e}")
    })?;

    for id in catalog.dropped_duplicates() {
        eprintln!("⚠ Duplicate course id '{id}' ignored (first occurrence kept)");
    }
    Ok(catalog)
}

/// Rebuild the session selection from `--add` and `--hover`
///
/// Unknown ids are reported on stderr and skipped.
pub fn build_selection(catalog: &Catalog, selection: &SelectionArgs) -> SelectionStore {
    let mut store = SelectionStore::new();

    for id in &selection.add {
        match catalog.get(id) {
            Some(course) => {
                if !store.add_course(course.clone()) {
                    debug!("Course {id} listed twice, ignoring repeat");
                }
            }
            None => {
                warn!("Unknown course id: {id}");
                eprintln!("✗ Unknown course id '{id}', skipped");
            }
        }
    }

    if let Some(id) = &selection.hover {
        match catalog.get(id) {
            Some(course) => {
                if store.set_hovered_course(Some(course)).is_none() {
                    info!("Hovered course {id} is already added; no preview");
                }
            }
            None => {
                warn!("Unknown hover course id: {id}");
                eprintln!("✗ Unknown course id '{id}', no preview");
            }
        }
    }

    debug!(
        "Selection built: {} added, {} conflicting",
        store.added_courses().len(),
        store.conflicting_ids().len()
    );
    store
}
