//! Schedule command handler
//!
//! Renders the weekly grid for the selection given on the command line.

use crate::args::SelectionArgs;
use crate::commands::build_selection;
use course_planner::config::Config;
use course_planner::core::catalog::Catalog;
use course_planner::core::report::{ReportContext, ReportFormat};
use course_planner::{error, info};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Where the rendered report goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    /// Print to stdout
    Stdout,
    /// Write to this file
    File(PathBuf),
}

impl Destination {
    /// Resolve `--output` / `--save` against the configured reports directory
    #[must_use]
    pub fn resolve(
        output: Option<PathBuf>,
        save: bool,
        reports_dir: &str,
        title: &str,
        format: ReportFormat,
    ) -> Self {
        match output {
            Some(path) => Self::File(path),
            None if save => Self::File(
                Path::new(reports_dir).join(format!("{}.{}", slug(title), format.extension())),
            ),
            None => Self::Stdout,
        }
    }
}

/// File-name-safe form of a report title
fn slug(title: &str) -> String {
    let slug: String = title
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect();
    let slug = slug.trim_matches('_').to_string();
    if slug.is_empty() {
        "schedule".to_string()
    } else {
        slug
    }
}

/// Run the schedule command
///
/// # Errors
/// Returns a printable message if the format is unknown or rendering fails
pub fn run(
    selection: &SelectionArgs,
    format_str: &str,
    destination: Option<PathBuf>,
    save: bool,
    title: &str,
    catalog: &Catalog,
    config: &Config,
) -> Result<(), String> {
    let format = ReportFormat::from_str(format_str).map_err(|e| format!("✗ {e}"))?;
    let store = build_selection(catalog, selection);
    let ctx = ReportContext::new(title, &store, &config.schedule);
    let reporter = format.reporter();

    match Destination::resolve(destination, save, &config.paths.reports_dir, title, format) {
        Destination::Stdout => {
            let content = reporter.render(&ctx).map_err(|e| {
                error!("Schedule render failed: {e}");
                format!("✗ Failed to render schedule: {e}")
            })?;
            print!("{content}");
        }
        Destination::File(path) => {
            reporter.generate(&ctx, &path).map_err(|e| {
                error!("Schedule report failed for {}: {e}", path.display());
                format!("✗ Failed to write {}: {e}", path.display())
            })?;
            info!("Schedule report written: {}", path.display());
            println!("✓ Report generated: {}", path.display());
        }
    }

    let conflicts = store.conflicting_ids();
    if !conflicts.is_empty() {
        let ids: Vec<&str> = conflicts.iter().map(String::as_str).collect();
        eprintln!("⚠ Conflicting courses: {}", ids.join(", "));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug() {
        assert_eq!(slug("Fall 2024 Plan"), "fall_2024_plan");
        assert_eq!(slug("***"), "schedule");
    }

    #[test]
    fn test_destination_resolution() {
        assert_eq!(
            Destination::resolve(None, false, "reports", "Plan", ReportFormat::Html),
            Destination::Stdout
        );
        assert_eq!(
            Destination::resolve(None, true, "reports", "My Plan", ReportFormat::Html),
            Destination::File(PathBuf::from("reports/my_plan.html"))
        );
        assert_eq!(
            Destination::resolve(
                Some(PathBuf::from("out.md")),
                true,
                "reports",
                "Plan",
                ReportFormat::Markdown
            ),
            Destination::File(PathBuf::from("out.md"))
        );
    }

    #[test]
    fn test_unknown_format() {
        let selection = SelectionArgs {
            add: Vec::new(),
            hover: None,
        };
        let result = run(
            &selection,
            "pdf",
            None,
            false,
            "Plan",
            &Catalog::default(),
            &Config::default(),
        );
        assert!(result.is_err());
    }
}
