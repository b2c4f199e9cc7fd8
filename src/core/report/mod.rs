//! Schedule report generation
//!
//! Renders the weekly grid, the added courses and their conflicts in Markdown or
//! HTML. Both formats share one flattened [`ScheduleView`] so the askama
//! templates only deal with strings and flags.

pub mod formats;

use crate::core::config::ScheduleConfig;
use crate::core::conflicts::conflict_pairs;
use crate::core::grid::{CellState, ScheduleGrid};
use crate::core::selection::SelectionStore;
use std::error::Error;
use std::fs;
use std::path::Path;

pub use formats::{HtmlReporter, MarkdownReporter, ReportFormat};

/// Data needed to render a schedule report
#[derive(Debug, Clone, Copy)]
pub struct ReportContext<'a> {
    /// Report heading
    pub title: &'a str,
    /// Selection being reported
    pub store: &'a SelectionStore,
    /// Grid shape and clock labels
    pub schedule: &'a ScheduleConfig,
}

impl<'a> ReportContext<'a> {
    /// Create a new report context
    #[must_use]
    pub const fn new(title: &'a str, store: &'a SelectionStore, schedule: &'a ScheduleConfig) -> Self {
        Self {
            title,
            store,
            schedule,
        }
    }
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Render the report and write it to `output_path`
    ///
    /// # Errors
    /// Returns an error if rendering or file writing fails
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let content = self.render(ctx)?;
        if let Some(parent) = output_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(output_path, content)?;
        Ok(())
    }

    /// Render the report as a string
    ///
    /// # Errors
    /// Returns an error if template rendering fails
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>>;
}

/// One grid cell, flattened for templates
#[derive(Debug, Clone)]
pub struct CellView {
    /// Course codes in stacking order
    pub codes: Vec<String>,
    /// [`CellState`] class name
    pub state: &'static str,
    /// Short text marker for plain-text formats
    pub marker: &'static str,
}

/// One grid row
#[derive(Debug, Clone)]
pub struct RowView {
    /// Clock label, e.g. "9:00"
    pub label: String,
    /// Cells in day order
    pub cells: Vec<CellView>,
}

/// One added course
#[derive(Debug, Clone)]
pub struct CourseView {
    /// Display code
    pub code: String,
    /// Course name
    pub name: String,
    /// Lecturer
    pub instructor: String,
    /// Formatted local credits
    pub credit: String,
    /// Formatted ECTS
    pub ects: String,
    /// Conflicts with another added course
    pub conflicting: bool,
}

/// The hover preview line
#[derive(Debug, Clone)]
pub struct HoverView {
    /// Display code
    pub code: String,
    /// Course name
    pub name: String,
    /// Overlaps an added course
    pub conflicting: bool,
}

/// Everything a template needs, as plain strings and flags
#[derive(Debug, Clone)]
pub struct ScheduleView {
    /// Report heading
    pub title: String,
    /// Column headers (day abbreviations)
    pub days: Vec<String>,
    /// Grid rows
    pub rows: Vec<RowView>,
    /// Added courses
    pub courses: Vec<CourseView>,
    /// Conflict descriptions, one per clashing pair
    pub conflicts: Vec<String>,
    /// Hover preview, if any
    pub hover: Option<HoverView>,
    /// Formatted credit total
    pub total_credits: String,
    /// Formatted ECTS total
    pub total_ects: String,
}

const fn marker(state: CellState) -> &'static str {
    match state {
        CellState::HoveredConflict => "✗ ",
        CellState::Conflicting => "⚠ ",
        CellState::Hovered => "+ ",
        CellState::Normal | CellState::Empty => "",
    }
}

impl ScheduleView {
    /// Flatten a report context
    #[must_use]
    pub fn build(ctx: &ReportContext) -> Self {
        let store = ctx.store;
        let layout = ctx.schedule.layout();
        let grid = ScheduleGrid::from_store(store);
        let conflicting = store.conflicting_ids();

        let rows = grid
            .cells(&layout)
            .into_iter()
            .map(|row| RowView {
                label: ctx.schedule.clock_label(row.hour),
                cells: row
                    .cells
                    .into_iter()
                    .map(|cell| CellView {
                        codes: cell.courses.iter().map(|c| c.code.clone()).collect(),
                        state: cell.state.as_str(),
                        marker: marker(cell.state),
                    })
                    .collect(),
            })
            .collect();

        let courses = store
            .added_courses()
            .iter()
            .map(|c| CourseView {
                code: c.display_code(),
                name: c.name.clone(),
                instructor: c.instructor.clone(),
                credit: format!("{:.1}", c.credit),
                ects: format!("{:.1}", c.ects),
                conflicting: conflicting.contains(&c.id),
            })
            .collect();

        let conflicts = conflict_pairs(store.added_courses())
            .into_iter()
            .map(|pair| {
                let slots: Vec<String> = pair.shared_slots.iter().map(ToString::to_string).collect();
                format!("{} / {} at {}", pair.first, pair.second, slots.join(", "))
            })
            .collect();

        let hover = store.hovered().map(|preview| HoverView {
            code: preview.course.display_code(),
            name: preview.course.name.clone(),
            conflicting: preview.conflicting,
        });

        Self {
            title: ctx.title.to_string(),
            days: layout
                .days
                .iter()
                .map(|d| d.abbreviation().to_string())
                .collect(),
            rows,
            courses,
            conflicts,
            hover,
            total_credits: format!("{:.1}", store.total_credits()),
            total_ects: format!("{:.1}", store.total_ects()),
        }
    }
}
