//! Markdown report generator
//!
//! The weekly grid becomes a Markdown table; stacked courses in one cell are
//! separated by `<br>`, which GitHub, GitLab and VS Code all render.

use crate::core::report::{ReportContext, ReportGenerator, ScheduleView};
use askama::Template;
use std::error::Error;

mod filters {
    /// Escape `|` so a value cannot split a Markdown table cell
    #[allow(clippy::unnecessary_wraps)]
    pub fn md_cell<T: std::fmt::Display>(value: T) -> ::askama::Result<String> {
        Ok(value.to_string().replace('|', "\\|"))
    }
}

#[derive(Template)]
#[template(path = "schedule.md", escape = "none")]
struct MarkdownTemplate<'a> {
    view: &'a ScheduleView,
}

/// Markdown report generator
#[derive(Debug, Default)]
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// Create a new Markdown reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl ReportGenerator for MarkdownReporter {
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        let view = ScheduleView::build(ctx);
        Ok(MarkdownTemplate { view: &view }.render()?)
    }
}
