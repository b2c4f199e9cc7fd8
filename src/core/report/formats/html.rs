//! HTML report generator
//!
//! Produces a self-contained page; cell highlight follows the grid state
//! (red for a hovered conflict, amber for a conflict, green for the preview).

use crate::core::report::{ReportContext, ReportGenerator, ScheduleView};
use askama::Template;
use std::error::Error;

#[derive(Template)]
#[template(path = "schedule.html")]
struct HtmlTemplate<'a> {
    view: &'a ScheduleView,
}

/// HTML report generator
#[derive(Debug, Default)]
pub struct HtmlReporter;

impl HtmlReporter {
    /// Create a new HTML reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl ReportGenerator for HtmlReporter {
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        let view = ScheduleView::build(ctx);
        Ok(HtmlTemplate { view: &view }.render()?)
    }
}
