//! Cell command handler
//!
//! Answers the grid queries for a single `(day, hour)` cell.

use crate::args::SelectionArgs;
use crate::commands::build_selection;
use course_planner::core::catalog::Catalog;
use course_planner::core::grid::ScheduleGrid;
use course_planner::core::models::Day;
use course_planner::core::selection::SelectionStore;

/// Run the cell command
///
/// # Errors
/// Returns a printable message if `day` is not a recognized day name
pub fn run(day: &str, hour: u32, selection: &SelectionArgs, catalog: &Catalog) -> Result<(), String> {
    let day: Day = day.parse().map_err(|e| format!("✗ {e}"))?;
    let store = build_selection(catalog, selection);
    print!("{}", describe_cell(&store, day, hour));
    Ok(())
}

/// Text report of one cell: state then the courses stacked in it
pub fn describe_cell(store: &SelectionStore, day: Day, hour: u32) -> String {
    let grid = ScheduleGrid::from_store(store);
    let courses = grid.courses_for_cell(day, hour);

    let mut out = format!("{day} period {hour}: {}\n", grid.cell_state(day, hour));
    if courses.is_empty() {
        out.push_str("  (empty)\n");
    }
    for course in courses {
        let tag = if store.contains(&course.id) {
            ""
        } else {
            " (preview)"
        };
        out.push_str(&format!("  {} {}{tag}\n", course.display_code(), course.name));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use course_planner::core::models::{Course, TimeSlot};

    fn course(code: &str, slots: &[(Day, u32)]) -> Course {
        let mut course = Course::new(
            code.to_string(),
            format!("{code} name"),
            "Staff".to_string(),
            "DEPT".to_string(),
        );
        course.time = slots.iter().map(|&(d, h)| TimeSlot::new(d, h)).collect();
        course
    }

    #[test]
    fn test_describe_hovered_conflict_cell() {
        let mut store = SelectionStore::new();
        store.add_course(course("A", &[(Day::Monday, 1)]));
        store.set_hovered_course(Some(&course("D", &[(Day::Monday, 1)])));

        let text = describe_cell(&store, Day::Monday, 1);
        assert!(text.starts_with("Monday period 1: hovered-conflict"));
        assert!(text.contains("  A A name\n"));
        assert!(text.contains("  D D name (preview)\n"));
    }

    #[test]
    fn test_describe_empty_cell() {
        let store = SelectionStore::new();
        let text = describe_cell(&store, Day::Friday, 8);
        assert_eq!(text, "Friday period 8: empty\n  (empty)\n");
    }

    #[test]
    fn test_unknown_day_is_rejected() {
        let catalog = Catalog::default();
        let args = SelectionArgs {
            add: Vec::new(),
            hover: None,
        };
        assert!(run("Funday", 1, &args, &catalog).is_err());
    }
}
