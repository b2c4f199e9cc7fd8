//! Weekly grid queries: which courses sit in a cell and how the cell is highlighted

use crate::core::models::{Course, Day, TimeSlot};
use crate::core::selection::{HoverPreview, SelectionStore};
use std::fmt;
use std::ops::RangeInclusive;

/// Highlight state of a grid cell, in descending precedence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellState {
    /// Several courses, one of them the hover preview
    HoveredConflict,
    /// Several courses, none of them the hover preview
    Conflicting,
    /// Only the hover preview
    Hovered,
    /// A single added course
    Normal,
    /// Nothing scheduled
    Empty,
}

impl CellState {
    /// Short class-style name used by the renderers
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::HoveredConflict => "hovered-conflict",
            Self::Conflicting => "conflict",
            Self::Hovered => "hovered",
            Self::Normal => "normal",
            Self::Empty => "empty",
        }
    }
}

impl fmt::Display for CellState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Days and period range shown on the grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekLayout {
    /// Columns, left to right
    pub days: Vec<Day>,
    /// Rows, top to bottom
    pub hours: RangeInclusive<u32>,
}

impl WeekLayout {
    /// Number of periods on the default grid
    pub const DEFAULT_HOURS: u32 = 8;

    /// Layout with `hours_per_day` periods, Monday to Friday or the full week
    #[must_use]
    pub fn new(hours_per_day: u32, include_weekend: bool) -> Self {
        let days = if include_weekend {
            Day::ALL.to_vec()
        } else {
            Day::WEEKDAYS.to_vec()
        };
        Self {
            days,
            hours: 1..=hours_per_day,
        }
    }
}

impl Default for WeekLayout {
    fn default() -> Self {
        Self::new(Self::DEFAULT_HOURS, false)
    }
}

/// One resolved cell of the grid
#[derive(Debug, Clone)]
pub struct GridCell<'a> {
    /// Cell coordinate
    pub slot: TimeSlot,
    /// Occupants in stacking order
    pub courses: Vec<&'a Course>,
    /// Highlight state
    pub state: CellState,
}

/// One row (period) of the grid
#[derive(Debug, Clone)]
pub struct GridRow<'a> {
    /// Period ordinal
    pub hour: u32,
    /// Cells in layout day order
    pub cells: Vec<GridCell<'a>>,
}

/// Read-only view over a selection for per-cell queries
#[derive(Debug, Clone, Copy)]
pub struct ScheduleGrid<'a> {
    added: &'a [Course],
    hovered: Option<&'a HoverPreview>,
}

impl<'a> ScheduleGrid<'a> {
    /// View over explicit state
    #[must_use]
    pub const fn new(added: &'a [Course], hovered: Option<&'a HoverPreview>) -> Self {
        Self { added, hovered }
    }

    /// View over a selection store
    #[must_use]
    pub fn from_store(store: &'a SelectionStore) -> Self {
        Self::new(store.added_courses(), store.hovered())
    }

    /// Hover course, if one is set and not already added
    fn preview(&self) -> Option<&'a Course> {
        self.hovered
            .map(|preview| &preview.course)
            .filter(|course| !self.added.iter().any(|c| c.id == course.id))
    }

    /// Courses occupying `(day, hour)`.
    ///
    /// Added courses come first in insertion order, followed by the hover
    /// preview when it is not added and meets in this cell.
    #[must_use]
    pub fn courses_for_cell(&self, day: Day, hour: u32) -> Vec<&'a Course> {
        let slot = TimeSlot::new(day, hour);
        let mut courses: Vec<&'a Course> =
            self.added.iter().filter(|c| c.occupies(slot)).collect();
        if let Some(preview) = self.preview().filter(|c| c.occupies(slot)) {
            courses.push(preview);
        }
        courses
    }

    /// More than one course in the cell
    #[must_use]
    pub fn is_conflicting(&self, day: Day, hour: u32) -> bool {
        self.courses_for_cell(day, hour).len() > 1
    }

    /// Conflicting cell that contains the hovered course
    #[must_use]
    pub fn is_hovered_conflict(&self, day: Day, hour: u32) -> bool {
        let courses = self.courses_for_cell(day, hour);
        courses.len() > 1 && self.contains_hovered(&courses)
    }

    /// Non-conflicting cell that contains the hovered course
    #[must_use]
    pub fn is_hovered(&self, day: Day, hour: u32) -> bool {
        let courses = self.courses_for_cell(day, hour);
        courses.len() <= 1 && self.contains_hovered(&courses)
    }

    /// Highlight state with precedence hovered-conflict, conflict, hovered, normal
    #[must_use]
    pub fn cell_state(&self, day: Day, hour: u32) -> CellState {
        let courses = self.courses_for_cell(day, hour);
        Self::classify(&courses, self.contains_hovered(&courses))
    }

    /// Resolve every cell of `layout`, row by row
    #[must_use]
    pub fn cells(&self, layout: &WeekLayout) -> Vec<GridRow<'a>> {
        layout
            .hours
            .clone()
            .map(|hour| GridRow {
                hour,
                cells: layout
                    .days
                    .iter()
                    .map(|&day| {
                        let courses = self.courses_for_cell(day, hour);
                        let state = Self::classify(&courses, self.contains_hovered(&courses));
                        GridCell {
                            slot: TimeSlot::new(day, hour),
                            courses,
                            state,
                        }
                    })
                    .collect(),
            })
            .collect()
    }

    // Matches by id, so a hover that names an added course still highlights it.
    fn contains_hovered(&self, courses: &[&Course]) -> bool {
        self.hovered
            .is_some_and(|preview| courses.iter().any(|c| c.id == preview.course.id))
    }

    const fn classify(courses: &[&Course], has_hovered: bool) -> CellState {
        match (courses.len(), has_hovered) {
            (0, _) => CellState::Empty,
            (1, true) => CellState::Hovered,
            (1, false) => CellState::Normal,
            (_, true) => CellState::HoveredConflict,
            (_, false) => CellState::Conflicting,
        }
    }
}
