//! In-session course selection and hover preview
//!
//! The store owns the ordered list of added courses and the current hover
//! preview. The set of conflicting ids is memoized and reset on every change to
//! the added list. For use across threads, wrap the store in a `Mutex`; all
//! mutation goes through `&mut self`.

use crate::core::conflicts::{conflicting_ids, conflicts_with_any};
use crate::core::models::Course;
use crate::debug;
use std::cell::OnceCell;
use std::collections::BTreeSet;

/// A not-yet-added course shown on the grid, with its conflict flag
#[derive(Debug, Clone, PartialEq)]
pub struct HoverPreview {
    /// The previewed course
    pub course: Course,
    /// Whether it overlaps any added course
    pub conflicting: bool,
}

/// Outcome of [`SelectionStore::toggle_course`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    /// The course was appended
    Added,
    /// The course was removed
    Removed,
}

/// The user's current selection
#[derive(Debug, Clone, Default)]
pub struct SelectionStore {
    added: Vec<Course>,
    hovered: Option<HoverPreview>,
    conflicts: OnceCell<BTreeSet<String>>,
}

impl SelectionStore {
    /// Create an empty selection
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Added courses in insertion order
    #[must_use]
    pub fn added_courses(&self) -> &[Course] {
        &self.added
    }

    /// The current hover preview, if any
    #[must_use]
    pub const fn hovered(&self) -> Option<&HoverPreview> {
        self.hovered.as_ref()
    }

    /// Whether a course with `id` has been added
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.added.iter().any(|c| c.id == id)
    }

    /// Append `course` unless its id is already present.
    ///
    /// # Returns
    /// `true` if the course was appended, `false` if it was already added
    pub fn add_course(&mut self, course: Course) -> bool {
        if self.contains(&course.id) {
            debug!("Course {} already added; ignoring", course.id);
            return false;
        }
        debug!("Adding course {}", course.id);
        self.added.push(course);
        self.selection_changed();
        true
    }

    /// Remove the course with `id`, keeping the order of the rest.
    ///
    /// # Returns
    /// `true` if a course was removed, `false` if no course had that id
    pub fn remove_course(&mut self, id: &str) -> bool {
        let before = self.added.len();
        self.added.retain(|c| c.id != id);
        if self.added.len() == before {
            return false;
        }
        debug!("Removed course {id}");
        self.selection_changed();
        true
    }

    /// Remove `course` if it is added, add it otherwise
    pub fn toggle_course(&mut self, course: &Course) -> Toggle {
        if self.remove_course(&course.id) {
            Toggle::Removed
        } else {
            self.add_course(course.clone());
            Toggle::Added
        }
    }

    /// Replace the hover preview.
    ///
    /// `None` clears it. A course that is already added is never previewed, so
    /// hovering it also clears the preview. Otherwise the preview carries a fresh
    /// conflict flag computed against the added courses.
    pub fn set_hovered_course(&mut self, course: Option<&Course>) -> Option<&HoverPreview> {
        self.hovered = course
            .filter(|c| !self.contains(&c.id))
            .map(|c| HoverPreview {
                course: c.clone(),
                conflicting: conflicts_with_any(c, &self.added),
            });
        self.hovered.as_ref()
    }

    /// Clear the hover preview
    pub fn clear_hover(&mut self) {
        self.hovered = None;
    }

    /// Ids of added courses that conflict with another added course
    #[must_use]
    pub fn conflicting_ids(&self) -> &BTreeSet<String> {
        self.conflicts.get_or_init(|| conflicting_ids(&self.added))
    }

    /// Sum of local credits over added courses
    #[must_use]
    pub fn total_credits(&self) -> f32 {
        self.added.iter().map(|c| c.credit).sum()
    }

    /// Sum of ECTS over added courses
    #[must_use]
    pub fn total_ects(&self) -> f32 {
        self.added.iter().map(|c| c.ects).sum()
    }

    fn selection_changed(&mut self) {
        self.conflicts = OnceCell::new();
        if let Some(preview) = self.hovered.take() {
            if !self.contains(&preview.course.id) {
                let conflicting = conflicts_with_any(&preview.course, &self.added);
                self.hovered = Some(HoverPreview {
                    conflicting,
                    ..preview
                });
            }
        }
    }
}
