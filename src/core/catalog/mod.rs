//! Course catalog: loading from JSON and text search

pub mod loader;
pub mod search;

pub use loader::{load_catalog_file, load_catalog_str, load_records, RawCourseRecord};
pub use search::{by_department, departments, search};

use crate::core::models::Course;

/// An immutable, id-unique list of courses in catalog order
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    courses: Vec<Course>,
    dropped_duplicates: Vec<String>,
}

impl Catalog {
    /// Build a catalog, keeping the first course seen for each id
    #[must_use]
    pub fn new(courses: Vec<Course>) -> Self {
        let mut kept: Vec<Course> = Vec::with_capacity(courses.len());
        let mut dropped_duplicates = Vec::new();
        for course in courses {
            if kept.iter().any(|c| c.id == course.id) {
                dropped_duplicates.push(course.id);
            } else {
                kept.push(course);
            }
        }
        Self {
            courses: kept,
            dropped_duplicates,
        }
    }

    /// All courses in catalog order
    #[must_use]
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// Look up a course by id
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Course> {
        self.courses.iter().find(|c| c.id == id)
    }

    /// Ids of later records that were dropped because an earlier record had the same id
    #[must_use]
    pub fn dropped_duplicates(&self) -> &[String] {
        &self.dropped_duplicates
    }

    /// Number of courses
    #[must_use]
    pub fn len(&self) -> usize {
        self.courses.len()
    }

    /// Whether the catalog has no courses
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}
