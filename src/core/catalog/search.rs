//! Text search and department grouping over the catalog

use super::Catalog;
use crate::core::models::Course;

/// Case-insensitive substring search over course id, name and instructor.
///
/// A query that is empty after trimming yields no results. Matches keep
/// catalog order.
#[must_use]
pub fn search<'a>(catalog: &'a Catalog, query: &str) -> Vec<&'a Course> {
    if query.trim().is_empty() {
        return Vec::new();
    }
    let needle = query.to_lowercase();
    catalog
        .courses()
        .iter()
        .filter(|course| {
            course.id.to_lowercase().contains(&needle)
                || course.name.to_lowercase().contains(&needle)
                || course.instructor.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Sorted list of distinct departments
#[must_use]
pub fn departments(catalog: &Catalog) -> Vec<String> {
    let mut names: Vec<String> = catalog
        .courses()
        .iter()
        .map(|course| course.department.clone())
        .collect();
    names.sort();
    names.dedup();
    names
}

/// Courses whose department matches exactly
#[must_use]
pub fn by_department<'a>(catalog: &'a Catalog, department: &str) -> Vec<&'a Course> {
    catalog
        .courses()
        .iter()
        .filter(|course| course.department == department)
        .collect()
}
