//! JSON catalog loader
//!
//! The catalog document is either `{"courses": [...]}` or a bare array of course
//! records. Records are deserialized into [`RawCourseRecord`] with every field
//! optional so that a missing field can be reported by record index and name
//! instead of as a generic JSON error.

use super::Catalog;
use crate::core::error::CatalogError;
use crate::core::models::{Course, Day, MeetingBlock, TimeSlot};
use crate::{debug, info, warn};
use serde::Deserialize;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Raw time slot as found in the catalog
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawTimeSlot {
    /// Full day name, e.g. "Monday"
    pub day: Option<String>,
    /// Period ordinal
    pub hour: Option<u32>,
}

/// Raw lab or practicum block as found in the catalog
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawMeetingBlock {
    /// Session instructor
    pub instructor: Option<String>,
    /// Session slots
    pub time: Option<Vec<RawTimeSlot>>,
    /// Session rooms
    pub rooms: Option<Vec<String>>,
}

/// Raw course record as found in the catalog
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawCourseRecord {
    /// Course code, becomes the id
    pub code: Option<String>,
    /// Course name
    pub name: Option<String>,
    /// Lecturer
    pub instructor: Option<String>,
    /// Primary meeting slots
    pub time: Option<Vec<RawTimeSlot>>,
    /// Primary rooms
    pub rooms: Option<Vec<String>>,
    /// Local credits
    pub credit: Option<f32>,
    /// ECTS credits
    pub ects: Option<f32>,
    /// Offering department
    pub department: Option<String>,
    /// Lab sessions
    pub labs: Option<Vec<RawMeetingBlock>>,
    /// Practicum sessions
    pub practicums: Option<Vec<RawMeetingBlock>>,
}

/// Load a catalog from a JSON file
///
/// # Errors
/// Returns an error if the file cannot be read or any record is malformed
pub fn load_catalog_file<P: AsRef<Path>>(path: P) -> Result<Catalog, CatalogError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let catalog = load_catalog_str(&content)?;
    info!(
        "Loaded {} courses from {}",
        catalog.len(),
        path.display()
    );
    Ok(catalog)
}

/// Load a catalog from a JSON string
///
/// # Errors
/// Returns an error if the JSON is invalid, has no course list, or any record is malformed
pub fn load_catalog_str(json: &str) -> Result<Catalog, CatalogError> {
    let document: Value = serde_json::from_str(json)?;
    let courses = match document {
        Value::Array(_) => document,
        Value::Object(mut map) => map.remove("courses").ok_or(CatalogError::MissingCourses)?,
        _ => return Err(CatalogError::MissingCourses),
    };
    let records: Vec<RawCourseRecord> = serde_json::from_value(courses)?;
    load_records(records)
}

/// Convert raw records into a catalog. Fails on the first malformed record.
///
/// # Errors
/// Returns [`CatalogError::MalformedCourseRecord`] or [`CatalogError::InvalidDay`]
pub fn load_records(records: Vec<RawCourseRecord>) -> Result<Catalog, CatalogError> {
    let courses = records
        .into_iter()
        .enumerate()
        .map(|(index, record)| convert_record(index, record))
        .collect::<Result<Vec<_>, _>>()?;

    let catalog = Catalog::new(courses);
    for id in catalog.dropped_duplicates() {
        warn!("Duplicate course id '{id}' in catalog; keeping the first occurrence");
    }
    debug!("Catalog conversion produced {} courses", catalog.len());
    Ok(catalog)
}

fn required<T>(index: usize, field: &str, value: Option<T>) -> Result<T, CatalogError> {
    value.ok_or_else(|| CatalogError::MalformedCourseRecord {
        index,
        field: field.to_string(),
    })
}

fn convert_record(index: usize, record: RawCourseRecord) -> Result<Course, CatalogError> {
    let code = required(index, "code", record.code)?;
    let name = required(index, "name", record.name)?;
    let instructor = required(index, "instructor", record.instructor)?;
    let time = required(index, "time", record.time)?;
    let rooms = required(index, "rooms", record.rooms)?;
    let credit = required(index, "credit", record.credit)?;
    let ects = required(index, "ects", record.ects)?;
    let department = required(index, "department", record.department)?;
    let labs = required(index, "labs", record.labs)?;
    let practicums = required(index, "practicums", record.practicums)?;

    Ok(Course {
        id: code.clone(),
        code,
        name,
        instructor,
        time: convert_slots(index, "time", time)?,
        rooms,
        credit,
        ects,
        department,
        labs: convert_blocks(index, "labs", labs)?,
        practicums: convert_blocks(index, "practicums", practicums)?,
    })
}

fn convert_blocks(
    index: usize,
    field: &str,
    blocks: Vec<RawMeetingBlock>,
) -> Result<Vec<MeetingBlock>, CatalogError> {
    blocks
        .into_iter()
        .enumerate()
        .map(|(i, block)| {
            let prefix = format!("{field}[{i}]");
            let instructor = required(index, &format!("{prefix}.instructor"), block.instructor)?;
            let time = required(index, &format!("{prefix}.time"), block.time)?;
            let rooms = required(index, &format!("{prefix}.rooms"), block.rooms)?;
            Ok(MeetingBlock::new(
                instructor,
                convert_slots(index, &format!("{prefix}.time"), time)?,
                rooms,
            ))
        })
        .collect()
}

fn convert_slots(
    index: usize,
    field: &str,
    slots: Vec<RawTimeSlot>,
) -> Result<Vec<TimeSlot>, CatalogError> {
    slots
        .into_iter()
        .enumerate()
        .map(|(i, slot)| {
            let day = required(index, &format!("{field}[{i}].day"), slot.day)?;
            let hour = required(index, &format!("{field}[{i}].hour"), slot.hour)?;
            let day = Day::from_full_name(&day)
                .map_err(|e| CatalogError::InvalidDay { index, value: e.0 })?;
            Ok(TimeSlot::new(day, hour))
        })
        .collect()
}
