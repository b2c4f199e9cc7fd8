//! Course model

use super::TimeSlot;
use serde::{Deserialize, Serialize};

/// A lab or practicum session attached to a course
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeetingBlock {
    /// Instructor running the session
    pub instructor: String,
    /// Slots the session meets in
    pub time: Vec<TimeSlot>,
    /// Rooms the session uses
    pub rooms: Vec<String>,
}

impl MeetingBlock {
    /// Create a new meeting block
    #[must_use]
    pub const fn new(instructor: String, time: Vec<TimeSlot>, rooms: Vec<String>) -> Self {
        Self {
            instructor,
            time,
            rooms,
        }
    }
}

/// Represents a course offering in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    /// Unique identity key, always equal to `code`
    pub id: String,

    /// Course code (e.g., "CS101.1")
    pub code: String,

    /// Course name (e.g., "Introduction to Programming")
    pub name: String,

    /// Lecturer of the primary meetings
    pub instructor: String,

    /// Primary meeting slots
    pub time: Vec<TimeSlot>,

    /// Rooms of the primary meetings
    pub rooms: Vec<String>,

    /// Local credit value (can be fractional)
    pub credit: f32,

    /// ECTS credit value
    pub ects: f32,

    /// Department offering the course
    pub department: String,

    /// Lab sessions
    pub labs: Vec<MeetingBlock>,

    /// Practicum sessions
    pub practicums: Vec<MeetingBlock>,
}

impl Course {
    /// Create a course with no meetings; `id` is derived from `code`.
    ///
    /// # Arguments
    /// * `code` - Course code, also used as the id
    /// * `name` - Full course name
    /// * `instructor` - Lecturer name
    /// * `department` - Offering department
    #[must_use]
    pub fn new(code: String, name: String, instructor: String, department: String) -> Self {
        Self {
            id: code.clone(),
            code,
            name,
            instructor,
            time: Vec::new(),
            rooms: Vec::new(),
            credit: 0.0,
            ects: 0.0,
            department,
            labs: Vec::new(),
            practicums: Vec::new(),
        }
    }

    /// Every slot the course occupies: primary meetings, then labs, then practicums.
    ///
    /// Duplicates are not removed.
    pub fn occupied_slots(&self) -> impl Iterator<Item = &TimeSlot> + '_ {
        self.time
            .iter()
            .chain(self.labs.iter().flat_map(|lab| lab.time.iter()))
            .chain(self.practicums.iter().flat_map(|prac| prac.time.iter()))
    }

    /// Whether any meeting of this course falls in `slot`
    #[must_use]
    pub fn occupies(&self, slot: TimeSlot) -> bool {
        self.occupied_slots().any(|s| *s == slot)
    }

    /// Code with the section suffix split off for display ("CS101.1" -> "CS101 .1")
    #[must_use]
    pub fn display_code(&self) -> String {
        let Some(dot) = self.code.find('.') else {
            return self.code.clone();
        };
        let (base, section) = self.code.split_at(dot);
        let base_has_digit = base.ends_with(|c: char| c.is_ascii_digit());
        let section_is_numeric =
            section.len() > 1 && section[1..].starts_with(|c: char| c.is_ascii_digit());
        if base_has_digit && section_is_numeric {
            format!("{base} {section}")
        } else {
            self.code.clone()
        }
    }
}
