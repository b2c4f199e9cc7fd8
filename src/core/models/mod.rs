//! Data models for the planner

pub mod course;
pub mod time_slot;

pub use course::{Course, MeetingBlock};
pub use time_slot::{Day, TimeSlot};
