//! Weekday and time-slot primitives shared by every engine

use crate::core::error::UnknownDay;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A day of the week. Serialized by its full English name (e.g. `"Monday"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Day {
    /// Monday
    Monday,
    /// Tuesday
    Tuesday,
    /// Wednesday
    Wednesday,
    /// Thursday
    Thursday,
    /// Friday
    Friday,
    /// Saturday
    Saturday,
    /// Sunday
    Sunday,
}

impl Day {
    /// All seven days, Monday first.
    pub const ALL: [Self; 7] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
        Self::Sunday,
    ];

    /// Monday through Friday.
    pub const WEEKDAYS: [Self; 5] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
    ];

    /// Full name as stored in catalog time slots (e.g. "Monday")
    #[must_use]
    pub const fn full_name(self) -> &'static str {
        match self {
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
            Self::Sunday => "Sunday",
        }
    }

    /// Three-letter grid column label (e.g. "Mon")
    #[must_use]
    pub const fn abbreviation(self) -> &'static str {
        match self {
            Self::Monday => "Mon",
            Self::Tuesday => "Tue",
            Self::Wednesday => "Wed",
            Self::Thursday => "Thu",
            Self::Friday => "Fri",
            Self::Saturday => "Sat",
            Self::Sunday => "Sun",
        }
    }

    /// Parse an exact full day name (case-insensitive).
    ///
    /// # Errors
    /// Returns [`UnknownDay`] if `name` is not a full weekday name.
    pub fn from_full_name(name: &str) -> Result<Self, UnknownDay> {
        Self::ALL
            .into_iter()
            .find(|day| day.full_name().eq_ignore_ascii_case(name.trim()))
            .ok_or_else(|| UnknownDay(name.to_string()))
    }

    /// Parse a three-letter abbreviation (case-insensitive).
    ///
    /// # Errors
    /// Returns [`UnknownDay`] if `abbrev` is not one of `Mon`..`Sun`.
    pub fn from_abbreviation(abbrev: &str) -> Result<Self, UnknownDay> {
        Self::ALL
            .into_iter()
            .find(|day| day.abbreviation().eq_ignore_ascii_case(abbrev.trim()))
            .ok_or_else(|| UnknownDay(abbrev.to_string()))
    }
}

impl FromStr for Day {
    type Err = UnknownDay;

    /// Accepts either the full name or the abbreviation.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_full_name(s).or_else(|_| Self::from_abbreviation(s))
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.full_name())
    }
}

/// A `(day, hour)` cell of the weekly grid.
///
/// `hour` is a period index (1-8 on the default grid), not a clock time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TimeSlot {
    /// Day of the meeting
    pub day: Day,
    /// Period ordinal within the day
    pub hour: u32,
}

impl TimeSlot {
    /// Create a new time slot
    #[must_use]
    pub const fn new(day: Day, hour: u32) -> Self {
        Self { day, hour }
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.day.abbreviation(), self.hour)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_abbreviation_round_trip() {
        for day in Day::ALL {
            assert_eq!(Day::from_abbreviation(day.abbreviation()), Ok(day));
            assert_eq!(Day::from_full_name(day.full_name()), Ok(day));
        }
    }

    #[test]
    fn test_from_str_accepts_both_forms() {
        assert_eq!("wed".parse::<Day>(), Ok(Day::Wednesday));
        assert_eq!("Wednesday".parse::<Day>(), Ok(Day::Wednesday));
        assert_eq!("FRIDAY".parse::<Day>(), Ok(Day::Friday));
    }

    #[test]
    fn test_unknown_day_is_an_error() {
        assert_eq!(
            Day::from_abbreviation("Monday"),
            Err(UnknownDay("Monday".to_string()))
        );
        assert!(Day::from_full_name("Mon").is_err());
        assert!("Funday".parse::<Day>().is_err());
        assert!("".parse::<Day>().is_err());
    }

    #[test]
    fn test_slot_equality_needs_day_and_hour() {
        let slot = TimeSlot::new(Day::Monday, 3);
        assert_eq!(slot, TimeSlot::new(Day::Monday, 3));
        assert_ne!(slot, TimeSlot::new(Day::Monday, 4));
        assert_ne!(slot, TimeSlot::new(Day::Tuesday, 3));
    }

    #[test]
    fn test_day_serializes_as_full_name() {
        let json = serde_json::to_string(&TimeSlot::new(Day::Thursday, 2)).unwrap();
        assert_eq!(json, r#"{"day":"Thursday","hour":2}"#);
    }

    #[test]
    fn test_slot_display() {
        assert_eq!(TimeSlot::new(Day::Tuesday, 7).to_string(), "Tue/7");
    }
}
