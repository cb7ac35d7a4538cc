//! Core data models for the timetable
//!
//! This module contains the normalized schedule types produced by the sheet
//! parser and the per-day response view handed to the CLI and HTTP layers.

pub mod subjects;
pub mod weekdays;

pub use subjects::{capitalize, expand_abbreviation, normalize_subject};
pub use weekdays::{normalize_week_days, Weekday, WeekdayError};

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Room token used when a lesson has no room assigned
pub const NO_ROOM: &str = "---";

/// Number of modeled weekdays (Monday..Saturday)
pub const DAYS_PER_WEEK: usize = 6;

/// A single lesson period: subject and room
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonEntry {
    /// Normalized subject name, `None` for a free period
    pub subject: Option<String>,
    /// Room token, never empty
    pub room: String,
}

impl LessonEntry {
    /// Creates a lesson entry
    pub fn new(subject: Option<String>, room: impl Into<String>) -> Self {
        Self {
            subject,
            room: room.into(),
        }
    }

    /// Creates a period with no subject and no room
    pub fn empty() -> Self {
        Self::new(None, NO_ROOM)
    }

    /// Returns true when the period has neither a subject nor a room
    pub fn is_empty(&self) -> bool {
        self.subject.is_none() && self.room == NO_ROOM
    }
}

/// Lessons of one class on one weekday, in period order
pub type DaySchedule = Vec<LessonEntry>;

/// Lessons of one class for Monday..Saturday
pub type ClassSchedule = [DaySchedule; DAYS_PER_WEEK];

/// Schedules of every class, keyed by lower-cased class identifier
///
/// A `BTreeMap` keeps serialized output stable between parses of the same file.
pub type ScheduleTable = BTreeMap<String, ClassSchedule>;

/// Removes trailing empty periods from a day
///
/// Empty periods before the last lesson are windows and are kept.
pub fn trim_trailing_empty(day: &mut DaySchedule) {
    while day.last().is_some_and(LessonEntry::is_empty) {
        day.pop();
    }
}

/// Lessons of one class on one requested weekday, split into parallel lists
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayLessons {
    /// The weekday these lessons belong to
    pub weekday: Weekday,
    /// 1-based number of the first period with a subject, 0 if there is none
    pub entry_lesson: usize,
    /// Subject of each period
    pub lessons: Vec<Option<String>>,
    /// Room of each period
    pub cabinets: Vec<String>,
}

impl DayLessons {
    /// Builds the per-day view of a class schedule
    pub fn from_day(weekday: Weekday, day: &[LessonEntry]) -> Self {
        let entry_lesson = day
            .iter()
            .position(|lesson| lesson.subject.is_some())
            .map_or(0, |index| index + 1);

        Self {
            weekday,
            entry_lesson,
            lessons: day.iter().map(|lesson| lesson.subject.clone()).collect(),
            cabinets: day.iter().map(|lesson| lesson.room.clone()).collect(),
        }
    }
}
