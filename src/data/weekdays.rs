//! Weekday aliases accepted from users
//!
//! Requests name days in English or Russian, by full name, two-letter
//! abbreviation or index, or relative to today (`this_day`, `next_day`).

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::DAYS_PER_WEEK;

/// Errors for weekday list parsing
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WeekdayError {
    /// The alias does not name a school day
    #[error("Unknown weekday: '{0}'. Use names like monday, пн, 0 or this_day")]
    Unknown(String),

    /// No weekday was given at all
    #[error("No weekdays given")]
    Empty,
}

/// A school day, Monday..Saturday
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    /// Returns all school days in week order
    pub fn all() -> &'static [Weekday; DAYS_PER_WEEK] {
        &[
            Weekday::Monday,
            Weekday::Tuesday,
            Weekday::Wednesday,
            Weekday::Thursday,
            Weekday::Friday,
            Weekday::Saturday,
        ]
    }

    /// Position of the day in a class schedule (Monday = 0)
    pub fn index(self) -> usize {
        self as usize
    }

    /// Day at the given schedule position
    pub fn from_index(index: usize) -> Option<Weekday> {
        Self::all().get(index).copied()
    }

    /// School day of a calendar date; Sunday rolls over to Monday
    pub fn of_date(date: NaiveDate) -> Weekday {
        let index = date.weekday().num_days_from_monday() as usize;
        Self::from_index(index).unwrap_or(Weekday::Monday)
    }

    /// Parses a single alias, resolving relative aliases against `today`
    ///
    /// Matching is case-insensitive and ignores surrounding whitespace.
    pub fn from_alias(alias: &str, today: NaiveDate) -> Option<Weekday> {
        let day = match alias.trim().to_lowercase().as_str() {
            "this_day" => return Some(Self::of_date(today)),
            "next_day" => return Some(Self::of_date(today + Duration::days(1))),
            "monday" | "понедельник" | "mo" | "пн" | "0" => Weekday::Monday,
            "tuesday" | "вторник" | "tu" | "вт" | "1" => Weekday::Tuesday,
            "wednesday" | "среда" | "we" | "ср" | "2" => Weekday::Wednesday,
            "thursday" | "четверг" | "th" | "чт" | "3" => Weekday::Thursday,
            "friday" | "пятница" | "fr" | "пт" | "4" => Weekday::Friday,
            "saturday" | "суббота" | "sa" | "сб" | "5" => Weekday::Saturday,
            _ => return None,
        };
        Some(day)
    }
}

/// Parses a comma separated weekday list
///
/// Spaces are ignored, repeated days are kept once in first-seen order and
/// at most six days are returned. Empty segments are skipped.
pub fn normalize_week_days(input: &str, today: NaiveDate) -> Result<Vec<Weekday>, WeekdayError> {
    let compact: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    let mut days = Vec::new();

    for alias in compact.split(',').filter(|alias| !alias.is_empty()) {
        if days.len() == DAYS_PER_WEEK {
            break;
        }
        let day =
            Weekday::from_alias(alias, today).ok_or_else(|| WeekdayError::Unknown(alias.to_string()))?;
        if !days.contains(&day) {
            days.push(day);
        }
    }

    if days.is_empty() {
        return Err(WeekdayError::Empty);
    }
    Ok(days)
}
