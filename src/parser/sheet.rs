//! Timetable sheet layout interpretation
//!
//! The sheet has a fixed layout:
//!
//! * row 1 is a title and is ignored,
//! * row 2 names the classes; a class named in column `i` keeps its subjects
//!   in column `i` and its rooms in column `i + 1`,
//! * from row 3 on, column B holds the period number within a day. It starts
//!   over at the beginning of each day block, Monday through Saturday.
//!
//! Rows after Saturday's block (notes, footers) are not read.

use std::path::Path;

use thiserror::Error;
use tracing::warn;

use super::grid::{CellRef, CellValue, DayTracker, Grid, GridCell};
use super::workbook;
use crate::data::{
    normalize_subject, trim_trailing_empty, ClassSchedule, LessonEntry, ScheduleTable,
    DAYS_PER_WEEK, NO_ROOM,
};

/// Column holding the period counter
const COUNTER_COLUMN: usize = 1;

/// Row holding the class names
const HEADER_ROW: usize = 1;

/// First row that may hold lessons
const FIRST_DATA_ROW: usize = 2;

/// Index of Saturday, the last modeled day
const LAST_DAY: usize = DAYS_PER_WEEK - 1;

/// Room token for a room cell holding only whitespace
const BLANK_ROOM: &str = "0";

/// Errors that can occur while parsing a timetable sheet
#[derive(Debug, Error)]
pub enum ParseError {
    /// The workbook has no readable active worksheet
    #[error("The workbook has no active sheet")]
    NoActiveSheet,

    /// A room cell holds a value that is neither a number nor text
    #[error("Incorrect cabinet format in cell {cell}: {value}")]
    IncorrectCabinetFormat { cell: CellRef, value: String },

    /// The file could not be read as a workbook
    #[error("Failed to read workbook: {0}")]
    Workbook(String),
}

/// Subject and room columns of one class
#[derive(Debug, Clone, PartialEq, Eq)]
struct ClassColumns {
    /// Lower-cased class identifier
    name: String,
    /// Column holding the class's subjects
    subject_column: usize,
}

impl ClassColumns {
    fn room_column(&self) -> usize {
        self.subject_column + 1
    }
}

/// Reads the class declarations from the header row
///
/// A class declared twice keeps its first column pair.
fn class_columns(header: &[GridCell]) -> Vec<ClassColumns> {
    let mut classes: Vec<ClassColumns> = Vec::new();

    for (column, cell) in header.iter().enumerate() {
        let CellValue::Text(text) = &cell.value else {
            continue;
        };
        let name = text.trim().to_lowercase();
        if name.is_empty() {
            continue;
        }
        if classes.iter().any(|class| class.name == name) {
            warn!(class = %name, column, "Duplicate class column, skipping");
            continue;
        }
        classes.push(ClassColumns {
            name,
            subject_column: column,
        });
    }

    classes
}

/// Reads a subject cell
///
/// Empty and struck-through cells are free periods.
fn read_subject(cell: &GridCell) -> Option<String> {
    if cell.strike {
        return None;
    }
    let text = cell.value.to_text()?;
    let subject = text
        .trim_matches(|c: char| c.is_whitespace() || c == '.' || c == '-')
        .to_lowercase();

    if subject.is_empty() {
        None
    } else {
        Some(normalize_subject(&subject))
    }
}

/// Reads a room cell
fn read_room(cell: &GridCell, at: CellRef) -> Result<String, ParseError> {
    match &cell.value {
        CellValue::Empty => Ok(NO_ROOM.to_string()),
        CellValue::Number(n) => Ok((n.trunc() as i64).to_string()),
        CellValue::Text(text) => {
            let room = text.trim().to_lowercase();
            if room.is_empty() {
                Ok(BLANK_ROOM.to_string())
            } else {
                Ok(room)
            }
        }
        CellValue::Bool(_) | CellValue::Error(_) => Err(ParseError::IncorrectCabinetFormat {
            cell: at,
            value: cell.value.to_text().unwrap_or_default(),
        }),
    }
}

/// Parses a timetable grid into per-class weekly schedules
///
/// The whole table is discarded on the first malformed room cell. A header
/// row without any class yields an empty table.
pub fn parse_grid(grid: &Grid) -> Result<ScheduleTable, ParseError> {
    let classes = class_columns(grid.row(HEADER_ROW));
    if classes.is_empty() {
        warn!("No class columns found in the header row");
        return Ok(ScheduleTable::new());
    }

    let mut weeks: Vec<ClassSchedule> = vec![ClassSchedule::default(); classes.len()];
    let mut tracker = DayTracker::new();

    for row in FIRST_DATA_ROW..grid.row_count() {
        let Some(counter) = grid.cell(row, COUNTER_COLUMN).value.as_number() else {
            if tracker.day() == Some(LAST_DAY) {
                break;
            }
            continue;
        };

        let day = tracker.advance(counter as i64);
        if day > LAST_DAY {
            break;
        }

        for (class, week) in classes.iter().zip(weeks.iter_mut()) {
            let subject = read_subject(grid.cell(row, class.subject_column));
            let room_column = class.room_column();
            let room = read_room(
                grid.cell(row, room_column),
                CellRef::new(row, room_column),
            )?;
            week[day].push(LessonEntry::new(subject, room));
        }
    }

    Ok(classes
        .into_iter()
        .zip(weeks)
        .map(|(class, mut week)| {
            week.iter_mut().for_each(trim_trailing_empty);
            (class.name, week)
        })
        .collect())
}

/// Parses the active sheet of a timetable workbook
///
/// The file must be fully written before this is called.
pub fn parse_file(path: &Path) -> Result<ScheduleTable, ParseError> {
    let grid = workbook::load_active_sheet(path)?;
    parse_grid(&grid)
}
