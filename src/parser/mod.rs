//! Timetable spreadsheet parser
//!
//! Turns the active sheet of a timetable workbook into a [`ScheduleTable`]:
//! one six-day schedule per class, each day a list of (subject, room) periods.
//!
//! [`ScheduleTable`]: crate::data::ScheduleTable

pub mod grid;
mod sheet;
mod workbook;

pub use grid::{CellRef, CellValue, DayTracker, Grid, GridCell};
pub use sheet::{parse_file, parse_grid, ParseError};
pub use workbook::load_active_sheet;
