//! Timetable lookups
//!
//! Ties the snapshot cache, the export client and the sheet parser together:
//! reuse a fresh snapshot or download a new one, parse it, then pick out
//! one class and the requested weekdays.

use std::path::PathBuf;

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::cache::SnapshotCache;
use crate::data::{ClassSchedule, DayLessons, ScheduleTable, Weekday, WeekdayError};
use crate::fetch::{validate_table_id, FetchError, SheetClient};
use crate::parser::{parse_file, ParseError};

/// Errors that can occur while answering a timetable request
#[derive(Debug, Error)]
pub enum ScheduleError {
    /// The weekday list could not be parsed
    #[error(transparent)]
    Weekday(#[from] WeekdayError),

    /// Downloading the spreadsheet failed
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// The spreadsheet could not be parsed
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// The requested class is not in the timetable
    #[error("Class '{0}' was not found in the timetable")]
    ClassNotFound(String),

    /// The parser task panicked or was cancelled
    #[error("Parser task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Answers timetable requests from cached or freshly downloaded snapshots
#[derive(Debug, Clone)]
pub struct ScheduleService {
    cache: SnapshotCache,
    client: SheetClient,
}

impl ScheduleService {
    pub fn new(cache: SnapshotCache, client: SheetClient) -> Self {
        Self { cache, client }
    }

    /// The snapshot cache used by this service
    pub fn cache(&self) -> &SnapshotCache {
        &self.cache
    }

    /// Returns a fresh snapshot of `table_id`, downloading one if needed
    ///
    /// An unreadable cache directory counts as a miss.
    pub async fn snapshot(&self, table_id: &str) -> Result<PathBuf, ScheduleError> {
        validate_table_id(table_id)?;

        match self.cache.find_fresh(table_id) {
            Ok(Some(path)) => {
                debug!(table_id, path = %path.display(), "Reusing fresh snapshot");
                return Ok(path);
            }
            Ok(None) => {}
            Err(e) => warn!(table_id, error = %e, "Snapshot storage unavailable"),
        }

        info!(table_id, "No fresh snapshot, downloading");
        Ok(self.client.download(table_id, &self.cache).await?)
    }

    /// Parses the current timetable of `table_id`
    pub async fn schedule_table(&self, table_id: &str) -> Result<ScheduleTable, ScheduleError> {
        let path = self.snapshot(table_id).await?;
        info!(table_id, path = %path.display(), "Parsing timetable");

        let table = tokio::task::spawn_blocking(move || parse_file(&path)).await??;
        info!(table_id, classes = table.len(), "Timetable parsed");
        Ok(table)
    }

    /// Lessons of one class on the given weekdays, in request order
    pub async fn class_lessons(
        &self,
        table_id: &str,
        class: &str,
        days: &[Weekday],
    ) -> Result<Vec<DayLessons>, ScheduleError> {
        let class = class.trim();
        let table = self.schedule_table(table_id).await?;
        let week = table
            .get(&class.to_lowercase())
            .ok_or_else(|| ScheduleError::ClassNotFound(class.to_string()))?;

        Ok(select_days(week, days))
    }
}

/// Builds the per-day views of a class schedule
///
/// Days without lessons produce an empty view.
pub fn select_days(week: &ClassSchedule, days: &[Weekday]) -> Vec<DayLessons> {
    days.iter()
        .map(|&day| DayLessons::from_day(day, &week[day.index()]))
        .collect()
}
