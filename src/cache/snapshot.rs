//! Snapshot cache for downloaded timetable spreadsheets
//!
//! Provides a `SnapshotCache` that stores raw spreadsheet downloads under
//! `{table_id}_{unix_seconds}.xlsx` and finds a snapshot that is still fresh,
//! so the same sheet is not downloaded again within the TTL.

use chrono::{DateTime, Utc};
use directories::ProjectDirs;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// How long a downloaded snapshot may be reused (one hour)
pub const SNAPSHOT_TTL: Duration = Duration::from_secs(60 * 60);

/// File extension of stored snapshots
pub const SNAPSHOT_EXTENSION: &str = "xlsx";

/// Distinguishes temporary files of concurrent stores within one process
static TEMP_COUNTER: AtomicU64 = AtomicU64::new(0);

/// A stored snapshot, decoded from its file name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotRecord {
    /// Location of the snapshot file
    pub path: PathBuf,
    /// Table the snapshot was downloaded from
    pub table_id: String,
    /// When the snapshot was downloaded
    pub fetched_at: DateTime<Utc>,
}

impl SnapshotRecord {
    /// Decodes a `{table_id}_{unix_seconds}.xlsx` path
    ///
    /// The timestamp follows the last `_`, so table ids may contain
    /// underscores. Returns `None` for names outside the contract.
    pub fn parse(path: &Path) -> Option<Self> {
        if path.extension()?.to_str()? != SNAPSHOT_EXTENSION {
            return None;
        }
        let stem = path.file_stem()?.to_str()?;
        let (table_id, timestamp) = stem.rsplit_once('_')?;
        if table_id.is_empty() {
            return None;
        }
        let seconds: i64 = timestamp.parse().ok()?;
        let fetched_at = DateTime::from_timestamp(seconds, 0)?;

        Some(Self {
            path: path.to_path_buf(),
            table_id: table_id.to_string(),
            fetched_at,
        })
    }

    /// Age of the snapshot at `now`; snapshots from the future count as new
    pub fn age(&self, now: DateTime<Utc>) -> Duration {
        now.signed_duration_since(self.fetched_at)
            .to_std()
            .unwrap_or(Duration::ZERO)
    }

    /// Whether the snapshot is younger than `ttl` at `now`
    pub fn is_fresh(&self, now: DateTime<Utc>, ttl: Duration) -> bool {
        self.age(now) < ttl
    }
}

/// Finds and stores spreadsheet snapshots on disk
///
/// Snapshots live in an XDG-compliant cache directory (`~/.cache/timetable/`
/// on Linux). Freshness is encoded in the file name, so there is no separate
/// metadata file and stale snapshots are simply ignored.
#[derive(Debug, Clone)]
pub struct SnapshotCache {
    /// Directory where snapshots are stored
    dir: PathBuf,
    /// Maximum age of a reusable snapshot
    ttl: Duration,
}

impl SnapshotCache {
    /// Creates a SnapshotCache using the XDG-compliant cache directory
    ///
    /// Returns `None` if the cache directory cannot be determined (e.g., no home directory).
    pub fn new() -> Option<Self> {
        let project_dirs = ProjectDirs::from("", "", "timetable")?;
        Some(Self::with_dir(project_dirs.cache_dir().to_path_buf()))
    }

    /// Creates a SnapshotCache with a custom directory
    pub fn with_dir(dir: PathBuf) -> Self {
        Self {
            dir,
            ttl: SNAPSHOT_TTL,
        }
    }

    /// Overrides the snapshot TTL
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// Directory where snapshots are stored
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Maximum age of a reusable snapshot
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Returns the path a snapshot of `table_id` fetched at `fetched_at` is stored under
    pub fn snapshot_path(&self, table_id: &str, fetched_at: DateTime<Utc>) -> PathBuf {
        self.dir.join(format!(
            "{}_{}.{}",
            table_id,
            fetched_at.timestamp(),
            SNAPSHOT_EXTENSION
        ))
    }

    /// Ensures the cache directory exists
    fn ensure_dir(&self) -> io::Result<()> {
        fs::create_dir_all(&self.dir)
    }

    /// Finds a fresh snapshot of `table_id`
    ///
    /// # Returns
    /// * `Ok(Some(path))` with the newest snapshot younger than the TTL
    /// * `Ok(None)` if there is none, including when the directory does not exist yet
    /// * `Err` if the directory cannot be read
    pub fn find_fresh(&self, table_id: &str) -> io::Result<Option<PathBuf>> {
        self.find_fresh_at(table_id, Utc::now())
    }

    /// Same as [`find_fresh`](Self::find_fresh) with an explicit clock
    pub fn find_fresh_at(
        &self,
        table_id: &str,
        now: DateTime<Utc>,
    ) -> io::Result<Option<PathBuf>> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e),
        };

        let mut newest: Option<SnapshotRecord> = None;
        for entry in entries {
            let Some(record) = SnapshotRecord::parse(&entry?.path()) else {
                continue;
            };
            if record.table_id != table_id || !record.is_fresh(now, self.ttl) {
                continue;
            }
            if newest
                .as_ref()
                .map_or(true, |current| record.fetched_at > current.fetched_at)
            {
                newest = Some(record);
            }
        }

        Ok(newest.map(|record| record.path))
    }

    /// Stores a freshly downloaded snapshot and returns its path
    pub fn store(&self, table_id: &str, bytes: &[u8]) -> io::Result<PathBuf> {
        self.store_at(table_id, bytes, Utc::now())
    }

    /// Stores a snapshot under the name for `fetched_at`
    ///
    /// The bytes are written to a temporary file first and renamed into
    /// place, so a snapshot path is only visible once fully written. A
    /// concurrent store of the same table simply replaces the file.
    pub fn store_at(
        &self,
        table_id: &str,
        bytes: &[u8],
        fetched_at: DateTime<Utc>,
    ) -> io::Result<PathBuf> {
        self.ensure_dir()?;

        let path = self.snapshot_path(table_id, fetched_at);
        let temp_path = self.dir.join(format!(
            ".{}_{}.{}.{}.part",
            table_id,
            fetched_at.timestamp(),
            std::process::id(),
            TEMP_COUNTER.fetch_add(1, Ordering::Relaxed)
        ));

        fs::write(&temp_path, bytes)?;
        if let Err(e) = fs::rename(&temp_path, &path) {
            let _ = fs::remove_file(&temp_path);
            return Err(e);
        }
        Ok(path)
    }
}
