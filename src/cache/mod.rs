//! Cache module for downloaded spreadsheet snapshots
//!
//! This module provides a snapshot cache that keeps raw spreadsheet downloads
//! on the filesystem. A snapshot's table id and download time are encoded in
//! its file name, so deciding whether a download can be reused is a single
//! directory scan with no metadata store.

mod snapshot;

pub use snapshot::{SnapshotCache, SnapshotRecord, SNAPSHOT_EXTENSION, SNAPSHOT_TTL};
