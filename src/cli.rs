//! Command-line interface parsing for the timetable tool
//!
//! This module handles parsing of CLI arguments using clap: the `show`
//! command prints one class's lessons, `serve` runs the HTTP API.

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use thiserror::Error;

use crate::cache::SnapshotCache;

/// Default listen address of the HTTP API
pub const DEFAULT_ADDR: &str = "0.0.0.0:8000";

/// Error types for CLI argument handling
#[derive(Debug, Error)]
pub enum CliError {
    /// No cache directory was given and none could be determined
    #[error("Could not determine a cache directory. Pass --cache-dir")]
    NoCacheDir,
}

/// School timetable from a Google Sheets export
#[derive(Parser, Debug)]
#[command(name = "timetable")]
#[command(about = "School timetable lookups from a Google Sheets export")]
#[command(version)]
pub struct Cli {
    /// Directory for downloaded spreadsheet snapshots
    #[arg(long, global = true, value_name = "DIR")]
    pub cache_dir: Option<PathBuf>,

    /// Log debug output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Print a class's lessons as JSON
    ///
    /// Examples:
    ///   timetable show --table-id 1pP_q... --class 10а
    ///   timetable show --table-id 1pP_q... --class 10а --days пн,вт
    ///   timetable show --table-id 1pP_q... --class 10а --days next_day
    Show {
        /// Google Sheets document id
        #[arg(long)]
        table_id: String,

        /// Class identifier, case-insensitive
        #[arg(long)]
        class: String,

        /// Comma separated weekdays (monday, пн, mo, 0, this_day, next_day)
        #[arg(long, default_value = "this_day")]
        days: String,
    },

    /// Run the HTTP API
    Serve {
        /// Address to listen on
        #[arg(long, default_value = DEFAULT_ADDR)]
        addr: SocketAddr,
    },
}

/// Runtime configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Snapshot cache to use
    pub cache: SnapshotCache,
    /// Whether debug logging is enabled
    pub verbose: bool,
}

impl AppConfig {
    /// Creates an AppConfig from parsed CLI arguments.
    ///
    /// # Returns
    /// * `Ok(AppConfig)` using `--cache-dir` or the XDG cache directory
    /// * `Err(CliError::NoCacheDir)` if neither is available
    pub fn from_cli(cli: &Cli) -> Result<Self, CliError> {
        let cache = match &cli.cache_dir {
            Some(dir) => SnapshotCache::with_dir(dir.clone()),
            None => SnapshotCache::new().ok_or(CliError::NoCacheDir)?,
        };

        Ok(AppConfig {
            cache,
            verbose: cli.verbose,
        })
    }
}
