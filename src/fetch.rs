//! Google Sheets export client
//!
//! Downloads the XLSX export of a timetable spreadsheet and stores it as a
//! snapshot in the [`SnapshotCache`].

use std::path::PathBuf;
use std::time::Duration;

use reqwest::Client;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::cache::SnapshotCache;

/// Base URL of Google Sheets documents
const EXPORT_BASE_URL: &str = "https://docs.google.com/spreadsheets/d";

/// Timeout for a single export download
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Leading bytes of a zip archive, which every XLSX file is
const XLSX_MAGIC: &[u8] = b"PK";

/// Errors that can occur when downloading a spreadsheet
#[derive(Debug, Error)]
pub enum FetchError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The export endpoint answered with a non-success status
    #[error("Spreadsheet export returned HTTP {0}. Check table_id and the sheet's sharing settings")]
    Status(u16),

    /// The export answered with something other than a workbook,
    /// typically a sign-in page for a private sheet
    #[error("Spreadsheet export did not return an XLSX workbook. Check the sheet's sharing settings")]
    NotWorkbook,

    /// The table id contains characters that cannot be part of a file name
    #[error("Invalid table id: '{0}'")]
    InvalidTableId(String),

    /// Writing the snapshot failed
    #[error("Failed to store snapshot: {0}")]
    Storage(#[from] std::io::Error),
}

/// Checks that a table id is non-empty and limited to `[A-Za-z0-9_-]`
pub fn validate_table_id(table_id: &str) -> Result<(), FetchError> {
    let valid = !table_id.is_empty()
        && table_id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');

    if valid {
        Ok(())
    } else {
        Err(FetchError::InvalidTableId(table_id.to_string()))
    }
}

/// Client for downloading spreadsheet exports
#[derive(Debug, Clone)]
pub struct SheetClient {
    /// HTTP client for making requests
    http_client: Client,
    /// Base URL of the documents (allows override for testing)
    base_url: String,
}

impl Default for SheetClient {
    fn default() -> Self {
        Self::new()
    }
}

impl SheetClient {
    /// Creates a new SheetClient for Google Sheets
    pub fn new() -> Self {
        Self::with_base_url(EXPORT_BASE_URL)
    }

    /// Creates a new SheetClient with a custom base URL
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            http_client: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// URL of the XLSX export of a table
    pub fn export_url(&self, table_id: &str) -> String {
        format!(
            "{}/{}/export?format=xlsx",
            self.base_url.trim_end_matches('/'),
            table_id
        )
    }

    /// Downloads a table and stores it as a new snapshot
    ///
    /// # Returns
    /// * `Ok(PathBuf)` - Path of the fully written snapshot
    /// * `Err(FetchError)` - If the id is invalid, the request fails or the snapshot cannot be written
    pub async fn download(
        &self,
        table_id: &str,
        cache: &SnapshotCache,
    ) -> Result<PathBuf, FetchError> {
        validate_table_id(table_id)?;

        let url = self.export_url(table_id);
        debug!(%url, "Downloading spreadsheet export");

        let response = self
            .http_client
            .get(&url)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let bytes = response.bytes().await?;
        if !bytes.starts_with(XLSX_MAGIC) {
            warn!(table_id, bytes = bytes.len(), "Export body is not an XLSX workbook");
            return Err(FetchError::NotWorkbook);
        }

        let path = cache.store(table_id, &bytes)?;

        info!(table_id, bytes = bytes.len(), path = %path.display(), "Spreadsheet downloaded");
        Ok(path)
    }
}
