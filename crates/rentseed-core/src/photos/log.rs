//! `download_log.json`: the ordered record of saved photos.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::document;

/// Name of the log file written inside the destination directory.
pub const LOG_FILENAME: &str = "download_log.json";

/// One successfully fetched and saved photo.
///
/// Field names on disk are the ones existing log readers expect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownloadEntry {
    /// 1-based position of the listing in the source document.
    #[serde(rename = "chacara")]
    pub group_index: usize,
    /// 1-based raw position of the URL in the listing's comma-split list.
    #[serde(rename = "foto")]
    pub photo_index: usize,
    pub filename: String,
    pub path: PathBuf,
    #[serde(rename = "url_original")]
    pub source_url: String,
}

/// Writes the full log in creation order, replacing any previous one.
pub fn write_log(path: &Path, entries: &[DownloadEntry]) -> Result<()> {
    document::write_json_pretty(path, entries)
}

pub fn read_log(path: &Path) -> Result<Vec<DownloadEntry>> {
    document::read_json(path)
}
