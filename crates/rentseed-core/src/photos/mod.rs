//! Batch photo fetcher.
//!
//! Walks the source listings in order, downloads every photo URL to a
//! deterministically named file, and writes `download_log.json` once at the
//! end. A failed photo never stops the batch: it is logged, reported through
//! [`PhotoEvent::Failed`], and left out of the log.

mod log;
mod naming;

pub use log::{read_log, write_log, DownloadEntry, LOG_FILENAME};
pub use naming::{photo_filename, photo_path};

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

use crate::http::{self, FetchError};
use crate::source::SourceRecord;

/// Source of photo bytes. The production implementation is [`CurlFetcher`].
pub trait PhotoFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError>;
}

/// Blocking GET with a fixed per-request timeout.
#[derive(Debug, Clone, Copy)]
pub struct CurlFetcher {
    timeout: Duration,
}

impl CurlFetcher {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

impl Default for CurlFetcher {
    fn default() -> Self {
        Self::new(http::DEFAULT_TIMEOUT)
    }
}

impl PhotoFetcher for CurlFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        http::get(url, self.timeout)
    }
}

/// Why a single photo was not saved.
#[derive(Debug, Error)]
pub enum PhotoError {
    #[error("fetch failed: {0}")]
    Fetch(#[from] FetchError),
    #[error("write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Progress notifications, in processing order.
#[derive(Debug)]
pub enum PhotoEvent<'a> {
    /// Started listing `index` (1-based).
    Group { index: usize, title: &'a str },
    Saved {
        group: usize,
        photo: usize,
        filename: &'a str,
    },
    Failed {
        group: usize,
        photo: usize,
        url: &'a str,
        error: &'a PhotoError,
    },
    /// Empty or whitespace-only URL segment.
    Skipped { group: usize, photo: usize },
}

/// Outcome of a batch run.
#[derive(Debug, Clone)]
pub struct DownloadReport {
    /// Saved photos, group-major then photo-minor.
    pub entries: Vec<DownloadEntry>,
    /// Number of non-empty URLs across all listings.
    pub expected: usize,
    pub failed: usize,
    pub skipped: usize,
    /// Absolute path of the written `download_log.json`.
    pub log_path: PathBuf,
}

impl DownloadReport {
    pub fn saved(&self) -> usize {
        self.entries.len()
    }
}

/// Number of non-empty (after trimming) photo URLs across `records`.
pub fn count_photo_urls(records: &[SourceRecord]) -> usize {
    records
        .iter()
        .flat_map(|r| r.photo_urls())
        .filter(|u| !u.trim().is_empty())
        .count()
}

fn save_one(
    fetcher: &dyn PhotoFetcher,
    url: &str,
    path: &Path,
) -> Result<(), PhotoError> {
    let bytes = fetcher.fetch(url)?;
    fs::write(path, &bytes).map_err(|source| PhotoError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!("saved {} ({} bytes)", path.display(), bytes.len());
    Ok(())
}

/// Downloads every photo of every listing into `dest_dir`.
///
/// `photo_index` is the raw 1-based position in the comma-split list, so an
/// empty segment still consumes its slot. Existing files are overwritten.
/// Only two conditions fail the run: `dest_dir` cannot be created, or the log
/// cannot be written.
pub fn download_photos<F>(
    records: &[SourceRecord],
    dest_dir: &Path,
    fetcher: &dyn PhotoFetcher,
    mut on_event: F,
) -> Result<DownloadReport>
where
    F: FnMut(&PhotoEvent<'_>),
{
    fs::create_dir_all(dest_dir)
        .with_context(|| format!("create photo directory {}", dest_dir.display()))?;
    let dest_dir = fs::canonicalize(dest_dir)
        .with_context(|| format!("resolve photo directory {}", dest_dir.display()))?;

    let expected = count_photo_urls(records);
    let mut entries = Vec::with_capacity(expected);
    let mut failed = 0usize;
    let mut skipped = 0usize;

    tracing::info!(
        "downloading {} photos from {} listings into {}",
        expected,
        records.len(),
        dest_dir.display()
    );

    for (group, record) in records.iter().enumerate().map(|(i, r)| (i + 1, r)) {
        on_event(&PhotoEvent::Group {
            index: group,
            title: &record.title,
        });

        for (photo, raw) in record.photo_urls().enumerate().map(|(i, u)| (i + 1, u)) {
            let url = raw.trim();
            if url.is_empty() {
                skipped += 1;
                on_event(&PhotoEvent::Skipped { group, photo });
                continue;
            }

            let filename = photo_filename(group, photo);
            let path = photo_path(&dest_dir, group, photo);
            match save_one(fetcher, url, &path) {
                Ok(()) => {
                    on_event(&PhotoEvent::Saved {
                        group,
                        photo,
                        filename: &filename,
                    });
                    entries.push(DownloadEntry {
                        group_index: group,
                        photo_index: photo,
                        filename,
                        path,
                        source_url: url.to_string(),
                    });
                }
                Err(error) => {
                    failed += 1;
                    if matches!(&error, PhotoError::Fetch(e) if e.is_timeout()) {
                        tracing::warn!("photo {}/{} from {} timed out", group, photo, url);
                    } else {
                        tracing::warn!("photo {}/{} from {} failed: {}", group, photo, url, error);
                    }
                    on_event(&PhotoEvent::Failed {
                        group,
                        photo,
                        url,
                        error: &error,
                    });
                }
            }
        }
    }

    let log_path = dest_dir.join(LOG_FILENAME);
    write_log(&log_path, &entries)?;
    tracing::info!(
        "saved {}/{} photos ({} failed, {} empty); log at {}",
        entries.len(),
        expected,
        failed,
        skipped,
        log_path.display()
    );

    Ok(DownloadReport {
        entries,
        expected,
        failed,
        skipped,
        log_path,
    })
}
