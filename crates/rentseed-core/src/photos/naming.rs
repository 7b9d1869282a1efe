//! Deterministic on-disk names for downloaded photos.

use std::path::{Path, PathBuf};

const PREFIX: &str = "chacara";
const SEPARATOR: &str = "foto";
const EXTENSION: &str = "jpg";

/// Filename for photo `photo` of listing `group` (both 1-based).
///
/// `photo_filename(1, 2)` → `"chacara-01-foto-02.jpg"`. Indices above 99 widen
/// naturally and stay unique.
pub fn photo_filename(group: usize, photo: usize) -> String {
    format!("{PREFIX}-{group:02}-{SEPARATOR}-{photo:02}.{EXTENSION}")
}

/// Destination path for photo `photo` of listing `group` inside `dir`.
pub fn photo_path(dir: &Path, group: usize, photo: usize) -> PathBuf {
    dir.join(photo_filename(group, photo))
}
