//! JSON document helpers shared by the jobs.

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Reads and deserializes a JSON document. Shape errors carry the file name
/// and serde's field/line location.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let data = fs::read(path).with_context(|| format!("read {}", path.display()))?;
    serde_json::from_slice(&data).with_context(|| format!("malformed document {}", path.display()))
}

/// Writes `value` as pretty-printed UTF-8 JSON, creating parent directories and
/// overwriting any existing file.
pub fn write_json_pretty<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("create directory {}", parent.display()))?;
    }
    let mut data = serde_json::to_vec_pretty(value).context("serialize document")?;
    data.push(b'\n');
    fs::write(path, data).with_context(|| format!("write {}", path.display()))
}
