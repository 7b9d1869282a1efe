//! Typed schema for the scraped extraction document.
//!
//! The document wraps each listing as `results[].output`. Every field is
//! required; a missing or mistyped one fails the load with serde's location.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::document;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceDocument {
    pub results: Vec<SourceResult>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceResult {
    pub output: SourceRecord,
}

/// One scraped listing. Read-only input to the jobs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceRecord {
    pub title: String,
    pub location: String,
    pub description: String,
    pub guests: u32,
    pub bedrooms: u32,
    pub beds: u32,
    pub bathrooms: u32,
    pub price_per_night: f64,
    /// Comma-separated amenity names.
    pub amenities: String,
    pub rating: f64,
    /// Comma-separated photo URLs, in display order.
    pub photo_urls: String,
}

impl SourceRecord {
    /// Raw comma-split segments of `photo_urls`, untrimmed, empty ones included.
    pub fn photo_urls(&self) -> impl Iterator<Item = &str> + '_ {
        self.photo_urls.split(',')
    }

    pub fn amenity_list(&self) -> impl Iterator<Item = &str> + '_ {
        self.amenities
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

/// Loads the extraction document and unwraps the listing records in order.
pub fn load_source(path: &Path) -> Result<Vec<SourceRecord>> {
    let doc: SourceDocument = document::read_json(path)?;
    let records: Vec<SourceRecord> = doc.results.into_iter().map(|r| r.output).collect();
    tracing::debug!("loaded {} source records from {}", records.len(), path.display());
    Ok(records)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::fs;

    pub(crate) fn record(title: &str, photo_urls: &str) -> SourceRecord {
        SourceRecord {
            title: title.to_string(),
            location: "Atibaia, SP".to_string(),
            description: "Casa ampla com piscina e churrasqueira.".to_string(),
            guests: 12,
            bedrooms: 4,
            beds: 8,
            bathrooms: 3,
            price_per_night: 420.0,
            amenities: "Piscina, Wi-Fi, Churrasqueira".to_string(),
            rating: 4.91,
            photo_urls: photo_urls.to_string(),
        }
    }

    #[test]
    fn photo_urls_keep_raw_positions() {
        let r = record("x", "http://b/1.jpg,,http://b/3.jpg ");
        let urls: Vec<&str> = r.photo_urls().collect();
        assert_eq!(urls, vec!["http://b/1.jpg", "", "http://b/3.jpg "]);
    }

    #[test]
    fn amenity_list_trims_and_drops_empty() {
        let mut r = record("x", "");
        r.amenities = " Piscina ,, Wi-Fi,".to_string();
        let list: Vec<&str> = r.amenity_list().collect();
        assert_eq!(list, vec!["Piscina", "Wi-Fi"]);
    }

    #[test]
    fn load_source_unwraps_results() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("extract.json");
        let doc = SourceDocument {
            results: vec![
                SourceResult {
                    output: record("Casa 1", "http://a/1.jpg"),
                },
                SourceResult {
                    output: record("Casa 2", "http://a/2.jpg"),
                },
            ],
        };
        fs::write(&path, serde_json::to_vec(&doc).unwrap()).unwrap();
        let records = load_source(&path).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].title, "Casa 2");
    }

    #[test]
    fn load_source_fails_fast_on_missing_field() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("extract.json");
        fs::write(
            &path,
            r#"{"results": [{"output": {"title": "Casa", "location": "SP"}}]}"#,
        )
        .unwrap();
        let msg = format!("{:#}", load_source(&path).unwrap_err());
        assert!(msg.contains("missing field"), "{msg}");
        assert!(msg.contains("extract.json"), "{msg}");
    }

    #[test]
    fn load_source_rejects_wrong_type() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("extract.json");
        let mut value = serde_json::to_value(SourceDocument {
            results: vec![SourceResult {
                output: record("Casa", ""),
            }],
        })
        .unwrap();
        value["results"][0]["output"]["guests"] = serde_json::json!("twelve");
        fs::write(&path, value.to_string()).unwrap();
        assert!(load_source(&path).is_err());
    }
}
