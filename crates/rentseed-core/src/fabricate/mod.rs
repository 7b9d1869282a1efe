//! Record fabricator: turns scraped listings into fictional ones.
//!
//! Each source listing gets a sequential id, a fictional name and owner from
//! the fixture pools, a price pulled into the target band, a synthetic rating
//! and review count, its first few photos, and a provisional description that
//! the rewriter replaces later.

mod fixtures;

pub use fixtures::{Fixtures, Gender, Owner};

use anyhow::Result;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::config::{FabricateConfig, FloatRange, IntRange, PriceBand};
use crate::document;
use crate::source::SourceRecord;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FabricateError {
    /// More listings than fictional names or owners; pools are never reused.
    #[error("insufficient fixture data: {needed} listings but only {names} names and {owners} owners")]
    InsufficientFixtures {
        needed: usize,
        names: usize,
        owners: usize,
    },
}

/// A fabricated listing as stored in `fictional_properties*.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FictionalProperty {
    pub id: usize,
    pub fictional_name: String,
    pub original_title: String,
    pub original_location: String,
    pub description_rewritten: String,
    pub guests: u32,
    pub bedrooms: u32,
    pub beds: u32,
    pub bathrooms: u32,
    pub price_per_night: u32,
    /// Comma-separated amenity names, copied from the source.
    pub amenities: String,
    pub owner: Owner,
    pub original_rating: f64,
    pub fictional_rating: f64,
    pub fictional_reviews_count: u32,
    pub photo_urls: Vec<String>,
    pub available_all_dates: bool,
}

impl FictionalProperty {
    pub fn amenity_list(&self) -> impl Iterator<Item = &str> + '_ {
        self.amenities
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

/// Pulls `original` into the band: low prices are redrawn from `[min, split]`,
/// high ones from `[split, max]`, in-band ones are truncated to whole units.
pub fn rebucket_price<R: Rng + ?Sized>(original: f64, band: &PriceBand, rng: &mut R) -> u32 {
    if original < f64::from(band.min) {
        rng.gen_range(band.min..=band.split)
    } else if original > f64::from(band.max) {
        rng.gen_range(band.split..=band.max)
    } else {
        original as u32
    }
}

/// Uniform draw in `range`, rounded to one decimal.
pub fn synthetic_rating<R: Rng + ?Sized>(range: &FloatRange, rng: &mut R) -> f64 {
    let raw: f64 = rng.gen_range(range.min..=range.max);
    (raw * 10.0).round() / 10.0
}

pub fn synthetic_reviews<R: Rng + ?Sized>(range: &IntRange, rng: &mut R) -> u32 {
    rng.gen_range(range.min..=range.max)
}

/// `"Venha conhecer {name}! "` + the first `excerpt` characters of `source` + `"..."`.
pub fn provisional_description(name: &str, source: &str, excerpt: usize) -> String {
    let head: String = source.chars().take(excerpt).collect();
    format!("Venha conhecer {name}! {head}...")
}

/// Leading `max` photo URLs by raw position, trimmed, blank segments dropped.
fn leading_photos(record: &SourceRecord, max: usize) -> Vec<String> {
    record
        .photo_urls()
        .take(max)
        .map(str::trim)
        .filter(|u| !u.is_empty())
        .map(str::to_string)
        .collect()
}

/// Fabricates one fictional listing per source record, in order.
///
/// Fails before producing anything when the fixture pools are smaller than
/// `records`.
pub fn fabricate<R: Rng + ?Sized>(
    records: &[SourceRecord],
    fixtures: &Fixtures,
    cfg: &FabricateConfig,
    rng: &mut R,
) -> Result<Vec<FictionalProperty>, FabricateError> {
    if records.len() > fixtures.capacity() {
        return Err(FabricateError::InsufficientFixtures {
            needed: records.len(),
            names: fixtures.names.len(),
            owners: fixtures.owners.len(),
        });
    }

    let props = records
        .iter()
        .zip(fixtures.names.iter().zip(fixtures.owners.iter()))
        .enumerate()
        .map(|(idx, (record, (name, owner)))| {
            let price = rebucket_price(record.price_per_night, &cfg.price, &mut *rng);
            if f64::from(price) != record.price_per_night.trunc() {
                tracing::debug!(
                    "listing {}: price {} rebucketed to {}",
                    idx + 1,
                    record.price_per_night,
                    price
                );
            }
            FictionalProperty {
                id: idx + 1,
                fictional_name: name.clone(),
                original_title: record.title.clone(),
                original_location: record.location.clone(),
                description_rewritten: provisional_description(
                    name,
                    &record.description,
                    cfg.description_excerpt,
                ),
                guests: record.guests,
                bedrooms: record.bedrooms,
                beds: record.beds,
                bathrooms: record.bathrooms,
                price_per_night: price,
                amenities: record.amenities.clone(),
                owner: owner.clone(),
                original_rating: record.rating,
                fictional_rating: synthetic_rating(&cfg.rating, &mut *rng),
                fictional_reviews_count: synthetic_reviews(&cfg.reviews, &mut *rng),
                photo_urls: leading_photos(record, cfg.max_photos),
                available_all_dates: true,
            }
        })
        .collect();
    Ok(props)
}

pub fn load_properties(path: &Path) -> Result<Vec<FictionalProperty>> {
    document::read_json(path)
}

pub fn save_properties(path: &Path, props: &[FictionalProperty]) -> Result<()> {
    document::write_json_pretty(path, props)
}
