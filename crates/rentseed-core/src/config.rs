use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variable overriding `api.api_key`.
pub const API_KEY_ENV: &str = "BUILT_IN_FORGE_API_KEY";
/// Environment variable overriding `api.base_url`.
pub const API_URL_ENV: &str = "BUILT_IN_FORGE_API_URL";

/// Input and output locations for the three jobs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Scraped extraction document (`results[].output`).
    pub source: PathBuf,
    /// Destination directory for downloaded photos and `download_log.json`.
    pub photos_dir: PathBuf,
    /// Fabricated records with provisional descriptions.
    pub fictional: PathBuf,
    /// Fabricated records after description rewriting.
    pub fictional_final: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            source: PathBuf::from("extract_property_data.json"),
            photos_dir: PathBuf::from("data/chacaras-fotos"),
            fictional: PathBuf::from("data/fictional_properties.json"),
            fictional_final: PathBuf::from("data/fictional_properties_final.json"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Per-request timeout in seconds (photo GETs and API calls).
    pub timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self { timeout_secs: 30 }
    }
}

/// Text-generation API used by the description rewriter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
    /// Bearer credential. Never written to the default config file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    pub temperature: f64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.manus.im".to_string(),
            api_key: None,
            temperature: 0.8,
        }
    }
}

/// Inclusive integer range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntRange {
    pub min: u32,
    pub max: u32,
}

/// Inclusive float range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FloatRange {
    pub min: f64,
    pub max: f64,
}

/// Target nightly price band. Prices below `min` are redrawn from `[min, split]`,
/// prices above `max` from `[split, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceBand {
    pub min: u32,
    pub split: u32,
    pub max: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FabricateConfig {
    pub price: PriceBand,
    pub rating: FloatRange,
    pub reviews: IntRange,
    /// Number of leading photo URLs kept per record.
    pub max_photos: usize,
    /// Characters of the source description kept in the provisional one.
    pub description_excerpt: usize,
}

impl Default for FabricateConfig {
    fn default() -> Self {
        Self {
            price: PriceBand {
                min: 300,
                split: 450,
                max: 600,
            },
            rating: FloatRange { min: 4.7, max: 5.0 },
            reviews: IntRange { min: 15, max: 85 },
            max_photos: 5,
            description_excerpt: 200,
        }
    }
}

/// Global configuration loaded from `~/.config/rentseed/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeedConfig {
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub http: HttpConfig,
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub fabricate: FabricateConfig,
}

impl SeedConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.http.timeout_secs)
    }

    /// Rejects settings the jobs cannot run with.
    pub fn validate(&self) -> Result<()> {
        let p = &self.fabricate.price;
        if !(p.min <= p.split && p.split <= p.max) {
            anyhow::bail!(
                "fabricate.price must satisfy min <= split <= max (got {} / {} / {})",
                p.min,
                p.split,
                p.max
            );
        }
        let r = &self.fabricate.rating;
        if !(r.min <= r.max) {
            anyhow::bail!("fabricate.rating.min {} exceeds max {}", r.min, r.max);
        }
        let n = &self.fabricate.reviews;
        if n.min > n.max {
            anyhow::bail!("fabricate.reviews.min {} exceeds max {}", n.min, n.max);
        }
        if self.http.timeout_secs == 0 {
            anyhow::bail!("http.timeout_secs must be greater than zero");
        }
        Ok(())
    }

    /// Applies `BUILT_IN_FORGE_API_URL` / `BUILT_IN_FORGE_API_KEY` when set.
    pub fn apply_env(&mut self) {
        self.apply_env_from(|key| std::env::var(key).ok());
    }

    fn apply_env_from(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup(API_URL_ENV).filter(|v| !v.trim().is_empty()) {
            self.api.base_url = url;
        }
        if let Some(key) = lookup(API_KEY_ENV).filter(|v| !v.trim().is_empty()) {
            self.api.api_key = Some(key);
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("rentseed")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<SeedConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = SeedConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return finish(default_cfg);
    }
    load_from(&path)
}

/// Load configuration from an explicit file. Missing sections fall back to defaults.
pub fn load_from(path: &Path) -> Result<SeedConfig> {
    let data = fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("read config {}: {}", path.display(), e))?;
    let cfg: SeedConfig = toml::from_str(&data)
        .map_err(|e| anyhow::anyhow!("parse config {}: {}", path.display(), e))?;
    finish(cfg)
}

fn finish(mut cfg: SeedConfig) -> Result<SeedConfig> {
    cfg.apply_env();
    cfg.validate()?;
    Ok(cfg)
}
