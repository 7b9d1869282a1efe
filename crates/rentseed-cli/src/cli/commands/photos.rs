//! `rentseed photos` – download listing photos.

use anyhow::Result;
use rentseed_core::config::SeedConfig;
use rentseed_core::photos::{self, CurlFetcher, PhotoEvent};
use rentseed_core::source;
use std::path::Path;

fn print_event(ev: &PhotoEvent<'_>) {
    match ev {
        PhotoEvent::Group { index, title } => println!("\n=== Chácara {index}: {title} ==="),
        PhotoEvent::Saved { photo, filename, .. } => println!("  photo {photo}: ✓ {filename}"),
        PhotoEvent::Failed { photo, error, .. } => println!("  photo {photo}: ✗ {error}"),
        PhotoEvent::Skipped { .. } => {}
    }
}

pub fn run_photos(cfg: &SeedConfig, source_path: &Path, dest: &Path) -> Result<()> {
    let records = source::load_source(source_path)?;
    let fetcher = CurlFetcher::new(cfg.timeout());
    let report = photos::download_photos(&records, dest, &fetcher, print_event)?;

    println!("\n=== Summary ===");
    println!("Photos downloaded: {}/{}", report.saved(), report.expected);
    if report.failed > 0 {
        println!("Failed: {}", report.failed);
    }
    if let Some(dir) = report.log_path.parent() {
        println!("Directory: {}", dir.display());
    }
    println!("Log saved to: {}", report.log_path.display());
    Ok(())
}
