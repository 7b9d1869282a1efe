//! `rentseed rewrite` – regenerate descriptions through the completion API.

use anyhow::Result;
use rentseed_core::config::{SeedConfig, API_KEY_ENV};
use rentseed_core::fabricate;
use rentseed_core::rewrite::{self, ForgeClient, RewriteEvent};
use std::path::Path;

fn print_event(ev: &RewriteEvent<'_>) {
    match ev {
        RewriteEvent::Rewritten { index, total, name } => println!("{index}/{total} - {name}... ✓"),
        RewriteEvent::Kept {
            index,
            total,
            name,
            error,
        } => println!("{index}/{total} - {name}... ✗ kept previous description ({error})"),
    }
}

pub fn run_rewrite(cfg: &SeedConfig, input: &Path, output: &Path) -> Result<()> {
    let mut props = fabricate::load_properties(input)?;
    let client = ForgeClient::from_config(&cfg.api, cfg.timeout())?;
    if cfg.api.api_key.is_none() {
        tracing::warn!("no API key configured (set api.api_key or {})", API_KEY_ENV);
    }
    tracing::debug!("completion endpoint: {}", client.endpoint());

    println!("🔄 Rewriting {} descriptions...\n", props.len());
    let report = rewrite::rewrite_descriptions(&mut props, &client, cfg.api.temperature, print_event);
    fabricate::save_properties(output, &props)?;

    println!(
        "\n✅ {} rewritten, {} kept",
        report.rewritten, report.kept
    );
    println!("📁 Saved to: {}", output.display());
    Ok(())
}
