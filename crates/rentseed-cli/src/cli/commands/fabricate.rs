//! `rentseed fabricate` – create fictional listings from scraped records.

use anyhow::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rentseed_core::config::SeedConfig;
use rentseed_core::fabricate::{self, FictionalProperty, Fixtures};
use rentseed_core::source;
use std::path::Path;

fn print_summary(props: &[FictionalProperty]) {
    println!("\n=== Listings ===\n");
    for p in props {
        println!("{:2}. {}", p.id, p.fictional_name);
        println!("    Owner: {}", p.owner.name);
        println!("    Capacity: {} guests | {} bedrooms", p.guests, p.bedrooms);
        println!("    Price: R$ {}/night", p.price_per_night);
        println!(
            "    Rating: {} ({} reviews)",
            p.fictional_rating, p.fictional_reviews_count
        );
        println!();
    }
}

pub fn run_fabricate(
    cfg: &SeedConfig,
    source_path: &Path,
    output: &Path,
    seed: Option<u64>,
) -> Result<()> {
    let records = source::load_source(source_path)?;
    let mut rng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    };
    let props = fabricate::fabricate(&records, &Fixtures::builtin(), &cfg.fabricate, &mut rng)?;
    fabricate::save_properties(output, &props)?;
    tracing::info!("fabricated {} listings into {}", props.len(), output.display());

    println!("✅ {} fictional listings created", props.len());
    println!("📁 Saved to: {}", output.display());
    print_summary(&props);
    Ok(())
}
