//! CLI for the rentseed data-preparation jobs.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use rentseed_core::config::{self, SeedConfig};
use std::path::PathBuf;

use commands::{run_completions, run_fabricate, run_photos, run_rewrite};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "rentseed")]
#[command(about = "rentseed: prepare a fictional vacation-rental listing dataset", long_about = None)]
pub struct Cli {
    /// Config file to use instead of ~/.config/rentseed/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Download every listing photo and write download_log.json.
    Photos {
        /// Scraped extraction document.
        #[arg(long, value_name = "PATH")]
        source: Option<PathBuf>,
        /// Destination directory (created if missing).
        #[arg(long, value_name = "DIR")]
        dest: Option<PathBuf>,
    },

    /// Create fictional listings from the scraped records.
    Fabricate {
        /// Scraped extraction document.
        #[arg(long, value_name = "PATH")]
        source: Option<PathBuf>,
        /// Where to write the fabricated listings.
        #[arg(long, value_name = "PATH")]
        output: Option<PathBuf>,
        /// Seed for price, rating and review sampling (random if omitted).
        #[arg(long, value_name = "N")]
        seed: Option<u64>,
    },

    /// Rewrite listing descriptions through the text-generation API.
    Rewrite {
        /// Fabricated listings to read.
        #[arg(long, value_name = "PATH")]
        input: Option<PathBuf>,
        /// Where to write the updated listings.
        #[arg(long, value_name = "PATH")]
        output: Option<PathBuf>,
    },

    /// Print a shell completion script to stdout.
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn load_config(path: Option<&PathBuf>) -> Result<SeedConfig> {
    match path {
        Some(p) => config::load_from(p),
        None => config::load_or_init(),
    }
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        // Completions need no config file.
        if let CliCommand::Completions { shell } = cli.command {
            return run_completions(shell);
        }

        let cfg = load_config(cli.config.as_ref())?;
        tracing::debug!("loaded config: {:?}", cfg.paths);
        cli.command.dispatch(&cfg)
    }

    fn dispatch(self, cfg: &SeedConfig) -> Result<()> {
        match self {
            CliCommand::Photos { source, dest } => {
                let source = source.unwrap_or_else(|| cfg.paths.source.clone());
                let dest = dest.unwrap_or_else(|| cfg.paths.photos_dir.clone());
                run_photos(cfg, &source, &dest)
            }
            CliCommand::Fabricate {
                source,
                output,
                seed,
            } => {
                let source = source.unwrap_or_else(|| cfg.paths.source.clone());
                let output = output.unwrap_or_else(|| cfg.paths.fictional.clone());
                run_fabricate(cfg, &source, &output, seed)
            }
            CliCommand::Rewrite { input, output } => {
                let input = input.unwrap_or_else(|| cfg.paths.fictional.clone());
                let output = output.unwrap_or_else(|| cfg.paths.fictional_final.clone());
                run_rewrite(cfg, &input, &output)
            }
            CliCommand::Completions { shell } => run_completions(shell),
        }
    }
}

#[cfg(test)]
mod tests;
