//! Tests for the job subcommands and global flags.

use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::{CommandFactory, Parser};
use std::path::Path;

#[test]
fn cli_definition_is_consistent() {
    Cli::command().debug_assert();
}

#[test]
fn cli_parse_photos_defaults() {
    let cli = parse(&["rentseed", "photos"]);
    assert!(cli.config.is_none());
    match cli.command {
        CliCommand::Photos { source, dest } => {
            assert!(source.is_none());
            assert!(dest.is_none());
        }
        _ => panic!("expected Photos"),
    }
}

#[test]
fn cli_parse_photos_overrides() {
    let cli = parse(&[
        "rentseed",
        "photos",
        "--source",
        "extract.json",
        "--dest",
        "/tmp/fotos",
    ]);
    match cli.command {
        CliCommand::Photos { source, dest } => {
            assert_eq!(source.as_deref(), Some(Path::new("extract.json")));
            assert_eq!(dest.as_deref(), Some(Path::new("/tmp/fotos")));
        }
        _ => panic!("expected Photos with overrides"),
    }
}

#[test]
fn cli_parse_fabricate_seed() {
    match parse(&["rentseed", "fabricate", "--seed", "42", "--output", "out.json"]).command {
        CliCommand::Fabricate {
            source,
            output,
            seed,
        } => {
            assert!(source.is_none());
            assert_eq!(output.as_deref(), Some(Path::new("out.json")));
            assert_eq!(seed, Some(42));
        }
        _ => panic!("expected Fabricate"),
    }
}

#[test]
fn cli_parse_rewrite_with_global_config() {
    let cli = parse(&[
        "rentseed",
        "rewrite",
        "--input",
        "in.json",
        "--config",
        "/etc/rentseed.toml",
    ]);
    assert_eq!(cli.config.as_deref(), Some(Path::new("/etc/rentseed.toml")));
    match cli.command {
        CliCommand::Rewrite { input, output } => {
            assert_eq!(input.as_deref(), Some(Path::new("in.json")));
            assert!(output.is_none());
        }
        _ => panic!("expected Rewrite"),
    }
}

#[test]
fn cli_parse_completions() {
    match parse(&["rentseed", "completions", "bash"]).command {
        CliCommand::Completions { shell } => assert_eq!(shell, clap_complete::Shell::Bash),
        _ => panic!("expected Completions"),
    }
}

#[test]
fn cli_rejects_unknown_subcommand_and_bad_seed() {
    assert!(Cli::try_parse_from(["rentseed", "status"]).is_err());
    assert!(Cli::try_parse_from(["rentseed", "fabricate", "--seed", "abc"]).is_err());
}
