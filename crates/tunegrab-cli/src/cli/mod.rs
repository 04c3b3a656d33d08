//! CLI for tunegrab.

mod commands;
mod prompt;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tunegrab_core::config;

use commands::{run_fetch, run_normalize};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "tunegrab")]
#[command(about = "Download audio and normalize messy tags and filenames", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Download audio from a video or playlist URL.
    Fetch {
        /// Video or playlist URL. Prompted for when omitted.
        url: Option<String>,
    },

    /// Retag and rename downloaded audio files in the current directory.
    Normalize {
        /// Show what would be done without touching any file.
        #[arg(long)]
        dry_run: bool,

        /// Process exactly one file instead of scanning the directory.
        #[arg(long, value_name = "PATH")]
        file: Option<PathBuf>,

        /// Artist applied to files whose name matches no artist rule.
        #[arg(long, value_name = "NAME")]
        default_artist: Option<String>,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Fetch { url } => run_fetch(&cfg, url)?,
            CliCommand::Normalize {
                dry_run,
                file,
                default_artist,
            } => run_normalize(&cfg, dry_run, file, default_artist)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
