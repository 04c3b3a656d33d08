//! `tunegrab normalize` – retag and rename audio files.

use anyhow::Result;
use std::path::{Path, PathBuf};
use tunegrab_core::config::TunegrabConfig;
use tunegrab_core::error::ProcessError;
use tunegrab_core::exec::{CommandRunner, SystemRunner};
use tunegrab_core::processor::{apply_plan, list_audio_files, plan_rename, ProcessingOutcome};

use crate::cli::prompt;

pub fn run_normalize(
    cfg: &TunegrabConfig,
    dry_run: bool,
    file: Option<PathBuf>,
    default_artist: Option<String>,
) -> Result<()> {
    let runner = SystemRunner;
    // Flag wins over config.
    let default_artist = default_artist.or_else(|| cfg.default_artist.clone());

    if let Some(path) = file {
        if !path.exists() {
            return Err(
                ProcessError::InvalidInput(format!("file '{}' not found", path.display())).into(),
            );
        }
        println!("Processing single file: {}", path.display());
        process_one(&path, default_artist.as_deref(), dry_run, cfg, &runner);
        return Ok(());
    }

    let cwd = std::env::current_dir()?;
    let files = list_audio_files(&cwd, &cfg.audio_format)?;
    println!("Found {} .{} files to process.", files.len(), cfg.audio_format);

    let default_artist = match default_artist {
        Some(artist) => Some(artist),
        None => {
            println!("Some files may not have an artist name in their filename.");
            if prompt::yes_no("Would you like to set a default artist for these files? (y/n): ")? {
                Some(prompt::line("Enter default artist name (e.g. Tyler Childers): ")?)
            } else {
                None
            }
        }
    };

    if !dry_run {
        let message = format!(
            "This will update metadata and rename {} files. Continue? (y/n): ",
            files.len()
        );
        if !prompt::yes_no(&message)? {
            println!("Operation cancelled.");
            return Ok(());
        }
    }

    let total = files.len();
    for (index, path) in files.iter().enumerate() {
        println!("\nProcessing file {} of {}", index + 1, total);
        process_one(path, default_artist.as_deref(), dry_run, cfg, &runner);
    }

    println!("\nAll files processed!");
    Ok(())
}

/// Per-file driver. Every failure is reported and contained here, so one bad
/// file never aborts the batch.
fn process_one(
    path: &Path,
    default_artist: Option<&str>,
    dry_run: bool,
    cfg: &TunegrabConfig,
    runner: &dyn CommandRunner,
) -> ProcessingOutcome {
    let plan = match plan_rename(path, default_artist, &cfg.audio_format) {
        Some(plan) => plan,
        None => return ProcessingOutcome::Skipped("not a regular audio file"),
    };

    println!("Processing: {}", path.display());
    println!("  → Artist: {}", plan.tag.artist);
    println!("  → Title: {}", plan.tag.title);
    println!("  → New filename: {}", plan.new_name);

    if dry_run {
        println!("  → DRY RUN: No changes made");
        return ProcessingOutcome::Skipped("dry run");
    }

    match apply_plan(&plan, &cfg.media_tool, runner) {
        Ok(target) => {
            println!("Successfully processed: {}", plan.new_name);
            ProcessingOutcome::Renamed(target)
        }
        Err(err) => {
            println!("Error processing {}: {err}", path.display());
            tracing::warn!(file = %path.display(), error = %err, "file processing failed");
            ProcessingOutcome::Failed(err)
        }
    }
}
