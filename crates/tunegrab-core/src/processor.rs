//! Per-file retag-and-rename orchestration.
//!
//! Planning is pure (dry runs stop there); applying a plan shells out to the
//! media tool for a stream-copy retag into a temp file, then moves the temp
//! file onto the candidate name and removes the original. Failures leave the
//! original file untouched.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::error::ProcessError;
use crate::exec::CommandRunner;
use crate::tags::{infer_tag, InferredTag};

/// Result of one file's processing. Ephemeral; reported to the user and
/// dropped.
#[derive(Debug)]
pub enum ProcessingOutcome {
    Renamed(PathBuf),
    Skipped(&'static str),
    Failed(ProcessError),
}

/// Everything needed to retag and rename one file. Computing a plan has no
/// side effects.
#[derive(Debug, Clone)]
pub struct RenamePlan {
    pub source: PathBuf,
    pub tag: InferredTag,
    /// Candidate filename, filesystem-safe.
    pub new_name: String,
}

impl RenamePlan {
    fn dir(&self) -> &Path {
        self.source.parent().unwrap_or_else(|| Path::new(""))
    }

    /// Final path the file will be moved to.
    pub fn target(&self) -> PathBuf {
        self.dir().join(&self.new_name)
    }

    /// Scratch path for the retagged copy, next to the source. Derived from
    /// the source name, so concurrent runs over one directory would collide;
    /// this tool assumes single-instance use.
    pub fn temp_path(&self) -> PathBuf {
        let base = self.source.file_name().unwrap_or_default();
        self.dir().join(format!("temp_{}", base.to_string_lossy()))
    }
}

/// `"<artist> - <title>.<ext>"` with `/` and `:` replaced; no other
/// characters are escaped.
pub fn candidate_filename(tag: &InferredTag, extension: &str) -> String {
    format!("{} - {}.{}", tag.artist, tag.title, extension)
        .replace('/', "_")
        .replace(':', "-")
}

/// Compute the plan for one path.
///
/// Returns `None` for directories and names without the expected extension
/// (a silent no-op per the pipeline contract, not an error).
pub fn plan_rename(path: &Path, default_artist: Option<&str>, extension: &str) -> Option<RenamePlan> {
    let name = path.file_name()?.to_str()?;
    if !name.ends_with(&format!(".{extension}")) || path.is_dir() {
        return None;
    }

    let tag = infer_tag(name, default_artist, extension);
    let new_name = candidate_filename(&tag, extension);
    Some(RenamePlan {
        source: path.to_path_buf(),
        tag,
        new_name,
    })
}

fn retag_args(plan: &RenamePlan, temp: &Path) -> Vec<String> {
    vec![
        "-i".to_string(),
        plan.source.to_string_lossy().into_owned(),
        "-c".to_string(),
        "copy".to_string(),
        "-metadata".to_string(),
        format!("title={}", plan.tag.title),
        "-metadata".to_string(),
        format!("artist={}", plan.tag.artist),
        "-y".to_string(),
        temp.to_string_lossy().into_owned(),
    ]
}

/// Execute a plan: retag into a temp file, move it onto the candidate name,
/// delete the original if the name changed.
///
/// A non-zero media-tool exit maps to [`ProcessError::ToolFailure`] with the
/// captured stderr and leaves the original untouched.
pub fn apply_plan(
    plan: &RenamePlan,
    media_tool: &str,
    runner: &dyn CommandRunner,
) -> Result<PathBuf, ProcessError> {
    let temp = plan.temp_path();
    let output = runner.run_captured(media_tool, &retag_args(plan, &temp))?;
    if !output.success() {
        let detail = output.stderr.trim();
        return Err(ProcessError::ToolFailure {
            tool: media_tool.to_string(),
            status: output.status_label(),
            detail: if detail.is_empty() {
                "no diagnostic output".to_string()
            } else {
                detail.to_string()
            },
        });
    }

    let target = plan.target();
    // Best-effort atomic: a move, not copy+delete.
    fs::rename(&temp, &target)?;
    if target != plan.source && target.exists() {
        fs::remove_file(&plan.source)?;
    }
    tracing::info!(from = %plan.source.display(), to = %target.display(), "renamed");
    Ok(target)
}

/// Snapshot of regular files in `dir` with the expected extension, sorted
/// for a stable processing order. Taken once per batch run; files added or
/// removed afterwards are not re-scanned.
pub fn list_audio_files(dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    let suffix = format!(".{extension}");
    let mut files = Vec::new();
    for entry in
        fs::read_dir(dir).with_context(|| format!("failed to read directory {}", dir.display()))?
    {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
            if name.ends_with(&suffix) {
                files.push(path);
            }
        }
    }
    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exec::ToolOutput;
    use std::io;

    /// Fake media tool: on success, writes the output file the way ffmpeg
    /// would; on failure, exits non-zero with stderr and touches nothing.
    struct FakeRetagger {
        succeed: bool,
    }

    impl CommandRunner for FakeRetagger {
        fn run_captured(&self, _program: &str, args: &[String]) -> io::Result<ToolOutput> {
            if self.succeed {
                let temp = args.last().expect("output path argument");
                fs::write(temp, b"retagged audio")?;
                Ok(ToolOutput {
                    status: Some(0),
                    stdout: String::new(),
                    stderr: String::new(),
                })
            } else {
                Ok(ToolOutput {
                    status: Some(1),
                    stdout: String::new(),
                    stderr: "moov atom not found".to_string(),
                })
            }
        }

        fn run_passthrough(&self, _program: &str, _args: &[String]) -> io::Result<Option<i32>> {
            unreachable!("retag path never uses passthrough")
        }
    }

    fn touch(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, b"original audio").unwrap();
        path
    }

    #[test]
    fn plan_skips_directories_and_other_extensions() {
        let dir = tempfile::tempdir().unwrap();
        assert!(plan_rename(dir.path(), None, "m4a").is_none());

        let other = touch(dir.path(), "notes.txt");
        assert!(plan_rename(&other, None, "m4a").is_none());
    }

    #[test]
    fn planning_touches_nothing() {
        // Dry runs stop at the plan, so planning itself must be pure.
        let dir = tempfile::tempdir().unwrap();
        let source = touch(dir.path(), "Random Song Title [q1w2e3].m4a");

        let plan = plan_rename(&source, None, "m4a").unwrap();
        let entries = fs::read_dir(dir.path()).unwrap().count();
        assert_eq!(entries, 1);
        assert!(!plan.target().exists());
        assert!(!plan.temp_path().exists());
    }

    #[test]
    fn candidate_filename_replaces_slash_and_colon() {
        let tag = InferredTag {
            artist: "Unknown Artist".to_string(),
            title: "Live: Session A/B".to_string(),
        };
        assert_eq!(
            candidate_filename(&tag, "m4a"),
            "Unknown Artist - Live- Session A_B.m4a"
        );
    }

    #[test]
    fn successful_apply_renames_and_removes_original() {
        let dir = tempfile::tempdir().unwrap();
        let source = touch(dir.path(), "Random Song Title [q1w2e3].m4a");

        let plan = plan_rename(&source, None, "m4a").unwrap();
        assert_eq!(plan.new_name, "Unknown Artist - Random Song Title.m4a");

        let target = apply_plan(&plan, "ffmpeg", &FakeRetagger { succeed: true }).unwrap();
        assert_eq!(target, dir.path().join("Unknown Artist - Random Song Title.m4a"));
        assert!(target.is_file());
        assert!(!source.exists(), "original should be removed");
        assert!(!plan.temp_path().exists(), "temp file should be moved away");
    }

    #[test]
    fn failed_retag_preserves_original_and_reports_stderr() {
        let dir = tempfile::tempdir().unwrap();
        let source = touch(dir.path(), "Random Song Title [q1w2e3].m4a");

        let plan = plan_rename(&source, None, "m4a").unwrap();
        let err = apply_plan(&plan, "ffmpeg", &FakeRetagger { succeed: false }).unwrap_err();

        match &err {
            ProcessError::ToolFailure { tool, detail, .. } => {
                assert_eq!(tool, "ffmpeg");
                assert!(detail.contains("moov atom not found"));
            }
            other => panic!("expected ToolFailure, got {other:?}"),
        }
        assert!(source.exists(), "original must survive a failed retag");
        assert!(!plan.target().exists());
    }

    #[test]
    fn apply_is_a_plain_replace_when_name_is_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let source = touch(dir.path(), "Tyler Childers - Feathered Indians.m4a");

        let plan = plan_rename(&source, None, "m4a").unwrap();
        assert_eq!(plan.target(), source);

        let target = apply_plan(&plan, "ffmpeg", &FakeRetagger { succeed: true }).unwrap();
        assert_eq!(target, source);
        assert!(target.is_file());
        assert_eq!(fs::read(&target).unwrap(), b"retagged audio");
    }

    #[test]
    fn retag_args_shape() {
        let plan = RenamePlan {
            source: PathBuf::from("a.m4a"),
            tag: InferredTag {
                artist: "Blaze Foley".to_string(),
                title: "Clay Pigeons".to_string(),
            },
            new_name: "Blaze Foley - Clay Pigeons.m4a".to_string(),
        };
        let args = retag_args(&plan, Path::new("temp_a.m4a"));
        assert_eq!(
            args,
            vec![
                "-i",
                "a.m4a",
                "-c",
                "copy",
                "-metadata",
                "title=Clay Pigeons",
                "-metadata",
                "artist=Blaze Foley",
                "-y",
                "temp_a.m4a"
            ]
        );
    }

    #[test]
    fn list_audio_files_is_a_sorted_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "b.m4a");
        touch(dir.path(), "a.m4a");
        touch(dir.path(), "notes.txt");
        fs::create_dir(dir.path().join("sub.m4a")).unwrap();

        let files = list_audio_files(dir.path(), "m4a").unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["a.m4a", "b.m4a"]);
    }
}
