//! Fetch pipeline: one downloader invocation per request.

use anyhow::Result;

use crate::config::TunegrabConfig;
use crate::exec::CommandRunner;

/// Inclusive 1-based playlist positions, passed through to the downloader
/// verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaylistRange {
    pub start: u32,
    pub end: u32,
}

/// One download request. Consumed by exactly one downloader invocation and
/// never persisted.
#[derive(Debug, Clone)]
pub struct FetchRequest {
    pub url: String,
    pub is_playlist: bool,
    /// Only meaningful when `is_playlist` is set; a playlist request without
    /// a range fetches the whole playlist.
    pub range: Option<PlaylistRange>,
}

impl FetchRequest {
    /// Downloader argument vector: extract audio in the configured format,
    /// range flags only for playlist requests, URL last.
    pub fn downloader_args(&self, audio_format: &str) -> Vec<String> {
        let mut args = vec![
            "-x".to_string(),
            "--audio-format".to_string(),
            audio_format.to_string(),
        ];
        if self.is_playlist {
            if let Some(range) = self.range {
                args.push("--playlist-start".to_string());
                args.push(range.start.to_string());
                args.push("--playlist-end".to_string());
                args.push(range.end.to_string());
            }
        }
        args.push(self.url.clone());
        args
    }
}

/// Issue the downloader invocation and wait for it to terminate.
///
/// Fire-and-forget: the exit status is logged but never acted on, and the
/// tool's stdio is inherited so its own progress output reaches the user.
/// Only a spawn failure (downloader not installed) surfaces as an error.
pub fn fetch(request: &FetchRequest, cfg: &TunegrabConfig, runner: &dyn CommandRunner) -> Result<()> {
    let args = request.downloader_args(&cfg.audio_format);
    tracing::info!(url = %request.url, playlist = request.is_playlist, "invoking {}", cfg.downloader);
    let status = runner.run_passthrough(&cfg.downloader, &args)?;
    tracing::debug!(?status, "downloader finished");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(url: &str, is_playlist: bool, range: Option<PlaylistRange>) -> FetchRequest {
        FetchRequest {
            url: url.to_string(),
            is_playlist,
            range,
        }
    }

    #[test]
    fn single_video_args() {
        let args = request("https://example.com/watch?v=abc", false, None).downloader_args("m4a");
        assert_eq!(
            args,
            vec!["-x", "--audio-format", "m4a", "https://example.com/watch?v=abc"]
        );
    }

    #[test]
    fn whole_playlist_has_no_range_flags() {
        let args = request("https://example.com/playlist?list=xyz", true, None).downloader_args("m4a");
        assert!(!args.iter().any(|a| a.starts_with("--playlist")));
        assert_eq!(args.last().map(String::as_str), Some("https://example.com/playlist?list=xyz"));
    }

    #[test]
    fn playlist_range_passed_through_verbatim() {
        let args = request(
            "https://example.com/playlist?list=xyz",
            true,
            Some(PlaylistRange { start: 3, end: 7 }),
        )
        .downloader_args("m4a");
        assert_eq!(
            args,
            vec![
                "-x",
                "--audio-format",
                "m4a",
                "--playlist-start",
                "3",
                "--playlist-end",
                "7",
                "https://example.com/playlist?list=xyz"
            ]
        );
    }

    #[test]
    fn range_ignored_for_single_video() {
        // Range is only meaningful for playlists.
        let args = request(
            "https://example.com/watch?v=abc",
            false,
            Some(PlaylistRange { start: 1, end: 2 }),
        )
        .downloader_args("m4a");
        assert!(!args.iter().any(|a| a.starts_with("--playlist")));
    }
}
