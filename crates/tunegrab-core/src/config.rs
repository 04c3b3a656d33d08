use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Global configuration loaded from `~/.config/tunegrab/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TunegrabConfig {
    /// Audio container/extension requested from the downloader and scanned
    /// for by the normalize pipeline.
    pub audio_format: String,
    /// Downloader executable. Must understand yt-dlp style flags
    /// (`-x`, `--audio-format`, `--playlist-start`, `--playlist-end`).
    pub downloader: String,
    /// Media tool executable used for the stream-copy retag (ffmpeg-compatible).
    pub media_tool: String,
    /// Artist applied to files whose name matches no artist rule.
    /// The `--default-artist` flag takes precedence.
    #[serde(default)]
    pub default_artist: Option<String>,
}

impl Default for TunegrabConfig {
    fn default() -> Self {
        Self {
            audio_format: "m4a".to_string(),
            downloader: "yt-dlp".to_string(),
            media_tool: "ffmpeg".to_string(),
            default_artist: None,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("tunegrab")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<TunegrabConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = TunegrabConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: TunegrabConfig = toml::from_str(&data)?;
    Ok(cfg)
}
