//! `tunegrab fetch` – collect intent and issue one downloader invocation.

use anyhow::Result;
use tunegrab_core::config::TunegrabConfig;
use tunegrab_core::exec::SystemRunner;
use tunegrab_core::fetch::{fetch, FetchRequest, PlaylistRange};

use crate::cli::prompt;

pub fn run_fetch(cfg: &TunegrabConfig, url: Option<String>) -> Result<()> {
    let url = match url {
        Some(url) => url,
        None => prompt::line("Enter the video or playlist URL: ")?,
    };

    // A URL that mentions "playlist" is one; otherwise ask.
    let is_playlist =
        url.contains("playlist") || prompt::yes_no("Is this a playlist (y/n)? ")?;

    let mut range = None;
    if is_playlist
        && prompt::yes_no("Do you want to download a specific range of videos from the playlist (y/n)? ")?
    {
        let start = prompt::positive_number("Enter the starting video number: ")?;
        let end = prompt::positive_number("Enter the ending video number: ")?;
        range = Some(PlaylistRange { start, end });
    }

    let request = FetchRequest {
        url,
        is_playlist,
        range,
    };
    fetch(&request, cfg, &SystemRunner)
}
