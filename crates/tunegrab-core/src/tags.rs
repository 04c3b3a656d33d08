//! Filename → (artist, title) inference.

use crate::rules::{RuleOutcome, RULES};
use crate::title::{clean_title, polish_title};

/// Sentinel artist when no rule matches and no default was supplied.
pub const UNKNOWN_ARTIST: &str = "Unknown Artist";

/// Structured metadata inferred from a raw filename. `artist` is never
/// empty; `title` is polished (trimmed, whitespace collapsed).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InferredTag {
    pub artist: String,
    pub title: String,
}

/// Map a raw on-disk filename to an [`InferredTag`].
///
/// Deterministic: clean the name, run the ordered artist rules (first match
/// wins, falling back to `default_artist` or [`UNKNOWN_ARTIST`]), then polish
/// the working title. If polishing collapses the title to nothing, the
/// cleaned name is used instead so we never tag a track with an empty title.
pub fn infer_tag(filename: &str, default_artist: Option<&str>, extension: &str) -> InferredTag {
    let clean_name = clean_title(filename, extension);

    let outcome = match RULES.iter().find(|rule| rule.matches(&clean_name)) {
        Some(rule) => {
            tracing::debug!(rule = rule.name(), file = filename, "artist rule matched");
            rule.apply(&clean_name)
        }
        None => RuleOutcome {
            artist: default_artist
                .filter(|artist| !artist.is_empty())
                .unwrap_or(UNKNOWN_ARTIST)
                .to_string(),
            working_title: clean_name.clone(),
        },
    };

    let mut title = polish_title(&outcome.working_title);
    if title.is_empty() {
        title = polish_title(&clean_name);
    }

    InferredTag {
        artist: outcome.artist,
        title,
    }
}
