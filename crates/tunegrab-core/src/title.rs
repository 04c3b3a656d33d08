//! Title cleaning and polish for downloaded video titles.
//!
//! Downloaded files are named `<video title> [<source id>].<ext>`, where the
//! video title is free text full of decorative noise. Cleaning strips the
//! mechanical suffixes; polish runs after artist extraction and tidies the
//! remaining text into a usable track title.

use lazy_static::lazy_static;
use regex::Regex;

/// Decorative suffix markers removed verbatim (case-sensitive substrings).
const DECORATIVE_MARKERS: [&str; 5] = [
    "(Official Audio)",
    "(Audio)",
    "(Official Video)",
    "(Official Music Video)",
    "(Live)",
];

lazy_static! {
    static ref ID_SUFFIX: Regex = Regex::new(r"\[[A-Za-z0-9_-]+\]$").unwrap();
    static ref WS_RUN: Regex = Regex::new(r"\s+").unwrap();
    static ref LEADING_DASH: Regex = Regex::new(r"^\s*-\s*").unwrap();
    static ref TRAILING_DASH_SPACED: Regex = Regex::new(r"\s+-\s*$").unwrap();
    static ref TRAILING_DASH_BARE: Regex = Regex::new(r"-\s*$").unwrap();
    static ref TRAILING_DASH_RUN: Regex = Regex::new(r"-+\s*$").unwrap();
}

/// Strip the audio extension, the trailing bracketed source-ID token, and the
/// decorative markers from a raw filename.
///
/// The extension is stripped whether or not an ID token precedes it, so
/// cleaning an already-normalized name (`Artist - Title.m4a`) yields
/// `Artist - Title` and renames stay idempotent.
pub fn clean_title(filename: &str, extension: &str) -> String {
    let suffix = format!(".{extension}");
    let stem = filename.strip_suffix(suffix.as_str()).unwrap_or(filename);
    let stem = ID_SUFFIX.replace(stem.trim_end(), "");

    let mut clean = stem.into_owned();
    for marker in DECORATIVE_MARKERS {
        clean = clean.replace(marker, "");
    }
    clean.trim().to_string()
}

/// Final title polish, applied to the working title after artist extraction.
///
/// Order matters and mirrors the rule engine's expectations: quotes first,
/// then whitespace collapse, look-alike punctuation, dash trimming, the
/// OurVinyl special case, and a last dash-run sweep for titles like
/// `Her and The Banks-`.
pub fn polish_title(title: &str) -> String {
    let mut t = title
        .trim_matches(|c| c == '\'' || c == '"')
        .trim()
        .to_string();
    t = WS_RUN.replace_all(&t, " ").into_owned();
    // Full-width / math look-alikes the source platform substitutes for
    // characters it bans in titles.
    t = t.replace('⧸', "/").replace('＂', "\"").replace('｜', "|");
    t = LEADING_DASH.replace(&t, "").into_owned();
    t = TRAILING_DASH_SPACED.replace(&t, "").into_owned();
    t = TRAILING_DASH_BARE.replace(&t, "").into_owned();
    if t == "| OurVinyl Sessions" {
        t = "OurVinyl Sessions".to_string();
    }
    t = TRAILING_DASH_RUN.replace(&t, "").into_owned();
    t.trim().to_string()
}
