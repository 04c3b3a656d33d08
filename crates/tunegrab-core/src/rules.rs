//! Ordered artist-detection rules.
//!
//! Rules are tried in a fixed order and the first match wins; each one both
//! names the artist and strips artist-identifying text out of the working
//! title. Matching is plain substring matching on the cleaned name, so a
//! title that mentions an artist incidentally is still attributed to them.
//! That is an accepted limitation of the heuristic, not something a rule
//! should try to outsmart.

use lazy_static::lazy_static;
use regex::Regex;

/// Output of a matched rule: the artist and the working title with the
/// artist-identifying substrings removed (final polish happens later).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleOutcome {
    pub artist: String,
    pub working_title: String,
}

/// One artist-detection heuristic.
pub trait ArtistRule: Send + Sync {
    fn name(&self) -> &'static str;
    fn matches(&self, clean_name: &str) -> bool;
    fn apply(&self, clean_name: &str) -> RuleOutcome;
}

/// Fixed rule order; the inference engine falls back to the caller-supplied
/// default artist when none of these match.
pub static RULES: [&dyn ArtistRule; 2] = [&TylerChildersRule, &BlazeFoleyRule];

lazy_static! {
    static ref DUPLICATE_TYLER: Regex = Regex::new(r"\s*Tyler Childers\s*").unwrap();
    static ref FOOD_STAMPS: Regex = Regex::new(r"(?i)the Food Stamps\s*-\s*").unwrap();
    static ref SENORA_MAY_DASH: Regex = Regex::new(r"Senora May\s*-?\s*").unwrap();
    static ref SENORA_MAY_WS: Regex = Regex::new(r"Senora May\s+").unwrap();
}

/// Tyler Childers uploads come in many shapes: plain `Artist - Title`,
/// `Artist and <backing band>`, duets with Senora May, unreleased live cuts
/// that repeat the artist name inside the title.
pub struct TylerChildersRule;

impl ArtistRule for TylerChildersRule {
    fn name(&self) -> &'static str {
        "tyler-childers"
    }

    fn matches(&self, clean_name: &str) -> bool {
        clean_name.contains("Tyler Childers")
    }

    fn apply(&self, clean_name: &str) -> RuleOutcome {
        let mut artist = "Tyler Childers".to_string();
        let mut title = clean_name
            .replace("Tyler Childers - ", "")
            .replace("Tyler Childers and ", "")
            .trim()
            .to_string();

        // Titles like "Lady May Tyler Childers (Unreleased)" repeat the
        // artist after the song name.
        if title.contains("Tyler Childers") {
            title = DUPLICATE_TYLER.replace_all(&title, "").into_owned();
            title = title.replace("(Unreleased)", "").trim().to_string();
        }

        // Leftover from "Tyler Childers and The Food Stamps - ..." shapes.
        if let Some(rest) = title.strip_prefix("and ") {
            title = rest.trim().to_string();
        }
        if title.to_lowercase().contains("the food stamps") {
            title = FOOD_STAMPS.replace_all(&title, "").into_owned();
        }

        // Duets are credited to both artists.
        if title.contains("Senora May") {
            artist = "Tyler Childers & Senora May".to_string();
            title = SENORA_MAY_DASH.replace_all(&title, "").trim().to_string();
            title = SENORA_MAY_WS.replace_all(&title, "").trim().to_string();
        }

        RuleOutcome {
            artist,
            working_title: title,
        }
    }
}

pub struct BlazeFoleyRule;

impl ArtistRule for BlazeFoleyRule {
    fn name(&self) -> &'static str {
        "blaze-foley"
    }

    fn matches(&self, clean_name: &str) -> bool {
        clean_name.contains("Blaze Foley")
    }

    fn apply(&self, clean_name: &str) -> RuleOutcome {
        let title = clean_name
            .replace("Blaze Foley - ", "")
            .replace("Blaze Foley ", "")
            .trim()
            .to_string();
        RuleOutcome {
            artist: "Blaze Foley".to_string(),
            working_title: title,
        }
    }
}
