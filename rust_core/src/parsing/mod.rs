//! Release title parsing.
//!
//! Extracts loosely structured facts (year, month/day, round number and
//! sport prefix) from indexer release titles. Each extraction is
//! independent; a pattern that is absent simply leaves its field unset.

use crate::models::ParsedRelease;
use regex::Regex;
use std::sync::OnceLock;

pub mod sport_prefix;

pub use sport_prefix::{detect_sport_prefix, get_sport_prefix};

struct TitlePatterns {
    year: Regex,
    round: Regex,
    full_date: Regex,
}

static TITLE_PATTERNS: OnceLock<Option<TitlePatterns>> = OnceLock::new();

fn title_patterns() -> Option<&'static TitlePatterns> {
    TITLE_PATTERNS
        .get_or_init(|| {
            Some(TitlePatterns {
                // A standalone 4-digit run, 2020-2099
                year: Regex::new(r"(?:^|\D)(20[2-9]\d)(?:\D|$)").ok()?,
                round: Regex::new(r"(?i)\b(?:round|r|week|w)[\s._-]?(\d{1,2})\b").ok()?,
                // Any four-digit year, so old seasons still reach the year gate
                full_date: Regex::new(r"(?:^|\D)(\d{4})[.\-](\d{2})[.\-](\d{2})(?:\D|$)").ok()?,
            })
        })
        .as_ref()
}

/// Parse a release title into the facts the scorer consumes.
pub fn parse_release_title(title: &str) -> ParsedRelease {
    let mut parsed = ParsedRelease {
        sport_prefix: detect_sport_prefix(title),
        ..ParsedRelease::default()
    };

    let Some(patterns) = title_patterns() else {
        return parsed;
    };

    if let Some(caps) = patterns.year.captures(title) {
        parsed.year = caps.get(1).and_then(|m| m.as_str().parse().ok());
    }

    if let Some(caps) = patterns.round.captures(title) {
        parsed.round_number = caps.get(1).and_then(|m| m.as_str().parse().ok());
    }

    if let Some(caps) = patterns.full_date.captures(title) {
        let year = caps.get(1).and_then(|m| m.as_str().parse::<i32>().ok());
        let month = caps.get(2).and_then(|m| m.as_str().parse::<u32>().ok());
        let day = caps.get(3).and_then(|m| m.as_str().parse::<u32>().ok());
        if let (Some(year), Some(month), Some(day)) = (year, month, day) {
            if (1..=12).contains(&month) && (1..=31).contains(&day) {
                parsed.year = Some(year);
                parsed.month = Some(month);
                parsed.day = Some(day);
            }
        }
    }

    parsed
}
