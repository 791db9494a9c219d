//! Motorsport matching: race-location conflicts and session disambiguation.
//!
//! Round-based series (Formula 1, MotoGP, IndyCar, NASCAR, WEC) release
//! every session of every weekend under near-identical titles, so two
//! things must line up: the place and the session.

use super::{MatchContext, Rejection, ReleaseMatcher, SubScore};
use crate::models::{MotorsportSessionType, SportFamily};
use crate::utils::text::{contains_phrase_or_joined, normalize};
use regex::Regex;
use std::sync::OnceLock;

pub const MAX_LOCATION_SCORE: i32 = 25;
/// Credit when the event title names no location terms at all
pub const NEUTRAL_LOCATION_SCORE: i32 = 10;
pub const SESSION_MATCH_SCORE: i32 = 15;
pub const SESSION_UNKNOWN_SCORE: i32 = 5;
pub const ROUND_MATCH_SCORE: i32 = 5;

/// Canonical race location -> aliases (country, city, circuit).
/// All aliases are normalized lowercase and matched as whole words.
pub static RACE_LOCATIONS: &[(&str, &[&str])] = &[
    ("bahrain", &["bahrain", "sakhir"]),
    ("saudi arabia", &["saudi arabia", "saudi", "jeddah"]),
    ("australia", &["australia", "australian", "melbourne", "albert park", "phillip island"]),
    ("japan", &["japan", "japanese", "suzuka", "motegi"]),
    ("china", &["china", "chinese", "shanghai"]),
    ("miami", &["miami"]),
    ("emilia romagna", &["emilia romagna", "imola"]),
    ("monaco", &["monaco", "monte carlo"]),
    ("canada", &["canada", "canadian", "montreal", "gilles villeneuve"]),
    ("spain", &["spain", "spanish", "barcelona", "catalunya", "catalonia", "jerez"]),
    ("austria", &["austria", "austrian", "spielberg", "red bull ring"]),
    ("great britain", &["great britain", "britain", "british", "silverstone"]),
    ("hungary", &["hungary", "hungarian", "hungaroring", "budapest"]),
    ("belgium", &["belgium", "belgian", "spa", "spa francorchamps"]),
    ("netherlands", &["netherlands", "dutch", "zandvoort", "assen"]),
    ("italy", &["italy", "italian", "monza", "mugello"]),
    ("azerbaijan", &["azerbaijan", "baku"]),
    ("singapore", &["singapore", "marina bay"]),
    ("united states", &["united states", "usa", "austin", "cota", "americas", "circuit of the americas"]),
    ("mexico", &["mexico", "mexican", "mexico city"]),
    ("brazil", &["brazil", "brazilian", "sao paulo", "são paulo", "interlagos"]),
    ("las vegas", &["las vegas", "vegas"]),
    ("qatar", &["qatar", "lusail", "losail"]),
    ("abu dhabi", &["abu dhabi", "yas marina"]),
    ("portugal", &["portugal", "portuguese", "portimao", "algarve"]),
    ("france", &["france", "french", "le mans", "paul ricard"]),
    ("germany", &["germany", "german", "sachsenring", "hockenheim", "nurburgring"]),
    ("thailand", &["thailand", "thai", "buriram"]),
    ("malaysia", &["malaysia", "malaysian", "sepang"]),
    ("indonesia", &["indonesia", "indonesian", "mandalika"]),
    ("argentina", &["argentina", "argentine", "termas de rio hondo"]),
    ("india", &["india", "indian", "buddh"]),
    ("san marino", &["san marino", "misano"]),
    ("indianapolis", &["indianapolis"]),
    ("long beach", &["long beach"]),
    ("st petersburg", &["st petersburg", "petersburg"]),
    ("daytona", &["daytona"]),
    ("talladega", &["talladega"]),
    ("sebring", &["sebring"]),
    ("fuji", &["fuji"]),
    ("bristol", &["bristol"]),
    ("martinsville", &["martinsville"]),
];

/// Event-title words that say nothing about where the race is.
const GENERIC_MOTORSPORT_WORDS: &[&str] = &[
    "grand", "prix", "gp", "formula", "race", "the", "of", "and", "round", "fia", "world",
    "championship", "series", "cup", "sprint", "qualifying", "quali", "shootout", "practice",
    "free", "fp1", "fp2", "fp3", "main", "full", "event", "hours", "weekend", "motogp", "indycar",
    "nascar", "wec", "f1", "pre", "post", "show",
];

/// Canonical locations whose aliases occur in normalized text.
fn locations_in(normalized: &str) -> Vec<&'static str> {
    RACE_LOCATIONS
        .iter()
        .filter(|(_, aliases)| aliases.iter().any(|a| contains_phrase_or_joined(normalized, a)))
        .map(|(canonical, _)| *canonical)
        .collect()
}

/// Significant words of the event title used for proportional location credit.
fn key_terms(event_title: &str) -> Vec<String> {
    normalize(event_title)
        .split_whitespace()
        .filter(|w| w.chars().count() > 1)
        .filter(|w| !w.chars().all(|c| c.is_ascii_digit()))
        .filter(|w| !GENERIC_MOTORSPORT_WORDS.contains(w))
        .map(|w| w.to_string())
        .collect()
}

/// Alias-aware presence: the word itself, or any location whose alias
/// contains the word being present under a different alias.
fn term_present(term: &str, ctx: &MatchContext<'_>, release_locations: &[&str]) -> bool {
    if ctx.has_token(term) {
        return true;
    }
    RACE_LOCATIONS
        .iter()
        .filter(|(canonical, _)| release_locations.contains(canonical))
        .any(|(_, aliases)| {
            aliases
                .iter()
                .any(|alias| alias.split_whitespace().any(|w| w == term))
        })
}

/// Location scoring for motorsport events.
pub fn score_location(ctx: &MatchContext<'_>) -> SubScore {
    let event_normalized = normalize(&ctx.event.title);
    let event_locations = locations_in(&event_normalized);
    let release_locations = locations_in(&ctx.normalized_title);

    if let Some(conflict) = release_locations
        .iter()
        .find(|loc| !event_locations.contains(*loc))
    {
        tracing::trace!(location = *conflict, "release names a conflicting location");
        return SubScore::Rejected(Rejection::LocationConflict);
    }

    let terms = key_terms(&ctx.event.title);
    if terms.is_empty() {
        return SubScore::Scored(NEUTRAL_LOCATION_SCORE);
    }

    let matched = terms
        .iter()
        .filter(|t| term_present(t, ctx, &release_locations))
        .count();
    let fraction = matched as f64 / terms.len() as f64;
    SubScore::Scored((MAX_LOCATION_SCORE as f64 * fraction).round() as i32)
}

struct SessionRule {
    session: MotorsportSessionType,
    pattern: Regex,
    /// Additional pattern that must also match
    requires: Option<Regex>,
}

static SESSION_RULES: OnceLock<Vec<SessionRule>> = OnceLock::new();

/// Ordered session rules. ORDER MATTERS: terms overlap ("sprint
/// qualifying" contains "qualifying", "race analysis" contains "race"),
/// so each rule relies on the ones above it having claimed the more
/// specific phrasing. Do not reorder.
fn session_rules() -> &'static [SessionRule] {
    SESSION_RULES.get_or_init(|| {
        let rule = |session, pattern: &str, requires: Option<&str>| {
            Some(SessionRule {
                session,
                pattern: Regex::new(pattern).ok()?,
                requires: match requires {
                    Some(r) => Some(Regex::new(r).ok()?),
                    None => None,
                },
            })
        };
        [
            // Coverage shows around the race count as non-race sessions
            rule(
                MotorsportSessionType::Practice,
                r"\b(?:pre ?race|build ?up|grid ?walk|post ?race|podium|race analysis)\b",
                None,
            ),
            rule(
                MotorsportSessionType::Practice,
                r"\b(?:fp[1-3]|free practice|practice)\b",
                None,
            ),
            rule(
                MotorsportSessionType::SprintQualifying,
                r"\bsprint\b",
                Some(r"\b(?:qualifying|qualifiers|shootout|quali)\b"),
            ),
            rule(MotorsportSessionType::Sprint, r"\bsprint\b", None),
            rule(
                MotorsportSessionType::Qualifying,
                r"\b(?:qualifying|qualifiers|quali|q[1-3])\b",
                None,
            ),
            rule(
                MotorsportSessionType::Race,
                r"\b(?:race|main race|full event|grand prix|gp)\b",
                None,
            ),
        ]
        .into_iter()
        .flatten()
        .collect()
    })
}

/// Classify a title into a race-weekend session.
pub fn classify_session(title: &str) -> MotorsportSessionType {
    let normalized = normalize(title);
    session_rules()
        .iter()
        .find(|rule| {
            rule.pattern.is_match(&normalized)
                && rule.requires.as_ref().map_or(true, |r| r.is_match(&normalized))
        })
        .map(|rule| rule.session)
        .unwrap_or(MotorsportSessionType::Unknown)
}

/// Session scoring for motorsport events.
pub fn score_session(ctx: &MatchContext<'_>) -> SubScore {
    let event_session = classify_session(&ctx.event.title);
    if !event_session.is_known() {
        return SubScore::Scored(0);
    }

    let release_session = classify_session(ctx.title);
    if !release_session.is_known() {
        return SubScore::Scored(SESSION_UNKNOWN_SCORE);
    }

    if release_session == event_session {
        SubScore::Scored(SESSION_MATCH_SCORE)
    } else {
        tracing::trace!(
            event = ?event_session,
            release = ?release_session,
            "session mismatch"
        );
        SubScore::Rejected(Rejection::SessionMismatch)
    }
}

/// Credit for an explicit round number agreeing with the catalog round.
fn round_bonus(ctx: &MatchContext<'_>) -> i32 {
    match (ctx.parsed.round_number, ctx.event.round_number()) {
        (Some(release), Some(event)) if release == event => ROUND_MATCH_SCORE,
        _ => 0,
    }
}

/// Location conflict detection plus proportional location credit.
pub struct LocationMatcher;

impl ReleaseMatcher for LocationMatcher {
    fn name(&self) -> &'static str {
        "motorsport_location"
    }

    fn supports(&self, family: SportFamily) -> bool {
        family == SportFamily::Motorsport
    }

    fn score(&self, ctx: &MatchContext<'_>) -> SubScore {
        score_location(ctx)
    }
}

/// Round-number credit, kept apart from the 0-25 location score
pub struct RoundMatcher;

impl ReleaseMatcher for RoundMatcher {
    fn name(&self) -> &'static str {
        "motorsport_round"
    }

    fn supports(&self, family: SportFamily) -> bool {
        family == SportFamily::Motorsport
    }

    fn score(&self, ctx: &MatchContext<'_>) -> SubScore {
        SubScore::Scored(round_bonus(ctx))
    }
}

/// Practice / qualifying / sprint / race disambiguation.
pub struct SessionMatcher;

impl ReleaseMatcher for SessionMatcher {
    fn name(&self) -> &'static str {
        "motorsport_session"
    }

    fn supports(&self, family: SportFamily) -> bool {
        family == SportFamily::Motorsport
    }

    fn score(&self, ctx: &MatchContext<'_>) -> SubScore {
        score_session(ctx)
    }
}
