//! Combat sports matching: contender-series episodes, numbered cards and
//! headliner bouts.
//!
//! Checks run in a fixed order. The first identifier found on the event
//! (season/episode, then card number) decides whether the release is even
//! eligible; headliner names and the generic word overlap only adjust.
//! A different card number or season is a hard reject that headliner
//! credit cannot offset.

use super::{MatchContext, Rejection, ReleaseMatcher, SubScore};
use crate::models::SportFamily;
use crate::utils::text::normalize;
use regex::Regex;
use std::sync::OnceLock;
use strsim::jaro_winkler;

pub const EPISODE_MATCH_SCORE: i32 = 30;
/// Same season, wrong episode: penalized but not rejected
pub const EPISODE_MISMATCH_PENALTY: i32 = -20;
pub const NUMBER_MATCH_SCORE: i32 = 25;
pub const NUMBER_CLASS_MISMATCH_SCORE: i32 = 15;
pub const HEADLINERS_BOTH_SCORE: i32 = 15;
pub const HEADLINER_ONE_SCORE: i32 = 5;
pub const MAX_GENERIC_SCORE: i32 = 10;
/// Year credit implied by a unique identifier when the release has no year
pub const IMPLIED_EDITION_SCORE: i32 = 15;

/// Minimum similarity for a fuzzy fighter-name match
const FUZZY_NAME_THRESHOLD: f64 = 0.95;
const FUZZY_MIN_LEN: usize = 5;

/// Words that carry no information about which card a title is
const FIGHTING_STOPWORDS: &[&str] = &[
    "ufc", "bellator", "pfl", "boxing", "wwe", "fight", "night", "vs", "versus", "card", "main",
    "prelims", "early", "event", "the", "and", "espn", "abc", "fox", "ppv", "live", "full",
    "championship", "title", "bout", "series", "season", "episode",
];

struct FightPatterns {
    event_episode: Regex,
    episode_token: Regex,
    league_number: Regex,
    fight_night_number: Regex,
    headliners: Regex,
}

static FIGHT_PATTERNS: OnceLock<Option<FightPatterns>> = OnceLock::new();

/// All patterns run on normalized (lowercase, single-spaced) text.
fn patterns() -> Option<&'static FightPatterns> {
    FIGHT_PATTERNS
        .get_or_init(|| {
            Some(FightPatterns {
                event_episode: Regex::new(r"\bseason (\d{1,2})\b.*?\bepisode (\d{1,3})\b").ok()?,
                episode_token: Regex::new(r"\bs(\d{1,2}) ?e(\d{1,3})\b").ok()?,
                league_number: Regex::new(r"\b(?:ufc|bellator|pfl) ?(fight night |fn )?(\d{1,3})\b").ok()?,
                fight_night_number: Regex::new(r"\bfight night (\d{1,3})\b").ok()?,
                headliners: Regex::new(r"(\S+) (?:vs|v|versus) (\S+)").ok()?,
            })
        })
        .as_ref()
}

/// Card number and whether it is a Fight Night (vs a numbered PPV).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventNumber {
    pub number: u32,
    pub fight_night: bool,
}

fn capture_u32(caps: &regex::Captures<'_>, group: usize) -> Option<u32> {
    caps.get(group).and_then(|m| m.as_str().parse().ok())
}

/// Season/episode named in words ("Season 7 Episode 1") or as an SxxEyy token.
pub fn event_episode(normalized: &str) -> Option<(u32, u32)> {
    let patterns = patterns()?;
    patterns
        .event_episode
        .captures(normalized)
        .or_else(|| patterns.episode_token.captures(normalized))
        .and_then(|caps| Some((capture_u32(&caps, 1)?, capture_u32(&caps, 2)?)))
}

/// SxxEyy token in a release title.
pub fn release_episode(normalized: &str) -> Option<(u32, u32)> {
    let caps = patterns()?.episode_token.captures(normalized)?;
    Some((capture_u32(&caps, 1)?, capture_u32(&caps, 2)?))
}

/// Numbered card after the promotion name, optionally as a Fight Night.
pub fn event_number(normalized: &str) -> Option<EventNumber> {
    let patterns = patterns()?;
    if let Some(caps) = patterns.league_number.captures(normalized) {
        return Some(EventNumber {
            number: capture_u32(&caps, 2)?,
            fight_night: caps.get(1).is_some(),
        });
    }
    let caps = patterns.fight_night_number.captures(normalized)?;
    Some(EventNumber {
        number: capture_u32(&caps, 1)?,
        fight_night: true,
    })
}

/// The two names around the first "vs" in an event title.
pub fn headliners(normalized: &str) -> Option<(String, String)> {
    let caps = patterns()?.headliners.captures(normalized)?;
    let first = caps.get(1)?.as_str();
    let second = caps.get(2)?.as_str();
    let is_name = |s: &str| s.chars().count() >= 2 && !s.chars().all(|c| c.is_ascii_digit());
    if is_name(first) && is_name(second) {
        Some((first.to_string(), second.to_string()))
    } else {
        None
    }
}

fn name_present(name: &str, ctx: &MatchContext<'_>) -> bool {
    if ctx.has_token(name) {
        return true;
    }
    if name.chars().count() < FUZZY_MIN_LEN {
        return false;
    }
    ctx.title_tokens
        .iter()
        .filter(|t| t.chars().count() >= FUZZY_MIN_LEN)
        .any(|t| jaro_winkler(name, t) > FUZZY_NAME_THRESHOLD)
}

fn score_headliners(event_normalized: &str, ctx: &MatchContext<'_>) -> i32 {
    let Some((first, second)) = headliners(event_normalized) else {
        return 0;
    };
    match (name_present(&first, ctx), name_present(&second, ctx)) {
        (true, true) => HEADLINERS_BOTH_SCORE,
        (true, false) | (false, true) => HEADLINER_ONE_SCORE,
        (false, false) => 0,
    }
}

fn score_generic(event_normalized: &str, ctx: &MatchContext<'_>) -> i32 {
    let words: Vec<&str> = event_normalized
        .split_whitespace()
        .filter(|w| w.chars().count() > 2)
        .filter(|w| !w.chars().all(|c| c.is_ascii_digit()))
        .filter(|w| !FIGHTING_STOPWORDS.contains(w))
        .collect();
    if words.is_empty() {
        return 0;
    }
    let matched = words.iter().filter(|w| ctx.has_token(w)).count();
    (MAX_GENERIC_SCORE as f64 * matched as f64 / words.len() as f64).round() as i32
}

/// Score a combat-sports release against its event.
pub fn score_fighting_event(ctx: &MatchContext<'_>) -> SubScore {
    let event_normalized = normalize(&ctx.event.title);
    let release_has_year = ctx.parsed.year.is_some();
    let mut score = 0;
    let mut has_identifier = false;

    if let Some((season, episode)) = event_episode(&event_normalized) {
        has_identifier = true;
        match release_episode(&ctx.normalized_title) {
            None => return SubScore::Rejected(Rejection::EpisodeMissing),
            Some((s, e)) if s == season && e == episode => {
                score += EPISODE_MATCH_SCORE;
                if !release_has_year {
                    score += IMPLIED_EDITION_SCORE;
                }
            }
            Some((s, _)) if s == season => score += EPISODE_MISMATCH_PENALTY,
            Some(_) => return SubScore::Rejected(Rejection::SeasonMismatch),
        }
    }

    if !has_identifier {
        if let Some(expected) = event_number(&event_normalized) {
            match event_number(&ctx.normalized_title) {
                None => return SubScore::Rejected(Rejection::EventNumberMissing),
                Some(found) if found == expected => {
                    score += NUMBER_MATCH_SCORE;
                    if !release_has_year {
                        score += IMPLIED_EDITION_SCORE;
                    }
                }
                Some(found) if found.number == expected.number => {
                    score += NUMBER_CLASS_MISMATCH_SCORE
                }
                Some(_) => return SubScore::Rejected(Rejection::EventNumberMismatch),
            }
        }
    }

    score += score_headliners(&event_normalized, ctx);

    if score == 0 {
        score = score_generic(&event_normalized, ctx);
    }

    SubScore::Scored(score)
}

/// Fighting matcher for UFC, Bellator, PFL, boxing and WWE
pub struct FightingEventMatcher;

impl ReleaseMatcher for FightingEventMatcher {
    fn name(&self) -> &'static str {
        "fighting_event"
    }

    fn supports(&self, family: SportFamily) -> bool {
        family == SportFamily::Fighting
    }

    fn score(&self, ctx: &MatchContext<'_>) -> SubScore {
        score_fighting_event(ctx)
    }
}
