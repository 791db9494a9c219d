//! Score aggregation: hard-reject gates, base credits, sport-family
//! dispatch and clamping, plus parallel batch scoring of candidate releases.

use crate::matching::{default_registry, MatchContext, MatcherRegistry, Rejection, SubScore};
use crate::models::{EventRef, ParsedRelease};
use crate::parsing::{get_sport_prefix, parse_release_title};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Below this a release is not a candidate at all
pub const MINIMUM_MATCH_SCORE: u8 = 30;
/// Minimum confidence for unattended download
pub const AUTO_GRAB_MATCH_SCORE: u8 = 50;

pub const YEAR_MATCH_SCORE: i32 = 15;
pub const SPORT_PREFIX_MATCH_SCORE: i32 = 15;
pub const MAX_MATCH_SCORE: i32 = 100;

/// Full outcome of scoring one release against one event.
///
/// `score` is 0 both for weak matches and for hard rejects; `rejection`
/// tells them apart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchEvaluation {
    pub score: u8,
    pub rejection: Option<Rejection>,
    /// Points contributed by each base credit and matcher, before clamping
    pub components: Vec<(String, i32)>,
}

impl MatchEvaluation {
    fn rejected(rejection: Rejection, components: Vec<(String, i32)>) -> Self {
        Self {
            score: 0,
            rejection: Some(rejection),
            components,
        }
    }

    pub fn is_rejected(&self) -> bool {
        self.rejection.is_some()
    }
}

/// A release that cleared the minimum score for an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateMatch {
    pub release_title: String,
    pub score: u8,
    pub auto_grab: bool,
}

/// Score `title` against `event`, parsing the title first.
pub fn compute_match_score(title: &str, event: &EventRef) -> u8 {
    let parsed = parse_release_title(title);
    compute_match_score_parsed(title, &parsed, event)
}

/// Score with release facts that were parsed earlier (e.g. cached at ingestion).
pub fn compute_match_score_parsed(title: &str, parsed: &ParsedRelease, event: &EventRef) -> u8 {
    evaluate_match(title, parsed, event).score
}

/// Score with explicit release facts. An unrecognised prefix counts as absent.
pub fn compute_match_score_with_facts(
    title: &str,
    year: Option<i32>,
    month: Option<u32>,
    day: Option<u32>,
    round_number: Option<u32>,
    sport_prefix: Option<&str>,
    event: &EventRef,
) -> u8 {
    let parsed = ParsedRelease::from_parts(year, month, day, round_number, sport_prefix);
    compute_match_score_parsed(title, &parsed, event)
}

/// Score through the built-in matchers, keeping the rejection reason.
pub fn evaluate_match(title: &str, parsed: &ParsedRelease, event: &EventRef) -> MatchEvaluation {
    evaluate_with_registry(default_registry(), title, parsed, event)
}

pub fn evaluate_with_registry(
    registry: &MatcherRegistry,
    title: &str,
    parsed: &ParsedRelease,
    event: &EventRef,
) -> MatchEvaluation {
    let mut components: Vec<(String, i32)> = Vec::new();

    // Year gate
    if let Some(year) = parsed.year {
        if year != event.year() {
            return reject(title, event, Rejection::YearMismatch, components);
        }
        components.push(("year".to_string(), YEAR_MATCH_SCORE));
    }

    // Sport gate
    let event_prefix = get_sport_prefix(event.league_name.as_deref(), event.sport.as_deref());
    if let Some(expected) = event_prefix {
        match parsed.sport_prefix {
            None => return reject(title, event, Rejection::SportPrefixMissing, components),
            Some(found) if found != expected => {
                return reject(title, event, Rejection::SportPrefixMismatch, components)
            }
            Some(_) => components.push(("sport_prefix".to_string(), SPORT_PREFIX_MATCH_SCORE)),
        }
    }

    if let Some(prefix) = event_prefix {
        let ctx = MatchContext::new(title, parsed, event, prefix);
        for matcher in registry.matchers_for(prefix.family()) {
            match matcher.score(&ctx) {
                SubScore::Rejected(rejection) => {
                    return reject(title, event, rejection, components);
                }
                SubScore::Scored(points) => {
                    trace!(matcher = matcher.name(), points, "matcher scored");
                    components.push((matcher.name().to_string(), points));
                }
            }
        }
    }

    let total: i32 = components.iter().map(|(_, points)| points).sum();
    MatchEvaluation {
        score: total.clamp(0, MAX_MATCH_SCORE) as u8,
        rejection: None,
        components,
    }
}

fn reject(
    title: &str,
    event: &EventRef,
    rejection: Rejection,
    components: Vec<(String, i32)>,
) -> MatchEvaluation {
    debug!(
        event = %event.title,
        release = %title,
        reason = %rejection,
        "release rejected"
    );
    MatchEvaluation::rejected(rejection, components)
}

/// Score every title against `event` using the default thresholds.
pub fn score_releases<S: AsRef<str> + Sync>(event: &EventRef, titles: &[S]) -> Vec<CandidateMatch> {
    score_releases_with_thresholds(event, titles, MINIMUM_MATCH_SCORE, AUTO_GRAB_MATCH_SCORE)
}

/// Score titles in parallel, keep those at or above `min_score`, and sort
/// best first. Equal scores keep input order.
pub fn score_releases_with_thresholds<S: AsRef<str> + Sync>(
    event: &EventRef,
    titles: &[S],
    min_score: u8,
    auto_grab_score: u8,
) -> Vec<CandidateMatch> {
    let mut candidates: Vec<CandidateMatch> = titles
        .par_iter()
        .filter_map(|title| {
            let title = title.as_ref();
            let score = compute_match_score(title, event);
            (score >= min_score).then(|| CandidateMatch {
                release_title: title.to_string(),
                score,
                auto_grab: score >= auto_grab_score,
            })
        })
        .collect();

    candidates.sort_by(|a, b| b.score.cmp(&a.score));
    candidates
}
