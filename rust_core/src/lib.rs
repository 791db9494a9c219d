//! Sportarr Core - Release match scoring for sporting-event video releases.
//!
//! This module provides:
//! - Release title parsing (year, full date, round number, sport prefix)
//! - Sport prefix classification from league names and free text
//! - Sport-specific matchers for motorsport, team sports and combat sports
//! - Score aggregation with hard-reject gates and explained evaluations
//! - Parallel batch scoring of candidate releases via rayon
//!
//! Every scoring and parsing entry point is pure and infallible.

pub mod league_config;
pub mod matching;
pub mod models;
pub mod parsing;
pub mod scoring;
pub mod utils;

#[cfg(feature = "python")]
mod python;

pub use matching::{MatchContext, MatcherRegistry, Rejection, ReleaseMatcher, SubScore};
pub use models::{EventRef, MotorsportSessionType, ParsedRelease, SportFamily, SportPrefix};
pub use parsing::{detect_sport_prefix, get_sport_prefix, parse_release_title};
pub use scoring::{
    compute_match_score, compute_match_score_parsed, compute_match_score_with_facts,
    evaluate_match, score_releases, score_releases_with_thresholds, CandidateMatch,
    MatchEvaluation, AUTO_GRAB_MATCH_SCORE, MINIMUM_MATCH_SCORE,
};
