//! Release Matcher Abstractions
//!
//! Defines the ReleaseMatcher trait that allows pluggable, sport-specific
//! scoring of a release title against a catalog event, and the registry
//! the aggregator dispatches through.

use crate::models::{EventRef, ParsedRelease, SportFamily, SportPrefix};
use crate::utils::text::{normalize, token_set};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

// Concrete matcher implementations
pub mod date;
pub mod fighting;
pub mod motorsport;
pub mod team;

/// Why a release was definitively ruled out for an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum Rejection {
    /// Release year differs from the event year
    YearMismatch,
    /// Event has a sport prefix, release has none
    SportPrefixMissing,
    /// Release prefix differs from the event prefix
    SportPrefixMismatch,
    /// Release names a race location the event does not
    LocationConflict,
    /// Release depicts a different session of the race weekend
    SessionMismatch,
    /// Neither team found; `head_to_head` is whether the release looks like a game at all
    TeamsNotFound { head_to_head: bool },
    /// Exactly one of the two teams found
    WrongMatchup,
    /// Single-team event whose team is absent
    TeamNotFound { head_to_head: bool },
    /// Contender-series event, release has no SxxEyy token
    EpisodeMissing,
    /// Numbered event, release has no event number
    EventNumberMissing,
    /// Release names a different contender-series season
    SeasonMismatch,
    /// Release names a different card number
    EventNumberMismatch,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            Rejection::YearMismatch => "release year differs from event year",
            Rejection::SportPrefixMissing => "release has no sport prefix",
            Rejection::SportPrefixMismatch => "release sport prefix differs from event",
            Rejection::LocationConflict => "release names a different race location",
            Rejection::SessionMismatch => "release is a different session",
            Rejection::TeamsNotFound { head_to_head: true } => "neither team found in game release",
            Rejection::TeamsNotFound { head_to_head: false } => "neither team found, not a game release",
            Rejection::WrongMatchup => "only one of the two teams found",
            Rejection::TeamNotFound { head_to_head: true } => "team not found in game release",
            Rejection::TeamNotFound { head_to_head: false } => "team not found, not a game release",
            Rejection::EpisodeMissing => "release has no season/episode token",
            Rejection::EventNumberMissing => "release has no event number",
            Rejection::SeasonMismatch => "release is from a different season",
            Rejection::EventNumberMismatch => "release is a different numbered event",
        };
        f.write_str(reason)
    }
}

/// Outcome of one sub-matcher.
///
/// `Scored` points may be negative only for the same-season wrong-episode
/// penalty; they are summed before clamping. `Rejected` forces the overall
/// score to zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubScore {
    Rejected(Rejection),
    Scored(i32),
}

impl SubScore {
    pub fn is_rejected(&self) -> bool {
        matches!(self, SubScore::Rejected(_))
    }
}

/// Inputs shared by every matcher for one (release, event) pair.
#[derive(Debug, Clone)]
pub struct MatchContext<'a> {
    pub title: &'a str,
    /// Lowercase, single-spaced release title
    pub normalized_title: String,
    pub title_tokens: FxHashSet<String>,
    pub parsed: &'a ParsedRelease,
    pub event: &'a EventRef,
    pub prefix: SportPrefix,
}

impl<'a> MatchContext<'a> {
    pub fn new(
        title: &'a str,
        parsed: &'a ParsedRelease,
        event: &'a EventRef,
        prefix: SportPrefix,
    ) -> Self {
        Self {
            title,
            normalized_title: normalize(title),
            title_tokens: token_set(title),
            parsed,
            event,
            prefix,
        }
    }

    pub fn has_token(&self, word: &str) -> bool {
        self.title_tokens.contains(word)
    }
}

/// Sport-specific release matcher
///
/// Implementations are pure: no I/O, no interior state.
pub trait ReleaseMatcher: Send + Sync {
    /// Matcher name for logging and score breakdowns
    fn name(&self) -> &'static str;

    /// Check if this matcher applies to events of the given family
    fn supports(&self, family: SportFamily) -> bool;

    /// Score the release in `ctx` against its event
    fn score(&self, ctx: &MatchContext<'_>) -> SubScore;
}

/// Matcher registry
///
/// Holds matchers in dispatch order; the aggregator evaluates only those
/// supporting the event's family.
pub struct MatcherRegistry {
    matchers: Vec<Box<dyn ReleaseMatcher>>,
}

impl MatcherRegistry {
    /// Create a new registry with the built-in matchers
    pub fn new() -> Self {
        let matchers: Vec<Box<dyn ReleaseMatcher>> = vec![
            Box::new(motorsport::LocationMatcher),
            Box::new(motorsport::SessionMatcher),
            Box::new(motorsport::RoundMatcher),
            Box::new(team::TeamMatcher),
            Box::new(date::DateMatcher),
            Box::new(fighting::FightingEventMatcher),
        ];
        Self { matchers }
    }

    /// Matchers applicable to a family, in dispatch order
    pub fn matchers_for(
        &self,
        family: SportFamily,
    ) -> impl Iterator<Item = &(dyn ReleaseMatcher + 'static)> + '_ {
        self.matchers
            .iter()
            .map(|m| m.as_ref())
            .filter(move |m| m.supports(family))
    }

    /// Add a custom matcher to the registry
    pub fn register_matcher(&mut self, matcher: Box<dyn ReleaseMatcher>) {
        self.matchers.push(matcher);
    }

    pub fn len(&self) -> usize {
        self.matchers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matchers.is_empty()
    }
}

impl Default for MatcherRegistry {
    fn default() -> Self {
        Self::new()
    }
}

static DEFAULT_REGISTRY: OnceLock<MatcherRegistry> = OnceLock::new();

/// Process-wide registry of the built-in matchers.
pub fn default_registry() -> &'static MatcherRegistry {
    DEFAULT_REGISTRY.get_or_init(MatcherRegistry::new)
}
