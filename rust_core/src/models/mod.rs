// Shared models for release parsing and match scoring
use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};

pub mod sport_prefix;

pub use sport_prefix::{ParseSportPrefixError, SportFamily, SportPrefix};

// ============================================================================
// Release Facts
// ============================================================================

/// Facts extracted from a release title. Every field is independently
/// optional; a missing pattern leaves its field unset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedRelease {
    pub year: Option<i32>,
    pub month: Option<u32>,
    pub day: Option<u32>,
    pub round_number: Option<u32>,
    pub sport_prefix: Option<SportPrefix>,
}

impl ParsedRelease {
    /// Build from loosely typed cached metadata. An unrecognised prefix
    /// token is treated as absent.
    pub fn from_parts(
        year: Option<i32>,
        month: Option<u32>,
        day: Option<u32>,
        round_number: Option<u32>,
        sport_prefix: Option<&str>,
    ) -> Self {
        Self {
            year,
            month,
            day,
            round_number,
            sport_prefix: sport_prefix.and_then(|p| p.parse().ok()),
        }
    }
}

// ============================================================================
// Catalog Event
// ============================================================================

/// Read-only view of a catalog event, as supplied by the event catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRef {
    pub event_date: DateTime<Utc>,
    #[serde(default)]
    pub league_name: Option<String>,
    #[serde(default)]
    pub sport: Option<String>,
    #[serde(default)]
    pub round: Option<String>,
    pub title: String,
    #[serde(default)]
    pub home_team_name: Option<String>,
    #[serde(default)]
    pub away_team_name: Option<String>,
}

impl EventRef {
    pub fn new(title: impl Into<String>, event_date: DateTime<Utc>) -> Self {
        Self {
            event_date,
            league_name: None,
            sport: None,
            round: None,
            title: title.into(),
            home_team_name: None,
            away_team_name: None,
        }
    }

    pub fn with_league(mut self, league_name: impl Into<String>) -> Self {
        self.league_name = Some(league_name.into());
        self
    }

    pub fn with_sport(mut self, sport: impl Into<String>) -> Self {
        self.sport = Some(sport.into());
        self
    }

    pub fn with_round(mut self, round: impl Into<String>) -> Self {
        self.round = Some(round.into());
        self
    }

    pub fn with_teams(mut self, home: impl Into<String>, away: impl Into<String>) -> Self {
        self.home_team_name = Some(home.into());
        self.away_team_name = Some(away.into());
        self
    }

    pub fn year(&self) -> i32 {
        self.event_date.year()
    }

    pub fn month(&self) -> u32 {
        self.event_date.month()
    }

    pub fn day(&self) -> u32 {
        self.event_date.day()
    }

    /// Round number when the catalog round field is a plain integer
    /// (optionally prefixed with "Round").
    pub fn round_number(&self) -> Option<u32> {
        let round = self.round.as_deref()?.trim();
        let digits = round
            .strip_prefix("Round")
            .or_else(|| round.strip_prefix("round"))
            .unwrap_or(round)
            .trim();
        digits.parse().ok()
    }
}

// ============================================================================
// Motorsport Sessions
// ============================================================================

/// Which phase of a race weekend a title depicts. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MotorsportSessionType {
    Unknown,
    Practice,
    SprintQualifying,
    Sprint,
    Qualifying,
    Race,
}

impl MotorsportSessionType {
    pub fn is_known(&self) -> bool {
        *self != MotorsportSessionType::Unknown
    }
}
