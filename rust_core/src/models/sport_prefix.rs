//! Canonical sport prefixes and the matcher families they partition into.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Canonical league/series token shared by events and release titles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SportPrefix {
    // Motorsport
    Formula1,
    MotoGP,
    IndyCar,
    #[serde(rename = "NASCAR")]
    Nascar,
    #[serde(rename = "WEC")]
    Wec,
    // Fighting
    #[serde(rename = "UFC")]
    Ufc,
    Bellator,
    #[serde(rename = "PFL")]
    Pfl,
    Boxing,
    #[serde(rename = "WWE")]
    Wwe,
    // Team sports
    #[serde(rename = "NFL")]
    Nfl,
    #[serde(rename = "NBA")]
    Nba,
    #[serde(rename = "NHL")]
    Nhl,
    #[serde(rename = "MLB")]
    Mlb,
    #[serde(rename = "MLS")]
    Mls,
    #[serde(rename = "EPL")]
    Epl,
    #[serde(rename = "UCL")]
    Ucl,
    LaLiga,
}

/// Which matcher family scores events of a given prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SportFamily {
    Motorsport,
    Fighting,
    Team,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown sport prefix: {0}")]
pub struct ParseSportPrefixError(pub String);

impl SportPrefix {
    pub const ALL: [SportPrefix; 18] = [
        SportPrefix::Formula1,
        SportPrefix::MotoGP,
        SportPrefix::IndyCar,
        SportPrefix::Nascar,
        SportPrefix::Wec,
        SportPrefix::Ufc,
        SportPrefix::Bellator,
        SportPrefix::Pfl,
        SportPrefix::Boxing,
        SportPrefix::Wwe,
        SportPrefix::Nfl,
        SportPrefix::Nba,
        SportPrefix::Nhl,
        SportPrefix::Mlb,
        SportPrefix::Mls,
        SportPrefix::Epl,
        SportPrefix::Ucl,
        SportPrefix::LaLiga,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SportPrefix::Formula1 => "Formula1",
            SportPrefix::MotoGP => "MotoGP",
            SportPrefix::IndyCar => "IndyCar",
            SportPrefix::Nascar => "NASCAR",
            SportPrefix::Wec => "WEC",
            SportPrefix::Ufc => "UFC",
            SportPrefix::Bellator => "Bellator",
            SportPrefix::Pfl => "PFL",
            SportPrefix::Boxing => "Boxing",
            SportPrefix::Wwe => "WWE",
            SportPrefix::Nfl => "NFL",
            SportPrefix::Nba => "NBA",
            SportPrefix::Nhl => "NHL",
            SportPrefix::Mlb => "MLB",
            SportPrefix::Mls => "MLS",
            SportPrefix::Epl => "EPL",
            SportPrefix::Ucl => "UCL",
            SportPrefix::LaLiga => "LaLiga",
        }
    }

    pub fn family(&self) -> SportFamily {
        match self {
            SportPrefix::Formula1
            | SportPrefix::MotoGP
            | SportPrefix::IndyCar
            | SportPrefix::Nascar
            | SportPrefix::Wec => SportFamily::Motorsport,
            SportPrefix::Ufc
            | SportPrefix::Bellator
            | SportPrefix::Pfl
            | SportPrefix::Boxing
            | SportPrefix::Wwe => SportFamily::Fighting,
            SportPrefix::Nfl
            | SportPrefix::Nba
            | SportPrefix::Nhl
            | SportPrefix::Mlb
            | SportPrefix::Mls
            | SportPrefix::Epl
            | SportPrefix::Ucl
            | SportPrefix::LaLiga => SportFamily::Team,
        }
    }

    /// Round-based motorsport series (race weekends with sessions).
    pub fn is_round_based(&self) -> bool {
        self.family() == SportFamily::Motorsport
    }

    pub fn is_team_sport(&self) -> bool {
        self.family() == SportFamily::Team
    }

    pub fn is_combat_sport(&self) -> bool {
        self.family() == SportFamily::Fighting
    }
}

impl fmt::Display for SportPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SportPrefix {
    type Err = ParseSportPrefixError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        SportPrefix::ALL
            .iter()
            .copied()
            .find(|prefix| prefix.as_str().eq_ignore_ascii_case(token))
            .ok_or_else(|| ParseSportPrefixError(token.to_string()))
    }
}
