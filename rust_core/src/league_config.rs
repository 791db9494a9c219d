//! League configuration for supported sport prefixes.
//!
//! This module provides:
//! - The ordered keyword table used to recognise a sport prefix in release
//!   titles and in catalog league names
//! - Per-prefix lookup of that configuration
//!
//! ORDER MATTERS. Detection walks `LEAGUE_CONFIGS` top to bottom and the
//! first hit wins. Later rows assume earlier rows already claimed titles
//! that share words with them: the soccer competitions sit above the
//! North American leagues so "League" phrases resolve to the specific
//! competition first, and the fighting promotions sit above everything
//! that could appear on a fight card. Do not sort or regroup this table.

use crate::models::SportPrefix;

/// Configuration for a single league.
#[derive(Debug, Clone)]
pub struct LeagueConfig {
    pub prefix: SportPrefix,
    /// Normalized phrases that identify the league in a catalog league name
    /// (whole-word match).
    pub league_names: &'static [&'static str],
    /// Regexes applied to the normalized (lowercase, single-spaced) release title.
    pub title_patterns: &'static [&'static str],
    /// Normalized phrases whose presence vetoes this row.
    pub excludes: &'static [&'static str],
}

/// Static configuration for all supported leagues, in detection order.
pub static LEAGUE_CONFIGS: &[LeagueConfig] = &[
    // Motorsport
    LeagueConfig {
        prefix: SportPrefix::Formula1,
        league_names: &["formula 1", "formula1", "formula one", "f1"],
        title_patterns: &[r"\bformula\s?(?:1|one)\b", r"\bf1\b"],
        excludes: &[],
    },
    LeagueConfig {
        prefix: SportPrefix::MotoGP,
        league_names: &["motogp", "moto gp"],
        title_patterns: &[r"\bmoto\s?gp\b"],
        excludes: &[],
    },
    LeagueConfig {
        prefix: SportPrefix::IndyCar,
        league_names: &["indycar", "indy car"],
        title_patterns: &[r"\bindy\s?car\b", r"\bindy(?:anapolis)?\s?500\b"],
        excludes: &[],
    },
    LeagueConfig {
        prefix: SportPrefix::Nascar,
        league_names: &["nascar"],
        title_patterns: &[r"\bnascar\b"],
        excludes: &[],
    },
    LeagueConfig {
        prefix: SportPrefix::Wec,
        league_names: &["wec", "world endurance"],
        title_patterns: &[r"\bwec\b", r"\bworld endurance\b", r"\ble mans\b"],
        excludes: &[],
    },
    // Fighting
    LeagueConfig {
        prefix: SportPrefix::Ufc,
        league_names: &["ufc", "ultimate fighting championship"],
        title_patterns: &[r"\bufc(?:\b|\d)", r"\bcontender series\b"],
        excludes: &[],
    },
    LeagueConfig {
        prefix: SportPrefix::Bellator,
        league_names: &["bellator"],
        title_patterns: &[r"\bbellator(?:\b|\d)"],
        excludes: &[],
    },
    LeagueConfig {
        prefix: SportPrefix::Pfl,
        league_names: &["pfl", "professional fighters league"],
        title_patterns: &[r"\bpfl(?:\b|\d)", r"\bprofessional fighters league\b"],
        excludes: &[],
    },
    LeagueConfig {
        prefix: SportPrefix::Boxing,
        league_names: &["boxing"],
        title_patterns: &[
            r"\bboxing\b",
            r"\b(?:wbc|wba|ibf|wbo)\b",
            r"\bmatchroom\b",
            r"\btop rank\b",
        ],
        excludes: &[],
    },
    LeagueConfig {
        prefix: SportPrefix::Wwe,
        league_names: &["wwe", "world wrestling entertainment"],
        title_patterns: &[
            r"\bwwe\b",
            r"\bwrestlemania\b",
            r"\bsmackdown\b",
            r"\bsummerslam\b",
            r"\broyal rumble\b",
        ],
        excludes: &[],
    },
    // Soccer competitions before the generic "league" names below
    LeagueConfig {
        prefix: SportPrefix::Epl,
        league_names: &["english premier league", "premier league", "epl"],
        title_patterns: &[r"\bepl\b", r"\bpremier league\b"],
        excludes: &[],
    },
    LeagueConfig {
        prefix: SportPrefix::Ucl,
        league_names: &["champions league", "ucl"],
        title_patterns: &[r"\bucl\b", r"\bchampions league\b"],
        excludes: &[],
    },
    LeagueConfig {
        prefix: SportPrefix::LaLiga,
        league_names: &["la liga", "laliga", "primera division"],
        title_patterns: &[r"\bla\s?liga\b"],
        excludes: &[],
    },
    // North American leagues
    LeagueConfig {
        prefix: SportPrefix::Nfl,
        league_names: &["nfl", "national football league"],
        title_patterns: &[r"\bnfl\b", r"\bsuper bowl\b", r"\bnational football league\b"],
        excludes: &["uefa"],
    },
    LeagueConfig {
        prefix: SportPrefix::Nba,
        league_names: &["nba", "national basketball association"],
        title_patterns: &[r"\bnba\b", r"\bnational basketball association\b"],
        excludes: &[],
    },
    LeagueConfig {
        prefix: SportPrefix::Nhl,
        league_names: &["nhl", "national hockey league"],
        title_patterns: &[r"\bnhl\b", r"\bnational hockey league\b", r"\bstanley cup\b"],
        excludes: &[],
    },
    LeagueConfig {
        prefix: SportPrefix::Mlb,
        league_names: &["mlb", "major league baseball"],
        title_patterns: &[r"\bmlb\b", r"\bmajor league baseball\b"],
        excludes: &[],
    },
    LeagueConfig {
        prefix: SportPrefix::Mls,
        league_names: &["mls", "major league soccer"],
        title_patterns: &[r"\bmls\b", r"\bmajor league soccer\b"],
        excludes: &[],
    },
];

/// Get league configuration for a prefix.
pub fn get_league_config(prefix: SportPrefix) -> Option<&'static LeagueConfig> {
    LEAGUE_CONFIGS.iter().find(|c| c.prefix == prefix)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_prefix_configured_once() {
        assert_eq!(LEAGUE_CONFIGS.len(), SportPrefix::ALL.len());
        for prefix in SportPrefix::ALL {
            assert_eq!(
                LEAGUE_CONFIGS.iter().filter(|c| c.prefix == prefix).count(),
                1,
                "{prefix} configured more than once"
            );
        }
    }

    #[test]
    fn test_get_league_config() {
        let nfl = get_league_config(SportPrefix::Nfl).unwrap();
        assert_eq!(nfl.excludes, &["uefa"]);
        assert!(nfl.league_names.contains(&"national football league"));
    }

    #[test]
    fn test_soccer_rows_precede_north_american_leagues() {
        let position = |p: SportPrefix| LEAGUE_CONFIGS.iter().position(|c| c.prefix == p).unwrap();
        for soccer in [SportPrefix::Epl, SportPrefix::Ucl, SportPrefix::LaLiga] {
            assert!(position(soccer) < position(SportPrefix::Nfl));
            assert!(position(soccer) < position(SportPrefix::Mls));
        }
    }
}
