//! Sport prefix detection from release titles and catalog league names.

use crate::league_config::{LeagueConfig, LEAGUE_CONFIGS};
use crate::models::SportPrefix;
use crate::utils::text::{contains_phrase, normalize};
use regex::Regex;
use std::sync::OnceLock;

struct CompiledLeague {
    config: &'static LeagueConfig,
    patterns: Vec<Regex>,
}

/// Title patterns compiled once, kept in `LEAGUE_CONFIGS` order.
static COMPILED_LEAGUES: OnceLock<Vec<CompiledLeague>> = OnceLock::new();

fn compiled_leagues() -> &'static [CompiledLeague] {
    COMPILED_LEAGUES.get_or_init(|| {
        LEAGUE_CONFIGS
            .iter()
            .map(|config| CompiledLeague {
                config,
                patterns: config
                    .title_patterns
                    .iter()
                    .filter_map(|p| Regex::new(p).ok())
                    .collect(),
            })
            .collect()
    })
}

fn is_excluded(config: &LeagueConfig, normalized: &str) -> bool {
    config
        .excludes
        .iter()
        .any(|phrase| contains_phrase(normalized, phrase))
}

/// Detect the sport prefix of free text (usually a release title).
///
/// Rows are evaluated in table order and the first hit wins; see
/// `league_config` for why the order is significant.
pub fn detect_sport_prefix(title: &str) -> Option<SportPrefix> {
    let normalized = normalize(title);
    if normalized.is_empty() {
        return None;
    }

    compiled_leagues()
        .iter()
        .find(|league| {
            league.patterns.iter().any(|re| re.is_match(&normalized))
                && !is_excluded(league.config, &normalized)
        })
        .map(|league| league.config.prefix)
}

/// Resolve an event's sport prefix. The curated league name is
/// authoritative; the generic sport label is only consulted (through the
/// title detector) when the league name does not identify a prefix.
pub fn get_sport_prefix(league_name: Option<&str>, sport: Option<&str>) -> Option<SportPrefix> {
    if let Some(prefix) = league_name.and_then(prefix_from_league_name) {
        return Some(prefix);
    }
    sport.and_then(detect_sport_prefix)
}

fn prefix_from_league_name(league_name: &str) -> Option<SportPrefix> {
    let normalized = normalize(league_name);
    if normalized.is_empty() {
        return None;
    }

    // Exact canonical tokens ("Formula1", "LaLiga") short-circuit the table.
    if let Ok(prefix) = normalized.replace(' ', "").parse::<SportPrefix>() {
        return Some(prefix);
    }

    LEAGUE_CONFIGS
        .iter()
        .find(|config| {
            config
                .league_names
                .iter()
                .any(|name| contains_phrase(&normalized, name))
                && !is_excluded(config, &normalized)
        })
        .map(|config| config.prefix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_motorsport() {
        assert_eq!(detect_sport_prefix("F1.2024.Bahrain.Grand.Prix.1080p"), Some(SportPrefix::Formula1));
        assert_eq!(detect_sport_prefix("Formula1.2024.Round01.Race"), Some(SportPrefix::Formula1));
        assert_eq!(detect_sport_prefix("MotoGP.2024.Qatar.Race"), Some(SportPrefix::MotoGP));
        assert_eq!(detect_sport_prefix("IndyCar.Series.2024.Long.Beach"), Some(SportPrefix::IndyCar));
        assert_eq!(detect_sport_prefix("NASCAR.Cup.Series.2024.Daytona.500"), Some(SportPrefix::Nascar));
        assert_eq!(detect_sport_prefix("WEC.2024.24.Hours.of.Le.Mans"), Some(SportPrefix::Wec));
    }

    #[test]
    fn test_detect_fighting() {
        assert_eq!(detect_sport_prefix("UFC.299.PPV.Main.Card.1080p"), Some(SportPrefix::Ufc));
        assert_eq!(detect_sport_prefix("UFC299.Prelims"), Some(SportPrefix::Ufc));
        assert_eq!(
            detect_sport_prefix("Dana.Whites.Contender.Series.S07E01.1080p"),
            Some(SportPrefix::Ufc)
        );
        assert_eq!(detect_sport_prefix("Bellator.301.720p"), Some(SportPrefix::Bellator));
        assert_eq!(detect_sport_prefix("PFL.2024.Week.3"), Some(SportPrefix::Pfl));
        assert_eq!(detect_sport_prefix("Boxing.2024.Fury.vs.Usyk"), Some(SportPrefix::Boxing));
        assert_eq!(detect_sport_prefix("WWE.WrestleMania.40.Night.1"), Some(SportPrefix::Wwe));
    }

    #[test]
    fn test_detect_team_sports() {
        assert_eq!(detect_sport_prefix("NFL.2024.09.05.Ravens.vs.Chiefs"), Some(SportPrefix::Nfl));
        assert_eq!(detect_sport_prefix("NBA.2024.Lakers.vs.Celtics"), Some(SportPrefix::Nba));
        assert_eq!(detect_sport_prefix("NHL 2024 Bruins at Rangers"), Some(SportPrefix::Nhl));
        assert_eq!(detect_sport_prefix("MLB.2024.Yankees.vs.Red.Sox"), Some(SportPrefix::Mlb));
        assert_eq!(detect_sport_prefix("MLS.2024.LAFC.vs.Galaxy"), Some(SportPrefix::Mls));
        assert_eq!(detect_sport_prefix("Premier.League.2024.Arsenal.vs.Chelsea"), Some(SportPrefix::Epl));
        assert_eq!(detect_sport_prefix("UEFA.Champions.League.2024.Final"), Some(SportPrefix::Ucl));
        assert_eq!(detect_sport_prefix("La.Liga.2024.Barcelona.vs.Real.Madrid"), Some(SportPrefix::LaLiga));
    }

    #[test]
    fn test_nfl_excludes_uefa() {
        assert_eq!(detect_sport_prefix("UEFA.Nations.League.NFL.Mixup"), None);
    }

    #[test]
    fn test_word_boundaries() {
        // "WNBA" is not "NBA", "HDR10" is not "F1"
        assert_eq!(detect_sport_prefix("WNBA.2024.Aces.vs.Liberty"), None);
        assert_eq!(detect_sport_prefix("Some.Movie.2024.HDR10.1080p"), None);
    }

    #[test]
    fn test_detect_empty_and_garbage() {
        assert_eq!(detect_sport_prefix(""), None);
        assert_eq!(detect_sport_prefix("...---___"), None);
        assert_eq!(detect_sport_prefix("日本語のタイトル"), None);
    }

    #[test]
    fn test_get_sport_prefix_prefers_league_name() {
        assert_eq!(get_sport_prefix(Some("Formula 1"), Some("Motorsport")), Some(SportPrefix::Formula1));
        assert_eq!(get_sport_prefix(Some("English Premier League"), Some("Soccer")), Some(SportPrefix::Epl));
        assert_eq!(get_sport_prefix(Some("UEFA Champions League"), None), Some(SportPrefix::Ucl));
        assert_eq!(get_sport_prefix(Some("Spanish La Liga"), None), Some(SportPrefix::LaLiga));
        assert_eq!(get_sport_prefix(Some("LaLiga"), None), Some(SportPrefix::LaLiga));
        assert_eq!(get_sport_prefix(Some("Ultimate Fighting Championship"), None), Some(SportPrefix::Ufc));
        assert_eq!(get_sport_prefix(Some("NASCAR Cup Series"), None), Some(SportPrefix::Nascar));
    }

    #[test]
    fn test_get_sport_prefix_falls_back_to_sport() {
        assert_eq!(get_sport_prefix(Some("Local League"), Some("UFC")), Some(SportPrefix::Ufc));
        assert_eq!(get_sport_prefix(None, Some("NBA")), Some(SportPrefix::Nba));
        assert_eq!(get_sport_prefix(None, Some("Basketball")), None);
        assert_eq!(get_sport_prefix(None, None), None);
    }
}
