//! Team Release Matcher
//!
//! Two-sided (home + away) team name matching for conventional team sports.
//! A release for a game must name both sides; naming only one is treated as
//! the wrong matchup rather than a weak match.

use super::{MatchContext, Rejection, ReleaseMatcher, SubScore};
use crate::models::SportFamily;
use crate::utils::text::tokenize;

/// Maximum points one team contributes
pub const MAX_TEAM_SCORE: i32 = 20;

/// Words that never identify a team
const TEAM_STOPWORDS: &[&str] = &["the", "and", "for", "club", "team", "afc", "vs", "at"];

/// City prefixes shared by many teams; matching only these proves nothing
/// ("New" would otherwise match "New Orleans Saints" to any New York team).
const GENERIC_CITY_PREFIXES: &[&str] = &["new", "los", "san", "las", "st", "saint"];

/// Tokens that mark a release as a head-to-head game
const GAME_SEPARATORS: &[&str] = &["vs", "v", "versus", "at"];

/// Result of looking for one team in a release title
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeamMatch {
    pub matched: bool,
    pub points: i32,
}

/// Significant words of a team name: longer than two characters, not a stopword.
pub fn significant_words(team_name: &str) -> Vec<String> {
    tokenize(team_name)
        .into_iter()
        .filter(|w| w.chars().count() > 2 && !TEAM_STOPWORDS.contains(&w.as_str()))
        .collect()
}

/// Match one team name against the release. `None` when the name has no
/// significant words to look for.
pub fn match_team(team_name: &str, ctx: &MatchContext<'_>) -> Option<TeamMatch> {
    let words = significant_words(team_name);
    // Nickname is usually the last significant word ("Saints")
    let nickname = words.last()?;

    let present: Vec<&String> = words.iter().filter(|w| ctx.has_token(w)).collect();
    let fraction = present.len() as f64 / words.len() as f64;

    let only_generic = present
        .iter()
        .all(|w| GENERIC_CITY_PREFIXES.contains(&w.as_str()));
    let matched = !present.is_empty()
        && !only_generic
        && (ctx.has_token(nickname) || fraction >= 0.5);

    let points = if matched {
        (MAX_TEAM_SCORE as f64 * fraction).round() as i32
    } else {
        0
    };

    Some(TeamMatch { matched, points })
}

/// Whether the release looks like a single game ("A vs B", "A at B", "A @ B").
pub fn looks_like_game(ctx: &MatchContext<'_>) -> bool {
    ctx.title.contains('@') || GAME_SEPARATORS.iter().any(|sep| ctx.has_token(sep))
}

/// Score both sides of the event against the release.
pub fn score_teams(ctx: &MatchContext<'_>) -> SubScore {
    let home = ctx
        .event
        .home_team_name
        .as_deref()
        .and_then(|name| match_team(name, ctx));
    let away = ctx
        .event
        .away_team_name
        .as_deref()
        .and_then(|name| match_team(name, ctx));

    match (home, away) {
        (Some(home), Some(away)) => match (home.matched, away.matched) {
            (true, true) => SubScore::Scored(home.points + away.points),
            (false, false) => SubScore::Rejected(Rejection::TeamsNotFound {
                head_to_head: looks_like_game(ctx),
            }),
            _ => SubScore::Rejected(Rejection::WrongMatchup),
        },
        (Some(single), None) | (None, Some(single)) => {
            if single.matched {
                SubScore::Scored(single.points)
            } else {
                SubScore::Rejected(Rejection::TeamNotFound {
                    head_to_head: looks_like_game(ctx),
                })
            }
        }
        (None, None) => SubScore::Scored(0),
    }
}

/// Team sports matcher
pub struct TeamMatcher;

impl ReleaseMatcher for TeamMatcher {
    fn name(&self) -> &'static str {
        "team"
    }

    fn supports(&self, family: SportFamily) -> bool {
        family == SportFamily::Team
    }

    fn score(&self, ctx: &MatchContext<'_>) -> SubScore {
        score_teams(ctx)
    }
}
