//! Release Scoring Integration Tests
//!
//! End-to-end scoring of real-world release titles through the public API.

use chrono::{DateTime, TimeZone, Utc};
use sportarr_core::{
    compute_match_score, compute_match_score_with_facts, evaluate_match, parse_release_title,
    score_releases, EventRef, Rejection, SportPrefix, AUTO_GRAB_MATCH_SCORE, MINIMUM_MATCH_SCORE,
};

fn date(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, 18, 0, 0).unwrap()
}

fn explain(title: &str, event: &EventRef) -> (u8, Option<Rejection>) {
    let eval = evaluate_match(title, &parse_release_title(title), event);
    (eval.score, eval.rejection)
}

// ============================================================================
// Team sports
// ============================================================================

#[test]
fn test_team_two_sidedness() {
    let event = EventRef::new("Kansas City Chiefs at Denver Broncos", date(2024, 10, 13))
        .with_league("NFL")
        .with_teams("Denver Broncos", "Kansas City Chiefs");

    let title = "NFL.Texans.vs.Chiefs.2024.1080p";
    assert_eq!(compute_match_score(title, &event), 0);
    assert_eq!(explain(title, &event).1, Some(Rejection::WrongMatchup));

    let good = "NFL.2024.10.13.Chiefs.vs.Broncos.1080p";
    assert!(compute_match_score(good, &event) >= AUTO_GRAB_MATCH_SCORE);
}

#[test]
fn test_generic_city_prefix_does_not_match() {
    let event = EventRef::new("New York Giants at New Orleans Saints", date(2024, 12, 15))
        .with_league("NFL")
        .with_teams("New Orleans Saints", "New York Giants");

    let title = "NFL.2024.12.15.New.England.Patriots.vs.Buffalo.Bills.1080p";
    assert_eq!(
        explain(title, &event),
        (0, Some(Rejection::TeamsNotFound { head_to_head: true }))
    );
}

#[test]
fn test_soccer_league_not_mistaken_for_nfl() {
    let event = EventRef::new("Real Madrid vs Borussia Dortmund", date(2024, 6, 1))
        .with_league("UEFA Champions League")
        .with_teams("Real Madrid", "Borussia Dortmund");

    let title = "UEFA.Champions.League.2024.06.01.Final.Real.Madrid.vs.Borussia.Dortmund.1080p";
    assert_eq!(parse_release_title(title).sport_prefix, Some(SportPrefix::Ucl));
    assert!(compute_match_score(title, &event) >= AUTO_GRAB_MATCH_SCORE);
}

// ============================================================================
// Motorsport
// ============================================================================

#[test]
fn test_location_conflict() {
    let event = EventRef::new("Qatar Grand Prix", date(2024, 12, 1)).with_league("Formula 1");
    let title = "F1.2024.Brazil.Grand.Prix.Sprint.1080p";
    assert_eq!(compute_match_score(title, &event), 0);
    assert_eq!(explain(title, &event).1, Some(Rejection::LocationConflict));
}

#[test]
fn test_session_disambiguation() {
    let event = EventRef::new("Abu Dhabi Grand Prix", date(2024, 12, 8)).with_league("Formula 1");
    let practice = "F1.2024.AbuDhabi.GP.FP1.1080p";
    assert_eq!(compute_match_score(practice, &event), 0);
    assert_eq!(explain(practice, &event).1, Some(Rejection::SessionMismatch));

    let race = "F1.2024.Abu.Dhabi.Grand.Prix.Race.1080p";
    assert!(compute_match_score(race, &event) >= AUTO_GRAB_MATCH_SCORE);
}

#[test]
fn test_round_number_adds_credit() {
    let event = EventRef::new("Bahrain Grand Prix", date(2024, 3, 2))
        .with_league("Formula 1")
        .with_round("1");
    let with_round = compute_match_score("F1.2024.Round01.Bahrain.Grand.Prix.Race.1080p", &event);
    let without = compute_match_score("F1.2024.Bahrain.Grand.Prix.Race.1080p", &event);
    assert_eq!(with_round, without + 5);
}

// ============================================================================
// Fighting
// ============================================================================

#[test]
fn test_numbered_event_match() {
    let event = EventRef::new("UFC 299", date(2024, 3, 9)).with_league("UFC");
    let right = compute_match_score("UFC.299.PPV.Main.Card.1080p", &event);
    let wrong = compute_match_score("UFC.300.PPV.1080p", &event);
    assert!(right >= AUTO_GRAB_MATCH_SCORE);
    assert_eq!(wrong, 0);
}

#[test]
fn test_wrong_card_with_matching_headliners() {
    let event = EventRef::new("UFC 299: O'Malley vs. Vera 2", date(2024, 3, 9)).with_league("UFC");
    assert_eq!(
        explain("UFC.300.OMalley.vs.Vera.2024.1080p", &event),
        (0, Some(Rejection::EventNumberMismatch))
    );
    assert!(compute_match_score("UFC.299.OMalley.vs.Vera.2024.1080p", &event) >= AUTO_GRAB_MATCH_SCORE);
}

#[test]
fn test_contender_series() {
    let event = EventRef::new("Dana White's Contender Series Season 7 Episode 1", date(2023, 8, 8))
        .with_league("UFC");
    let exact = compute_match_score("Dana.Whites.Contender.Series.S07E01.1080p", &event);
    let wrong_episode = compute_match_score("Dana.Whites.Contender.Series.2023.S07E02.1080p", &event);
    assert!(exact >= AUTO_GRAB_MATCH_SCORE);
    assert!(wrong_episode < exact);
    assert!(wrong_episode > 0);
}

// ============================================================================
// Gates and overloads
// ============================================================================

#[test]
fn test_year_gate() {
    let event = EventRef::new("UFC 299", date(2024, 3, 9)).with_league("UFC");
    assert_eq!(
        explain("UFC.299.2023.PPV.1080p", &event),
        (0, Some(Rejection::YearMismatch))
    );
}

#[test]
fn test_year_gate_on_old_season_full_date() {
    let event = EventRef::new("Baltimore Ravens at Kansas City Chiefs", date(2024, 9, 5))
        .with_league("NFL")
        .with_teams("Kansas City Chiefs", "Baltimore Ravens");
    assert_eq!(
        explain("NFL.2019.09.05.Baltimore.Ravens.vs.Kansas.City.Chiefs.1080p", &event),
        (0, Some(Rejection::YearMismatch))
    );
}

#[test]
fn test_sport_gate() {
    let event = EventRef::new("UFC 299", date(2024, 3, 9)).with_league("UFC");
    assert_eq!(
        explain("299.2024.PPV.1080p", &event),
        (0, Some(Rejection::SportPrefixMissing))
    );
}

#[test]
fn test_pre_parsed_overload_matches_parsing() {
    let event = EventRef::new("Baltimore Ravens at Kansas City Chiefs", date(2024, 9, 5))
        .with_league("NFL")
        .with_teams("Kansas City Chiefs", "Baltimore Ravens");
    let title = "NFL.2024.09.05.Ravens.vs.Chiefs.1080p";
    let parsed = parse_release_title(title);
    let prefix = parsed.sport_prefix.map(|p| p.as_str());
    assert_eq!(
        compute_match_score_with_facts(
            title,
            parsed.year,
            parsed.month,
            parsed.day,
            parsed.round_number,
            prefix,
            &event
        ),
        compute_match_score(title, &event)
    );
}

#[test]
fn test_batch_scoring_end_to_end() {
    let event = EventRef::new("Abu Dhabi Grand Prix", date(2024, 12, 8)).with_league("Formula 1");
    let titles = [
        "F1.2024.AbuDhabi.GP.FP1.1080p",
        "F1.2024.Abu.Dhabi.Grand.Prix.Race.1080p",
        "F1.2024.Qatar.Grand.Prix.Race.1080p",
        "MotoGP.2024.Valencia.Race.1080p",
    ];
    let candidates = score_releases(&event, &titles);
    assert_eq!(candidates.len(), 1);
    assert_eq!(candidates[0].release_title, "F1.2024.Abu.Dhabi.Grand.Prix.Race.1080p");
    assert!(candidates[0].score >= MINIMUM_MATCH_SCORE);
    assert!(candidates[0].auto_grab);
}
