//! Offline candidate matching: every release title against every event.

use crate::config::Config;
use rayon::prelude::*;
use serde::Serialize;
use sportarr_core::{
    evaluate_match, parse_release_title, score_releases_with_thresholds, EventRef,
};

/// One output line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoredLine {
    pub event_title: String,
    pub release_title: String,
    pub score: u8,
    pub auto_grab: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejection: Option<String>,
}

/// Release titles from newline-separated input, blank lines dropped.
pub fn release_titles(input: &str) -> Vec<String> {
    input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Candidates for one event, best first.
pub fn score_event(event: &EventRef, titles: &[String], config: &Config) -> Vec<ScoredLine> {
    if !config.explain_rejections {
        return score_releases_with_thresholds(
            event,
            titles,
            config.min_match_score,
            config.auto_grab_score,
        )
        .into_iter()
        .map(|c| ScoredLine {
            event_title: event.title.clone(),
            release_title: c.release_title,
            score: c.score,
            auto_grab: c.auto_grab,
            rejection: None,
        })
        .collect();
    }

    let mut lines: Vec<ScoredLine> = titles
        .par_iter()
        .filter_map(|title| {
            let parsed = parse_release_title(title);
            let eval = evaluate_match(title, &parsed, event);
            let keep = eval.rejection.is_some() || eval.score >= config.min_match_score;
            keep.then(|| ScoredLine {
                event_title: event.title.clone(),
                release_title: title.clone(),
                score: eval.score,
                auto_grab: eval.rejection.is_none() && eval.score >= config.auto_grab_score,
                rejection: eval.rejection.map(|r| r.to_string()),
            })
        })
        .collect();

    lines.sort_by(|a, b| b.score.cmp(&a.score));
    lines
}

/// Score all events; output keeps event order.
pub fn run(events: &[EventRef], titles: &[String], config: &Config) -> Vec<ScoredLine> {
    events
        .iter()
        .flat_map(|event| score_event(event, titles, config))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use std::path::PathBuf;

    fn config(explain: bool) -> Config {
        Config {
            events_file: PathBuf::from("events.json"),
            releases_file: None,
            min_match_score: 30,
            auto_grab_score: 50,
            scorer_threads: None,
            explain_rejections: explain,
        }
    }

    fn ufc_299() -> EventRef {
        EventRef::new("UFC 299", Utc.with_ymd_and_hms(2024, 3, 9, 22, 0, 0).unwrap()).with_league("UFC")
    }

    #[test]
    fn test_release_titles_skip_blank_lines() {
        let titles = release_titles("UFC.299.PPV\n\n   \r\nUFC.300.PPV\r\n");
        assert_eq!(titles, vec!["UFC.299.PPV", "UFC.300.PPV"]);
    }

    #[test]
    fn test_score_event_candidates_only() {
        let titles = release_titles("UFC.300.PPV.1080p\nUFC.299.PPV.Main.Card.1080p\nBellator.299.1080p");
        let lines = score_event(&ufc_299(), &titles, &config(false));
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].release_title, "UFC.299.PPV.Main.Card.1080p");
        assert_eq!(lines[0].score, 55);
        assert!(lines[0].auto_grab);
        assert!(lines[0].rejection.is_none());
    }

    #[test]
    fn test_score_event_explains_rejections() {
        let titles = release_titles("UFC.300.PPV.1080p\nUFC.299.PPV.Main.Card.1080p\nBellator.299.1080p");
        let lines = score_event(&ufc_299(), &titles, &config(true));
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].score, 55);
        assert!(lines[0].rejection.is_none());
        // Rejections tie at 0 and keep input order
        assert_eq!(lines[1].release_title, "UFC.300.PPV.1080p");
        assert_eq!(
            lines[1].rejection.as_deref(),
            Some("release is a different numbered event")
        );
        assert_eq!(lines[2].release_title, "Bellator.299.1080p");
        assert_eq!(lines[2].score, 0);
        assert!(!lines[2].auto_grab);
        assert_eq!(
            lines[2].rejection.as_deref(),
            Some("release sport prefix differs from event")
        );
    }

    #[test]
    fn test_scored_line_json_shape() {
        let line = ScoredLine {
            event_title: "UFC 299".to_string(),
            release_title: "UFC.299.PPV".to_string(),
            score: 55,
            auto_grab: true,
            rejection: None,
        };
        let json = serde_json::to_value(&line).unwrap();
        assert_eq!(json["score"], 55);
        assert!(json.get("rejection").is_none());
    }
}
