use anyhow::{Context, Result};
use sportarr_core::{AUTO_GRAB_MATCH_SCORE, MINIMUM_MATCH_SCORE};
use std::env;
use std::path::PathBuf;

#[derive(Clone, Debug)]
pub struct Config {
    pub events_file: PathBuf,
    /// Newline-separated release titles; stdin when unset
    pub releases_file: Option<PathBuf>,
    pub min_match_score: u8,
    pub auto_grab_score: u8,
    pub scorer_threads: Option<usize>,
    pub explain_rejections: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            events_file: env::var("EVENTS_FILE")
                .map(PathBuf::from)
                .context("EVENTS_FILE must be set")?,
            releases_file: env::var("RELEASES_FILE").ok().map(PathBuf::from),
            min_match_score: score_var("MIN_MATCH_SCORE", MINIMUM_MATCH_SCORE)?,
            auto_grab_score: score_var("AUTO_GRAB_SCORE", AUTO_GRAB_MATCH_SCORE)?,
            scorer_threads: match env::var("SCORER_THREADS") {
                Ok(v) => Some(
                    v.trim()
                        .parse()
                        .with_context(|| format!("SCORER_THREADS is not a number: {v}"))?,
                ),
                Err(_) => None,
            },
            explain_rejections: env::var("EXPLAIN_REJECTIONS")
                .map(|v| parse_bool(&v))
                .unwrap_or(false),
        })
    }
}

/// Score threshold from the environment, clamped to 0..=100.
fn score_var(name: &str, default: u8) -> Result<u8> {
    match env::var(name) {
        Ok(v) => {
            let parsed: i64 = v
                .trim()
                .parse()
                .with_context(|| format!("{name} is not a number: {v}"))?;
            Ok(parsed.clamp(0, 100) as u8)
        }
        Err(_) => Ok(default),
    }
}

fn parse_bool(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
