//! Python bindings, built with the `python` feature.

use crate::models::{EventRef, ParsedRelease};
use crate::{parsing, scoring};
use chrono::{DateTime, Utc};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

/// Facts parsed from a release title
#[pyclass(name = "ParsedRelease")]
#[derive(Clone)]
pub struct PyParsedRelease {
    #[pyo3(get)]
    pub year: Option<i32>,
    #[pyo3(get)]
    pub month: Option<u32>,
    #[pyo3(get)]
    pub day: Option<u32>,
    #[pyo3(get)]
    pub round_number: Option<u32>,
    #[pyo3(get)]
    pub sport_prefix: Option<String>,
}

impl From<ParsedRelease> for PyParsedRelease {
    fn from(parsed: ParsedRelease) -> Self {
        Self {
            year: parsed.year,
            month: parsed.month,
            day: parsed.day,
            round_number: parsed.round_number,
            sport_prefix: parsed.sport_prefix.map(|p| p.as_str().to_string()),
        }
    }
}

#[pymethods]
impl PyParsedRelease {
    fn __repr__(&self) -> String {
        format!(
            "ParsedRelease(year={:?}, month={:?}, day={:?}, round_number={:?}, sport_prefix={:?})",
            self.year, self.month, self.day, self.round_number, self.sport_prefix
        )
    }
}

#[pyfunction]
#[pyo3(name = "parse_release_title")]
fn py_parse_release_title(title: &str) -> PyParsedRelease {
    parsing::parse_release_title(title).into()
}

#[pyfunction]
#[pyo3(name = "detect_sport_prefix")]
fn py_detect_sport_prefix(title: &str) -> Option<String> {
    parsing::detect_sport_prefix(title).map(|p| p.as_str().to_string())
}

#[pyfunction]
#[pyo3(name = "get_sport_prefix", signature = (league_name=None, sport=None))]
fn py_get_sport_prefix(league_name: Option<&str>, sport: Option<&str>) -> Option<String> {
    parsing::get_sport_prefix(league_name, sport).map(|p| p.as_str().to_string())
}

/// Score a release title against an event.
///
/// `event_date` is an RFC 3339 timestamp.
#[pyfunction]
#[pyo3(
    name = "compute_match_score",
    signature = (title, event_title, event_date, league_name=None, sport=None, round=None, home_team_name=None, away_team_name=None)
)]
#[allow(clippy::too_many_arguments)]
fn py_compute_match_score(
    title: &str,
    event_title: &str,
    event_date: &str,
    league_name: Option<String>,
    sport: Option<String>,
    round: Option<String>,
    home_team_name: Option<String>,
    away_team_name: Option<String>,
) -> PyResult<u8> {
    let event_date = DateTime::parse_from_rfc3339(event_date)
        .map_err(|e| PyValueError::new_err(format!("invalid event_date: {e}")))?
        .with_timezone(&Utc);

    let event = EventRef {
        event_date,
        league_name,
        sport,
        round,
        title: event_title.to_string(),
        home_team_name,
        away_team_name,
    };
    Ok(scoring::compute_match_score(title, &event))
}

/// Python module definition
#[pymodule]
fn sportarr_core(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_class::<PyParsedRelease>()?;

    m.add_function(wrap_pyfunction!(py_parse_release_title, m)?)?;
    m.add_function(wrap_pyfunction!(py_detect_sport_prefix, m)?)?;
    m.add_function(wrap_pyfunction!(py_get_sport_prefix, m)?)?;
    m.add_function(wrap_pyfunction!(py_compute_match_score, m)?)?;

    m.add("MINIMUM_MATCH_SCORE", scoring::MINIMUM_MATCH_SCORE)?;
    m.add("AUTO_GRAB_MATCH_SCORE", scoring::AUTO_GRAB_MATCH_SCORE)?;

    Ok(())
}
