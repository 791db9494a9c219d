//! Month/day proximity scoring for date-stamped team-sport releases.

use super::{MatchContext, ReleaseMatcher, SubScore};
use crate::models::SportFamily;

pub const MONTH_MATCH_SCORE: i32 = 10;
pub const DAY_MATCH_SCORE: i32 = 10;
pub const DATE_MISMATCH_PENALTY: i32 = 5;

/// Score parsed month/day against the event date. Never rejects; floors at 0.
pub fn score_date(ctx: &MatchContext<'_>) -> SubScore {
    let parsed = ctx.parsed;
    let event = ctx.event;
    let mut score = 0;

    if parsed.month == Some(event.month()) {
        score += MONTH_MATCH_SCORE;
    }
    if parsed.day == Some(event.day()) {
        score += DAY_MATCH_SCORE;
    }

    if let (Some(month), Some(day)) = (parsed.month, parsed.day) {
        if month != event.month() || day != event.day() {
            score -= DATE_MISMATCH_PENALTY;
        }
    }

    SubScore::Scored(score.max(0))
}

/// Date matcher for team sports
pub struct DateMatcher;

impl ReleaseMatcher for DateMatcher {
    fn name(&self) -> &'static str {
        "date"
    }

    fn supports(&self, family: SportFamily) -> bool {
        family == SportFamily::Team
    }

    fn score(&self, ctx: &MatchContext<'_>) -> SubScore {
        score_date(ctx)
    }
}
