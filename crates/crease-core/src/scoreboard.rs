//! Derived scoreboard values.
//!
//! Everything here is a pure function of the match state. Rates are returned
//! pre-formatted with two decimals because that is how every consumer shows
//! them.

use serde::{Deserialize, Serialize};

use crate::outcome::BallOutcome;
use crate::settings::BALLS_PER_OVER;
use crate::state::{Innings, MatchState};

/// Formats a ball count as `"overs.balls"`.
///
/// # Example
///
/// ```
/// use crease_core::scoreboard::format_overs;
///
/// assert_eq!(format_overs(13), "2.1");
/// assert_eq!(format_overs(6), "1.0");
/// ```
#[must_use]
pub fn format_overs(balls: u32) -> String {
    format!("{}.{}", balls / BALLS_PER_OVER, balls % BALLS_PER_OVER)
}

/// Runs per over, `"0.00"` before the first ball.
///
/// # Example
///
/// ```
/// use crease_core::scoreboard::calculate_run_rate;
///
/// assert_eq!(calculate_run_rate(30, 18), "10.00");
/// assert_eq!(calculate_run_rate(12, 0), "0.00");
/// ```
#[must_use]
pub fn calculate_run_rate(runs: u32, balls: u32) -> String {
    if balls == 0 {
        return format_rate(0.0);
    }
    format_rate(per_over(runs, balls))
}

/// Runs per over needed to pass `target`.
///
/// `"0.00"` when there is no target or no balls remain. Once the target has
/// been passed the requirement is zero.
#[must_use]
pub fn calculate_required_run_rate(
    target: Option<u32>,
    current_runs: u32,
    balls_remaining: u32,
) -> String {
    match target {
        Some(target) if balls_remaining > 0 => {
            format_rate(per_over(runs_needed(target, current_runs), balls_remaining))
        }
        _ => format_rate(0.0),
    }
}

/// Balls left in an innings of `max_overs`.
#[must_use]
pub fn balls_remaining(max_overs: u32, balls_played: u32) -> u32 {
    max_overs
        .saturating_mul(BALLS_PER_OVER)
        .saturating_sub(balls_played)
}

/// Runs required to pass `target` from `current_runs`.
#[must_use]
pub fn runs_needed(target: u32, current_runs: u32) -> u32 {
    target.saturating_add(1).saturating_sub(current_runs)
}

fn per_over(runs: u32, balls: u32) -> f64 {
    f64::from(runs) / f64::from(balls) * f64::from(BALLS_PER_OVER)
}

fn format_rate(rate: f64) -> String {
    format!("{rate:.2}")
}

/// Snapshot of everything a scoreboard shows.
///
/// # Example
///
/// ```
/// use crease_core::scoreboard::Scoreboard;
/// use crease_core::settings::MatchSettings;
/// use crease_core::state::MatchState;
///
/// let state = MatchState::start(MatchSettings::new("A", "B", 2)).unwrap();
/// let board = Scoreboard::from(&state);
/// assert_eq!(board.batting_team, "A");
/// assert_eq!(board.overs, "0.0");
/// assert_eq!(board.balls_remaining, 12);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scoreboard {
    /// 1 or 2.
    pub innings: u8,
    /// Side at the crease.
    pub batting_team: String,
    /// Side in the field.
    pub bowling_team: String,
    /// Batting side's runs.
    pub runs: u32,
    /// Batting side's wickets lost.
    pub wickets: u32,
    /// Overs faced as `"overs.balls"`.
    pub overs: String,
    /// Overs per innings.
    pub max_overs: u32,
    /// Current run rate.
    pub current_run_rate: String,
    /// Required run rate, second innings only.
    pub required_run_rate: Option<String>,
    /// Balls left this innings.
    pub balls_remaining: u32,
    /// First-innings total, once set.
    pub target: Option<u32>,
    /// Runs still needed, second innings only.
    pub runs_needed: Option<u32>,
    /// Most recent ball.
    pub last_outcome: Option<BallOutcome>,
    /// Whether the match is over.
    pub is_complete: bool,
}

impl From<&MatchState> for Scoreboard {
    fn from(state: &MatchState) -> Self {
        let batting = state.batting_team();
        let chasing = state.current_innings() == Innings::Second;
        Self {
            innings: state.innings_number(),
            batting_team: batting.name().to_string(),
            bowling_team: state.bowling_team().name().to_string(),
            runs: batting.runs(),
            wickets: batting.wickets_lost(),
            overs: batting.overs(),
            max_overs: state.settings().max_overs,
            current_run_rate: batting.run_rate(),
            required_run_rate: chasing.then(|| state.required_run_rate()),
            balls_remaining: state.balls_remaining(),
            target: state.target(),
            runs_needed: state.runs_needed(),
            last_outcome: state.last_outcome().cloned(),
            is_complete: state.is_complete(),
        }
    }
}
