//! Match result and end-of-match summary.
//!
//! The result is a read of the final tallies, not separate state. Team one can
//! only win by runs; team two, having chased the target down, wins by the
//! wickets it had in hand.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::settings::MatchSettings;
use crate::state::TeamTally;

/// Identifies one of the two sides.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TeamSide {
    /// Batted first.
    Team1,
    /// Batted second.
    Team2,
}

/// How comfortable the win was.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Margin {
    /// Team one's total minus team two's.
    Runs(u32),
    /// Wickets team two had left.
    Wickets(u32),
}

impl fmt::Display for Margin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Runs(1) => f.write_str("1 run"),
            Self::Runs(n) => write!(f, "{n} runs"),
            Self::Wickets(1) => f.write_str("1 wicket"),
            Self::Wickets(n) => write!(f, "{n} wickets"),
        }
    }
}

/// Outcome of a finished match.
///
/// # Example
///
/// ```
/// use crease_core::result::{Margin, MatchResult, TeamSide};
///
/// let result = MatchResult::Won {
///     side: TeamSide::Team1,
///     team: "Lions".into(),
///     margin: Margin::Runs(12),
/// };
/// assert_eq!(result.to_string(), "Lions win by 12 runs");
/// assert_eq!(result.winner(), Some("Lions"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchResult {
    /// One side finished ahead.
    Won {
        /// Winning side.
        side: TeamSide,
        /// Winning team's name.
        team: String,
        /// Winning margin.
        margin: Margin,
    },
    /// Level scores.
    Tie,
}

impl MatchResult {
    /// Compares final totals.
    #[must_use]
    pub fn from_tallies(settings: &MatchSettings, team1: &TeamTally, team2: &TeamTally) -> Self {
        use std::cmp::Ordering;

        match team1.runs().cmp(&team2.runs()) {
            Ordering::Greater => Self::Won {
                side: TeamSide::Team1,
                team: team1.name().to_string(),
                margin: Margin::Runs(team1.runs() - team2.runs()),
            },
            Ordering::Less => Self::Won {
                side: TeamSide::Team2,
                team: team2.name().to_string(),
                margin: Margin::Wickets(
                    settings
                        .max_wickets_per_innings
                        .saturating_sub(team2.wickets_lost()),
                ),
            },
            Ordering::Equal => Self::Tie,
        }
    }

    /// Winning team's name, `None` for a tie.
    #[must_use]
    pub fn winner(&self) -> Option<&str> {
        match self {
            Self::Won { team, .. } => Some(team),
            Self::Tie => None,
        }
    }

    /// Whether the scores finished level.
    #[must_use]
    pub fn is_tie(&self) -> bool {
        matches!(self, Self::Tie)
    }
}

impl fmt::Display for MatchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Won { team, margin, .. } => write!(f, "{team} win by {margin}"),
            Self::Tie => f.write_str("Match tied"),
        }
    }
}

/// One side's line on the results screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamSummary {
    /// Team name.
    pub name: String,
    /// Runs scored.
    pub runs: u32,
    /// Wickets lost.
    pub wickets: u32,
    /// Overs faced as `"overs.balls"`.
    pub overs: String,
    /// Run rate over the innings.
    pub run_rate: String,
}

impl From<&TeamTally> for TeamSummary {
    fn from(tally: &TeamTally) -> Self {
        Self {
            name: tally.name().to_string(),
            runs: tally.runs(),
            wickets: tally.wickets_lost(),
            overs: tally.overs(),
            run_rate: tally.run_rate(),
        }
    }
}

/// End-of-match report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSummary {
    /// Who won and by how much.
    pub result: MatchResult,
    /// Team one's innings.
    pub team1: TeamSummary,
    /// Team two's innings.
    pub team2: TeamSummary,
    /// Runs across both innings.
    pub total_runs: u32,
    /// Wickets across both innings.
    pub total_wickets: u32,
}

impl MatchSummary {
    /// Builds the summary from the final tallies.
    #[must_use]
    pub fn new(result: MatchResult, team1: &TeamTally, team2: &TeamTally) -> Self {
        Self {
            result,
            total_runs: team1.runs() + team2.runs(),
            total_wickets: team1.wickets_lost() + team2.wickets_lost(),
            team1: team1.into(),
            team2: team2.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outcome::{BallOutcome, OutcomeCategory};
    use crate::state::MatchState;
    use crate::tests::{one_over_settings, outcomes};

    fn finished(first: &[OutcomeCategory], second: &[OutcomeCategory]) -> MatchState {
        let mut state = MatchState::start(one_over_settings()).unwrap();
        for outcome in outcomes(first).into_iter().chain(outcomes(second)) {
            state.apply_outcome(outcome).unwrap();
        }
        assert!(state.is_complete());
        state
    }

    #[test]
    fn team_one_wins_by_runs() {
        let state = finished(&[OutcomeCategory::Four; 6], &[OutcomeCategory::Single; 6]);
        let result = state.result().unwrap();
        assert_eq!(
            result,
            MatchResult::Won {
                side: TeamSide::Team1,
                team: "A".into(),
                margin: Margin::Runs(18),
            }
        );
        assert_eq!(result.to_string(), "A win by 18 runs");
    }

    #[test]
    fn team_two_wins_by_wickets() {
        let state = finished(
            &[OutcomeCategory::Single; 6],
            &[OutcomeCategory::Wicket, OutcomeCategory::Six, OutcomeCategory::Single],
        );
        let result = state.result().unwrap();
        assert_eq!(result.winner(), Some("B"));
        assert_eq!(
            result,
            MatchResult::Won {
                side: TeamSide::Team2,
                team: "B".into(),
                margin: Margin::Wickets(9),
            }
        );
    }

    #[test]
    fn level_scores_tie() {
        let state = finished(&[OutcomeCategory::Double; 6], &[OutcomeCategory::Double; 6]);
        let result = state.result().unwrap();
        assert!(result.is_tie());
        assert_eq!(result.winner(), None);
        assert_eq!(result.to_string(), "Match tied");
    }

    #[test]
    fn margin_display_is_singular_for_one() {
        assert_eq!(Margin::Runs(1).to_string(), "1 run");
        assert_eq!(Margin::Wickets(1).to_string(), "1 wicket");
        assert_eq!(Margin::Wickets(4).to_string(), "4 wickets");
    }

    #[test]
    fn summary_totals_both_innings() {
        let mut second = vec![OutcomeCategory::Wicket; 2];
        second.extend([OutcomeCategory::Four; 4]);
        let state = finished(&[OutcomeCategory::Triple; 6], &second);
        let summary = state.summary().unwrap();

        assert_eq!(summary.team1.runs, 18);
        assert_eq!(summary.team1.overs, "1.0");
        assert_eq!(summary.team1.run_rate, "18.00");
        assert_eq!(summary.team2.runs, 16);
        assert_eq!(summary.team2.wickets, 2);
        assert_eq!(summary.total_runs, 34);
        assert_eq!(summary.total_wickets, 2);
        assert_eq!(summary.result.winner(), Some("A"));
    }

    #[test]
    fn last_ball_is_recorded_on_completion() {
        let state = finished(&[OutcomeCategory::Dot; 6], &[OutcomeCategory::Six]);
        assert_eq!(
            state.last_outcome().map(BallOutcome::category),
            Some(OutcomeCategory::Six)
        );
    }
}
