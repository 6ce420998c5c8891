//! Parallel batch of independent seeded matches.
//!
//! Matches share nothing, so each seed becomes one rayon task with its own
//! [`Simulation`]. Results come back in seed order and are identical to
//! playing the same seeds one after another.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::Result;
use crate::resolver::OutcomeResolver;
use crate::result::{MatchResult, MatchSummary, TeamSide};
use crate::settings::MatchSettings;
use crate::simulation::{Simulation, StylePicker};

/// Plays one full match per seed and returns the summaries in seed order.
///
/// # Errors
///
/// Returns [`crate::MatchError::InvalidSettings`] before any match is played
/// if the settings are invalid.
///
/// # Example
///
/// ```
/// use crease_core::batch::run_batch;
/// use crease_core::resolver::OutcomeResolver;
/// use crease_core::settings::MatchSettings;
/// use crease_core::simulation::StylePicker;
///
/// let settings = MatchSettings::new("A", "B", 2);
/// let seeds: Vec<u64> = (0..8).collect();
/// let resolver = OutcomeResolver::standard();
/// let summaries = run_batch(&settings, resolver, &seeds, StylePicker::Random).unwrap();
/// assert_eq!(summaries.len(), 8);
/// ```
pub fn run_batch(
    settings: &MatchSettings,
    resolver: &OutcomeResolver,
    seeds: &[u64],
    picker: StylePicker,
) -> Result<Vec<MatchSummary>> {
    settings.validate()?;
    let summaries = seeds
        .par_iter()
        .map(|&seed| play_one(settings, resolver, seed, picker))
        .collect::<Result<Vec<_>>>()?;

    info!(matches = summaries.len(), "batch complete");
    Ok(summaries)
}

fn play_one(
    settings: &MatchSettings,
    resolver: &OutcomeResolver,
    seed: u64,
    picker: StylePicker,
) -> Result<MatchSummary> {
    let mut sim = Simulation::with_resolver(settings.clone(), resolver.clone(), seed)?;
    let result = sim.autoplay(picker)?;
    let state = sim.into_state();
    Ok(MatchSummary::new(result, state.team1(), state.team2()))
}

/// Aggregate figures over a batch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchReport {
    /// Matches played.
    pub matches: usize,
    /// Wins for the side batting first.
    pub team1_wins: usize,
    /// Wins for the side batting second.
    pub team2_wins: usize,
    /// Tied matches.
    pub ties: usize,
    /// Mean first-innings total.
    pub mean_team1_runs: f64,
    /// Mean second-innings total.
    pub mean_team2_runs: f64,
}

impl BatchReport {
    /// Tallies a set of summaries.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn from_summaries(summaries: &[MatchSummary]) -> Self {
        let mut report = Self {
            matches: summaries.len(),
            ..Self::default()
        };
        if summaries.is_empty() {
            return report;
        }

        let mut team1_runs = 0u64;
        let mut team2_runs = 0u64;
        for summary in summaries {
            match summary.result {
                MatchResult::Won {
                    side: TeamSide::Team1,
                    ..
                } => report.team1_wins += 1,
                MatchResult::Won {
                    side: TeamSide::Team2,
                    ..
                } => report.team2_wins += 1,
                MatchResult::Tie => report.ties += 1,
            }
            team1_runs += u64::from(summary.team1.runs);
            team2_runs += u64::from(summary.team2.runs);
        }

        let n = summaries.len() as f64;
        report.mean_team1_runs = team1_runs as f64 / n;
        report.mean_team2_runs = team2_runs as f64 / n;
        report
    }
}
