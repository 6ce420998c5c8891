//! # Crease Core
//!
//! Match engine for a two-innings limited-overs cricket game.
//!
//! Each ball is decided by the cross of a batting style and a bowling style.
//! The engine turns that choice into a sampled outcome and keeps the score
//! until the match is won, lost or tied.
//!
//! ## Architecture
//!
//! - **Resolver**: probability table, normalization and sampling
//!   ([`resolver`])
//! - **State machine**: team tallies, innings and match transitions
//!   ([`state`])
//! - **Views**: scoreboard values and final result ([`scoreboard`], [`result`])
//! - **Drivers**: seeded single match and parallel batches ([`simulation`],
//!   [`batch`])
//!
//! Randomness is always injected through [`rng::RandomSource`]; there is no
//! global generator and no global match state.
//!
//! ## Usage
//!
//! ```
//! use crease_core::{start_match, MatchSettings, BattingStyle, BowlingStyle};
//! use crease_core::rng::seeded;
//!
//! let mut state = start_match(MatchSettings::new("Lions", "Tigers", 5))?;
//! let mut rng = seeded(42);
//!
//! while !state.is_complete() {
//!     state.play_ball(BattingStyle::Balanced, BowlingStyle::Fast, &mut rng)?;
//! }
//!
//! let result = state.result().expect("match is complete");
//! println!("{result}");
//! # Ok::<(), crease_core::MatchError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod batch;
pub mod error;
pub mod outcome;
pub mod resolver;
pub mod result;
pub mod rng;
pub mod scoreboard;
pub mod settings;
pub mod simulation;
pub mod state;
pub mod style;

// Re-exports for convenience
pub use error::{MatchError, ResolverError, Result};
pub use outcome::{BallOutcome, OutcomeCategory};
pub use resolver::{resolve, Distribution, OutcomeResolver, ProbabilityTable};
pub use result::{Margin, MatchResult, MatchSummary, TeamSide};
pub use rng::RandomSource;
pub use scoreboard::{
    balls_remaining, calculate_required_run_rate, calculate_run_rate, format_overs, Scoreboard,
};
pub use settings::MatchSettings;
pub use simulation::{Simulation, StylePicker};
pub use state::{play_ball, start_match, Innings, MatchPhase, MatchState, TeamTally, Transition};
pub use style::{BattingStyle, BowlingStyle};

#[cfg(test)]
mod tests;
