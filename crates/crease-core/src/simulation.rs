//! Seeded match driver.
//!
//! [`Simulation`] owns a [`MatchState`], an [`OutcomeResolver`] and a
//! deterministic [`ChaCha8Rng`]. It is the layer that drives the match loop
//! for a UI or a headless runner.
//!
//! # Determinism
//!
//! Given the same settings, seed, resolver and sequence of style choices, two
//! simulations produce identical states ball for ball. [`Simulation::reset`]
//! re-seeds the generator so a reset match replays exactly.
//!
//! # Example
//!
//! ```
//! use crease_core::settings::MatchSettings;
//! use crease_core::simulation::{Simulation, StylePicker};
//!
//! let mut sim = Simulation::new(MatchSettings::new("A", "B", 2), 42).unwrap();
//! let result = sim.autoplay(StylePicker::Random).unwrap();
//! assert!(sim.state().is_complete());
//! println!("{result}");
//! ```

use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{MatchError, Result};
use crate::resolver::OutcomeResolver;
use crate::result::MatchResult;
use crate::rng::{seeded, RandomSource};
use crate::settings::MatchSettings;
use crate::state::{MatchState, Transition};
use crate::style::{BattingStyle, BowlingStyle};

/// How both sides choose their styles when the match plays itself.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum StylePicker {
    /// The same pairing every ball.
    Fixed {
        /// Batting style for every ball.
        batting: BattingStyle,
        /// Bowling style for every ball.
        bowling: BowlingStyle,
    },
    /// Both sides pick uniformly at random, drawn from the match generator.
    Random,
}

impl StylePicker {
    /// Picks the styles for the next ball.
    pub fn pick<R: RandomSource + ?Sized>(&self, rng: &mut R) -> (BattingStyle, BowlingStyle) {
        match *self {
            Self::Fixed { batting, bowling } => (batting, bowling),
            Self::Random => {
                let batting = BattingStyle::ALL[rng.next_index(BattingStyle::ALL.len())];
                let bowling = BowlingStyle::ALL[rng.next_index(BowlingStyle::ALL.len())];
                (batting, bowling)
            }
        }
    }
}

/// A match plus everything needed to play it reproducibly.
#[derive(Debug, Clone)]
pub struct Simulation {
    state: MatchState,
    resolver: OutcomeResolver,
    rng: ChaCha8Rng,
    seed: u64,
}

impl Simulation {
    /// Starts a match on the standard probability table.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::InvalidSettings`] for zero overs or wickets.
    pub fn new(settings: MatchSettings, seed: u64) -> Result<Self> {
        Self::with_resolver(settings, OutcomeResolver::default(), seed)
    }

    /// Starts a match on a custom resolver.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::InvalidSettings`] for zero overs or wickets.
    pub fn with_resolver(
        settings: MatchSettings,
        resolver: OutcomeResolver,
        seed: u64,
    ) -> Result<Self> {
        Ok(Self {
            state: MatchState::start(settings)?,
            resolver,
            rng: seeded(seed),
            seed,
        })
    }

    /// Plays one ball with the given styles.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::MatchAlreadyComplete`] once the match is over.
    pub fn play(&mut self, batting: BattingStyle, bowling: BowlingStyle) -> Result<Transition> {
        self.state
            .play_ball_with(&self.resolver, batting, bowling, &mut self.rng)
    }

    /// Plays until the match is complete and returns the result.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::MatchAlreadyComplete`] if called on a finished
    /// match.
    pub fn autoplay(&mut self, picker: StylePicker) -> Result<MatchResult> {
        if self.state.is_complete() {
            return Err(MatchError::MatchAlreadyComplete);
        }
        while !self.state.is_complete() {
            let (batting, bowling) = picker.pick(&mut self.rng);
            self.play(batting, bowling)?;
        }
        debug!(seed = self.seed, "autoplay finished");
        Ok(MatchResult::from_tallies(
            self.state.settings(),
            self.state.team1(),
            self.state.team2(),
        ))
    }

    /// Restarts the match with the current settings and seed.
    ///
    /// Team names and limits are kept, so the restarted match replays the
    /// one before it exactly.
    pub fn reset(&mut self) {
        self.state = MatchState::fresh(self.state.settings().clone());
        self.rng = seeded(self.seed);
    }

    /// Current match state.
    #[must_use]
    pub fn state(&self) -> &MatchState {
        &self.state
    }

    /// Consumes the driver, keeping the state.
    #[must_use]
    pub fn into_state(self) -> MatchState {
        self.state
    }

    /// Resolver in use.
    #[must_use]
    pub fn resolver(&self) -> &OutcomeResolver {
        &self.resolver
    }

    /// Seed the generator was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::ScriptedSource;
    use crate::tests::one_over_settings;

    #[test]
    fn new_simulation_starts_in_first_innings() {
        let sim = Simulation::new(one_over_settings(), 7).unwrap();
        assert_eq!(sim.seed(), 7);
        assert_eq!(sim.state().innings_number(), 1);
        assert!(!sim.state().is_complete());
    }

    #[test]
    fn invalid_settings_are_rejected() {
        let err = Simulation::new(MatchSettings::new("A", "B", 0), 7).unwrap_err();
        assert!(matches!(err, MatchError::InvalidSettings(_)));
    }

    #[test]
    fn play_advances_the_batting_side() {
        let mut sim = Simulation::new(one_over_settings(), 1).unwrap();
        sim.play(BattingStyle::Balanced, BowlingStyle::Medium).unwrap();
        sim.play(BattingStyle::Balanced, BowlingStyle::Medium).unwrap();
        assert_eq!(sim.state().team1().balls_faced(), 2);
        assert!(sim.state().last_outcome().is_some());
    }

    #[test]
    fn autoplay_finishes_the_match() {
        let mut sim = Simulation::new(MatchSettings::new("A", "B", 3), 99).unwrap();
        let result = sim.autoplay(StylePicker::Random).unwrap();
        assert!(sim.state().is_complete());
        assert_eq!(sim.state().result(), Some(result));
        assert!(sim.state().team1().balls_faced() <= 18);
        assert!(sim.state().team2().balls_faced() <= 18);
    }

    #[test]
    fn autoplay_on_finished_match_fails() {
        let mut sim = Simulation::new(one_over_settings(), 3).unwrap();
        sim.autoplay(StylePicker::Random).unwrap();
        let err = sim.autoplay(StylePicker::Random).unwrap_err();
        assert_eq!(err, MatchError::MatchAlreadyComplete);
        let err = sim
            .play(BattingStyle::Defensive, BowlingStyle::Spin)
            .unwrap_err();
        assert_eq!(err, MatchError::MatchAlreadyComplete);
    }

    #[test]
    fn reset_replays_the_same_match() {
        let mut sim = Simulation::new(MatchSettings::new("A", "B", 2), 2024).unwrap();
        sim.autoplay(StylePicker::Random).unwrap();
        let first = sim.state().clone();

        sim.reset();
        assert_eq!(sim.state().team1().balls_faced(), 0);
        assert!(sim.state().last_outcome().is_none());

        sim.autoplay(StylePicker::Random).unwrap();
        assert_eq!(*sim.state(), first);
    }

    #[test]
    fn reset_keeps_current_settings() {
        let settings = MatchSettings::new("Hawks", "Owls", 2).with_max_wickets(3);
        let mut sim = Simulation::new(settings.clone(), 11).unwrap();
        sim.play(BattingStyle::Aggressive, BowlingStyle::Fast).unwrap();

        sim.reset();
        assert_eq!(*sim.state().settings(), settings);
        assert_ne!(*sim.state().settings(), MatchSettings::default());
        assert_eq!(sim.state().team1().name(), "Hawks");
        assert_eq!(sim.seed(), 11);
    }

    #[test]
    fn fixed_picker_ignores_rng() {
        let picker = StylePicker::Fixed {
            batting: BattingStyle::Aggressive,
            bowling: BowlingStyle::Spin,
        };
        let mut rng = ScriptedSource::new(vec![0.9]);
        assert_eq!(
            picker.pick(&mut rng),
            (BattingStyle::Aggressive, BowlingStyle::Spin)
        );
        assert_eq!(rng.draws(), 0);
    }

    #[test]
    fn random_picker_maps_draws_to_styles() {
        let mut rng = ScriptedSource::new(vec![0.0, 0.99]);
        assert_eq!(
            StylePicker::Random.pick(&mut rng),
            (BattingStyle::Defensive, BowlingStyle::Fast)
        );
    }
}
