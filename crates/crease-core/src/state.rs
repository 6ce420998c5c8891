//! Innings and match state machine.
//!
//! A match moves through `InningsOne → InningsTwo → Complete`. Each call to
//! [`MatchState::play_ball`] resolves one delivery, credits it to the batting
//! side and checks for the end of the innings or the match.
//!
//! # Transition rules
//!
//! - An innings is over once the batting side has lost
//!   `max_wickets_per_innings` wickets or faced `max_overs * 6` balls.
//! - When the first innings ends its total becomes the target and team two
//!   starts batting.
//! - The match completes when the second innings is over or team two's runs
//!   strictly exceed the target. Level scores are a tie, not a win.
//!
//! Exactly one ball may be in flight per match; `&mut` access enforces it.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{MatchError, Result};
use crate::outcome::BallOutcome;
use crate::resolver::OutcomeResolver;
use crate::result::{MatchResult, MatchSummary};
use crate::rng::RandomSource;
use crate::scoreboard;
use crate::settings::{MatchSettings, BALLS_PER_OVER};
use crate::style::{BattingStyle, BowlingStyle};

/// Running score of one side.
///
/// Only changes by applying a [`BallOutcome`] through the owning
/// [`MatchState`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamTally {
    name: String,
    runs: u32,
    wickets_lost: u32,
    balls_faced: u32,
    current_batsman: u32,
}

impl TeamTally {
    /// A side that has not batted yet.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            runs: 0,
            wickets_lost: 0,
            balls_faced: 0,
            current_batsman: 1,
        }
    }

    /// Team name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Runs scored.
    #[must_use]
    pub fn runs(&self) -> u32 {
        self.runs
    }

    /// Wickets lost.
    #[must_use]
    pub fn wickets_lost(&self) -> u32 {
        self.wickets_lost
    }

    /// Legal balls faced.
    #[must_use]
    pub fn balls_faced(&self) -> u32 {
        self.balls_faced
    }

    /// Completed overs.
    #[must_use]
    pub fn overs_completed(&self) -> u32 {
        self.balls_faced / BALLS_PER_OVER
    }

    /// Batting position of the batsman on strike, starting at 1.
    #[must_use]
    pub fn current_batsman(&self) -> u32 {
        self.current_batsman
    }

    /// Overs faced as `"overs.balls"`.
    #[must_use]
    pub fn overs(&self) -> String {
        scoreboard::format_overs(self.balls_faced)
    }

    /// Runs per over, two decimals.
    #[must_use]
    pub fn run_rate(&self) -> String {
        scoreboard::calculate_run_rate(self.runs, self.balls_faced)
    }

    /// Score as `"runs/wickets"`.
    #[must_use]
    pub fn score_line(&self) -> String {
        format!("{}/{}", self.runs, self.wickets_lost)
    }

    fn apply(&mut self, outcome: &BallOutcome) {
        self.runs += outcome.runs_scored();
        self.balls_faced += 1;
        if outcome.is_wicket() {
            self.wickets_lost += 1;
            self.current_batsman += 1;
        }
    }
}

/// Which innings is in progress.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Innings {
    /// Team one bats.
    First,
    /// Team two bats, chasing the target.
    Second,
}

impl Innings {
    /// 1 or 2.
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Self::First => 1,
            Self::Second => 2,
        }
    }
}

/// Coarse lifecycle of a match.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchPhase {
    /// Team one is batting.
    InningsOne,
    /// Team two is chasing.
    InningsTwo,
    /// No more balls are accepted.
    Complete,
}

/// What a ball changed beyond the score.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Transition {
    /// The innings goes on.
    Continue,
    /// The first innings ended; team two needs to pass `target`.
    InningsEnded {
        /// Team one's final total.
        target: u32,
    },
    /// The match is over.
    MatchComplete,
}

/// Complete state of one match.
///
/// Created by [`MatchState::start`] (or [`start_match`]) and advanced one ball
/// at a time. Once [`MatchState::is_complete`] is true every further ball is
/// rejected.
///
/// # Example
///
/// ```
/// use crease_core::settings::MatchSettings;
/// use crease_core::state::{MatchPhase, MatchState};
/// use crease_core::rng::seeded;
/// use crease_core::style::{BattingStyle, BowlingStyle};
///
/// let mut state = MatchState::start(MatchSettings::new("A", "B", 1)).unwrap();
/// let mut rng = seeded(9);
/// state.play_ball(BattingStyle::Balanced, BowlingStyle::Medium, &mut rng).unwrap();
/// assert_eq!(state.team1().balls_faced(), 1);
/// assert_eq!(state.phase(), MatchPhase::InningsOne);
/// ```
///
/// Deserializing a state validates its settings the same way
/// [`MatchState::start`] does.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SavedState")]
pub struct MatchState {
    settings: MatchSettings,
    team1: TeamTally,
    team2: TeamTally,
    current_innings: Innings,
    is_complete: bool,
    last_outcome: Option<BallOutcome>,
    first_innings_target: Option<u32>,
}

/// Serialized form of [`MatchState`], checked before use.
#[derive(Deserialize)]
struct SavedState {
    settings: MatchSettings,
    team1: TeamTally,
    team2: TeamTally,
    current_innings: Innings,
    is_complete: bool,
    last_outcome: Option<BallOutcome>,
    first_innings_target: Option<u32>,
}

impl TryFrom<SavedState> for MatchState {
    type Error = MatchError;

    fn try_from(saved: SavedState) -> Result<Self> {
        saved.settings.validate()?;
        Ok(Self {
            settings: saved.settings,
            team1: saved.team1,
            team2: saved.team2,
            current_innings: saved.current_innings,
            is_complete: saved.is_complete,
            last_outcome: saved.last_outcome,
            first_innings_target: saved.first_innings_target,
        })
    }
}

impl MatchState {
    /// Starts a match with both tallies at zero and no target.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::InvalidSettings`] if `max_overs` or
    /// `max_wickets_per_innings` is zero.
    pub fn start(settings: MatchSettings) -> Result<Self> {
        settings.validate()?;
        info!(
            team1 = %settings.team1_name,
            team2 = %settings.team2_name,
            max_overs = settings.max_overs,
            max_wickets = settings.max_wickets_per_innings,
            "match started"
        );
        Ok(Self::fresh(settings))
    }

    /// Zeroed state for settings that already passed validation.
    pub(crate) fn fresh(settings: MatchSettings) -> Self {
        Self {
            team1: TeamTally::new(settings.team1_name.clone()),
            team2: TeamTally::new(settings.team2_name.clone()),
            settings,
            current_innings: Innings::First,
            is_complete: false,
            last_outcome: None,
            first_innings_target: None,
        }
    }

    /// Resolves one ball with the standard probability table and applies it.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::MatchAlreadyComplete`] if the match is over; no
    /// random values are drawn in that case.
    pub fn play_ball<R: RandomSource + ?Sized>(
        &mut self,
        batting: BattingStyle,
        bowling: BowlingStyle,
        rng: &mut R,
    ) -> Result<Transition> {
        self.play_ball_with(OutcomeResolver::standard(), batting, bowling, rng)
    }

    /// Resolves one ball with `resolver` and applies it.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::MatchAlreadyComplete`] if the match is over.
    pub fn play_ball_with<R: RandomSource + ?Sized>(
        &mut self,
        resolver: &OutcomeResolver,
        batting: BattingStyle,
        bowling: BowlingStyle,
        rng: &mut R,
    ) -> Result<Transition> {
        self.ensure_in_progress()?;
        let outcome = resolver.resolve(batting, bowling, rng);
        self.apply_outcome(outcome)
    }

    /// Applies an already resolved outcome to the batting side.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::MatchAlreadyComplete`] if the match is over; the
    /// state is left unchanged.
    pub fn apply_outcome(&mut self, outcome: BallOutcome) -> Result<Transition> {
        self.ensure_in_progress()?;

        let innings = self.current_innings;
        let max_wickets = self.settings.max_wickets_per_innings;
        let max_balls = self.settings.max_balls();
        let batting = self.batting_team_mut();
        batting.apply(&outcome);

        let runs = batting.runs;
        let innings_over = batting.wickets_lost >= max_wickets || batting.balls_faced >= max_balls;

        debug!(
            innings = innings.number(),
            runs_scored = outcome.runs_scored(),
            wicket = outcome.is_wicket(),
            total = runs,
            wickets = batting.wickets_lost,
            balls = batting.balls_faced,
            "ball played"
        );

        let transition = match innings {
            Innings::First if innings_over => {
                self.first_innings_target = Some(runs);
                self.current_innings = Innings::Second;
                info!(total = runs, "first innings complete");
                Transition::InningsEnded { target: runs }
            }
            Innings::First => Transition::Continue,
            Innings::Second => {
                let target_achieved = self.first_innings_target.is_some_and(|t| runs > t);
                if innings_over || target_achieved {
                    self.is_complete = true;
                    info!(
                        team1 = self.team1.runs,
                        team2 = runs,
                        chased = target_achieved,
                        "match complete"
                    );
                    Transition::MatchComplete
                } else {
                    Transition::Continue
                }
            }
        };

        self.last_outcome = Some(outcome);
        Ok(transition)
    }

    fn ensure_in_progress(&self) -> Result<()> {
        if self.is_complete {
            return Err(MatchError::MatchAlreadyComplete);
        }
        Ok(())
    }

    fn batting_team_mut(&mut self) -> &mut TeamTally {
        match self.current_innings {
            Innings::First => &mut self.team1,
            Innings::Second => &mut self.team2,
        }
    }

    /// Settings the match was started with.
    #[must_use]
    pub fn settings(&self) -> &MatchSettings {
        &self.settings
    }

    /// Team one's tally.
    #[must_use]
    pub fn team1(&self) -> &TeamTally {
        &self.team1
    }

    /// Team two's tally.
    #[must_use]
    pub fn team2(&self) -> &TeamTally {
        &self.team2
    }

    /// The innings in progress, or the second innings once complete.
    #[must_use]
    pub fn current_innings(&self) -> Innings {
        self.current_innings
    }

    /// 1 or 2.
    #[must_use]
    pub fn innings_number(&self) -> u8 {
        self.current_innings.number()
    }

    /// Lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> MatchPhase {
        match (self.is_complete, self.current_innings) {
            (true, _) => MatchPhase::Complete,
            (false, Innings::First) => MatchPhase::InningsOne,
            (false, Innings::Second) => MatchPhase::InningsTwo,
        }
    }

    /// Whether the match is over.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.is_complete
    }

    /// The most recent ball, if any has been played.
    #[must_use]
    pub fn last_outcome(&self) -> Option<&BallOutcome> {
        self.last_outcome.as_ref()
    }

    /// Team one's final total, set when the first innings ends.
    #[must_use]
    pub fn target(&self) -> Option<u32> {
        self.first_innings_target
    }

    /// The side currently batting.
    #[must_use]
    pub fn batting_team(&self) -> &TeamTally {
        match self.current_innings {
            Innings::First => &self.team1,
            Innings::Second => &self.team2,
        }
    }

    /// The side currently bowling.
    #[must_use]
    pub fn bowling_team(&self) -> &TeamTally {
        match self.current_innings {
            Innings::First => &self.team2,
            Innings::Second => &self.team1,
        }
    }

    /// Balls the batting side has left this innings.
    #[must_use]
    pub fn balls_remaining(&self) -> u32 {
        scoreboard::balls_remaining(self.settings.max_overs, self.batting_team().balls_faced)
    }

    /// Overs faced by the batting side as `"overs.balls"`.
    #[must_use]
    pub fn overs_string(&self) -> String {
        self.batting_team().overs()
    }

    /// Current run rate of the batting side.
    #[must_use]
    pub fn current_run_rate(&self) -> String {
        self.batting_team().run_rate()
    }

    /// Required run rate for the chase, `"0.00"` outside the second innings.
    #[must_use]
    pub fn required_run_rate(&self) -> String {
        match self.current_innings {
            Innings::First => scoreboard::calculate_required_run_rate(None, 0, 0),
            Innings::Second => scoreboard::calculate_required_run_rate(
                self.first_innings_target,
                self.team2.runs,
                self.balls_remaining(),
            ),
        }
    }

    /// Runs team two still needs to win, during the second innings.
    #[must_use]
    pub fn runs_needed(&self) -> Option<u32> {
        match self.current_innings {
            Innings::First => None,
            Innings::Second => self
                .first_innings_target
                .map(|target| scoreboard::runs_needed(target, self.team2.runs)),
        }
    }

    /// Final result, once the match is complete.
    #[must_use]
    pub fn result(&self) -> Option<MatchResult> {
        self.is_complete
            .then(|| MatchResult::from_tallies(&self.settings, &self.team1, &self.team2))
    }

    /// Results-screen summary, once the match is complete.
    #[must_use]
    pub fn summary(&self) -> Option<MatchSummary> {
        self.result()
            .map(|result| MatchSummary::new(result, &self.team1, &self.team2))
    }
}

/// Starts a match. See [`MatchState::start`].
///
/// # Errors
///
/// Returns [`MatchError::InvalidSettings`] for zero overs or wickets.
pub fn start_match(settings: MatchSettings) -> Result<MatchState> {
    MatchState::start(settings)
}

/// Plays one ball on a copy of `state` and returns the updated copy.
///
/// `state` itself is never modified, so a failed call leaves the caller's
/// value exactly as it was.
///
/// # Errors
///
/// Returns [`MatchError::MatchAlreadyComplete`] if `state` is complete.
pub fn play_ball<R: RandomSource + ?Sized>(
    state: &MatchState,
    batting: BattingStyle,
    bowling: BowlingStyle,
    rng: &mut R,
) -> Result<MatchState> {
    let mut next = state.clone();
    next.play_ball(batting, bowling, rng)?;
    Ok(next)
}
