//! Test helper functions for setting up matches and scripting balls.
//!
//! Scripted draws target the balanced-vs-medium distribution, whose
//! cumulative bands are:
//!
//! | category | band         |
//! |----------|--------------|
//! | dot      | `[0, .30)`   |
//! | single   | `[.30, .65)` |
//! | double   | `[.65, .80)` |
//! | triple   | `[.80, .85)` |
//! | four     | `[.85, .95)` |
//! | six      | `[.95, .97)` |
//! | wicket   | `[.97, 1)`   |

use crate::outcome::{BallOutcome, OutcomeCategory};
use crate::rng::ScriptedSource;
use crate::settings::MatchSettings;
use crate::state::{MatchState, Transition};
use crate::style::{BattingStyle, BowlingStyle};

/// Styles the scripted draws are calibrated for.
pub const SCRIPT_STYLES: (BattingStyle, BowlingStyle) =
    (BattingStyle::Balanced, BowlingStyle::Medium);

/// "A" vs "B", one over, ten wickets.
pub fn one_over_settings() -> MatchSettings {
    MatchSettings::new("A", "B", 1)
}

/// One outcome per category, with the first commentary line.
pub fn outcomes(categories: &[OutcomeCategory]) -> Vec<BallOutcome> {
    categories.iter().map(|c| BallOutcome::of(*c)).collect()
}

/// A draw inside the band of `category` for [`SCRIPT_STYLES`].
pub fn draw_for(category: OutcomeCategory) -> f64 {
    match category {
        OutcomeCategory::Dot => 0.10,
        OutcomeCategory::Single => 0.50,
        OutcomeCategory::Double => 0.70,
        OutcomeCategory::Triple => 0.82,
        OutcomeCategory::Four => 0.90,
        OutcomeCategory::Six => 0.96,
        OutcomeCategory::Wicket => 0.99,
    }
}

/// A source that makes [`SCRIPT_STYLES`] balls land on `categories` in order.
///
/// Each ball consumes a category draw followed by a commentary draw.
pub fn scripted(categories: &[OutcomeCategory]) -> ScriptedSource {
    ScriptedSource::new(
        categories
            .iter()
            .flat_map(|c| [draw_for(*c), 0.0])
            .collect(),
    )
}

/// Plays `categories` through the resolver and returns each transition.
pub fn play_scripted(state: &mut MatchState, categories: &[OutcomeCategory]) -> Vec<Transition> {
    let (batting, bowling) = SCRIPT_STYLES;
    let mut rng = scripted(categories);
    categories
        .iter()
        .map(|_| state.play_ball(batting, bowling, &mut rng).unwrap())
        .collect()
}

/// Total runs for a list of categories.
pub fn runs_of(categories: &[OutcomeCategory]) -> u32 {
    categories.iter().map(|c| c.runs()).sum()
}
