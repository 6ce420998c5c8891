//! Ball outcomes and their commentary pools.
//!
//! Every delivery resolves to exactly one [`OutcomeCategory`]. The category
//! fixes the runs scored and whether a wicket fell; the commentary line is
//! purely cosmetic and drawn from a per-category pool.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Discrete result of a single delivery.
///
/// The declaration order is the order in which the resolver walks the
/// cumulative distribution, see [`OutcomeCategory::ALL`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeCategory {
    /// No run scored.
    Dot,
    /// One run.
    Single,
    /// Two runs.
    Double,
    /// Three runs.
    Triple,
    /// Boundary along the ground.
    Four,
    /// Boundary over the rope.
    Six,
    /// Batsman dismissed, no runs.
    Wicket,
}

impl OutcomeCategory {
    /// Number of categories.
    pub const COUNT: usize = 7;

    /// All categories in sampling order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Dot,
        Self::Single,
        Self::Double,
        Self::Triple,
        Self::Four,
        Self::Six,
        Self::Wicket,
    ];

    /// Position of this category in [`OutcomeCategory::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Runs credited to the batting side.
    #[must_use]
    pub const fn runs(self) -> u32 {
        match self {
            Self::Dot | Self::Wicket => 0,
            Self::Single => 1,
            Self::Double => 2,
            Self::Triple => 3,
            Self::Four => 4,
            Self::Six => 6,
        }
    }

    /// Whether this category dismisses the batsman.
    #[must_use]
    pub const fn is_wicket(self) -> bool {
        matches!(self, Self::Wicket)
    }

    /// Returns the lowercase name of this category.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dot => "dot",
            Self::Single => "single",
            Self::Double => "double",
            Self::Triple => "triple",
            Self::Four => "four",
            Self::Six => "six",
            Self::Wicket => "wicket",
        }
    }

    /// Commentary lines available for this category.
    #[must_use]
    pub const fn commentary(self) -> &'static [&'static str] {
        match self {
            Self::Dot => DOT_COMMENTARY,
            Self::Single => SINGLE_COMMENTARY,
            Self::Double => DOUBLE_COMMENTARY,
            Self::Triple => TRIPLE_COMMENTARY,
            Self::Four => FOUR_COMMENTARY,
            Self::Six => SIX_COMMENTARY,
            Self::Wicket => WICKET_COMMENTARY,
        }
    }
}

impl fmt::Display for OutcomeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

const DOT_COMMENTARY: &[&str] = &[
    "Dot ball, nothing doing there.",
    "Pushed straight back to the bowler. No run.",
    "Beaten outside off! No run.",
    "Solid forward defence, the batsman stays put.",
    "Tight line, the batsman can only block it.",
];

const SINGLE_COMMENTARY: &[&str] = &[
    "Worked off the pads for a single.",
    "Dabbed into the off side, they scamper through for one.",
    "Nudged into the gap, easy single.",
    "Soft hands and a quick call. One run.",
    "Pushed to long-on for a single.",
];

const DOUBLE_COMMENTARY: &[&str] = &[
    "Driven into the deep, they come back for two.",
    "Good running! Two taken.",
    "Clipped wide of midwicket for a couple.",
    "Misfield in the deep allows the second run.",
    "Placed into the gap, two runs.",
];

const TRIPLE_COMMENTARY: &[&str] = &[
    "Chased down just inside the rope. Three runs.",
    "Hard running turns it into three!",
    "Big outfield, they get three for that drive.",
    "Timed sweetly but cut off. Three taken.",
    "Excellent running between the wickets, three more.",
];

const FOUR_COMMENTARY: &[&str] = &[
    "FOUR! Crunched through the covers.",
    "Pulled away to the boundary for FOUR.",
    "Edged and it flies past slip. FOUR runs.",
    "Glorious straight drive, FOUR!",
    "Cut hard, the fielder has no chance. FOUR.",
];

const SIX_COMMENTARY: &[&str] = &[
    "SIX! Launched over long-on.",
    "That's gone all the way! SIX runs.",
    "Massive hit into the stands for SIX.",
    "Stepped out and cleared the rope. SIX!",
    "Picked up over fine leg, SIX!",
];

const WICKET_COMMENTARY: &[&str] = &[
    "OUT! Clean bowled, the stumps are rattled.",
    "Caught in the deep! That's a WICKET.",
    "Trapped in front, the finger goes up. OUT LBW!",
    "Edged and taken behind. WICKET!",
    "Run out! A terrible mix-up and the batsman has to go.",
];

/// The result of one delivery.
///
/// `BallOutcome` is produced fresh by the resolver for every ball and is
/// never mutated afterwards.
///
/// # Example
///
/// ```
/// use crease_core::outcome::{BallOutcome, OutcomeCategory};
///
/// let outcome = BallOutcome::new(OutcomeCategory::Six, "SIX!");
/// assert_eq!(outcome.runs_scored(), 6);
/// assert!(!outcome.is_wicket());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BallOutcome {
    category: OutcomeCategory,
    runs_scored: u32,
    is_wicket: bool,
    description: String,
}

impl BallOutcome {
    /// Creates an outcome for `category` with the given commentary line.
    ///
    /// Runs and the wicket flag are always taken from the category.
    #[must_use]
    pub fn new(category: OutcomeCategory, description: impl Into<String>) -> Self {
        Self {
            category,
            runs_scored: category.runs(),
            is_wicket: category.is_wicket(),
            description: description.into(),
        }
    }

    /// Creates an outcome using the first commentary line of the category.
    #[must_use]
    pub fn of(category: OutcomeCategory) -> Self {
        Self::new(category, category.commentary()[0])
    }

    /// The sampled category.
    #[must_use]
    pub fn category(&self) -> OutcomeCategory {
        self.category
    }

    /// Runs credited to the batting side.
    #[must_use]
    pub fn runs_scored(&self) -> u32 {
        self.runs_scored
    }

    /// Whether a wicket fell on this ball.
    #[must_use]
    pub fn is_wicket(&self) -> bool {
        self.is_wicket
    }

    /// Commentary line for this ball.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }
}

impl fmt::Display for BallOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description)
    }
}
