//! Probability table configuration.
//!
//! A [`ProbabilityTable`] holds one base [`Weights`] set per batting style and
//! one [`Adjustment`] per bowling style. The adjusted weights for a pairing
//! are `base(batting) + adjustment(bowling).for_batting(batting)`, added
//! without clamping.

use serde::{Deserialize, Serialize};

use crate::error::ResolverError;
use crate::outcome::OutcomeCategory;
use crate::style::{BattingStyle, BowlingStyle};

use super::Distribution;

/// One weight per outcome category.
///
/// Used both for base probabilities and for additive deltas.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Weights {
    /// Dot ball.
    pub dot: f64,
    /// One run.
    pub single: f64,
    /// Two runs.
    pub double: f64,
    /// Three runs.
    pub triple: f64,
    /// Four runs.
    pub four: f64,
    /// Six runs.
    pub six: f64,
    /// Dismissal.
    pub wicket: f64,
}

impl Weights {
    /// All-zero weights.
    pub const ZERO: Self = Self {
        dot: 0.0,
        single: 0.0,
        double: 0.0,
        triple: 0.0,
        four: 0.0,
        six: 0.0,
        wicket: 0.0,
    };

    /// Builds weights from an array in [`OutcomeCategory::ALL`] order.
    #[must_use]
    pub const fn from_array(values: [f64; OutcomeCategory::COUNT]) -> Self {
        Self {
            dot: values[0],
            single: values[1],
            double: values[2],
            triple: values[3],
            four: values[4],
            six: values[5],
            wicket: values[6],
        }
    }

    /// Returns the weights in [`OutcomeCategory::ALL`] order.
    #[must_use]
    pub const fn to_array(&self) -> [f64; OutcomeCategory::COUNT] {
        [
            self.dot,
            self.single,
            self.double,
            self.triple,
            self.four,
            self.six,
            self.wicket,
        ]
    }

    /// Weight for a single category.
    #[must_use]
    pub const fn get(&self, category: OutcomeCategory) -> f64 {
        match category {
            OutcomeCategory::Dot => self.dot,
            OutcomeCategory::Single => self.single,
            OutcomeCategory::Double => self.double,
            OutcomeCategory::Triple => self.triple,
            OutcomeCategory::Four => self.four,
            OutcomeCategory::Six => self.six,
            OutcomeCategory::Wicket => self.wicket,
        }
    }

    /// Sum of all seven weights.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.to_array().iter().sum()
    }

    /// Component-wise sum.
    #[must_use]
    pub fn plus(&self, delta: &Self) -> Self {
        let a = self.to_array();
        let b = delta.to_array();
        Self::from_array(std::array::from_fn(|i| a[i] + b[i]))
    }
}

/// Additive adjustment applied for one bowling style.
///
/// `deltas` apply to every batting style; the `versus_*` deltas are added on
/// top when the batting side picked that style.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Adjustment {
    /// Deltas applied regardless of the batting style.
    pub deltas: Weights,
    /// Extra deltas against defensive batting.
    pub versus_defensive: Weights,
    /// Extra deltas against balanced batting.
    pub versus_balanced: Weights,
    /// Extra deltas against aggressive batting.
    pub versus_aggressive: Weights,
}

impl Adjustment {
    /// An adjustment that changes nothing.
    pub const NONE: Self = Self {
        deltas: Weights::ZERO,
        versus_defensive: Weights::ZERO,
        versus_balanced: Weights::ZERO,
        versus_aggressive: Weights::ZERO,
    };

    /// Combined deltas for the given batting style.
    #[must_use]
    pub fn for_batting(&self, batting: BattingStyle) -> Weights {
        let extra = match batting {
            BattingStyle::Defensive => &self.versus_defensive,
            BattingStyle::Balanced => &self.versus_balanced,
            BattingStyle::Aggressive => &self.versus_aggressive,
        };
        self.deltas.plus(extra)
    }
}

/// Base probabilities per batting style plus adjustments per bowling style.
///
/// The [`Default`] table is the standard model:
///
/// | batting    | dot | single | double | triple | four | six | wicket |
/// |------------|-----|--------|--------|--------|------|-----|--------|
/// | defensive  | .50 | .30    | .15    | .03    | .01  | .00 | .01    |
/// | balanced   | .30 | .35    | .15    | .05    | .10  | .02 | .03    |
/// | aggressive | .20 | .15    | .10    | .05    | .20  | .15 | .15    |
///
/// Spin adds `.05` to singles and takes `.02` from fours and sixes, with a
/// further `.05` on wickets against aggressive batting. Fast adds `.05` to
/// wickets and `.02` to fours, with `.02` off wickets against defensive
/// batting. Medium leaves the base untouched.
///
/// # Example
///
/// ```
/// use crease_core::resolver::ProbabilityTable;
/// use crease_core::style::{BattingStyle, BowlingStyle};
///
/// let table = ProbabilityTable::default();
/// let adjusted = table.adjusted(BattingStyle::Aggressive, BowlingStyle::Spin);
/// assert!((adjusted.wicket - 0.20).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProbabilityTable {
    /// Base weights for defensive batting.
    pub defensive: Weights,
    /// Base weights for balanced batting.
    pub balanced: Weights,
    /// Base weights for aggressive batting.
    pub aggressive: Weights,
    /// Adjustment for spin bowling.
    pub spin: Adjustment,
    /// Adjustment for medium pace.
    pub medium: Adjustment,
    /// Adjustment for fast bowling.
    pub fast: Adjustment,
}

impl Default for ProbabilityTable {
    fn default() -> Self {
        Self {
            defensive: Weights::from_array([0.50, 0.30, 0.15, 0.03, 0.01, 0.00, 0.01]),
            balanced: Weights::from_array([0.30, 0.35, 0.15, 0.05, 0.10, 0.02, 0.03]),
            aggressive: Weights::from_array([0.20, 0.15, 0.10, 0.05, 0.20, 0.15, 0.15]),
            spin: Adjustment {
                deltas: Weights {
                    single: 0.05,
                    four: -0.02,
                    six: -0.02,
                    ..Weights::ZERO
                },
                versus_aggressive: Weights {
                    wicket: 0.05,
                    ..Weights::ZERO
                },
                ..Adjustment::NONE
            },
            medium: Adjustment::NONE,
            fast: Adjustment {
                deltas: Weights {
                    wicket: 0.05,
                    four: 0.02,
                    ..Weights::ZERO
                },
                versus_defensive: Weights {
                    wicket: -0.02,
                    ..Weights::ZERO
                },
                ..Adjustment::NONE
            },
        }
    }
}

impl ProbabilityTable {
    /// Base weights for a batting style.
    #[must_use]
    pub fn base(&self, batting: BattingStyle) -> &Weights {
        match batting {
            BattingStyle::Defensive => &self.defensive,
            BattingStyle::Balanced => &self.balanced,
            BattingStyle::Aggressive => &self.aggressive,
        }
    }

    /// Adjustment for a bowling style.
    #[must_use]
    pub fn adjustment(&self, bowling: BowlingStyle) -> &Adjustment {
        match bowling {
            BowlingStyle::Spin => &self.spin,
            BowlingStyle::Medium => &self.medium,
            BowlingStyle::Fast => &self.fast,
        }
    }

    /// Raw adjusted weights for a pairing. Individual weights may be negative.
    #[must_use]
    pub fn adjusted(&self, batting: BattingStyle, bowling: BowlingStyle) -> Weights {
        self.base(batting)
            .plus(&self.adjustment(bowling).for_batting(batting))
    }

    /// Normalized distribution for a pairing.
    ///
    /// # Errors
    ///
    /// Returns [`ResolverError::DegenerateDistribution`] when the adjusted
    /// weights do not normalize over a positive, finite total.
    pub fn distribution(
        &self,
        batting: BattingStyle,
        bowling: BowlingStyle,
    ) -> Result<Distribution, ResolverError> {
        let weights = self.adjusted(batting, bowling);
        Distribution::from_weights(&weights).ok_or(ResolverError::DegenerateDistribution {
            batting,
            bowling,
            total: Distribution::normalizing_total(&weights),
        })
    }

    /// Checks that every pairing normalizes.
    ///
    /// # Errors
    ///
    /// Returns the first [`ResolverError`] found, in style declaration order.
    pub fn validate(&self) -> Result<(), ResolverError> {
        for batting in BattingStyle::ALL {
            for bowling in BowlingStyle::ALL {
                self.distribution(batting, bowling)?;
            }
        }
        Ok(())
    }
}
