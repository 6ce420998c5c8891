//! Normalized outcome distribution and inverse-CDF sampling.

use serde::Serialize;

use crate::outcome::OutcomeCategory;

use super::Weights;

/// Probability of each [`OutcomeCategory`] for one style pairing.
///
/// Built from adjusted [`Weights`] by dividing every weight by the raw sum of
/// all seven, so the values sum to one. Nothing is clamped: a negative
/// adjusted weight stays negative after normalization and pulls the
/// cumulative walk back for every category after it.
///
/// # Example
///
/// ```
/// use crease_core::outcome::OutcomeCategory;
/// use crease_core::resolver::{Distribution, Weights};
///
/// let weights = Weights { dot: 3.0, single: 1.0, ..Weights::ZERO };
/// let dist = Distribution::from_weights(&weights).unwrap();
/// assert_eq!(dist.probability(OutcomeCategory::Dot), 0.75);
/// assert_eq!(dist.sample(0.8), OutcomeCategory::Single);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Distribution {
    probabilities: [f64; OutcomeCategory::COUNT],
}

impl Distribution {
    /// Normalizes `weights` into a distribution.
    ///
    /// Returns `None` when any weight is non-finite or the raw total is not
    /// positive.
    #[must_use]
    pub fn from_weights(weights: &Weights) -> Option<Self> {
        let total = Self::normalizing_total(weights);
        if !(total.is_finite() && total > 0.0) {
            return None;
        }
        let probabilities = weights.to_array().map(|w| w / total);
        Some(Self { probabilities })
    }

    /// Total the weights are divided by: the plain sum of all seven.
    ///
    /// Returns NaN if any weight is non-finite.
    #[must_use]
    pub fn normalizing_total(weights: &Weights) -> f64 {
        let raw = weights.to_array();
        if raw.iter().any(|w| !w.is_finite()) {
            return f64::NAN;
        }
        raw.iter().sum()
    }

    /// Probability of one category.
    #[must_use]
    pub fn probability(&self, category: OutcomeCategory) -> f64 {
        self.probabilities[category.index()]
    }

    /// All probabilities in [`OutcomeCategory::ALL`] order.
    #[must_use]
    pub fn probabilities(&self) -> [f64; OutcomeCategory::COUNT] {
        self.probabilities
    }

    /// Running totals in sampling order. The last entry is 1 up to rounding;
    /// earlier entries may exceed it when a later weight is negative.
    #[must_use]
    pub fn cumulative(&self) -> [f64; OutcomeCategory::COUNT] {
        let mut acc = 0.0;
        self.probabilities.map(|p| {
            acc += p;
            acc
        })
    }

    /// Picks the category for a uniform draw `u` in `[0, 1)`.
    ///
    /// Walks the categories in order and returns the first whose cumulative
    /// probability exceeds `u`. If rounding leaves `u` past every cumulative
    /// sum, the ball is a wicket. Categories after a cumulative peak above 1
    /// are unreachable.
    #[must_use]
    pub fn sample(&self, u: f64) -> OutcomeCategory {
        let mut cumulative = 0.0;
        for category in OutcomeCategory::ALL {
            cumulative += self.probabilities[category.index()];
            if cumulative > u {
                return category;
            }
        }
        OutcomeCategory::Wicket
    }

    /// Mean runs per ball.
    #[must_use]
    pub fn expected_runs(&self) -> f64 {
        OutcomeCategory::ALL
            .iter()
            .map(|c| self.probability(*c) * f64::from(c.runs()))
            .sum()
    }

    /// Chance of losing a wicket on this ball.
    #[must_use]
    pub fn wicket_probability(&self) -> f64 {
        self.probability(OutcomeCategory::Wicket)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uniform() -> Distribution {
        Distribution::from_weights(&Weights::from_array([1.0; OutcomeCategory::COUNT])).unwrap()
    }

    #[test]
    fn normalizes_to_one() {
        let dist = Distribution::from_weights(&Weights::from_array([
            2.0, 1.0, 1.0, 0.0, 0.0, 0.0, 0.0,
        ]))
        .unwrap();
        assert_eq!(dist.probability(OutcomeCategory::Dot), 0.5);
        assert_eq!(dist.probability(OutcomeCategory::Single), 0.25);
        let sum: f64 = dist.probabilities().iter().sum();
        assert!((sum - 1.0).abs() < 1e-12);
    }

    #[test]
    fn negative_weights_divide_by_raw_sum() {
        let weights = Weights {
            dot: 1.0,
            six: -0.5,
            ..Weights::ZERO
        };
        assert_eq!(Distribution::normalizing_total(&weights), 0.5);
        let dist = Distribution::from_weights(&weights).unwrap();
        assert_eq!(dist.probability(OutcomeCategory::Dot), 2.0);
        assert_eq!(dist.probability(OutcomeCategory::Six), -1.0);
        let sum: f64 = dist.probabilities().iter().sum();
        assert!((sum - 1.0).abs() < 1e-12);
    }

    #[test]
    fn cumulative_peak_hides_later_categories() {
        let weights = Weights {
            dot: 0.5,
            single: 0.6,
            four: -0.2,
            wicket: 0.1,
            ..Weights::ZERO
        };
        let dist = Distribution::from_weights(&weights).unwrap();
        // Cumulative: .5, 1.1, 1.1, 1.1, .9, .9, 1.0
        assert_eq!(dist.sample(0.4), OutcomeCategory::Dot);
        assert_eq!(dist.sample(0.95), OutcomeCategory::Single);
        assert_eq!(dist.sample(0.999), OutcomeCategory::Single);
    }

    #[test]
    fn degenerate_weights_are_rejected() {
        assert!(Distribution::from_weights(&Weights::ZERO).is_none());

        let negative = Weights {
            dot: -1.0,
            ..Weights::ZERO
        };
        assert!(Distribution::from_weights(&negative).is_none());

        let infinite = Weights {
            four: f64::INFINITY,
            ..Weights::ZERO
        };
        assert!(Distribution::from_weights(&infinite).is_none());
        assert!(Distribution::normalizing_total(&infinite).is_nan());
    }

    #[test]
    fn sample_walks_in_order() {
        let dist = uniform();
        assert_eq!(dist.sample(0.0), OutcomeCategory::Dot);
        assert_eq!(dist.sample(0.2), OutcomeCategory::Single);
        assert_eq!(dist.sample(0.5), OutcomeCategory::Triple);
        assert_eq!(dist.sample(0.99), OutcomeCategory::Wicket);
    }

    #[test]
    fn zero_weight_category_is_skipped() {
        let weights = Weights {
            dot: 0.0,
            single: 1.0,
            ..Weights::ZERO
        };
        let dist = Distribution::from_weights(&weights).unwrap();
        assert_eq!(dist.sample(0.0), OutcomeCategory::Single);
    }

    #[test]
    fn overshoot_falls_back_to_wicket() {
        let weights = Weights {
            dot: 1.0,
            ..Weights::ZERO
        };
        let dist = Distribution::from_weights(&weights).unwrap();
        // Nothing beyond the cumulative total of 1.0
        assert_eq!(dist.sample(1.0), OutcomeCategory::Wicket);
    }

    #[test]
    fn cumulative_ends_at_one() {
        let cumulative = uniform().cumulative();
        assert!((cumulative[OutcomeCategory::COUNT - 1] - 1.0).abs() < 1e-12);
        assert!(cumulative.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn expected_runs_of_uniform() {
        // (0 + 1 + 2 + 3 + 4 + 6 + 0) / 7
        assert!((uniform().expected_runs() - 16.0 / 7.0).abs() < 1e-12);
        assert!((uniform().wicket_probability() - 1.0 / 7.0).abs() < 1e-12);
    }
}
