//! Outcome resolution: from a pair of style choices to a single ball outcome.
//!
//! Resolution is a pure function of the style pairing, the probability table
//! and two draws from the injected [`RandomSource`]:
//!
//! 1. Look up the normalized [`Distribution`] for `(batting, bowling)`
//! 2. Draw `u` and walk the cumulative distribution in
//!    [`OutcomeCategory::ALL`] order
//! 3. Draw again to pick a commentary line from the category's pool
//!
//! The resolver never touches match state.
//!
//! [`OutcomeCategory::ALL`]: crate::outcome::OutcomeCategory::ALL

mod distribution;
mod table;

pub use distribution::Distribution;
pub use table::{Adjustment, ProbabilityTable, Weights};

use std::sync::OnceLock;

use tracing::trace;

use crate::error::ResolverError;
use crate::outcome::BallOutcome;
use crate::rng::RandomSource;
use crate::style::{BattingStyle, BowlingStyle};

const PAIRINGS: usize = BattingStyle::ALL.len() * BowlingStyle::ALL.len();

/// Resolves deliveries against a validated [`ProbabilityTable`].
///
/// Distributions for all nine pairings are normalized once at construction,
/// so [`OutcomeResolver::resolve`] cannot fail.
///
/// # Example
///
/// ```
/// use crease_core::resolver::OutcomeResolver;
/// use crease_core::rng::ScriptedSource;
/// use crease_core::style::{BattingStyle, BowlingStyle};
///
/// let resolver = OutcomeResolver::standard();
/// let mut rng = ScriptedSource::new(vec![0.0, 0.0]);
/// let outcome = resolver.resolve(BattingStyle::Balanced, BowlingStyle::Medium, &mut rng);
/// assert_eq!(outcome.runs_scored(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct OutcomeResolver {
    table: ProbabilityTable,
    distributions: [Distribution; PAIRINGS],
}

impl OutcomeResolver {
    /// Creates a resolver for `table`.
    ///
    /// # Errors
    ///
    /// Returns [`ResolverError::DegenerateDistribution`] if any pairing in the
    /// table cannot be normalized.
    pub fn new(table: ProbabilityTable) -> Result<Self, ResolverError> {
        let mut distributions = Vec::with_capacity(PAIRINGS);
        for batting in BattingStyle::ALL {
            for bowling in BowlingStyle::ALL {
                distributions.push(table.distribution(batting, bowling)?);
            }
        }
        let distributions = distributions
            .try_into()
            .unwrap_or_else(|_| unreachable!("one distribution per pairing"));
        Ok(Self {
            table,
            distributions,
        })
    }

    /// Shared resolver over the default table.
    ///
    /// # Panics
    ///
    /// Panics if the built-in table fails validation, which the test suite
    /// rules out.
    #[must_use]
    pub fn standard() -> &'static Self {
        static STANDARD: OnceLock<OutcomeResolver> = OnceLock::new();
        STANDARD.get_or_init(|| {
            Self::new(ProbabilityTable::default()).expect("built-in probability table is valid")
        })
    }

    /// The table this resolver was built from.
    #[must_use]
    pub fn table(&self) -> &ProbabilityTable {
        &self.table
    }

    /// Normalized distribution for a pairing.
    #[must_use]
    pub fn distribution(&self, batting: BattingStyle, bowling: BowlingStyle) -> &Distribution {
        &self.distributions[Self::slot(batting, bowling)]
    }

    /// Resolves one delivery.
    ///
    /// Consumes exactly two draws from `rng`: one for the category, one for
    /// the commentary line.
    pub fn resolve<R: RandomSource + ?Sized>(
        &self,
        batting: BattingStyle,
        bowling: BowlingStyle,
        rng: &mut R,
    ) -> BallOutcome {
        let u = rng.next_unit();
        let category = self.distribution(batting, bowling).sample(u);
        let pool = category.commentary();
        let line = pool[rng.next_index(pool.len())];

        trace!(%batting, %bowling, u, %category, "resolved delivery");
        BallOutcome::new(category, line)
    }

    fn slot(batting: BattingStyle, bowling: BowlingStyle) -> usize {
        batting as usize * BowlingStyle::ALL.len() + bowling as usize
    }
}

impl Default for OutcomeResolver {
    fn default() -> Self {
        Self::standard().clone()
    }
}

/// Resolves one delivery with the standard probability table.
///
/// # Example
///
/// ```
/// use crease_core::resolver::resolve;
/// use crease_core::rng::seeded;
/// use crease_core::style::{BattingStyle, BowlingStyle};
///
/// let mut rng = seeded(3);
/// let outcome = resolve(BattingStyle::Aggressive, BowlingStyle::Fast, &mut rng);
/// assert!(outcome.runs_scored() <= 6);
/// ```
pub fn resolve<R: RandomSource + ?Sized>(
    batting: BattingStyle,
    bowling: BowlingStyle,
    rng: &mut R,
) -> BallOutcome {
    OutcomeResolver::standard().resolve(batting, bowling, rng)
}
