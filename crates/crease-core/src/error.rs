//! Error types for match setup, ball play and probability tables.

use crate::style::{BattingStyle, BowlingStyle};

/// Errors surfaced by the match state machine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MatchError {
    /// Settings rejected at match start. Values are never clamped.
    #[error("invalid match settings: {0}")]
    InvalidSettings(String),

    /// A ball was offered after the match finished. The state is untouched.
    #[error("match is already complete, no further balls can be played")]
    MatchAlreadyComplete,
}

/// Errors raised while validating a probability table.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ResolverError {
    /// The adjusted weights for a style pair cannot be normalized.
    #[error(
        "weights for {batting} batting against {bowling} bowling sum to {total}, \
         expected a positive finite total"
    )]
    DegenerateDistribution {
        /// Batting style of the offending pair.
        batting: BattingStyle,
        /// Bowling style of the offending pair.
        bowling: BowlingStyle,
        /// Raw sum of the seven adjusted weights.
        total: f64,
    },
}

/// Result alias for match operations.
pub type Result<T, E = MatchError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_readable() {
        let err = MatchError::InvalidSettings("max_overs must be positive".into());
        assert_eq!(
            err.to_string(),
            "invalid match settings: max_overs must be positive"
        );

        let err = ResolverError::DegenerateDistribution {
            batting: BattingStyle::Defensive,
            bowling: BowlingStyle::Spin,
            total: 0.0,
        };
        assert!(err.to_string().contains("defensive batting against spin"));
    }
}
