//! Batting and bowling style choices.
//!
//! Each delivery is decided by the cross of one [`BattingStyle`] and one
//! [`BowlingStyle`]. The styles are the only tactical input the engine
//! accepts.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Approach taken by the batting side for a single delivery.
///
/// # Example
///
/// ```
/// use crease_core::style::BattingStyle;
///
/// assert_eq!(BattingStyle::ALL.len(), 3);
/// assert_eq!(BattingStyle::Aggressive.as_str(), "aggressive");
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BattingStyle {
    /// Protect the wicket, take the safe runs.
    Defensive,
    /// Rotate the strike and punish loose balls.
    Balanced,
    /// Go for the boundary at the risk of getting out.
    Aggressive,
}

impl BattingStyle {
    /// All batting styles in declaration order.
    pub const ALL: [Self; 3] = [Self::Defensive, Self::Balanced, Self::Aggressive];

    /// Returns the lowercase name of this style.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Defensive => "defensive",
            Self::Balanced => "balanced",
            Self::Aggressive => "aggressive",
        }
    }
}

impl fmt::Display for BattingStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Type of delivery chosen by the bowling side.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BowlingStyle {
    /// Slow, turning delivery.
    Spin,
    /// Medium pace, the neutral option.
    Medium,
    /// Express pace.
    Fast,
}

impl BowlingStyle {
    /// All bowling styles in declaration order.
    pub const ALL: [Self; 3] = [Self::Spin, Self::Medium, Self::Fast];

    /// Returns the lowercase name of this style.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Spin => "spin",
            Self::Medium => "medium",
            Self::Fast => "fast",
        }
    }
}

impl fmt::Display for BowlingStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
