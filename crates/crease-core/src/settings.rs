//! Match configuration.

use serde::{Deserialize, Serialize};

use crate::error::{MatchError, Result};

/// Legal deliveries in one over.
pub const BALLS_PER_OVER: u32 = 6;

/// Wickets that end an innings unless configured otherwise.
pub const DEFAULT_MAX_WICKETS: u32 = 10;

/// Settings fixed at match start.
///
/// Missing fields fall back to [`MatchSettings::default`] when deserialized.
///
/// # Example
///
/// ```
/// use crease_core::settings::MatchSettings;
///
/// let settings = MatchSettings::new("Lions", "Tigers", 2);
/// assert_eq!(settings.max_wickets_per_innings, 10);
/// assert_eq!(settings.max_balls(), 12);
/// assert!(settings.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchSettings {
    /// Name of the side batting first.
    pub team1_name: String,
    /// Name of the side batting second.
    pub team2_name: String,
    /// Overs per innings.
    pub max_overs: u32,
    /// Wickets that end an innings.
    pub max_wickets_per_innings: u32,
}

impl Default for MatchSettings {
    fn default() -> Self {
        Self {
            team1_name: "Team 1".to_string(),
            team2_name: "Team 2".to_string(),
            max_overs: 5,
            max_wickets_per_innings: DEFAULT_MAX_WICKETS,
        }
    }
}

impl MatchSettings {
    /// Creates settings with the default wicket limit.
    #[must_use]
    pub fn new(
        team1_name: impl Into<String>,
        team2_name: impl Into<String>,
        max_overs: u32,
    ) -> Self {
        Self {
            team1_name: team1_name.into(),
            team2_name: team2_name.into(),
            max_overs,
            max_wickets_per_innings: DEFAULT_MAX_WICKETS,
        }
    }

    /// Replaces the wicket limit.
    #[must_use]
    pub fn with_max_wickets(mut self, max_wickets: u32) -> Self {
        self.max_wickets_per_innings = max_wickets;
        self
    }

    /// Balls available in one innings.
    #[must_use]
    pub fn max_balls(&self) -> u32 {
        self.max_overs.saturating_mul(BALLS_PER_OVER)
    }

    /// Rejects zero overs or a zero wicket limit.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::InvalidSettings`] naming the offending field.
    pub fn validate(&self) -> Result<()> {
        if self.max_overs == 0 {
            return Err(MatchError::InvalidSettings(
                "max_overs must be positive".to_string(),
            ));
        }
        if self.max_wickets_per_innings == 0 {
            return Err(MatchError::InvalidSettings(
                "max_wickets_per_innings must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
