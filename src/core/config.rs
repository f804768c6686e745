//! Session configuration.
//!
//! A `SessionConfig` fixes everything about a play session that is not
//! decided by the player: the RNG seed, how many rounds a game lasts, the
//! starting mode and metric, and the cosmetic delay the UI uses between
//! rounds.

use serde::{Deserialize, Serialize};

use super::error::{Error, Result};

/// How the metric for a round is chosen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    /// Metric redrawn uniformly at random every round.
    #[default]
    Random,
    /// Metric fixed by the player's selection.
    Practice,
}

impl GameMode {
    /// The other mode.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            GameMode::Random => GameMode::Practice,
            GameMode::Practice => GameMode::Random,
        }
    }

    /// Stable lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            GameMode::Random => "random",
            GameMode::Practice => "practice",
        }
    }
}

impl std::fmt::Display for GameMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for GameMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "random" => Ok(GameMode::Random),
            "practice" => Ok(GameMode::Practice),
            _ => Err(Error::InvalidConfig("mode must be \"random\" or \"practice\"")),
        }
    }
}

/// Session configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Random seed for pair and metric draws.
    /// Same seed and same inputs replay the same session.
    pub seed: u64,

    /// Rounds per game (default: 10).
    /// A miss on the final round ends the game.
    pub rounds_per_game: u32,

    /// Mode the session starts in.
    pub mode: GameMode,

    /// Metric selected at startup. `None` or an unknown id selects the
    /// first metric of the dataset.
    pub initial_metric: Option<String>,

    /// Fade delay between hiding a pair and showing the next (milliseconds).
    /// Purely for the UI; the core never waits.
    pub transition_delay_ms: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            rounds_per_game: 10,
            mode: GameMode::Random,
            initial_metric: None,
            transition_delay_ms: 300,
        }
    }
}

impl SessionConfig {
    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the number of rounds per game.
    #[must_use]
    pub fn with_rounds_per_game(mut self, rounds: u32) -> Self {
        self.rounds_per_game = rounds;
        self
    }

    /// Set the starting mode.
    #[must_use]
    pub fn with_mode(mut self, mode: GameMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the metric selected at startup.
    #[must_use]
    pub fn with_initial_metric(mut self, metric_id: impl Into<String>) -> Self {
        self.initial_metric = Some(metric_id.into());
        self
    }

    /// Set the UI transition delay.
    #[must_use]
    pub fn with_transition_delay_ms(mut self, delay: u64) -> Self {
        self.transition_delay_ms = delay;
        self
    }

    /// Check the configuration can drive a game.
    pub fn validate(&self) -> Result<()> {
        if self.rounds_per_game == 0 {
            return Err(Error::InvalidConfig("rounds_per_game must be at least 1"));
        }
        Ok(())
    }
}
