//! Owned, serializable views handed to the UI.

use serde::{Deserialize, Serialize};

use super::state::{Phase, Side};
use crate::core::GameMode;
use crate::data::{CountryId, Direction, Metric};

/// End-of-game message tier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScoreVerdict {
    BetterLuck,
    NotBad,
    GreatJob,
    Perfect,
}

impl ScoreVerdict {
    /// Tier for `score` out of `rounds_per_game`.
    ///
    /// For a 10-round game: 0-3, 4-6, 7-9, 10 and up.
    #[must_use]
    pub fn for_score(score: u32, rounds_per_game: u32) -> Self {
        let scaled = u64::from(score) * 10;
        let rounds = u64::from(rounds_per_game);
        if scaled <= 3 * rounds {
            ScoreVerdict::BetterLuck
        } else if scaled <= 6 * rounds {
            ScoreVerdict::NotBad
        } else if scaled <= 9 * rounds {
            ScoreVerdict::GreatJob
        } else {
            ScoreVerdict::Perfect
        }
    }

    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            ScoreVerdict::BetterLuck => "Better luck next time!",
            ScoreVerdict::NotBad => "Not bad! Can you do better?",
            ScoreVerdict::GreatJob => "Great job!",
            ScoreVerdict::Perfect => "Perfect score! You're amazing!",
        }
    }
}

/// Metric descriptor as shown to the player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricView {
    pub id: String,
    pub name: String,
    pub description: String,
    pub direction: Direction,
    /// Round question.
    pub prompt: String,
}

impl From<&Metric> for MetricView {
    fn from(metric: &Metric) -> Self {
        Self {
            id: metric.id.clone(),
            name: metric.name.clone(),
            description: metric.description.clone(),
            direction: metric.direction,
            prompt: metric.prompt(),
        }
    }
}

/// One side of the current round.
///
/// Values stay hidden until the round is answered.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CountryView {
    pub id: CountryId,
    pub name: String,
    pub code: String,
    pub value: Option<f64>,
    pub formatted_value: Option<String>,
    /// This side holds the winning value (both sides on a tie).
    pub holds_winning_value: Option<bool>,
    /// The player picked this side.
    pub chosen: bool,
}

/// Everything the UI needs to render the game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoundSnapshot {
    pub phase: Phase,
    pub mode: GameMode,
    pub metric: MetricView,
    /// `None` while loading.
    pub pair: Option<[CountryView; 2]>,
    pub answered: bool,
    pub is_correct: bool,
    pub chosen: Option<Side>,
    pub round: u32,
    pub rounds_per_game: u32,
    pub score: u32,
    pub streak: u32,
    pub high_score: u32,
    pub is_game_over: bool,
    /// Set once the game is over.
    pub verdict: Option<ScoreVerdict>,
    /// Fade delay the UI should use between pairs.
    pub transition_delay_ms: u64,
}

impl RoundSnapshot {
    /// Country on one side, if a pair is shown.
    #[must_use]
    pub fn side(&self, side: Side) -> Option<&CountryView> {
        self.pair.as_ref().map(|p| &p[side.index()])
    }
}
