//! Round state owned by a `GameSession`.
//!
//! ## Phases
//!
//! `Loading` → `Playing` → `RoundResolved` → `Playing` → ... → `GameOver`
//!
//! The session is the only writer; the UI reads `RoundState` or, more
//! usually, a `RoundSnapshot` built from it.

use serde::{Deserialize, Serialize};

use crate::core::GameMode;
use crate::data::{CountryId, MetricIndex};

/// Where a session is in its round cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// No pair drawn yet.
    #[default]
    Loading,
    /// Pair shown, waiting for a guess.
    Playing,
    /// Guess made, feedback shown, waiting for the next round.
    RoundResolved,
    /// Final round missed. Only `start`/`play_again`/`change_metric`/`toggle_mode` leave it.
    GameOver,
}

/// One of the two countries on screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Both sides, in display order.
    pub const BOTH: [Side; 2] = [Side::Left, Side::Right];

    /// Map a UI choice index (0 or 1) to a side.
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Side> {
        match index {
            0 => Some(Side::Left),
            1 => Some(Side::Right),
            _ => None,
        }
    }

    /// 0 for left, 1 for right.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Side::Left => 0,
            Side::Right => 1,
        }
    }

    /// The opposite side.
    #[must_use]
    pub const fn other(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Two distinct countries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CountryPair([CountryId; 2]);

impl CountryPair {
    /// Pair two countries. Returns `None` if they are the same country.
    #[must_use]
    pub fn new(left: CountryId, right: CountryId) -> Option<Self> {
        (left != right).then_some(Self([left, right]))
    }

    /// Country on one side.
    #[must_use]
    pub const fn get(&self, side: Side) -> CountryId {
        self.0[side.index()]
    }

    #[must_use]
    pub const fn left(&self) -> CountryId {
        self.0[0]
    }

    #[must_use]
    pub const fn right(&self) -> CountryId {
        self.0[1]
    }
}

/// Result of an accepted guess.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GuessOutcome {
    pub side: Side,
    pub is_correct: bool,
    /// Metric value of the chosen country.
    pub chosen_value: f64,
    /// Metric value of the other country.
    pub other_value: f64,
    /// This guess ended the game.
    pub game_over: bool,
}

/// Per-session game state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundState {
    pub phase: Phase,
    pub mode: GameMode,

    /// Current pair. `None` only while `Loading`.
    pub pair: Option<CountryPair>,

    /// Metric for the current round (also the practice-mode selection).
    pub metric: MetricIndex,

    /// A guess has been made this round.
    pub answered: bool,

    /// The guess this round was correct. Meaningless until `answered`.
    pub is_correct: bool,

    /// Side picked this round, if any.
    pub last_choice: Option<Side>,

    /// Round number, 1-based, capped at the session's rounds per game.
    pub round: u32,

    pub score: u32,

    /// Consecutive correct guesses.
    pub streak: u32,

    /// Best score seen this session. Never reset.
    pub high_score: u32,

    pub is_game_over: bool,
}

impl RoundState {
    /// Fresh state in `Loading`.
    #[must_use]
    pub fn new(mode: GameMode, metric: MetricIndex) -> Self {
        Self {
            phase: Phase::Loading,
            mode,
            pair: None,
            metric,
            answered: false,
            is_correct: false,
            last_choice: None,
            round: 1,
            score: 0,
            streak: 0,
            high_score: 0,
            is_game_over: false,
        }
    }

    /// Reset the per-game counters. High score survives.
    pub fn reset_game(&mut self) {
        self.round = 1;
        self.score = 0;
        self.streak = 0;
        self.is_game_over = false;
        self.clear_answer();
    }

    /// Forget this round's guess.
    pub fn clear_answer(&mut self) {
        self.answered = false;
        self.is_correct = false;
        self.last_choice = None;
    }

    /// Record a correct guess.
    pub fn record_hit(&mut self) {
        self.score += 1;
        self.streak += 1;
        self.high_score = self.high_score.max(self.score);
    }

    /// Record a miss. Returns true if it ends the game.
    pub fn record_miss(&mut self, rounds_per_game: u32) -> bool {
        self.streak = 0;
        if self.round >= rounds_per_game {
            self.is_game_over = true;
        }
        self.is_game_over
    }

    /// Waiting for a guess?
    #[must_use]
    pub fn awaiting_guess(&self) -> bool {
        self.phase == Phase::Playing && self.pair.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side() {
        assert_eq!(Side::from_index(0), Some(Side::Left));
        assert_eq!(Side::from_index(1), Some(Side::Right));
        assert_eq!(Side::from_index(2), None);
        assert_eq!(Side::Left.other(), Side::Right);
        assert_eq!(Side::Right.index(), 1);
    }

    #[test]
    fn test_pair_rejects_self_pair() {
        assert!(CountryPair::new(CountryId::new(3), CountryId::new(3)).is_none());

        let pair = CountryPair::new(CountryId::new(3), CountryId::new(7)).unwrap();
        assert_eq!(pair.get(Side::Left), CountryId::new(3));
        assert_eq!(pair.get(Side::Right), CountryId::new(7));
    }

    #[test]
    fn test_new_state() {
        let state = RoundState::new(GameMode::Random, MetricIndex::FIRST);
        assert_eq!(state.phase, Phase::Loading);
        assert_eq!(state.round, 1);
        assert_eq!(state.score, 0);
        assert!(state.pair.is_none());
        assert!(!state.awaiting_guess());
    }

    #[test]
    fn test_hits_raise_high_score() {
        let mut state = RoundState::new(GameMode::Random, MetricIndex::FIRST);
        state.record_hit();
        state.record_hit();
        assert_eq!((state.score, state.streak, state.high_score), (2, 2, 2));

        state.reset_game();
        state.record_hit();
        assert_eq!((state.score, state.streak, state.high_score), (1, 1, 2));
    }

    #[test]
    fn test_miss_before_final_round() {
        let mut state = RoundState::new(GameMode::Random, MetricIndex::FIRST);
        state.record_hit();
        state.round = 9;
        assert!(!state.record_miss(10));
        assert_eq!(state.streak, 0);
        assert_eq!(state.score, 1);
    }

    #[test]
    fn test_miss_on_final_round_ends_game() {
        let mut state = RoundState::new(GameMode::Random, MetricIndex::FIRST);
        state.round = 10;
        assert!(state.record_miss(10));
        assert!(state.is_game_over);
    }
}
