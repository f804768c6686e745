//! # country-guesser
//!
//! Game core for a country comparison trivia game: two countries are shown
//! and the player guesses which has the higher (or lower) value of a
//! demographic metric.
//!
//! ## Design Principles
//!
//! 1. **Explicit State**: All per-session state lives in one `RoundState`
//!    owned by `GameSession`. The UI renders `RoundSnapshot`s.
//!
//! 2. **Injectable Randomness**: Pairs and metrics are drawn through
//!    `RandomSource`, so sessions replay from a seed and tests can script
//!    exact draws.
//!
//! 3. **Fallback Over Failure**: Unknown metric ids select the first metric,
//!    out-of-phase actions are ignored. Only startup configuration can fail.
//!
//! ## Modules
//!
//! - `core`: Random sources, session configuration, errors
//! - `data`: Countries, metrics, rankings, the shipped dataset
//! - `game`: Round/score state machine and snapshots

pub mod core;
pub mod data;
pub mod game;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Error, Result,
    GameMode, SessionConfig,
    GameRng, RandomSource, ScriptedRng,
};

pub use crate::data::{
    CountryField, CountryId, CountryRecord,
    Dataset, DatasetBuilder,
    Direction, Metric, MetricIndex, ValueFormat,
    RankEntry, RankedTable,
};

pub use crate::game::{
    GameSession, RoundState, Phase, Side, CountryPair, GuessOutcome,
    RoundSnapshot, CountryView, MetricView, ScoreVerdict,
};
