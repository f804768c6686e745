//! Round/score state machine.
//!
//! ## Key Types
//!
//! - `GameSession`: Owns dataset, config, random source and state
//! - `RoundState`: Phase, pair, metric, counters
//! - `RoundSnapshot`: Owned view for the UI
//!
//! ## Scoring
//!
//! A guess is correct iff the chosen country's value strictly beats the
//! other under the metric's direction; ties are wrong for both sides.
//! A miss on the final round ends the game.

pub mod session;
pub mod snapshot;
pub mod state;

pub use session::GameSession;
pub use snapshot::{CountryView, MetricView, RoundSnapshot, ScoreVerdict};
pub use state::{CountryPair, GuessOutcome, Phase, RoundState, Side};
