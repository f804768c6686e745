//! Core types: randomness, session configuration, errors.
//!
//! Nothing here knows about countries or metrics. The game module draws
//! through `RandomSource`, reads `SessionConfig`, and reports `Error`.

pub mod rng;
pub mod config;
pub mod error;

pub use rng::{GameRng, RandomSource, ScriptedRng};
pub use config::{GameMode, SessionConfig};
pub use error::{Error, Result};
