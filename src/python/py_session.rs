//! Session bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{GameMode, SessionConfig};
use crate::data::Dataset;
use crate::game::GameSession;

use super::py_data::{metrics_of, PyMetric, PyRankedTable};

fn to_py_err(err: impl std::fmt::Display) -> PyErr {
    PyValueError::new_err(err.to_string())
}

/// Python wrapper for GameSession over the shipped dataset.
#[pyclass(name = "GameSession")]
pub struct PyGameSession {
    session: GameSession,
}

#[pymethods]
impl PyGameSession {
    /// Create a session.
    ///
    /// # Arguments
    /// - seed: RNG seed for deterministic sessions
    /// - rounds_per_game: A miss on this round ends the game
    /// - mode: "random" or "practice"
    /// - metric: Initial metric id (unknown ids select the first metric)
    #[new]
    #[pyo3(signature = (seed = 42, rounds_per_game = 10, mode = "random", metric = None))]
    fn new(seed: u64, rounds_per_game: u32, mode: &str, metric: Option<String>) -> PyResult<Self> {
        let mode: GameMode = mode.parse().map_err(to_py_err)?;
        let mut config = SessionConfig::default()
            .with_seed(seed)
            .with_rounds_per_game(rounds_per_game)
            .with_mode(mode);
        if let Some(metric) = metric {
            config = config.with_initial_metric(metric);
        }
        let session = GameSession::new(Dataset::standard(), config).map_err(to_py_err)?;
        Ok(Self { session })
    }

    /// Start a game. Defaults to the current mode.
    #[pyo3(signature = (mode = None))]
    fn start(&mut self, mode: Option<&str>) -> PyResult<()> {
        let mode = match mode {
            Some(m) => m.parse().map_err(to_py_err)?,
            None => self.session.state().mode,
        };
        self.session.start(mode);
        Ok(())
    }

    /// Pick side 0 or 1. Returns whether it was correct, or None if ignored.
    fn guess(&mut self, choice: usize) -> Option<bool> {
        self.session.guess(choice).map(|o| o.is_correct)
    }

    fn next_round(&mut self) -> bool {
        self.session.next_round()
    }

    fn change_metric(&mut self, metric_id: &str) -> bool {
        self.session.change_metric(metric_id)
    }

    fn play_again(&mut self) -> bool {
        self.session.play_again()
    }

    /// Switch mode and restart. Returns the new mode name.
    fn toggle_mode(&mut self) -> String {
        self.session.toggle_mode().to_string()
    }

    #[getter]
    fn phase(&self) -> String {
        format!("{:?}", self.session.state().phase)
    }

    #[getter]
    fn mode(&self) -> String {
        self.session.state().mode.to_string()
    }

    #[getter]
    fn round(&self) -> u32 {
        self.session.state().round
    }

    #[getter]
    fn score(&self) -> u32 {
        self.session.state().score
    }

    #[getter]
    fn streak(&self) -> u32 {
        self.session.state().streak
    }

    #[getter]
    fn high_score(&self) -> u32 {
        self.session.state().high_score
    }

    #[getter]
    fn is_game_over(&self) -> bool {
        self.session.state().is_game_over
    }

    /// Metric of the current round.
    #[getter]
    fn metric(&self) -> PyMetric {
        PyMetric(self.session.current_metric().clone())
    }

    /// Names of the two countries on screen.
    #[getter]
    fn pair(&self) -> Option<(String, String)> {
        let snapshot = self.session.snapshot();
        snapshot
            .pair
            .map(|[left, right]| (left.name, right.name))
    }

    /// Selectable metrics in display order.
    fn metrics(&self) -> Vec<PyMetric> {
        metrics_of(self.session.dataset())
    }

    /// Ranking for the data-browser view.
    fn ranking(&self, metric_id: &str) -> PyRankedTable {
        PyRankedTable(self.session.ranking(metric_id).clone())
    }

    /// Full render snapshot as JSON.
    fn snapshot_json(&self) -> PyResult<String> {
        serde_json::to_string(&self.session.snapshot()).map_err(to_py_err)
    }

    fn __repr__(&self) -> String {
        let state = self.session.state();
        format!(
            "GameSession(mode={}, phase={:?}, round={}, score={}, high_score={})",
            state.mode, state.phase, state.round, state.score, state.high_score
        )
    }
}
