//! Python bindings for the country-guesser game core.
//!
//! A host UI written in Python drives the session and renders its state.
//!
//! # Quick Start
//!
//! ```python
//! import country_guesser as cg
//!
//! session = cg.GameSession(seed=7, mode="practice", metric="medianAge")
//! session.start()
//!
//! left, right = session.pair
//! correct = session.guess(0)
//! session.next_round()
//!
//! table = session.ranking("population")
//! values = table.values_numpy()
//! ```

use pyo3::prelude::*;

mod py_data;
mod py_session;

pub use py_data::*;
pub use py_session::*;

/// country_guesser: game core for a country comparison trivia game.
#[pymodule]
fn country_guesser(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyMetric>()?;
    m.add_class::<PyRankedTable>()?;
    m.add_class::<PyGameSession>()?;

    Ok(())
}
