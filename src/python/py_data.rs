//! Dataset bindings for Python.

use numpy::PyArray1;
use pyo3::prelude::*;

use crate::data::{Dataset, Direction, Metric, RankedTable};

/// Python wrapper for Metric.
#[pyclass(name = "Metric")]
#[derive(Clone, Debug)]
pub struct PyMetric(pub Metric);

#[pymethods]
impl PyMetric {
    #[getter]
    fn id(&self) -> String {
        self.0.id.clone()
    }

    #[getter]
    fn name(&self) -> String {
        self.0.name.clone()
    }

    #[getter]
    fn description(&self) -> String {
        self.0.description.clone()
    }

    /// True if the larger value wins.
    #[getter]
    fn higher_is_better(&self) -> bool {
        self.0.direction == Direction::HigherWins
    }

    /// Render a value the way the game shows it.
    fn format_value(&self, value: f64) -> String {
        self.0.format_value(value)
    }

    /// The round question.
    fn prompt(&self) -> String {
        self.0.prompt()
    }

    fn __repr__(&self) -> String {
        format!("Metric(id={:?}, name={:?})", self.0.id, self.0.name)
    }
}

/// Python wrapper for RankedTable.
#[pyclass(name = "RankedTable")]
#[derive(Clone, Debug)]
pub struct PyRankedTable(pub RankedTable);

#[pymethods]
impl PyRankedTable {
    #[getter]
    fn metric_id(&self) -> String {
        self.0.metric_id.clone()
    }

    /// Rows as (country, code, value), best first.
    fn rows(&self) -> Vec<(String, String, f64)> {
        self.0
            .iter()
            .map(|e| (e.country.clone(), e.code.clone(), e.value))
            .collect()
    }

    /// Values as a numpy array, best first.
    fn values_numpy<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<f64>> {
        PyArray1::from_vec_bound(py, self.0.values())
    }

    /// 1-based rank of a country.
    fn rank_of(&self, country: &str) -> Option<usize> {
        self.0.rank_of(country)
    }

    fn __len__(&self) -> usize {
        self.0.len()
    }

    fn __repr__(&self) -> String {
        format!("RankedTable(metric={:?}, rows={})", self.0.metric_id, self.0.len())
    }
}

/// All metrics of a dataset, wrapped.
pub(crate) fn metrics_of(dataset: &Dataset) -> Vec<PyMetric> {
    dataset.metrics().iter().cloned().map(PyMetric).collect()
}
