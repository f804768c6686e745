//! Crate error type.
//!
//! Play itself never fails: unknown metric ids fall back to the first metric
//! and out-of-state actions are ignored. The only errors are startup
//! configuration problems, reported once when a dataset or session is built.

/// Startup configuration errors.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Pair selection needs at least two countries.
    #[error("dataset needs at least 2 countries to draw a pair, found {count}")]
    TooFewCountries { count: usize },

    /// Country ids are 16-bit positions.
    #[error("dataset holds {count} countries, at most {max} are supported")]
    TooManyCountries { count: usize, max: usize },

    /// A game needs something to compare.
    #[error("dataset defines no metrics")]
    NoMetrics,

    /// Metric indices are 16-bit positions.
    #[error("dataset holds {count} metrics, at most {max} are supported")]
    TooManyMetrics { count: usize, max: usize },

    /// Country names identify records and must be unique.
    #[error("duplicate country name: {0}")]
    DuplicateCountry(String),

    /// Metric ids are looked up by the UI and must be unique.
    #[error("duplicate metric id: {0}")]
    DuplicateMetric(String),

    /// Session configuration rejected.
    #[error("invalid session config: {0}")]
    InvalidConfig(&'static str),
}

/// Crate result alias.
pub type Result<T> = std::result::Result<T, Error>;
