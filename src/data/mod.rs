//! Dataset: country records, metrics, and rankings.
//!
//! ## Key Types
//!
//! - `CountryRecord`: Immutable demographic data for one country
//! - `CountryField`: Accessor naming one numeric field
//! - `Metric`: What a round compares, how it is shown, which side wins
//! - `RankedTable`: Countries sorted descending by one metric
//! - `Dataset`: Validated, read-only bundle of the above
//!
//! ## Fallbacks
//!
//! Unknown metric ids select the first metric instead of failing.

pub mod builtin;
pub mod country;
pub mod dataset;
pub mod metric;
pub mod ranking;

pub use country::{CountryField, CountryId, CountryRecord};
pub use dataset::{Dataset, DatasetBuilder};
pub use metric::{Direction, Metric, MetricIndex, ValueFormat};
pub use ranking::{RankEntry, RankedTable};
