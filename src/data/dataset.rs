//! Dataset: countries, metrics, and cached rankings.
//!
//! A `Dataset` is validated once by `DatasetBuilder::build` and read-only
//! afterwards. Rankings are computed at build time, one per metric.

use rustc_hash::FxHashMap;
use tracing::warn;

use super::builtin;
use super::country::{CountryId, CountryRecord};
use super::metric::{Metric, MetricIndex};
use super::ranking::RankedTable;
use crate::core::{Error, Result};

/// Builder for a validated `Dataset`.
///
/// ## Example
///
/// ```
/// use country_guesser::data::{CountryField, CountryRecord, DatasetBuilder, Metric};
///
/// let dataset = DatasetBuilder::new()
///     .country(CountryRecord::new("Alpha", "AL").with(CountryField::Population, 10.0))
///     .country(CountryRecord::new("Beta", "BE").with(CountryField::Population, 20.0))
///     .metric(Metric::new("population", "Population", CountryField::Population))
///     .build()
///     .unwrap();
///
/// assert_eq!(dataset.ranking_for("population").entries()[0].country, "Beta");
/// ```
#[derive(Clone, Debug, Default)]
pub struct DatasetBuilder {
    countries: Vec<CountryRecord>,
    metrics: Vec<Metric>,
}

impl DatasetBuilder {
    /// Create an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder preloaded with the shipped countries and metrics.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            countries: builtin::countries(),
            metrics: builtin::metrics(),
        }
    }

    /// Add a country.
    #[must_use]
    pub fn country(mut self, country: CountryRecord) -> Self {
        self.countries.push(country);
        self
    }

    /// Add several countries.
    #[must_use]
    pub fn countries(mut self, countries: impl IntoIterator<Item = CountryRecord>) -> Self {
        self.countries.extend(countries);
        self
    }

    /// Add a metric. Display order is insertion order.
    #[must_use]
    pub fn metric(mut self, metric: Metric) -> Self {
        self.metrics.push(metric);
        self
    }

    /// Validate and build.
    ///
    /// Fails on fewer than two countries, no metrics, more countries or
    /// metrics than their ids can address, or duplicate country names /
    /// metric ids.
    pub fn build(self) -> Result<Dataset> {
        if self.countries.len() < 2 {
            return Err(Error::TooFewCountries {
                count: self.countries.len(),
            });
        }
        if self.countries.len() > CountryId::MAX_COUNT {
            return Err(Error::TooManyCountries {
                count: self.countries.len(),
                max: CountryId::MAX_COUNT,
            });
        }
        if self.metrics.is_empty() {
            return Err(Error::NoMetrics);
        }
        if self.metrics.len() > MetricIndex::MAX_COUNT {
            return Err(Error::TooManyMetrics {
                count: self.metrics.len(),
                max: MetricIndex::MAX_COUNT,
            });
        }

        let mut country_lookup = FxHashMap::default();
        let ids = (0..).map_while(CountryId::from_index);
        for (id, c) in ids.zip(&self.countries) {
            if country_lookup.insert(c.name.clone(), id).is_some() {
                return Err(Error::DuplicateCountry(c.name.clone()));
            }
        }

        let mut metric_lookup = FxHashMap::default();
        let indices = (0..).map_while(MetricIndex::from_index);
        for (index, m) in indices.zip(&self.metrics) {
            if metric_lookup.insert(m.id.clone(), index).is_some() {
                return Err(Error::DuplicateMetric(m.id.clone()));
            }
        }

        let rankings = self
            .metrics
            .iter()
            .map(|m| RankedTable::build(m, &self.countries))
            .collect();

        Ok(Dataset {
            countries: self.countries,
            metrics: self.metrics,
            rankings,
            country_lookup,
            metric_lookup,
        })
    }
}

/// Fixed set of countries and metrics with precomputed rankings.
#[derive(Clone, Debug)]
pub struct Dataset {
    countries: Vec<CountryRecord>,
    metrics: Vec<Metric>,
    /// Parallel to `metrics`.
    rankings: Vec<RankedTable>,
    country_lookup: FxHashMap<String, CountryId>,
    metric_lookup: FxHashMap<String, MetricIndex>,
}

impl Dataset {
    /// The shipped 29-country, 8-metric dataset.
    #[must_use]
    pub fn standard() -> Self {
        DatasetBuilder::standard()
            .build()
            .expect("built-in dataset is valid")
    }

    /// All countries. Order carries no meaning for play.
    #[must_use]
    pub fn countries(&self) -> &[CountryRecord] {
        &self.countries
    }

    /// All metrics in display order.
    #[must_use]
    pub fn metrics(&self) -> &[Metric] {
        &self.metrics
    }

    /// Number of countries.
    #[must_use]
    pub fn country_count(&self) -> usize {
        self.countries.len()
    }

    /// Number of metrics.
    #[must_use]
    pub fn metric_count(&self) -> usize {
        self.metrics.len()
    }

    /// Ids of every country, in dataset order.
    pub fn country_ids(&self) -> impl Iterator<Item = CountryId> + '_ {
        (0..self.countries.len()).filter_map(CountryId::from_index)
    }

    /// Look up a country by id.
    #[must_use]
    pub fn country(&self, id: CountryId) -> Option<&CountryRecord> {
        self.countries.get(id.index())
    }

    /// Look up a country id by name.
    #[must_use]
    pub fn country_id(&self, name: &str) -> Option<CountryId> {
        self.country_lookup.get(name).copied()
    }

    /// Look up a country by name.
    #[must_use]
    pub fn country_by_name(&self, name: &str) -> Option<&CountryRecord> {
        self.country_id(name).and_then(|id| self.country(id))
    }

    /// Exact metric lookup by id.
    #[must_use]
    pub fn find_metric(&self, metric_id: &str) -> Option<MetricIndex> {
        self.metric_lookup.get(metric_id).copied()
    }

    /// Metric lookup with fallback: unknown ids select the first metric.
    #[must_use]
    pub fn metric_or_default(&self, metric_id: &str) -> MetricIndex {
        self.find_metric(metric_id).unwrap_or_else(|| {
            warn!(metric_id, fallback = %self.metrics[0].id, "unknown metric id");
            MetricIndex::FIRST
        })
    }

    /// Metric at an index. Indices come from this dataset, so this clamps
    /// out-of-range values to the first metric.
    #[must_use]
    pub fn metric(&self, index: MetricIndex) -> &Metric {
        self.metrics.get(index.index()).unwrap_or(&self.metrics[0])
    }

    /// Ranking for a metric id, falling back to the first metric.
    #[must_use]
    pub fn ranking_for(&self, metric_id: &str) -> &RankedTable {
        self.ranking(self.metric_or_default(metric_id))
    }

    /// Ranking for a metric index.
    #[must_use]
    pub fn ranking(&self, index: MetricIndex) -> &RankedTable {
        self.rankings.get(index.index()).unwrap_or(&self.rankings[0])
    }
}
