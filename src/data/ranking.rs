//! Per-metric rankings for the data-browser view.
//!
//! Built once when a dataset is constructed, never mutated. Entries are
//! owned copies of name, code and value so a ranking never aliases the
//! records a round is pointing at.

use serde::{Deserialize, Serialize};

use super::country::CountryRecord;
use super::metric::Metric;

/// One row of a ranking.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RankEntry {
    pub country: String,
    pub code: String,
    pub value: f64,
}

/// Countries ordered by one metric, largest value first.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RankedTable {
    /// Id of the metric this table ranks.
    pub metric_id: String,
    entries: Vec<RankEntry>,
}

impl RankedTable {
    /// Rank `countries` by `metric`, descending.
    ///
    /// The sort is stable: equal values keep dataset order.
    #[must_use]
    pub fn build(metric: &Metric, countries: &[CountryRecord]) -> Self {
        let mut entries: Vec<RankEntry> = countries
            .iter()
            .map(|c| RankEntry {
                country: c.name.clone(),
                code: c.code.clone(),
                value: metric.value(c),
            })
            .collect();
        entries.sort_by(|a, b| b.value.total_cmp(&a.value));

        Self {
            metric_id: metric.id.clone(),
            entries,
        }
    }

    /// All rows, best first.
    #[must_use]
    pub fn entries(&self) -> &[RankEntry] {
        &self.entries
    }

    /// Iterate over rows, best first.
    pub fn iter(&self) -> impl Iterator<Item = &RankEntry> {
        self.entries.iter()
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 1-based rank of a country, if present.
    #[must_use]
    pub fn rank_of(&self, country: &str) -> Option<usize> {
        self.entries
            .iter()
            .position(|e| e.country == country)
            .map(|i| i + 1)
    }

    /// Just the values, best first.
    #[must_use]
    pub fn values(&self) -> Vec<f64> {
        self.entries.iter().map(|e| e.value).collect()
    }
}
