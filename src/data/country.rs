//! Country records - static demographic data.
//!
//! A `CountryRecord` is immutable once a dataset is built. Rounds refer to
//! records by `CountryId`, the record's position in its dataset.

use serde::{Deserialize, Serialize};

/// Position of a country within its dataset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CountryId(pub u16);

impl CountryId {
    /// Most countries a dataset can address.
    pub const MAX_COUNT: usize = u16::MAX as usize + 1;

    /// Create a new country ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// ID for a list position, `None` past `MAX_COUNT`.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        u16::try_from(index).ok().map(Self)
    }

    /// Get the index into the dataset's country list.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for CountryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Country({})", self.0)
    }
}

/// Numeric attribute of a country.
///
/// This is the accessor half of a metric: it turns a record into the
/// number that gets compared.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CountryField {
    Population,
    YearlyChange,
    Density,
    LandArea,
    Migrants,
    FertilityRate,
    MedianAge,
    UrbanPopulationPercent,
}

impl CountryField {
    /// Every field, in record order.
    pub const ALL: [CountryField; 8] = [
        CountryField::Population,
        CountryField::YearlyChange,
        CountryField::Density,
        CountryField::LandArea,
        CountryField::Migrants,
        CountryField::FertilityRate,
        CountryField::MedianAge,
        CountryField::UrbanPopulationPercent,
    ];

    /// Read this field from a record.
    #[must_use]
    pub fn value(self, country: &CountryRecord) -> f64 {
        match self {
            CountryField::Population => country.population as f64,
            CountryField::YearlyChange => country.yearly_change,
            CountryField::Density => country.density,
            CountryField::LandArea => country.land_area as f64,
            CountryField::Migrants => country.migrants as f64,
            CountryField::FertilityRate => country.fertility_rate,
            CountryField::MedianAge => country.median_age,
            CountryField::UrbanPopulationPercent => country.urban_population_percent,
        }
    }
}

/// Immutable demographic record for one country.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CountryRecord {
    /// Display name. Unique within a dataset.
    pub name: String,

    /// ISO 3166-1 alpha-2 code.
    pub code: String,

    pub population: u64,

    /// Yearly population change, in percent.
    pub yearly_change: f64,

    /// People per km².
    pub density: f64,

    /// km².
    pub land_area: u64,

    /// Net migrants per year (negative means emigration).
    pub migrants: i64,

    /// Children per woman.
    pub fertility_rate: f64,

    pub median_age: f64,

    /// Share of the population living in urban areas, in percent.
    pub urban_population_percent: f64,
}

impl CountryRecord {
    /// Create a record with every numeric field zeroed.
    #[must_use]
    pub fn new(name: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            code: code.into(),
            population: 0,
            yearly_change: 0.0,
            density: 0.0,
            land_area: 0,
            migrants: 0,
            fertility_rate: 0.0,
            median_age: 0.0,
            urban_population_percent: 0.0,
        }
    }

    /// Set one field (builder pattern).
    ///
    /// Integer fields round to the nearest whole number. Population and land
    /// area are counts, so negative input clamps to zero.
    #[must_use]
    pub fn with(mut self, field: CountryField, value: f64) -> Self {
        match field {
            CountryField::Population => self.population = whole_count(value),
            CountryField::YearlyChange => self.yearly_change = value,
            CountryField::Density => self.density = value,
            CountryField::LandArea => self.land_area = whole_count(value),
            CountryField::Migrants => self.migrants = value.round() as i64,
            CountryField::FertilityRate => self.fertility_rate = value,
            CountryField::MedianAge => self.median_age = value,
            CountryField::UrbanPopulationPercent => self.urban_population_percent = value,
        }
        self
    }

    /// Read a field.
    #[must_use]
    pub fn get(&self, field: CountryField) -> f64 {
        field.value(self)
    }
}

/// Nearest non-negative whole number; NaN maps to zero.
fn whole_count(value: f64) -> u64 {
    value.round().max(0.0) as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_country_id() {
        let id = CountryId::new(5);
        assert_eq!(id.index(), 5);
        assert_eq!(format!("{}", id), "Country(5)");
        assert_eq!(CountryId::from_index(65_535), Some(CountryId::new(u16::MAX)));
        assert_eq!(CountryId::from_index(CountryId::MAX_COUNT), None);
    }

    #[test]
    fn test_builder_sets_fields() {
        let c = CountryRecord::new("Testland", "TL")
            .with(CountryField::Population, 1_000_000.0)
            .with(CountryField::Migrants, -2500.0)
            .with(CountryField::MedianAge, 31.5);

        assert_eq!(c.population, 1_000_000);
        assert_eq!(c.migrants, -2500);
        assert_eq!(c.get(CountryField::MedianAge), 31.5);
        assert_eq!(c.get(CountryField::Density), 0.0);
    }

    #[test]
    fn test_builder_rounds_integer_fields() {
        let c = CountryRecord::new("Testland", "TL")
            .with(CountryField::Population, 1_499.6)
            .with(CountryField::LandArea, -5.0)
            .with(CountryField::Migrants, -2_500.7);

        assert_eq!(c.population, 1_500);
        assert_eq!(c.land_area, 0);
        assert_eq!(c.migrants, -2_501);

        let c = CountryRecord::new("Testland", "TL").with(CountryField::Population, -5.0);
        assert_eq!(c.population, 0);
    }

    #[test]
    fn test_every_field_reads_back() {
        let mut c = CountryRecord::new("Testland", "TL");
        for (i, field) in CountryField::ALL.iter().enumerate() {
            c = c.with(*field, (i + 1) as f64);
        }
        for (i, field) in CountryField::ALL.iter().enumerate() {
            assert_eq!(field.value(&c), (i + 1) as f64, "{:?}", field);
        }
    }
}
