//! The shipped dataset.
//!
//! Country figures are Worldometers' 2025 projections of the UN Population
//! Division data. Metric order is the display order of the metric selector.

use super::country::{CountryField, CountryRecord};
use super::metric::{Metric, ValueFormat};

#[allow(clippy::too_many_arguments)]
fn country(
    name: &str,
    code: &str,
    population: u64,
    yearly_change: f64,
    density: f64,
    land_area: u64,
    migrants: i64,
    fertility_rate: f64,
    median_age: f64,
    urban_population_percent: f64,
) -> CountryRecord {
    CountryRecord {
        name: name.to_string(),
        code: code.to_string(),
        population,
        yearly_change,
        density,
        land_area,
        migrants,
        fertility_rate,
        median_age,
        urban_population_percent,
    }
}

/// The 29 shipped countries.
#[must_use]
pub fn countries() -> Vec<CountryRecord> {
    vec![
        country("India", "IN", 1_463_865_525, 0.89, 492.0, 2_973_190, -495_753, 1.94, 28.8, 37.1),
        country("China", "CN", 1_416_096_094, -0.23, 151.0, 9_388_211, -268_126, 1.02, 40.1, 67.5),
        country("United States", "US", 347_275_807, 0.54, 38.0, 9_147_420, 1_230_663, 1.62, 38.5, 82.8),
        country("Indonesia", "ID", 285_721_236, 0.79, 158.0, 1_811_570, -39_509, 2.1, 30.4, 59.6),
        country("Pakistan", "PK", 255_219_554, 1.57, 331.0, 770_880, -1_235_336, 3.5, 20.6, 34.4),
        country("Nigeria", "NG", 237_527_782, 2.08, 261.0, 910_770, -15_258, 4.3, 18.1, 54.9),
        country("Brazil", "BR", 212_812_405, 0.38, 25.0, 8_358_140, -217_283, 1.6, 34.8, 91.4),
        country("Bangladesh", "BD", 175_686_899, 1.22, 1350.0, 130_170, -402_100, 2.11, 26.0, 42.6),
        country("Russia", "RU", 143_997_393, -0.57, 9.0, 16_376_870, -251_822, 1.47, 40.3, 75.0),
        country("Ethiopia", "ET", 135_472_051, 2.58, 135.0, 1_000_000, 24_054, 3.81, 19.1, 22.5),
        country("Mexico", "MX", 131_946_900, 0.83, 68.0, 1_943_950, -108_037, 1.87, 29.6, 87.9),
        country("Japan", "JP", 123_103_479, -0.52, 338.0, 364_555, 140_579, 1.23, 49.8, 93.1),
        country("Egypt", "EG", 118_365_995, 1.57, 119.0, 995_450, -57_305, 2.71, 24.5, 40.9),
        country("Philippines", "PH", 116_786_962, 0.81, 392.0, 298_170, -149_315, 1.88, 26.1, 49.3),
        country("DR Congo", "CD", 112_832_473, 3.25, 50.0, 2_267_050, -27_309, 5.9, 15.8, 45.0),
        country("Vietnam", "VN", 101_598_527, 0.6, 328.0, 310_070, -48_171, 1.88, 33.4, 41.4),
        country("Iran", "IR", 92_417_681, 0.93, 57.0, 1_628_550, 116_786, 1.67, 34.0, 73.3),
        country("Turkey", "TR", 87_685_426, 0.24, 114.0, 769_630, -258_205, 1.62, 33.5, 76.9),
        country("Germany", "DE", 84_075_075, -0.56, 241.0, 348_560, -334_072, 1.46, 45.5, 76.5),
        country("Thailand", "TH", 71_809_359, 0.13, 140.0, 510_890, 66_752, 1.27, 40.4, 53.1),
        country("United Kingdom", "GB", 68_886_291, 0.22, 284.0, 241_930, 129_624, 1.52, 42.5, 83.1),
        country("France", "FR", 66_583_625, 0.15, 123.0, 547_557, 8_807, 1.8, 43.2, 83.4),
        country("South Africa", "ZA", 63_043_979, 1.2, 52.0, 1_213_090, 157_892, 2.24, 27.0, 68.3),
        country("Italy", "IT", 59_037_474, -0.54, 200.0, 294_140, -79_493, 1.25, 48.5, 70.0),
        country("South Korea", "KR", 51_784_059, -0.2, 527.0, 97_230, 10_000, 0.75, 45.8, 81.7),
        country("Spain", "ES", 48_345_223, 0.39, 96.0, 498_800, 200_000, 1.22, 46.6, 80.1),
        country("Colombia", "CO", 48_030_719, -0.21, 46.0, 1_109_500, -205_000, 1.52, 34.1, 82.8),
        country("Canada", "CA", 40_097_761, 0.78, 4.0, 9_093_510, 242_032, 1.38, 42.1, 81.9),
        country("Australia", "AU", 27_779_461, 1.13, 4.0, 7_682_300, 167_351, 1.55, 36.6, 86.0),
    ]
}

/// The 8 shipped metrics, all higher-wins.
#[must_use]
pub fn metrics() -> Vec<Metric> {
    vec![
        Metric::new("population", "Population", CountryField::Population)
            .with_description("Total number of people living in the country"),
        Metric::new("landArea", "Land Area", CountryField::LandArea)
            .with_description("Total land area in square kilometers")
            .with_format(ValueFormat::grouped(" km²")),
        Metric::new("density", "Population Density", CountryField::Density)
            .with_description("Number of people per square kilometer")
            .with_format(ValueFormat::grouped(" people/km²")),
        Metric::new("medianAge", "Median Age", CountryField::MedianAge)
            .with_description("The median age of the population")
            .with_format(ValueFormat::fixed(1, "")),
        Metric::new("urbanPopulationPercent", "Urban Population", CountryField::UrbanPopulationPercent)
            .with_description("Percentage of population living in urban areas")
            .with_format(ValueFormat::fixed(1, "%")),
        Metric::new("migrants", "Net Migration", CountryField::Migrants)
            .with_description("Net number of migrants (negative means emigration)"),
        Metric::new("fertilityRate", "Fertility Rate", CountryField::FertilityRate)
            .with_description("Average number of children per woman")
            .with_format(ValueFormat::fixed(2, "")),
        Metric::new("yearlyChange", "Yearly Change", CountryField::YearlyChange)
            .with_description("Annual population growth rate (percentage)")
            .with_format(ValueFormat::fixed(2, "%")),
    ]
}
