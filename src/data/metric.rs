//! Metrics - what a round compares.
//!
//! A `Metric` bundles everything the game and the UI need about one
//! comparable attribute:
//! - `id`: stable string the UI selects by
//! - `name` / `description`: display text
//! - `field`: accessor into `CountryRecord`
//! - `direction`: whether the larger or the smaller value wins
//! - `format`: how values are rendered
//!
//! ## Example
//!
//! ```
//! use country_guesser::data::{CountryField, Direction, Metric, ValueFormat};
//!
//! let age = Metric::new("medianAge", "Median Age", CountryField::MedianAge)
//!     .with_description("The median age of the population")
//!     .with_format(ValueFormat::fixed(1, ""))
//!     .with_direction(Direction::LowerWins);
//!
//! assert_eq!(age.format_value(28.8), "28.8");
//! assert_eq!(age.prompt(), "Which country has the lower median age?");
//! ```

use serde::{Deserialize, Serialize};

use super::country::{CountryField, CountryRecord};

/// Position of a metric within its dataset, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MetricIndex(pub u16);

impl MetricIndex {
    /// The first metric; fallback for unknown ids.
    pub const FIRST: MetricIndex = MetricIndex(0);

    /// Most metrics a dataset can address.
    pub const MAX_COUNT: usize = u16::MAX as usize + 1;

    /// Create a new metric index.
    #[must_use]
    pub const fn new(index: u16) -> Self {
        Self(index)
    }

    /// Index for a list position, `None` past `MAX_COUNT`.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        u16::try_from(index).ok().map(Self)
    }

    /// Get the index into the dataset's metric list.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Which side of a comparison wins.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    #[default]
    HigherWins,
    LowerWins,
}

impl Direction {
    /// Does `a` strictly beat `b`?
    ///
    /// Equal values never win, so a tied pair has no correct side.
    #[must_use]
    pub fn beats(self, a: f64, b: f64) -> bool {
        match self {
            Direction::HigherWins => a > b,
            Direction::LowerWins => a < b,
        }
    }

    /// Comparative adjective used in the round question.
    #[must_use]
    pub const fn comparative(self) -> &'static str {
        match self {
            Direction::HigherWins => "higher",
            Direction::LowerWins => "lower",
        }
    }
}

/// How a metric value is rendered for display.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValueFormat {
    /// Thousands separators, at most three fraction digits, then `suffix`.
    Grouped { suffix: String },
    /// Exactly `decimals` fraction digits, then `suffix`.
    Fixed { decimals: u8, suffix: String },
}

impl Default for ValueFormat {
    fn default() -> Self {
        ValueFormat::grouped("")
    }
}

impl ValueFormat {
    /// Grouped format with a suffix (may be empty).
    #[must_use]
    pub fn grouped(suffix: impl Into<String>) -> Self {
        ValueFormat::Grouped {
            suffix: suffix.into(),
        }
    }

    /// Fixed-decimal format with a suffix (may be empty).
    #[must_use]
    pub fn fixed(decimals: u8, suffix: impl Into<String>) -> Self {
        ValueFormat::Fixed {
            decimals,
            suffix: suffix.into(),
        }
    }

    /// Render a value.
    #[must_use]
    pub fn format(&self, value: f64) -> String {
        match self {
            ValueFormat::Grouped { suffix } => format!("{}{}", group_thousands(value), suffix),
            ValueFormat::Fixed { decimals, suffix } => {
                format!("{:.*}{}", *decimals as usize, value, suffix)
            }
        }
    }
}

/// `1463865525.0` -> `"1,463,865,525"`, `-0.5` -> `"-0.5"`.
fn group_thousands(value: f64) -> String {
    let fixed = format!("{:.3}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut out = String::with_capacity(fixed.len() + int_part.len() / 3 + 1);
    let is_zero = int_part.bytes().all(|b| b == b'0') && frac_part.is_empty();
    if value < 0.0 && !is_zero {
        out.push('-');
    }
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

/// A selectable comparison metric.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Metric {
    /// Unique identifier (e.g. `"population"`).
    pub id: String,

    /// Display name (e.g. `"Population"`).
    pub name: String,

    pub description: String,

    /// Accessor into the country record.
    pub field: CountryField,

    pub direction: Direction,

    pub format: ValueFormat,
}

impl Metric {
    /// Create a higher-wins metric with grouped formatting and no description.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, field: CountryField) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            field,
            direction: Direction::HigherWins,
            format: ValueFormat::default(),
        }
    }

    /// Set the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the value format.
    #[must_use]
    pub fn with_format(mut self, format: ValueFormat) -> Self {
        self.format = format;
        self
    }

    /// Set the comparison direction.
    #[must_use]
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// This metric's value for a country.
    #[must_use]
    pub fn value(&self, country: &CountryRecord) -> f64 {
        self.field.value(country)
    }

    /// Render a value with this metric's format.
    #[must_use]
    pub fn format_value(&self, value: f64) -> String {
        self.format.format(value)
    }

    /// Is picking `chosen` over `other` correct under this metric?
    #[must_use]
    pub fn judge(&self, chosen: &CountryRecord, other: &CountryRecord) -> bool {
        self.direction.beats(self.value(chosen), self.value(other))
    }

    /// The round question, e.g. "Which country has the higher population?".
    #[must_use]
    pub fn prompt(&self) -> String {
        format!(
            "Which country has the {} {}?",
            self.direction.comparative(),
            self.name.to_lowercase()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(1_463_865_525.0), "1,463,865,525");
        assert_eq!(group_thousands(-495_753.0), "-495,753");
        assert_eq!(group_thousands(999.0), "999");
        assert_eq!(group_thousands(1000.0), "1,000");
        assert_eq!(group_thousands(0.0), "0");
        assert_eq!(group_thousands(-0.0001), "0");
        assert_eq!(group_thousands(1234.5), "1,234.5");
        assert_eq!(group_thousands(0.12345), "0.123");
    }

    #[test]
    fn test_formats() {
        assert_eq!(ValueFormat::grouped(" km²").format(2_973_190.0), "2,973,190 km²");
        assert_eq!(ValueFormat::fixed(2, "%").format(-0.57), "-0.57%");
        assert_eq!(ValueFormat::fixed(1, "%").format(75.0), "75.0%");
        assert_eq!(ValueFormat::fixed(2, "").format(2.1), "2.10");
    }

    #[test]
    fn test_direction_beats() {
        assert!(Direction::HigherWins.beats(2.0, 1.0));
        assert!(!Direction::HigherWins.beats(1.0, 2.0));
        assert!(Direction::LowerWins.beats(1.0, 2.0));
        assert!(!Direction::LowerWins.beats(2.0, 1.0));

        // Ties never win
        assert!(!Direction::HigherWins.beats(3.0, 3.0));
        assert!(!Direction::LowerWins.beats(3.0, 3.0));
    }

    #[test]
    fn test_judge_uses_field() {
        let big = CountryRecord::new("Big", "BG").with(CountryField::LandArea, 500.0);
        let small = CountryRecord::new("Small", "SM").with(CountryField::LandArea, 5.0);

        let area = Metric::new("landArea", "Land Area", CountryField::LandArea);
        assert!(area.judge(&big, &small));
        assert!(!area.judge(&small, &big));

        let inverted = area.with_direction(Direction::LowerWins);
        assert!(inverted.judge(&small, &big));
    }

    #[test]
    fn test_prompt() {
        let m = Metric::new("landArea", "Land Area", CountryField::LandArea);
        assert_eq!(m.prompt(), "Which country has the higher land area?");
    }

    #[test]
    fn test_metric_index() {
        assert_eq!(MetricIndex::FIRST.index(), 0);
        assert_eq!(MetricIndex::new(3).index(), 3);
        assert_eq!(MetricIndex::from_index(3), Some(MetricIndex::new(3)));
        assert_eq!(MetricIndex::from_index(MetricIndex::MAX_COUNT), None);
    }
}
