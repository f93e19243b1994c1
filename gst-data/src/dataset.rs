use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default location of the monthly global temperature dataset.
pub const DATASET_URL: &str =
    "https://raw.githubusercontent.com/freeCodeCamp/ProjectReferenceData/master/global-temperature.json";

/// Months per year; the vertical extent of the heat map grid.
pub const MONTHS_PER_YEAR: u32 = 12;

/// One monthly reading: the deviation (°C) from the base temperature
/// observed for a given year and month.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VarianceReading {
    pub year: i32,
    /// 1-based calendar month (January = 1).
    pub month: u32,
    pub variance: f64,
}

impl VarianceReading {
    /// Absolute temperature for this reading.
    pub fn temperature(&self, base_temperature: f64) -> f64 {
        base_temperature + self.variance
    }
}

/// The dataset as served on the wire: a base temperature plus an ordered
/// sequence of monthly variances. The sequence is kept in received order
/// and never re-sorted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemperatureDataset {
    pub base_temperature: f64,
    pub monthly_variance: Vec<VarianceReading>,
}

/// Errors raised while parsing or validating a dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to parse dataset JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("dataset contains no monthly variance readings")]
    Empty,

    #[error("all {count} readings fall in year {year}; the year axis needs at least two distinct years")]
    SingleYear { year: i32, count: usize },

    #[error("reading {index} has month {month}, expected 1 through 12")]
    MonthOutOfRange { index: usize, month: u32 },
}

impl TemperatureDataset {
    /// Parse a JSON response body into a validated dataset.
    pub fn from_json(body: &str) -> Result<Self, DatasetError> {
        let dataset: TemperatureDataset = serde_json::from_str(body)?;
        dataset.validate()?;
        Ok(dataset)
    }

    /// Check the invariants the chart geometry depends on.
    ///
    /// An empty sequence or a single-year sequence would degenerate the
    /// year scale (zero span, infinite cell width), so both are rejected
    /// here rather than surfacing as NaN geometry later. Non-finite
    /// variances are deliberately NOT rejected; they color as the
    /// coldest catch-all bucket.
    pub fn validate(&self) -> Result<(), DatasetError> {
        if self.monthly_variance.is_empty() {
            return Err(DatasetError::Empty);
        }
        for (index, reading) in self.monthly_variance.iter().enumerate() {
            if reading.month < 1 || reading.month > MONTHS_PER_YEAR {
                return Err(DatasetError::MonthOutOfRange {
                    index,
                    month: reading.month,
                });
            }
        }
        let (min_year, max_year) = match self.year_range() {
            Some(range) => range,
            None => return Err(DatasetError::Empty),
        };
        if min_year == max_year {
            return Err(DatasetError::SingleYear {
                year: min_year,
                count: self.monthly_variance.len(),
            });
        }
        Ok(())
    }

    /// Minimum and maximum year over all readings, or None when empty.
    pub fn year_range(&self) -> Option<(i32, i32)> {
        let min = self.monthly_variance.iter().map(|r| r.year).min()?;
        let max = self.monthly_variance.iter().map(|r| r.year).max()?;
        Some((min, max))
    }

    /// Human-readable summary line, e.g.
    /// `1753 - 2015: base temperature 8.66°C`.
    ///
    /// Uses the first and last readings in received order, matching the
    /// page description of the original visualization.
    pub fn describe(&self) -> String {
        let first = self.monthly_variance.first().map_or(0, |r| r.year);
        let last = self.monthly_variance.last().map_or(0, |r| r.year);
        format!(
            "{} - {}: base temperature {}°C",
            first, last, self.base_temperature
        )
    }
}
