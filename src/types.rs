use serde::de::IgnoredAny;
use serde::Deserialize;

/// Positional view of one row of the PurpleAir export.
///
/// Only columns 1, 4 and 5 are kept; the rest are skipped without allocating.
/// Label cells are kept verbatim, so an empty cell is the label `""`.
#[derive(Debug, Deserialize)]
pub struct RawRow {
    pub _sensor: IgnoredAny,
    pub zip_code: String,
    pub _lat: IgnoredAny,
    pub _lon: IgnoredAny,
    pub time_of_day: String,
    pub concentration: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub zip_code: String,
    pub time_of_day: String,
    pub value: f64,
}

impl Record {
    pub fn new(zip_code: &str, time_of_day: &str, value: f64) -> Self {
        Self {
            zip_code: zip_code.to_string(),
            time_of_day: time_of_day.to_string(),
            value,
        }
    }
}

/// Min / mean / max of the values in one cross-table cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub min: f64,
    pub mean: f64,
    pub max: f64,
}

/// Which statistic a cross-table shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stats {
    Min,
    Avg,
    Max,
}

impl Stats {
    pub fn pick(self, summary: &Summary) -> f64 {
        match self {
            Stats::Min => summary.min,
            Stats::Avg => summary.mean,
            Stats::Max => summary.max,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadReport {
    pub total_rows: usize,
    pub loaded_rows: usize,
    pub parse_errors: usize,
}
