use crate::error::DatasetError;
use crate::loader;
use crate::types::{LoadReport, Record, Summary};
use crate::util::summarize;
use log::{debug, info};
use std::collections::{HashMap, HashSet};
use std::error::Error;
use std::path::Path;

pub const MAX_HEADER_LEN: usize = 30;

/// Air quality records plus the label index used to build cross-tables.
///
/// Zip codes carry an active flag that only affects display; statistics are
/// always computed over every loaded record.
#[derive(Debug, Default)]
pub struct DataSet {
    header: String,
    records: Option<Vec<Record>>,
    zips: Vec<String>,
    active: HashMap<String, bool>,
    times: Vec<String>,
}

impl DataSet {
    pub fn header(&self) -> &str {
        &self.header
    }

    pub fn set_header(&mut self, header: &str) -> Result<(), DatasetError> {
        let len = header.chars().count();
        if len > MAX_HEADER_LEN {
            return Err(DatasetError::HeaderTooLong { len });
        }
        self.header = header.to_string();
        Ok(())
    }

    /// Replace the whole dataset and rebuild the label index.
    pub fn load_records(&mut self, records: Vec<Record>) {
        self.records = Some(records);
        self.initialize_labels();
    }

    pub fn load_default_data(&mut self) {
        self.load_records(vec![
            Record::new("12345", "Morning", 1.1),
            Record::new("94022", "Morning", 2.2),
            Record::new("94040", "Morning", 3.0),
            Record::new("94022", "Midday", 1.0),
            Record::new("94040", "Morning", 1.0),
            Record::new("94022", "Evening", 3.2),
        ]);
    }

    /// Load the CSV export at `path`, replacing any data already held.
    ///
    /// On error the current dataset is left untouched.
    pub fn load_file(&mut self, path: &Path) -> Result<LoadReport, Box<dyn Error>> {
        let (records, report) = loader::load_records(path)?;
        info!(
            "loaded {} of {} rows from {} ({} skipped)",
            report.loaded_rows,
            report.total_rows,
            path.display(),
            report.parse_errors
        );
        self.load_records(records);
        Ok(report)
    }

    fn initialize_labels(&mut self) {
        self.zips.clear();
        self.active.clear();
        self.times.clear();
        let mut seen_times: HashSet<&str> = HashSet::new();
        for r in self.records.iter().flatten() {
            if !self.active.contains_key(&r.zip_code) {
                self.active.insert(r.zip_code.clone(), true);
                self.zips.push(r.zip_code.clone());
            }
            if seen_times.insert(&r.time_of_day) {
                self.times.push(r.time_of_day.clone());
            }
        }
    }

    pub fn len(&self) -> usize {
        self.records.as_ref().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Zip codes with their active flag, in first-seen order.
    pub fn zips(&self) -> Vec<(String, bool)> {
        self.zips
            .iter()
            .map(|z| (z.clone(), self.active[z]))
            .collect()
    }

    pub fn active_zips(&self) -> impl Iterator<Item = &str> {
        self.zips
            .iter()
            .filter(|z| self.active[z.as_str()])
            .map(String::as_str)
    }

    /// Time-of-day labels in first-seen order.
    pub fn times(&self) -> &[String] {
        &self.times
    }

    pub fn toggle_zip(&mut self, zip: &str) -> Result<bool, DatasetError> {
        let flag = self
            .active
            .get_mut(zip)
            .ok_or_else(|| DatasetError::UnknownLabel(zip.to_string()))?;
        *flag = !*flag;
        debug!("zip {} is now {}", zip, if *flag { "active" } else { "inactive" });
        Ok(*flag)
    }

    /// Min, mean and max of every value recorded for `zip` at `time`.
    pub fn cross_table_statistics(&self, zip: &str, time: &str) -> Result<Summary, DatasetError> {
        let records = match self.records.as_deref() {
            Some(r) if !r.is_empty() => r,
            _ => return Err(DatasetError::EmptyDataset),
        };
        let values: Vec<f64> = records
            .iter()
            .filter(|r| r.zip_code == zip && r.time_of_day == time)
            .map(|r| r.value)
            .collect();
        summarize(&values).ok_or_else(|| DatasetError::NoMatchingItems {
            group: zip.to_string(),
            sub: time.to_string(),
        })
    }
}
