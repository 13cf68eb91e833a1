use crate::dataset::DataSet;
use crate::error::DatasetError;
use crate::types::Stats;
use log::debug;

#[derive(Debug, Clone, PartialEq)]
pub struct CrossRow {
    pub zip_code: String,
    /// One cell per column; `None` when no record matches.
    pub cells: Vec<Option<f64>>,
}

/// One statistic for every active zip code × time of day.
#[derive(Debug, Clone, PartialEq)]
pub struct CrossTable {
    pub columns: Vec<String>,
    pub rows: Vec<CrossRow>,
}

pub fn generate_cross_table(data: &DataSet, stat: Stats) -> Result<CrossTable, DatasetError> {
    if data.is_empty() {
        return Err(DatasetError::EmptyDataset);
    }
    let columns = data.times().to_vec();
    let mut rows = Vec::new();
    for zip in data.active_zips() {
        let mut cells = Vec::with_capacity(columns.len());
        for time in &columns {
            match data.cross_table_statistics(zip, time) {
                Ok(summary) => cells.push(Some(stat.pick(&summary))),
                Err(DatasetError::NoMatchingItems { .. }) => cells.push(None),
                Err(e) => return Err(e),
            }
        }
        rows.push(CrossRow { zip_code: zip.to_string(), cells });
    }
    debug!("built {:?} cross-table: {} rows x {} columns", stat, rows.len(), columns.len());
    Ok(CrossTable { columns, rows })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DataSet {
        let mut ds = DataSet::default();
        ds.load_default_data();
        ds
    }

    #[test]
    fn empty_dataset_has_no_table() {
        let ds = DataSet::default();
        assert_eq!(generate_cross_table(&ds, Stats::Avg), Err(DatasetError::EmptyDataset));
    }

    #[test]
    fn cells_hold_requested_stat() {
        let ds = sample();
        let t = generate_cross_table(&ds, Stats::Max).unwrap();
        assert_eq!(t.columns, ["Morning", "Midday", "Evening"]);
        assert_eq!(t.rows.len(), 3);
        assert_eq!(
            t.rows[0],
            CrossRow { zip_code: "12345".into(), cells: vec![Some(1.1), None, None] }
        );
        assert_eq!(t.rows[2].cells, vec![Some(3.0), None, None]);

        let t = generate_cross_table(&ds, Stats::Min).unwrap();
        assert_eq!(t.rows[2].cells[0], Some(1.0));
        let t = generate_cross_table(&ds, Stats::Avg).unwrap();
        assert_eq!(t.rows[2].cells[0], Some(2.0));
    }

    #[test]
    fn inactive_zips_are_left_out() {
        let mut ds = sample();
        ds.toggle_zip("94022").unwrap();
        let t = generate_cross_table(&ds, Stats::Avg).unwrap();
        let zips: Vec<&str> = t.rows.iter().map(|r| r.zip_code.as_str()).collect();
        assert_eq!(zips, ["12345", "94040"]);
        assert_eq!(t.columns.len(), 3);
    }
}
