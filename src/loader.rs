use crate::types::{LoadReport, RawRow, Record};
use crate::util::parse_f64_safe;
use csv::ReaderBuilder;
use log::warn;
use std::error::Error;
use std::path::Path;

/// Read the PurpleAir export at `path`.
///
/// The header row is skipped. Zip and time cells are taken as-is, empty
/// ones included. Rows that are too short or whose concentration is not a
/// number are dropped and counted in `LoadReport::parse_errors`.
pub fn load_records(path: &Path) -> Result<(Vec<Record>, LoadReport), Box<dyn Error>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;
    let mut total_rows = 0usize;
    let mut parse_errors = 0usize;
    let mut records: Vec<Record> = Vec::new();

    for result in rdr.records() {
        total_rows += 1;
        let line = total_rows + 1;
        let raw = match result {
            Ok(r) => r,
            Err(e) => {
                warn!("line {}: unreadable row: {}", line, e);
                parse_errors += 1;
                continue;
            }
        };
        let row: RawRow = match raw.deserialize(None) {
            Ok(r) => r,
            Err(e) => {
                warn!("line {}: {}", line, e);
                parse_errors += 1;
                continue;
            }
        };

        let value = match parse_f64_safe(row.concentration.as_deref()) {
            Some(v) => v,
            None => {
                warn!("line {}: bad concentration {:?}", line, row.concentration);
                parse_errors += 1;
                continue;
            }
        };

        records.push(Record {
            zip_code: row.zip_code,
            time_of_day: row.time_of_day,
            value,
        });
    }

    let report = LoadReport { total_rows, loaded_rows: records.len(), parse_errors };
    Ok((records, report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_csv(body: &str) -> NamedTempFile {
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(body.as_bytes()).unwrap();
        f.flush().unwrap();
        f
    }

    const HEADER: &str = "sensor,zip,lat,lon,time,pm25\n";

    #[test]
    fn loads_every_data_row() {
        let f = write_csv(&format!(
            "{HEADER}1,94022,37.1,-122.1,Morning,1.5\n\
             2,94040,37.2,-122.2,Midday,3.25\n\
             3,94022,37.1,-122.1,Night,0\n"
        ));
        let (records, report) = load_records(f.path()).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(report, LoadReport { total_rows: 3, loaded_rows: 3, parse_errors: 0 });
        assert_eq!(records[1], Record::new("94040", "Midday", 3.25));
    }

    #[test]
    fn extra_columns_are_ignored() {
        let f = write_csv(&format!(
            "{HEADER}1,94022,37.1,-122.1,Morning,1.5,extra,more\n"
        ));
        let (records, _) = load_records(f.path()).unwrap();
        assert_eq!(records, vec![Record::new("94022", "Morning", 1.5)]);
    }

    #[test]
    fn bad_rows_are_counted_and_skipped() {
        let f = write_csv(&format!(
            "{HEADER}1,94022,37.1,-122.1,Morning,oops\n\
             2,94040,37.2\n\
             3,94040,37.1,-122.1,Night,\n\
             4,94024,37.1,-122.1,Evening,4.0\n"
        ));
        let (records, report) = load_records(f.path()).unwrap();
        assert_eq!(records, vec![Record::new("94024", "Evening", 4.0)]);
        assert_eq!(report.total_rows, 4);
        assert_eq!(report.parse_errors, 3);
    }

    #[test]
    fn exponent_values_and_empty_labels_are_kept() {
        let f = write_csv(&format!(
            "{HEADER}1,94022,1,1,Morning,1.5e1\n\
             2,,1,1,Morning,2.0\n\
             3,94040,1,1,Night,3\n\
             4,94040,1,1,,2E-3\n"
        ));
        let (records, report) = load_records(f.path()).unwrap();
        assert_eq!(report, LoadReport { total_rows: 4, loaded_rows: 4, parse_errors: 0 });
        assert_eq!(
            records,
            vec![
                Record::new("94022", "Morning", 15.0),
                Record::new("", "Morning", 2.0),
                Record::new("94040", "Night", 3.0),
                Record::new("94040", "", 0.002),
            ]
        );
    }

    #[test]
    fn padded_labels_are_kept_verbatim() {
        let f = write_csv(&format!(
            "{HEADER}1, 94022,1,1,Morning , 2.5 \n\
             2,94022,1,1,Morning,1.0\n"
        ));
        let (records, report) = load_records(f.path()).unwrap();
        assert_eq!(report.loaded_rows, 2);
        assert_eq!(records[0], Record::new(" 94022", "Morning ", 2.5));
        assert_ne!(records[0].zip_code, records[1].zip_code);
    }

    #[test]
    fn header_only_file_is_empty() {
        let f = write_csv(HEADER);
        let (records, report) = load_records(f.path()).unwrap();
        assert!(records.is_empty());
        assert_eq!(report.total_rows, 0);
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_records(&dir.path().join("nope.csv")).is_err());
    }
}
