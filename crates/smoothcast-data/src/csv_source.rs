//! CSV file source.
//!
//! The first column holds the date; the opening price is read from the column
//! headed `Open` (matched case-insensitively), as exported by most brokers
//! and finance sites.

use crate::contract::DataSource;
use crate::error::{DataError, Result};
use crate::model::Observation;
use chrono::{NaiveDate, NaiveDateTime};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%d-%b-%y", "%d-%b-%Y"];
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// Opening prices read from a CSV file on disk.
#[derive(Debug, Clone)]
pub struct CsvSource {
    path: PathBuf,
    name: String,
}

impl CsvSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path.display().to_string();
        Self { path, name }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DataSource for CsvSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn observations(&self) -> Result<Vec<Observation>> {
        let file = File::open(&self.path)?;
        read_observations(BufReader::new(file))
    }
}

/// Read `(date, open)` observations from CSV text with a header row.
///
/// Rows with a blank open value are skipped; any other unparsable value is an
/// error.
pub fn read_observations<R: Read>(reader: R) -> Result<Vec<Observation>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    let open_idx = headers
        .iter()
        .enumerate()
        .skip(1)
        .find(|(_, h)| h.eq_ignore_ascii_case("open"))
        .map(|(i, _)| i)
        .ok_or_else(|| DataError::MissingColumn("Open".to_string()))?;

    let mut observations = Vec::new();
    for (row, result) in reader.records().enumerate() {
        let record = result?;
        let line = row + 2;

        let date = parse_date(record.get(0).unwrap_or_default())?;
        let field = record.get(open_idx).unwrap_or_default();
        if field.is_empty() {
            tracing::warn!(line, %date, "skipping row without an open price");
            continue;
        }

        let open: f64 = field.parse().map_err(|_| {
            DataError::ParseError(format!("line {}: invalid open price '{}'", line, field))
        })?;
        observations.push(Observation::new(date, open));
    }

    if observations.is_empty() {
        return Err(DataError::NoData);
    }

    Ok(observations)
}

/// Parse a date in one of the common export formats.
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    let s = s.trim();

    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
                .map(|dt| dt.date())
        })
        .ok_or_else(|| DataError::InvalidDate(s.to_string()))
}
