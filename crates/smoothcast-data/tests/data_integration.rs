//! Integration tests for the data crate

use chrono::NaiveDate;
use smoothcast_core::series::Period;
use smoothcast_core::TsError;
use smoothcast_data::{
    load_series, CsvSource, DataError, DataSource, Observation, DEFAULT_PERIODS,
};
use std::path::PathBuf;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

struct StaticSource(Vec<Observation>);

impl DataSource for StaticSource {
    fn name(&self) -> &str {
        "static"
    }

    fn observations(&self) -> smoothcast_data::Result<Vec<Observation>> {
        Ok(self.0.clone())
    }
}

fn obs(y: i32, m: u32, d: u32, open: f64) -> Observation {
    Observation::new(NaiveDate::from_ymd_opt(y, m, d).unwrap(), open)
}

// ============================================================================
// CSV
// ============================================================================

#[test]
fn test_csv_reduces_to_first_of_month() {
    let source = CsvSource::new(fixture("aapl_2016.csv"));
    let series = load_series(&source, DEFAULT_PERIODS).unwrap();

    assert_eq!(series.len(), 8);
    assert_eq!(series.first_period(), Some(Period::new(2016, 1).unwrap()));
    assert_eq!(series.last_period(), Some(Period::new(2016, 8).unwrap()));
    assert_eq!(
        series.values(),
        vec![102.61, 96.47, 97.65, 108.78, 93.97, 99.02, 95.49, 104.41]
    );
}

#[test]
fn test_csv_name_is_path() {
    let source = CsvSource::new(fixture("aapl_2016.csv"));
    assert!(source.name().ends_with("aapl_2016.csv"));
}

#[test]
fn test_csv_missing_file() {
    let source = CsvSource::new(fixture("does_not_exist.csv"));
    assert!(matches!(
        load_series(&source, DEFAULT_PERIODS),
        Err(DataError::Io(_))
    ));
}

#[test]
fn test_csv_with_month_gap_is_invalid() {
    let source = CsvSource::new(fixture("gap.csv"));
    assert!(matches!(
        load_series(&source, 4),
        Err(DataError::Series(TsError::InvalidInput(_)))
    ));
}

#[test]
fn test_csv_too_few_months() {
    let source = CsvSource::new(fixture("gap.csv"));
    assert!(matches!(
        load_series(&source, DEFAULT_PERIODS),
        Err(DataError::InsufficientRows {
            required: 8,
            actual: 4
        })
    ));
}

// ============================================================================
// Any source
// ============================================================================

#[test]
fn test_load_series_truncates_to_requested_periods() {
    let source = StaticSource(vec![
        obs(2015, 12, 1, 4.0),
        obs(2015, 11, 2, 3.0),
        obs(2016, 1, 4, 5.0),
    ]);
    let series = load_series(&source, 2).unwrap();

    assert_eq!(series.values(), vec![3.0, 4.0]);
    assert_eq!(series.last_period(), Some(Period::new(2015, 12).unwrap()));
}

#[test]
fn test_load_series_zero_periods_is_config_error() {
    let source = StaticSource(vec![obs(2016, 1, 4, 1.0)]);
    assert!(matches!(
        load_series(&source, 0),
        Err(DataError::ConfigError(_))
    ));
}

#[test]
fn test_load_series_rejects_non_finite_open() {
    let source = StaticSource(vec![obs(2016, 1, 4, 1.0), obs(2016, 2, 1, f64::NAN)]);
    assert!(matches!(
        load_series(&source, 2),
        Err(DataError::Series(_))
    ));
}
