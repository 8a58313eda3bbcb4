//! Time-series loaders for smoothcast
//!
//! Produces the ordered monthly opening-price series consumed by the smoother
//! and the forecaster:
//!
//! - [`CsvSource`] - a CSV file with a date column and an `Open` column
//! - [`YahooFinance`] - monthly bars from Yahoo Finance (`fetch` feature)
//!
//! [`load_series`] reduces any [`DataSource`] to the first observation of each
//! month and keeps the earliest [`DEFAULT_PERIODS`] months.
//!
//! # Example
//!
//! ```rust,no_run
//! use smoothcast_data::{load_series, CsvSource, DEFAULT_PERIODS};
//!
//! let source = CsvSource::new("aapl.csv");
//! let series = load_series(&source, DEFAULT_PERIODS).unwrap();
//! assert_eq!(series.len(), DEFAULT_PERIODS);
//! ```

pub mod config;
pub mod contract;
pub mod csv_source;
pub mod error;
pub mod model;
pub mod yahoo;

pub use config::{FetchConfig, DEFAULT_TICKER};
pub use contract::{load_series, DataSource, DEFAULT_PERIODS};
pub use csv_source::{parse_date, read_observations, CsvSource};
pub use error::{DataError, Result};
pub use model::{monthly_first, opening_prices, Observation};
pub use yahoo::YahooFinance;
