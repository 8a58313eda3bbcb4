//! Remote fetch configuration.

use crate::error::{DataError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Ticker fetched when no CSV file is supplied.
pub const DEFAULT_TICKER: &str = "AAPL";

/// Configuration for fetching monthly bars from a remote source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FetchConfig {
    /// Stock symbol (e.g., "AAPL", "MSFT")
    pub symbol: String,
    /// First day of the window
    pub start_date: NaiveDate,
    /// Last day of the window
    pub end_date: NaiveDate,
}

impl Default for FetchConfig {
    /// Eight months of AAPL, January to August 2016.
    fn default() -> Self {
        Self {
            symbol: DEFAULT_TICKER.to_string(),
            start_date: NaiveDate::from_ymd_opt(2016, 1, 1).unwrap_or_default(),
            end_date: NaiveDate::from_ymd_opt(2016, 8, 1).unwrap_or_default(),
        }
    }
}

impl FetchConfig {
    /// Create a new fetch configuration.
    pub fn new(symbol: &str, start_date: NaiveDate, end_date: NaiveDate) -> Result<Self> {
        let config = Self {
            symbol: symbol.trim().to_uppercase(),
            start_date,
            end_date,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check the symbol is present and the window is not inverted.
    pub fn validate(&self) -> Result<()> {
        if self.symbol.is_empty() {
            return Err(DataError::ConfigError("symbol is required".to_string()));
        }
        if self.start_date >= self.end_date {
            return Err(DataError::ConfigError(format!(
                "start date {} must be before end date {}",
                self.start_date, self.end_date
            )));
        }
        Ok(())
    }
}
