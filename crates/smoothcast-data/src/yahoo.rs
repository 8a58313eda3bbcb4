//! Yahoo Finance monthly bars
//!
//! Fetches monthly opening prices from the Yahoo Finance chart API. Network
//! access needs the `fetch` feature; response parsing is always available.
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(feature = "fetch")]
//! # fn main() -> smoothcast_data::Result<()> {
//! use smoothcast_data::{load_series, FetchConfig, YahooFinance, DEFAULT_PERIODS};
//!
//! let source = YahooFinance::new(FetchConfig::default());
//! let series = load_series(&source, DEFAULT_PERIODS)?;
//! println!("Got {} months", series.len());
//! # Ok(())
//! # }
//! # #[cfg(not(feature = "fetch"))]
//! # fn main() {}
//! ```

use crate::config::FetchConfig;
use crate::contract::DataSource;
use crate::error::{DataError, Result};
use crate::model::Observation;
use chrono::{DateTime, NaiveDate};
use serde::Deserialize;

/// Yahoo Finance API response structures
#[derive(Debug, Deserialize)]
struct YahooResponse {
    chart: ChartResult,
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    result: Option<Vec<ChartData>>,
    error: Option<YahooError>,
}

#[derive(Debug, Deserialize)]
struct YahooError {
    code: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct ChartData {
    #[serde(default)]
    timestamp: Vec<i64>,
    indicators: Indicators,
}

#[derive(Debug, Deserialize)]
struct Indicators {
    quote: Vec<QuoteData>,
}

#[derive(Debug, Deserialize)]
struct QuoteData {
    open: Vec<Option<f64>>,
}

/// Yahoo Finance client for one ticker and date window
#[derive(Debug, Clone)]
pub struct YahooFinance {
    #[cfg_attr(not(feature = "fetch"), allow(dead_code))]
    base_url: String,
    config: FetchConfig,
    name: String,
}

impl YahooFinance {
    /// Create a new Yahoo Finance client
    pub fn new(config: FetchConfig) -> Self {
        Self {
            base_url: "https://query1.finance.yahoo.com/v8/finance/chart".to_string(),
            name: format!("yahoo:{}", config.symbol),
            config,
        }
    }

    pub fn config(&self) -> &FetchConfig {
        &self.config
    }

    fn unix_seconds(date: NaiveDate) -> i64 {
        date.and_hms_opt(0, 0, 0)
            .map(|dt| dt.and_utc().timestamp())
            .unwrap_or_default()
    }

    /// Build the API URL for monthly bars
    ///
    /// `period2` is exclusive upstream, so it is set to the day after
    /// `end_date` to keep sessions on the end date.
    #[cfg_attr(not(feature = "fetch"), allow(dead_code))]
    fn build_url(&self) -> String {
        let end = self.config.end_date;
        format!(
            "{}/{}?period1={}&period2={}&interval=1mo",
            self.base_url,
            self.config.symbol,
            Self::unix_seconds(self.config.start_date),
            Self::unix_seconds(end.succ_opt().unwrap_or(end)),
        )
    }

    /// Fetch monthly bars (blocking)
    #[cfg(feature = "fetch")]
    pub fn fetch_blocking(&self) -> Result<Vec<Observation>> {
        self.config.validate()?;
        let url = self.build_url();
        tracing::debug!(%url, "requesting monthly bars");

        let client = reqwest::blocking::Client::builder()
            .user_agent("Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36")
            .build()
            .map_err(|e| DataError::RequestFailed(e.to_string()))?;

        let response = client
            .get(&url)
            .send()
            .map_err(|e| DataError::RequestFailed(e.to_string()))?;

        let text = response
            .text()
            .map_err(|e| DataError::RequestFailed(e.to_string()))?;

        self.parse_response(&text)
    }

    /// Parse a Yahoo Finance chart response into observations
    pub fn parse_response(&self, json: &str) -> Result<Vec<Observation>> {
        let response: YahooResponse =
            serde_json::from_str(json).map_err(|e| DataError::ParseError(e.to_string()))?;

        if let Some(error) = response.chart.error {
            return Err(DataError::ApiError {
                code: error.code,
                description: error.description,
            });
        }

        let results = response.chart.result.ok_or(DataError::NoData)?;
        let data = results.first().ok_or(DataError::NoData)?;
        let quote_data = data.indicators.quote.first().ok_or(DataError::NoData)?;

        let mut observations = Vec::with_capacity(data.timestamp.len());
        for (i, &ts) in data.timestamp.iter().enumerate() {
            // Skip bars without an open price
            let Some(open) = quote_data.open.get(i).copied().flatten() else {
                continue;
            };
            let date = DateTime::from_timestamp(ts, 0)
                .map(|dt| dt.date_naive())
                .ok_or_else(|| DataError::InvalidDate(format!("timestamp {}", ts)))?;
            observations.push(Observation::new(date, open));
        }

        if observations.is_empty() {
            return Err(DataError::NoData);
        }

        Ok(observations)
    }
}

impl DataSource for YahooFinance {
    fn name(&self) -> &str {
        &self.name
    }

    #[cfg(feature = "fetch")]
    fn observations(&self) -> Result<Vec<Observation>> {
        self.fetch_blocking()
    }

    #[cfg(not(feature = "fetch"))]
    fn observations(&self) -> Result<Vec<Observation>> {
        Err(DataError::ConfigError(format!(
            "cannot fetch {}: built without the `fetch` feature",
            self.config.symbol
        )))
    }
}
