//! # smoothcast-core
//!
//! Exponential smoothing and linear trend forecasting for short monthly
//! price series.
//!
//! ## Components
//!
//! - **Exponential Smoother** - extends a series by one month and computes a
//!   smoothed companion column
//! - **Trend Forecaster** - fits an OLS line over the observations and
//!   predicts the next month, reporting the slope
//!
//! ## Example
//!
//! ```rust
//! use smoothcast_core::prelude::*;
//!
//! let start = Period::new(2016, 1).unwrap();
//! let series = TimeSeries::from_values(start, &[10.0, 12.0, 11.0, 13.0]).unwrap();
//!
//! let smoothed = exponential_smoothing(&series, 0.5).unwrap();
//! assert_eq!(smoothed.len(), series.len() + 1);
//!
//! let trend = forecast_trend(&series).unwrap();
//! assert!(trend.slope > 0.0);
//! ```

pub mod algorithms;
pub mod series;
mod error;

pub use error::{Result, TsError};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::algorithms::exponential_smoothing::{
        exponential_smoothing, suggest_alpha, SimpleExponentialSmoothing,
    };
    pub use crate::algorithms::linear_regression::{
        forecast_trend, LinearRegression, TrendForecast,
    };
    pub use crate::error::{Result, TsError};
    pub use crate::series::{Period, SmoothedRow, SmoothedSeries, TimeSeries};
}
