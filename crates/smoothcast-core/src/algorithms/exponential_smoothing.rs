//! Simple exponential smoothing over a monthly series
//!
//! The smoother extends the series by one month and fills a companion column
//! with the recurrence
//!
//! ```text
//! S_0     = Y_0
//! S_{t+1} = α * Y_t + (1 - α) * S_t      for t = 0..N-1
//! ```
//!
//! so `S_N`, aligned with the extra month, is the one-step-ahead forecast.
//!
//! ## Choosing alpha
//!
//! Higher values follow recent observations more closely; `alpha = 1` lags the
//! raw series by exactly one period. [`suggest_alpha`] picks the value with the
//! smallest one-step-ahead squared error.

use crate::error::{Result, TsError};
use crate::series::{SmoothedSeries, TimeSeries};
use serde::{Deserialize, Serialize};
use std::iter;

/// Simple Exponential Smoothing with a fixed smoothing factor
///
/// # Example
///
/// ```rust
/// use smoothcast_core::prelude::*;
///
/// let start = Period::new(2016, 1).unwrap();
/// let series = TimeSeries::from_values(start, &[10.0, 12.0, 11.0, 13.0]).unwrap();
///
/// let ses = SimpleExponentialSmoothing::new(0.5).unwrap();
/// let smoothed = ses.smooth(&series).unwrap();
///
/// assert_eq!(smoothed.len(), 5);
/// assert_eq!(smoothed.smoothed()[0], 10.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SmootherParams")]
pub struct SimpleExponentialSmoothing {
    /// Smoothing parameter (0 < alpha <= 1)
    alpha: f64,
}

/// Unvalidated wire form; deserialization goes through [`SimpleExponentialSmoothing::new`].
#[derive(Deserialize)]
struct SmootherParams {
    alpha: f64,
}

impl TryFrom<SmootherParams> for SimpleExponentialSmoothing {
    type Error = TsError;

    fn try_from(params: SmootherParams) -> Result<Self> {
        Self::new(params.alpha)
    }
}

impl SimpleExponentialSmoothing {
    /// Create a new smoother
    ///
    /// # Arguments
    ///
    /// * `alpha` - Smoothing parameter in (0, 1]
    pub fn new(alpha: f64) -> Result<Self> {
        if !alpha.is_finite() || alpha <= 0.0 || alpha > 1.0 {
            return Err(TsError::invalid(format!(
                "alpha must be in (0, 1], got {}",
                alpha
            )));
        }

        Ok(Self { alpha })
    }

    /// Get alpha parameter
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Smooth `series`, extending it by one month.
    ///
    /// The input is only borrowed; repeated calls with different smoothers
    /// all see the same observations.
    pub fn smooth(&self, series: &TimeSeries) -> Result<SmoothedSeries> {
        let (seed, next_period) = match (series.iter().next(), series.last_period()) {
            (Some(&(_, seed)), Some(last)) => (seed, last.succ()),
            _ => {
                return Err(TsError::invalid(
                    "cannot smooth an empty series: no seed value",
                ))
            }
        };

        let alpha = self.alpha;
        let values = series.values();

        let smoothed: Vec<f64> = iter::once(seed)
            .chain(values.iter().scan(seed, |level, &y| {
                *level = alpha * y + (1.0 - alpha) * *level;
                Some(*level)
            }))
            .collect();

        let periods = series
            .periods()
            .into_iter()
            .chain(iter::once(next_period))
            .collect();
        let raw = values
            .iter()
            .copied()
            .map(Some)
            .chain(iter::once(None))
            .collect();

        tracing::trace!(alpha, points = values.len(), "smoothed series");

        Ok(SmoothedSeries {
            alpha,
            periods,
            raw,
            smoothed,
        })
    }
}

/// Smooth `series` with the given `alpha`.
pub fn exponential_smoothing(series: &TimeSeries, alpha: f64) -> Result<SmoothedSeries> {
    SimpleExponentialSmoothing::new(alpha)?.smooth(series)
}

/// Grid-search alpha over `0.01, 0.02, ..., 1.00`, minimising the one-step-ahead SSE.
///
/// Ties keep the smaller alpha. Needs at least two observations.
pub fn suggest_alpha(series: &TimeSeries) -> Result<f64> {
    if series.len() < 2 {
        return Err(TsError::InsufficientData {
            required: 2,
            actual: series.len(),
        });
    }

    let mut best_alpha = 1.0;
    let mut best_sse = f64::MAX;

    for alpha_int in 1..=100 {
        let alpha = alpha_int as f64 / 100.0;
        let sse = exponential_smoothing(series, alpha)?.sse();
        if sse < best_sse {
            best_sse = sse;
            best_alpha = alpha;
        }
    }

    Ok(best_alpha)
}
