//! Monthly time series types
//!
//! - [`TimeSeries`]: consecutive `(Period, value)` observations
//! - [`SmoothedSeries`]: a series extended by one period with a smoothed companion column

mod period;
mod smoothed;

pub use period::Period;
pub use smoothed::{SmoothedRow, SmoothedSeries};

use crate::error::{Result, TsError};
use serde::Serialize;

/// An ordered monthly series of observations.
///
/// Periods are strictly consecutive months with one value each. The series
/// is never mutated by the algorithms that consume it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeSeries {
    points: Vec<(Period, f64)>,
}

impl TimeSeries {
    /// Build a series from `(period, value)` pairs.
    ///
    /// Fails with [`TsError::InvalidInput`] when a value is not finite or when
    /// periods are not consecutive months (gaps, duplicates or descending order).
    pub fn new(points: Vec<(Period, f64)>) -> Result<Self> {
        if let Some((period, value)) = points.iter().find(|(_, v)| !v.is_finite()) {
            return Err(TsError::invalid(format!(
                "non-finite value {} at {}",
                value, period
            )));
        }

        for pair in points.windows(2) {
            let (prev, next) = (pair[0].0, pair[1].0);
            if next.ordinal() != prev.ordinal() + 1 {
                return Err(TsError::invalid(format!(
                    "periods must be consecutive months: {} is followed by {}",
                    prev, next
                )));
            }
        }

        Ok(Self { points })
    }

    /// Build a series of consecutive months starting at `start`.
    pub fn from_values(start: Period, values: &[f64]) -> Result<Self> {
        let points = values
            .iter()
            .scan(start, |period, &value| {
                let current = *period;
                *period = period.succ();
                Some((current, value))
            })
            .collect();
        Self::new(points)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn periods(&self) -> Vec<Period> {
        self.points.iter().map(|(p, _)| *p).collect()
    }

    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|(_, v)| *v).collect()
    }

    pub fn first_period(&self) -> Option<Period> {
        self.points.first().map(|(p, _)| *p)
    }

    pub fn last_period(&self) -> Option<Period> {
        self.points.last().map(|(p, _)| *p)
    }

    pub fn iter(&self) -> impl Iterator<Item = &(Period, f64)> {
        self.points.iter()
    }
}
