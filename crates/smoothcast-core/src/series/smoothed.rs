use super::Period;
use serde::Serialize;

/// A series extended by one period, paired with its exponentially smoothed values.
///
/// `raw` holds the observed values with a trailing `None` for the extra
/// period; `smoothed` has the same length and is fully populated, so its last
/// entry is the one-step-ahead forecast.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SmoothedSeries {
    pub(crate) alpha: f64,
    pub(crate) periods: Vec<Period>,
    pub(crate) raw: Vec<Option<f64>>,
    pub(crate) smoothed: Vec<f64>,
}

/// One row of a [`SmoothedSeries`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmoothedRow {
    pub period: Period,
    pub raw: Option<f64>,
    pub smoothed: f64,
}

impl SmoothedSeries {
    /// Smoothing factor used to build the series
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Number of periods, including the extended one
    pub fn len(&self) -> usize {
        self.periods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.periods.is_empty()
    }

    pub fn periods(&self) -> &[Period] {
        &self.periods
    }

    pub fn raw(&self) -> &[Option<f64>] {
        &self.raw
    }

    pub fn smoothed(&self) -> &[f64] {
        &self.smoothed
    }

    pub fn rows(&self) -> impl Iterator<Item = SmoothedRow> + '_ {
        self.periods
            .iter()
            .zip(self.raw.iter())
            .zip(self.smoothed.iter())
            .map(|((&period, &raw), &smoothed)| SmoothedRow {
                period,
                raw,
                smoothed,
            })
    }

    /// Smoothed value for the extended period.
    pub fn forecast(&self) -> f64 {
        self.smoothed.last().copied().unwrap_or(f64::NAN)
    }

    /// Sum of squared one-step-ahead errors over the observed periods.
    ///
    /// The seed row carries no error and the extended row has no observation,
    /// so only rows `1..N` contribute.
    pub fn sse(&self) -> f64 {
        self.raw
            .iter()
            .zip(self.smoothed.iter())
            .skip(1)
            .filter_map(|(raw, s)| raw.map(|x| (x - s).powi(2)))
            .sum()
    }

    /// Mean squared one-step-ahead error, `None` with fewer than two observations.
    pub fn mse(&self) -> Option<f64> {
        let observed = self.raw.iter().filter(|r| r.is_some()).count();
        if observed < 2 {
            return None;
        }
        Some(self.sse() / (observed - 1) as f64)
    }
}
