//! Linear Regression for trend forecasting
//!
//! Uses ordinary least squares (OLS) to fit a straight line through the
//! observations against their zero-based index, then evaluates the line one
//! step past the end of the series. The slope doubles as a trend-strength
//! indicator.

use crate::error::{Result, TsError};
use crate::series::{Period, TimeSeries};
use serde::{Deserialize, Serialize};

/// Linear Regression model for time series
///
/// Fits y = intercept + slope * t where t is the time index.
///
/// # Example
///
/// ```rust
/// use smoothcast_core::algorithms::linear_regression::LinearRegression;
///
/// let data = vec![10.0, 12.0, 14.0, 16.0, 18.0, 20.0];
/// let model = LinearRegression::fit(&data).unwrap();
///
/// assert!((model.slope() - 2.0).abs() < 1e-10);
/// assert!((model.predict_next() - 22.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearRegression {
    /// Y-intercept
    intercept: f64,
    /// Slope (trend per time unit)
    slope: f64,
    /// Number of observations used in fitting
    n_observations: usize,
    /// R-squared value
    r_squared: f64,
}

impl LinearRegression {
    /// Fit a line to `data` indexed `0..data.len()`.
    ///
    /// Fails with [`TsError::InsufficientData`] for fewer than two points.
    pub fn fit(data: &[f64]) -> Result<Self> {
        if data.len() < 2 {
            return Err(TsError::InsufficientData {
                required: 2,
                actual: data.len(),
            });
        }

        let n = data.len() as f64;

        // Time indices: 0, 1, 2, ...
        let sum_t: f64 = (0..data.len()).map(|i| i as f64).sum();
        let sum_y: f64 = data.iter().sum();
        let sum_t2: f64 = (0..data.len()).map(|i| (i * i) as f64).sum();
        let sum_ty: f64 = data.iter().enumerate().map(|(i, &y)| i as f64 * y).sum();

        // Distinct indices keep the denominator positive for n >= 2
        let denominator = n * sum_t2 - sum_t * sum_t;
        let slope = (n * sum_ty - sum_t * sum_y) / denominator;
        let intercept = (sum_y - slope * sum_t) / n;

        let mean_y = sum_y / n;
        let ss_tot: f64 = data.iter().map(|&y| (y - mean_y).powi(2)).sum();
        let ss_res: f64 = data
            .iter()
            .enumerate()
            .map(|(i, &y)| (y - (intercept + slope * i as f64)).powi(2))
            .sum();

        let r_squared = if ss_tot > 1e-10 {
            1.0 - ss_res / ss_tot
        } else {
            1.0
        };

        Ok(Self {
            intercept,
            slope,
            n_observations: data.len(),
            r_squared,
        })
    }

    /// Get the slope (trend per time unit)
    pub fn slope(&self) -> f64 {
        self.slope
    }

    /// Get the intercept
    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    /// Get R-squared (coefficient of determination)
    pub fn r_squared(&self) -> f64 {
        self.r_squared
    }

    pub fn n_observations(&self) -> usize {
        self.n_observations
    }

    /// Predict value at a specific time index
    pub fn predict_at(&self, t: f64) -> f64 {
        self.intercept + self.slope * t
    }

    /// Predict the first unseen point, at index `n_observations`.
    pub fn predict_next(&self) -> f64 {
        self.predict_at(self.n_observations as f64)
    }

    /// Get residuals from the fit
    pub fn residuals(&self, data: &[f64]) -> Vec<f64> {
        data.iter()
            .enumerate()
            .map(|(i, &y)| y - self.predict_at(i as f64))
            .collect()
    }
}

/// Outcome of a trend forecast over a monthly series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendForecast {
    /// Month the prediction applies to
    pub next_period: Period,
    /// Predicted value for `next_period`
    pub next_value: f64,
    /// Fitted slope, per month
    pub slope: f64,
    pub intercept: f64,
    pub r_squared: f64,
}

/// Fit a fresh regression to `series` and predict the following month.
pub fn forecast_trend(series: &TimeSeries) -> Result<TrendForecast> {
    let next_period = match series.last_period() {
        Some(last) => last.succ(),
        None => {
            return Err(TsError::InsufficientData {
                required: 2,
                actual: 0,
            })
        }
    };
    let model = LinearRegression::fit(&series.values())?;

    Ok(TrendForecast {
        next_period,
        next_value: model.predict_next(),
        slope: model.slope(),
        intercept: model.intercept(),
        r_squared: model.r_squared(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_regression() {
        let data: Vec<f64> = (0..10).map(|i| 10.0 + 2.0 * i as f64).collect();
        let model = LinearRegression::fit(&data).unwrap();

        assert!((model.slope() - 2.0).abs() < 1e-10);
        assert!((model.intercept() - 10.0).abs() < 1e-10);
        assert!(model.r_squared() > 0.99);
        assert!((model.predict_next() - 30.0).abs() < 1e-10);
        assert!((model.predict_at(11.0) - 32.0).abs() < 1e-10);
    }

    #[test]
    fn test_two_points_fit_exactly() {
        let model = LinearRegression::fit(&[3.0, 5.0]).unwrap();
        assert!((model.slope() - 2.0).abs() < 1e-10);
        assert!((model.predict_next() - 7.0).abs() < 1e-10);
    }

    #[test]
    fn test_insufficient_data() {
        assert_eq!(
            LinearRegression::fit(&[1.0]).unwrap_err(),
            TsError::InsufficientData {
                required: 2,
                actual: 1
            }
        );
        assert!(LinearRegression::fit(&[]).is_err());
    }

    #[test]
    fn test_constant_series_has_flat_trend() {
        let model = LinearRegression::fit(&[4.0; 5]).unwrap();
        assert!(model.slope().abs() < 1e-10);
        assert!((model.r_squared() - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_residuals_sum_to_zero() {
        let data = [10.0, 12.0, 11.0, 13.0, 14.0, 13.0, 15.0, 16.0];
        let model = LinearRegression::fit(&data).unwrap();
        let residuals = model.residuals(&data);
        assert_eq!(residuals.len(), data.len());
        assert!(residuals.iter().sum::<f64>().abs() < 1e-9);
    }

    #[test]
    fn test_forecast_trend_empty_and_single_point() {
        let empty = TimeSeries::new(Vec::new()).unwrap();
        assert_eq!(
            forecast_trend(&empty).unwrap_err(),
            TsError::InsufficientData {
                required: 2,
                actual: 0
            }
        );

        let single = TimeSeries::from_values(Period::new(2016, 1).unwrap(), &[5.0]).unwrap();
        assert_eq!(
            forecast_trend(&single).unwrap_err(),
            TsError::InsufficientData {
                required: 2,
                actual: 1
            }
        );
    }

    #[test]
    fn test_forecast_trend_next_period() {
        let start = Period::new(2016, 11).unwrap();
        let series = TimeSeries::from_values(start, &[1.0, 2.0, 3.0]).unwrap();
        let forecast = forecast_trend(&series).unwrap();

        assert_eq!(forecast.next_period, Period::new(2017, 2).unwrap());
        assert!((forecast.next_value - 4.0).abs() < 1e-10);
        assert!((forecast.slope - 1.0).abs() < 1e-10);
    }
}
