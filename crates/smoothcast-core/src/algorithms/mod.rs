//! Smoothing and forecasting algorithms
//!
//! Both algorithms borrow a [`TimeSeries`](crate::series::TimeSeries) and
//! build fresh output; neither keeps state between calls.

pub mod exponential_smoothing;
pub mod linear_regression;
