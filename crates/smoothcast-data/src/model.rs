//! Observation types and monthly reduction.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use smoothcast_core::series::Period;

/// A single dated opening price.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub date: NaiveDate,
    /// Opening price
    pub open: f64,
}

impl Observation {
    pub fn new(date: NaiveDate, open: f64) -> Self {
        Self { date, open }
    }

    /// Calendar month the observation falls in.
    pub fn period(&self) -> Period {
        Period::from_date(self.date)
    }
}

/// Sort ascending by date and keep the first observation of each calendar month.
pub fn monthly_first(mut observations: Vec<Observation>) -> Vec<Observation> {
    observations.sort_by_key(|o| o.date);
    observations.dedup_by_key(|o| o.period());
    observations
}

/// Extract opening prices.
pub fn opening_prices(observations: &[Observation]) -> Vec<f64> {
    observations.iter().map(|o| o.open).collect()
}
