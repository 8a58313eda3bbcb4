//! Data source trait definition.

use crate::error::{DataError, Result};
use crate::model::{monthly_first, Observation};
use smoothcast_core::series::TimeSeries;

/// Number of monthly observations used for smoothing and forecasting.
pub const DEFAULT_PERIODS: usize = 8;

/// Trait for sources of dated opening prices.
pub trait DataSource {
    /// Data source name, used in logs and reports.
    fn name(&self) -> &str;

    /// All observations the source provides, in any order.
    fn observations(&self) -> Result<Vec<Observation>>;
}

/// Load a monthly series of `periods` months from `source`.
///
/// Observations are sorted, reduced to the first one per calendar month and
/// truncated to the earliest `periods` months. Months missing in between are
/// rejected rather than guessed.
pub fn load_series(source: &dyn DataSource, periods: usize) -> Result<TimeSeries> {
    if periods == 0 {
        return Err(DataError::ConfigError(
            "periods must be at least 1".to_string(),
        ));
    }

    let observations = source.observations()?;
    tracing::debug!(
        source = source.name(),
        rows = observations.len(),
        "read observations"
    );

    let monthly = monthly_first(observations);
    if monthly.len() < periods {
        return Err(DataError::InsufficientRows {
            required: periods,
            actual: monthly.len(),
        });
    }

    let points = monthly
        .iter()
        .take(periods)
        .map(|o| (o.period(), o.open))
        .collect();
    let series = TimeSeries::new(points)?;

    tracing::info!(
        source = source.name(),
        months = series.len(),
        "loaded monthly series"
    );
    Ok(series)
}
