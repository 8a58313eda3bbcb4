//! Console and JSON output.

use anyhow::{Context, Result};
use serde::Serialize;
use smoothcast_core::prelude::{SmoothedSeries, TrendForecast};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Everything a run produced, written with `--output`.
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub source: &'a str,
    pub alpha: f64,
    pub smoothing: &'a SmoothedSeries,
    pub forecast: &'a TrendForecast,
}

/// Print the smoothed table and its one-step error.
pub fn print_smoothing<W: Write>(out: &mut W, smoothed: &SmoothedSeries) -> Result<()> {
    writeln!(out, "{:<8} {:>12} {:>12}", "Period", "Open", "Smoothed")?;
    for row in smoothed.rows() {
        let raw = row
            .raw
            .map(|v| format!("{:.4}", v))
            .unwrap_or_else(|| "-".to_string());
        writeln!(out, "{:<8} {:>12} {:>12.4}", row.period, raw, row.smoothed)?;
    }
    if let Some(mse) = smoothed.mse() {
        writeln!(
            out,
            "One-step-ahead MSE with alpha {}: {:.4}",
            smoothed.alpha(),
            mse
        )?;
    }
    Ok(())
}

/// Print the trend forecast.
pub fn print_forecast<W: Write>(out: &mut W, forecast: &TrendForecast) -> Result<()> {
    writeln!(out, "---------- Performing Linear Regression ----------")?;
    writeln!(
        out,
        "The predicted value for {} is: {:.4}",
        forecast.next_period, forecast.next_value
    )?;
    writeln!(out, "The trend slope (coefficient) is: {:.4}", forecast.slope)?;
    Ok(())
}

/// Write the report as pretty JSON.
pub fn write_json(path: &Path, report: &Report<'_>) -> Result<()> {
    let mut file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    serde_json::to_writer_pretty(&mut file, report).context("Failed to write JSON")?;
    writeln!(file)?;
    tracing::info!(path = %path.display(), "report written");
    Ok(())
}
