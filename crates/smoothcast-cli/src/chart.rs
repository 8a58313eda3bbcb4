//! SVG line chart of the raw and smoothed series.

use anyhow::{anyhow, Result};
use plotters::prelude::*;
use smoothcast_core::prelude::SmoothedSeries;
use std::path::Path;

const CAPTION: &str = "Default vs Exponential Smoothed";
const RAW_LABEL: &str = "Default Value (Open)";
const SMOOTHED_LABEL: &str = "Exponential Smoothed";

type Points = Vec<(i32, f64)>;

/// Raw observations and smoothed values keyed by row index.
///
/// The extended period has no raw point.
pub fn chart_points(smoothed: &SmoothedSeries) -> (Points, Points) {
    let raw = smoothed
        .rows()
        .enumerate()
        .filter_map(|(i, row)| row.raw.map(|v| (i as i32, v)))
        .collect();
    let smooth = smoothed
        .rows()
        .enumerate()
        .map(|(i, row)| (i as i32, row.smoothed))
        .collect();
    (raw, smooth)
}

/// Y-axis bounds covering both series with 10% padding.
pub fn value_range(smoothed: &SmoothedSeries) -> (f64, f64) {
    let values = smoothed
        .raw()
        .iter()
        .flatten()
        .chain(smoothed.smoothed().iter())
        .copied();

    let (min, max) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });

    // Avoid a zero-height axis for flat series
    let range = (max - min).max(1e-8);
    let padding = range * 0.1;
    (min - padding, max + padding)
}

/// Render the chart to an SVG file at `path`.
pub fn render(path: &Path, smoothed: &SmoothedSeries) -> Result<()> {
    let (raw, smooth) = chart_points(smoothed);
    let (y_min, y_max) = value_range(smoothed);
    let x_max = (smoothed.len() as i32 - 1).max(1);
    let periods = smoothed.periods();

    let root = SVGBackend::new(path, (960, 540)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| anyhow!("Failed to fill canvas: {}", e))?;

    let mut chart = ChartBuilder::on(&root)
        .caption(CAPTION, ("sans-serif", 28).into_font())
        .margin(15)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0..x_max, y_min..y_max)
        .map_err(|e| anyhow!("Failed to build chart: {}", e))?;

    let label_period = |x: &i32| {
        periods
            .get(*x as usize)
            .map(|p| p.to_string())
            .unwrap_or_default()
    };

    chart
        .configure_mesh()
        .x_labels(periods.len())
        .x_label_formatter(&label_period)
        .x_desc("Period")
        .y_desc("Open")
        .draw()
        .map_err(|e| anyhow!("Failed to draw mesh: {}", e))?;

    chart
        .draw_series(LineSeries::new(raw, &RED))
        .map_err(|e| anyhow!("Failed to draw series: {}", e))?
        .label(RAW_LABEL)
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED));

    chart
        .draw_series(LineSeries::new(smooth, &BLUE))
        .map_err(|e| anyhow!("Failed to draw series: {}", e))?
        .label(SMOOTHED_LABEL)
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE));

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(|e| anyhow!("Failed to draw legend: {}", e))?;

    root.present()
        .map_err(|e| anyhow!("Failed to write {}: {}", path.display(), e))?;

    tracing::info!(path = %path.display(), alpha = smoothed.alpha(), "rendered chart");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use smoothcast_core::prelude::*;

    fn smoothed(values: &[f64]) -> SmoothedSeries {
        let series = TimeSeries::from_values(Period::new(2016, 1).unwrap(), values).unwrap();
        exponential_smoothing(&series, 0.5).unwrap()
    }

    #[test]
    fn test_chart_points_skip_extended_raw() {
        let (raw, smooth) = chart_points(&smoothed(&[10.0, 12.0, 11.0]));

        assert_eq!(raw, vec![(0, 10.0), (1, 12.0), (2, 11.0)]);
        assert_eq!(smooth.len(), 4);
        assert_eq!(smooth[3].0, 3);
    }

    #[test]
    fn test_value_range_pads_both_series() {
        let (lo, hi) = value_range(&smoothed(&[10.0, 20.0]));
        assert!((lo - 9.0).abs() < 1e-10);
        assert!((hi - 21.0).abs() < 1e-10);
    }

    #[test]
    fn test_value_range_flat_series_has_height() {
        let (lo, hi) = value_range(&smoothed(&[5.0, 5.0, 5.0]));
        assert!(hi > lo);
        assert!(lo < 5.0 && hi > 5.0);
    }
}
