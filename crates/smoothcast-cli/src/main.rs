//! # smoothcast
//!
//! Loads eight months of opening prices, lets the user tune an exponential
//! smoothing factor against a chart, then forecasts the next month with a
//! linear trend.

mod chart;
mod prompt;
mod report;

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use clap::Parser;
use prompt::{Console, SourceChoice};
use smoothcast_core::prelude::*;
use smoothcast_data::{
    load_series, CsvSource, DataSource, FetchConfig, YahooFinance, DEFAULT_PERIODS,
    DEFAULT_TICKER,
};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "smoothcast")]
#[command(version, about = "Exponential smoothing and trend forecast for monthly stock prices", long_about = None)]
struct Cli {
    /// CSV file with a date column and an Open column
    #[arg(short, long, env = "SMOOTHCAST_CSV")]
    csv: Option<PathBuf>,

    /// Ticker fetched when no CSV file is given
    #[arg(short, long, env = "SMOOTHCAST_TICKER", default_value = DEFAULT_TICKER)]
    ticker: String,

    /// First day of the remote window (YYYY-MM-DD)
    #[arg(long, default_value = "2016-01-01")]
    start: NaiveDate,

    /// Last day of the remote window (YYYY-MM-DD)
    #[arg(long, default_value = "2016-08-01")]
    end: NaiveDate,

    /// Smoothing factor in (0, 1] for the first attempt
    #[arg(short, long, env = "SMOOTHCAST_ALPHA")]
    alpha: Option<f64>,

    /// Number of monthly observations to use
    #[arg(short = 'n', long, default_value_t = DEFAULT_PERIODS)]
    periods: usize,

    /// Where to write the smoothing chart
    #[arg(long, default_value = "smoothing.svg")]
    chart: PathBuf,

    /// Write a JSON report of the accepted smoothing and the forecast
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Accept the first smoothing result without asking
    #[arg(short, long)]
    yes: bool,
}

/// How the tuning loop obtains and accepts alpha values.
#[derive(Debug, Clone, Default)]
struct TuneOptions {
    /// Alpha for the first attempt instead of prompting
    preset_alpha: Option<f64>,
    /// Accept the first result
    auto_accept: bool,
    /// Chart output, skipped when `None`
    chart: Option<PathBuf>,
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "smoothcast=info".into()),
        )
        .init();
}

fn main() -> ExitCode {
    // Load .env file (optional - won't fail if missing)
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();
    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());

    match run(&cli, &mut console) {
        Ok(()) => {
            tracing::debug!("exiting");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run<R: BufRead, W: Write>(cli: &Cli, console: &mut Console<R, W>) -> Result<()> {
    let source = select_source(cli, console)?;
    let series = load_series(source.as_ref(), cli.periods)
        .with_context(|| format!("Failed to load a series from {}", source.name()))?;

    let options = TuneOptions {
        preset_alpha: cli.alpha,
        auto_accept: cli.yes,
        chart: Some(cli.chart.clone()),
    };
    let smoothed = tune(&series, &options, console)?;

    let forecast = forecast_trend(&series).context("Trend forecast failed")?;
    report::print_forecast(console.out(), &forecast)?;

    if let Some(path) = &cli.output {
        let report = report::Report {
            source: source.name(),
            alpha: smoothed.alpha(),
            smoothing: &smoothed,
            forecast: &forecast,
        };
        report::write_json(path, &report)?;
    }

    Ok(())
}

fn select_source<R: BufRead, W: Write>(
    cli: &Cli,
    console: &mut Console<R, W>,
) -> Result<Box<dyn DataSource>> {
    if let Some(path) = &cli.csv {
        if !path.is_file() {
            bail!("CSV file {} does not exist", path.display());
        }
        return Ok(Box::new(CsvSource::new(path)));
    }

    let description = format!("{} from {} to {}", cli.ticker, cli.start, cli.end);
    match console.choose_source(&description)? {
        SourceChoice::Remote => {
            let config = FetchConfig::new(&cli.ticker, cli.start, cli.end)?;
            Ok(Box::new(YahooFinance::new(config)))
        }
        SourceChoice::Csv(path) => Ok(Box::new(CsvSource::new(path))),
    }
}

/// Smooth `series` until the user accepts a result.
///
/// Every attempt starts from the loaded series, never from a previous
/// attempt's output.
fn tune<R: BufRead, W: Write>(
    series: &TimeSeries,
    options: &TuneOptions,
    console: &mut Console<R, W>,
) -> Result<SmoothedSeries> {
    let suggested = suggest_alpha(series).ok();
    if let Some(alpha) = suggested {
        tracing::debug!(alpha, "suggested alpha");
    }

    let mut preset = options.preset_alpha;
    loop {
        let alpha = match preset.take() {
            Some(alpha) => alpha,
            None => console.read_alpha(suggested)?,
        };

        let smoothed = exponential_smoothing(series, alpha)
            .with_context(|| format!("Exponential smoothing with alpha {} failed", alpha))?;

        if let Some(path) = &options.chart {
            if let Err(e) = chart::render(path, &smoothed) {
                tracing::warn!("chart not rendered: {:#}", e);
            }
        }
        report::print_smoothing(console.out(), &smoothed)?;

        if options.auto_accept || console.confirm("Was this model appropriate? [Y/n]: ")? {
            tracing::debug!(alpha, "accepted smoothing");
            return Ok(smoothed);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;
    use std::io::Cursor;

    fn series() -> TimeSeries {
        TimeSeries::from_values(
            Period::new(2016, 1).unwrap(),
            &[10.0, 12.0, 11.0, 13.0, 14.0, 13.0, 15.0, 16.0],
        )
        .unwrap()
    }

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["smoothcast"]).unwrap();
        assert_eq!(cli.periods, 8);
        assert_eq!(cli.ticker, "AAPL");
        assert_eq!(cli.start, NaiveDate::from_ymd_opt(2016, 1, 1).unwrap());
        assert_eq!(cli.chart, PathBuf::from("smoothing.svg"));
        assert!(cli.csv.is_none());
        assert!(!cli.yes);
    }

    #[test]
    fn test_cli_rejects_bad_date() {
        assert!(Cli::try_parse_from(["smoothcast", "--start", "Jan 2016"]).is_err());
    }

    #[test]
    fn test_tune_retries_from_original_series() {
        let series = series();
        let snapshot = series.clone();
        let mut c = console("0.2\nn\n0.8\nwhat\n0.5\ny\n");

        let smoothed = tune(&series, &TuneOptions::default(), &mut c).unwrap();

        assert_eq!(smoothed.alpha(), 0.5);
        assert_eq!(smoothed, exponential_smoothing(&snapshot, 0.5).unwrap());
        assert_eq!(series, snapshot);
    }

    #[test]
    fn test_tune_preset_alpha_auto_accept() {
        let options = TuneOptions {
            preset_alpha: Some(1.0),
            auto_accept: true,
            chart: None,
        };
        let mut c = console("");
        let smoothed = tune(&series(), &options, &mut c).unwrap();
        assert_eq!(smoothed.smoothed()[1], 10.0);
        assert_eq!(smoothed.forecast(), 16.0);
    }

    #[test]
    fn test_tune_invalid_preset_alpha_fails() {
        let options = TuneOptions {
            preset_alpha: Some(2.0),
            auto_accept: true,
            chart: None,
        };
        assert!(tune(&series(), &options, &mut console("")).is_err());
    }

    #[test]
    fn test_tune_input_closed_is_error() {
        let mut c = console("0.5\nn\n");
        assert!(tune(&series(), &TuneOptions::default(), &mut c).is_err());
    }

    #[test]
    fn test_run_with_csv_writes_report() {
        let dir = tempfile::tempdir().unwrap();
        let csv = dir.path().join("prices.csv");
        std::fs::write(
            &csv,
            "Date,Open\n2016-01-04,10\n2016-02-01,12\n2016-03-01,11\n2016-04-01,13\n\
             2016-05-02,14\n2016-06-01,13\n2016-07-01,15\n2016-08-01,16\n",
        )
        .unwrap();
        let output = dir.path().join("report.json");

        let args: Vec<OsString> = vec![
            "smoothcast".into(),
            "--csv".into(),
            csv.into_os_string(),
            "--alpha".into(),
            "0.5".into(),
            "--yes".into(),
            "--chart".into(),
            dir.path().join("chart.svg").into_os_string(),
            "--output".into(),
            output.clone().into_os_string(),
        ];
        let cli = Cli::try_parse_from(args).unwrap();

        let mut c = console("");
        run(&cli, &mut c).unwrap();

        let text = String::from_utf8_lossy(c.out()).to_string();
        assert!(text.contains("The predicted value for 2016-09 is: 16.4286"));

        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(json["alpha"], 0.5);
        assert_eq!(json["forecast"]["next_period"], "2016-09");
    }

    #[test]
    fn test_run_missing_csv_fails() {
        let cli = Cli::try_parse_from(["smoothcast", "--csv", "/no/such/prices.csv"]).unwrap();
        assert!(run(&cli, &mut console("")).is_err());
    }
}
