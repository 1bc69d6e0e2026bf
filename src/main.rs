//! funcplot demo - opens a window with a few sample plots.

use anyhow::{Context, Result};
use clap::Parser;
use funcplot::{fallible, Chart, ChartConfig, EvalError, Style, TrendLine};
use std::f64::consts::PI;
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Directives used when `RUST_LOG` is unset or unparsable.
const DEFAULT_LOG_FILTER: &str = "debug";

#[derive(Parser, Debug)]
#[command(name = "funcplot")]
#[command(about = "Plot sample functions and point sets", long_about = None)]
struct Args {
    /// JSON file with window and chart titles
    #[arg(long)]
    config: Option<PathBuf>,

    /// Enable logging to specified file
    #[arg(long)]
    log: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if let Some(log_path) = &args.log {
        let log_path = log_path.clone();
        let subscriber = FmtSubscriber::builder()
            .with_env_filter(log_filter(std::env::var(EnvFilter::DEFAULT_ENV).ok()))
            .with_writer(move || {
                std::fs::OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(&log_path)
                    .expect("Failed to open log file")
            })
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
    }

    let config = match &args.config {
        Some(path) => ChartConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => ChartConfig {
            chart_title: Some("Sample plots".to_string()),
            x_axis_title: Some("x".to_string()),
            y_axis_title: Some("y".to_string()),
            ..ChartConfig::default()
        },
    };

    let mut chart = Chart::with_config(config);
    chart.plot_function(f64::sin, -2.0 * PI, 2.0 * PI, "sin(x)")?;
    chart.plot_function(|x: f64| 1.0 / x, -2.0 * PI, 2.0 * PI, "1/x")?;
    chart.plot_function(
        fallible(|x: f64| {
            if x.cos().abs() < 1e-3 {
                Err(EvalError::new("tan(x) undefined"))
            } else {
                Ok(x.tan())
            }
        }),
        -PI,
        PI,
        "tan(x)",
    )?;
    chart.plot_points_styled(
        vec![-4.0, -2.0, 0.0, 2.0, 4.0],
        vec![3.0, -1.0, 0.5, -2.0, 1.5],
        "samples",
        Style::Marker,
    )?;
    chart.plot_points_with_trends(
        vec![-6.0, -3.0, 0.0, 3.0, 6.0],
        vec![-3.0, -1.5, 0.0, 1.5, 3.0],
        "trend",
        [Some(TrendLine::Linear)],
    )?;

    tracing::info!("Starting funcplot");
    chart.display()?;
    tracing::info!("funcplot exited");
    Ok(())
}

/// Build the log filter from `RUST_LOG`-style directives.
fn log_filter(directives: Option<String>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_filter_defaults_to_debug() {
        assert_eq!(log_filter(None).to_string(), DEFAULT_LOG_FILTER);
    }

    #[test]
    fn log_filter_uses_given_directives() {
        let filter = log_filter(Some("funcplot=trace".to_string()));
        assert_eq!(filter.to_string(), "funcplot=trace");
    }
}
