//! robeen - render JMH benchmark results as a horizontal bar chart
//!
//! Run with:
//! `cargo run -p robeen_cli -- results.json --config chart.toml -o chart.svg`
//!
//! Log verbosity follows `RUST_LOG` (default: `info`).

mod config;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use robeen_chart::prelude::*;
use robeen_chart::render::render_message;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "robeen", version, about = "Render JMH results as an SVG bar chart")]
struct Cli {
    /// JMH JSON result file
    results: PathBuf,

    /// Chart configuration (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Surface width in pixels
    #[arg(long, default_value_t = 800.0)]
    width: f32,

    /// Surface height in pixels
    #[arg(long, default_value_t = 400.0)]
    height: f32,

    /// Output file (stdout when omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let chart_config = config::load_chart_config(cli.config.as_deref())?;
    let measurements = config::load_results(&cli.results)?;
    tracing::info!(
        results = %cli.results.display(),
        measurements = measurements.len(),
        "loaded benchmark results"
    );

    let mut svg = SvgCanvas::new(cli.width, cli.height);
    let margin = chart_config.margin;

    let outcome = match BenchmarkChart::new(measurements, chart_config) {
        Ok(mut chart) => Ok(chart.redraw(&mut svg)),
        Err(err) => {
            // A broken configuration still produces a document, showing the error.
            render_message(&mut svg, &margin, &err.to_string());
            Err(err)
        }
    };

    write_output(cli.output.as_deref(), &svg.to_svg())?;

    match outcome? {
        DrawOutcome::Drawn(state) => {
            tracing::info!(bars = state.geometry.bars.len(), "chart rendered");
        }
        DrawOutcome::NoData => tracing::warn!("no positive scores; rendered placeholder"),
        DrawOutcome::Deferred => tracing::warn!("surface unavailable; nothing rendered"),
    }
    Ok(())
}

fn write_output(path: Option<&Path>, doc: &str) -> Result<()> {
    match path {
        Some(path) => {
            fs::write(path, doc).with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!(output = %path.display(), "wrote chart");
        }
        None => print!("{doc}"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_arguments() {
        let cli = Cli::parse_from(["robeen", "r.json", "-c", "c.toml", "--width", "1024"]);
        assert_eq!(cli.results, PathBuf::from("r.json"));
        assert_eq!(cli.config, Some(PathBuf::from("c.toml")));
        assert_eq!(cli.width, 1024.0);
        assert_eq!(cli.height, 400.0);
        assert!(cli.output.is_none());
    }
}
