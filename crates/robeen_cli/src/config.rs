//! Input file handling

use anyhow::{Context, Result};
use robeen_chart::{ChartConfig, MeasurementSet};
use std::fs;
use std::path::Path;

/// Load chart configuration from a TOML file, or defaults when none is given.
pub fn load_chart_config(path: Option<&Path>) -> Result<ChartConfig> {
    let Some(path) = path else {
        return Ok(ChartConfig::default());
    };

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    ChartConfig::from_toml_str(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))
}

/// Load a JMH JSON report.
pub fn load_results(path: &Path) -> Result<MeasurementSet> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    robeen_chart::jmh::parse_jmh(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))
}
