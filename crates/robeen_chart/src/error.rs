//! Chart error types

use thiserror::Error;

/// Errors raised while setting up or feeding a chart.
///
/// Scale, geometry and interaction code never fails; degenerate input maps
/// to degenerate output. Only setup (configuration, ingestion) and the
/// surface adapter report errors.
#[derive(Error, Debug)]
pub enum ChartError {
    /// Configuration rejected at chart construction
    #[error("invalid chart configuration: {0}")]
    InvalidConfiguration(String),

    /// The render surface cannot report its dimensions yet
    #[error("render surface unavailable: {0}")]
    SurfaceUnavailable(String),

    /// Benchmark result document could not be parsed
    #[error("failed to parse benchmark results: {0}")]
    Parse(#[from] serde_json::Error),

    /// Configuration document could not be parsed
    #[error("failed to parse chart configuration: {0}")]
    Config(#[from] toml::de::Error),
}

/// Result type for chart operations
pub type Result<T> = std::result::Result<T, ChartError>;
