//! Chart layout and style configuration

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, Result};
use crate::format::{FormatSpec, MAX_FIXED_DECIMALS};
use crate::layout::Margin;
use crate::palette::Palette;

/// Top-level chart configuration.
///
/// Every field has a default, so a partial TOML document (or none at all)
/// is enough. Keys are camelCase (`gridVisible`, `sortData`).
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChartConfig {
    pub margin: Margin,
    pub axis: AxisConfig,
    /// Bar fill colours, cycled by bar index
    pub colors: Vec<String>,
    /// Fraction of each band step left as gap between bars
    pub padding: f32,
    /// Order bands by ascending value instead of source order
    pub sort_data: bool,
    /// Target number of x-axis ticks
    pub x_tick_count: usize,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            margin: Margin::default(),
            axis: AxisConfig::default(),
            colors: default_colors(),
            padding: 0.2,
            sort_data: false,
            x_tick_count: 10,
        }
    }
}

/// Upper bound for `xTickCount`.
pub const MAX_X_TICK_COUNT: usize = 100;

fn default_colors() -> Vec<String> {
    ["#4e79a7", "#f28e2c", "#e15759", "#76b7b2", "#59a14f", "#edc949"]
        .iter()
        .map(|c| c.to_string())
        .collect()
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct AxisConfig {
    pub x: XAxisConfig,
    pub y: YAxisConfig,
}

/// Value axis (bottom).
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct XAxisConfig {
    pub visible: bool,
    pub grid_visible: bool,
    pub format: FormatSpec,
}

impl Default for XAxisConfig {
    fn default() -> Self {
        Self {
            visible: true,
            grid_visible: true,
            format: FormatSpec::Compact,
        }
    }
}

/// Category axis (left).
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct YAxisConfig {
    pub visible: bool,
    pub grid_visible: bool,
}

impl Default for YAxisConfig {
    fn default() -> Self {
        Self {
            visible: true,
            grid_visible: true,
        }
    }
}

impl ChartConfig {
    /// Parse a TOML document. Missing keys take their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Check setup preconditions. Failing here aborts chart construction.
    pub fn validate(&self) -> Result<()> {
        if !self.margin.is_valid() {
            return Err(ChartError::InvalidConfiguration(format!(
                "margins must be finite and non-negative, got {:?}",
                self.margin
            )));
        }
        if !(self.padding.is_finite() && (0.0..1.0).contains(&self.padding)) {
            return Err(ChartError::InvalidConfiguration(format!(
                "padding must be in [0, 1), got {}",
                self.padding
            )));
        }
        if self.x_tick_count > MAX_X_TICK_COUNT {
            return Err(ChartError::InvalidConfiguration(format!(
                "xTickCount must be at most {MAX_X_TICK_COUNT}, got {}",
                self.x_tick_count
            )));
        }
        if let FormatSpec::Fixed(n) = self.axis.x.format {
            if n > MAX_FIXED_DECIMALS {
                return Err(ChartError::InvalidConfiguration(format!(
                    "fixed format allows at most {MAX_FIXED_DECIMALS} decimals, got {n}"
                )));
            }
        }
        self.palette().map(|_| ())
    }

    pub fn palette(&self) -> Result<Palette> {
        Palette::new(self.colors.clone())
    }
}
