//! robeen_chart
//!
//! Horizontal bar chart for benchmark results (benchmark name → score).
//!
//! The crate is split along the data flow:
//! - measurements → [`Scales`] → [`Geometry`]: pure, surface-agnostic layout
//! - pointer events → [`InteractionRouter`] → [`TooltipCommand`] → [`Tooltip`]
//! - [`BenchmarkChart`] ties both to a [`RenderSurface`] and keeps the
//!   [`ChartState`] of the last redraw

mod error;

pub mod axis;
pub mod chart;
pub mod config;
pub mod format;
pub mod geometry;
pub mod interaction;
pub mod jmh;
pub mod layout;
pub mod measurement;
pub mod palette;
pub mod render;
pub mod scale;
pub mod tooltip;

pub use chart::{BenchmarkChart, ChartHandle, ChartState, DrawOutcome};
pub use config::ChartConfig;
pub use error::{ChartError, Result};
pub use geometry::{BarRect, Geometry};
pub use interaction::{InteractionRouter, PointerEvent, TooltipCommand};
pub use layout::{Margin, PlotArea, Size};
pub use measurement::{category_key_of, Measurement, MeasurementSet};
pub use scale::Scales;
pub use tooltip::{Tooltip, TooltipSurface};

/// Common imports for chart users.
pub mod prelude {
    pub use crate::axis::{AxisTick, GridLine, Orientation};
    pub use crate::chart::{BenchmarkChart, ChartHandle, ChartState, DrawOutcome};
    pub use crate::config::{AxisConfig, ChartConfig, XAxisConfig, YAxisConfig};
    pub use crate::error::{ChartError, Result};
    pub use crate::format::{format, FormatSpec};
    pub use crate::geometry::{BarRect, Geometry};
    pub use crate::interaction::{InteractionRouter, PointerEvent, TooltipCommand};
    pub use crate::jmh::parse_jmh;
    pub use crate::layout::{Margin, PlotArea, Size};
    pub use crate::measurement::{category_key_of, Measurement, MeasurementSet};
    pub use crate::palette::Palette;
    pub use crate::render::{Canvas, RenderSurface, SvgCanvas};
    pub use crate::scale::{BandScale, CategoryBands, LinearScale, Scales};
    pub use crate::tooltip::{Tooltip, TooltipContent, TooltipSurface};
}
