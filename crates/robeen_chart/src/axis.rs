use crate::scale::{CategoryBands, LinearScale};

/// Opacity of grid lines.
pub const GRID_OPACITY: f32 = 0.1;

/// One axis tick: plot-local pixel position along the axis plus its label.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisTick {
    pub position: f32,
    pub text: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    /// Spans the plot height at an x position
    Vertical,
    /// Spans the plot width at a y position
    Horizontal,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridLine {
    pub orientation: Orientation,
    pub position: f32,
    pub length: f32,
    pub opacity: f32,
}

/// Ticks for the bottom (value) axis.
pub fn build_bottom_ticks<F>(scale: &LinearScale, tick_count: usize, formatter: F) -> Vec<AxisTick>
where
    F: Fn(f32) -> String,
{
    scale
        .ticks(tick_count)
        .into_iter()
        .map(|v| AxisTick {
            position: scale.map(v),
            text: formatter(v),
        })
        .collect()
}

/// Ticks for the left (category) axis, one per band, at the band centre.
pub fn build_left_ticks(bands: &CategoryBands) -> Vec<AxisTick> {
    bands
        .keys()
        .filter_map(|key| {
            bands.center(key).map(|position| AxisTick {
                position,
                text: key.to_string(),
            })
        })
        .collect()
}

pub fn grid_lines(ticks: &[AxisTick], orientation: Orientation, length: f32) -> Vec<GridLine> {
    ticks
        .iter()
        .map(|t| GridLine {
            orientation,
            position: t.position,
            length,
            opacity: GRID_OPACITY,
        })
        .collect()
}
