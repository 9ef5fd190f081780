//! Pixel-space chart geometry.
//!
//! [`Geometry::build`] turns measurements and the scales of a redraw pass into
//! axis ticks, grid lines and bar rectangles. It is pure: the same inputs give
//! the same geometry, which is what lets a resize simply rebuild everything.

use crate::axis::{
    build_bottom_ticks, build_left_ticks, grid_lines, AxisTick, GridLine, Orientation,
};
use crate::config::AxisConfig;
use crate::format::format;
use crate::measurement::MeasurementSet;
use crate::palette::Palette;
use crate::scale::Scales;

/// A bar in plot-local pixels. `x` is always 0 (bars grow rightwards).
#[derive(Clone, Debug, PartialEq)]
pub struct BarRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub color: String,
    pub data_index: usize,
}

impl BarRect {
    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px <= self.x + self.width && py >= self.y && py <= self.y + self.height
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Geometry {
    /// Bars in source order; non-positive and non-finite widths are dropped.
    pub bars: Vec<BarRect>,
    pub x_ticks: Vec<AxisTick>,
    pub y_ticks: Vec<AxisTick>,
    pub x_grid: Vec<GridLine>,
    pub y_grid: Vec<GridLine>,
}

impl Geometry {
    pub fn build(
        measurements: &MeasurementSet,
        scales: &Scales,
        palette: &Palette,
        axis: &AxisConfig,
        x_tick_count: usize,
    ) -> Self {
        let plot = scales.plot;

        // Grid lines reuse tick positions even when the axis itself is hidden.
        let value_ticks = if axis.x.visible || axis.x.grid_visible {
            build_bottom_ticks(&scales.x, x_tick_count, |v| format(&axis.x.format, v))
        } else {
            Vec::new()
        };
        let category_ticks = if axis.y.visible || axis.y.grid_visible {
            build_left_ticks(&scales.y)
        } else {
            Vec::new()
        };

        let x_grid = if axis.x.grid_visible {
            grid_lines(&value_ticks, Orientation::Vertical, plot.height)
        } else {
            Vec::new()
        };
        let y_grid = if axis.y.grid_visible {
            grid_lines(&category_ticks, Orientation::Horizontal, plot.width)
        } else {
            Vec::new()
        };

        let band_height = scales.y.band_width();
        let bars = measurements
            .iter()
            .enumerate()
            .filter_map(|(i, m)| {
                let width = scales.x.map(m.value);
                if !width.is_finite() || width <= 0.0 {
                    return None;
                }
                let y = scales.y.position_of_label(&m.label)?;
                Some(BarRect {
                    x: 0.0,
                    y,
                    width,
                    height: band_height,
                    color: palette.color_at(i).to_string(),
                    data_index: i,
                })
            })
            .collect();

        Self {
            bars,
            x_ticks: if axis.x.visible { value_ticks } else { Vec::new() },
            y_ticks: if axis.y.visible { category_ticks } else { Vec::new() },
            x_grid,
            y_grid,
        }
    }

    /// No bars to draw; the caller shows a "no data" placeholder instead.
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Topmost bar under a plot-local point.
    pub fn bar_at(&self, px: f32, py: f32) -> Option<&BarRect> {
        self.bars.iter().rev().find(|b| b.contains(px, py))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ChartConfig;
    use crate::layout::PlotArea;
    use crate::measurement::Measurement;

    fn build(values: &[(&str, f32)], config: &ChartConfig) -> Geometry {
        let set: MeasurementSet = values
            .iter()
            .map(|(l, v)| Measurement::new(*l, *v))
            .collect();
        let scales = Scales::build(&set, PlotArea::new(300.0, 100.0), config);
        Geometry::build(
            &set,
            &scales,
            &config.palette().unwrap(),
            &config.axis,
            config.x_tick_count,
        )
    }

    #[test]
    fn zero_and_negative_values_are_dropped() {
        let g = build(
            &[("b.a", 100.0), ("b.zero", 0.0), ("b.neg", -5.0), ("b.nan", f32::NAN)],
            &ChartConfig::default(),
        );
        assert_eq!(g.bars.len(), 1);
        assert_eq!(g.bars[0].data_index, 0);
        assert_eq!(g.bars[0].width, 300.0);
    }

    #[test]
    fn infinite_values_never_become_bars() {
        let g = build(
            &[("b.a", 100.0), ("b.inf", f32::INFINITY), ("b.ninf", f32::NEG_INFINITY)],
            &ChartConfig::default(),
        );
        assert_eq!(g.bars.len(), 1);
        assert_eq!(g.bars[0].data_index, 0);
        assert!(g.bars.iter().all(|b| b.width.is_finite() && b.width <= 300.0));
    }

    #[test]
    fn largest_finite_value_spans_the_plot() {
        let g = build(&[("b.a", f32::MAX), ("b.b", 1.0)], &ChartConfig::default());
        assert_eq!(g.bars[0].width, 300.0);
        assert!(!g.x_ticks.is_empty());
    }

    #[test]
    fn bars_keep_source_index_and_palette_colour() {
        let config = ChartConfig {
            colors: vec!["red".into(), "green".into()],
            ..ChartConfig::default()
        };
        let g = build(&[("x.a", 10.0), ("x.b", 0.0), ("x.c", 30.0)], &config);
        let idx: Vec<usize> = g.bars.iter().map(|b| b.data_index).collect();
        assert_eq!(idx, vec![0, 2]);
        assert_eq!(g.bars[0].color, "red");
        // colour follows the data index, not the filtered position
        assert_eq!(g.bars[1].color, "red");
        assert!(g.bars.iter().all(|b| b.x == 0.0));
    }

    #[test]
    fn hidden_axes_emit_no_ticks_but_keep_grid() {
        let mut config = ChartConfig::default();
        config.axis.x.visible = false;
        config.axis.y.visible = false;
        let g = build(&[("a", 120.0), ("b", 40.0)], &config);
        assert!(g.x_ticks.is_empty());
        assert!(g.y_ticks.is_empty());
        assert!(!g.x_grid.is_empty());
        assert_eq!(g.y_grid.len(), 2);
        assert!(g.x_grid.iter().all(|l| l.length == 100.0));
        assert!(g.y_grid.iter().all(|l| l.length == 300.0));
    }

    #[test]
    fn grid_can_be_disabled() {
        let mut config = ChartConfig::default();
        config.axis.x.grid_visible = false;
        config.axis.y.grid_visible = false;
        let g = build(&[("a", 120.0)], &config);
        assert!(g.x_grid.is_empty() && g.y_grid.is_empty());
        assert!(!g.x_ticks.is_empty());
        assert_eq!(g.y_ticks.len(), 1);
    }

    #[test]
    fn x_ticks_use_configured_format() {
        let mut config = ChartConfig::default();
        config.axis.x.format = ".1f".into();
        let g = build(&[("a", 150.0)], &config);
        assert_eq!(g.x_ticks[0].text, "0.0");
        assert_eq!(g.x_ticks.last().unwrap().text, "200.0");
    }

    #[test]
    fn bar_at_finds_the_bar_under_the_pointer() {
        let g = build(&[("a", 100.0), ("b", 50.0)], &ChartConfig::default());
        let second = &g.bars[1];
        let hit = g.bar_at(10.0, second.y + 1.0).unwrap();
        assert_eq!(hit.data_index, 1);
        assert!(g.bar_at(second.width + 5.0, second.y + 1.0).is_none());
    }
}
