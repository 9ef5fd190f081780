use serde::{Deserialize, Serialize};

/// Pixel size of a render surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Space reserved around the plot for axes and labels.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Margin {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Default for Margin {
    fn default() -> Self {
        Self {
            top: 20.0,
            right: 20.0,
            bottom: 30.0,
            left: 40.0,
        }
    }
}

impl Margin {
    pub fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    pub fn is_valid(&self) -> bool {
        [self.top, self.right, self.bottom, self.left]
            .iter()
            .all(|v| v.is_finite() && *v >= 0.0)
    }
}

/// Plotting area inside the margins, in plot-local pixels.
///
/// Recomputed from the surface bounds on every redraw.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotArea {
    pub width: f32,
    pub height: f32,
}

impl PlotArea {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    pub fn from_bounds(bounds: Size, margin: &Margin) -> Self {
        let w = bounds.width - margin.left - margin.right;
        let h = bounds.height - margin.top - margin.bottom;
        if w <= 0.0 || h <= 0.0 {
            tracing::warn!(
                width = bounds.width,
                height = bounds.height,
                "surface smaller than its margins; plot area clamped"
            );
        }
        Self::new(w, h)
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plot_area_subtracts_margins() {
        let margin = Margin::new(10.0, 20.0, 30.0, 40.0);
        let plot = PlotArea::from_bounds(Size::new(500.0, 300.0), &margin);
        assert_eq!(plot, PlotArea::new(440.0, 260.0));
        assert!(!plot.is_empty());
    }

    #[test]
    fn undersized_surface_clamps_to_zero() {
        let plot = PlotArea::from_bounds(Size::new(30.0, 300.0), &Margin::default());
        assert_eq!(plot.width, 0.0);
        assert!(plot.is_empty());
    }

    #[test]
    fn negative_or_nan_margins_are_invalid() {
        assert!(Margin::default().is_valid());
        assert!(!Margin::new(-1.0, 0.0, 0.0, 0.0).is_valid());
        assert!(!Margin::new(0.0, f32::NAN, 0.0, 0.0).is_valid());
    }
}
