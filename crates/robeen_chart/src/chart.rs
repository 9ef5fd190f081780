use std::sync::{Arc, Mutex};

use crate::config::ChartConfig;
use crate::error::Result;
use crate::geometry::Geometry;
use crate::interaction::{InteractionRouter, PointerEvent, TooltipCommand};
use crate::layout::{PlotArea, Size};
use crate::measurement::MeasurementSet;
use crate::palette::Palette;
use crate::render::{render_message, render_state, RenderSurface};
use crate::scale::Scales;
use crate::tooltip::{Tooltip, TooltipSurface};

pub const NO_DATA_MESSAGE: &str = "No data";

/// Everything computed by one redraw pass. Never mutated after creation.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartState {
    pub plot: PlotArea,
    pub scales: Scales,
    pub geometry: Geometry,
}

impl ChartState {
    pub fn compute(
        measurements: &MeasurementSet,
        plot: PlotArea,
        config: &ChartConfig,
        palette: &Palette,
    ) -> Self {
        let scales = Scales::build(measurements, plot, config);
        let geometry = Geometry::build(
            measurements,
            &scales,
            palette,
            &config.axis,
            config.x_tick_count,
        );
        Self {
            plot,
            scales,
            geometry,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawOutcome {
    Drawn(Arc<ChartState>),
    /// Nothing positive to plot; a placeholder was drawn instead
    NoData,
    /// Surface not attached yet; nothing happened
    Deferred,
}

pub type BoxedTooltipSurface = Box<dyn TooltipSurface + Send>;

/// Horizontal bar chart of benchmark scores.
///
/// Owns the configuration and dataset, the state of the last completed
/// redraw, and the tooltip wiring. Each redraw replaces the state wholesale;
/// pointer handling only ever reads the current one.
pub struct BenchmarkChart {
    measurements: MeasurementSet,
    config: ChartConfig,
    palette: Palette,
    current: Option<Arc<ChartState>>,
    router: InteractionRouter,
    tooltip: Tooltip<BoxedTooltipSurface>,
}

impl BenchmarkChart {
    /// Validates `config`; a rejected configuration means no chart at all.
    pub fn new(measurements: MeasurementSet, config: ChartConfig) -> Result<Self> {
        if let Err(err) = config.validate() {
            tracing::warn!(%err, "chart configuration rejected");
            return Err(err);
        }
        let palette = config.palette()?;
        Ok(Self {
            measurements,
            config,
            palette,
            current: None,
            router: InteractionRouter::new(),
            tooltip: Tooltip::new(),
        })
    }

    pub fn measurements(&self) -> &MeasurementSet {
        &self.measurements
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    /// State of the most recent completed redraw.
    pub fn current_state(&self) -> Option<Arc<ChartState>> {
        self.current.clone()
    }

    pub fn hovered(&self) -> Option<usize> {
        self.router.hovered()
    }

    /// Compute the state for a surface of the given size without drawing.
    pub fn layout(&self, bounds: Size) -> ChartState {
        let plot = PlotArea::from_bounds(bounds, &self.config.margin);
        ChartState::compute(&self.measurements, plot, &self.config, &self.palette)
    }

    /// Rebuild geometry from the surface's current size and draw it.
    ///
    /// Called on mount and on every resize.
    pub fn redraw<S: RenderSurface + ?Sized>(&mut self, surface: &mut S) -> DrawOutcome {
        let bounds = match surface.bounds() {
            Ok(b) => b,
            Err(err) => {
                tracing::debug!(%err, "redraw deferred");
                return DrawOutcome::Deferred;
            }
        };

        if !self.measurements.has_data() {
            tracing::debug!(len = self.measurements.len(), "no positive measurements");
            self.current = None;
            render_message(&mut *surface, &self.config.margin, NO_DATA_MESSAGE);
            return DrawOutcome::NoData;
        }

        let state = Arc::new(self.layout(bounds));
        render_state(&mut *surface, &state, &self.config.margin);
        tracing::debug!(
            width = bounds.width,
            height = bounds.height,
            bars = state.geometry.bars.len(),
            "chart redrawn"
        );
        self.current = Some(Arc::clone(&state));
        DrawOutcome::Drawn(state)
    }

    /// Attach the tooltip display; commands flow to it from now on.
    pub fn attach_tooltip<T: TooltipSurface + Send + 'static>(&mut self, surface: T) {
        self.tooltip.attach(Box::new(surface));
    }

    pub fn tooltip(&self) -> &Tooltip<BoxedTooltipSurface> {
        &self.tooltip
    }

    /// Route a pointer event on a bar and forward the command to the tooltip.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> TooltipCommand {
        let command = self.router.route(event);
        self.tooltip.apply(command, &self.measurements);
        command
    }

    /// Hit-test a surface-local pointer position against the current bars.
    ///
    /// Over a bar this behaves like a move on that bar; anywhere else like a
    /// leave.
    pub fn pointer_at(&mut self, x: f32, y: f32) -> TooltipCommand {
        let margin = self.config.margin;
        let hit = self
            .current
            .as_ref()
            .and_then(|state| state.geometry.bar_at(x - margin.left, y - margin.top))
            .map(|bar| bar.data_index);
        let event = match hit {
            Some(data_index) => PointerEvent::Move {
                data_index,
                pointer_x: x,
                pointer_y: y,
            },
            None => PointerEvent::Leave,
        };
        self.handle_pointer(event)
    }
}

/// Shared handle for hosts that redraw and route pointer events from
/// different callbacks.
#[derive(Clone)]
pub struct ChartHandle(pub Arc<Mutex<BenchmarkChart>>);

impl ChartHandle {
    pub fn new(chart: BenchmarkChart) -> Self {
        Self(Arc::new(Mutex::new(chart)))
    }

    /// State of the most recent redraw, if the lock is healthy.
    pub fn current_state(&self) -> Option<Arc<ChartState>> {
        self.0.lock().ok().and_then(|chart| chart.current_state())
    }
}
