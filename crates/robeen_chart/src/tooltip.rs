//! Tooltip lifecycle.
//!
//! The tooltip starts `Unready` until its display surface is attached.
//! Commands that arrive before then are dropped, not queued: a late `Show`
//! for a pointer that has since moved on would be wrong anyway.

use crate::interaction::TooltipCommand;
use crate::measurement::MeasurementSet;

/// What the tooltip displays for a hovered bar.
#[derive(Clone, Debug, PartialEq)]
pub struct TooltipContent {
    pub benchmark: String,
    pub score: f32,
}

/// Display side of the tooltip, provided by the host.
pub trait TooltipSurface {
    fn show(&mut self, data_index: usize, content: &TooltipContent, x: f32, y: f32);
    fn hide(&mut self);
}

impl<T: TooltipSurface + ?Sized> TooltipSurface for Box<T> {
    fn show(&mut self, data_index: usize, content: &TooltipContent, x: f32, y: f32) {
        (**self).show(data_index, content, x, y);
    }

    fn hide(&mut self) {
        (**self).hide();
    }
}

#[derive(Debug)]
pub enum TooltipState<S> {
    Unready,
    Ready(S),
}

/// Result of applying one command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Delivery {
    Delivered,
    /// Tooltip not attached yet
    Dropped,
    /// `Show` for an index with no measurement
    Ignored,
}

#[derive(Debug)]
pub struct Tooltip<S> {
    state: TooltipState<S>,
    dropped: usize,
}

impl<S> Default for Tooltip<S> {
    fn default() -> Self {
        Self {
            state: TooltipState::Unready,
            dropped: 0,
        }
    }
}

impl<S: TooltipSurface> Tooltip<S> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach the display surface; the tooltip is `Ready` from here on.
    pub fn attach(&mut self, surface: S) {
        if self.dropped > 0 {
            tracing::debug!(dropped = self.dropped, "tooltip attached after dropping commands");
        }
        self.state = TooltipState::Ready(surface);
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.state, TooltipState::Ready(_))
    }

    pub fn state(&self) -> &TooltipState<S> {
        &self.state
    }

    pub fn surface(&self) -> Option<&S> {
        match &self.state {
            TooltipState::Ready(s) => Some(s),
            TooltipState::Unready => None,
        }
    }

    /// Commands dropped while unready.
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    pub fn apply(&mut self, command: TooltipCommand, measurements: &MeasurementSet) -> Delivery {
        let TooltipState::Ready(surface) = &mut self.state else {
            self.dropped += 1;
            tracing::debug!(?command, "tooltip not ready; command dropped");
            return Delivery::Dropped;
        };

        match command {
            TooltipCommand::Show {
                data_index,
                pointer_x,
                pointer_y,
            } => {
                let Some(m) = measurements.get(data_index) else {
                    tracing::debug!(data_index, "tooltip show for unknown index ignored");
                    return Delivery::Ignored;
                };
                let content = TooltipContent {
                    benchmark: m.label.clone(),
                    score: m.value,
                };
                surface.show(data_index, &content, pointer_x, pointer_y);
            }
            TooltipCommand::Hide => surface.hide(),
        }
        Delivery::Delivered
    }
}
