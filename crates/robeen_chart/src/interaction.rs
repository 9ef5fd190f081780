/// Instruction for the tooltip collaborator.
///
/// Commands carry everything the tooltip needs; there is no shared cursor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TooltipCommand {
    Show {
        data_index: usize,
        pointer_x: f32,
        pointer_y: f32,
    },
    Hide,
}

/// Raw pointer input forwarded by the surface adapter.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    /// Pointer moved over the bar for `data_index`
    Move {
        data_index: usize,
        pointer_x: f32,
        pointer_y: f32,
    },
    /// Pointer left the bar
    Leave,
}

/// Maps pointer events on bars to tooltip commands, one command per event.
///
/// The only state is the current hover target, kept for callers that want
/// to highlight it; commands never depend on it.
#[derive(Clone, Copy, Debug, Default)]
pub struct InteractionRouter {
    hovered: Option<usize>,
}

impl InteractionRouter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    pub fn on_pointer_move(
        &mut self,
        data_index: usize,
        pointer_x: f32,
        pointer_y: f32,
    ) -> TooltipCommand {
        self.hovered = Some(data_index);
        TooltipCommand::Show {
            data_index,
            pointer_x,
            pointer_y,
        }
    }

    pub fn on_pointer_leave(&mut self) -> TooltipCommand {
        self.hovered = None;
        TooltipCommand::Hide
    }

    pub fn route(&mut self, event: PointerEvent) -> TooltipCommand {
        match event {
            PointerEvent::Move {
                data_index,
                pointer_x,
                pointer_y,
            } => self.on_pointer_move(data_index, pointer_x, pointer_y),
            PointerEvent::Leave => self.on_pointer_leave(),
        }
    }
}
