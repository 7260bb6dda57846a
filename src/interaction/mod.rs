//! Gesture handling: drag tracking, pan and zoom range calculations, and the
//! series-to-axis resolution that decides which axes a gesture reaches.

mod assignment;
mod pan;
mod zoom;

use serde::{Deserialize, Serialize};

pub use assignment::{AxisAssignment, AxisAssignments, axes_for_series};
pub use pan::calculate_pan_for;
pub use zoom::{
    WHEEL_STEP_UNITS, ZoomResult, ZoomTransform, calculate_constrained_zoom_for, zoom_constraint,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum InteractionMode {
    #[default]
    Idle,
    Panning,
}

/// Pixel displacement of the pointer since the previous drag event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DragDelta {
    pub dx: f64,
    pub dy: f64,
}

/// Pointer state of one plot.
///
/// A drag is a sequence of moves between `on_pointer_down` and
/// `on_pointer_up`. Each move reports only the delta since the previous event,
/// so every step can be applied on its own and an aborted drag
/// (`on_pointer_leave`) needs no rollback.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InteractionState {
    mode: InteractionMode,
    cursor_x: f64,
    cursor_y: f64,
}

impl InteractionState {
    #[must_use]
    pub fn mode(self) -> InteractionMode {
        self.mode
    }

    #[must_use]
    pub fn cursor(self) -> (f64, f64) {
        (self.cursor_x, self.cursor_y)
    }

    #[must_use]
    pub fn is_panning(self) -> bool {
        self.mode == InteractionMode::Panning
    }

    pub fn on_pointer_down(&mut self, x: f64, y: f64) {
        self.cursor_x = x;
        self.cursor_y = y;
        self.mode = InteractionMode::Panning;
    }

    /// Records the pointer position; returns the drag delta while panning.
    pub fn on_pointer_move(&mut self, x: f64, y: f64) -> Option<DragDelta> {
        let delta = DragDelta {
            dx: x - self.cursor_x,
            dy: y - self.cursor_y,
        };
        self.cursor_x = x;
        self.cursor_y = y;
        if self.mode != InteractionMode::Panning || !delta.dx.is_finite() || !delta.dy.is_finite()
        {
            return None;
        }
        Some(delta)
    }

    pub fn on_pointer_up(&mut self) {
        self.mode = InteractionMode::Idle;
    }

    /// Cancels an in-flight drag. Ranges keep whatever the last move applied.
    pub fn on_pointer_leave(&mut self) {
        self.mode = InteractionMode::Idle;
    }
}
