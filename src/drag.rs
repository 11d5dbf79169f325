//! Drag latch: a four-finger fist holds the left button down.

use crate::{
    finger_status::FingerPostureFlags,
    input::{InputCommand, MouseButton},
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DragState {
    #[default]
    Released,
    Held,
}

#[derive(Debug, Clone, Default)]
pub struct DragStateMachine {
    state: DragState,
}

impl DragStateMachine {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: DragState::Released,
        }
    }

    /// Advance one frame, returning a press or release on state changes
    pub fn update(&mut self, flags: &FingerPostureFlags) -> Option<InputCommand> {
        match (self.state, flags.is_drag_fist()) {
            (DragState::Released, true) => {
                self.state = DragState::Held;
                Some(InputCommand::MouseDown(MouseButton::Left))
            }
            (DragState::Held, false) => {
                self.state = DragState::Released;
                Some(InputCommand::MouseUp(MouseButton::Left))
            }
            _ => None,
        }
    }

    #[must_use]
    pub const fn state(&self) -> DragState {
        self.state
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.state == DragState::Held
    }
}
