//! Output side of the gesture engine: the commands it produces and the
//! capabilities it needs from the operating system.

use log::info;
use std::fmt;

/// Mouse button used for press and release commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
}

/// One input event to inject
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputCommand {
    /// Move the pointer to an absolute screen position in pixels
    MoveCursorTo { x: i32, y: i32 },
    /// Scroll by signed wheel ticks, positive is up
    ScrollBy(i32),
    /// Single left click
    Click,
    /// Single right click
    RightClick,
    /// Left double click
    DoubleClick,
    /// Press and hold a button
    MouseDown(MouseButton),
    /// Release a held button
    MouseUp(MouseButton),
}

impl fmt::Display for InputCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MoveCursorTo { x, y } => write!(f, "move to ({x}, {y})"),
            Self::ScrollBy(amount) => write!(f, "scroll {amount:+}"),
            Self::Click => f.write_str("click"),
            Self::RightClick => f.write_str("right click"),
            Self::DoubleClick => f.write_str("double click"),
            Self::MouseDown(button) => write!(f, "{button:?} button down"),
            Self::MouseUp(button) => write!(f, "{button:?} button up"),
        }
    }
}

/// Sink for input commands
///
/// Commands are fire-and-forget: implementations report their own failures
/// (typically by logging) and never hand them back to the gesture engine.
pub trait InputEmitter {
    /// Current pointer position in screen pixels
    fn cursor_position(&mut self) -> (i32, i32);

    /// Inject one command
    fn emit(&mut self, command: &InputCommand);
}

impl<E: InputEmitter + ?Sized> InputEmitter for Box<E> {
    fn cursor_position(&mut self) -> (i32, i32) {
        (**self).cursor_position()
    }

    fn emit(&mut self, command: &InputCommand) {
        (**self).emit(command);
    }
}

/// Source of the screen size, queried once at startup
pub trait DisplayGeometryProvider {
    /// Screen width and height in pixels
    fn screen_size(&self) -> (u32, u32);
}

/// Display with a fixed, configured size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedDisplay {
    pub width: u32,
    pub height: u32,
}

impl FixedDisplay {
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl DisplayGeometryProvider for FixedDisplay {
    fn screen_size(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

/// Emitter that only logs commands, for running without a display server
///
/// Moves are applied to a simulated pointer so relative motion accumulates
/// the same way it would on a real screen.
#[derive(Debug, Clone)]
pub struct LoggingEmitter {
    position: (i32, i32),
    emitted: usize,
}

impl LoggingEmitter {
    /// Create an emitter with the simulated pointer at the centre of `display`
    #[must_use]
    pub fn new(display: &impl DisplayGeometryProvider) -> Self {
        let (width, height) = display.screen_size();
        Self {
            position: (
                i32::try_from(width / 2).unwrap_or(i32::MAX),
                i32::try_from(height / 2).unwrap_or(i32::MAX),
            ),
            emitted: 0,
        }
    }

    /// Number of commands logged so far
    #[must_use]
    pub const fn emitted(&self) -> usize {
        self.emitted
    }
}

impl InputEmitter for LoggingEmitter {
    fn cursor_position(&mut self) -> (i32, i32) {
        self.position
    }

    fn emit(&mut self, command: &InputCommand) {
        if let InputCommand::MoveCursorTo { x, y } = *command {
            self.position = (x, y);
        }
        self.emitted += 1;
        info!("[dry-run] {}", command);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logging_emitter_tracks_moves() {
        let mut emitter = LoggingEmitter::new(&FixedDisplay::new(800, 600));
        assert_eq!(emitter.cursor_position(), (400, 300));

        emitter.emit(&InputCommand::MoveCursorTo { x: 10, y: 20 });
        emitter.emit(&InputCommand::Click);
        assert_eq!(emitter.cursor_position(), (10, 20));
        assert_eq!(emitter.emitted(), 2);
    }

    #[test]
    fn test_boxed_emitter_delegates() {
        let mut boxed: Box<dyn InputEmitter> = Box::new(LoggingEmitter::new(&FixedDisplay::new(100, 100)));
        boxed.emit(&InputCommand::MoveCursorTo { x: 7, y: 9 });
        assert_eq!(boxed.cursor_position(), (7, 9));
    }

    #[test]
    fn test_command_display() {
        assert_eq!(InputCommand::ScrollBy(10).to_string(), "scroll +10");
        assert_eq!(InputCommand::ScrollBy(-5).to_string(), "scroll -5");
        assert_eq!(InputCommand::MouseDown(MouseButton::Left).to_string(), "Left button down");
    }
}
