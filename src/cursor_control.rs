//! X11 input backend.
//!
//! Reads the screen size and pointer position from the X server, moves the
//! pointer with `WarpPointer` and synthesizes button and wheel events with
//! the XTEST extension.

use crate::{
    error::{Error, Result},
    input::{DisplayGeometryProvider, InputCommand, InputEmitter, MouseButton},
    utils::safe_cast::i32_to_i16_clamp,
};
use log::{debug, info, warn};
use x11rb::{
    connection::{Connection, RequestConnection},
    protocol::{
        xproto::{ConnectionExt as _, Screen, BUTTON_PRESS_EVENT, BUTTON_RELEASE_EVENT},
        xtest::{self, ConnectionExt as _},
    },
    rust_connection::RustConnection,
};

/// Core X11 button numbers
const BUTTON_LEFT: u8 = 1;
const BUTTON_RIGHT: u8 = 3;
const BUTTON_WHEEL_UP: u8 = 4;
const BUTTON_WHEEL_DOWN: u8 = 5;

const fn button_code(button: MouseButton) -> u8 {
    match button {
        MouseButton::Left => BUTTON_LEFT,
        MouseButton::Right => BUTTON_RIGHT,
    }
}

/// Cursor control and input injection for X11
pub struct X11Backend {
    connection: RustConnection,
    screen: Screen,
    screen_width: u16,
    screen_height: u16,
    last_position: (i32, i32),
}

impl X11Backend {
    /// Connect to the X server named by `$DISPLAY`
    pub fn new() -> Result<Self> {
        info!("Initializing X11 input backend");

        // Connect to X11 server
        let (connection, screen_num) = RustConnection::connect(None)
            .map_err(|e| Error::CursorControl(format!("Failed to connect to X11: {e}")))?;

        let screen = connection
            .setup()
            .roots
            .get(screen_num)
            .ok_or_else(|| Error::CursorControl("Failed to get screen".to_string()))?
            .clone();

        // Button and wheel events need XTEST
        connection
            .extension_information(xtest::X11_EXTENSION_NAME)
            .map_err(|e| Error::CursorControl(format!("Failed to query XTEST: {e}")))?
            .ok_or_else(|| Error::CursorControl("X server lacks the XTEST extension".to_string()))?;

        let screen_width = screen.width_in_pixels;
        let screen_height = screen.height_in_pixels;

        info!(
            "Connected to X11 display, screen: {}x{}",
            screen_width, screen_height
        );

        let mut backend = Self {
            connection,
            screen,
            screen_width,
            screen_height,
            last_position: (i32::from(screen_width / 2), i32::from(screen_height / 2)),
        };
        backend.last_position = backend.get_position()?;
        Ok(backend)
    }

    /// Get current cursor position
    pub fn get_position(&self) -> Result<(i32, i32)> {
        let reply = self
            .connection
            .query_pointer(self.screen.root)
            .map_err(|e| Error::CursorControl(format!("Failed to send query pointer: {e}")))?
            .reply()
            .map_err(|e| Error::CursorControl(format!("Failed to query pointer: {e}")))?;

        Ok((i32::from(reply.root_x), i32::from(reply.root_y)))
    }

    /// Set cursor position (absolute)
    pub fn set_position(&self, x: i32, y: i32) -> Result<()> {
        debug!("Setting cursor position to ({}, {})", x, y);

        self.connection
            .warp_pointer(
                x11rb::NONE,
                self.screen.root,
                0,
                0,
                0,
                0,
                i32_to_i16_clamp(x),
                i32_to_i16_clamp(y),
            )
            .map_err(|e| Error::CursorControl(format!("Failed to warp pointer: {e}")))?;

        self.flush()
    }

    /// Press (`pressed = true`) or release a core button number
    fn fake_button(&self, button: u8, pressed: bool) -> Result<()> {
        let event = if pressed { BUTTON_PRESS_EVENT } else { BUTTON_RELEASE_EVENT };
        self.connection
            .xtest_fake_input(event, button, x11rb::CURRENT_TIME, self.screen.root, 0, 0, 0)
            .map_err(|e| Error::CursorControl(format!("Failed to fake button event: {e}")))?;
        Ok(())
    }

    fn click_button(&self, button: u8, times: u32) -> Result<()> {
        for _ in 0..times {
            self.fake_button(button, true)?;
            self.fake_button(button, false)?;
        }
        self.flush()
    }

    fn flush(&self) -> Result<()> {
        self.connection
            .flush()
            .map_err(|e| Error::CursorControl(format!("Failed to flush connection: {e}")))
    }

    fn execute(&mut self, command: &InputCommand) -> Result<()> {
        match *command {
            InputCommand::MoveCursorTo { x, y } => {
                self.set_position(x, y)?;
                self.last_position = (x, y);
                Ok(())
            }
            InputCommand::ScrollBy(amount) => {
                let button = if amount > 0 { BUTTON_WHEEL_UP } else { BUTTON_WHEEL_DOWN };
                self.click_button(button, amount.unsigned_abs())
            }
            InputCommand::Click => self.click_button(BUTTON_LEFT, 1),
            InputCommand::RightClick => self.click_button(BUTTON_RIGHT, 1),
            InputCommand::DoubleClick => self.click_button(BUTTON_LEFT, 2),
            InputCommand::MouseDown(button) => {
                self.fake_button(button_code(button), true)?;
                self.flush()
            }
            InputCommand::MouseUp(button) => {
                self.fake_button(button_code(button), false)?;
                self.flush()
            }
        }
    }

    /// Get screen dimensions
    pub const fn get_screen_size(&self) -> (u16, u16) {
        (self.screen_width, self.screen_height)
    }
}

impl DisplayGeometryProvider for X11Backend {
    fn screen_size(&self) -> (u32, u32) {
        (u32::from(self.screen_width), u32::from(self.screen_height))
    }
}

impl InputEmitter for X11Backend {
    fn cursor_position(&mut self) -> (i32, i32) {
        match self.get_position() {
            Ok(position) => {
                self.last_position = position;
                position
            }
            Err(e) => {
                warn!("{}; using last known cursor position", e);
                self.last_position
            }
        }
    }

    fn emit(&mut self, command: &InputCommand) {
        if let Err(e) = self.execute(command) {
            warn!("Failed to inject {}: {}", command, e);
        }
    }
}
