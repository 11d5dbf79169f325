//! Per-frame gesture controller.
//!
//! Each frame runs the sub-steps in a fixed order: posture classification,
//! cursor, scroll, click, drag. Everything after the first step reads the
//! posture computed for the same frame. Commands go to the emitter as soon
//! as they are decided and are also returned to the caller.

use crate::{
    click_debouncer::ClickDebouncer,
    config::Config,
    cursor_mapper::CursorMapper,
    drag::DragStateMachine,
    finger_status::FingerPostureFlags,
    input::{DisplayGeometryProvider, InputCommand, InputEmitter},
    landmarks::{index, LandmarkFrame},
    scroll_engine::{ScrollEngine, ScrollTuning},
    smoothing::{AnchorFilter, NoSmoothing},
};
use log::{debug, info};
use std::time::Instant;

/// Gesture engine settings
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControllerSettings {
    pub pinch_threshold: f64,
    pub virtual_scale: f64,
    pub edge_margin: i32,
    pub scroll: ScrollTuning,
}

impl Default for ControllerSettings {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

impl From<&Config> for ControllerSettings {
    fn from(config: &Config) -> Self {
        Self {
            pinch_threshold: config.gesture.pinch_threshold,
            virtual_scale: config.gesture.virtual_scale,
            edge_margin: config.gesture.edge_margin,
            scroll: ScrollTuning::from(&config.scroll),
        }
    }
}

/// Gesture state carried between frames
#[derive(Debug, Clone)]
pub struct ControllerState {
    pub cursor: CursorMapper,
    pub scroll: ScrollEngine,
    pub clicks: ClickDebouncer,
    pub drag: DragStateMachine,
    /// Posture of the most recently processed frame
    pub posture: FingerPostureFlags,
}

impl ControllerState {
    #[must_use]
    pub fn new(screen_size: (u32, u32), settings: &ControllerSettings) -> Self {
        Self {
            cursor: CursorMapper::new(screen_size, settings.virtual_scale, settings.edge_margin),
            scroll: ScrollEngine::new(settings.scroll),
            clicks: ClickDebouncer::new(settings.pinch_threshold),
            drag: DragStateMachine::new(),
            posture: FingerPostureFlags::default(),
        }
    }
}

/// Turns hand frames into input commands
pub struct Controller<E> {
    emitter: E,
    state: ControllerState,
    smoothing: Box<dyn AnchorFilter>,
    frames: u64,
}

impl<E: InputEmitter> Controller<E> {
    /// Create a controller, querying the screen size from `display` once
    pub fn new(emitter: E, display: &dyn DisplayGeometryProvider, settings: ControllerSettings) -> Self {
        let screen_size = display.screen_size();
        info!(
            "Gesture controller ready for {}x{} screen",
            screen_size.0, screen_size.1
        );

        Self {
            emitter,
            state: ControllerState::new(screen_size, &settings),
            smoothing: Box::new(NoSmoothing),
            frames: 0,
        }
    }

    /// Smooth the cursor anchor with `filter`
    #[must_use]
    pub fn with_smoothing(mut self, filter: Box<dyn AnchorFilter>) -> Self {
        info!("Anchor smoothing: {}", filter.name());
        self.smoothing = filter;
        self
    }

    /// Process one hand frame and return the commands it produced, in order
    pub fn process_frame(&mut self, frame: &LandmarkFrame, now: Instant) -> Vec<InputCommand> {
        let mut commands = Vec::new();
        self.frames += 1;

        // Posture
        let posture = FingerPostureFlags::classify(frame);
        self.state.posture = posture;

        // Cursor: the anchor is always tracked so resuming from a pause does not jump
        let anchor = frame.point(index::MIDDLE_MCP);
        let (ax, ay) = self.smoothing.apply(anchor.x, anchor.y);
        let delta = self.state.cursor.track(ax, ay);
        if posture.is_pause_fist() {
            debug!("Cursor paused");
        } else {
            let current = self.emitter.cursor_position();
            let (x, y) = self.state.cursor.target(current, delta);
            commands.push(InputCommand::MoveCursorTo { x, y });
        }

        // Scroll
        if let Some(amount) = self.state.scroll.update(&posture) {
            commands.push(InputCommand::ScrollBy(amount));
        }

        // Click
        commands.extend(self.state.clicks.update(frame, now));

        // Drag
        commands.extend(self.state.drag.update(&posture));

        for command in &commands {
            debug!("{}", command);
            self.emitter.emit(command);
        }
        commands
    }

    /// Process every hand of one observation in order. An empty slice is a
    /// cycle without a hand and leaves all state untouched.
    pub fn process_observation(&mut self, frames: &[LandmarkFrame], now: Instant) -> Vec<InputCommand> {
        frames
            .iter()
            .flat_map(|frame| self.process_frame(frame, now))
            .collect()
    }

    #[must_use]
    pub const fn state(&self) -> &ControllerState {
        &self.state
    }

    #[must_use]
    pub const fn emitter(&self) -> &E {
        &self.emitter
    }

    pub fn emitter_mut(&mut self) -> &mut E {
        &mut self.emitter
    }

    /// Frames processed so far
    #[must_use]
    pub const fn frames_processed(&self) -> u64 {
        self.frames
    }
}
