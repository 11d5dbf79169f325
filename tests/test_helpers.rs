//! Helper functions and utilities for tests
#![allow(dead_code)]

use hand_gesture_control::{
    controller::{Controller, ControllerSettings},
    input::{FixedDisplay, InputCommand, InputEmitter},
    landmarks::{index, Landmark, LandmarkFrame},
};

pub const SCREEN: (u32, u32) = (1920, 1080);

/// Fingers that can be folded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Finger {
    Thumb,
    Index,
    Middle,
    Ring,
    Little,
}

impl Finger {
    const fn tip(self) -> usize {
        match self {
            Self::Thumb => index::THUMB_TIP,
            Self::Index => index::INDEX_TIP,
            Self::Middle => index::MIDDLE_TIP,
            Self::Ring => index::RING_TIP,
            Self::Little => index::LITTLE_TIP,
        }
    }
}

/// Builds synthetic hand frames, starting from a relaxed open hand with
/// every fingertip above its base joint and all pinches apart
#[derive(Debug, Clone)]
pub struct HandBuilder {
    points: [Landmark; 21],
}

impl HandBuilder {
    pub fn open() -> Self {
        let mut points = [Landmark::new(0.5, 0.5, 0.0); 21];
        points[index::THUMB_TIP] = Landmark::new(0.1, 0.3, 0.0);
        points[index::INDEX_TIP] = Landmark::new(0.4, 0.2, 0.0);
        points[index::MIDDLE_TIP] = Landmark::new(0.5, 0.2, 0.0);
        points[index::RING_TIP] = Landmark::new(0.6, 0.2, 0.0);
        points[index::LITTLE_TIP] = Landmark::new(0.7, 0.2, 0.0);
        Self { points }
    }

    /// Move the cursor anchor (middle finger base joint)
    pub fn anchor(mut self, x: f64, y: f64) -> Self {
        self.points[index::MIDDLE_MCP].x = x;
        self.points[index::MIDDLE_MCP].y = y;
        self
    }

    /// Drop a fingertip below its reference joint
    pub fn fold(mut self, finger: Finger) -> Self {
        self.points[finger.tip()].y = 0.9;
        self
    }

    /// Index, middle, ring and little folded
    pub fn drag_fist(self) -> Self {
        self.fold(Finger::Index)
            .fold(Finger::Middle)
            .fold(Finger::Ring)
            .fold(Finger::Little)
    }

    /// All five fingers folded
    pub fn pause_fist(self) -> Self {
        self.drag_fist().fold(Finger::Thumb)
    }

    /// Place `finger`'s tip `distance` to the right of the thumb tip
    pub fn pinch(mut self, finger: Finger, distance: f64) -> Self {
        let thumb = self.points[index::THUMB_TIP];
        self.points[finger.tip()] = Landmark::new(thumb.x + distance, thumb.y, 0.0);
        self
    }

    pub fn build(&self) -> LandmarkFrame {
        LandmarkFrame::from_points(self.points)
    }

    /// Encode as one line of the tracker protocol
    pub fn to_json_line(&self) -> String {
        let landmarks: Vec<String> = self
            .points
            .iter()
            .map(|p| format!(r#"{{"x":{},"y":{},"z":{}}}"#, p.x, p.y, p.z))
            .collect();
        format!(
            r#"{{"hands":[{{"handedness":"Right","score":0.95,"landmarks":[{}]}}]}}"#,
            landmarks.join(",")
        )
    }
}

/// Emitter that records every command and simulates the pointer
#[derive(Debug, Default)]
pub struct RecordingEmitter {
    pub position: (i32, i32),
    pub commands: Vec<InputCommand>,
}

impl InputEmitter for RecordingEmitter {
    fn cursor_position(&mut self) -> (i32, i32) {
        self.position
    }

    fn emit(&mut self, command: &InputCommand) {
        if let InputCommand::MoveCursorTo { x, y } = *command {
            self.position = (x, y);
        }
        self.commands.push(*command);
    }
}

/// Controller on a 1920x1080 screen with the pointer at (960, 540)
pub fn create_test_controller() -> Controller<RecordingEmitter> {
    Controller::new(
        RecordingEmitter {
            position: (960, 540),
            commands: Vec::new(),
        },
        &FixedDisplay::new(SCREEN.0, SCREEN.1),
        ControllerSettings::default(),
    )
}

/// Everything except pointer moves
pub fn without_moves(commands: &[InputCommand]) -> Vec<InputCommand> {
    commands
        .iter()
        .copied()
        .filter(|c| !matches!(c, InputCommand::MoveCursorTo { .. }))
        .collect()
}
