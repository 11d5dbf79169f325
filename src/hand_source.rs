//! Hand-pose sources.
//!
//! Pose estimation runs outside this crate. Trackers talk to it through a
//! line-oriented JSON protocol, one observation per line:
//!
//! ```text
//! {"hands":[{"handedness":"Right","score":0.97,"landmarks":[{"x":0.51,"y":0.62,"z":-0.01}, ...]}]}
//! ```
//!
//! An empty `hands` array means no hand was seen in that cycle. A non-null
//! `error` field is reported and treated the same way.

use crate::{
    constants::NUM_HAND_LANDMARKS,
    landmarks::{Landmark, LandmarkFrame},
    Error, Result,
};
use log::{debug, info, warn};
use serde::Deserialize;
use std::{
    io::BufRead,
    process::{Child, ChildStdout, Command, Stdio},
};

/// Supplier of hand observations, one call per processing cycle
pub trait HandPoseSource {
    /// Block until the next observation
    ///
    /// `Ok(None)` means the stream has ended; `Ok(Some(vec![]))` means no
    /// hand was detected this cycle.
    fn next_observation(&mut self) -> Result<Option<Vec<LandmarkFrame>>>;
}

#[derive(Deserialize, Debug)]
struct LandmarkJson {
    x: f64,
    y: f64,
    #[serde(default)]
    z: f64,
}

#[derive(Deserialize, Debug)]
struct HandJson {
    #[serde(default)]
    handedness: Option<String>,
    #[serde(default)]
    score: Option<f64>,
    landmarks: Vec<LandmarkJson>,
}

#[derive(Deserialize, Debug)]
struct ObservationJson {
    #[serde(default)]
    hands: Vec<HandJson>,
    #[serde(default)]
    error: Option<String>,
}

/// Decode one protocol line into the hands it carries
///
/// Hands below `min_confidence` or with the wrong landmark count are
/// dropped with a warning.
///
/// # Errors
///
/// Returns `Json` if the line is not a valid observation object
pub fn parse_observation(line: &str, min_confidence: f64) -> Result<Vec<LandmarkFrame>> {
    let observation: ObservationJson = serde_json::from_str(line)?;

    if let Some(error) = observation.error {
        warn!("Hand tracker reported an error: {}", error);
        return Ok(Vec::new());
    }

    let mut frames = Vec::with_capacity(observation.hands.len());
    for hand in observation.hands {
        let score = hand.score.unwrap_or(1.0);
        if score < min_confidence {
            debug!("Skipping hand with confidence {:.2}", score);
            continue;
        }
        if hand.landmarks.len() != NUM_HAND_LANDMARKS {
            warn!(
                "Expected {} landmarks, got {}",
                NUM_HAND_LANDMARKS,
                hand.landmarks.len()
            );
            continue;
        }

        let points = hand
            .landmarks
            .iter()
            .map(|lm| Landmark::new(lm.x, lm.y, lm.z))
            .collect();
        frames.push(LandmarkFrame::new(points)?);

        debug!(
            "Hand {} (confidence={:.2})",
            hand.handedness.as_deref().unwrap_or("unknown"),
            score
        );
    }

    Ok(frames)
}

/// Source reading protocol lines from any buffered reader (stdin, file)
pub struct JsonLinesSource<R> {
    reader: R,
    min_confidence: f64,
    mirror_x: bool,
    buffer: Vec<u8>,
    line_number: usize,
}

impl<R: BufRead> JsonLinesSource<R> {
    #[must_use]
    pub fn new(reader: R, min_confidence: f64) -> Self {
        Self {
            reader,
            min_confidence,
            mirror_x: false,
            buffer: Vec::new(),
            line_number: 0,
        }
    }

    /// Mirror every frame horizontally before handing it out
    #[must_use]
    pub const fn with_mirror(mut self, mirror_x: bool) -> Self {
        self.mirror_x = mirror_x;
        self
    }

    /// Lines consumed so far
    #[must_use]
    pub const fn line_number(&self) -> usize {
        self.line_number
    }
}

impl<R: BufRead> HandPoseSource for JsonLinesSource<R> {
    fn next_observation(&mut self) -> Result<Option<Vec<LandmarkFrame>>> {
        loop {
            self.buffer.clear();
            if self.reader.read_until(b'\n', &mut self.buffer)? == 0 {
                return Ok(None);
            }
            self.line_number += 1;

            let line = std::str::from_utf8(&self.buffer).map_err(|e| {
                Error::LandmarkSource(format!("line {}: {e}", self.line_number))
            })?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }

            let frames = parse_observation(trimmed, self.min_confidence).map_err(|e| {
                Error::LandmarkSource(format!("line {}: {e}", self.line_number))
            })?;

            return Ok(Some(if self.mirror_x {
                frames.iter().map(LandmarkFrame::mirrored).collect()
            } else {
                frames
            }));
        }
    }
}

/// Source backed by an external tracker process writing protocol lines to stdout
pub struct CommandSource {
    child: Child,
    lines: JsonLinesSource<std::io::BufReader<ChildStdout>>,
}

impl CommandSource {
    /// Spawn `command_line` (whitespace separated program and arguments)
    ///
    /// # Errors
    ///
    /// Returns `LandmarkSource` if the command is empty or cannot be started
    pub fn spawn(command_line: &str, min_confidence: f64, mirror_x: bool) -> Result<Self> {
        let mut parts = command_line.split_whitespace();
        let program = parts
            .next()
            .ok_or_else(|| Error::LandmarkSource("Empty tracker command".to_string()))?;

        info!("Starting hand tracker: {}", command_line);
        let mut child = Command::new(program)
            .args(parts)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|e| Error::LandmarkSource(format!("Failed to start '{program}': {e}")))?;

        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| Error::LandmarkSource("Failed to capture tracker stdout".to_string()))?;

        Ok(Self {
            child,
            lines: JsonLinesSource::new(std::io::BufReader::new(stdout), min_confidence).with_mirror(mirror_x),
        })
    }
}

impl HandPoseSource for CommandSource {
    fn next_observation(&mut self) -> Result<Option<Vec<LandmarkFrame>>> {
        self.lines.next_observation()
    }
}

impl Drop for CommandSource {
    fn drop(&mut self) {
        if let Ok(None) = self.child.try_wait() {
            if let Err(e) = self.child.kill() {
                warn!("Failed to stop hand tracker: {}", e);
            }
        }
        let _ = self.child.wait();
    }
}
