//! Hands-free mouse control from hand-pose landmarks.
//!
//! An external hand tracker supplies 21 normalized landmarks per detected
//! hand and per camera frame. This library turns that stream into pointer
//! movement, scrolling, clicks and drags:
//!
//! 1. Finger posture classification (which fingers are folded)
//! 2. Relative cursor motion from the middle-finger base joint
//! 3. Accelerating scroll from little/index finger postures
//! 4. Edge-triggered clicks from thumb pinches
//! 5. Drag latch from a four-finger fist
//!
//! # Examples
//!
//! ```no_run
//! use hand_gesture_control::{
//!     controller::{Controller, ControllerSettings},
//!     cursor_control::X11Backend,
//!     hand_source::{HandPoseSource, JsonLinesSource},
//!     input::FixedDisplay,
//! };
//! use std::time::Instant;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let backend = X11Backend::new()?;
//! let (width, height) = backend.get_screen_size();
//! let display = FixedDisplay::new(width.into(), height.into());
//! let mut controller = Controller::new(backend, &display, ControllerSettings::default());
//!
//! let mut source = JsonLinesSource::new(std::io::stdin().lock(), 0.5);
//! while let Some(hands) = source.next_observation()? {
//!     controller.process_observation(&hands, Instant::now());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Without a display server
//!
//! ```
//! use hand_gesture_control::{
//!     controller::{Controller, ControllerSettings},
//!     hand_source::parse_observation,
//!     input::{FixedDisplay, LoggingEmitter},
//! };
//! use std::time::Instant;
//!
//! let display = FixedDisplay::new(1920, 1080);
//! let mut controller = Controller::new(LoggingEmitter::new(&display), &display, ControllerSettings::default());
//!
//! let hands = parse_observation(r#"{"hands":[]}"#, 0.5).unwrap();
//! assert!(controller.process_observation(&hands, Instant::now()).is_empty());
//! ```

/// Hand landmark frames
pub mod landmarks;

/// Finger fold classification
pub mod finger_status;

/// Anchor motion to pointer moves
pub mod cursor_mapper;

/// Accelerating scroll
pub mod scroll_engine;

/// Pinch clicks
pub mod click_debouncer;

/// Fist drag latch
pub mod drag;

/// Per-frame orchestration
pub mod controller;

/// Input commands and output capabilities
pub mod input;

/// Hand-pose sources
pub mod hand_source;

/// Anchor smoothing filters
pub mod smoothing;

/// Utility functions for coordinate conversions
pub mod utils;

/// Error types and result handling
pub mod error;

/// Main application module
pub mod app;

/// X11 input backend
pub mod cursor_control;

/// Constants used throughout the application
pub mod constants;

/// Configuration management
pub mod config;

pub use error::{Error, Result};
