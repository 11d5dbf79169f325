//! Configuration management for the hand gesture control application

use crate::{
    constants::{
        DEFAULT_EDGE_MARGIN, DEFAULT_EXPONENTIAL_ALPHA, DEFAULT_FALLBACK_HEIGHT, DEFAULT_FALLBACK_WIDTH,
        DEFAULT_MIN_CONFIDENCE, DEFAULT_MOVING_AVERAGE_WINDOW, DEFAULT_PINCH_THRESHOLD,
        DEFAULT_SCROLL_ACCELERATION, DEFAULT_SCROLL_INITIAL_SPEED, DEFAULT_SCROLL_MAX_SPEED,
        DEFAULT_SCROLL_RESET_SPEED, DEFAULT_VIRTUAL_SCALE,
    },
    scroll_engine::ScrollTuning,
    smoothing::{create_smoothing, AnchorFilter},
    Error, Result,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Gesture recognition thresholds
    pub gesture: GestureConfig,

    /// Scroll speed schedule
    pub scroll: ScrollConfig,

    /// Hand-pose source settings
    pub source: SourceConfig,

    /// Anchor smoothing
    pub smoothing: SmoothingConfig,

    /// Display settings for dry runs
    pub display: DisplayConfig,
}

/// Gesture recognition thresholds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureConfig {
    /// Fingertip-to-thumb distance (normalized) that counts as a pinch
    pub pinch_threshold: f64,

    /// Virtual space size as a multiple of the screen
    pub virtual_scale: f64,

    /// Minimum distance in pixels between cursor and screen edge
    pub edge_margin: i32,
}

/// Scroll speed schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollConfig {
    /// Speed of the first scroll after startup
    pub initial_speed: f64,

    /// Per-frame speed multiplier while scrolling
    pub acceleration: f64,

    /// Speed cap
    pub max_speed: f64,

    /// Speed restored after the gesture is released
    pub reset_speed: f64,
}

/// Hand-pose source settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Hands reported below this confidence are ignored
    pub min_confidence: f64,

    /// Mirror x coordinates for trackers that do not flip the camera image
    pub mirror_x: bool,

    /// External tracker command whose stdout carries landmark lines
    pub command: Option<String>,
}

/// Anchor smoothing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SmoothingConfig {
    /// Filter name (none, exponential, moving_average)
    pub filter: String,

    /// Exponential filter alpha
    pub exponential_alpha: f64,

    /// Moving average window size
    pub moving_average_window: usize,
}

/// Display settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Screen width assumed when no display server is used
    pub fallback_width: u32,

    /// Screen height assumed when no display server is used
    pub fallback_height: u32,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            pinch_threshold: DEFAULT_PINCH_THRESHOLD,
            virtual_scale: DEFAULT_VIRTUAL_SCALE,
            edge_margin: DEFAULT_EDGE_MARGIN,
        }
    }
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            initial_speed: DEFAULT_SCROLL_INITIAL_SPEED,
            acceleration: DEFAULT_SCROLL_ACCELERATION,
            max_speed: DEFAULT_SCROLL_MAX_SPEED,
            reset_speed: DEFAULT_SCROLL_RESET_SPEED,
        }
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            min_confidence: DEFAULT_MIN_CONFIDENCE,
            mirror_x: false,
            command: None,
        }
    }
}

impl Default for SmoothingConfig {
    fn default() -> Self {
        Self {
            filter: "none".to_string(),
            exponential_alpha: DEFAULT_EXPONENTIAL_ALPHA,
            moving_average_window: DEFAULT_MOVING_AVERAGE_WINDOW,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            fallback_width: DEFAULT_FALLBACK_WIDTH,
            fallback_height: DEFAULT_FALLBACK_HEIGHT,
        }
    }
}

impl From<&ScrollConfig> for ScrollTuning {
    fn from(config: &ScrollConfig) -> Self {
        Self {
            initial_speed: config.initial_speed,
            acceleration: config.acceleration,
            max_speed: config.max_speed,
            reset_speed: config.reset_speed,
        }
    }
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::IoError(e.to_string()))?;

        Self::from_yaml(&content)
    }

    /// Parse configuration from YAML text
    pub fn from_yaml(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| Error::ConfigError(format!("Failed to parse config: {}", e)))
    }

    /// Save configuration to a YAML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_yaml::to_string(self)
            .map_err(|e| Error::ConfigError(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content).map_err(|e| Error::IoError(e.to_string()))?;

        Ok(())
    }

    /// Create the anchor smoothing filter from configuration
    pub fn create_smoothing(&self) -> Result<Box<dyn AnchorFilter>> {
        create_smoothing(
            &self.smoothing.filter,
            self.smoothing.exponential_alpha,
            self.smoothing.moving_average_window,
        )
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        // Gesture thresholds
        if !(self.gesture.pinch_threshold > 0.0) {
            return Err(Error::ConfigError("Pinch threshold must be greater than 0".to_string()));
        }
        if !(self.gesture.virtual_scale > 0.0) {
            return Err(Error::ConfigError("Virtual scale must be greater than 0".to_string()));
        }
        if self.gesture.edge_margin < 0 {
            return Err(Error::ConfigError("Edge margin must not be negative".to_string()));
        }

        // Scroll schedule
        if !(self.scroll.initial_speed > 0.0) || !(self.scroll.reset_speed > 0.0) {
            return Err(Error::ConfigError(
                "Scroll initial and reset speeds must be greater than 0".to_string(),
            ));
        }
        if !(self.scroll.acceleration >= 1.0) {
            return Err(Error::ConfigError("Scroll acceleration must be at least 1.0".to_string()));
        }
        if !(self.scroll.max_speed >= self.scroll.initial_speed)
            || !(self.scroll.max_speed >= self.scroll.reset_speed)
        {
            return Err(Error::ConfigError(
                "Scroll max speed must not be below the initial or reset speed".to_string(),
            ));
        }

        // Source
        if !(0.0..=1.0).contains(&self.source.min_confidence) {
            return Err(Error::ConfigError(
                "Minimum confidence must be between 0.0 and 1.0".to_string(),
            ));
        }

        // Smoothing
        if !(self.smoothing.exponential_alpha > 0.0 && self.smoothing.exponential_alpha <= 1.0) {
            return Err(Error::ConfigError(
                "Exponential alpha must be in (0.0, 1.0]".to_string(),
            ));
        }
        if self.smoothing.moving_average_window == 0 {
            return Err(Error::ConfigError(
                "Moving average window size must be greater than 0".to_string(),
            ));
        }
        self.create_smoothing()?;

        // Display
        let min_side = u32::try_from(self.gesture.edge_margin).unwrap_or(0).saturating_mul(2);
        if self.display.fallback_width <= min_side || self.display.fallback_height <= min_side {
            return Err(Error::ConfigError(format!(
                "Fallback display {}x{} is too small for an edge margin of {}",
                self.display.fallback_width, self.display.fallback_height, self.gesture.edge_margin
            )));
        }

        Ok(())
    }
}

/// Example configuration file content
pub const EXAMPLE_CONFIG: &str = r#"# Hand Gesture Control Configuration

# Gesture recognition
gesture:
  pinch_threshold: 0.02
  virtual_scale: 2.0
  edge_margin: 5

# Scroll speed schedule
scroll:
  initial_speed: 10.0
  acceleration: 10.2
  max_speed: 100.0
  reset_speed: 5.0

# Hand-pose source
source:
  min_confidence: 0.5
  mirror_x: false
  # command: "python3 hand_landmarks.py"

# Anchor smoothing (none, exponential, moving_average)
smoothing:
  filter: "none"
  exponential_alpha: 0.5
  moving_average_window: 5

# Screen size used by --dry-run
display:
  fallback_width: 1920
  fallback_height: 1080
"#;
