//! Constants used throughout the application

/// Number of landmarks in one hand frame
pub const NUM_HAND_LANDMARKS: usize = 21;

/// Pinch distance (normalized units) below which two fingertips count as touching
pub const DEFAULT_PINCH_THRESHOLD: f64 = 0.02;

/// Virtual space size as a multiple of the real screen in each dimension
pub const DEFAULT_VIRTUAL_SCALE: f64 = 2.0;

/// Pixels kept between the cursor and the screen edges
pub const DEFAULT_EDGE_MARGIN: i32 = 5;

/// Scroll speed at the first gesture after startup
pub const DEFAULT_SCROLL_INITIAL_SPEED: f64 = 10.0;

/// Per-frame multiplier applied to the scroll speed while scrolling
pub const DEFAULT_SCROLL_ACCELERATION: f64 = 10.2;

/// Upper bound for the scroll speed
pub const DEFAULT_SCROLL_MAX_SPEED: f64 = 100.0;

/// Scroll speed restored whenever the scroll gesture is released
pub const DEFAULT_SCROLL_RESET_SPEED: f64 = 5.0;

/// Minimum tracker confidence for a hand to be used
pub const DEFAULT_MIN_CONFIDENCE: f64 = 0.5;

/// Default filter parameters
pub const DEFAULT_EXPONENTIAL_ALPHA: f64 = 0.5;
pub const DEFAULT_MOVING_AVERAGE_WINDOW: usize = 5;

/// Screen size assumed by the dry-run display
pub const DEFAULT_FALLBACK_WIDTH: u32 = 1920;
pub const DEFAULT_FALLBACK_HEIGHT: u32 = 1080;
