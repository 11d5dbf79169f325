//! Optional smoothing of the cursor anchor.
//!
//! Hand trackers jitter by a pixel or two between frames even when the hand
//! is still. A filter here smooths only the anchor used for pointer motion;
//! posture, pinch and drag decisions always see the raw landmarks.

/// Exponential smoothing
pub mod exponential;

/// Sliding-window mean
pub mod moving_average;

use crate::{Error, Result};

/// Trait for anchor smoothing filters
pub trait AnchorFilter: Send {
    /// Smooth one anchor observation
    fn apply(&mut self, x: f64, y: f64) -> (f64, f64);

    /// Filter name
    fn name(&self) -> &str;
}

/// Pass-through filter
pub struct NoSmoothing;

impl AnchorFilter for NoSmoothing {
    fn apply(&mut self, x: f64, y: f64) -> (f64, f64) {
        (x, y)
    }

    fn name(&self) -> &str {
        "none"
    }
}

/// Create a filter by name with the given parameters
///
/// # Errors
///
/// Returns `FilterError` for unknown names or invalid parameters
pub fn create_smoothing(name: &str, alpha: f64, window: usize) -> Result<Box<dyn AnchorFilter>> {
    match name.to_lowercase().as_str() {
        "none" | "off" => Ok(Box::new(NoSmoothing)),
        "exponential" | "ema" => Ok(Box::new(exponential::ExponentialSmoothing::new(alpha)?)),
        "moving_average" | "movingaverage" => {
            Ok(Box::new(moving_average::MovingAverageSmoothing::new(window)?))
        }
        _ => Err(Error::FilterError(format!("Unknown smoothing filter: {name}"))),
    }
}
