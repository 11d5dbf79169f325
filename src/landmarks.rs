//! Hand landmark frames as produced by an external hand-pose estimator.
//!
//! A frame holds the 21 points of one hand in normalized image coordinates,
//! `x` and `y` in `[0, 1]` with `y` growing downward. Indices follow the
//! usual hand-landmark convention (see [`index`]).

use crate::{constants::NUM_HAND_LANDMARKS, Error, Result};

/// Landmark indices
pub mod index {
    pub const WRIST: usize = 0;
    pub const THUMB_TIP: usize = 4;
    pub const INDEX_MCP: usize = 5;
    pub const INDEX_TIP: usize = 8;
    pub const MIDDLE_MCP: usize = 9;
    pub const MIDDLE_TIP: usize = 12;
    pub const RING_MCP: usize = 13;
    pub const RING_TIP: usize = 16;
    pub const LITTLE_MCP: usize = 17;
    pub const LITTLE_TIP: usize = 20;
}

/// A single tracked point
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Landmark {
    /// Horizontal coordinate, normalized to image width
    pub x: f64,
    /// Vertical coordinate, normalized to image height (down is positive)
    pub y: f64,
    /// Depth relative to the wrist
    pub z: f64,
}

impl Landmark {
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Euclidean distance in the image plane, ignoring depth
    #[must_use]
    pub fn planar_distance(&self, other: &Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// All landmarks of one hand for one processing cycle
#[derive(Debug, Clone, PartialEq)]
pub struct LandmarkFrame {
    points: [Landmark; NUM_HAND_LANDMARKS],
}

impl LandmarkFrame {
    /// Build a frame from exactly 21 points
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if `points` does not hold exactly 21 landmarks
    pub fn new(points: Vec<Landmark>) -> Result<Self> {
        let count = points.len();
        let points: [Landmark; NUM_HAND_LANDMARKS] = points.try_into().map_err(|_| {
            Error::InvalidInput(format!(
                "Expected {NUM_HAND_LANDMARKS} hand landmarks, got {count}"
            ))
        })?;
        Ok(Self { points })
    }

    #[must_use]
    pub const fn from_points(points: [Landmark; NUM_HAND_LANDMARKS]) -> Self {
        Self { points }
    }

    /// Landmark at `idx`
    ///
    /// # Panics
    ///
    /// Panics if `idx >= 21`; use the constants in [`index`].
    #[must_use]
    pub fn point(&self, idx: usize) -> &Landmark {
        &self.points[idx]
    }

    #[must_use]
    pub const fn points(&self) -> &[Landmark; NUM_HAND_LANDMARKS] {
        &self.points
    }

    /// Copy of this frame mirrored horizontally (`x -> 1 - x`)
    #[must_use]
    pub fn mirrored(&self) -> Self {
        let mut points = self.points;
        for p in &mut points {
            p.x = 1.0 - p.x;
        }
        Self { points }
    }
}
