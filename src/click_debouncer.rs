//! Edge-triggered click detection from thumb pinches.
//!
//! Index, middle and ring fingertips each form a pinch pair with the thumb
//! tip. A pair fires once when it closes and must open again before it can
//! fire another time.

use crate::{
    constants::DEFAULT_PINCH_THRESHOLD,
    input::InputCommand,
    landmarks::{index, LandmarkFrame},
};
use std::time::Instant;

/// Fingertip that pinches against the thumb
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinchPair {
    /// Index tip to thumb tip, left click
    Index,
    /// Middle tip to thumb tip, right click
    Middle,
    /// Ring tip to thumb tip, double click
    Ring,
}

impl PinchPair {
    pub const ALL: [Self; 3] = [Self::Index, Self::Middle, Self::Ring];

    #[must_use]
    pub const fn fingertip(self) -> usize {
        match self {
            Self::Index => index::INDEX_TIP,
            Self::Middle => index::MIDDLE_TIP,
            Self::Ring => index::RING_TIP,
        }
    }

    #[must_use]
    pub const fn command(self) -> InputCommand {
        match self {
            Self::Index => InputCommand::Click,
            Self::Middle => InputCommand::RightClick,
            Self::Ring => InputCommand::DoubleClick,
        }
    }

    const fn slot(self) -> usize {
        self as usize
    }
}

/// Whether two points are closer than `threshold`. A distance equal to the
/// threshold is open.
#[must_use]
pub fn is_pinched(distance: f64, threshold: f64) -> bool {
    distance < threshold
}

#[derive(Debug, Clone)]
pub struct ClickDebouncer {
    threshold: f64,
    latched: [bool; 3],
    last_click: Option<Instant>,
}

impl ClickDebouncer {
    #[must_use]
    pub const fn new(threshold: f64) -> Self {
        Self {
            threshold,
            latched: [false; 3],
            last_click: None,
        }
    }

    /// Evaluate all three pairs for one frame, in index, middle, ring order
    pub fn update(&mut self, frame: &LandmarkFrame, now: Instant) -> Vec<InputCommand> {
        let thumb = frame.point(index::THUMB_TIP);
        let mut clicks = Vec::new();

        for pair in PinchPair::ALL {
            let distance = frame.point(pair.fingertip()).planar_distance(thumb);
            let latch = &mut self.latched[pair.slot()];

            if is_pinched(distance, self.threshold) {
                if !*latch {
                    *latch = true;
                    self.last_click = Some(now);
                    clicks.push(pair.command());
                }
            } else {
                *latch = false;
            }
        }

        clicks
    }

    /// Whether `pair` is currently held closed
    #[must_use]
    pub const fn is_latched(&self, pair: PinchPair) -> bool {
        self.latched[pair.slot()]
    }

    /// Time of the most recent click of any kind
    #[must_use]
    pub const fn last_click(&self) -> Option<Instant> {
        self.last_click
    }

    #[must_use]
    pub const fn threshold(&self) -> f64 {
        self.threshold
    }
}

impl Default for ClickDebouncer {
    fn default() -> Self {
        Self::new(DEFAULT_PINCH_THRESHOLD)
    }
}
