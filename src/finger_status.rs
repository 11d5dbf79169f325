//! Finger posture classification.
//!
//! A finger counts as folded when its tip sits lower in the image than its
//! base joint. The thumb moves mostly sideways, so it is compared against
//! the ring finger's base joint instead of its own.

use crate::landmarks::{index, LandmarkFrame};

/// Per-frame fold state of every finger
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FingerPostureFlags {
    pub thumb_folded: bool,
    pub index_folded: bool,
    pub middle_folded: bool,
    pub ring_folded: bool,
    pub little_folded: bool,
    /// Index, middle, ring and little all folded; the thumb is not considered
    pub all_fingers_folded: bool,
}

impl FingerPostureFlags {
    /// Classify a frame
    #[must_use]
    pub fn classify(frame: &LandmarkFrame) -> Self {
        let below = |tip: usize, base: usize| frame.point(tip).y > frame.point(base).y;

        Self::from_folds(
            below(index::THUMB_TIP, index::RING_MCP),
            below(index::INDEX_TIP, index::INDEX_MCP),
            below(index::MIDDLE_TIP, index::MIDDLE_MCP),
            below(index::RING_TIP, index::RING_MCP),
            below(index::LITTLE_TIP, index::LITTLE_MCP),
        )
    }

    /// Build flags from individual fold states, deriving the aggregate
    #[must_use]
    pub const fn from_folds(thumb: bool, index: bool, middle: bool, ring: bool, little: bool) -> Self {
        Self {
            thumb_folded: thumb,
            index_folded: index,
            middle_folded: middle,
            ring_folded: ring,
            little_folded: little,
            all_fingers_folded: index && middle && ring && little,
        }
    }

    /// Four-finger fist that holds the mouse button for dragging
    #[must_use]
    pub const fn is_drag_fist(&self) -> bool {
        self.all_fingers_folded
    }

    /// Full fist including the thumb; freezes the cursor
    #[must_use]
    pub const fn is_pause_fist(&self) -> bool {
        self.all_fingers_folded && self.thumb_folded
    }
}
