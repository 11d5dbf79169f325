//! Relative cursor mapping.
//!
//! The anchor landmark is projected into a virtual space larger than the
//! screen so that a comfortable range of hand motion covers the whole
//! display. Only the frame-to-frame delta in that space is used; it is
//! added to wherever the real pointer currently is, so the mapping never
//! drifts away from the actual cursor.

use crate::utils::safe_cast::{f64_to_i32, u32_to_i32_saturating};
use log::debug;

/// Anchor-to-pointer delta mapper
#[derive(Debug, Clone)]
pub struct CursorMapper {
    screen_width: i32,
    screen_height: i32,
    virtual_width: i32,
    virtual_height: i32,
    edge_margin: i32,
    prev_virtual: Option<(i32, i32)>,
}

impl CursorMapper {
    /// Create a mapper for a screen of `screen_size` pixels
    #[must_use]
    pub fn new(screen_size: (u32, u32), virtual_scale: f64, edge_margin: i32) -> Self {
        let screen_width = u32_to_i32_saturating(screen_size.0);
        let screen_height = u32_to_i32_saturating(screen_size.1);
        let scale = |side: i32| f64_to_i32(f64::from(side) * virtual_scale).unwrap_or(side);

        Self {
            screen_width,
            screen_height,
            virtual_width: scale(screen_width),
            virtual_height: scale(screen_height),
            edge_margin,
            prev_virtual: None,
        }
    }

    /// Position of a normalized point in virtual space
    ///
    /// Returns `None` for coordinates that cannot be represented (NaN, huge).
    #[must_use]
    pub fn virtual_position(&self, x: f64, y: f64) -> Option<(i32, i32)> {
        let vx = f64_to_i32(x * f64::from(self.virtual_width)).ok()?;
        let vy = f64_to_i32(y * f64::from(self.virtual_height)).ok()?;
        Some((vx, vy))
    }

    /// Record a new anchor observation and return the virtual-space delta
    /// since the previous one. The first observation yields `(0, 0)`.
    pub fn track(&mut self, x: f64, y: f64) -> (i32, i32) {
        let Some(current) = self.virtual_position(x, y) else {
            debug!("Ignoring unrepresentable anchor ({x}, {y})");
            return (0, 0);
        };

        let prev = self.prev_virtual.replace(current).unwrap_or(current);
        (current.0.saturating_sub(prev.0), current.1.saturating_sub(prev.1))
    }

    /// Apply `delta` to the pointer at `current` and keep it inside the
    /// screen minus the edge margin
    #[must_use]
    pub fn target(&self, current: (i32, i32), delta: (i32, i32)) -> (i32, i32) {
        let clamp = |value: i32, side: i32| {
            value.min(side - self.edge_margin).max(self.edge_margin)
        };
        (
            clamp(current.0.saturating_add(delta.0), self.screen_width),
            clamp(current.1.saturating_add(delta.1), self.screen_height),
        )
    }

    /// Last virtual position seen, if any
    #[must_use]
    pub const fn previous_position(&self) -> Option<(i32, i32)> {
        self.prev_virtual
    }

    #[must_use]
    pub const fn screen_size(&self) -> (i32, i32) {
        (self.screen_width, self.screen_height)
    }

    #[must_use]
    pub const fn virtual_size(&self) -> (i32, i32) {
        (self.virtual_width, self.virtual_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn mapper() -> CursorMapper {
        CursorMapper::new((1920, 1080), 2.0, 5)
    }

    #[test]
    fn test_virtual_space_is_doubled() {
        let m = mapper();
        assert_eq!(m.virtual_size(), (3840, 2160));
        assert_eq!(m.virtual_position(0.5, 0.5), Some((1920, 1080)));
        assert_eq!(m.virtual_position(f64::NAN, 0.5), None);
    }

    #[test]
    fn test_first_observation_has_zero_delta() {
        let mut m = mapper();
        assert_eq!(m.track(0.25, 0.75), (0, 0));
        assert_eq!(m.previous_position(), Some((960, 1620)));
    }

    #[test]
    fn test_delta_between_frames() {
        let mut m = mapper();
        m.track(0.5, 0.5);
        assert_eq!(m.track(0.51, 0.49), (38, -22));
    }

    #[test]
    fn test_target_clamps_to_margin() {
        let m = mapper();
        assert_eq!(m.target((100, 100), (10, -10)), (110, 90));
        assert_eq!(m.target((10, 10), (-100, -100)), (5, 5));
        assert_eq!(m.target((1900, 1070), (100, 100)), (1915, 1075));
    }

    #[test]
    fn test_invalid_anchor_keeps_previous() {
        let mut m = mapper();
        m.track(0.5, 0.5);
        assert_eq!(m.track(f64::NAN, f64::INFINITY), (0, 0));
        assert_eq!(m.previous_position(), Some((1920, 1080)));
    }

    proptest! {
        #[test]
        fn prop_target_matches_clamp(
            cx in 0i32..1920,
            cy in 0i32..1080,
            dx in -4000i32..4000,
            dy in -4000i32..4000,
        ) {
            let (x, y) = mapper().target((cx, cy), (dx, dy));
            prop_assert_eq!(x, (cx + dx).clamp(5, 1915));
            prop_assert_eq!(y, (cy + dy).clamp(5, 1075));
        }
    }
}
