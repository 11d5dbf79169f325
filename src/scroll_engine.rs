//! Accelerating scroll engine.
//!
//! Little finger extended with the index folded scrolls up; the reverse
//! scrolls down. While the posture is held the speed grows geometrically up
//! to a cap. Releasing it snaps the speed back to the reset value. The
//! engine advances exactly once per processed frame.

use crate::{
    constants::{
        DEFAULT_SCROLL_ACCELERATION, DEFAULT_SCROLL_INITIAL_SPEED, DEFAULT_SCROLL_MAX_SPEED,
        DEFAULT_SCROLL_RESET_SPEED,
    },
    finger_status::FingerPostureFlags,
    utils::safe_cast::f64_round_to_i32,
};

/// Scroll direction derived from finger posture
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScrollDirection {
    Up,
    Down,
    #[default]
    Idle,
}

impl ScrollDirection {
    /// Direction for the current posture; conflicting or absent signals are idle
    #[must_use]
    pub const fn from_posture(flags: &FingerPostureFlags) -> Self {
        match (flags.little_folded, flags.index_folded) {
            (false, true) => Self::Up,
            (true, false) => Self::Down,
            _ => Self::Idle,
        }
    }

    /// +1 for up, -1 for down, 0 when idle
    #[must_use]
    pub const fn sign(self) -> i32 {
        match self {
            Self::Up => 1,
            Self::Down => -1,
            Self::Idle => 0,
        }
    }
}

/// Speed schedule for the scroll engine
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollTuning {
    pub initial_speed: f64,
    pub acceleration: f64,
    pub max_speed: f64,
    pub reset_speed: f64,
}

impl Default for ScrollTuning {
    fn default() -> Self {
        Self {
            initial_speed: DEFAULT_SCROLL_INITIAL_SPEED,
            acceleration: DEFAULT_SCROLL_ACCELERATION,
            max_speed: DEFAULT_SCROLL_MAX_SPEED,
            reset_speed: DEFAULT_SCROLL_RESET_SPEED,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ScrollEngine {
    tuning: ScrollTuning,
    speed: f64,
    direction: ScrollDirection,
    ticks: u64,
}

impl ScrollEngine {
    #[must_use]
    pub fn new(tuning: ScrollTuning) -> Self {
        Self {
            speed: tuning.initial_speed,
            tuning,
            direction: ScrollDirection::Idle,
            ticks: 0,
        }
    }

    /// Advance one frame. Returns the signed scroll amount to emit, if any.
    pub fn update(&mut self, flags: &FingerPostureFlags) -> Option<i32> {
        self.direction = ScrollDirection::from_posture(flags);
        self.ticks += 1;

        if self.direction == ScrollDirection::Idle {
            self.speed = self.tuning.reset_speed;
            return None;
        }

        let amount = f64_round_to_i32(self.speed * f64::from(self.direction.sign()));
        self.speed = (self.speed * self.tuning.acceleration).min(self.tuning.max_speed);
        Some(amount)
    }

    /// Speed that the next scrolling frame will use
    #[must_use]
    pub const fn speed(&self) -> f64 {
        self.speed
    }

    #[must_use]
    pub const fn direction(&self) -> ScrollDirection {
        self.direction
    }

    /// Frames processed so far
    #[must_use]
    pub const fn ticks(&self) -> u64 {
        self.ticks
    }
}

impl Default for ScrollEngine {
    fn default() -> Self {
        Self::new(ScrollTuning::default())
    }
}
