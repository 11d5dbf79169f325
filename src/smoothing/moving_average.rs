use super::AnchorFilter;
use crate::{Error, Result};
use std::collections::VecDeque;

/// Mean of the last `window` anchor positions
pub struct MovingAverageSmoothing {
    window: usize,
    history: VecDeque<(f64, f64)>,
}

impl MovingAverageSmoothing {
    /// # Errors
    ///
    /// Returns `FilterError` if `window` is zero
    pub fn new(window: usize) -> Result<Self> {
        if window == 0 {
            return Err(Error::FilterError("Moving average window must be greater than 0".to_string()));
        }
        Ok(Self {
            window,
            history: VecDeque::with_capacity(window),
        })
    }
}

impl AnchorFilter for MovingAverageSmoothing {
    #[allow(clippy::cast_precision_loss)] // window sizes are tiny
    fn apply(&mut self, x: f64, y: f64) -> (f64, f64) {
        if self.history.len() >= self.window {
            self.history.pop_front();
        }
        self.history.push_back((x, y));

        let n = self.history.len() as f64;
        let (sx, sy) = self
            .history
            .iter()
            .fold((0.0, 0.0), |(ax, ay), &(px, py)| (ax + px, ay + py));
        (sx / n, sy / n)
    }

    fn name(&self) -> &str {
        "moving_average"
    }
}
