use super::AnchorFilter;
use crate::{Error, Result};

/// Exponential moving average of the anchor position
pub struct ExponentialSmoothing {
    alpha: f64,
    last: Option<(f64, f64)>,
}

impl ExponentialSmoothing {
    /// # Errors
    ///
    /// Returns `FilterError` unless `alpha` is in `(0, 1]`
    pub fn new(alpha: f64) -> Result<Self> {
        if !(alpha > 0.0 && alpha <= 1.0) {
            return Err(Error::FilterError(format!("Alpha must be in (0, 1], got {alpha}")));
        }
        Ok(Self { alpha, last: None })
    }
}

impl AnchorFilter for ExponentialSmoothing {
    fn apply(&mut self, x: f64, y: f64) -> (f64, f64) {
        let smoothed = match self.last {
            Some((lx, ly)) => (
                self.alpha * x + (1.0 - self.alpha) * lx,
                self.alpha * y + (1.0 - self.alpha) * ly,
            ),
            None => (x, y),
        };
        self.last = Some(smoothed);
        smoothed
    }

    fn name(&self) -> &str {
        "exponential"
    }
}
