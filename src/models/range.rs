use crate::error::{Error, Result};
use serde::Serialize;

pub const DEFAULT_MIN: f64 = -1000.0;
pub const DEFAULT_MAX: f64 = 1000.0;

/// Input span mapped onto the gradient. Always finite with `min < max`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ValueRange {
    min: f64,
    max: f64,
}

impl ValueRange {
    pub fn new(min: f64, max: f64) -> Result<Self> {
        if !min.is_finite() || !max.is_finite() || min >= max {
            return Err(Error::InvalidRange { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Position of `value` within the range, clamped to `[0, 1]`. NaN maps to 0.
    pub fn normalize(&self, value: f64) -> f64 {
        let t = (value - self.min) / self.span();
        if t.is_nan() {
            log::debug!("value {} is not a number, using range start", value);
            return 0.0;
        }
        if !(0.0..=1.0).contains(&t) {
            log::debug!(
                "value {} outside [{}, {}], clamping",
                value,
                self.min,
                self.max
            );
        }
        t.clamp(0.0, 1.0)
    }

    /// Inverse of [`normalize`](Self::normalize) for `t` in `[0, 1]`.
    pub fn value_at(&self, t: f64) -> f64 {
        self.min + t * self.span()
    }
}

impl Default for ValueRange {
    fn default() -> Self {
        ValueRange {
            min: DEFAULT_MIN,
            max: DEFAULT_MAX,
        }
    }
}

impl TryFrom<(f64, f64)> for ValueRange {
    type Error = Error;

    fn try_from((min, max): (f64, f64)) -> Result<Self> {
        ValueRange::new(min, max)
    }
}
