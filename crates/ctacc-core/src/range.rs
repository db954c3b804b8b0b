//! Bounded, stepped part-length control.

use crate::calculator::AccuracyError;
use crate::constants::{DEFAULT_LENGTH_MM, LENGTH_STEP_MM, MAX_LENGTH_MM, MIN_LENGTH_MM};

/// The range of part lengths a user can select.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LengthRange {
    /// Lower bound in mm.
    pub min: f64,
    /// Upper bound in mm.
    pub max: f64,
    /// Increment in mm.
    pub step: f64,
}

impl Default for LengthRange {
    fn default() -> Self {
        Self {
            min: MIN_LENGTH_MM,
            max: MAX_LENGTH_MM,
            step: LENGTH_STEP_MM,
        }
    }
}

impl LengthRange {
    /// Create a range. Bounds must be finite with `0 <= min < max`, and `step > 0`.
    pub fn new(min: f64, max: f64, step: f64) -> Result<Self, AccuracyError> {
        let valid = min.is_finite()
            && max.is_finite()
            && step.is_finite()
            && min >= 0.0
            && min < max
            && step > 0.0;
        if !valid {
            return Err(AccuracyError::InvalidInput(format!(
                "invalid length range {min}..={max} step {step}"
            )));
        }
        Ok(Self { min, max, step })
    }

    /// Initial value: the default length, brought into this range.
    #[must_use]
    pub fn initial(&self) -> f64 {
        self.snap(DEFAULT_LENGTH_MM)
    }

    /// Validate a user-supplied length and bring it onto the range.
    ///
    /// Non-finite and negative values are rejected; anything else is clamped
    /// to the bounds and snapped to the nearest step.
    pub fn clamp(&self, value: f64) -> Result<f64, AccuracyError> {
        if !value.is_finite() || value < 0.0 {
            return Err(AccuracyError::InvalidInput(format!(
                "part length must be finite and non-negative, got {value}"
            )));
        }
        Ok(self.snap(value))
    }

    /// Move up by `steps` increments, saturating at `max`.
    #[must_use]
    pub fn step_up(&self, value: f64, steps: u32) -> f64 {
        self.snap(value + self.step * f64::from(steps))
    }

    /// Move down by `steps` increments, saturating at `min`.
    #[must_use]
    pub fn step_down(&self, value: f64, steps: u32) -> f64 {
        self.snap(value - self.step * f64::from(steps))
    }

    /// Position of `value` within the range, in `[0, 1]`.
    #[must_use]
    pub fn ratio(&self, value: f64) -> f64 {
        ((value - self.min) / (self.max - self.min)).clamp(0.0, 1.0)
    }

    fn snap(&self, value: f64) -> f64 {
        let clamped = value.clamp(self.min, self.max);
        let steps = ((clamped - self.min) / self.step).round();
        (self.min + steps * self.step).min(self.max)
    }
}
