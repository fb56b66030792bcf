use serde::{Deserialize, Serialize};

use crate::error::{require_finite, PricingError, Result};

/// Bounds, default and step of one interactive control (a slider).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParameterRange {
    pub min: f64,
    pub max: f64,
    pub default: f64,
    pub step: f64,
}

impl ParameterRange {
    pub const fn new(min: f64, max: f64, default: f64, step: f64) -> Self {
        Self {
            min,
            max,
            default,
            step,
        }
    }

    /// Checks the range is ordered, the step positive and the default inside.
    pub fn validate(&self, name: &'static str) -> Result<()> {
        for value in [self.min, self.max, self.default, self.step] {
            require_finite(name, value)?;
        }
        if self.min > self.max {
            return Err(PricingError::invalid(
                name,
                format!("range min {} exceeds max {}", self.min, self.max),
            ));
        }
        if self.step <= 0.0 {
            return Err(PricingError::invalid(
                name,
                format!("step {} must be > 0", self.step),
            ));
        }
        if !self.contains(self.default) {
            return Err(PricingError::invalid(
                name,
                format!(
                    "default {} is outside [{}, {}]",
                    self.default, self.min, self.max
                ),
            ));
        }
        Ok(())
    }

    pub fn contains(&self, value: f64) -> bool {
        let tol = self.step * 1e-9;
        value >= self.min - tol && value <= self.max + tol
    }

    /// Value as the control would deliver it: range-checked, then snapped to
    /// the nearest `min + n * step` and kept inside `[min, max]`.
    pub fn resolve(&self, name: &'static str, value: f64) -> Result<f64> {
        require_finite(name, value)?;
        if !self.contains(value) {
            return Err(PricingError::invalid(
                name,
                format!("{value} is outside [{}, {}]", self.min, self.max),
            ));
        }
        let steps = ((value - self.min) / self.step).round();
        let snapped = (self.min + steps * self.step).clamp(self.min, self.max);
        Ok(round_to_grid(snapped))
    }
}

// Strips the representation noise of repeated 0.1 steps (0.30000000000000004).
fn round_to_grid(value: f64) -> f64 {
    (value * 1e10).round() / 1e10
}

/// Raw control values as entered: strike and maturity in their own units,
/// rate and volatility in percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    pub strike_price: f64,
    pub years_to_exp: f64,
    pub r_pct: f64,
    pub sigma_pct: f64,
}
