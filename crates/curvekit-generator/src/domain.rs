use curvekit_core::EPSILON;

/// Closed interval `[min, max]` that every coordinate and shape parameter is drawn from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Domain {
    min: f64,
    max: f64,
}

impl Domain {
    /// Builds a domain, or `None` if it cannot be sampled meaningfully.
    ///
    /// Rejects non-finite bounds, `min > max`, ranges too wide to sample
    /// uniformly, and ranges where `|min| + |max| < 2 * EPSILON`.
    pub fn new(min: f64, max: f64) -> Option<Self> {
        if !(min.is_finite() && max.is_finite()) {
            return None;
        }
        // The uniform sampler scales the width by 1 / (1 - f64::EPSILON).
        if !((max - min) / (1.0 - f64::EPSILON)).is_finite() {
            return None;
        }
        if min > max {
            return None;
        }
        if min.abs() + max.abs() < 2.0 * EPSILON {
            return None;
        }
        Some(Self { min, max })
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }
}

impl Default for Domain {
    fn default() -> Self {
        Self {
            min: -1.0,
            max: 1.0,
        }
    }
}
