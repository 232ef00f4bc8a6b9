/// Minimum magnitude below which a scalar counts as zero.
pub const EPSILON: f64 = 1e-6;

/// Tolerance used when deciding whether a shape parameter is usable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance {
    /// Linear tolerance for lengths and distances (in model units)
    pub linear: f64,
}

impl Tolerance {
    pub const DEFAULT_LINEAR: f64 = EPSILON;

    pub fn default_precision() -> Self {
        Self {
            linear: Self::DEFAULT_LINEAR,
        }
    }

    /// Check if a value's magnitude is strictly above the tolerance.
    ///
    /// NaN never exceeds.
    pub fn exceeds(self, v: f64) -> bool {
        v.abs() > self.linear
    }

    /// Check if a value is positive and strictly above the tolerance.
    pub fn is_positive(self, v: f64) -> bool {
        v > self.linear
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::default_precision()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exceeds_is_strict() {
        let tol = Tolerance::default();
        assert!(!tol.exceeds(EPSILON));
        assert!(!tol.exceeds(-EPSILON));
        assert!(tol.exceeds(2.0 * EPSILON));
        assert!(tol.exceeds(-0.5));
        assert!(!tol.exceeds(f64::NAN));
    }

    #[test]
    fn test_is_positive_rejects_negative() {
        let tol = Tolerance::default();
        assert!(tol.is_positive(0.5));
        assert!(!tol.is_positive(-0.5));
        assert!(!tol.is_positive(EPSILON));
        assert!(!tol.is_positive(f64::NAN));
    }
}
