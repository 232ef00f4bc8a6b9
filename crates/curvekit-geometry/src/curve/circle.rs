//! Circle curve.

use curvekit_core::{CurveError, Result, Tolerance, Validate};
use curvekit_math::{Point3D, Vector3D};
use serde::{Deserialize, Serialize};

use super::Parametric;

/// A circle in a plane parallel to XY, parameterized by angle `t`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    center: Point3D,
    radius: f64,
}

impl Circle {
    /// Creates a circle. The caller guarantees `radius > EPSILON`.
    pub fn new(center: Point3D, radius: f64) -> Self {
        debug_assert!(
            Tolerance::default().is_positive(radius),
            "circle radius {} must exceed tolerance",
            radius
        );
        Self { center, radius }
    }

    /// Creates a circle, rejecting a radius that does not exceed the tolerance.
    pub fn try_new(center: Point3D, radius: f64) -> Result<Self> {
        let circle = Self { center, radius };
        circle.validate()?;
        Ok(circle)
    }

    pub fn center(&self) -> Point3D {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl Parametric for Circle {
    fn point_at(&self, t: f64) -> Point3D {
        self.center + Vector3D::new(self.radius * t.cos(), self.radius * t.sin(), 0.0)
    }

    fn tangent_at(&self, t: f64) -> Vector3D {
        Vector3D::new(-self.radius * t.sin(), self.radius * t.cos(), 0.0)
    }
}

impl Validate for Circle {
    fn validate(&self) -> Result<()> {
        if !(self.radius.is_finite() && Tolerance::default().is_positive(self.radius)) {
            return Err(CurveError::InvalidShape(format!(
                "circle radius {} must be finite and greater than {}",
                self.radius,
                Tolerance::DEFAULT_LINEAR
            )));
        }
        Ok(())
    }
}
