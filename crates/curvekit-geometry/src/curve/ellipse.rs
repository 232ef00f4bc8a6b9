//! Ellipse curve.

use curvekit_core::{CurveError, Result, Tolerance, Validate};
use curvekit_math::{Point3D, Vector3D};
use serde::{Deserialize, Serialize};

use super::Parametric;

/// An axis-aligned ellipse in a plane parallel to XY.
///
/// `radius_x` runs along X and `radius_y` along Y. An ellipse with equal
/// radii is still an ellipse and never classifies as a circle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ellipse {
    center: Point3D,
    radius_x: f64,
    radius_y: f64,
}

impl Ellipse {
    /// Creates an ellipse. The caller guarantees both radii exceed `EPSILON`.
    pub fn new(center: Point3D, radius_x: f64, radius_y: f64) -> Self {
        let tol = Tolerance::default();
        debug_assert!(
            tol.is_positive(radius_x) && tol.is_positive(radius_y),
            "ellipse radii ({}, {}) must exceed tolerance",
            radius_x,
            radius_y
        );
        Self {
            center,
            radius_x,
            radius_y,
        }
    }

    pub fn try_new(center: Point3D, radius_x: f64, radius_y: f64) -> Result<Self> {
        let ellipse = Self {
            center,
            radius_x,
            radius_y,
        };
        ellipse.validate()?;
        Ok(ellipse)
    }

    pub fn center(&self) -> Point3D {
        self.center
    }

    pub fn radius_x(&self) -> f64 {
        self.radius_x
    }

    pub fn radius_y(&self) -> f64 {
        self.radius_y
    }
}

impl Parametric for Ellipse {
    fn point_at(&self, t: f64) -> Point3D {
        self.center + Vector3D::new(self.radius_x * t.cos(), self.radius_y * t.sin(), 0.0)
    }

    fn tangent_at(&self, t: f64) -> Vector3D {
        Vector3D::new(-self.radius_x * t.sin(), self.radius_y * t.cos(), 0.0)
    }
}

impl Validate for Ellipse {
    fn validate(&self) -> Result<()> {
        let tol = Tolerance::default();
        for (name, value) in [("radius_x", self.radius_x), ("radius_y", self.radius_y)] {
            if !(value.is_finite() && tol.is_positive(value)) {
                return Err(CurveError::InvalidShape(format!(
                    "ellipse {} {} must be finite and greater than {}",
                    name, value, tol.linear
                )));
            }
        }
        Ok(())
    }
}
