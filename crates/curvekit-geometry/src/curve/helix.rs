//! Helix curve.

use curvekit_core::{CurveError, Result, Tolerance, Validate};
use curvekit_math::{Point3D, Vector3D};
use serde::{Deserialize, Serialize};

use super::Parametric;

/// A helix with its axis parallel to Z.
///
/// `P(t) = center + (radius * t * cos t, radius * t * sin t, pitch * t)`.
/// The distance from the axis grows linearly with `t`, and the height
/// advances by `pitch` per radian. A negative pitch winds downward.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Helix {
    center: Point3D,
    radius: f64,
    pitch: f64,
}

impl Helix {
    /// Creates a helix. The caller guarantees `radius > EPSILON` and `|pitch| > EPSILON`.
    pub fn new(center: Point3D, radius: f64, pitch: f64) -> Self {
        let tol = Tolerance::default();
        debug_assert!(
            tol.is_positive(radius) && tol.exceeds(pitch),
            "helix radius {} and pitch {} must exceed tolerance",
            radius,
            pitch
        );
        Self {
            center,
            radius,
            pitch,
        }
    }

    pub fn try_new(center: Point3D, radius: f64, pitch: f64) -> Result<Self> {
        let helix = Self {
            center,
            radius,
            pitch,
        };
        helix.validate()?;
        Ok(helix)
    }

    pub fn center(&self) -> Point3D {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn pitch(&self) -> f64 {
        self.pitch
    }
}

impl Parametric for Helix {
    fn point_at(&self, t: f64) -> Point3D {
        let r = self.radius * t;
        self.center + Vector3D::new(r * t.cos(), r * t.sin(), self.pitch * t)
    }

    fn tangent_at(&self, t: f64) -> Vector3D {
        let (sin, cos) = t.sin_cos();
        Vector3D::new(
            self.radius * (cos - t * sin),
            self.radius * (sin + t * cos),
            self.pitch,
        )
    }
}

impl Validate for Helix {
    fn validate(&self) -> Result<()> {
        let tol = Tolerance::default();
        if !(self.radius.is_finite() && tol.is_positive(self.radius)) {
            return Err(CurveError::InvalidShape(format!(
                "helix radius {} must be finite and greater than {}",
                self.radius, tol.linear
            )));
        }
        if !(self.pitch.is_finite() && tol.exceeds(self.pitch)) {
            return Err(CurveError::InvalidShape(format!(
                "helix pitch {} must be finite with magnitude greater than {}",
                self.pitch, tol.linear
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_helix_starts_at_center() {
        let center = Point3D::new(0.3, -0.7, 2.0);
        let helix = Helix::new(center, 1.5, -0.4);
        assert_eq!(helix.point_at(0.0), center);
        assert_eq!(helix.tangent_at(0.0), Vector3D::new(1.5, 0.0, -0.4));
    }

    #[test]
    fn test_helix_height_is_linear() {
        let center = Point3D::new(0.0, 0.0, 1.0);
        let helix = Helix::new(center, 2.0, 0.25);
        for i in -8..=8 {
            let t = i as f64 * PI / 4.0;
            assert_eq!(helix.point_at(t).z, center.z + 0.25 * t);
            assert_eq!(helix.tangent_at(t).z, 0.25);
        }
    }

    #[test]
    fn test_helix_tangent_matches_finite_difference() {
        let helix = Helix::new(Point3D::new(1.0, 2.0, 3.0), 0.8, 0.3);
        let h = 1e-6;
        for &t in &[0.1, 0.9, 2.5, 5.0] {
            let diff = (helix.point_at(t + h) - helix.point_at(t - h)) * (0.5 / h);
            let tang = helix.tangent_at(t);
            assert_abs_diff_eq!(diff.x, tang.x, epsilon = 1e-5);
            assert_abs_diff_eq!(diff.y, tang.y, epsilon = 1e-5);
            assert_abs_diff_eq!(diff.z, tang.z, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_helix_try_new() {
        assert!(Helix::try_new(Point3D::ORIGIN, 1.0, -0.5).is_ok());
        assert!(Helix::try_new(Point3D::ORIGIN, 1.0, 0.0).is_err());
        assert!(Helix::try_new(Point3D::ORIGIN, -1.0, 0.5).is_err());
        assert!(Helix::try_new(Point3D::ORIGIN, 0.0, 0.5).is_err());
    }
}
