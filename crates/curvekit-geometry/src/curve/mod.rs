//! Curve traits and implementations.

mod circle;
mod ellipse;
mod helix;

use std::fmt;

use curvekit_core::{Result, Validate};
use curvekit_math::{Point3D, Vector3D};
use serde::{Deserialize, Serialize};

pub use circle::Circle;
pub use ellipse::Ellipse;
pub use helix::Helix;

/// Capabilities shared by every parametric curve.
///
/// Variant-specific data such as a radius is not part of this trait. Each
/// curve type exposes its own accessors.
pub trait Parametric {
    /// Evaluate the curve at parameter `t`.
    fn point_at(&self, t: f64) -> Point3D;

    /// Evaluate the first derivative at parameter `t`.
    fn tangent_at(&self, t: f64) -> Vector3D;
}

/// Discriminant of [`Curve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CurveKind {
    Circle,
    Ellipse,
    Helix,
}

impl CurveKind {
    pub const ALL: [CurveKind; 3] = [CurveKind::Circle, CurveKind::Ellipse, CurveKind::Helix];

    /// Type tag used in console output.
    pub fn name(self) -> &'static str {
        match self {
            CurveKind::Circle => "Circle3D",
            CurveKind::Ellipse => "Ellipse3D",
            CurveKind::Helix => "Helix3D",
        }
    }
}

impl fmt::Display for CurveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A curve of one of the supported kinds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Curve {
    Circle(Circle),
    Ellipse(Ellipse),
    Helix(Helix),
}

impl Curve {
    pub fn kind(&self) -> CurveKind {
        match self {
            Curve::Circle(_) => CurveKind::Circle,
            Curve::Ellipse(_) => CurveKind::Ellipse,
            Curve::Helix(_) => CurveKind::Helix,
        }
    }

    pub fn center(&self) -> Point3D {
        match self {
            Curve::Circle(c) => c.center(),
            Curve::Ellipse(e) => e.center(),
            Curve::Helix(h) => h.center(),
        }
    }

    /// Returns the circle if this curve is exactly a [`Circle`].
    pub fn as_circle(&self) -> Option<&Circle> {
        match self {
            Curve::Circle(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_ellipse(&self) -> Option<&Ellipse> {
        match self {
            Curve::Ellipse(e) => Some(e),
            _ => None,
        }
    }

    pub fn as_helix(&self) -> Option<&Helix> {
        match self {
            Curve::Helix(h) => Some(h),
            _ => None,
        }
    }
}

impl Parametric for Curve {
    fn point_at(&self, t: f64) -> Point3D {
        match self {
            Curve::Circle(c) => c.point_at(t),
            Curve::Ellipse(e) => e.point_at(t),
            Curve::Helix(h) => h.point_at(t),
        }
    }

    fn tangent_at(&self, t: f64) -> Vector3D {
        match self {
            Curve::Circle(c) => c.tangent_at(t),
            Curve::Ellipse(e) => e.tangent_at(t),
            Curve::Helix(h) => h.tangent_at(t),
        }
    }
}

impl Validate for Curve {
    fn validate(&self) -> Result<()> {
        match self {
            Curve::Circle(c) => c.validate(),
            Curve::Ellipse(e) => e.validate(),
            Curve::Helix(h) => h.validate(),
        }
    }
}

impl From<Circle> for Curve {
    fn from(c: Circle) -> Self {
        Curve::Circle(c)
    }
}

impl From<Ellipse> for Curve {
    fn from(e: Ellipse) -> Self {
        Curve::Ellipse(e)
    }
}

impl From<Helix> for Curve {
    fn from(h: Helix) -> Self {
        Curve::Helix(h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_4;

    #[test]
    fn test_dispatch_matches_variant() {
        let circle = Circle::new(Point3D::new(1.0, 1.0, 0.0), 2.0);
        let helix = Helix::new(Point3D::new(0.0, 0.0, 1.0), 0.5, 0.2);

        let c: Curve = circle.into();
        let h: Curve = helix.into();
        assert_eq!(c.point_at(FRAC_PI_4), circle.point_at(FRAC_PI_4));
        assert_eq!(c.tangent_at(FRAC_PI_4), circle.tangent_at(FRAC_PI_4));
        assert_eq!(h.point_at(FRAC_PI_4), helix.point_at(FRAC_PI_4));
        assert_eq!(h.tangent_at(FRAC_PI_4), helix.tangent_at(FRAC_PI_4));
    }

    #[test]
    fn test_round_ellipse_is_not_a_circle() {
        let curve: Curve = Ellipse::new(Point3D::ORIGIN, 1.0, 1.0).into();
        assert_eq!(curve.kind(), CurveKind::Ellipse);
        assert!(curve.as_circle().is_none());
        assert!(curve.as_ellipse().is_some());
    }

    #[test]
    fn test_as_circle_returns_typed_handle() {
        let curve: Curve = Circle::new(Point3D::ORIGIN, 3.0).into();
        let circle = curve.as_circle().expect("circle variant");
        assert_eq!(circle.radius(), 3.0);
        assert!(curve.as_helix().is_none());
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(CurveKind::Circle.to_string(), "Circle3D");
        assert_eq!(CurveKind::Ellipse.to_string(), "Ellipse3D");
        assert_eq!(CurveKind::Helix.to_string(), "Helix3D");
        assert_eq!(CurveKind::ALL.len(), 3);
    }

    #[test]
    fn test_center_and_validate_delegate() {
        let center = Point3D::new(1.0, 2.0, 3.0);
        let curve: Curve = Helix::new(center, 1.0, -1.0).into();
        assert_eq!(curve.center(), center);
        assert!(curve.is_valid());
    }
}
