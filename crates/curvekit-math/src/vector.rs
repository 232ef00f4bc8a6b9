use std::fmt;
use std::ops::Mul;

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// A direction in 3D space. Planar curves leave `z` at zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector3D {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3D {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn to_dvec3(self) -> DVec3 {
        DVec3::new(self.x, self.y, self.z)
    }

    pub fn dot(self, other: Self) -> f64 {
        self.to_dvec3().dot(other.to_dvec3())
    }
}

impl From<DVec3> for Vector3D {
    fn from(v: DVec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl Mul<f64> for Vector3D {
    type Output = Vector3D;

    fn mul(self, rhs: f64) -> Vector3D {
        (self.to_dvec3() * rhs).into()
    }
}

/// Formats as `, V {x, y, z}` so it can follow a point on the same line.
impl fmt::Display for Vector3D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(", V ")?;
        crate::write_components(f, self.x, self.y, self.z)
    }
}
