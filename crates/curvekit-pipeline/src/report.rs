//! Pipeline results and their console rendering.

use std::fmt;

use curvekit_core::{CurveError, Result};
use curvekit_geometry::{Circle, CurveKind};
use curvekit_math::{Point3D, Vector3D};
use serde::Serialize;

/// Position and tangent of one curve at the evaluation parameter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Evaluation {
    pub kind: CurveKind,
    pub point: Point3D,
    pub tangent: Vector3D,
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.kind, self.point, self.tangent)
    }
}

/// Outcome of one pipeline run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    /// Parameter the curves were evaluated at.
    pub parameter: f64,
    /// One entry per curve, in collection order.
    pub evaluations: Vec<Evaluation>,
    /// Circles from the collection, ascending by radius.
    pub circles: Vec<Circle>,
    /// Sum of circle radii, accumulated in collection order.
    pub radius_sum: f64,
}

impl Report {
    pub fn sorted_radii(&self) -> impl Iterator<Item = f64> + '_ {
        self.circles.iter().map(Circle::radius)
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| CurveError::Serialization(e.to_string()))
    }
}

/// Renders the console layout: one evaluation line per curve followed by a
/// blank line, then the sorted radii and their sum.
impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for evaluation in &self.evaluations {
            writeln!(f, "{}", evaluation)?;
            writeln!(f)?;
        }
        writeln!(f, "Sorted radiuses:")?;
        for radius in self.sorted_radii() {
            writeln!(f, "{}", radius)?;
        }
        writeln!(f, "sum = {}", self.radius_sum)
    }
}
