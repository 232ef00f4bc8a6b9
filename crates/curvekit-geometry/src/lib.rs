//! curvekit geometry: parametric curves in 3D space.

pub mod curve;

pub use curve::{Circle, Curve, CurveKind, Ellipse, Helix, Parametric};
