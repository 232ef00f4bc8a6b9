pub mod point;
pub mod vector;

pub use point::Point3D;
pub use vector::Vector3D;

/// Write three components, honoring a precision passed to the formatter.
pub(crate) fn write_components(
    f: &mut std::fmt::Formatter<'_>,
    x: f64,
    y: f64,
    z: f64,
) -> std::fmt::Result {
    match f.precision() {
        Some(p) => write!(f, "{{{:.*}, {:.*}, {:.*}}}", p, x, p, y, p, z),
        None => write!(f, "{{{}, {}, {}}}", x, y, z),
    }
}
