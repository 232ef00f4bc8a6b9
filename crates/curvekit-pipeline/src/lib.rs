//! Generate curves, evaluate them, and aggregate the circles among them.

pub mod config;
pub mod report;

use curvekit_core::Result;
use curvekit_generator::CurveGenerator;
use curvekit_geometry::{Circle, Curve, Parametric};
use tracing::{debug, info};

pub use config::PipelineConfig;
pub use report::{Evaluation, Report};

/// Builds the curve collection described by `config`.
pub fn generate(config: &PipelineConfig) -> Result<Vec<Curve>> {
    config.validate()?;

    let generator = match config.seed {
        Some(seed) => CurveGenerator::seeded(seed),
        None => CurveGenerator::from_entropy(),
    };
    let mut generator = generator.with_max_attempts(config.max_attempts);
    generator.set_domain(config.domain_min, config.domain_max);

    generator.make_many(config.count)
}

/// Evaluates every curve at `t`, in collection order.
pub fn evaluate(curves: &[Curve], t: f64) -> Vec<Evaluation> {
    curves
        .iter()
        .map(|curve| Evaluation {
            kind: curve.kind(),
            point: curve.point_at(t),
            tangent: curve.tangent_at(t),
        })
        .collect()
}

/// Picks out the curves that are exactly circles and sums their radii.
///
/// The returned circles borrow from `curves` and keep collection order.
pub fn select_circles(curves: &[Curve]) -> (Vec<&Circle>, f64) {
    let mut circles = Vec::new();
    let mut radius_sum = 0.0;
    for circle in curves.iter().filter_map(Curve::as_circle) {
        radius_sum += circle.radius();
        circles.push(circle);
    }
    (circles, radius_sum)
}

/// Stable ascending sort by radius. Equal radii keep their relative order.
pub fn sort_by_radius(circles: &mut [&Circle]) {
    circles.sort_by(|a, b| a.radius().total_cmp(&b.radius()));
}

/// Runs evaluation, filtering, sorting and aggregation over `curves`.
pub fn analyze(curves: &[Curve], t: f64) -> Report {
    let evaluations = evaluate(curves, t);
    let (mut circles, radius_sum) = select_circles(curves);
    sort_by_radius(&mut circles);
    debug!(
        curves = curves.len(),
        circles = circles.len(),
        radius_sum,
        "analyzed curve collection"
    );

    Report {
        parameter: t,
        evaluations,
        circles: circles.into_iter().copied().collect(),
        radius_sum,
    }
}

/// Generates a collection per `config` and analyzes it.
pub fn run(config: &PipelineConfig) -> Result<(Vec<Curve>, Report)> {
    let curves = generate(config)?;
    info!(count = curves.len(), parameter = config.parameter, "running pipeline");
    let report = analyze(&curves, config.parameter);
    Ok((curves, report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use curvekit_geometry::{Ellipse, Helix};
    use curvekit_math::Point3D;

    #[test]
    fn test_select_circles_skips_other_kinds() {
        let curves: Vec<Curve> = vec![
            Ellipse::new(Point3D::ORIGIN, 2.0, 2.0).into(),
            Circle::new(Point3D::ORIGIN, 0.5).into(),
            Helix::new(Point3D::ORIGIN, 4.0, 1.0).into(),
        ];
        let (circles, sum) = select_circles(&curves);
        assert_eq!(circles.len(), 1);
        assert_eq!(sum, 0.5);
        assert!(std::ptr::eq(circles[0], curves[1].as_circle().unwrap()));
    }

    #[test]
    fn test_sort_by_radius_is_stable() {
        let a = Circle::new(Point3D::new(1.0, 0.0, 0.0), 2.0);
        let b = Circle::new(Point3D::new(2.0, 0.0, 0.0), 1.0);
        let c = Circle::new(Point3D::new(3.0, 0.0, 0.0), 2.0);
        let mut circles = vec![&a, &b, &c];
        sort_by_radius(&mut circles);

        let xs: Vec<f64> = circles.iter().map(|c| c.center().x).collect();
        assert_eq!(xs, vec![2.0, 1.0, 3.0]);
    }

    #[test]
    fn test_evaluate_keeps_order() {
        let curves: Vec<Curve> = vec![
            Helix::new(Point3D::ORIGIN, 1.0, 1.0).into(),
            Circle::new(Point3D::ORIGIN, 1.0).into(),
        ];
        let evaluations = evaluate(&curves, 0.0);
        assert_eq!(evaluations.len(), 2);
        assert_eq!(evaluations[0].kind, curves[0].kind());
        assert_eq!(evaluations[1].point, Point3D::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_generate_respects_count_and_seed() {
        let config = PipelineConfig {
            count: 25,
            seed: Some(17),
            ..PipelineConfig::default()
        };
        let first = generate(&config).unwrap();
        let second = generate(&config).unwrap();
        assert_eq!(first.len(), 25);
        assert_eq!(first, second);
    }

    #[test]
    fn test_generate_rejects_invalid_config() {
        let config = PipelineConfig {
            parameter: f64::NAN,
            ..PipelineConfig::default()
        };
        assert!(generate(&config).is_err());
    }
}
