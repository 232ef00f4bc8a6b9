//! Random curve generator.
//!
//! Every coordinate and shape parameter is drawn from one uniform
//! distribution over the generator's [`Domain`]. Shape parameters are
//! rejection-sampled until they are valid, so the generator only ever
//! hands out curves that pass [`Validate`](curvekit_core::Validate).

use curvekit_core::{CurveError, Result, Tolerance};
use curvekit_geometry::{Circle, Curve, CurveKind, Ellipse, Helix};
use curvekit_math::Point3D;
use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, trace, warn};

use crate::domain::Domain;

/// Upper bound on draws per parameter before giving up on the domain.
pub const DEFAULT_MAX_ATTEMPTS: usize = 10_000;

/// Produces random, valid curves from an injected random source.
#[derive(Debug, Clone)]
pub struct CurveGenerator<R = StdRng> {
    rng: R,
    domain: Domain,
    dist: Uniform<f64>,
    max_attempts: usize,
    tolerance: Tolerance,
}

impl CurveGenerator<StdRng> {
    /// Generator seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// Reproducible generator.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl Default for CurveGenerator<StdRng> {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl<R: Rng> CurveGenerator<R> {
    pub fn new(rng: R) -> Self {
        let domain = Domain::default();
        Self {
            rng,
            domain,
            dist: Uniform::new_inclusive(domain.min(), domain.max()),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            tolerance: Tolerance::default(),
        }
    }

    /// Bound the rejection loops. Zero is treated as one attempt.
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    pub fn domain(&self) -> Domain {
        self.domain
    }

    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// Replace the sampling interval.
    ///
    /// Returns `false` and keeps the current domain when `[min, max]` is
    /// collapsed (`|min| + |max| < 2 * EPSILON`), inverted, not finite, or
    /// too wide for the uniform sampler.
    pub fn set_domain(&mut self, min: f64, max: f64) -> bool {
        match Domain::new(min, max) {
            Some(domain) => {
                debug!(min, max, "sampling domain updated");
                self.domain = domain;
                self.dist = Uniform::new_inclusive(domain.min(), domain.max());
                true
            }
            None => {
                warn!(
                    min,
                    max,
                    current_min = self.domain.min(),
                    current_max = self.domain.max(),
                    "ignoring unusable sampling domain"
                );
                false
            }
        }
    }

    pub fn make_circle(&mut self) -> Result<Curve> {
        let radius = self.sample_radius("radius")?;
        let center = Point3D::planar(self.sample(), self.sample());
        Ok(Circle::new(center, radius).into())
    }

    pub fn make_ellipse(&mut self) -> Result<Curve> {
        let radius_x = self.sample_radius("radius_x")?;
        let radius_y = self.sample_radius("radius_y")?;
        let center = Point3D::planar(self.sample(), self.sample());
        Ok(Ellipse::new(center, radius_x, radius_y).into())
    }

    pub fn make_helix(&mut self) -> Result<Curve> {
        let radius = self.sample_radius("radius")?;
        let pitch = self.sample_pitch()?;
        let center = Point3D::new(self.sample(), self.sample(), self.sample());
        Ok(Helix::new(center, radius, pitch).into())
    }

    pub fn make_kind(&mut self, kind: CurveKind) -> Result<Curve> {
        match kind {
            CurveKind::Circle => self.make_circle(),
            CurveKind::Ellipse => self.make_ellipse(),
            CurveKind::Helix => self.make_helix(),
        }
    }

    /// A curve of a uniformly chosen kind.
    pub fn make_random(&mut self) -> Result<Curve> {
        let kind = CurveKind::ALL[self.rng.gen_range(0..CurveKind::ALL.len())];
        self.make_kind(kind)
    }

    pub fn make_many(&mut self, count: usize) -> Result<Vec<Curve>> {
        let curves = (0..count)
            .map(|_| self.make_random())
            .collect::<Result<Vec<_>>>()?;
        debug!(count = curves.len(), "generated curves");
        Ok(curves)
    }

    fn sample(&mut self) -> f64 {
        self.dist.sample(&mut self.rng)
    }

    /// Draw `|x|` until it is strictly above the tolerance.
    fn sample_radius(&mut self, parameter: &'static str) -> Result<f64> {
        let tol = self.tolerance;
        self.sample_until(parameter, |x| {
            let r = x.abs();
            tol.is_positive(r).then_some(r)
        })
    }

    /// Draw until `|x|` is above the tolerance, keeping the sign.
    fn sample_pitch(&mut self) -> Result<f64> {
        let tol = self.tolerance;
        self.sample_until("pitch", |x| tol.exceeds(x).then_some(x))
    }

    fn sample_until(
        &mut self,
        parameter: &'static str,
        accept: impl Fn(f64) -> Option<f64>,
    ) -> Result<f64> {
        for attempt in 1..=self.max_attempts {
            let x = self.sample();
            if let Some(value) = accept(x) {
                return Ok(value);
            }
            trace!(parameter, attempt, value = x, "rejected sample");
        }
        Err(CurveError::DomainExhausted {
            parameter,
            attempts: self.max_attempts,
            min: self.domain.min(),
            max: self.domain.max(),
        })
    }
}
