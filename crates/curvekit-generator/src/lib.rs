//! Random generation of valid curves.

pub mod domain;
pub mod generator;

pub use domain::Domain;
pub use generator::{CurveGenerator, DEFAULT_MAX_ATTEMPTS};
