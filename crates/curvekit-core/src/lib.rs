pub mod error;
pub mod tolerance;
pub mod traits;

pub use error::{CurveError, Result};
pub use tolerance::{Tolerance, EPSILON};
pub use traits::Validate;
