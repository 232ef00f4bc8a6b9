use crate::error::Result;

/// Validate the shape invariants of a geometric entity.
pub trait Validate {
    fn validate(&self) -> Result<()>;

    fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}
