use thiserror::Error;

#[derive(Debug, Error)]
pub enum CurveError {
    /// A shape parameter of a single curve is out of its valid range.
    #[error("Invalid shape: {0}")]
    InvalidShape(String),

    /// The sampling domain cannot produce a valid value for `parameter`.
    #[error(
        "Domain [{min}, {max}] exhausted after {attempts} attempts while sampling {parameter}"
    )]
    DomainExhausted {
        parameter: &'static str,
        attempts: usize,
        min: f64,
        max: f64,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl CurveError {
    /// Whether the error comes from configuration rather than from a single curve.
    pub fn is_config(&self) -> bool {
        matches!(self, Self::DomainExhausted { .. } | Self::Config(_))
    }
}

pub type Result<T> = std::result::Result<T, CurveError>;
