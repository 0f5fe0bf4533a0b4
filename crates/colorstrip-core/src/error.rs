use thiserror::Error;

/// Errors raised by the motion engine and the palette generator.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("random source produced {0}, expected a value in [0, 1)")]
    RandomSourceViolation(f64),
}

pub type Result<T> = std::result::Result<T, Error>;
