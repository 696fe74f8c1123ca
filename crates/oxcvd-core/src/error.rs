//! Error types for oxcvd

use thiserror::Error;

/// Result type for oxcvd operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in oxcvd operations
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// An LMS model matrix could not be inverted
    #[error("Singular color model: {0} is not invertible")]
    SingularModel(&'static str),

    /// The projection plane normal is (near) orthogonal to the deficiency axis
    #[error("Degenerate confusion geometry: plane normal has no {axis} component")]
    DegenerateGeometry { axis: char },

    /// Severity outside the [0, 1] range
    #[error("Severity must be in [0, 1], got {severity}")]
    SeverityOutOfRange { severity: f32 },

    /// Unknown deficiency name
    #[error("Unknown deficiency '{0}': expected protan, deutan or tritan")]
    UnknownDeficiency(String),

    /// Unknown simulation model name
    #[error("Unknown model '{0}'")]
    UnknownModel(String),

    /// Model name is recognized but its algorithm is not shipped
    #[error("Model '{0}' is not supported by this build")]
    UnsupportedModel(String),

    /// Unknown filter name
    #[error("Unknown filter '{0}': expected simulate or daltonize")]
    UnknownFilter(String),

    /// Filter is recognized but not implemented
    #[error("Filter '{0}' is not implemented")]
    UnimplementedFilter(String),

    /// Buffer size mismatch
    #[error("Buffer size mismatch: expected {expected}, got {actual}")]
    BufferSize { expected: usize, actual: usize },
}
