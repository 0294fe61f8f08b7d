//! Error types for vecta

use thiserror::Error;

/// Main error type for vector operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum VectorError {
    /// Scalar divisor, or a relevant divisor component, was zero
    #[error("Div parameter cannot be zero")]
    DivideByZero,

    /// Operation is not defined for the vector's dimensionality or arguments
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    /// Dynamic construction with a component count other than 2 or 3
    #[error("Invalid component count: expected 2 or 3, got {0}")]
    InvalidComponentCount(usize),
}

/// Result type alias for vector operations
pub type Result<T> = std::result::Result<T, VectorError>;

impl From<String> for VectorError {
    fn from(s: String) -> Self {
        VectorError::InvalidOperation(s)
    }
}

impl From<&str> for VectorError {
    fn from(s: &str) -> Self {
        VectorError::InvalidOperation(s.to_string())
    }
}
