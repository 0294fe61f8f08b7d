//! # vecta
//!
//! A 2D and 3D vector value type for graphics, physics and simulation code.
//!
//! One [`Vector`] type covers both dimensionalities. The number of
//! components is fixed when the vector is created and every operation that
//! depends on it checks the recorded [`Dims`]. Combining a 2D and a 3D
//! vector is allowed and only uses `x` and `y`.
//!
//! ## Quick Start
//!
//! ```rust
//! use vecta::{helpers, Axis, Vector};
//! use std::f64::consts::PI;
//!
//! // In-place operations chain
//! let mut a = Vector::new(1.0, 2.0);
//! a.add((3.0, 4.0)).mult(2.0);
//! assert_eq!(a, Vector::new(8.0, 12.0));
//!
//! // Operators and helpers work on copies
//! let b = Vector::new_3d(3.0, 0.0, 1.0);
//! let c = helpers::rotate_about(b, PI / 2.0, Axis::Y)?;
//! assert!(c.approx_eq(&Vector::new_3d(-1.0, 0.0, 3.0), 1e-9));
//!
//! // Fallible operations return a Result
//! let q = (Vector::new(5.0, 3.0) % Vector::new(2.0, 4.0))?;
//! assert_eq!(q.to_string(), "(1, 3)");
//! # Ok::<(), vecta::VectorError>(())
//! ```
//!
//! ## Errors and diagnostics
//!
//! Division or remainder by zero and dimension-incompatible operations
//! return a [`VectorError`]. Degenerate but defined cases (normalizing the
//! zero vector, the heading of a 3D vector) are reported through the
//! [`notification`] module instead.

#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod helpers;
pub mod notification;
pub mod types;

// Re-export commonly used types
pub use error::{Result, VectorError};
pub use types::{Axis, Components, Dims, Factor, Operand, Swizzle, Vector, DEFAULT_EPSILON};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_reexports() {
        let v: Vector = Vector::new(1.0, 2.0);
        assert_eq!(v.dims(), Dims::Two);
        let err: Result<Vector> = helpers::zero(5);
        assert!(err.is_err());
    }
}
