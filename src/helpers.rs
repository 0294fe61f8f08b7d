//! Free-function forms of the vector operations
//!
//! Each helper takes its first vector by value and returns a new one, so the
//! caller's vector is never modified.
//!
//! ```
//! use vecta::{helpers, Vector};
//!
//! let a = Vector::new(1.0, 2.0);
//! let c = helpers::add(a, Vector::new(3.0, 4.0));
//! assert_eq!(c, Vector::new(4.0, 6.0));
//! assert_eq!(a, Vector::new(1.0, 2.0));
//! ```

use crate::error::Result;
use crate::types::{Axis, Dims, Factor, Operand, Vector};

/// Sum of two vectors
pub fn add(v1: Vector, v2: impl Into<Operand>) -> Vector {
    let mut v = v1.copy();
    v.add(v2);
    v
}

/// Difference of two vectors
pub fn sub(v1: Vector, v2: impl Into<Operand>) -> Vector {
    let mut v = v1.copy();
    v.sub(v2);
    v
}

/// Product with a scalar or, component-wise, with a vector
pub fn mult(v1: Vector, factor: impl Into<Factor>) -> Vector {
    let mut v = v1.copy();
    v.mult(factor);
    v
}

/// Quotient by a scalar or, component-wise, by a vector
pub fn div(v1: Vector, factor: impl Into<Factor>) -> Result<Vector> {
    let mut v = v1.copy();
    v.div(factor)?;
    Ok(v)
}

/// `v` rotated about z by `angle` radians
pub fn rotate(v: Vector, angle: f64) -> Vector {
    let mut v2 = v.copy();
    v2.rotate(angle);
    v2
}

/// `v` rotated about `axis` by `angle` radians
pub fn rotate_about(v: Vector, angle: f64, axis: Axis) -> Result<Vector> {
    let mut v2 = v.copy();
    v2.rotate_about(angle, axis)?;
    Ok(v2)
}

pub fn dot(v1: Vector, v2: impl Into<Operand>) -> f64 {
    v1.dot(v2)
}

/// Point at fraction `t` of the way from `v1` to `v2`
pub fn lerp(mut v1: Vector, v2: impl Into<Operand>, t: f64) -> Vector {
    *v1.lerp(v2, t)
}

pub fn normalize(v: Vector) -> Vector {
    v.normalized()
}

/// Origin vector with `dims` components (2 or 3)
pub fn zero(dims: usize) -> Result<Vector> {
    Ok(Vector::zero(Dims::try_from(dims)?))
}

pub fn zero_2d() -> Vector {
    Vector::ZERO_2D
}

pub fn zero_3d() -> Vector {
    Vector::ZERO_3D
}
