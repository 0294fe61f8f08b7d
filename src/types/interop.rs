//! Conversions between [`Vector`] and plain arrays, tuples and `nalgebra`

use crate::error::{Result, VectorError};
use crate::types::{Dims, Vector};

impl From<[f64; 2]> for Vector {
    fn from([x, y]: [f64; 2]) -> Self {
        Vector::new(x, y)
    }
}

impl From<[f64; 3]> for Vector {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Vector::new_3d(x, y, z)
    }
}

impl From<(f64, f64)> for Vector {
    fn from((x, y): (f64, f64)) -> Self {
        Vector::new(x, y)
    }
}

impl From<(f64, f64, f64)> for Vector {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Vector::new_3d(x, y, z)
    }
}

impl From<Vector> for Vec<f64> {
    fn from(v: Vector) -> Self {
        v.iter().collect()
    }
}

impl From<nalgebra::Vector2<f64>> for Vector {
    fn from(v: nalgebra::Vector2<f64>) -> Self {
        Vector::new(v.x, v.y)
    }
}

impl From<nalgebra::Vector3<f64>> for Vector {
    fn from(v: nalgebra::Vector3<f64>) -> Self {
        Vector::new_3d(v.x, v.y, v.z)
    }
}

impl TryFrom<Vector> for nalgebra::Vector2<f64> {
    type Error = VectorError;

    fn try_from(v: Vector) -> Result<Self> {
        match v.dims() {
            Dims::Two => Ok(nalgebra::Vector2::new(v.x, v.y)),
            Dims::Three => Err(VectorError::InvalidOperation(
                "Cannot convert a 3D vector to Vector2".to_string(),
            )),
        }
    }
}

impl TryFrom<Vector> for nalgebra::Vector3<f64> {
    type Error = VectorError;

    fn try_from(v: Vector) -> Result<Self> {
        match v.dims() {
            Dims::Three => Ok(nalgebra::Vector3::new(v.x, v.y, v.z)),
            Dims::Two => Err(VectorError::InvalidOperation(
                "Cannot convert a 2D vector to Vector3".to_string(),
            )),
        }
    }
}
