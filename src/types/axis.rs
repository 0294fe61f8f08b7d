//! Rotation axis selector

use crate::error::{Result, VectorError};
use crate::types::Swizzle;
use std::fmt;
use std::str::FromStr;

/// Coordinate axis. Used as the rotation axis and to name a single
/// component of a [`Vector`](crate::Vector).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Axis {
    X,
    Y,
    #[default]
    Z,
}

impl Axis {
    /// Swizzle of the plane perpendicular to this axis, i.e. the pair of
    /// components a rotation about this axis moves.
    pub fn plane(self) -> Swizzle {
        match self {
            Axis::X => Swizzle::YZ,
            Axis::Y => Swizzle::XZ,
            Axis::Z => Swizzle::XY,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => write!(f, "x"),
            Axis::Y => write!(f, "y"),
            Axis::Z => write!(f, "z"),
        }
    }
}

impl FromStr for Axis {
    type Err = VectorError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "x" => Ok(Axis::X),
            "y" => Ok(Axis::Y),
            "z" => Ok(Axis::Z),
            _ => Err(VectorError::InvalidOperation(format!(
                "Invalid axis for rotation: {s:?}"
            ))),
        }
    }
}
