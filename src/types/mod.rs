//! Core vector types

mod axis;
mod interop;
mod operand;
mod ops;
mod swizzle;
mod vector;

pub use axis::Axis;
pub use operand::{Factor, Operand};
pub use swizzle::Swizzle;
pub use vector::{Components, Dims, Vector, DEFAULT_EPSILON};
