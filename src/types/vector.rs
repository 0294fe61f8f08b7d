//! Vector type for geometric operations
//!
//! A single [`Vector`] covers both the 2D and the 3D case. The
//! dimensionality is recorded once at construction in [`Dims`] and every
//! dimension-sensitive operation consults it. When two vectors of different
//! dimensionality are combined the operation only uses `x` and `y`.

use crate::error::{Result, VectorError};
use crate::notification::{self, NotificationType};
use crate::types::{Axis, Factor, Operand, Swizzle};
use std::fmt;
use std::iter::FusedIterator;

/// Tolerance used for approximate comparisons
pub const DEFAULT_EPSILON: f64 = 1e-10;

/// Number of components a vector carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dims {
    Two,
    Three,
}

impl Dims {
    /// Component count (2 or 3)
    pub const fn count(self) -> usize {
        match self {
            Dims::Two => 2,
            Dims::Three => 3,
        }
    }
}

impl TryFrom<usize> for Dims {
    type Error = VectorError;

    fn try_from(n: usize) -> Result<Self> {
        match n {
            2 => Ok(Dims::Two),
            3 => Ok(Dims::Three),
            _ => Err(VectorError::InvalidOperation(format!(
                "Invalid dimensions for zero vector: {n}"
            ))),
        }
    }
}

impl fmt::Display for Dims {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}D", self.count())
    }
}

/// 2D or 3D vector
///
/// `z` is kept at zero and ignored while the vector is 2D.
#[derive(Debug, Clone, Copy)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    dims: Dims,
}

impl Vector {
    /// Origin of the plane
    pub const ZERO_2D: Vector = Vector::new(0.0, 0.0);

    /// Origin of space
    pub const ZERO_3D: Vector = Vector::new_3d(0.0, 0.0, 0.0);

    /// Create a new 2D vector
    pub const fn new(x: f64, y: f64) -> Self {
        Vector {
            x,
            y,
            z: 0.0,
            dims: Dims::Two,
        }
    }

    /// Create a new 3D vector
    pub const fn new_3d(x: f64, y: f64, z: f64) -> Self {
        Vector {
            x,
            y,
            z,
            dims: Dims::Three,
        }
    }

    /// Create a vector from a slice of 2 or 3 components
    pub fn from_components(components: &[f64]) -> Result<Self> {
        match *components {
            [x, y] => Ok(Vector::new(x, y)),
            [x, y, z] => Ok(Vector::new_3d(x, y, z)),
            _ => Err(VectorError::InvalidComponentCount(components.len())),
        }
    }

    /// Origin vector of the given dimensionality
    pub const fn zero(dims: Dims) -> Self {
        match dims {
            Dims::Two => Vector::ZERO_2D,
            Dims::Three => Vector::ZERO_3D,
        }
    }

    pub const fn dims(&self) -> Dims {
        self.dims
    }

    pub const fn is_3d(&self) -> bool {
        matches!(self.dims, Dims::Three)
    }

    /// True when `z` takes part in an operation between `self` and `other`
    fn both_3d(&self, other: &Vector) -> bool {
        self.is_3d() && other.is_3d()
    }

    /// Apply `f` to every component the vector carries
    fn map_components(&mut self, f: impl Fn(f64) -> f64) {
        self.x = f(self.x);
        self.y = f(self.y);
        if self.is_3d() {
            self.z = f(self.z);
        }
    }

    /// Combine component-wise with an operand; `z` takes part only when
    /// this vector is 3D and the operand carries a `z`.
    fn zip_components(&mut self, operand: Operand, f: impl Fn(f64, f64) -> f64) {
        let (x, y, z) = operand.parts();
        self.x = f(self.x, x);
        self.y = f(self.y, y);
        if let (true, Some(z)) = (self.is_3d(), z) {
            self.z = f(self.z, z);
        }
    }

    pub(crate) fn component(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    pub(crate) fn component_mut(&mut self, axis: Axis) -> &mut f64 {
        match axis {
            Axis::X => &mut self.x,
            Axis::Y => &mut self.y,
            Axis::Z => &mut self.z,
        }
    }

    /// Add a vector or raw components to this vector
    pub fn add(&mut self, other: impl Into<Operand>) -> &mut Self {
        self.zip_components(other.into(), |a, b| a + b);
        self
    }

    /// Subtract a vector or raw components from this vector
    pub fn sub(&mut self, other: impl Into<Operand>) -> &mut Self {
        self.zip_components(other.into(), |a, b| a - b);
        self
    }

    /// Multiply by a scalar, or component-wise by a vector
    pub fn mult(&mut self, factor: impl Into<Factor>) -> &mut Self {
        let factor: Factor = factor.into();
        match factor {
            Factor::Scalar(n) => self.map_components(|c| c * n),
            Factor::Vector(v) => self.zip_components(Operand::Vector(v), |a, b| a * b),
        }
        self
    }

    /// Divide by a scalar, or component-wise by a vector
    ///
    /// Fails with [`VectorError::DivideByZero`] if the scalar or any divisor
    /// component that takes part is zero. The vector is left untouched on
    /// failure.
    pub fn div(&mut self, factor: impl Into<Factor>) -> Result<&mut Self> {
        let factor: Factor = factor.into();
        match factor {
            Factor::Scalar(n) => {
                if n == 0.0 {
                    return Err(VectorError::DivideByZero);
                }
                self.map_components(|c| c / n);
            }
            Factor::Vector(v) => {
                self.check_divisor(&v)?;
                self.zip_components(Operand::Vector(v), |a, b| a / b);
            }
        }
        Ok(self)
    }

    fn check_divisor(&self, v: &Vector) -> Result<()> {
        if v.x == 0.0 || v.y == 0.0 || (self.both_3d(v) && v.z == 0.0) {
            return Err(VectorError::DivideByZero);
        }
        Ok(())
    }

    /// Overwrite the components `add` would touch
    pub fn set(&mut self, other: impl Into<Operand>) -> &mut Self {
        self.zip_components(other.into(), |_, b| b);
        self
    }

    /// Rotate about the z axis by `angle` radians
    pub fn rotate(&mut self, angle: f64) -> &mut Self {
        self.rotate_plane(angle, Swizzle::XY);
        self
    }

    /// Rotate about `axis` by `angle` radians
    ///
    /// A 2D vector can only be rotated about z.
    pub fn rotate_about(&mut self, angle: f64, axis: Axis) -> Result<&mut Self> {
        if !self.is_3d() && axis != Axis::Z {
            return Err(VectorError::InvalidOperation(format!(
                "Cannot rotate 2D vector around {axis} axis"
            )));
        }
        self.rotate_plane(angle, axis.plane());
        Ok(self)
    }

    /// Rotate the component pair selected by `plane`, keeping its magnitude.
    /// Callers guarantee `plane` is valid for this vector.
    fn rotate_plane(&mut self, angle: f64, plane: Swizzle) {
        let (a, b) = plane.axes();
        let (u, v) = (self.component(a), self.component(b));
        let heading = v.atan2(u) + angle;
        let mag = u.hypot(v);
        *self.component_mut(a) = heading.cos() * mag;
        *self.component_mut(b) = heading.sin() * mag;
    }

    /// Scale to unit length
    ///
    /// The zero vector is left unchanged and a warning notification is
    /// raised.
    pub fn normalize(&mut self) -> &mut Self {
        let mag = self.mag();
        if mag == 0.0 {
            notification::notify(NotificationType::Warning, "Cannot normalize a zero vector");
            return self;
        }
        self.map_components(|c| c / mag);
        self
    }

    /// Normalized copy of this vector
    pub fn normalized(&self) -> Vector {
        let mut v = *self;
        v.normalize();
        v
    }

    /// Reflect across the line through `v`
    ///
    /// Computes `proj - (self - proj)` with `proj = v * self.dot(v)`, so `v`
    /// must be unit length for a true mirror image.
    pub fn reflect(&mut self, v: Vector) -> &mut Self {
        let proj = v * self.dot(v);
        self.sub(proj).mult(-1.0).add(proj)
    }

    /// Squared length
    pub fn mag_sq(&self) -> f64 {
        self.iter().map(|c| c * c).sum()
    }

    /// Length (magnitude)
    pub fn mag(&self) -> f64 {
        self.mag_sq().sqrt()
    }

    /// Rescale to length `n`. A zero vector ends up with non-finite
    /// components.
    pub fn set_mag(&mut self, n: f64) -> &mut Self {
        let mag = self.mag();
        self.mult(n / mag)
    }

    /// Angle from the positive x axis, in radians
    ///
    /// For a 3D vector this is the heading of the xy projection and a
    /// notification is raised.
    pub fn heading(&self) -> f64 {
        if self.is_3d() {
            notification::notify(
                NotificationType::NotSupported,
                "Heading of a 3D vector uses its xy projection",
            );
        }
        self.y.atan2(self.x)
    }

    /// Rotate so that the heading becomes `n` (2D only)
    pub fn set_heading(&mut self, n: f64) -> Result<&mut Self> {
        if self.is_3d() {
            return Err(VectorError::InvalidOperation(
                "Cannot set heading of a 3D vector".to_string(),
            ));
        }
        let heading = self.heading();
        Ok(self.rotate(n - heading))
    }

    /// Component-wise absolute value
    pub fn abs(&self) -> Vector {
        let mut v = *self;
        v.map_components(f64::abs);
        v
    }

    /// Independent copy of this vector
    pub fn copy(&self) -> Vector {
        *self
    }

    /// Component-wise maximum
    pub fn max(&self, other: impl Into<Operand>) -> Vector {
        self.combined(other.into(), f64::max)
    }

    /// Component-wise minimum
    pub fn min(&self, other: impl Into<Operand>) -> Vector {
        self.combined(other.into(), f64::min)
    }

    /// New vector from a component-wise combination. 2D unless both sides
    /// carry a `z`.
    fn combined(&self, operand: Operand, f: impl Fn(f64, f64) -> f64) -> Vector {
        let (x, y, z) = operand.parts();
        match z {
            Some(z) if self.is_3d() => Vector::new_3d(f(self.x, x), f(self.y, y), f(self.z, z)),
            _ => Vector::new(f(self.x, x), f(self.y, y)),
        }
    }

    /// Dot product; the z term only counts when both sides carry a `z`
    pub fn dot(&self, other: impl Into<Operand>) -> f64 {
        let other: Operand = other.into();
        let (x, y, z) = other.parts();
        let xy = self.x * x + self.y * y;
        match z {
            Some(z) if self.is_3d() => xy + self.z * z,
            _ => xy,
        }
    }

    /// Move towards `target` by the fraction `t`, in place
    pub fn lerp(&mut self, target: impl Into<Operand>, t: f64) -> &mut Self {
        let target: Operand = target.into();
        let delta = (target.to_vector() - *self) * t;
        self.add(delta)
    }

    /// Component-wise remainder (`%`) by a scalar or a vector
    ///
    /// Same zero-divisor rule as [`Vector::div`]. The result is 3D only when
    /// this vector and a vector divisor are both 3D.
    pub fn modulo(&self, factor: impl Into<Factor>) -> Result<Vector> {
        let factor: Factor = factor.into();
        match factor {
            Factor::Scalar(n) => {
                if n == 0.0 {
                    return Err(VectorError::DivideByZero);
                }
                let mut v = *self;
                v.map_components(|c| c % n);
                Ok(v)
            }
            Factor::Vector(v) => {
                self.check_divisor(&v)?;
                if self.both_3d(&v) {
                    Ok(Vector::new_3d(self.x % v.x, self.y % v.y, self.z % v.z))
                } else {
                    Ok(Vector::new(self.x % v.x, self.y % v.y))
                }
            }
        }
    }

    /// Compare x and y, and z when both vectors are 3D
    pub fn equals(&self, other: &Vector) -> bool {
        self.x == other.x && self.y == other.y && (!self.both_3d(other) || self.z == other.z)
    }

    /// [`Vector::equals`] with an absolute tolerance per component
    pub fn approx_eq(&self, other: &Vector, epsilon: f64) -> bool {
        let close = |a: f64, b: f64| (a - b).abs() <= epsilon;
        close(self.x, other.x)
            && close(self.y, other.y)
            && (!self.both_3d(other) || close(self.z, other.z))
    }

    /// Iterate over the components the vector carries (x, y[, z])
    pub fn iter(&self) -> Components {
        Components {
            values: [self.x, self.y, self.z],
            front: 0,
            back: self.dims.count(),
        }
    }

    /// Numeric value of the vector, its magnitude
    pub fn to_number(&self) -> f64 {
        self.mag()
    }
}

impl Default for Vector {
    fn default() -> Self {
        Vector::ZERO_3D
    }
}

impl PartialEq for Vector {
    fn eq(&self, other: &Vector) -> bool {
        self.equals(other)
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.dims {
            Dims::Two => write!(f, "({}, {})", self.x, self.y),
            Dims::Three => write!(f, "({}, {}, {})", self.x, self.y, self.z),
        }
    }
}

/// Iterator over the components of a [`Vector`]
#[derive(Debug, Clone)]
pub struct Components {
    values: [f64; 3],
    front: usize,
    back: usize,
}

impl Iterator for Components {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.front == self.back {
            return None;
        }
        let value = self.values[self.front];
        self.front += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.back - self.front;
        (n, Some(n))
    }
}

impl DoubleEndedIterator for Components {
    fn next_back(&mut self) -> Option<f64> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        Some(self.values[self.back])
    }
}

impl ExactSizeIterator for Components {}

impl FusedIterator for Components {}

impl IntoIterator for Vector {
    type Item = f64;
    type IntoIter = Components;

    fn into_iter(self) -> Components {
        self.iter()
    }
}

impl IntoIterator for &Vector {
    type Item = f64;
    type IntoIter = Components;

    fn into_iter(self) -> Components {
        self.iter()
    }
}
