//! Two-component swizzles (`xy`, `xz`, `yx`, `yz`, `zx`, `zy`)
//!
//! A swizzle reads two components in a given order as a 2D [`Vector`], or
//! writes a 2D vector's `x` and `y` back into those two components. Any
//! swizzle naming `z` needs a 3D receiver.

use crate::error::{Result, VectorError};
use crate::types::{Axis, Vector};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Swizzle {
    XY,
    XZ,
    YX,
    YZ,
    ZX,
    ZY,
}

impl Swizzle {
    pub const ALL: [Swizzle; 6] = [
        Swizzle::XY,
        Swizzle::XZ,
        Swizzle::YX,
        Swizzle::YZ,
        Swizzle::ZX,
        Swizzle::ZY,
    ];

    /// The two components selected, in order
    pub const fn axes(self) -> (Axis, Axis) {
        match self {
            Swizzle::XY => (Axis::X, Axis::Y),
            Swizzle::XZ => (Axis::X, Axis::Z),
            Swizzle::YX => (Axis::Y, Axis::X),
            Swizzle::YZ => (Axis::Y, Axis::Z),
            Swizzle::ZX => (Axis::Z, Axis::X),
            Swizzle::ZY => (Axis::Z, Axis::Y),
        }
    }

    pub const fn uses_z(self) -> bool {
        !matches!(self, Swizzle::XY | Swizzle::YX)
    }
}

impl Vector {
    /// Read the components selected by `swizzle` as a 2D vector
    pub fn swizzle(&self, swizzle: Swizzle) -> Result<Vector> {
        if swizzle.uses_z() && !self.is_3d() {
            return Err(VectorError::InvalidOperation(
                "Cannot get z component of a 2D vector".to_string(),
            ));
        }
        let (a, b) = swizzle.axes();
        Ok(Vector::new(self.component(a), self.component(b)))
    }

    /// Write `v.x` and `v.y` into the components selected by `swizzle`
    pub fn set_swizzle(&mut self, swizzle: Swizzle, v: Vector) -> Result<&mut Self> {
        if swizzle.uses_z() && !self.is_3d() {
            return Err(VectorError::InvalidOperation(
                "Cannot set z component of a 2D vector".to_string(),
            ));
        }
        let (a, b) = swizzle.axes();
        *self.component_mut(a) = v.x;
        *self.component_mut(b) = v.y;
        Ok(self)
    }

    pub fn xy(&self) -> Vector {
        Vector::new(self.x, self.y)
    }

    pub fn yx(&self) -> Vector {
        Vector::new(self.y, self.x)
    }

    pub fn xz(&self) -> Result<Vector> {
        self.swizzle(Swizzle::XZ)
    }

    pub fn yz(&self) -> Result<Vector> {
        self.swizzle(Swizzle::YZ)
    }

    pub fn zx(&self) -> Result<Vector> {
        self.swizzle(Swizzle::ZX)
    }

    pub fn zy(&self) -> Result<Vector> {
        self.swizzle(Swizzle::ZY)
    }

    pub fn set_xy(&mut self, v: Vector) -> &mut Self {
        self.x = v.x;
        self.y = v.y;
        self
    }

    pub fn set_yx(&mut self, v: Vector) -> &mut Self {
        self.y = v.x;
        self.x = v.y;
        self
    }

    pub fn set_xz(&mut self, v: Vector) -> Result<&mut Self> {
        self.set_swizzle(Swizzle::XZ, v)
    }

    pub fn set_yz(&mut self, v: Vector) -> Result<&mut Self> {
        self.set_swizzle(Swizzle::YZ, v)
    }

    pub fn set_zx(&mut self, v: Vector) -> Result<&mut Self> {
        self.set_swizzle(Swizzle::ZX, v)
    }

    pub fn set_zy(&mut self, v: Vector) -> Result<&mut Self> {
        self.set_swizzle(Swizzle::ZY, v)
    }
}
