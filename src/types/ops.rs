//! Operator overloads
//!
//! Binary operators work on copies and leave both operands untouched;
//! compound assignments mutate the left-hand side. Division and remainder
//! can fail, so `/` and `%` evaluate to a [`Result`].

use crate::error::Result;
use crate::types::Vector;
use std::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Rem, Sub, SubAssign};

impl Add for Vector {
    type Output = Vector;
    fn add(mut self, other: Vector) -> Vector {
        Vector::add(&mut self, other);
        self
    }
}

impl Sub for Vector {
    type Output = Vector;
    fn sub(mut self, other: Vector) -> Vector {
        Vector::sub(&mut self, other);
        self
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;
    fn mul(mut self, scalar: f64) -> Vector {
        self.mult(scalar);
        self
    }
}

impl Mul<Vector> for Vector {
    type Output = Vector;
    fn mul(mut self, other: Vector) -> Vector {
        self.mult(other);
        self
    }
}

impl Mul<Vector> for f64 {
    type Output = Vector;
    fn mul(self, vector: Vector) -> Vector {
        vector * self
    }
}

impl Div<f64> for Vector {
    type Output = Result<Vector>;
    fn div(mut self, scalar: f64) -> Result<Vector> {
        Vector::div(&mut self, scalar)?;
        Ok(self)
    }
}

impl Div<Vector> for Vector {
    type Output = Result<Vector>;
    fn div(mut self, other: Vector) -> Result<Vector> {
        Vector::div(&mut self, other)?;
        Ok(self)
    }
}

impl Rem<f64> for Vector {
    type Output = Result<Vector>;
    fn rem(self, scalar: f64) -> Result<Vector> {
        self.modulo(scalar)
    }
}

impl Rem<Vector> for Vector {
    type Output = Result<Vector>;
    fn rem(self, other: Vector) -> Result<Vector> {
        self.modulo(other)
    }
}

impl Neg for Vector {
    type Output = Vector;
    fn neg(self) -> Vector {
        self * -1.0
    }
}

impl AddAssign for Vector {
    fn add_assign(&mut self, other: Vector) {
        Vector::add(self, other);
    }
}

impl SubAssign for Vector {
    fn sub_assign(&mut self, other: Vector) {
        Vector::sub(self, other);
    }
}

impl MulAssign<f64> for Vector {
    fn mul_assign(&mut self, scalar: f64) {
        self.mult(scalar);
    }
}

impl MulAssign<Vector> for Vector {
    fn mul_assign(&mut self, other: Vector) {
        self.mult(other);
    }
}
