//! Argument shapes accepted by the vector operations
//!
//! Most operations take either another vector or raw components. Rather than
//! a family of overloads, they accept `impl Into<Operand>` (or
//! `impl Into<Factor>` where a plain scalar is also meaningful), so all of
//! these work:
//!
//! ```
//! use vecta::Vector;
//!
//! let mut a = Vector::new(1.0, 2.0);
//! a.add(Vector::new(1.0, 1.0));
//! a.add((1.0, 1.0));
//! a.add([1.0, 1.0]);
//! a.mult(2.0);
//! assert_eq!(a, Vector::new(8.0, 10.0));
//! ```

use super::Vector;

/// Another vector, or raw `x, y[, z]` components.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operand {
    Vector(Vector),
    Components { x: f64, y: f64, z: Option<f64> },
}

impl Operand {
    /// `(x, y, z)` where `z` is present only for a 3D vector or the
    /// three-component form.
    pub fn parts(&self) -> (f64, f64, Option<f64>) {
        match *self {
            Operand::Vector(v) => (v.x, v.y, v.is_3d().then_some(v.z)),
            Operand::Components { x, y, z } => (x, y, z),
        }
    }

    /// The operand as a vector; raw components become 2D or 3D by count.
    pub fn to_vector(&self) -> Vector {
        match *self {
            Operand::Vector(v) => v,
            Operand::Components { x, y, z: None } => Vector::new(x, y),
            Operand::Components { x, y, z: Some(z) } => Vector::new_3d(x, y, z),
        }
    }
}

impl From<Vector> for Operand {
    fn from(v: Vector) -> Self {
        Operand::Vector(v)
    }
}

impl From<&Vector> for Operand {
    fn from(v: &Vector) -> Self {
        Operand::Vector(*v)
    }
}

impl From<(f64, f64)> for Operand {
    fn from((x, y): (f64, f64)) -> Self {
        Operand::Components { x, y, z: None }
    }
}

impl From<(f64, f64, f64)> for Operand {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Operand::Components { x, y, z: Some(z) }
    }
}

impl From<[f64; 2]> for Operand {
    fn from([x, y]: [f64; 2]) -> Self {
        Operand::Components { x, y, z: None }
    }
}

impl From<[f64; 3]> for Operand {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Operand::Components { x, y, z: Some(z) }
    }
}

/// A scalar applied to every component, or a vector applied component-wise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Factor {
    Scalar(f64),
    Vector(Vector),
}

impl From<f64> for Factor {
    fn from(n: f64) -> Self {
        Factor::Scalar(n)
    }
}

impl From<Vector> for Factor {
    fn from(v: Vector) -> Self {
        Factor::Vector(v)
    }
}

impl From<&Vector> for Factor {
    fn from(v: &Vector) -> Self {
        Factor::Vector(*v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vector_parts_gate_z_on_dims() {
        assert_eq!(Operand::from(Vector::new(1.0, 2.0)).parts(), (1.0, 2.0, None));
        assert_eq!(
            Operand::from(Vector::new_3d(1.0, 2.0, 3.0)).parts(),
            (1.0, 2.0, Some(3.0))
        );
    }

    #[test]
    fn test_component_parts() {
        assert_eq!(Operand::from((1.0, 2.0)).parts(), (1.0, 2.0, None));
        assert_eq!(Operand::from([1.0, 2.0, 3.0]).parts(), (1.0, 2.0, Some(3.0)));
    }

    #[test]
    fn test_to_vector() {
        let v = Operand::from((1.0, 2.0, 3.0)).to_vector();
        assert!(v.is_3d());
        assert_eq!(v, Vector::new_3d(1.0, 2.0, 3.0));
        assert!(!Operand::from([1.0, 2.0]).to_vector().is_3d());
    }

    #[test]
    fn test_factor_from() {
        assert_eq!(Factor::from(2.0), Factor::Scalar(2.0));
        let v = Vector::new(1.0, 2.0);
        assert_eq!(Factor::from(&v), Factor::Vector(v));
    }
}
