//! Shared test utilities for vecta integration tests.
//!
//! Strategies for generating vectors and comparison helpers used by every
//! test crate via `mod common;`.

#![allow(dead_code)]

use proptest::prelude::*;
use vecta::Vector;

/// Tolerance for results that went through more than one rounding step
pub const TOLERANCE: f64 = 1e-9;

// ===========================================================================
// Strategies
// ===========================================================================

/// Finite component in a range where sums and products stay exact enough
/// for `TOLERANCE`.
pub fn component() -> impl Strategy<Value = f64> {
    -1.0e3..1.0e3f64
}

pub fn vec2() -> impl Strategy<Value = Vector> {
    (component(), component()).prop_map(|(x, y)| Vector::new(x, y))
}

pub fn vec3() -> impl Strategy<Value = Vector> {
    (component(), component(), component()).prop_map(|(x, y, z)| Vector::new_3d(x, y, z))
}

/// Either dimensionality
pub fn any_vec() -> impl Strategy<Value = Vector> {
    prop_oneof![vec2(), vec3()]
}

/// Pair of vectors sharing the same dimensionality
pub fn same_dims_pair() -> impl Strategy<Value = (Vector, Vector)> {
    prop_oneof![(vec2(), vec2()), (vec3(), vec3())]
}

// ===========================================================================
// Comparison
// ===========================================================================

/// Component-wise closeness with a tolerance relative to the magnitudes
/// involved. Also requires matching dimensionality.
pub fn close(a: &Vector, b: &Vector) -> bool {
    let scale = 1.0 + a.mag().max(b.mag());
    a.dims() == b.dims() && a.approx_eq(b, TOLERANCE * scale)
}

pub fn assert_vec_close(actual: Vector, expected: Vector) {
    assert!(
        close(&actual, &expected),
        "expected {expected} ({}), got {actual} ({})",
        expected.dims(),
        actual.dims()
    );
}
