//! Algebraic properties of the vector operations, checked with proptest

mod common;

use common::{any_vec, close, same_dims_pair, vec2, vec3};
use proptest::prelude::*;
use vecta::{helpers, Axis, Swizzle, Vector, VectorError};

proptest! {
    #[test]
    fn add_then_sub_roundtrips((a, b) in same_dims_pair()) {
        let mut c = a.copy();
        c.add(b).sub(b);
        prop_assert!(close(&c, &a), "{c} != {a}");
    }

    #[test]
    fn three_add_paths_agree(a in any_vec(), b in any_vec()) {
        let by_helper = helpers::add(a, b);
        let by_operator = a + b;
        let by_copy = *a.copy().add(b);
        prop_assert_eq!(by_helper, by_operator);
        prop_assert_eq!(by_operator, by_copy);
        prop_assert_eq!(by_helper.dims(), a.dims());
    }

    #[test]
    fn dot_is_symmetric(a in any_vec(), b in any_vec()) {
        prop_assert_eq!(a.dot(b), b.dot(a));
    }

    #[test]
    fn normalize_gives_unit_length(v in any_vec()) {
        prop_assume!(v.mag() > 1e-6);
        let n = v.normalized();
        prop_assert!((n.mag() - 1.0).abs() < 1e-9);
        prop_assert!(close(&n.normalized(), &n));
    }

    #[test]
    fn lerp_endpoints_and_midpoint((a, b) in same_dims_pair()) {
        prop_assert_eq!(helpers::lerp(a, b, 0.0), a);
        prop_assert!(close(&helpers::lerp(a, b, 1.0), &b));

        let mid = helpers::lerp(a, b, 0.5);
        let expected = Vector::from_components(
            &a.iter().zip(b.iter()).map(|(p, q)| (p + q) / 2.0).collect::<Vec<_>>(),
        ).unwrap();
        prop_assert!(close(&mid, &expected), "{mid} != {expected}");
    }

    #[test]
    fn division_by_zero_leaves_receiver(v in any_vec(), d in any_vec(), which in 0usize..3) {
        let mut divisor = d;
        match which {
            0 => divisor.x = 0.0,
            1 => divisor.y = 0.0,
            _ => divisor.z = 0.0,
        }
        let relevant = which < 2 || (v.is_3d() && divisor.is_3d());

        let mut receiver = v;
        let result = receiver.div(divisor).map(|r| *r);
        if relevant {
            prop_assert_eq!(result, Err(VectorError::DivideByZero));
            prop_assert_eq!(v % divisor, Err(VectorError::DivideByZero));
            prop_assert_eq!((receiver.x, receiver.y, receiver.z), (v.x, v.y, v.z));
        }

        let mut scalar = v;
        prop_assert_eq!(scalar.div(0.0).map(|r| *r), Err(VectorError::DivideByZero));
        prop_assert_eq!(v.modulo(0.0), Err(VectorError::DivideByZero));
        prop_assert_eq!((scalar.x, scalar.y, scalar.z), (v.x, v.y, v.z));
    }

    #[test]
    fn z_swizzles_fail_on_2d(v in vec2(), w in vec2()) {
        let mut target = v;
        for s in [Swizzle::XZ, Swizzle::YZ, Swizzle::ZX, Swizzle::ZY] {
            prop_assert!(matches!(v.swizzle(s), Err(VectorError::InvalidOperation(_))));
            prop_assert!(matches!(
                target.set_swizzle(s, w),
                Err(VectorError::InvalidOperation(_))
            ));
        }
        prop_assert_eq!(target, v);
    }

    #[test]
    fn swizzle_write_then_read_3d(v in vec3(), w in vec2()) {
        for s in Swizzle::ALL {
            let mut target = v;
            target.set_swizzle(s, w).unwrap();
            prop_assert_eq!(target.swizzle(s).unwrap(), w);
        }
    }

    #[test]
    fn rotation_preserves_magnitude(v in vec3(), angle in -10.0..10.0f64) {
        for axis in [Axis::X, Axis::Y, Axis::Z] {
            let r = helpers::rotate_about(v, angle, axis).unwrap();
            prop_assert!((r.mag() - v.mag()).abs() < 1e-9 * (1.0 + v.mag()));
        }
    }

    #[test]
    fn heading_setter_roundtrips(v in vec2(), heading in -3.0..3.0f64) {
        prop_assume!(v.mag() > 1e-3);
        let mut r = v;
        r.set_heading(heading).unwrap();
        prop_assert!((r.heading() - heading).abs() < 1e-9);
        prop_assert!((r.mag() - v.mag()).abs() < 1e-9 * (1.0 + v.mag()));
    }
}
