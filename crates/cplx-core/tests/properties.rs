use std::f64::consts::PI;

use cplx_core::{Complex, ComplexInput};
use proptest::prelude::*;

const TOL: f64 = 1e-9;

/// Relative-or-absolute closeness, scaled by the larger magnitude.
fn close(a: Complex<f64>, b: Complex<f64>) -> bool {
    let scale = a.abs().max(b.abs()).max(1.0);
    (a.re() - b.re()).abs() <= TOL * scale && (a.im() - b.im()).abs() <= TOL * scale
}

fn complex() -> impl Strategy<Value = Complex<f64>> {
    (-1.0e3f64..1.0e3, -1.0e3f64..1.0e3).prop_map(|(re, im)| Complex::new(re, im))
}

// Construction keeps components exactly, whichever rectangular entry point is used.
proptest! {
    #[test]
    fn prop_rectangular_construction(re in -1.0e6f64..1.0e6, im in -1.0e6f64..1.0e6) {
        let z = Complex::new(re, im);
        prop_assert_eq!(z.re(), re);
        prop_assert_eq!(z.im(), im);
        prop_assert_eq!(Complex::make(ComplexInput::Rectangular { re, im }), z);
        prop_assert_eq!(Complex::from((re, im)), z);
    }
}

// Polar round-trip (the branch cut at pi itself is excluded).
proptest! {
    #[test]
    fn prop_polar_roundtrip(r in 1.0e-3f64..1.0e3, phi in -3.1f64..3.1) {
        let z = Complex::from_polar_abs_arg(r, phi);
        prop_assert!((z.abs() - r).abs() <= TOL * r);
        prop_assert!((z.arg() - phi).abs() <= TOL);
        prop_assert_eq!(Complex::from_polar_r_phi(r, phi), z);
    }
}

proptest! {
    #[test]
    fn prop_add_sub_inverse(x in complex(), y in complex()) {
        prop_assert!(close(x.add(y).sub(y), x));
    }

    #[test]
    fn prop_mul_distributes_over_add(x in complex(), y in complex(), z in complex()) {
        let lhs = x.mul(y.add(z));
        let rhs = x.mul(y).add(x.mul(z));
        let scale = x.abs() * (y.abs() + z.abs()) + 1.0;
        prop_assert!((lhs.re() - rhs.re()).abs() <= TOL * scale);
        prop_assert!((lhs.im() - rhs.im()).abs() <= TOL * scale);
    }

    #[test]
    fn prop_div_inverts_mul(x in complex(), y in complex()) {
        prop_assume!(y.abs() > 1e-3);
        prop_assert!(close(x.mul(y).div(y), x));
    }

    #[test]
    fn prop_conj_involution(x in complex()) {
        prop_assert_eq!(x.conj().conj(), x);
        prop_assert!(x.conj().conj().equals(x));
    }
}

proptest! {
    #[test]
    fn prop_sqrt_principal_branch(x in complex()) {
        let r = x.sqrt();
        prop_assert!(r.re() >= 0.0);
        prop_assert!(close(r.mul(r), x));
    }

    #[test]
    fn prop_pow_two_is_exact(x in complex()) {
        prop_assert_eq!(x.pow(2), x.mul(x));
    }

    #[test]
    fn prop_nth_roots(x in complex(), n in 1usize..8) {
        prop_assume!(x.abs() > 1e-3);
        let roots = x.nth_roots(n).unwrap();
        prop_assert_eq!(roots.len(), n);

        let exponent = u32::try_from(n).unwrap();
        for r in &roots {
            prop_assert!(close(r.pow(exponent), x), "root {} ^ {} != {}", r, n, x);
        }

        #[allow(clippy::cast_precision_loss)]
        let step = 2.0 * PI / n as f64;
        for pair in roots.windows(2) {
            let diff = (pair[1].arg() - pair[0].arg() - step).rem_euclid(2.0 * PI);
            prop_assert!(diff < TOL || 2.0 * PI - diff < TOL, "angle step off by {}", diff);
        }
    }
}

#[test]
fn rendering_examples() {
    assert_eq!(Complex::new(0.0_f64, 0.0).to_string(), "0");
    assert_eq!(Complex::new(3.0_f64, 0.0).to_string(), "3");
    assert_eq!(Complex::new(0.0_f64, 1.0).to_string(), "i");
    assert_eq!(Complex::new(0.0_f64, -1.0).to_string(), "-i");
    assert_eq!(Complex::new(2.0_f64, 3.0).to_string(), "2 + 3i");
    assert_eq!(Complex::new(2.0_f64, -3.0).to_string(), "2 - 3i");
    assert_eq!(Complex::new(f64::NAN, 1.0).to_string(), "NaN");
}

#[test]
fn pow_two_bit_exact_for_two_plus_two_i() {
    let z = Complex::new(2.0_f64, 2.0);
    let p = z.pow(2);
    let m = z.mul(z);
    assert_eq!(p.re().to_bits(), m.re().to_bits());
    assert_eq!(p.im().to_bits(), m.im().to_bits());
    assert_eq!(p.to_string(), "8i");
}
