//! The recognised construction shapes for [`Complex`](super::Complex).
//!
//! A complex number may be described in rectangular form or in one of two
//! polar spellings. [`ComplexInput`] names those shapes explicitly so the
//! choice is made by the caller at compile time.
//!
//! With the `serde` feature, a `ComplexInput` decodes from a record holding
//! one of the field pairs `re`/`im`, `abs`/`arg` or `r`/`phi`. Pairs are
//! tried in that order and the first complete pair wins; a record without
//! any complete pair is rejected with
//! [`CoreError::UnrecognisedShape`](crate::CoreError::UnrecognisedShape).

use crate::Real;

/// One of the three input shapes accepted by [`Complex::make`](super::Complex::make).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        try_from = "shape::ShapeRecord<T>",
        bound(deserialize = "T: Real + serde::Deserialize<'de>")
    )
)]
pub enum ComplexInput<T: Real> {
    /// `re + im·i`.
    Rectangular { re: T, im: T },
    /// Polar form with magnitude `abs` and angle `arg` in radians.
    AbsArg { abs: T, arg: T },
    /// Polar form with magnitude `r` and angle `phi` in radians.
    RPhi { r: T, phi: T },
}

#[cfg(feature = "serde")]
mod shape {
    use crate::Real;
    use crate::error::CoreError;

    use super::ComplexInput;

    /// Loosely-typed record: every recognised field is optional so the
    /// shape can be chosen after decoding.
    #[derive(Debug, serde::Deserialize)]
    #[serde(bound(deserialize = "T: serde::Deserialize<'de>"))]
    pub(super) struct ShapeRecord<T> {
        #[serde(default)]
        re: Option<T>,
        #[serde(default)]
        im: Option<T>,
        #[serde(default)]
        abs: Option<T>,
        #[serde(default)]
        arg: Option<T>,
        #[serde(default)]
        r: Option<T>,
        #[serde(default)]
        phi: Option<T>,
    }

    impl<T: Real> TryFrom<ShapeRecord<T>> for ComplexInput<T> {
        type Error = CoreError;

        fn try_from(rec: ShapeRecord<T>) -> Result<Self, Self::Error> {
            if let (Some(re), Some(im)) = (rec.re, rec.im) {
                return Ok(Self::Rectangular { re, im });
            }
            if let (Some(abs), Some(arg)) = (rec.abs, rec.arg) {
                return Ok(Self::AbsArg { abs, arg });
            }
            if let (Some(r), Some(phi)) = (rec.r, rec.phi) {
                return Ok(Self::RPhi { r, phi });
            }
            Err(CoreError::UnrecognisedShape {
                reason: "expected one of the field pairs re/im, abs/arg or r/phi",
            })
        }
    }
}

#[cfg(all(test, feature = "serde"))]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::Complex;

    #[test]
    fn test_decode_rectangular() {
        let input: ComplexInput<f64> = serde_json::from_str(r#"{"re": 1.5, "im": -2}"#).unwrap();
        assert_eq!(input, ComplexInput::Rectangular { re: 1.5, im: -2.0 });
    }

    #[test]
    fn test_decode_polar_shapes() {
        let a: ComplexInput<f64> = serde_json::from_str(r#"{"abs": 2, "arg": 0.5}"#).unwrap();
        let b: ComplexInput<f64> = serde_json::from_str(r#"{"r": 2, "phi": 0.5}"#).unwrap();
        assert_eq!(a, ComplexInput::AbsArg { abs: 2.0, arg: 0.5 });
        assert_eq!(b, ComplexInput::RPhi { r: 2.0, phi: 0.5 });
        assert_eq!(Complex::make(a), Complex::make(b));
    }

    #[test]
    fn test_decode_first_match_wins() {
        let input: ComplexInput<f64> =
            serde_json::from_str(r#"{"r": 9, "phi": 9, "abs": 1, "arg": 0, "re": 3, "im": 4}"#)
                .unwrap();
        assert_eq!(input, ComplexInput::Rectangular { re: 3.0, im: 4.0 });

        let input: ComplexInput<f64> =
            serde_json::from_str(r#"{"re": 3, "r": 1, "phi": 0, "abs": 2, "arg": 0}"#).unwrap();
        assert_eq!(input, ComplexInput::AbsArg { abs: 2.0, arg: 0.0 });
    }

    #[test]
    fn test_decode_unrecognised_shape_is_rejected() {
        let err = serde_json::from_str::<ComplexInput<f64>>(r#"{"re": 1, "phi": 2}"#).unwrap_err();
        assert!(err.to_string().contains("unrecognised complex-number shape"));

        assert!(serde_json::from_str::<ComplexInput<f64>>("{}").is_err());
    }

    #[test]
    fn test_complex_serialises_rectangular() {
        let json = serde_json::to_string(&Complex::new(1.0_f64, -0.5)).unwrap();
        assert_eq!(json, r#"{"re":1.0,"im":-0.5}"#);
    }

    #[test]
    fn test_complex_decodes_any_shape() {
        let z: Complex<f64> = serde_json::from_str(r#"{"abs": 2, "arg": 0}"#).unwrap();
        assert_eq!(z, Complex::new(2.0, 0.0));

        let z: Complex<f64> = serde_json::from_str(r#"{"re":1.0,"im":-0.5}"#).unwrap();
        assert_eq!(z, Complex::new(1.0, -0.5));
    }
}
