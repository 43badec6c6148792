//! Binary operations for [`Complex`].
//!
//! The named methods accept anything convertible into a `Complex<T>`: another
//! complex value, a real `T`, a `(re, im)` tuple, an `[re, im]` array or a
//! [`ComplexInput`](super::ComplexInput). The operator traits (`Add`, `Sub`,
//! `Mul`, `Div`, `Neg`) delegate to the same methods, so `a + b` and
//! `a.add(b)` are bit-identical.

use core::ops::{Add, Div, Mul, Neg, Sub};

use crate::Real;

use super::Complex;

#[allow(clippy::should_implement_trait)]
impl<T: Real> Complex<T> {
    /// Strict component-wise equality.
    ///
    /// ```
    /// use cplx_core::Complex;
    ///
    /// assert!(Complex::new(1.0_f64, 2.0).equals((1.0, 2.0)));
    /// assert!(!Complex::new(f64::NAN, 0.0).equals(Complex::new(f64::NAN, 0.0)));
    /// ```
    pub fn equals(self, rhs: impl Into<Complex<T>>) -> bool {
        let c = rhs.into();
        self.re == c.re && self.im == c.im
    }

    /// `(re1 + re2) + (im1 + im2)·i`.
    pub fn add(self, rhs: impl Into<Complex<T>>) -> Self {
        let c = rhs.into();
        Self::new(self.re + c.re, self.im + c.im)
    }

    /// `(re1 - re2) + (im1 - im2)·i`.
    pub fn sub(self, rhs: impl Into<Complex<T>>) -> Self {
        let c = rhs.into();
        Self::new(self.re - c.re, self.im - c.im)
    }

    /// Complex product `(re1·re2 - im1·im2) + (im1·re2 + re1·im2)·i`.
    pub fn mul(self, rhs: impl Into<Complex<T>>) -> Self {
        let c = rhs.into();
        Self::new(
            self.re * c.re - self.im * c.im,
            self.im * c.re + self.re * c.im,
        )
    }

    /// Complex quotient.
    ///
    /// There is no guard for a zero-magnitude divisor: the components follow
    /// IEEE-754 division and come out as `±inf` or `NaN`.
    pub fn div(self, rhs: impl Into<Complex<T>>) -> Self {
        let c = rhs.into();
        let d = c.norm_sqr();
        Self::new(
            (self.re * c.re + self.im * c.im) / d,
            (self.im * c.re - self.re * c.im) / d,
        )
    }
}

// ======================================================================
// Complex op Complex  /  Complex op T
// ======================================================================

macro_rules! impl_complex_binop {
    ($trait:ident, $method:ident) => {
        impl<T: Real> $trait for Complex<T> {
            type Output = Complex<T>;

            #[inline]
            fn $method(self, rhs: Complex<T>) -> Complex<T> {
                Complex::$method(self, rhs)
            }
        }

        impl<T: Real> $trait<&Complex<T>> for &Complex<T> {
            type Output = Complex<T>;

            #[inline]
            fn $method(self, rhs: &Complex<T>) -> Complex<T> {
                Complex::$method(*self, *rhs)
            }
        }

        impl<T: Real> $trait<T> for Complex<T> {
            type Output = Complex<T>;

            #[inline]
            fn $method(self, rhs: T) -> Complex<T> {
                Complex::$method(self, rhs)
            }
        }
    };
}

impl_complex_binop!(Add, add);
impl_complex_binop!(Sub, sub);
impl_complex_binop!(Mul, mul);
impl_complex_binop!(Div, div);

// ======================================================================
// Negation
// ======================================================================

impl<T: Real> Neg for Complex<T> {
    type Output = Complex<T>;

    fn neg(self) -> Complex<T> {
        Complex::new(-self.re, -self.im)
    }
}
