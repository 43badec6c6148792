//! Immutable complex-number value type.
//!
//! [`Complex`] stores a number in rectangular form `re + im·i` and derives
//! its polar quantities ([`abs`](Complex::abs), [`arg`](Complex::arg)) on
//! every call; nothing is cached. Every operation returns a fresh value and
//! leaves its operands untouched.
//!
//! # Examples
//!
//! ```
//! use cplx_core::Complex;
//!
//! let z = Complex::new(3.0_f64, 4.0);
//! assert_eq!(z.abs(), 5.0);
//! assert_eq!(z.add((1.0, -4.0)).to_string(), "4");
//! assert_eq!(z.conj().to_string(), "3 - 4i");
//! ```

mod display;
mod input;
mod ops;
mod power;

pub use input::ComplexInput;

use crate::Real;

/// A complex number `re + im·i` over a real component type `T`.
///
/// Equality (`==` and [`equals`](Complex::equals)) compares both components
/// with IEEE-754 semantics, so a value holding `NaN` is never equal to
/// anything, itself included.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        from = "ComplexInput<T>",
        bound(
            serialize = "T: Real + serde::Serialize",
            deserialize = "T: Real + serde::Deserialize<'de>"
        )
    )
)]
pub struct Complex<T: Real> {
    re: T,
    im: T,
}

impl<T: Real> Complex<T> {
    // ------------------------------------------------------------------
    // Construction
    // ------------------------------------------------------------------

    /// Create a complex number from its real and imaginary parts.
    #[inline]
    pub fn new(re: T, im: T) -> Self {
        Self { re, im }
    }

    /// Rectangular constructor; identical to [`Complex::new`].
    #[inline]
    pub fn from_rectangular(re: T, im: T) -> Self {
        Self::new(re, im)
    }

    /// A purely real value (`im = 0`).
    #[inline]
    pub fn from_real(re: T) -> Self {
        Self::new(re, T::zero())
    }

    /// Polar constructor using the `abs`/`arg` naming (angle in radians).
    pub fn from_polar_abs_arg(abs: T, arg: T) -> Self {
        Self::new(abs * arg.cos(), abs * arg.sin())
    }

    /// Polar constructor using the `r`/`phi` naming (angle in radians).
    ///
    /// Produces exactly the same value as
    /// [`from_polar_abs_arg`](Complex::from_polar_abs_arg).
    pub fn from_polar_r_phi(r: T, phi: T) -> Self {
        Self::new(r * phi.cos(), r * phi.sin())
    }

    /// Build a value from any of the recognised input shapes.
    ///
    /// ```
    /// use cplx_core::{Complex, ComplexInput};
    ///
    /// let z = Complex::make(ComplexInput::Rectangular { re: 1.0_f64, im: -2.0 });
    /// assert_eq!(z, Complex::new(1.0, -2.0));
    /// ```
    pub fn make(input: ComplexInput<T>) -> Self {
        match input {
            ComplexInput::Rectangular { re, im } => Self::from_rectangular(re, im),
            ComplexInput::AbsArg { abs, arg } => Self::from_polar_abs_arg(abs, arg),
            ComplexInput::RPhi { r, phi } => Self::from_polar_r_phi(r, phi),
        }
    }

    /// `0 + 0i`.
    #[inline]
    pub fn zero() -> Self {
        Self::new(T::zero(), T::zero())
    }

    /// `1 + 0i`.
    #[inline]
    pub fn one() -> Self {
        Self::new(T::one(), T::zero())
    }

    /// The imaginary unit `0 + 1i`.
    #[inline]
    pub fn i() -> Self {
        Self::new(T::zero(), T::one())
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// The real part.
    #[inline]
    pub fn re(self) -> T {
        self.re
    }

    /// The imaginary part.
    #[inline]
    pub fn im(self) -> T {
        self.im
    }

    /// The components as an interleaved `[re, im]` pair.
    #[inline]
    pub fn to_array(self) -> [T; 2] {
        [self.re, self.im]
    }

    /// `true` if either component is `NaN`.
    #[inline]
    pub fn is_nan(self) -> bool {
        self.re.is_nan() || self.im.is_nan()
    }

    /// `true` if both components are finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.re.is_finite() && self.im.is_finite()
    }

    // ------------------------------------------------------------------
    // Derived quantities (recomputed on every call)
    // ------------------------------------------------------------------

    /// Squared magnitude `re² + im²`.
    #[inline]
    pub fn norm_sqr(self) -> T {
        self.re * self.re + self.im * self.im
    }

    /// Euclidean magnitude `sqrt(re² + im²)`.
    #[inline]
    pub fn abs(self) -> T {
        self.norm_sqr().sqrt()
    }

    /// Principal argument `atan2(im, re)` in `(-pi, pi]`.
    #[inline]
    pub fn arg(self) -> T {
        self.im.atan2(self.re)
    }

    /// The polar pair `(abs, arg)`.
    pub fn to_polar(self) -> (T, T) {
        (self.abs(), self.arg())
    }

    /// Complex conjugate `re - im·i`.
    #[inline]
    pub fn conj(self) -> Self {
        Self::new(self.re, -self.im)
    }

    /// Principal square root.
    ///
    /// Uses the half-angle form
    /// `(sqrt((|z| + re) / 2), ±sqrt((|z| - re) / 2))`, where the sign of the
    /// imaginary part follows `im` and `im == 0` counts as positive. The
    /// result therefore has a non-negative real part, and negative reals map
    /// onto the positive imaginary axis.
    ///
    /// ```
    /// use cplx_core::Complex;
    ///
    /// assert_eq!(Complex::new(-4.0_f64, 0.0).sqrt(), Complex::new(0.0, 2.0));
    /// ```
    pub fn sqrt(self) -> Self {
        let abs = self.abs();
        let half = T::from_f64(0.5);
        let sign = if self.im >= T::zero() { T::one() } else { -T::one() };
        Self::new(
            ((abs + self.re) * half).sqrt(),
            sign * ((abs - self.re) * half).sqrt(),
        )
    }
}

// ======================================================================
// Conversions
// ======================================================================

impl<T: Real> From<T> for Complex<T> {
    fn from(re: T) -> Self {
        Self::from_real(re)
    }
}

impl<T: Real> From<(T, T)> for Complex<T> {
    fn from((re, im): (T, T)) -> Self {
        Self::new(re, im)
    }
}

impl<T: Real> From<[T; 2]> for Complex<T> {
    fn from([re, im]: [T; 2]) -> Self {
        Self::new(re, im)
    }
}

impl<T: Real> From<ComplexInput<T>> for Complex<T> {
    fn from(input: ComplexInput<T>) -> Self {
        Self::make(input)
    }
}
