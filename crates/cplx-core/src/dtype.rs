//! Component type hierarchy for complex numbers.
//!
//! The trait hierarchy is:
//! ```text
//! Scalar
//!   └── Float
//!         └── Real  (f32, f64)
//! ```
//!
//! [`Complex`](crate::Complex) is generic over [`Real`], so every scalar
//! primitive the complex operations rely on (square roots, trigonometry,
//! `atan2`, fractional powers) is routed through these traits rather than
//! called on `f64` directly.

use core::fmt;
use core::ops::{Add, Div, Mul, Neg, Sub};

// ---------------------------------------------------------------------------
// Scalar — the root trait for every component type
// ---------------------------------------------------------------------------

/// Base trait for numeric types usable as a complex component.
pub trait Scalar:
    Copy
    + Clone
    + fmt::Debug
    + fmt::Display
    + PartialEq
    + PartialOrd
    + Send
    + Sync
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Default
    + 'static
{
    /// The additive identity (`0`).
    fn zero() -> Self;

    /// The multiplicative identity (`1`).
    fn one() -> Self;

    /// Convert from `usize` (used for root counts and root indices).
    fn from_usize(v: usize) -> Self;
}

// ---------------------------------------------------------------------------
// Float — adds operations that only make sense for floating-point numbers
// ---------------------------------------------------------------------------

/// Trait for floating-point scalar types (`f32`, `f64`).
pub trait Float: Scalar + Neg<Output = Self> {
    /// Mathematical constant pi.
    fn pi() -> Self;

    /// Machine epsilon.
    fn epsilon() -> Self;

    /// Positive infinity.
    fn infinity() -> Self;

    /// Not-a-number.
    fn nan() -> Self;

    fn abs(self) -> Self;
    fn sqrt(self) -> Self;
    fn sin(self) -> Self;
    fn cos(self) -> Self;
    fn powf(self, n: Self) -> Self;
    fn recip(self) -> Self;
    fn is_nan(self) -> bool;
    fn is_finite(self) -> bool;

    /// Four-quadrant arctangent of `self / other` (`self` is the y
    /// coordinate). Returns a value in `(-pi, pi]`, with `atan2(0, 0) = 0`.
    fn atan2(self, other: Self) -> Self;

    /// Convert from an `f64` literal (used for constants).
    fn from_f64(v: f64) -> Self;
}

/// Real-valued floats: the component types of [`Complex`](crate::Complex).
///
/// Currently identical to [`Float`]; kept separate so a complex type can
/// never be used as the component of another complex type.
pub trait Real: Float {}

// ===========================================================================
// Macro implementations
// ===========================================================================

macro_rules! impl_real {
    ($ty:ty) => {
        impl Scalar for $ty {
            #[inline]
            fn zero() -> Self {
                0.0
            }
            #[inline]
            fn one() -> Self {
                1.0
            }
            #[inline]
            #[allow(clippy::cast_precision_loss)]
            fn from_usize(v: usize) -> Self {
                v as Self
            }
        }

        impl Float for $ty {
            #[inline]
            fn pi() -> Self {
                Self::from_f64(std::f64::consts::PI)
            }
            #[inline]
            fn epsilon() -> Self {
                <$ty>::EPSILON
            }
            #[inline]
            fn infinity() -> Self {
                <$ty>::INFINITY
            }
            #[inline]
            fn nan() -> Self {
                <$ty>::NAN
            }
            #[inline]
            fn abs(self) -> Self {
                <$ty>::abs(self)
            }
            #[inline]
            fn sqrt(self) -> Self {
                <$ty>::sqrt(self)
            }
            #[inline]
            fn sin(self) -> Self {
                <$ty>::sin(self)
            }
            #[inline]
            fn cos(self) -> Self {
                <$ty>::cos(self)
            }
            #[inline]
            fn powf(self, n: Self) -> Self {
                <$ty>::powf(self, n)
            }
            #[inline]
            fn recip(self) -> Self {
                <$ty>::recip(self)
            }
            #[inline]
            fn is_nan(self) -> bool {
                <$ty>::is_nan(self)
            }
            #[inline]
            fn is_finite(self) -> bool {
                <$ty>::is_finite(self)
            }
            #[inline]
            fn atan2(self, other: Self) -> Self {
                <$ty>::atan2(self, other)
            }
            #[inline]
            #[allow(clippy::cast_possible_truncation)]
            fn from_f64(v: f64) -> Self {
                v as Self
            }
        }

        impl Real for $ty {}
    };
}

impl_real!(f32);
impl_real!(f64);
