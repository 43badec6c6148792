//! Integer powers and n-th roots.
//!
//! Powers are computed by repeated complex multiplication rather than by
//! De Moivre's formula. The polar route is cheaper but rounds through
//! `cos`/`sin`: `(2 + 2i)^2` comes out as `4.9e-16 + 8.000000000000002i`
//! instead of exactly `8i`.

use crate::Real;
use crate::error::{CoreError, Result};

use super::Complex;

impl<T: Real> Complex<T> {
    /// Raise to a non-negative integer power by repeated multiplication.
    ///
    /// For `n > 1` the result is `z · (z · (… · z))`, multiplied in that
    /// exact order so results are reproducible bit-for-bit.
    ///
    /// **Quirk:** `n <= 1` returns `self` unchanged, so `pow(0)` is `z`
    /// rather than `1`. Use [`pow_with_identity`](Complex::pow_with_identity)
    /// for the mathematical convention.
    ///
    /// ```
    /// use cplx_core::Complex;
    ///
    /// let z = Complex::new(2.0_f64, 2.0);
    /// assert_eq!(z.pow(2), Complex::new(0.0, 8.0));
    /// assert_eq!(z.pow(0), z);
    /// ```
    pub fn pow(self, n: u32) -> Self {
        let mut acc = self;
        for _ in 1..n {
            acc = self.mul(acc);
        }
        acc
    }

    /// Like [`pow`](Complex::pow), except `n == 0` yields `1 + 0i`.
    pub fn pow_with_identity(self, n: u32) -> Self {
        if n == 0 {
            Self::one()
        } else {
            self.pow(n)
        }
    }

    /// All `n` distinct n-th roots, ordered by root index `k = 0..n`.
    ///
    /// Root `k` has magnitude `|z|^(1/n)` and angle `arg(z)/n + 2πk/n`.
    /// Every call recomputes the full set.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidArgument`] if `n == 0`.
    ///
    /// ```
    /// use cplx_core::Complex;
    ///
    /// let roots = Complex::new(-1.0_f64, 0.0).nth_roots(2).unwrap();
    /// assert_eq!(roots.len(), 2);
    /// assert!((roots[0].im() - 1.0).abs() < 1e-12);
    /// assert!((roots[1].im() + 1.0).abs() < 1e-12);
    /// ```
    pub fn nth_roots(self, n: usize) -> Result<Vec<Self>> {
        if n == 0 {
            return Err(CoreError::InvalidArgument {
                reason: "nth_roots requires a positive root count",
            });
        }

        let count = T::from_usize(n);
        let abs_n = self.abs().powf(count.recip());
        let arg_n = self.arg() / count;
        let step = (T::pi() + T::pi()) / count;

        Ok((0..n)
            .map(|k| {
                let angle = arg_n + step * T::from_usize(k);
                Self::new(abs_n * angle.cos(), abs_n * angle.sin())
            })
            .collect())
    }
}
