//! `Display` formatting for [`Complex`].

use core::fmt;

use crate::Real;

use super::Complex;

/// Renders the rectangular form: `"2 + 3i"`, `"2 - 3i"`, `"-i"`, `"3"`, `"0"`.
///
/// A zero component is left out, a unit imaginary coefficient is written as
/// a bare `i`, and any `NaN` component collapses the whole value to `"NaN"`.
impl<T: Real> fmt::Display for Complex<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (re, im) = (self.re, self.im);
        if re.is_nan() || im.is_nan() {
            return f.write_str("NaN");
        }

        let has_re = re != T::zero();
        if has_re {
            write!(f, "{re}")?;
        }

        if im == T::zero() {
            if !has_re {
                f.write_str("0")?;
            }
            return Ok(());
        }

        if has_re {
            f.write_str(if im > T::zero() { " + " } else { " - " })?;
        } else if im < T::zero() {
            f.write_str("-")?;
        }

        let mag = im.abs();
        if mag == T::one() {
            f.write_str("i")
        } else {
            write!(f, "{mag}i")
        }
    }
}
