//! Element types that flow through filters.
//!
//! Masks and magnitude images are `f64`; k-space is [`Complex64`]. Filters are
//! generic over [`Sample`] so the same stack runs on either.

use num_complex::Complex64;
use num_traits::{One, Zero};
use std::fmt::Debug;
use std::ops::{Add, Div, Mul, Sub};

/// Array shape as `(rows, cols)`.
pub type Dim = (usize, usize);

/// A scalar a filter can transform.
///
/// Scaling by a real mask value and division by a real count are the only
/// mixed-type operations filters need.
pub trait Sample:
    Copy
    + Debug
    + Send
    + Sync
    + Zero
    + One
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<f64, Output = Self>
    + Div<f64, Output = Self>
    + 'static
{
    /// `log10(1 + x)`.
    fn log10_1p(self) -> Self;

    /// `x ^ exponent`.
    fn powf(self, exponent: f64) -> Self;

    /// Absolute value (modulus for complex).
    fn modulus(self) -> f64;
}

impl Sample for f64 {
    #[inline]
    fn log10_1p(self) -> Self {
        (1.0 + self).log10()
    }

    #[inline]
    fn powf(self, exponent: f64) -> Self {
        f64::powf(self, exponent)
    }

    #[inline]
    fn modulus(self) -> f64 {
        self.abs()
    }
}

impl Sample for Complex64 {
    #[inline]
    fn log10_1p(self) -> Self {
        (Complex64::one() + self).ln() / std::f64::consts::LN_10
    }

    #[inline]
    fn powf(self, exponent: f64) -> Self {
        Complex64::powf(self, exponent)
    }

    #[inline]
    fn modulus(self) -> f64 {
        self.norm()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_real_ops() {
        assert_abs_diff_eq!(9.0f64.log10_1p(), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(Sample::powf(3.0f64, 2.0), 9.0, epsilon = 1e-12);
        assert_eq!((-2.5f64).modulus(), 2.5);
    }

    #[test]
    fn test_complex_ops() {
        let z = Complex64::new(9.0, 0.0).log10_1p();
        assert_abs_diff_eq!(z.re, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(z.im, 0.0, epsilon = 1e-12);

        let sq = Sample::powf(Complex64::new(0.0, 1.0), 2.0);
        assert_abs_diff_eq!(sq.re, -1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(sq.im, 0.0, epsilon = 1e-12);

        assert_abs_diff_eq!(Complex64::new(3.0, 4.0).modulus(), 5.0, epsilon = 1e-12);
    }
}
