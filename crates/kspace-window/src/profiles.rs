//! Closed-form symmetric window profiles.
//!
//! Every function here returns the symmetric window of length `m` and
//! assumes `m >= 2`; the length guards live in [`crate::symmetric_window`].

use std::f64::consts::PI;

/// Sum-of-cosines window: `w[n] = sum_k a[k] * cos(k * x[n])` with `x`
/// spanning `[-pi, pi]`.
pub fn general_cosine(m: usize, coeffs: &[f64]) -> Vec<f64> {
    let step = 2.0 * PI / (m - 1) as f64;
    (0..m)
        .map(|n| {
            let x = -PI + step * n as f64;
            coeffs
                .iter()
                .enumerate()
                .map(|(k, a)| a * (k as f64 * x).cos())
                .sum()
        })
        .collect()
}

/// Generalized Hamming: `alpha - (1 - alpha) * cos(2 pi n / (m-1))`.
#[inline]
pub fn general_hamming(m: usize, alpha: f64) -> Vec<f64> {
    general_cosine(m, &[alpha, 1.0 - alpha])
}

pub fn blackman(m: usize) -> Vec<f64> {
    general_cosine(m, &[0.42, 0.50, 0.08])
}

pub fn blackman_harris(m: usize) -> Vec<f64> {
    general_cosine(m, &[0.35875, 0.48829, 0.14128, 0.01168])
}

pub fn nuttall(m: usize) -> Vec<f64> {
    general_cosine(m, &[0.3635819, 0.4891775, 0.1365995, 0.0106411])
}

pub fn flattop(m: usize) -> Vec<f64> {
    general_cosine(
        m,
        &[0.21557895, 0.41663158, 0.277263158, 0.083578947, 0.006947368],
    )
}

pub fn barthann(m: usize) -> Vec<f64> {
    let last = (m - 1) as f64;
    (0..m)
        .map(|n| {
            let fac = (n as f64 / last - 0.5).abs();
            0.62 - 0.48 * fac + 0.38 * (2.0 * PI * fac).cos()
        })
        .collect()
}

pub fn bartlett(m: usize) -> Vec<f64> {
    let last = (m - 1) as f64;
    (0..m)
        .map(|n| {
            let n = n as f64;
            if n <= last / 2.0 {
                2.0 * n / last
            } else {
                2.0 - 2.0 * n / last
            }
        })
        .collect()
}

pub fn bohman(m: usize) -> Vec<f64> {
    let step = 2.0 / (m - 1) as f64;
    (0..m)
        .map(|n| {
            if n == 0 || n == m - 1 {
                return 0.0;
            }
            let fac = (-1.0 + step * n as f64).abs();
            (1.0 - fac) * (PI * fac).cos() + (PI * fac).sin() / PI
        })
        .collect()
}

pub fn parzen(m: usize) -> Vec<f64> {
    let half = m as f64 / 2.0;
    let quarter = (m - 1) as f64 / 4.0;
    let origin = (m - 1) as f64 / 2.0;
    (0..m)
        .map(|n| {
            let a = (n as f64 - origin).abs();
            let r = a / half;
            if a <= quarter {
                1.0 - 6.0 * r * r + 6.0 * r * r * r
            } else {
                2.0 * (1.0 - r).powi(3)
            }
        })
        .collect()
}

pub fn triang(m: usize) -> Vec<f64> {
    let even = m % 2 == 0;
    (0..m)
        .map(|i| {
            let n = i.min(m - 1 - i) as f64 + 1.0;
            if even {
                (2.0 * n - 1.0) / m as f64
            } else {
                2.0 * n / (m + 1) as f64
            }
        })
        .collect()
}

pub fn gaussian(m: usize, std: f64) -> Vec<f64> {
    let origin = (m - 1) as f64 / 2.0;
    let sig2 = 2.0 * std * std;
    (0..m)
        .map(|n| {
            let x = n as f64 - origin;
            (-(x * x) / sig2).exp()
        })
        .collect()
}

pub fn kaiser(m: usize, beta: f64) -> Vec<f64> {
    let alpha = (m - 1) as f64 / 2.0;
    let denom = bessel_i0(beta);
    (0..m)
        .map(|n| {
            let t = (n as f64 - alpha) / alpha;
            let arg = beta * (1.0 - t * t).max(0.0).sqrt();
            bessel_i0(arg) / denom
        })
        .collect()
}

/// Zeroth-order modified Bessel function of the first kind (power series).
pub fn bessel_i0(x: f64) -> f64 {
    let half = x / 2.0;
    let mut sum = 1.0;
    let mut term = 1.0;
    for k in 1..500 {
        let f = half / k as f64;
        term *= f * f;
        sum += term;
        if term < sum * 1e-17 {
            break;
        }
    }
    sum
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn assert_symmetric(w: &[f64]) {
        let m = w.len();
        for i in 0..m / 2 {
            assert_abs_diff_eq!(w[i], w[m - 1 - i], epsilon = 1e-12);
        }
    }

    #[test]
    fn test_hann_values() {
        let w = general_hamming(5, 0.5);
        let expected = [0.0, 0.5, 1.0, 0.5, 0.0];
        for (a, b) in w.iter().zip(expected) {
            assert_abs_diff_eq!(*a, b, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_hamming_endpoints() {
        let w = general_hamming(7, 0.54);
        assert_abs_diff_eq!(w[0], 0.08, epsilon = 1e-12);
        assert_abs_diff_eq!(w[3], 1.0, epsilon = 1e-12);
        assert_symmetric(&w);
    }

    #[test]
    fn test_blackman_peak() {
        let w = blackman(9);
        assert_abs_diff_eq!(w[0], 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(w[4], 1.0, epsilon = 1e-12);
        assert_symmetric(&w);
    }

    #[test]
    fn test_bartlett_and_triang() {
        let b = bartlett(5);
        let expected = [0.0, 0.5, 1.0, 0.5, 0.0];
        for (a, e) in b.iter().zip(expected) {
            assert_abs_diff_eq!(*a, e, epsilon = 1e-12);
        }

        let t = triang(4);
        let expected = [0.25, 0.75, 0.75, 0.25];
        for (a, e) in t.iter().zip(expected) {
            assert_abs_diff_eq!(*a, e, epsilon = 1e-12);
        }

        let t = triang(3);
        let expected = [0.5, 1.0, 0.5];
        for (a, e) in t.iter().zip(expected) {
            assert_abs_diff_eq!(*a, e, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_shapes_are_symmetric() {
        for m in [6, 7, 16, 33] {
            assert_symmetric(&barthann(m));
            assert_symmetric(&bohman(m));
            assert_symmetric(&parzen(m));
            assert_symmetric(&flattop(m));
            assert_symmetric(&nuttall(m));
            assert_symmetric(&blackman_harris(m));
            assert_symmetric(&gaussian(m, 2.0));
            assert_symmetric(&kaiser(m, 6.0));
        }
    }

    #[test]
    fn test_kaiser_and_gaussian_peaks() {
        let k = kaiser(11, 8.6);
        assert_abs_diff_eq!(k[5], 1.0, epsilon = 1e-12);
        assert!(k[0] < 0.01);

        let g = gaussian(11, 1.0);
        assert_abs_diff_eq!(g[5], 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(g[6], (-0.5f64).exp(), epsilon = 1e-12);
    }

    #[test]
    fn test_bessel_i0() {
        assert_abs_diff_eq!(bessel_i0(0.0), 1.0, epsilon = 1e-15);
        assert_abs_diff_eq!(bessel_i0(1.0), 1.2660658777520082, epsilon = 1e-12);
        assert_abs_diff_eq!(bessel_i0(5.0), 27.239871823604442, epsilon = 1e-9);
    }
}
