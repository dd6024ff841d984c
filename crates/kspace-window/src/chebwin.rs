//! Dolph-Chebyshev window.
//!
//! Built in the frequency domain from the Chebyshev polynomial of order
//! `m - 1` and brought back with a DFT. All sidelobes sit at `-at` dB.

use num_complex::Complex64;
use rustfft::FftPlanner;
use std::f64::consts::PI;

/// Symmetric Dolph-Chebyshev window of length `m >= 2` with `at` dB of
/// sidelobe attenuation.
pub fn chebwin(m: usize, at: f64) -> Vec<f64> {
    let order = (m - 1) as f64;
    let beta = ((10f64.powf(at.abs() / 20.0)).acosh() / order).cosh();
    let odd = m % 2 == 1;

    let mut spectrum: Vec<Complex64> = (0..m)
        .map(|k| {
            let x = beta * (PI * k as f64 / m as f64).cos();
            let p = if x > 1.0 {
                (order * x.acosh()).cosh()
            } else if x < -1.0 {
                let sign = if odd { 1.0 } else { -1.0 };
                sign * (order * (-x).acosh()).cosh()
            } else {
                (order * x.acos()).cos()
            };
            if odd {
                Complex64::new(p, 0.0)
            } else {
                // Half-sample shift for even lengths
                Complex64::from_polar(p, PI / m as f64 * k as f64)
            }
        })
        .collect();

    let mut planner = FftPlanner::<f64>::new();
    planner.plan_fft_forward(m).process(&mut spectrum);
    let re: Vec<f64> = spectrum.iter().map(|c| c.re).collect();

    let mut w = Vec::with_capacity(m);
    if odd {
        let n = (m + 1) / 2;
        w.extend(re[1..n].iter().rev());
        w.extend(&re[..n]);
    } else {
        let n = m / 2 + 1;
        w.extend(re[1..n].iter().rev());
        w.extend(&re[1..n]);
    }

    let peak = w.iter().cloned().fold(f64::MIN, f64::max);
    w.iter_mut().for_each(|v| *v /= peak);
    w
}
