//! Slepian (discrete prolate spheroidal) window.
//!
//! The first DPSS is the eigenvector belonging to the largest eigenvalue of a
//! symmetric tridiagonal matrix that commutes with the time/band limiting
//! operator. It is found here by shifted power iteration.

use std::f64::consts::PI;

const MAX_ITERATIONS: usize = 20_000;
const TOLERANCE: f64 = 1e-13;

/// Symmetric Slepian window of length `m >= 2`; `width` is the full
/// bandwidth as a fraction of the sampling rate.
pub fn slepian(m: usize, width: f64) -> Vec<f64> {
    let w = width / 4.0;
    let mf = m as f64;
    let diag: Vec<f64> = (0..m)
        .map(|i| {
            let t = (mf - 1.0 - 2.0 * i as f64) / 2.0;
            t * t * (2.0 * PI * w).cos()
        })
        .collect();
    // off[i] couples rows i and i + 1
    let off: Vec<f64> = (1..m).map(|i| i as f64 * (mf - i as f64) / 2.0).collect();

    // Shift by a Gershgorin bound so the wanted (largest algebraic)
    // eigenvalue is also the largest in magnitude.
    let shift = (0..m)
        .map(|i| {
            let left = if i > 0 { off[i - 1] } else { 0.0 };
            let right = if i + 1 < m { off[i] } else { 0.0 };
            diag[i].abs() + left + right
        })
        .fold(0.0, f64::max);

    let mut v = vec![1.0 / mf.sqrt(); m];
    let mut next = vec![0.0; m];
    for _ in 0..MAX_ITERATIONS {
        for i in 0..m {
            let mut acc = (diag[i] + shift) * v[i];
            if i > 0 {
                acc += off[i - 1] * v[i - 1];
            }
            if i + 1 < m {
                acc += off[i] * v[i + 1];
            }
            next[i] = acc;
        }
        let norm = next.iter().map(|x| x * x).sum::<f64>().sqrt();
        if norm == 0.0 {
            break;
        }
        let mut delta = 0.0f64;
        for (a, b) in v.iter_mut().zip(&next) {
            let b = b / norm;
            delta = delta.max((*a - b).abs());
            *a = b;
        }
        if delta < TOLERANCE {
            break;
        }
    }

    let peak = v.iter().cloned().fold(f64::MIN, f64::max);
    v.iter_mut().for_each(|x| *x /= peak);
    v
}
