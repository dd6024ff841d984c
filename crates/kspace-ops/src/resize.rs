//! Geometry resampler: fits a filter array into a target shape.
//!
//! Filters are constructed on a square grid. [`resize_to_match`] brings them
//! to the data shape by zero-padding (content rotated to the centre, or to an
//! explicit offset) or by cropping the central region, independently per
//! axis.
//!
//! # Contour policy
//!
//! - [`Contour::ConstPercentage`] - the filter scales with the image: a
//!   diameter of half the grid stays half the grid.
//! - [`Contour::ConstPixel`] - the filter keeps its pixel size. Axis 0 is
//!   first band-limited resampled by `size.0 / size.1` so a circular filter
//!   stays circular on a non-square target.
//!
//! # Example
//!
//! ```rust
//! use kspace_ops::resize::{resize_to_match, Contour};
//! use ndarray::Array2;
//!
//! let block = Array2::<f64>::ones((4, 4));
//! let fitted = resize_to_match(&block, (8, 6), Contour::ConstPercentage, None);
//! assert_eq!(fitted.dim(), (8, 6));
//! assert_eq!(fitted[[2, 1]], 1.0);
//! assert_eq!(fitted[[0, 0]], 0.0);
//! ```

use crate::Dim;
use ndarray::{Array2, Axis, Slice};
use num_complex::Complex64;
use num_traits::Zero;
use rustfft::FftPlanner;
use serde::{Deserialize, Serialize};
#[allow(unused_imports)]
use tracing::{debug, trace};

/// How a filter's characteristic size relates to the target shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Contour {
    /// Size is a constant fraction of the target dimensions.
    #[default]
    ConstPercentage,
    /// Size is a constant number of pixels.
    ConstPixel,
}

/// Row count after the contour policy's axis-0 resample.
///
/// `ConstPixel` scales `rows` by `size.0 / size.1`, truncating toward zero.
/// A zero-column target leaves `rows` unchanged.
pub fn resampled_rows(rows: usize, size: Dim, contour: Contour) -> usize {
    match contour {
        Contour::ConstPercentage => rows,
        Contour::ConstPixel if size.1 == 0 => rows,
        Contour::ConstPixel => (rows as f64 * size.0 as f64 / size.1 as f64) as usize,
    }
}

/// Fits `window` into an array of exactly `size`.
///
/// Per axis, with `d = target - current`:
///
/// - `d > 0`: zero-pad at the end, then rotate by `center[axis]` if given,
///   otherwise by `floor(d / 2)`.
/// - `d < 0`: keep `[floor(|d|/2), len - ceil(|d|/2))`. For odd `|d|` the
///   extra pixel comes off the end, so the kept region leans toward the start.
/// - `d == 0`: unchanged.
///
/// `center` only affects padded axes.
pub fn resize_to_match(
    window: &Array2<f64>,
    size: Dim,
    contour: Contour,
    center: Option<(isize, isize)>,
) -> Array2<f64> {
    trace!(from = ?window.dim(), to = ?size, ?contour, ?center, "resize_to_match");

    let mut out = match contour {
        Contour::ConstPixel => {
            let rows = resampled_rows(window.nrows(), size, contour);
            resample_rows(window, rows)
        }
        Contour::ConstPercentage => window.clone(),
    };

    out = fit_axis(out, Axis(0), size.0, center.map(|c| c.0));
    fit_axis(out, Axis(1), size.1, center.map(|c| c.1))
}

/// Pads (with rotation) or crops one axis to `target`.
fn fit_axis(a: Array2<f64>, axis: Axis, target: usize, shift: Option<isize>) -> Array2<f64> {
    let len = a.len_of(axis);
    if target > len {
        let d = target - len;
        let shift = shift.unwrap_or((d / 2) as isize);
        let mut shape = a.raw_dim();
        shape[axis.index()] = target;
        let mut out = Array2::zeros(shape);
        for (i, lane) in a.axis_iter(axis).enumerate() {
            let dst = (i as isize + shift).rem_euclid(target as isize) as usize;
            out.index_axis_mut(axis, dst).assign(&lane);
        }
        out
    } else if target < len {
        let m = len - target;
        let start = m / 2;
        let end = len - (m - m / 2);
        a.slice_axis(axis, Slice::from(start..end)).to_owned()
    } else {
        a
    }
}

/// Band-limited (Fourier) resample of every column to `num` rows.
///
/// The lowest `min(num, rows)` frequency bins are kept. For an even bin
/// count the Nyquist bin is doubled when down-sampling and halved when
/// up-sampling, then the spectrum is inverted and scaled by `num / rows`.
pub fn resample_rows(a: &Array2<f64>, num: usize) -> Array2<f64> {
    let (rows, cols) = a.dim();
    if num == rows {
        return a.clone();
    }
    if num == 0 || rows == 0 {
        return Array2::zeros((num, cols));
    }
    debug!(rows, num, cols, "resample_rows");

    let mut planner = FftPlanner::<f64>::new();
    let forward = planner.plan_fft_forward(rows);
    let inverse = planner.plan_fft_inverse(num);

    let keep = rows.min(num);
    let nyq = keep / 2 + 1;
    let scale = 1.0 / rows as f64;

    let mut spectrum = vec![Complex64::zero(); rows];
    let mut full = vec![Complex64::zero(); num];
    let mut out = Array2::zeros((num, cols));

    for (src, mut dst) in a.columns().into_iter().zip(out.columns_mut()) {
        for (s, &v) in spectrum.iter_mut().zip(src.iter()) {
            *s = Complex64::new(v, 0.0);
        }
        forward.process(&mut spectrum);

        full.iter_mut().for_each(|c| *c = Complex64::zero());
        full[..nyq].copy_from_slice(&spectrum[..nyq]);
        if keep % 2 == 0 {
            if num < rows {
                full[keep / 2] *= 2.0;
            } else {
                full[keep / 2] *= 0.5;
            }
        }
        // Hermitian completion: the column is real
        for k in 1..=(num - 1) / 2 {
            full[num - k] = full[k].conj();
        }
        inverse.process(&mut full);

        for (d, c) in dst.iter_mut().zip(&full) {
            *d = c.re * scale;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    fn ramp(rows: usize, cols: usize) -> Array2<f64> {
        Array2::from_shape_fn((rows, cols), |(i, j)| (i * cols + j) as f64)
    }

    #[test]
    fn test_all_sign_combinations() {
        let w = ramp(6, 6);
        for size in [(10, 9), (10, 3), (3, 10), (4, 5), (6, 6)] {
            for contour in [Contour::ConstPercentage, Contour::ConstPixel] {
                let out = resize_to_match(&w, size, contour, None);
                assert_eq!(out.dim(), size, "{size:?} {contour:?}");
            }
        }
    }

    #[test]
    fn test_pad_centers_content() {
        let w = Array2::<f64>::ones((2, 2));
        let out = resize_to_match(&w, (6, 5), Contour::ConstPercentage, None);
        // d0 = 4 -> shift 2; d1 = 3 -> shift 1
        let expected = array![
            [0., 0., 0., 0., 0.],
            [0., 0., 0., 0., 0.],
            [0., 1., 1., 0., 0.],
            [0., 1., 1., 0., 0.],
            [0., 0., 0., 0., 0.],
            [0., 0., 0., 0., 0.],
        ];
        assert_eq!(out, expected);
    }

    #[test]
    fn test_pad_with_explicit_center_wraps() {
        let w = Array2::<f64>::ones((2, 2));
        let out = resize_to_match(&w, (4, 4), Contour::ConstPercentage, Some((3, -1)));
        // Rows 3 and 0; columns 3 and 0
        for ((i, j), v) in out.indexed_iter() {
            let hit = (i == 3 || i == 0) && (j == 3 || j == 0);
            assert_eq!(*v, if hit { 1.0 } else { 0.0 }, "({i}, {j})");
        }
    }

    #[test]
    fn test_odd_crop_leans_toward_start() {
        // Documented asymmetry: 7 -> 4 drops 1 from the start and 2 from the end.
        let w = ramp(7, 1);
        let out = resize_to_match(&w, (4, 1), Contour::ConstPercentage, None);
        assert_eq!(out.column(0).to_vec(), vec![1.0, 2.0, 3.0, 4.0]);

        // 7 -> 6 drops the last row only.
        let out = resize_to_match(&w, (6, 1), Contour::ConstPercentage, None);
        assert_eq!(out.column(0).to_vec(), vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0]);
    }

    #[test]
    fn test_even_crop_is_centered() {
        let w = ramp(1, 8);
        let out = resize_to_match(&w, (1, 4), Contour::ConstPercentage, None);
        assert_eq!(out.row(0).to_vec(), vec![2.0, 3.0, 4.0, 5.0]);
    }

    #[test]
    fn test_const_pixel_square_target_is_identity() {
        let w = ramp(5, 5);
        let out = resize_to_match(&w, (5, 5), Contour::ConstPixel, None);
        assert_eq!(out, w);
    }

    #[test]
    fn test_resampled_rows() {
        assert_eq!(resampled_rows(10, (64, 128), Contour::ConstPixel), 5);
        assert_eq!(resampled_rows(10, (128, 64), Contour::ConstPixel), 20);
        assert_eq!(resampled_rows(7, (3, 2), Contour::ConstPixel), 10);
        assert_eq!(resampled_rows(10, (64, 128), Contour::ConstPercentage), 10);
    }

    #[test]
    fn test_resample_preserves_constant() {
        let w = Array2::from_elem((8, 3), 2.0);
        for num in [4, 5, 12, 13] {
            let out = resample_rows(&w, num);
            assert_eq!(out.dim(), (num, 3));
            for v in out.iter() {
                assert_abs_diff_eq!(*v, 2.0, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_resample_upsample_interleaves_original() {
        // Band-limited signal: upsampling by 2 reproduces the samples at even rows.
        let n = 8;
        let w = Array2::from_shape_fn((n, 1), |(i, _)| {
            (2.0 * std::f64::consts::PI * i as f64 / n as f64).cos()
        });
        let out = resample_rows(&w, 2 * n);
        for i in 0..n {
            assert_abs_diff_eq!(out[[2 * i, 0]], w[[i, 0]], epsilon = 1e-12);
        }
    }
}
