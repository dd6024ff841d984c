//! 2D Fourier transforms and image reconstruction.
//!
//! # Operations
//!
//! - [`fft2`] / [`ifft2`] - separable 2D transforms (`ifft2` scales by `1 / (rows * cols)`)
//! - [`fftshift`] / [`ifftshift`] - move the zero frequency to / from the centre
//! - [`reconstruct`] - centred k-space to centred image
//! - [`Reconstruction`] - filtered k-space plus its image, as displayed
//!
//! # Example
//!
//! ```rust
//! use kspace_ops::fft::{fft2, fftshift, ifft2};
//! use ndarray::Array2;
//! use num_complex::Complex64;
//!
//! let img = Array2::from_shape_fn((4, 6), |(i, j)| Complex64::new((i * 6 + j) as f64, 0.0));
//! let back = ifft2(&fft2(&img));
//! assert!((back[[2, 3]].re - 15.0).abs() < 1e-9);
//!
//! let centred = fftshift(&Array2::from_shape_fn((1, 4), |(_, j)| j));
//! assert_eq!(centred.row(0).to_vec(), vec![2, 3, 0, 1]);
//! ```

use crate::filter::Filter;
use crate::mask::mask;
use crate::stack::apply_stack;
use crate::OpsResult;
use ndarray::{Array2, Axis};
use num_complex::Complex64;
use num_traits::Zero;
use rustfft::{Fft, FftDirection, FftPlanner};
#[allow(unused_imports)]
use tracing::{debug, trace};

/// Forward 2D transform, unnormalised.
pub fn fft2(data: &Array2<Complex64>) -> Array2<Complex64> {
    transform(data, FftDirection::Forward)
}

/// Inverse 2D transform, scaled by `1 / (rows * cols)`.
pub fn ifft2(data: &Array2<Complex64>) -> Array2<Complex64> {
    let mut out = transform(data, FftDirection::Inverse);
    let n = out.len();
    if n > 0 {
        let scale = 1.0 / n as f64;
        out.mapv_inplace(|c| c * scale);
    }
    out
}

fn transform(data: &Array2<Complex64>, direction: FftDirection) -> Array2<Complex64> {
    let (rows, cols) = data.dim();
    trace!(rows, cols, ?direction, "fft2");
    let mut out = data.to_owned();
    if rows == 0 || cols == 0 {
        return out;
    }

    let mut planner = FftPlanner::new();
    let row_fft = planner.plan_fft(cols, direction);
    let col_fft = planner.plan_fft(rows, direction);

    // Rows, then columns
    process_lanes(&mut out, Axis(1), row_fft.as_ref());
    process_lanes(&mut out, Axis(0), col_fft.as_ref());
    out
}

/// Transforms every lane running along `axis`.
fn process_lanes(a: &mut Array2<Complex64>, axis: Axis, fft: &dyn Fft<f64>) {
    let mut buf = vec![Complex64::zero(); a.len_of(axis)];
    let mut scratch = vec![Complex64::zero(); fft.get_inplace_scratch_len()];
    for mut lane in a.lanes_mut(axis) {
        for (b, v) in buf.iter_mut().zip(lane.iter()) {
            *b = *v;
        }
        fft.process_with_scratch(&mut buf, &mut scratch);
        for (v, b) in lane.iter_mut().zip(&buf) {
            *v = *b;
        }
    }
}

/// Rotates each axis forward by `floor(n / 2)`.
pub fn fftshift<T: Clone>(a: &Array2<T>) -> Array2<T> {
    let (rows, cols) = a.dim();
    roll(a, (rows / 2) as isize, (cols / 2) as isize)
}

/// Inverse of [`fftshift`]: rotates each axis back by `floor(n / 2)`.
pub fn ifftshift<T: Clone>(a: &Array2<T>) -> Array2<T> {
    let (rows, cols) = a.dim();
    roll(a, -((rows / 2) as isize), -((cols / 2) as isize))
}

fn roll<T: Clone>(a: &Array2<T>, dr: isize, dc: isize) -> Array2<T> {
    let (rows, cols) = a.dim();
    Array2::from_shape_fn((rows, cols), |(i, j)| {
        let si = (i as isize - dr).rem_euclid(rows as isize) as usize;
        let sj = (j as isize - dc).rem_euclid(cols as isize) as usize;
        a[[si, sj]].clone()
    })
}

/// Image from centred k-space: `ifftshift(ifft2(ifftshift(kspace)))`.
pub fn reconstruct(kspace: &Array2<Complex64>) -> Array2<Complex64> {
    ifftshift(&ifft2(&ifftshift(kspace)))
}

/// Elementwise modulus.
pub fn magnitude(a: &Array2<Complex64>) -> Array2<f64> {
    a.mapv(|c| c.norm())
}

/// Elementwise argument in `(-pi, pi]`.
pub fn phase(a: &Array2<Complex64>) -> Array2<f64> {
    a.mapv(|c| c.arg())
}

/// Values under the cursor at one pixel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Probe {
    /// `|k|`
    pub kspace_magnitude: f64,
    /// `arg(k)`
    pub kspace_phase: f64,
    /// `|image|`
    pub image_magnitude: f64,
    /// `arg(image)`
    pub image_phase: f64,
}

/// Filtered k-space together with its reconstructed image.
#[derive(Debug, Clone)]
pub struct Reconstruction {
    kspace: Array2<Complex64>,
    image: Array2<Complex64>,
}

impl Reconstruction {
    /// Runs `stack` over `raw` and reconstructs the result.
    pub fn new(raw: &Array2<Complex64>, stack: &[Filter]) -> OpsResult<Self> {
        let kspace = apply_stack(raw, stack)?;
        let image = reconstruct(&kspace);
        debug!(dim = ?image.dim(), "reconstructed");
        Ok(Self { kspace, image })
    }

    /// Filtered k-space.
    pub fn kspace(&self) -> &Array2<Complex64> {
        &self.kspace
    }

    /// Reconstructed image.
    pub fn image(&self) -> &Array2<Complex64> {
        &self.image
    }

    /// `|k|`
    pub fn kspace_magnitude(&self) -> Array2<f64> {
        magnitude(&self.kspace)
    }

    /// `arg(k)`
    pub fn kspace_phase(&self) -> Array2<f64> {
        phase(&self.kspace)
    }

    /// `|image|`
    pub fn image_magnitude(&self) -> Array2<f64> {
        magnitude(&self.image)
    }

    /// `arg(image)`
    pub fn image_phase(&self) -> Array2<f64> {
        phase(&self.image)
    }

    /// Binary mask of the image, see [`mask`].
    pub fn image_mask(&self, threshold: f64) -> Array2<f64> {
        mask(&self.image, threshold)
    }

    /// Magnitude and phase of both domains at `(row, col)`.
    pub fn probe(&self, row: usize, col: usize) -> Option<Probe> {
        let k = *self.kspace.get((row, col))?;
        let img = *self.image.get((row, col))?;
        Some(Probe {
            kspace_magnitude: k.norm(),
            kspace_phase: k.arg(),
            image_magnitude: img.norm(),
            image_phase: img.arg(),
        })
    }
}
