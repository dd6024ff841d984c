//! 2D filter builders.
//!
//! Each builder expands a 1D window profile into a real 2D mask and fits it
//! to the target shape with [`resize_to_match`]. Stop/high variants are the
//! exact complement (`1 - mask`) of their pass counterpart.
//!
//! # Construction
//!
//! - [`Construction::Outer`] - outer product of the profile with itself:
//!   separable, square-symmetric.
//! - [`Construction::Rotational`] - the profile is linearly interpolated at
//!   each pixel's distance from the grid centre: circularly symmetric.
//!
//! # Example
//!
//! ```rust
//! use kspace_ops::builders::{build_high_pass, build_low_pass, Construction};
//! use kspace_ops::resize::Contour;
//! use kspace_window::{WindowFamily, WindowSpec};
//!
//! let hann = WindowSpec::Simple(WindowFamily::Hanning);
//! let lp = build_low_pass(&hann, (32, 48), 0, Construction::Rotational, Contour::ConstPercentage);
//! let hp = build_high_pass(&hann, (32, 48), 0, Construction::Rotational, Contour::ConstPercentage);
//! assert_eq!(lp.dim(), (32, 48));
//! assert!(((&lp + &hp)[[16, 24]] - 1.0).abs() < 1e-12);
//! ```

use crate::resize::{resampled_rows, resize_to_match, Contour};
use crate::{Dim, OpsError, OpsResult};
use kspace_window::{get_window, WindowSpec};
use ndarray::Array2;
use serde::{Deserialize, Serialize};
#[allow(unused_imports)]
use tracing::{debug, trace};

/// How a 1D profile becomes a square 2D array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Construction {
    /// Outer product of the profile with itself.
    Outer,
    /// Radial interpolation of the profile.
    #[default]
    Rotational,
}

/// A diameter of 0 means "the larger target dimension".
#[inline]
pub fn resolve_diameter(diameter: usize, dim: Dim) -> usize {
    if diameter == 0 { dim.0.max(dim.1) } else { diameter }
}

/// `1 - mask`, in place.
pub fn complement(mut mask: Array2<f64>) -> Array2<f64> {
    mask.mapv_inplace(|v| 1.0 - v);
    mask
}

/// Square `D x D` array from a profile of length `D` by radial interpolation.
///
/// Pixel `(i, j)` sits at `(i - h, j - h)` with `h = (D - 1) / 2`. Inside
/// radius `h` it takes the profile sampled at index `r + h`; outside it is 0.
pub fn radial_profile(profile: &[f64]) -> Array2<f64> {
    let d = profile.len();
    if d <= 1 {
        return Array2::from_elem((d, d), profile.first().copied().unwrap_or(0.0));
    }
    let half = (d - 1) as f64 / 2.0;
    Array2::from_shape_fn((d, d), |(i, j)| {
        let x = i as f64 - half;
        let y = j as f64 - half;
        let r = (x * x + y * y).sqrt();
        if r <= half { interp(profile, r + half) } else { 0.0 }
    })
}

/// Outer product `p[i] * p[j]`.
pub fn outer_profile(profile: &[f64]) -> Array2<f64> {
    let d = profile.len();
    Array2::from_shape_fn((d, d), |(i, j)| profile[i] * profile[j])
}

/// Linear interpolation of `profile` at fractional index `pos`.
#[inline]
fn interp(profile: &[f64], pos: f64) -> f64 {
    let i = pos.floor() as usize;
    if i + 1 >= profile.len() {
        return profile[profile.len() - 1];
    }
    let t = pos - i as f64;
    profile[i] + t * (profile[i + 1] - profile[i])
}

/// Low-pass mask of shape `dim`.
pub fn build_low_pass(
    window: &WindowSpec,
    dim: Dim,
    diameter: usize,
    construction: Construction,
    contour: Contour,
) -> Array2<f64> {
    let d = resolve_diameter(diameter, dim);
    trace!(%window, ?dim, diameter = d, ?construction, ?contour, "build_low_pass");

    let profile = get_window(window, d);
    let square = match construction {
        Construction::Outer => outer_profile(&profile),
        Construction::Rotational => radial_profile(&profile),
    };
    resize_to_match(&square, dim, contour, None)
}

/// High-pass mask: complement of [`build_low_pass`].
pub fn build_high_pass(
    window: &WindowSpec,
    dim: Dim,
    diameter: usize,
    construction: Construction,
    contour: Contour,
) -> Array2<f64> {
    complement(build_low_pass(window, dim, diameter, construction, contour))
}

/// Circular band-pass mask: an annulus of `width` pixels whose outer edge
/// is at radius `diameter / 2`.
///
/// The `width`-long profile is left-padded with zeros to `diameter` and
/// rotated.
///
/// # Errors
///
/// [`OpsError::InvalidParameter`] if `width` exceeds the resolved diameter.
pub fn build_band_pass(
    window: &WindowSpec,
    dim: Dim,
    diameter: usize,
    width: usize,
    contour: Contour,
) -> OpsResult<Array2<f64>> {
    let d = resolve_diameter(diameter, dim);
    trace!(%window, ?dim, diameter = d, width, ?contour, "build_band_pass");
    if width > d {
        return Err(OpsError::InvalidParameter(format!(
            "band width {} exceeds diameter {}",
            width, d
        )));
    }

    let mut profile = vec![0.0; d - width];
    profile.extend(get_window(window, width));
    Ok(resize_to_match(&radial_profile(&profile), dim, contour, None))
}

/// Circular band-stop mask: complement of [`build_band_pass`].
pub fn build_band_stop(
    window: &WindowSpec,
    dim: Dim,
    diameter: usize,
    width: usize,
    contour: Contour,
) -> OpsResult<Array2<f64>> {
    build_band_pass(window, dim, diameter, width, contour).map(complement)
}

/// Full-height stripe of `width` columns centred on column `center`.
///
/// The stripe starts at `center - floor(width / 2)`. Samples landing outside
/// `[0, cols)` are dropped, never wrapped.
pub fn build_vertical_band_pass(
    window: &WindowSpec,
    dim: Dim,
    center: isize,
    width: usize,
) -> Array2<f64> {
    trace!(%window, ?dim, center, width, "build_vertical_band_pass");

    let profile = get_window(window, width);
    let start = center - (width / 2) as isize;
    let mut line = vec![0.0; dim.1];
    for (k, v) in profile.into_iter().enumerate() {
        let col = start + k as isize;
        if col >= 0 && (col as usize) < dim.1 {
            line[col as usize] = v;
        }
    }
    Array2::from_shape_fn(dim, |(_, j)| line[j])
}

/// Complement of [`build_vertical_band_pass`].
pub fn build_vertical_band_stop(
    window: &WindowSpec,
    dim: Dim,
    center: isize,
    width: usize,
) -> Array2<f64> {
    complement(build_vertical_band_pass(window, dim, center, width))
}

/// Full-width stripe of `width` rows centred on row `center`.
pub fn build_horizontal_band_pass(
    window: &WindowSpec,
    dim: Dim,
    center: isize,
    width: usize,
) -> Array2<f64> {
    build_vertical_band_pass(window, (dim.1, dim.0), center, width).reversed_axes()
}

/// Complement of [`build_horizontal_band_pass`].
pub fn build_horizontal_band_stop(
    window: &WindowSpec,
    dim: Dim,
    center: isize,
    width: usize,
) -> Array2<f64> {
    complement(build_horizontal_band_pass(window, dim, center, width))
}

/// Notch mask: ones everywhere except a small rotational dip at `center`.
///
/// The dip is a `width x width` rotational low-pass with constant-pixel
/// contour, placed so its middle pixel lands on `center` (row, col), then
/// inverted.
pub fn build_notch(window: &WindowSpec, dim: Dim, center: (isize, isize), width: usize) -> Array2<f64> {
    trace!(%window, ?dim, ?center, width, "build_notch");

    let base = build_low_pass(
        window,
        (width, width),
        width,
        Construction::Rotational,
        Contour::ConstPixel,
    );
    let rows = resampled_rows(width, dim, Contour::ConstPixel);
    let shift = (
        center.0 - (rows / 2) as isize,
        center.1 - (width / 2) as isize,
    );
    complement(resize_to_match(&base, dim, Contour::ConstPixel, Some(shift)))
}
