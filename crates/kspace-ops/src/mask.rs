//! Binary thresholding of reconstructed images.

use crate::Sample;
use ndarray::Array2;
#[allow(unused_imports)]
use tracing::{debug, trace};

/// Threshold used when none is given.
pub const DEFAULT_MASK_THRESHOLD: f64 = 0.1;

/// 1 where `|x| >= threshold` and `|x| > 0`, 0 elsewhere.
///
/// NaN input stays NaN. A non-positive threshold still maps exact zeros to 0.
pub fn mask<T: Sample>(image: &Array2<T>, threshold: f64) -> Array2<f64> {
    trace!(dim = ?image.dim(), threshold, "mask");
    image.mapv(|v| {
        let m = v.modulus();
        if m.is_nan() {
            f64::NAN
        } else if m >= threshold && m > 0.0 {
            1.0
        } else {
            0.0
        }
    })
}
