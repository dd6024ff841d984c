//! # kspace-window
//!
//! 1D window profiles used to shape 2D k-space filters.
//!
//! A [`WindowSpec`] names a [`WindowFamily`] and, for the parametric families
//! (Dolph-Chebyshev, Gaussian, Kaiser, Slepian), carries its shape parameter.
//! [`get_window`] turns a spec and a length into samples.
//!
//! # Example
//!
//! ```rust
//! use kspace_window::{get_window, WindowFamily, WindowSpec};
//!
//! let hann = get_window(&WindowSpec::Simple(WindowFamily::Hanning), 4);
//! assert_eq!(hann.len(), 4);
//! assert!((hann[2] - 1.0).abs() < 1e-12);
//!
//! let kaiser = WindowSpec::new(WindowFamily::Kaiser, Some(8.6)).unwrap();
//! let profile = get_window(&kaiser, 32);
//! assert_eq!(profile.len(), 32);
//! ```
//!
//! ## Periodic vs. symmetric
//!
//! [`get_window`] returns the periodic (DFT-even) form: the symmetric window
//! of length `len + 1` with the final sample dropped. [`symmetric_window`]
//! returns the symmetric form directly.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod chebwin;
mod error;
mod family;
mod profiles;
mod slepian;
mod spec;

pub use error::{WindowError, WindowResult};
pub use family::WindowFamily;
pub use spec::WindowSpec;

#[allow(unused_imports)]
use tracing::{debug, trace};

/// Shape used when a parametric family arrives without one.
pub const DEFAULT_SHAPE: f64 = 3.0;

/// Periodic window of `len` samples.
///
/// Lengths of 0 and 1 yield `len` ones.
pub fn get_window(spec: &WindowSpec, len: usize) -> Vec<f64> {
    trace!(window = %spec, len, "get_window");
    if len <= 1 {
        return vec![1.0; len];
    }
    let mut w = symmetric_window(spec, len + 1);
    w.truncate(len);
    w
}

/// Symmetric window of `len` samples.
pub fn symmetric_window(spec: &WindowSpec, len: usize) -> Vec<f64> {
    if len <= 1 {
        return vec![1.0; len];
    }
    let shape = spec.shape().unwrap_or(DEFAULT_SHAPE);
    match spec.family() {
        WindowFamily::Barthann => profiles::barthann(len),
        WindowFamily::Bartlett => profiles::bartlett(len),
        WindowFamily::Blackman => profiles::blackman(len),
        WindowFamily::BlackmanHarris => profiles::blackman_harris(len),
        WindowFamily::Bohman => profiles::bohman(len),
        WindowFamily::Boxcar => vec![1.0; len],
        WindowFamily::Chebwin => chebwin::chebwin(len, shape),
        WindowFamily::Flattop => profiles::flattop(len),
        WindowFamily::Gaussian => profiles::gaussian(len, shape),
        WindowFamily::Hamming => profiles::general_hamming(len, 0.54),
        WindowFamily::Hanning => profiles::general_hamming(len, 0.5),
        WindowFamily::Kaiser => profiles::kaiser(len, shape),
        WindowFamily::Nuttall => profiles::nuttall(len),
        WindowFamily::Parzen => profiles::parzen(len),
        WindowFamily::Slepian => slepian::slepian(len, shape),
        WindowFamily::Triang => profiles::triang(len),
    }
}
