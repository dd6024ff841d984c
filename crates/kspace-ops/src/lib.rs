//! # kspace-ops
//!
//! Construction and application of 2D spectral filters for MRI k-space.
//!
//! # Modules
//!
//! - [`resize`] - fitting a filter array to the data shape
//! - [`builders`] - low/high-pass, band-pass/stop, stripes, notch
//! - [`nonlinear`] - DC offset correction, log and gamma transforms
//! - [`filter`] - the filter object model
//! - [`stack`] - ordered stacks, execution and YAML persistence
//! - [`fft`] - 2D transforms and reconstruction
//! - [`mask`] - binary thresholding
//!
//! # Example
//!
//! ```rust
//! use kspace_ops::filter::{Filter, RadialGeometry};
//! use kspace_ops::stack::FilterStack;
//! use kspace_ops::fft::Reconstruction;
//! use kspace_window::{WindowFamily, WindowSpec};
//! use ndarray::Array2;
//! use num_complex::Complex64;
//!
//! let dim = (32, 32);
//! let mut stack = FilterStack::new().with_dc_offset(4);
//! stack.push(Filter::low_pass(RadialGeometry::new(WindowSpec::Simple(WindowFamily::Hamming), dim))?);
//! stack.push(Filter::gamma_transform(0.8)?);
//!
//! let raw = Array2::from_elem(dim, Complex64::new(1.0, 0.5));
//! let rec = Reconstruction::new(&raw, stack.as_slice())?;
//! assert_eq!(rec.image_magnitude().dim(), dim);
//! # Ok::<(), kspace_ops::OpsError>(())
//! ```
//!
//! # Features
//!
//! - `parallel` (default) - multi-threaded mask application via rayon

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
mod sample;
pub mod builders;
pub mod fft;
pub mod filter;
pub mod mask;
pub mod nonlinear;
pub mod resize;
pub mod stack;

pub use error::{OpsError, OpsResult};
pub use filter::{Filter, FilterKind, FilterParams};
pub use mask::{mask, DEFAULT_MASK_THRESHOLD};
pub use resize::{resize_to_match, Contour};
pub use sample::{Dim, Sample};
pub use stack::{apply_stack, FilterStack};
