//! CLI command implementations

pub mod apply;
pub mod preview;
pub mod recon;
pub mod windows;

use anyhow::{Context, Result};
use kspace_ops::FilterStack;
use ndarray::Array2;
use ndarray_npy::{read_npy, write_npy, WritableElement};
use num_complex::Complex64;
use std::path::Path;
#[allow(unused_imports)]
use tracing::{debug, trace};

/// Load a stack file, or an empty stack, then optionally put a DC offset
/// correction in front.
pub fn load_stack(path: Option<&Path>, dc_offset: Option<usize>) -> Result<FilterStack> {
    let stack = match path {
        Some(path) => FilterStack::load(path)
            .with_context(|| format!("Failed to load stack: {}", path.display()))?,
        None => FilterStack::new(),
    };
    Ok(match dc_offset {
        Some(size) => stack.with_dc_offset(size),
        None => stack,
    })
}

/// Load k-space from `.npy`, accepting complex128 or float64 arrays.
pub fn load_kspace(path: &Path) -> Result<Array2<Complex64>> {
    trace!(path = %path.display(), "load_kspace");
    match read_npy::<_, Array2<Complex64>>(path) {
        Ok(data) => Ok(data),
        Err(complex_err) => {
            debug!(error = %complex_err, "not complex, trying real");
            let real: Array2<f64> = read_npy(path)
                .with_context(|| format!("Failed to load: {}", path.display()))?;
            Ok(real.mapv(|v| Complex64::new(v, 0.0)))
        }
    }
}

/// Save an array to `.npy`.
pub fn save_array<A: WritableElement>(path: &Path, data: &Array2<A>) -> Result<()> {
    write_npy(path, data).with_context(|| format!("Failed to save: {}", path.display()))
}

/// Short one-line stack listing for verbose output.
pub fn describe(stack: &FilterStack) -> String {
    if stack.is_empty() {
        return "(empty)".into();
    }
    stack
        .iter()
        .map(|f| f.to_string())
        .collect::<Vec<_>>()
        .join(" -> ")
}
