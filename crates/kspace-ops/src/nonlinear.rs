//! Data-dependent and elementwise transforms.

use crate::Sample;
use ndarray::{s, Array2};
use std::ops::Range;
#[allow(unused_imports)]
use tracing::{debug, trace};

/// Corner block size used by the standalone helper.
pub const DEFAULT_DC_BLOCK: usize = 5;

/// Subtracts the average of four corner-block means from every element.
///
/// The blocks, with `s = size` and slice bounds as in `[start, end)`:
///
/// | block | rows            | cols            |
/// |-------|-----------------|-----------------|
/// | 1     | `[0, s)`        | `[0, s)`        |
/// | 2     | `[0, rows - s)` | `[0, s)`        |
/// | 3     | `[0, rows - s)` | `[0, cols - s)` |
/// | 4     | `[0, s)`        | `[0, cols - s)` |
///
/// `rows - s` with `s == 0` is an empty range, not the full axis. An empty
/// block has a NaN mean and the NaN propagates to the output.
pub fn compute_dc_offset<T: Sample>(kspace: &Array2<T>, size: usize) -> Array2<T> {
    let (rows, cols) = kspace.dim();
    trace!(rows, cols, size, "compute_dc_offset");

    let c1 = block_mean(kspace, head(rows, size), head(cols, size));
    let c2 = block_mean(kspace, drop_tail(rows, size), head(cols, size));
    let c3 = block_mean(kspace, drop_tail(rows, size), drop_tail(cols, size));
    let c4 = block_mean(kspace, head(rows, size), drop_tail(cols, size));
    let offset = (c1 + c2 + c3 + c4) / 4.0;
    debug!(?offset, "dc offset");

    kspace.mapv(|v| v - offset)
}

fn head(len: usize, size: usize) -> Range<usize> {
    0..size.min(len)
}

fn drop_tail(len: usize, size: usize) -> Range<usize> {
    if size == 0 { 0..0 } else { 0..len.saturating_sub(size) }
}

fn block_mean<T: Sample>(a: &Array2<T>, rows: Range<usize>, cols: Range<usize>) -> T {
    let block = a.slice(s![rows, cols]);
    let n = block.len();
    block.iter().fold(T::zero(), |acc, &v| acc + v) / n as f64
}

/// `log10(1 + x)` elementwise. Inputs at or below -1 give non-finite output.
pub fn log_transform<T: Sample>(data: &Array2<T>) -> Array2<T> {
    trace!(dim = ?data.dim(), "log_transform");
    data.mapv(Sample::log10_1p)
}

/// `x ^ gamma` elementwise. `gamma == 1` returns an exact copy.
pub fn gamma_transform<T: Sample>(data: &Array2<T>, gamma: f64) -> Array2<T> {
    trace!(dim = ?data.dim(), gamma, "gamma_transform");
    if gamma == 1.0 {
        return data.clone();
    }
    data.mapv(|v| v.powf(gamma))
}
