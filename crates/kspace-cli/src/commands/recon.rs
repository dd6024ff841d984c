//! Recon command
//!
//! Filters raw k-space, reconstructs the image and writes its magnitude and
//! optionally its phase. With `--mask-threshold` both are multiplied by the
//! binary mask of the image.

use crate::ReconArgs;
#[allow(unused_imports)]
use tracing::{debug, info, trace};
use anyhow::{Context, Result};
use kspace_ops::fft::Reconstruction;

pub fn run(args: ReconArgs, verbose: u8) -> Result<()> {
    trace!(input = %args.input.display(), threshold = ?args.mask_threshold, "recon::run");

    let raw = super::load_kspace(&args.input)?;
    let stack = super::load_stack(args.stack.as_deref(), args.dc_offset)?;

    info!(filters = stack.len(), "Reconstructing");
    if verbose > 0 {
        println!("Reconstructing {}: {}", args.input.display(), super::describe(&stack));
    }

    let rec = Reconstruction::new(&raw, stack.as_slice()).context("Failed to apply stack")?;
    let mask = args.mask_threshold.map(|t| rec.image_mask(t));

    let mut magnitude = rec.image_magnitude();
    if let Some(mask) = &mask {
        magnitude *= mask;
    }
    super::save_array(&args.magnitude, &magnitude)?;

    if let Some(path) = &args.phase {
        let mut phase = rec.image_phase();
        if let Some(mask) = &mask {
            phase *= mask;
        }
        super::save_array(path, &phase)?;
    }

    if verbose > 0 {
        let (rows, cols) = magnitude.dim();
        println!("Wrote {}x{} magnitude to {}", rows, cols, args.magnitude.display());
    }

    Ok(())
}
