//! Apply command
//!
//! Filters raw k-space with a stack and writes the filtered k-space.

use crate::ApplyArgs;
#[allow(unused_imports)]
use tracing::{debug, info, trace};
use anyhow::{Context, Result};

pub fn run(args: ApplyArgs, verbose: u8) -> Result<()> {
    trace!(input = %args.input.display(), dc_offset = ?args.dc_offset, "apply::run");

    let raw = super::load_kspace(&args.input)?;
    let stack = super::load_stack(args.stack.as_deref(), args.dc_offset)?;
    let (rows, cols) = raw.dim();

    info!(rows, cols, filters = stack.len(), "Filtering k-space");
    if verbose > 0 {
        println!("Filtering {} ({}x{}): {}", args.input.display(), rows, cols, super::describe(&stack));
    }

    let filtered = stack.apply(&raw).context("Failed to apply stack")?;
    super::save_array(&args.output, &filtered)?;

    if verbose > 0 {
        println!("Done.");
    }

    Ok(())
}
