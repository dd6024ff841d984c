//! Preview command
//!
//! Runs a stack over a grid of ones and saves what comes out, i.e. the
//! combined mask of the stack's linear filters.

use crate::PreviewArgs;
#[allow(unused_imports)]
use tracing::{debug, info, trace};
use anyhow::{bail, Context, Result};
use ndarray::Array2;

pub fn run(args: PreviewArgs, verbose: u8) -> Result<()> {
    trace!(stack = %args.stack.display(), rows = args.rows, cols = args.cols, "preview::run");

    if args.rows == 0 || args.cols == 0 {
        bail!("preview grid must be non-empty, got {}x{}", args.rows, args.cols);
    }

    let stack = super::load_stack(Some(args.stack.as_path()), None)?;
    info!(filters = stack.len(), "Previewing stack");
    if verbose > 0 {
        println!("Stack: {}", super::describe(&stack));
    }

    let ones = Array2::<f64>::ones((args.rows, args.cols));
    let mask = stack.apply(&ones).context("Failed to apply stack")?;
    super::save_array(&args.output, &mask)?;

    if verbose > 0 {
        println!("Wrote {}x{} preview to {}", args.rows, args.cols, args.output.display());
    }

    Ok(())
}
