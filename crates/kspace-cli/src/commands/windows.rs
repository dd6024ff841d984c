//! Windows command
//!
//! Lists the window families a stack file may name.

#[allow(unused_imports)]
use tracing::{debug, info, trace};
use anyhow::Result;
use kspace_window::WindowFamily;

pub fn run(verbose: u8) -> Result<()> {
    trace!("windows::run");

    println!("{:<16} {:<18} shape", "name", "label");
    for family in WindowFamily::ALL {
        let shape = match family {
            WindowFamily::Chebwin => "attenuation (dB)",
            WindowFamily::Gaussian => "standard deviation",
            WindowFamily::Kaiser => "beta",
            WindowFamily::Slepian => "bandwidth",
            _ => "-",
        };
        println!("{:<16} {:<18} {}", family.name(), family.label(), shape);
    }

    if verbose > 0 {
        println!();
        println!("Parametric windows are written as [name, shape] in stack files,");
        println!("e.g. window: [kaiser, 8.6]");
    }

    Ok(())
}
