//! Prints whether this host exposes a GPU to sparsefeed.
//!
//! Usage:
//!     cargo run -p sparsefeed-gpu --bin check-gpu --features cuda
//!
//! Set `RUST_LOG=debug` to see the probing steps.

use sparsefeed_gpu::{run_diagnostic, GpuError, SystemRegistry};

fn main() -> Result<(), GpuError> {
    env_logger::init();

    let registry = SystemRegistry::new();
    let stdout = std::io::stdout();
    run_diagnostic(&registry, &mut stdout.lock())?;
    Ok(())
}
