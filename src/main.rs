//! One-shot cleanup of decorative debug logging from the priority service.
//!
//! No CLI arguments: this exists for exactly one file pair. Run it from the
//! directory containing the service source; the cleaned copy is written next
//! to the original and the original is left untouched.

use std::path::Path;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use logsweep::clean_file;

/// Source file the cleanup pass reads.
const INPUT_PATH: &str = "priorityService.ts";

/// Cleaned copy written next to the original.
const OUTPUT_PATH: &str = "priorityService.ts.cleaned";

fn main() -> Result<()> {
    // Diagnostics go to stderr so stdout stays the two summary lines.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let summary = clean_file(Path::new(INPUT_PATH), Path::new(OUTPUT_PATH))?;

    println!("Removed {} debug logger.info() lines", summary.removed);
    println!("Output written to {OUTPUT_PATH}");
    Ok(())
}
