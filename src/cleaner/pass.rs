//! File-level driver: read, classify every line in order, write the rest.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info};

use super::classifier::clean_line;

/// Counts reported after a cleanup pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CleanSummary {
    /// Lines deleted from the input.
    pub removed: usize,
    /// Lines written to the output (rewritten or untouched).
    pub retained: usize,
}

/// Run the cleanup pass over `input`, writing survivors to `output`.
///
/// The whole input is read into memory, classified line by line in original
/// order, and written back in one operation. The write is not atomic; a
/// failure mid-write can leave a truncated output file. The presence or
/// absence of a final trailing newline is preserved.
pub fn clean_file(input: &Path, output: &Path) -> Result<CleanSummary> {
    let source = fs::read_to_string(input)
        .with_context(|| format!("failed to read {}", input.display()))?;

    let mut kept_lines = Vec::new();
    let mut removed = 0usize;

    for line in source.lines() {
        match clean_line(line) {
            Some(kept) => {
                if kept != line {
                    debug!(line, "stripped emoji prefix");
                }
                kept_lines.push(kept);
            }
            None => {
                debug!(line, "removed debug log line");
                removed += 1;
            }
        }
    }

    let summary = CleanSummary {
        removed,
        retained: kept_lines.len(),
    };

    // Guard on the line count, not the joined string: a single retained
    // blank line joins to "" but still needs its newline written back.
    let mut cleaned = kept_lines.join("\n");
    if source.ends_with('\n') && !kept_lines.is_empty() {
        cleaned.push('\n');
    }

    fs::write(output, cleaned)
        .with_context(|| format!("failed to write {}", output.display()))?;

    info!(
        removed = summary.removed,
        retained = summary.retained,
        output = %output.display(),
        "cleanup pass finished"
    );
    Ok(summary)
}
