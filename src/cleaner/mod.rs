//! Debug-log cleanup pipeline for a single source file.
//!
//! The pipeline is deliberately small: a fixed marker set, a pure per-line
//! classifier, and a driver that reads a file, runs the classifier over every
//! physical line in order, and writes the survivors back out.
//!
//! # Module Structure
//!
//! - [`markers`] - The enumerated emoji/separator marker set
//! - [`classifier`] - Pure per-line delete/rewrite/keep decision
//! - [`pass`] - File-level driver and removal summary

pub mod classifier;
pub mod markers;
pub mod pass;

pub use classifier::clean_line;
pub use pass::{clean_file, CleanSummary};
