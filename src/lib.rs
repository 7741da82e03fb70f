//! Line-oriented cleanup of decorative debug logging.
//!
//! The codebase this targets accumulated `logger.info()` calls wrapped in
//! `===` separator banners and emoji-prefixed messages. This crate removes
//! those in a single pass over one source file: banner/emoji info lines are
//! deleted outright, while warn/error lines only lose their decorative emoji
//! prefix and keep their message.
//!
//! # Module Structure
//!
//! - [`cleaner`] - Marker set, per-line classifier, and the file pass

pub mod cleaner;

pub use cleaner::{clean_file, clean_line, CleanSummary};
