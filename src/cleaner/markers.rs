//! The fixed marker set driving deletion and prefix-stripping decisions.
//!
//! Everything here is an explicit enumerated constant so the matching rules
//! stay auditable and testable in isolation, rather than being inlined at
//! each call site.

/// Decorative emoji used by the debug logging this tool removes.
///
/// Declaration order matters: the prefix-stripping pass applies these
/// sequentially, so a stacked prefix like `` `🎯 ✅ msg` `` loses both
/// symbols as long as they appear in this order.
pub const EMOJI_MARKERS: &[&str] = &[
    "🎯", "✅", "📊", "📋", "📭", "⚠️", "❌", "🔍", "🧪", "🔓", "📦", "🔑",
    "🔗", "📅", "🏥", "🏢", "🌱", "👤", "📄", "🌐", "➕",
];

/// Banner separator used in decorative `logger.info` framing lines.
pub const SEPARATOR: &str = "===";

/// Calling-convention substring identifying an info-level log statement.
pub const INFO_CALL: &str = "logger.info";

/// Calling-convention substring identifying a warn-level log statement.
pub const WARN_CALL: &str = "logger.warn";

/// Calling-convention substring identifying an error-level log statement.
pub const ERROR_CALL: &str = "logger.error";

/// Plain substring test: does `line` contain any configured emoji marker?
pub fn contains_marker(line: &str) -> bool {
    EMOJI_MARKERS.iter().any(|emoji| line.contains(emoji))
}
