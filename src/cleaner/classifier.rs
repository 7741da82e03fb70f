//! Pure per-line classification: delete, rewrite, or keep.

use lazy_static::lazy_static;
use regex::Regex;

use super::markers::{self, ERROR_CALL, INFO_CALL, SEPARATOR, WARN_CALL};

lazy_static! {
    /// One pattern per emoji marker: the marker plus trailing whitespace,
    /// anchored to an opening backtick/single-quote/double-quote. The
    /// delimiter is captured and re-emitted; markers contain no regex
    /// metacharacters, so they are interpolated as-is.
    static ref PREFIX_PATTERNS: Vec<Regex> = markers::EMOJI_MARKERS
        .iter()
        .map(|emoji| {
            Regex::new(&format!(r#"([`'"]){emoji}\s+"#))
                .expect("marker prefix patterns are fixed literals")
        })
        .collect();
}

/// Classify a single physical line.
///
/// Returns `None` when the line should be deleted, otherwise the retained
/// (possibly rewritten) line:
///
/// - `logger.info` lines carrying a `===` banner or any configured emoji
///   are deleted.
/// - `logger.error` / `logger.warn` lines lose a decorative emoji prefix
///   (emoji plus following whitespace directly after the opening quote);
///   mid-message emoji are left alone on purpose.
/// - Everything else passes through unchanged.
///
/// All detection is plain substring matching with no awareness of string
/// literal boundaries; an unrelated `===` in a comment on an info line is
/// deleted too. That coarseness matches the logging style being cleaned up.
pub fn clean_line(line: &str) -> Option<String> {
    if line.contains(INFO_CALL) {
        if line.contains(SEPARATOR) {
            return None;
        }
        if markers::contains_marker(line) {
            return None;
        }
    }

    if line.contains(ERROR_CALL) || line.contains(WARN_CALL) {
        let mut cleaned = line.to_string();
        for pattern in PREFIX_PATTERNS.iter() {
            cleaned = pattern.replace_all(&cleaned, "$1").into_owned();
        }
        return Some(cleaned);
    }

    Some(line.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deletes_info_banner_lines() {
        assert_eq!(clean_line("logger.info('=== Priority sync ===');"), None);
    }

    #[test]
    fn deletes_info_line_with_separator_anywhere() {
        // Substring matching is deliberately coarse: the banner does not
        // have to live inside the quoted message.
        assert_eq!(clean_line("logger.info(msg); // === sync ==="), None);
    }

    #[test]
    fn deletes_info_line_with_emoji() {
        assert_eq!(clean_line("logger.info('✅ Block saved');"), None);
        assert_eq!(clean_line("  logger.info(`📊 Stats: ${count}`);"), None);
    }

    #[test]
    fn keeps_plain_info_line_unchanged() {
        let line = "logger.info('Priority sync finished');";
        assert_eq!(clean_line(line).as_deref(), Some(line));
    }

    #[test]
    fn strips_error_prefix_single_quote() {
        assert_eq!(
            clean_line("logger.error('❌ Something failed');").as_deref(),
            Some("logger.error('Something failed');")
        );
    }

    #[test]
    fn strips_error_prefix_double_quote_and_backtick() {
        assert_eq!(
            clean_line(r#"logger.error("❌ Something failed");"#).as_deref(),
            Some(r#"logger.error("Something failed");"#)
        );
        assert_eq!(
            clean_line("logger.error(`❌ Failed: ${err}`);").as_deref(),
            Some("logger.error(`Failed: ${err}`);")
        );
    }

    #[test]
    fn strips_warn_prefix_with_variation_selector() {
        assert_eq!(
            clean_line("logger.warn('⚠️ Slot conflict detected');").as_deref(),
            Some("logger.warn('Slot conflict detected');")
        );
    }

    #[test]
    fn strips_multiple_whitespace_after_prefix() {
        assert_eq!(
            clean_line("logger.warn('⚠️   Low capacity');").as_deref(),
            Some("logger.warn('Low capacity');")
        );
    }

    #[test]
    fn leaves_mid_message_emoji_on_warn_lines() {
        // Prefix-only stripping: only the delimiter-anchored emoji goes.
        let line = "logger.warn('capacity low ❌ for clinic');";
        assert_eq!(clean_line(line).as_deref(), Some(line));
    }

    #[test]
    fn warn_line_without_marker_is_untouched() {
        let line = "logger.warn('capacity low for clinic');";
        assert_eq!(clean_line(line).as_deref(), Some(line));
    }

    #[test]
    fn strips_stacked_prefixes_in_declaration_order() {
        // 🎯 precedes ✅ in the marker set, so removing the first prefix
        // exposes the second to a later pattern in the same pass.
        assert_eq!(
            clean_line("logger.error('🎯 ✅ done');").as_deref(),
            Some("logger.error('done');")
        );
    }

    #[test]
    fn strips_prefixes_behind_different_delimiters() {
        // Each marker is tried against all three delimiter variants, so two
        // quoted arguments on one line each lose their own prefix.
        assert_eq!(
            clean_line("logger.error('❌ failed', `⚠️ retrying ${n}`);").as_deref(),
            Some("logger.error('failed', `retrying ${n}`);")
        );
    }

    #[test]
    fn unrelated_lines_pass_through() {
        let line = "const emojis = ['❌', '⚠️']; // === table ===";
        assert_eq!(clean_line(line).as_deref(), Some(line));
    }

    #[test]
    fn classifier_is_idempotent() {
        let lines = [
            "logger.error('❌ Something failed');",
            "logger.warn('⚠️ careful');",
            "logger.info('kept');",
            "plain code here",
        ];
        for line in lines {
            let once = clean_line(line).unwrap();
            let twice = clean_line(&once).unwrap();
            assert_eq!(once, twice);
        }
    }
}
