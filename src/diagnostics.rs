//! Parse diagnostics.
//!
//! [`ParseDiagnostics`] records what happened during a parse: how many
//! lines were seen and ignored, what the answer key contributed, and which
//! questions the normalization pass had to correct.

use serde::Serialize;

/// Records what happened during a parse.
///
/// Returned by [`QuizParser::parse_with_diagnostics`](crate::parser::QuizParser::parse_with_diagnostics).
/// None of these counters affect the parsed quiz; they exist so that an
/// import screen can explain a surprising result.
///
/// # Example
///
/// ```
/// use quiz_text::diagnostics::ParseDiagnostics;
///
/// let diag = ParseDiagnostics::default();
/// assert!(diag.clean());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ParseDiagnostics {
    /// Non-empty lines after normalization.
    pub lines_total: usize,

    /// Lines seen before the first question, which have nowhere to go.
    pub lines_ignored: usize,

    /// Lines recognized as answer key declarations.
    pub answer_key_lines: usize,

    /// Distinct question numbers found in the answer key(s).
    pub answer_key_entries: usize,

    /// Questions closed with text and at least one option or statement.
    pub questions_assembled: usize,

    /// Questions dropped because they had no text or no body.
    pub questions_discarded: usize,

    /// Questions dropped because the question limit was reached.
    pub questions_dropped_by_cap: usize,

    /// Output positions (1-based) where the first option was marked
    /// correct because nothing else was.
    pub fallback_corrections: Vec<usize>,

    /// Number of true/false questions whose extra options were removed.
    pub true_false_truncations: usize,
}

impl ParseDiagnostics {
    /// Quick check: was anything dropped or guessed?
    pub fn clean(&self) -> bool {
        self.lines_ignored == 0
            && self.questions_discarded == 0
            && self.questions_dropped_by_cap == 0
            && self.fallback_corrections.is_empty()
            && self.true_false_truncations == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_clean() {
        let d = ParseDiagnostics::default();
        assert!(d.clean());
        assert_eq!(d.lines_total, 0);
        assert!(d.fallback_corrections.is_empty());
    }

    #[test]
    fn fallback_is_not_clean() {
        let d = ParseDiagnostics {
            fallback_corrections: vec![1],
            ..Default::default()
        };
        assert!(!d.clean());
    }
}
