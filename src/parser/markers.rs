//! Inline correctness markers.
//!
//! An option is declared correct in the text by ending its line with one
//! of: `*`, `✓`, `✔`, `(correta)`, `(correto)`, `(certa)`, `(certo)`,
//! `(correct)`, `-- correta`, `-- correto` (case-insensitive).

use crate::parser::pattern::compile;

/// Split a trailing correctness marker off `text`.
///
/// Returns the text without the marker (trimmed) and whether a marker
/// was present.
///
/// # Examples
///
/// ```
/// use quiz_text::parser::markers::strip_marker;
///
/// assert_eq!(strip_marker("Brasília (Correta)"), ("Brasília", true));
/// assert_eq!(strip_marker("Salvador"), ("Salvador", false));
/// ```
pub fn strip_marker(text: &str) -> (&str, bool) {
    let re = compile!(
        r"(?i)\s*(?:\*|✓|✔|\((?:corret[ao]|cert[ao]|correct)\)|--\s*corret[ao])\s*$"
    );
    match re.find(text) {
        Some(m) => (text[..m.start()].trim(), true),
        None => (text.trim(), false),
    }
}
