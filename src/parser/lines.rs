//! Line normalization.
//!
//! Splits raw pasted text into trimmed, whitespace-collapsed, non-empty
//! lines and repairs vertical bars that PDF and word-processor exports
//! leave in place of Roman numerals (`|| - text` becomes `II- text`).

use crate::parser::pattern::compile;

/// Normalize one raw line. Returns an empty string for blank lines.
pub fn normalize_line(raw: &str) -> String {
    let collapsed = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    repair_bar_numerals(collapsed)
}

/// Split text on any line ending and normalize each line, dropping blanks.
///
/// # Examples
///
/// ```
/// use quiz_text::parser::lines::split_lines;
///
/// let lines = split_lines("1.  What?\r\n\r\n  a)   Yes \r|| - Maybe");
/// assert_eq!(lines, vec!["1. What?", "a) Yes", "II- Maybe"]);
/// ```
pub fn split_lines(text: &str) -> Vec<String> {
    text.split(['\n', '\r'])
        .map(normalize_line)
        .filter(|line| !line.is_empty())
        .collect()
}

/// Replace a leading run of one to three bar-like characters followed by
/// a label separator with the same number of `I`s.
fn repair_bar_numerals(line: String) -> String {
    let re = compile!(r"^([|ǀ│∣¦]{1,3})\s*[.\-–—)\]}:]");
    if let Some(bars) = re.captures(&line).and_then(|caps| caps.get(1)) {
        let numeral = "I".repeat(bars.as_str().chars().count());
        return format!("{}{}", numeral, line[bars.end()..].trim_start());
    }
    line
}
