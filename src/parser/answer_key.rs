//! Answer key extraction.
//!
//! An answer key is a line such as `Gabarito: 1-A, 2-C` or
//! `Answer key: 1.B 2.D`. Every `{number}{separator}{letter}` pair after
//! the colon maps a question number to its correct option label.

use std::collections::BTreeMap;

use crate::parser::pattern::compile;

/// Question number to uppercase option label.
pub type AnswerKeyMap = BTreeMap<u32, char>;

fn keyword_re() -> &'static regex::Regex {
    compile!(r"(?i)^(?:gabarito|respostas?|answer\s*key)\s*:\s*")
}

/// Whether `line` declares an answer key.
pub fn is_answer_key_line(line: &str) -> bool {
    keyword_re().is_match(line)
}

/// Insert every `number-letter` pair found in `text` into `map`.
///
/// A leading keyword (`Gabarito:` and friends) is skipped if present, so
/// the same function handles a key typed into a separate field. Later
/// pairs for the same number replace earlier ones.
pub fn collect_pairs(text: &str, map: &mut AnswerKeyMap) {
    let body = match keyword_re().find(text) {
        Some(m) => &text[m.end()..],
        None => text,
    };
    let pair = compile!(r"(\d+)\s*[-.]?\s*([A-Za-z])");
    for caps in pair.captures_iter(body) {
        let Ok(number) = caps[1].parse::<u32>() else {
            continue;
        };
        if let Some(letter) = caps[2].chars().next() {
            map.insert(number, letter.to_ascii_uppercase());
        }
    }
}

/// Build the answer key from every key line, in order.
///
/// # Examples
///
/// ```
/// use quiz_text::parser::answer_key::parse_answer_key;
///
/// let key = parse_answer_key(["Gabarito: 1-c, 2.A 3 b"]);
/// assert_eq!(key.get(&1), Some(&'C'));
/// assert_eq!(key.get(&3), Some(&'B'));
/// ```
pub fn parse_answer_key<'a, I>(lines: I) -> AnswerKeyMap
where
    I: IntoIterator<Item = &'a str>,
{
    let mut map = AnswerKeyMap::new();
    for line in lines {
        collect_pairs(line, &mut map);
    }
    map
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_keywords() {
        assert!(is_answer_key_line("Gabarito: 1-A"));
        assert!(is_answer_key_line("GABARITO : 1-A"));
        assert!(is_answer_key_line("Respostas: 1-A"));
        assert!(is_answer_key_line("resposta: 1-A"));
        assert!(is_answer_key_line("Answer key: 1-A"));
        assert!(is_answer_key_line("AnswerKey: 1-A"));
    }

    #[test]
    fn keyword_needs_colon_at_start() {
        assert!(!is_answer_key_line("Gabarito 1-A"));
        assert!(!is_answer_key_line("1. Qual o gabarito: certo?"));
    }

    #[test]
    fn dash_and_comma_format() {
        let key = parse_answer_key(["Gabarito: 1-A, 2-B, 3-C"]);
        assert_eq!(key.len(), 3);
        assert_eq!(key[&2], 'B');
    }

    #[test]
    fn dot_and_space_format() {
        let key = parse_answer_key(["Answer key: 1.a 2.b 10 . d"]);
        assert_eq!(key[&1], 'A');
        assert_eq!(key[&2], 'B');
        assert_eq!(key[&10], 'D');
    }

    #[test]
    fn no_separator() {
        let key = parse_answer_key(["respostas: 1C2D"]);
        assert_eq!(key[&1], 'C');
        assert_eq!(key[&2], 'D');
    }

    #[test]
    fn last_occurrence_wins() {
        let key = parse_answer_key(["Gabarito: 1-A", "Gabarito: 1-D"]);
        assert_eq!(key[&1], 'D');
    }

    #[test]
    fn bare_key_without_keyword() {
        let mut key = AnswerKeyMap::new();
        collect_pairs("1-b, 2-c", &mut key);
        assert_eq!(key[&1], 'B');
        assert_eq!(key[&2], 'C');
    }

    #[test]
    fn empty_key_line() {
        assert!(parse_answer_key(["Gabarito:"]).is_empty());
    }
}
