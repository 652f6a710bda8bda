//! Line classification.
//!
//! Each normalized line is given one [`LineRole`] by trying an ordered list
//! of matchers; the first matcher that accepts the line wins:
//!
//! | Order | Matcher | Role |
//! |-------|---------|------|
//! | 1 | keyword question (`Questão 3: ...`) | [`LineRole::QuestionStart`] |
//! | 2 | labeled question (`1. ...`, `b) ...`) | [`LineRole::QuestionStart`] |
//! | 3 | Roman numeral (`II - ...`) | [`LineRole::Statement`] |
//! | 4 | labeled option (`a) ...`, `2. ...`) | [`LineRole::OptionStart`] |
//! | 5 | bullet option (`- ...`, `• ...`) | [`LineRole::OptionStart`] |
//! | 6 | marked option (`... *`) | [`LineRole::OptionStart`] |
//! | 7 | anything else | [`LineRole::Continuation`] |
//!
//! Matchers 3 to 7 only apply while a question is open. Without an open
//! question, a line that is not a question start has no role at all.
//!
//! The same `label + separator` shape introduces both questions and
//! options, so a labeled line only opens a new question when it continues
//! the open question's numbering (see [`QuestionContext`]). When questions
//! and options are numbered the same way, the way the label is written
//! (`2.` vs `2)`, `B)` vs `b)`) tells them apart.

use tracing::trace;

use crate::parser::markers::strip_marker;
use crate::parser::pattern::compile;

/// How a question or option list is numbered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scheme {
    /// `1.`, `2)`, `[3]`
    Numeric,
    /// `a)`, `B.`, `(c)`
    Alphabetic,
}

/// What closes a label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Separator {
    /// `1.`
    Dot,
    /// `1 -`, `1 –`
    Dash,
    /// `1)`, `1]`, `1}`
    Close,
    /// `(1)`, `[1]`, `{1}`
    Enclosed,
}

/// How a label is written, apart from its numbering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelStyle {
    pub separator: Separator,
    /// Upper-case letter. Always `false` for numbers.
    pub uppercase: bool,
}

/// The structural role of one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineRole {
    /// Opens a new question.
    QuestionStart {
        number: u32,
        scheme: Scheme,
        text: String,
    },
    /// A Roman-numeral assertion under the open question.
    Statement { numeral: String, text: String },
    /// A new option of the open question.
    OptionStart {
        label: char,
        /// Numbering of an explicit label; `None` when synthesized.
        scheme: Option<Scheme>,
        text: String,
        marked: bool,
    },
    /// More text for whatever was opened last.
    Continuation { text: String },
}

/// What the classifier needs to know about the open question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuestionContext {
    /// Number of the open question (letters count by alphabet position).
    pub number: u32,
    /// Numbering of the open question.
    pub scheme: Scheme,
    /// How the question's own label is written. `None` for keyword starts.
    pub style: Option<LabelStyle>,
    /// Numbering of its explicitly labeled options, if any.
    pub option_scheme: Option<Scheme>,
    /// How the first explicitly labeled option is written.
    pub option_style: Option<LabelStyle>,
    /// Options collected so far, including one still open.
    pub option_count: usize,
    /// Label given to the next option that carries none.
    pub next_label: char,
}

type Matcher = fn(&str, Option<&QuestionContext>) -> Option<LineRole>;

const MATCHERS: &[(&str, Matcher)] = &[
    ("keyword_question", match_keyword_question),
    ("labeled_question", match_labeled_question),
    ("statement", match_statement),
    ("labeled_option", match_labeled_option),
    ("bullet_option", match_bullet_option),
    ("marked_option", match_marked_option),
    ("continuation", match_continuation),
];

/// Classify `line` given the open question, if any.
///
/// Returns `None` for lines that have no place in the quiz, i.e. anything
/// other than a question start while no question is open.
///
/// # Examples
///
/// ```
/// use quiz_text::parser::classify::{classify, LineRole, Scheme};
///
/// let role = classify("1) What is 2 + 2?", None);
/// assert_eq!(
///     role,
///     Some(LineRole::QuestionStart { number: 1, scheme: Scheme::Numeric, text: "What is 2 + 2?".into() })
/// );
/// assert_eq!(classify("some preamble", None), None);
/// ```
pub fn classify(line: &str, ctx: Option<&QuestionContext>) -> Option<LineRole> {
    for (name, matcher) in MATCHERS {
        if let Some(role) = matcher(line, ctx) {
            trace!(matcher = *name, line, "classified line");
            return Some(role);
        }
    }
    None
}

/// A leading `label + separator` split off a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Labeled<'a> {
    label: Label,
    style: LabelStyle,
    text: &'a str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Label {
    Number(u32),
    Letter(char),
}

impl Label {
    fn scheme(self) -> Scheme {
        match self {
            Label::Number(_) => Scheme::Numeric,
            Label::Letter(_) => Scheme::Alphabetic,
        }
    }

    /// Position in its sequence: `3` for `3`, `3` for `c`.
    fn ordinal(self) -> u32 {
        match self {
            Label::Number(n) => n,
            Label::Letter(c) => letter_ordinal(c),
        }
    }
}

/// `A`/`a` is 1, `B`/`b` is 2, ...
fn letter_ordinal(c: char) -> u32 {
    (c.to_ascii_uppercase() as u32).saturating_sub('A' as u32) + 1
}

/// 1 is `A`, 2 is `B`, ... up to 26.
pub(crate) fn ordinal_letter(n: u32) -> Option<char> {
    if (1..=26).contains(&n) {
        char::from_u32('A' as u32 + n - 1)
    } else {
        None
    }
}

/// The [`LabelStyle`] of a labeled line, `None` if it carries no label.
///
/// ```
/// use quiz_text::parser::classify::{label_style, LabelStyle, Separator};
///
/// assert_eq!(
///     label_style("B) Second"),
///     Some(LabelStyle { separator: Separator::Close, uppercase: true })
/// );
/// assert_eq!(label_style("Questão 2: Second"), None);
/// ```
pub fn label_style(line: &str) -> Option<LabelStyle> {
    split_label(line).map(|labeled| labeled.style)
}

/// Split `1. text`, `b) text`, `(c) text`, `[4] text`, `5 - text`.
///
/// A letter followed by `.` or `-` needs whitespace before the text, so
/// that `E-mail is...` or `U.S. troops...` stay plain text. A number
/// followed directly by `.` and a digit is a decimal, not a label.
fn split_label(line: &str) -> Option<Labeled<'_>> {
    let re = compile!(
        r"^(?P<open>[\[({])?(?P<label>\d{1,3}|[A-Za-z])\s*(?P<sep>[.\-–—)\]}])(?P<gap>\s*)(?P<text>.*)$"
    );
    let caps = re.captures(line)?;
    let label_str = caps.name("label")?.as_str();
    let sep = caps.name("sep")?.as_str();
    let gap = caps.name("gap")?.as_str();
    let text = caps.name("text")?.as_str();

    let separator = if caps.name("open").is_some() {
        Separator::Enclosed
    } else {
        match sep {
            "." => Separator::Dot,
            "-" | "–" | "—" => Separator::Dash,
            _ => Separator::Close,
        }
    };

    let label = match label_str.parse::<u32>() {
        Ok(n) => {
            if sep == "." && gap.is_empty() && text.starts_with(|c: char| c.is_ascii_digit()) {
                return None;
            }
            Label::Number(n)
        }
        Err(_) => {
            let letter = label_str.chars().next()?;
            if matches!(sep, "." | "-" | "–" | "—") && gap.is_empty() && !text.is_empty() {
                return None;
            }
            Label::Letter(letter)
        }
    };
    let uppercase = matches!(label, Label::Letter(c) if c.is_ascii_uppercase());
    Some(Labeled {
        label,
        style: LabelStyle {
            separator,
            uppercase,
        },
        text,
    })
}

fn match_keyword_question(line: &str, _ctx: Option<&QuestionContext>) -> Option<LineRole> {
    let re = compile!(
        r"(?i)^(?:question|questão|questao|pergunta)\s*(?P<number>\d+)\s*(?:[:.\-–—)]\s*(?P<text>.*))?$"
    );
    let caps = re.captures(line)?;
    let number = caps.name("number")?.as_str().parse().ok()?;
    let text = caps.name("text").map(|m| m.as_str()).unwrap_or_default();
    Some(LineRole::QuestionStart {
        number,
        scheme: Scheme::Numeric,
        text: text.to_string(),
    })
}

fn match_labeled_question(line: &str, ctx: Option<&QuestionContext>) -> Option<LineRole> {
    let labeled = split_label(line)?;

    if let Some(q) = ctx {
        if !continues_numbering(q, &labeled) {
            return None;
        }
    }

    Some(LineRole::QuestionStart {
        number: labeled.label.ordinal(),
        scheme: labeled.label.scheme(),
        text: labeled.text.to_string(),
    })
}

/// Whether a labeled line can start the question after `q`.
///
/// It must use the question's own numbering. If the options are numbered
/// the other way, that is enough for numbers; letters must be the very
/// next one or a restart at `A`, since they collide with Roman numerals.
/// Otherwise it must come after the open question.
///
/// When questions and options share a numbering, a line written like the
/// question's label starts a question and one written like the options'
/// labels is an option. If the two are written alike, the next ordinal of
/// the option list is an option.
fn continues_numbering(q: &QuestionContext, labeled: &Labeled<'_>) -> bool {
    let scheme = labeled.label.scheme();
    let ordinal = labeled.label.ordinal();
    if scheme != q.scheme {
        return false;
    }

    let options_differ = q.option_scheme.is_some_and(|s| s != scheme);
    let follows = match scheme {
        Scheme::Numeric => options_differ || ordinal > q.number,
        Scheme::Alphabetic => ordinal == q.number + 1 || (options_differ && ordinal == 1),
    };
    if !follows {
        return false;
    }
    if q.option_scheme != Some(scheme) {
        return true;
    }

    match (q.style, q.option_style) {
        (Some(question), Some(option)) if question != option && labeled.style == question => true,
        (Some(question), Some(option)) if question != option && labeled.style == option => false,
        _ => ordinal as usize != q.option_count + 1,
    }
}

fn match_statement(line: &str, ctx: Option<&QuestionContext>) -> Option<LineRole> {
    ctx?;
    let re = compile!(
        r"^(?P<numeral>X|IX|VIII|VII|VI|V|IV|III|II|I)\s*[.\-–—)\]}:]\s*(?P<text>\S.*)$"
    );
    let caps = re.captures(line)?;
    Some(LineRole::Statement {
        numeral: caps.name("numeral")?.as_str().to_string(),
        text: caps.name("text")?.as_str().to_string(),
    })
}

fn match_labeled_option(line: &str, ctx: Option<&QuestionContext>) -> Option<LineRole> {
    let q = ctx?;
    let labeled = split_label(line)?;
    let label = match labeled.label {
        Label::Letter(c) => c.to_ascii_uppercase(),
        Label::Number(n) => ordinal_letter(n).unwrap_or(q.next_label),
    };
    let (text, marked) = strip_marker(labeled.text);
    Some(LineRole::OptionStart {
        label,
        scheme: Some(labeled.label.scheme()),
        text: text.to_string(),
        marked,
    })
}

fn match_bullet_option(line: &str, ctx: Option<&QuestionContext>) -> Option<LineRole> {
    let q = ctx?;
    let re = compile!(r"^[-*•·▪◦]\s+(?P<text>\S.*)$");
    let caps = re.captures(line)?;
    let (text, marked) = strip_marker(caps.name("text")?.as_str());
    Some(LineRole::OptionStart {
        label: q.next_label,
        scheme: None,
        text: text.to_string(),
        marked,
    })
}

fn match_marked_option(line: &str, ctx: Option<&QuestionContext>) -> Option<LineRole> {
    let q = ctx?;
    let (text, marked) = strip_marker(line);
    if !marked || text.is_empty() {
        return None;
    }
    Some(LineRole::OptionStart {
        label: q.next_label,
        scheme: None,
        text: text.to_string(),
        marked: true,
    })
}

fn match_continuation(line: &str, ctx: Option<&QuestionContext>) -> Option<LineRole> {
    ctx?;
    Some(LineRole::Continuation {
        text: line.to_string(),
    })
}
