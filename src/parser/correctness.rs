//! Correctness resolution and normalization.
//!
//! [`resolve_question`] decides each option's correctness. Inline markers
//! take precedence: when any option of a question carries one, the answer
//! key is not consulted for that question. Otherwise an option is correct
//! when the answer key names its label for the question's number.
//!
//! [`normalize_question`] then enforces the quiz invariants:
//! true/false questions keep only their first two options, and every
//! question with options ends with exactly one correct option (the first
//! marked one, or the first option when none is marked).

use crate::parser::answer_key::AnswerKeyMap;
use crate::parser::assembler::AssembledQuestion;
use crate::types::{AnswerOption, ParsedQuestion, ParsedQuiz};

/// Option texts that identify a true/false question.
const TRUE_FALSE_WORDS: &[&str] = &[
    "verdadeiro",
    "falso",
    "true",
    "false",
    "certo",
    "errado",
    "correto",
    "incorreto",
    "v",
    "f",
];

/// Turn an assembled question into a [`ParsedQuestion`] with correctness
/// decided. `order` is its 1-based position in the output.
pub fn resolve_question(
    question: AssembledQuestion,
    key: &AnswerKeyMap,
    order: usize,
) -> ParsedQuestion {
    let expected = if question.options.iter().any(|o| o.marked) {
        None
    } else {
        key.get(&question.number).copied()
    };
    let options = question
        .options
        .into_iter()
        .map(|draft| AnswerOption {
            is_correct: draft.marked || expected == Some(draft.label),
            label: draft.label,
            text: draft.text,
        })
        .collect();

    ParsedQuestion {
        text: question.text,
        statements: question.statements,
        options,
        order,
    }
}

/// What [`normalize_question`] changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Normalization {
    /// No option was correct, so the first one was marked.
    pub fallback_applied: bool,
    /// Correct flags cleared because another option came first.
    pub cleared: usize,
    /// Options removed from a true/false question.
    pub dropped_options: usize,
}

impl Normalization {
    pub fn changed(&self) -> bool {
        self.fallback_applied || self.cleared > 0 || self.dropped_options > 0
    }
}

/// Whether `question` looks like a true/false question.
///
/// Any two-option question counts. [`normalize_question`] only truncates
/// questions with more than two options, so that arm only matters to
/// callers asking the question directly.
pub fn is_true_false(question: &ParsedQuestion) -> bool {
    question.options.len() == 2
        || question.options.iter().any(|o| {
            let word = o.text.trim().trim_end_matches('.').to_lowercase();
            TRUE_FALSE_WORDS.contains(&word.as_str())
        })
}

/// Enforce the single-correct-option invariant on one question.
///
/// Idempotent: a second call changes nothing.
pub fn normalize_question(question: &mut ParsedQuestion) -> Normalization {
    let mut report = Normalization::default();

    if is_true_false(question) && question.options.len() > 2 {
        report.dropped_options = question.options.len() - 2;
        question.options.truncate(2);
    }

    let mut seen_correct = false;
    for option in question.options.iter_mut() {
        if option.is_correct {
            if seen_correct {
                option.is_correct = false;
                report.cleared += 1;
            }
            seen_correct = true;
        }
    }

    if !seen_correct {
        if let Some(first) = question.options.first_mut() {
            first.is_correct = true;
            report.fallback_applied = true;
        }
    }

    report
}

/// Normalize every question of `quiz`, returning one report per question.
pub fn normalize_quiz(quiz: &mut ParsedQuiz) -> Vec<Normalization> {
    quiz.questions.iter_mut().map(normalize_question).collect()
}
