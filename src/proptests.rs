//! Property tests over generated quiz text.

use proptest::prelude::*;

use crate::{normalize_quiz, parse_quiz, validate_quiz};

/// How questions and their options are labeled in one generated quiz.
#[derive(Debug, Clone, Copy)]
enum Layout {
    /// `1.` questions, `a)` / `a.` / `a -` options.
    NumberLetter(&'static str),
    /// `1.` questions, `1)` options.
    NumberDotNumberParen,
    /// `1 -` questions, `1)` options.
    NumberDashNumberParen,
    /// `A)` questions, `a)` options.
    UpperLetterLowerLetter,
    /// `A.` questions, `1)` options.
    LetterNumber,
}

impl Layout {
    fn question_label(self, number: usize) -> String {
        match self {
            Layout::NumberLetter(_) | Layout::NumberDotNumberParen => format!("{}.", number),
            Layout::NumberDashNumberParen => format!("{} -", number),
            Layout::UpperLetterLowerLetter => format!("{})", letter(number)),
            Layout::LetterNumber => format!("{}.", letter(number)),
        }
    }

    fn option_label(self, index: usize) -> String {
        match self {
            Layout::NumberLetter(sep) => format!("{}{}", letter(index + 1).to_ascii_lowercase(), sep),
            Layout::NumberDotNumberParen | Layout::NumberDashNumberParen | Layout::LetterNumber => {
                format!("{})", index + 1)
            }
            Layout::UpperLetterLowerLetter => format!("{})", letter(index + 1).to_ascii_lowercase()),
        }
    }
}

/// 1 is `A`.
fn letter(n: usize) -> char {
    char::from(b'A' + (n - 1) as u8)
}

fn layout() -> impl Strategy<Value = Layout> {
    prop_oneof![
        prop::sample::select(vec![")", ".", " -"]).prop_map(Layout::NumberLetter),
        Just(Layout::NumberDotNumberParen),
        Just(Layout::NumberDashNumberParen),
        Just(Layout::UpperLetterLowerLetter),
        Just(Layout::LetterNumber),
    ]
}

/// One well-formed question: text, two to five options, maybe a marker.
fn question_block(layout: Layout, number: usize) -> impl Strategy<Value = String> {
    (
        "[A-Za-z][a-z ]{0,20}\\?",
        prop::collection::vec("[a-z][a-z ]{0,12}", 2..=5),
        prop::option::of(0usize..5),
    )
        .prop_map(move |(text, options, marked)| {
            let mut block = format!("{} {}\n", layout.question_label(number), text);
            for (i, option) in options.iter().enumerate() {
                let marker = if marked == Some(i) { " *" } else { "" };
                block.push_str(&format!("{} {}{}\n", layout.option_label(i), option.trim_end(), marker));
            }
            block
        })
}

/// Generated quiz text and the number of questions in it.
fn quiz_text() -> impl Strategy<Value = (String, usize)> {
    (layout(), 1usize..8).prop_flat_map(|(layout, count)| {
        (1..=count)
            .map(|number| question_block(layout, number))
            .collect::<Vec<_>>()
            .prop_map(move |blocks| (blocks.concat(), count))
    })
}

proptest! {
    #[test]
    fn every_question_has_exactly_one_correct((raw, _) in quiz_text()) {
        let quiz = parse_quiz(&raw);
        for question in &quiz.questions {
            prop_assert!(!question.options.is_empty());
            prop_assert_eq!(question.correct_count(), 1);
        }
    }

    #[test]
    fn generated_quizzes_are_fully_recovered((raw, expected) in quiz_text()) {
        let quiz = parse_quiz(&raw);
        prop_assert_eq!(quiz.questions.len(), expected);
        prop_assert!(validate_quiz(&quiz).is_valid);
    }

    #[test]
    fn normalization_is_idempotent((raw, _) in quiz_text()) {
        let mut quiz = parse_quiz(&raw);
        let before = quiz.clone();
        let reports = normalize_quiz(&mut quiz);
        prop_assert!(reports.iter().all(|r| !r.changed()));
        prop_assert_eq!(quiz, before);
    }

    #[test]
    fn arbitrary_text_never_panics(raw in "\\PC{0,200}") {
        let quiz = parse_quiz(&raw);
        prop_assert!(quiz.questions.len() <= crate::MAX_QUESTIONS);
        let _ = validate_quiz(&quiz);
    }
}
