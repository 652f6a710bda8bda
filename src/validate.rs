//! Validation of a parsed quiz.
//!
//! [`validate_quiz`] re-checks a finished [`ParsedQuiz`] independently of
//! the parser and reports every problem as a message meant to be shown to
//! the user as-is. It never fails; `is_valid` gates whether the quiz may
//! be stored.

use std::collections::HashSet;

use crate::types::{ParsedQuiz, ValidationResult};

/// Check `quiz` and collect one message per problem.
///
/// Questions are referred to by their 1-based position.
///
/// # Examples
///
/// ```
/// use quiz_text::{parse_quiz, validate_quiz};
///
/// let result = validate_quiz(&parse_quiz("1. Q?\nA) Only option"));
/// assert!(!result.is_valid);
/// assert_eq!(result.errors, vec!["Question 1 must have at least 2 options"]);
/// ```
pub fn validate_quiz(quiz: &ParsedQuiz) -> ValidationResult {
    let mut errors = Vec::new();

    if quiz.questions.is_empty() {
        errors.push("No questions were detected in the text".to_string());
    }

    for (index, question) in quiz.questions.iter().enumerate() {
        let n = index + 1;

        if question.text.trim().is_empty() {
            errors.push(format!("Question {} is empty", n));
        }

        if question.options.len() < 2 {
            errors.push(format!("Question {} must have at least 2 options", n));
        }

        if question.correct_count() != 1 {
            errors.push(format!("Question {} must have exactly 1 correct option", n));
        }

        let mut labels = HashSet::new();
        let mut reported = HashSet::new();
        for option in &question.options {
            if option.text.trim().is_empty() {
                errors.push(format!("Option {} of question {} is empty", option.label, n));
            }
            if !labels.insert(option.label) && reported.insert(option.label) {
                errors.push(format!(
                    "Question {} has duplicate option label {}",
                    n, option.label
                ));
            }
        }
    }

    ValidationResult::from_errors(errors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AnswerOption, ParsedQuestion};

    fn quiz(questions: Vec<ParsedQuestion>) -> ParsedQuiz {
        ParsedQuiz {
            title: "Quiz".into(),
            description: String::new(),
            category: "General".into(),
            questions,
        }
    }

    fn question(text: &str, options: Vec<AnswerOption>) -> ParsedQuestion {
        ParsedQuestion {
            text: text.into(),
            statements: vec![],
            options,
            order: 1,
        }
    }

    #[test]
    fn valid_quiz() {
        let q = question(
            "Q?",
            vec![AnswerOption::new('A', "x").correct(), AnswerOption::new('B', "y")],
        );
        let result = validate_quiz(&quiz(vec![q]));
        assert!(result.is_valid);
        assert!(result.errors.is_empty());
    }

    #[test]
    fn no_questions() {
        let result = validate_quiz(&quiz(vec![]));
        assert!(!result.is_valid);
        assert_eq!(result.errors, vec!["No questions were detected in the text"]);
    }

    #[test]
    fn empty_question_text() {
        let q = question(
            "  ",
            vec![AnswerOption::new('A', "x").correct(), AnswerOption::new('B', "y")],
        );
        let result = validate_quiz(&quiz(vec![q]));
        assert_eq!(result.errors, vec!["Question 1 is empty"]);
    }

    #[test]
    fn no_correct_option_flagged_before_normalization() {
        let ok = question(
            "Q1",
            vec![AnswerOption::new('A', "x").correct(), AnswerOption::new('B', "y")],
        );
        let bad = question("Q2", vec![AnswerOption::new('A', "x"), AnswerOption::new('B', "y")]);
        let result = validate_quiz(&quiz(vec![ok, bad]));
        assert_eq!(result.errors, vec!["Question 2 must have exactly 1 correct option"]);
    }

    #[test]
    fn two_correct_options_flagged() {
        let q = question(
            "Q",
            vec![AnswerOption::new('A', "x").correct(), AnswerOption::new('B', "y").correct()],
        );
        let result = validate_quiz(&quiz(vec![q]));
        assert_eq!(result.errors, vec!["Question 1 must have exactly 1 correct option"]);
    }

    #[test]
    fn empty_option_text() {
        let q = question(
            "Q",
            vec![AnswerOption::new('A', "x").correct(), AnswerOption::new('B', "")],
        );
        let result = validate_quiz(&quiz(vec![q]));
        assert_eq!(result.errors, vec!["Option B of question 1 is empty"]);
    }

    #[test]
    fn duplicate_label_reported_once() {
        let q = question(
            "Q",
            vec![
                AnswerOption::new('A', "x").correct(),
                AnswerOption::new('A', "y"),
                AnswerOption::new('A', "z"),
            ],
        );
        let result = validate_quiz(&quiz(vec![q]));
        assert_eq!(result.errors, vec!["Question 1 has duplicate option label A"]);
    }

    #[test]
    fn question_without_options_collects_every_error() {
        let q = question("", vec![]);
        let result = validate_quiz(&quiz(vec![q]));
        assert_eq!(
            result.errors,
            vec![
                "Question 1 is empty",
                "Question 1 must have at least 2 options",
                "Question 1 must have exactly 1 correct option",
            ]
        );
    }
}
