use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::Result;

/// A single answer choice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOption {
    /// Uppercase letter, taken from the source line or synthesized.
    pub label: char,

    /// Option text with label and correctness marker removed.
    pub text: String,

    /// Whether this is the correct answer.
    pub is_correct: bool,
}

impl AnswerOption {
    pub fn new(label: char, text: impl Into<String>) -> Self {
        Self {
            label,
            text: text.into(),
            is_correct: false,
        }
    }

    pub fn correct(mut self) -> Self {
        self.is_correct = true;
        self
    }
}

/// A Roman-numeral assertion shown under a question. Never scored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statement {
    /// The numeral as written, e.g. `"II"`.
    pub numeral: String,

    /// The assertion text.
    pub text: String,
}

/// One question of a parsed quiz.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedQuestion {
    /// Question text, continuation lines joined with a space.
    pub text: String,

    /// Statements in source order (possibly empty).
    pub statements: Vec<Statement>,

    /// Options in source order.
    pub options: Vec<AnswerOption>,

    /// 1-based position in the quiz.
    pub order: usize,
}

impl ParsedQuestion {
    /// The correct option, if exactly one is marked.
    pub fn correct_option(&self) -> Option<&AnswerOption> {
        let mut correct = self.options.iter().filter(|o| o.is_correct);
        match (correct.next(), correct.next()) {
            (Some(only), None) => Some(only),
            _ => None,
        }
    }

    pub fn correct_count(&self) -> usize {
        self.options.iter().filter(|o| o.is_correct).count()
    }
}

/// The complete result of parsing a block of quiz text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedQuiz {
    pub title: String,
    pub description: String,
    pub category: String,

    /// Questions in source order, capped at the configured maximum.
    pub questions: Vec<ParsedQuestion>,
}

impl ParsedQuiz {
    /// Serialize to compact JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serialize to indented JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Serialize to YAML.
    #[cfg(feature = "yaml")]
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}

/// Outcome of [`validate_quiz`](crate::validate::validate_quiz).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// `true` when `errors` is empty.
    pub is_valid: bool,

    /// Human-readable messages, meant to be shown verbatim.
    pub errors: Vec<String>,
}

impl ValidationResult {
    pub fn from_errors(errors: Vec<String>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }
}

impl fmt::Display for ParsedQuestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}. {}", self.order, self.text)?;
        for statement in &self.statements {
            writeln!(f, "   {}. {}", statement.numeral, statement.text)?;
        }
        for option in &self.options {
            write!(f, "   {}) {}", option.label, option.text)?;
            if option.is_correct {
                write!(f, " ✓")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Display for ParsedQuiz {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} [{}]", self.title, self.category)?;
        writeln!(f, "{}", self.description)?;
        for question in &self.questions {
            writeln!(f)?;
            write!(f, "{}", question)?;
        }
        Ok(())
    }
}
