//! # Quiz Text
//!
//! Turns pasted study text into a structured multiple-choice quiz.
//!
//! This crate provides the parsing core of a quiz import flow: it takes
//! the raw text a user pasted (numbered or lettered questions, lettered or
//! numbered options, Roman-numeral statements, an optional answer key) and
//! returns ordered questions, each with ordered options and exactly one
//! correct option. A separate validation pass decides whether the result
//! is good enough to store.
//!
//! Storage, uploads and UI belong to the caller. Parsing is a pure,
//! synchronous function of its input and configuration.
//!
//! ## Core Concepts
//!
//! - **[`parse_quiz`]** / **[`QuizParser`]** -- text in, [`ParsedQuiz`] out.
//!   Never fails on malformed input.
//! - **[`validate_quiz`]** -- [`ParsedQuiz`] in, [`ValidationResult`] out,
//!   with human-readable messages.
//! - **[`ParserConfig`]** -- question limit, separate answer key, metadata
//!   and an optional [`EventHandler`](events::EventHandler).
//! - **[`ParseDiagnostics`]** -- what was ignored, dropped or guessed.
//!
//! ## Quick Start
//!
//! ```
//! use quiz_text::{parse_quiz, validate_quiz};
//!
//! let raw = "1. Capital of Brazil?\nA) Rio\nB) São Paulo\nC) Brasília\nD) Salvador\n\nGabarito: 1-C";
//!
//! let quiz = parse_quiz(raw);
//! let validation = validate_quiz(&quiz);
//! assert!(validation.is_valid, "{:?}", validation.errors);
//!
//! let question = &quiz.questions[0];
//! assert_eq!(question.options.len(), 4);
//! assert_eq!(question.correct_option().unwrap().text, "Brasília");
//! ```
//!
//! ## Configured Parser
//!
//! ```
//! use quiz_text::{ParserConfig, QuizParser};
//!
//! let parser = QuizParser::new(
//!     ParserConfig::default()
//!         .with_max_questions(5)
//!         .with_answer_key("1-B")
//!         .with_category("Math"),
//! )?;
//!
//! let (quiz, diagnostics) = parser.parse_with_diagnostics("1. 2 + 2?\na) 3\nb) 4");
//! assert_eq!(quiz.category, "Math");
//! assert!(diagnostics.fallback_corrections.is_empty());
//! # Ok::<(), quiz_text::QuizError>(())
//! ```

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod events;
pub mod parser;
pub mod types;
pub mod validate;

pub use config::{ParserConfig, MAX_QUESTIONS};
pub use diagnostics::ParseDiagnostics;
pub use error::{QuizError, Result};
pub use events::{EventHandler, FnEventHandler, ParseEvent};
pub use parser::correctness::normalize_quiz;
pub use parser::{parse_and_validate, parse_quiz, QuizParser};
pub use types::{AnswerOption, ParsedQuestion, ParsedQuiz, Statement, ValidationResult};
pub use validate::validate_quiz;

#[cfg(test)]
mod proptests;
