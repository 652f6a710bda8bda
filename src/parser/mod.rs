//! # Quiz Text Parser
//!
//! Turns pasted study text into a [`ParsedQuiz`]. Parsing never fails:
//! every line is classified on a best-effort basis and quality problems
//! are left for [`validate_quiz`](crate::validate::validate_quiz).
//!
//! ## Stages
//!
//! | Stage | Module |
//! |-------|--------|
//! | Split and normalize lines | [`lines`] |
//! | Pull out answer key lines | [`answer_key`] |
//! | Classify each line | [`classify`], [`markers`] |
//! | Assemble questions | [`assembler`] |
//! | Resolve and normalize correctness | [`correctness`] |
//!
//! ## Accepted input
//!
//! ```text
//! 1. Capital of Brazil?
//! A) Rio
//! B) São Paulo
//! C) Brasília
//!
//! 2 - Consider the statements:
//! I. Water boils at 100 °C at sea level
//! II- Ice sinks in water
//! a. I only *
//! b. II only
//!
//! Gabarito: 1-C
//! ```

pub mod answer_key;
pub mod assembler;
pub mod classify;
pub mod correctness;
pub mod lines;
pub mod markers;
pub(crate) mod pattern;

use tracing::debug;

use crate::config::ParserConfig;
use crate::diagnostics::ParseDiagnostics;
use crate::error::Result;
use crate::events::{emit, ParseEvent};
use crate::types::{ParsedQuiz, ValidationResult};
use crate::validate::validate_quiz;

use answer_key::AnswerKeyMap;

/// Parser with a fixed configuration. Cheap to clone and share.
///
/// # Example
///
/// ```
/// use quiz_text::{ParserConfig, QuizParser};
///
/// let parser = QuizParser::new(ParserConfig::default().with_answer_key("1-B")).unwrap();
/// let quiz = parser.parse("1. Two plus two?\na) 3\nb) 4\nc) 5");
/// assert_eq!(quiz.questions[0].correct_option().unwrap().text, "4");
/// ```
#[derive(Debug, Clone, Default)]
pub struct QuizParser {
    config: ParserConfig,
}

impl QuizParser {
    /// Create a parser, rejecting invalid configuration.
    pub fn new(config: ParserConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parse `raw` into a quiz.
    pub fn parse(&self, raw: &str) -> ParsedQuiz {
        self.parse_with_diagnostics(raw).0
    }

    /// Parse `raw` and report what was dropped or guessed along the way.
    pub fn parse_with_diagnostics(&self, raw: &str) -> (ParsedQuiz, ParseDiagnostics) {
        let handler = &self.config.event_handler;
        let mut diag = ParseDiagnostics::default();

        let all_lines = lines::split_lines(raw);
        diag.lines_total = all_lines.len();

        let (key_lines, body): (Vec<&str>, Vec<&str>) = all_lines
            .iter()
            .map(String::as_str)
            .partition(|line| answer_key::is_answer_key_line(line));
        diag.answer_key_lines = key_lines.len();

        let key = self.answer_key(key_lines);
        diag.answer_key_entries = key.len();
        if !key.is_empty() {
            debug!(entries = key.len(), "answer key found");
            emit(handler, ParseEvent::AnswerKeyFound { entries: key.len() });
        }

        let assembly = assembler::assemble(body);
        diag.lines_ignored = assembly.ignored;
        diag.questions_assembled = assembly.questions.len();
        diag.questions_discarded = assembly.discarded.len();
        for discarded in &assembly.discarded {
            emit(
                handler,
                ParseEvent::QuestionDiscarded {
                    number: discarded.number,
                    reason: discarded.reason,
                },
            );
        }
        for question in &assembly.questions {
            emit(
                handler,
                ParseEvent::QuestionClosed {
                    number: question.number,
                    options: question.options.len(),
                    statements: question.statements.len(),
                },
            );
        }

        let cap = self.config.effective_max_questions();
        let assembled = assembly.questions.len();
        if assembled > cap {
            diag.questions_dropped_by_cap = assembled - cap;
            debug!(kept = cap, dropped = assembled - cap, "question limit reached");
            emit(
                handler,
                ParseEvent::CapReached {
                    kept: cap,
                    dropped: assembled - cap,
                },
            );
        }

        let mut questions = Vec::with_capacity(assembled.min(cap));
        for (index, draft) in assembly.questions.into_iter().take(cap).enumerate() {
            let order = index + 1;
            let mut question = correctness::resolve_question(draft, &key, order);
            let report = correctness::normalize_question(&mut question);
            if report.fallback_applied {
                debug!(order, "no correct option marked, using the first");
                diag.fallback_corrections.push(order);
                emit(handler, ParseEvent::CorrectnessFallback { order });
            }
            if report.dropped_options > 0 {
                diag.true_false_truncations += 1;
                emit(
                    handler,
                    ParseEvent::TrueFalseTruncated {
                        order,
                        dropped: report.dropped_options,
                    },
                );
            }
            questions.push(question);
        }

        let quiz = ParsedQuiz {
            title: self.config.title.clone().unwrap_or_else(|| "Quiz".to_string()),
            description: self.config.description.clone().unwrap_or_else(|| {
                format!(
                    "Quiz created automatically with {} question(s)",
                    questions.len()
                )
            }),
            category: self
                .config
                .category
                .clone()
                .unwrap_or_else(|| "General".to_string()),
            questions,
        };
        (quiz, diag)
    }

    /// Key lines from the text, then the separately configured key.
    fn answer_key(&self, key_lines: Vec<&str>) -> AnswerKeyMap {
        let mut key = answer_key::parse_answer_key(key_lines);
        if let Some(ref extra) = self.config.answer_key {
            answer_key::collect_pairs(extra, &mut key);
        }
        key
    }
}

/// Parse `raw` with the default configuration.
///
/// # Examples
///
/// ```
/// use quiz_text::parse_quiz;
///
/// let quiz = parse_quiz("1. Capital of Brazil?\nA) Rio\nB) Brasília *");
/// assert_eq!(quiz.questions.len(), 1);
/// assert_eq!(quiz.questions[0].correct_option().unwrap().label, 'B');
/// ```
pub fn parse_quiz(raw: &str) -> ParsedQuiz {
    QuizParser::default().parse(raw)
}

/// Parse with the default configuration and validate the result.
pub fn parse_and_validate(raw: &str) -> (ParsedQuiz, ValidationResult) {
    let quiz = parse_quiz(raw);
    let validation = validate_quiz(&quiz);
    (quiz, validation)
}
