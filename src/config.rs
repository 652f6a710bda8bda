//! Parser configuration.
//!
//! [`ParserConfig`] carries the question limit, an optional separately
//! supplied answer key, metadata overrides and an optional event handler.

use std::sync::Arc;

use crate::error::{QuizError, Result};
use crate::events::EventHandler;

/// Hard upper bound on the number of questions a parse can yield.
pub const MAX_QUESTIONS: usize = 20;

/// Configuration for a [`QuizParser`](crate::parser::QuizParser).
///
/// # Example
///
/// ```
/// use quiz_text::ParserConfig;
///
/// let config = ParserConfig::default()
///     .with_max_questions(10)
///     .with_answer_key("1-C, 2-A")
///     .with_category("Geography");
/// assert_eq!(config.effective_max_questions(), 10);
/// ```
#[derive(Clone)]
pub struct ParserConfig {
    /// Maximum number of questions kept, clamped to [`MAX_QUESTIONS`].
    pub max_questions: usize,

    /// Answer key supplied apart from the text, e.g. `"1-A, 2-B"`.
    /// Its entries override any key found in the text.
    pub answer_key: Option<String>,

    /// Quiz title. Default: `"Quiz"`.
    pub title: Option<String>,

    /// Quiz description. Default mentions the question count.
    pub description: Option<String>,

    /// Quiz category. Default: `"General"`.
    pub category: Option<String>,

    /// Optional observer for parse events.
    pub event_handler: Option<Arc<dyn EventHandler>>,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_questions: MAX_QUESTIONS,
            answer_key: None,
            title: None,
            description: None,
            category: None,
            event_handler: None,
        }
    }
}

impl ParserConfig {
    pub fn with_max_questions(mut self, max: usize) -> Self {
        self.max_questions = max;
        self
    }

    pub fn with_answer_key(mut self, key: impl Into<String>) -> Self {
        self.answer_key = Some(key.into());
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_event_handler(mut self, handler: Arc<dyn EventHandler>) -> Self {
        self.event_handler = Some(handler);
        self
    }

    /// The question limit actually applied.
    pub fn effective_max_questions(&self) -> usize {
        self.max_questions.min(MAX_QUESTIONS)
    }

    /// Reject configurations that can never produce a quiz.
    pub fn validate(&self) -> Result<()> {
        if self.max_questions == 0 {
            return Err(QuizError::InvalidConfig(
                "max_questions must be at least 1".to_string(),
            ));
        }
        if let Some(ref key) = self.answer_key {
            if !key.trim().is_empty() && !key.chars().any(|c| c.is_ascii_digit()) {
                return Err(QuizError::InvalidConfig(format!(
                    "answer key has no question numbers: {}",
                    key
                )));
            }
        }
        Ok(())
    }
}

impl std::fmt::Debug for ParserConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParserConfig")
            .field("max_questions", &self.max_questions)
            .field("answer_key", &self.answer_key)
            .field("title", &self.title)
            .field("description", &self.description)
            .field("category", &self.category)
            .field("has_event_handler", &self.event_handler.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let config = ParserConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.effective_max_questions(), 20);
    }

    #[test]
    fn max_questions_is_clamped() {
        let config = ParserConfig::default().with_max_questions(50);
        assert_eq!(config.effective_max_questions(), MAX_QUESTIONS);
    }

    #[test]
    fn zero_questions_rejected() {
        let err = ParserConfig::default()
            .with_max_questions(0)
            .validate()
            .unwrap_err();
        assert!(matches!(err, QuizError::InvalidConfig(_)));
    }

    #[test]
    fn answer_key_without_numbers_rejected() {
        let config = ParserConfig::default().with_answer_key("A B C");
        assert!(config.validate().is_err());
    }

    #[test]
    fn blank_answer_key_accepted() {
        let config = ParserConfig::default().with_answer_key("   ");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn debug_hides_handler() {
        let text = format!("{:?}", ParserConfig::default());
        assert!(text.contains("has_event_handler: false"));
    }
}
