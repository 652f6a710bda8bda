use thiserror::Error;

/// Errors produced by the quiz parser and its exporters.
///
/// Malformed quiz text is never an error: the parser always returns a
/// best-effort structure and reports quality problems through
/// [`validate_quiz`](crate::validate::validate_quiz).
#[derive(Error, Debug)]
pub enum QuizError {
    /// Invalid configuration detected at build time.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// JSON export failed at the serde level.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML export failed at the serde level.
    #[cfg(feature = "yaml")]
    #[error("YAML serialization failed: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Catch-all for other errors.
    #[error("{0}")]
    Other(String),
}

impl From<anyhow::Error> for QuizError {
    fn from(err: anyhow::Error) -> Self {
        QuizError::Other(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, QuizError>;
