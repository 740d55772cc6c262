//! Shared error types for the services crate.

use thiserror::Error;

use quiz_core::model::{QuizSummaryError, SkillId};
use quiz_core::session::QuizSessionError;

/// Errors emitted by session services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SessionError {
    /// Neither the requested skill nor the fallback skill has questions.
    #[error("no question set for `{skill}` or the default skill")]
    NoQuestions { skill: SkillId },

    /// A summary was requested before the session finished.
    #[error("session is not complete")]
    NotComplete,

    #[error(transparent)]
    Session(#[from] QuizSessionError),

    #[error(transparent)]
    Summary(#[from] QuizSummaryError),
}
