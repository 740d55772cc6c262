use thiserror::Error;

use crate::model::{BadgeError, QuestionError, QuizSettingsError, QuizSummaryError, SkillError};
use crate::session::QuizSessionError;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Question(#[from] QuestionError),
    #[error(transparent)]
    Skill(#[from] SkillError),
    #[error(transparent)]
    Badge(#[from] BadgeError),
    #[error(transparent)]
    Settings(#[from] QuizSettingsError),
    #[error(transparent)]
    Session(#[from] QuizSessionError),
    #[error(transparent)]
    Summary(#[from] QuizSummaryError),
}
