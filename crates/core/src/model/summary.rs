use chrono::{DateTime, Duration, Utc};
use thiserror::Error;

use crate::model::SkillId;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizSummaryError {
    #[error("completed_at is before started_at")]
    InvalidTimeRange,

    #[error("summary needs at least one question")]
    EmptyQuiz,

    #[error("score ({score}) exceeds question count ({total})")]
    ScoreExceedsTotal { score: u32, total: u32 },

    #[error("too many questions for a single quiz: {len}")]
    TooManyQuestions { len: usize },
}

/// Aggregate result of a completed quiz attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSummary {
    skill_id: SkillId,
    score: u32,
    total_questions: u32,
    started_at: DateTime<Utc>,
    completed_at: DateTime<Utc>,
}

impl QuizSummary {
    /// Builds a summary for a finished attempt.
    ///
    /// # Errors
    ///
    /// Returns `QuizSummaryError::InvalidTimeRange` if `completed_at` is
    /// before `started_at`, `QuizSummaryError::EmptyQuiz` for a zero-question
    /// attempt, `QuizSummaryError::ScoreExceedsTotal` if the score cannot have
    /// come from this many questions, and `QuizSummaryError::TooManyQuestions`
    /// if the question count cannot fit in `u32`.
    pub fn new(
        skill_id: SkillId,
        score: u32,
        total_questions: usize,
        started_at: DateTime<Utc>,
        completed_at: DateTime<Utc>,
    ) -> Result<Self, QuizSummaryError> {
        if completed_at < started_at {
            return Err(QuizSummaryError::InvalidTimeRange);
        }
        let total = u32::try_from(total_questions)
            .map_err(|_| QuizSummaryError::TooManyQuestions {
                len: total_questions,
            })?;
        if total == 0 {
            return Err(QuizSummaryError::EmptyQuiz);
        }
        if score > total {
            return Err(QuizSummaryError::ScoreExceedsTotal { score, total });
        }

        Ok(Self {
            skill_id,
            score,
            total_questions: total,
            started_at,
            completed_at,
        })
    }

    #[must_use]
    pub fn skill_id(&self) -> &SkillId {
        &self.skill_id
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn total_questions(&self) -> u32 {
        self.total_questions
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> DateTime<Utc> {
        self.completed_at
    }

    /// Fraction of correct answers as a percentage in `[0, 100]`.
    #[must_use]
    pub fn percentage(&self) -> f64 {
        f64::from(self.score) / f64::from(self.total_questions) * 100.0
    }

    #[must_use]
    pub fn is_perfect(&self) -> bool {
        self.score == self.total_questions
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        self.completed_at - self.started_at
    }
}
