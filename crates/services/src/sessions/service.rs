use std::sync::Arc;

use catalog::{BadgeCatalog, QuestionCatalog};
use quiz_core::Clock;
use quiz_core::model::{Badge, QuizSettings, QuizSummary, SkillId};
use quiz_core::session::QuizSession;

use crate::error::SessionError;

//
// ─── QUIZ SERVICE ──────────────────────────────────────────────────────────────
//

/// Starts quiz sessions from the catalogs and finalizes completed attempts.
///
/// Catalogs are injected so sessions stay testable with fabricated data; the
/// clock keeps summary timestamps deterministic in tests.
#[derive(Clone)]
pub struct QuizService {
    clock: Clock,
    questions: Arc<dyn QuestionCatalog>,
    badges: Arc<dyn BadgeCatalog>,
    settings: QuizSettings,
}

impl QuizService {
    #[must_use]
    pub fn new(
        clock: Clock,
        questions: Arc<dyn QuestionCatalog>,
        badges: Arc<dyn BadgeCatalog>,
    ) -> Self {
        Self {
            clock,
            questions,
            badges,
            settings: QuizSettings::default(),
        }
    }

    #[must_use]
    pub fn with_settings(mut self, settings: QuizSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Start a new session for the given skill.
    ///
    /// An unknown `skill_id` degrades to the catalog's default question set;
    /// the learner never sees the miss.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NoQuestions` only when the fallback set is
    /// missing too.
    pub fn start(
        &self,
        skill_id: SkillId,
        skill_name: impl Into<String>,
    ) -> Result<QuizSession, SessionError> {
        let questions = match self.questions.questions_for(&skill_id) {
            Some(questions) => questions,
            None => {
                let fallback = self.questions.default_skill();
                log::debug!("no question set for `{skill_id}`, falling back to `{fallback}`");
                self.questions
                    .questions_for(&fallback)
                    .ok_or_else(|| SessionError::NoQuestions {
                        skill: skill_id.clone(),
                    })?
            }
        };

        let session = QuizSession::new(
            skill_id,
            skill_name,
            questions,
            self.badges.badges(),
            self.settings,
            self.clock.now(),
        )?;
        log::info!(
            "quiz session started: skill={} questions={}",
            session.skill_id(),
            session.total_questions()
        );
        Ok(session)
    }

    /// Build the summary for a finished attempt, stamped with the service
    /// clock.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotComplete` if the session has questions left.
    pub fn summarize(&self, session: &QuizSession) -> Result<QuizSummary, SessionError> {
        if !session.is_complete() {
            return Err(SessionError::NotComplete);
        }

        Ok(QuizSummary::new(
            session.skill_id().clone(),
            session.score(),
            session.total_questions(),
            session.started_at(),
            self.clock.now(),
        )?)
    }

    /// Resolve a completed session's earned badge ids against the badge
    /// catalog, preserving grant order.
    #[must_use]
    pub fn earned_badges(&self, session: &QuizSession) -> Vec<Badge> {
        session
            .earned_badges()
            .iter()
            .filter_map(|id| self.badges.badge(id))
            .collect()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
