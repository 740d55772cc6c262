use chrono::{DateTime, Utc};
use std::fmt;
use thiserror::Error;

use crate::awards;
use crate::model::{Badge, BadgeId, Question, QuizSettings, SkillId};

//
// ─── EVENTS ────────────────────────────────────────────────────────────────────
//

/// Inputs to the session state machine.
///
/// All three arrive through one serialized queue: the periodic timer signal
/// and the discrete user intents. The machine is total: any event in any
/// state is defined, and invalid ones degrade to [`EventOutcome::Ignored`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizEvent {
    /// One second elapsed while the current question was unrevealed.
    Tick,
    /// The learner picked the option at this index.
    SelectAnswer(usize),
    /// The learner acknowledged the revealed answer and moved on.
    Advance,
}

/// What applying an event actually did.
///
/// Lets a presentation adapter react to transitions without diffing state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOutcome {
    /// The event was invalid in the current state; nothing changed.
    Ignored,
    /// The countdown lost one second.
    Ticked { remaining: u32 },
    /// The countdown hit zero; the question revealed with no credit.
    TimeExpired,
    /// An answer was locked in and the question revealed.
    Revealed { correct: bool },
    /// Moved on to the next question with a fresh countdown.
    Advanced,
    /// The final question was acknowledged; the session is complete.
    Completed,
}

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizSessionError {
    #[error("no questions available for session")]
    Empty,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// One quiz attempt for a skill: question sequencing, per-question countdown,
/// answer evaluation, scoring and badge grants at completion.
///
/// The machine performs no I/O and never blocks; time only advances when a
/// [`QuizEvent::Tick`] is delivered, so tests drive the countdown directly.
/// Question order is fixed for the session's lifetime and no question is
/// revisited.
pub struct QuizSession {
    skill_id: SkillId,
    skill_name: String,
    questions: Vec<Question>,
    badges: Vec<Badge>,
    settings: QuizSettings,
    current: usize,
    selected: Option<usize>,
    revealed: bool,
    score: u32,
    time_remaining: u32,
    complete: bool,
    earned_badges: Vec<BadgeId>,
    started_at: DateTime<Utc>,
}

impl QuizSession {
    /// Creates a session positioned at the first question with a full
    /// countdown.
    ///
    /// `badges` is the badge catalog in its fixed order, read at completion to
    /// grant awards. `started_at` should come from the services layer clock.
    ///
    /// # Errors
    ///
    /// Returns `QuizSessionError::Empty` if no questions are provided.
    pub fn new(
        skill_id: SkillId,
        skill_name: impl Into<String>,
        questions: Vec<Question>,
        badges: Vec<Badge>,
        settings: QuizSettings,
        started_at: DateTime<Utc>,
    ) -> Result<Self, QuizSessionError> {
        if questions.is_empty() {
            return Err(QuizSessionError::Empty);
        }

        Ok(Self {
            skill_id,
            skill_name: skill_name.into(),
            questions,
            badges,
            settings,
            current: 0,
            selected: None,
            revealed: false,
            score: 0,
            time_remaining: settings.seconds_per_question(),
            complete: false,
            earned_badges: Vec::new(),
            started_at,
        })
    }

    #[must_use]
    pub fn skill_id(&self) -> &SkillId {
        &self.skill_id
    }

    #[must_use]
    pub fn skill_name(&self) -> &str {
        &self.skill_name
    }

    #[must_use]
    pub fn settings(&self) -> QuizSettings {
        self.settings
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// The question currently on screen, or `None` once the session is
    /// complete.
    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current)
    }

    /// Zero-based index of the current question. Never decreases; equals
    /// `total_questions()` once the session is complete.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    /// The learner's selection for the current question, if any.
    #[must_use]
    pub fn selected_answer(&self) -> Option<usize> {
        self.selected
    }

    /// True once the current question's correctness has been shown, by
    /// selection or by timeout.
    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Seconds left on the current question's countdown.
    #[must_use]
    pub fn time_remaining(&self) -> u32 {
        self.time_remaining
    }

    /// True while the countdown should receive ticks.
    #[must_use]
    pub fn timer_active(&self) -> bool {
        !self.revealed && !self.complete
    }

    /// Count of correctly answered questions so far.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Badges granted at completion, in catalog order. Empty until the
    /// session is complete.
    #[must_use]
    pub fn earned_badges(&self) -> &[BadgeId] {
        &self.earned_badges
    }

    /// Applies one event from the serialized queue.
    pub fn apply(&mut self, event: QuizEvent) -> EventOutcome {
        match event {
            QuizEvent::Tick => self.tick(),
            QuizEvent::SelectAnswer(index) => self.select_answer(index),
            QuizEvent::Advance => self.advance(),
        }
    }

    /// One second elapsed. At zero the question reveals unanswered, which
    /// scores like a wrong answer.
    fn tick(&mut self) -> EventOutcome {
        if !self.timer_active() {
            return EventOutcome::Ignored;
        }

        self.time_remaining = self.time_remaining.saturating_sub(1);
        if self.time_remaining == 0 {
            self.revealed = true;
            EventOutcome::TimeExpired
        } else {
            EventOutcome::Ticked {
                remaining: self.time_remaining,
            }
        }
    }

    /// Locks in an answer and reveals the question, halting the countdown.
    /// Ignored once revealed, once complete, or for an out-of-bounds index.
    fn select_answer(&mut self, index: usize) -> EventOutcome {
        if self.revealed || self.complete {
            return EventOutcome::Ignored;
        }
        let Some(question) = self.questions.get(self.current) else {
            return EventOutcome::Ignored;
        };
        if index >= question.option_count() {
            return EventOutcome::Ignored;
        }

        let correct = question.is_correct(index);
        self.selected = Some(index);
        self.revealed = true;
        if correct {
            self.score += 1;
        }

        EventOutcome::Revealed { correct }
    }

    /// Moves past a revealed question. On the final question this completes
    /// the session and grants badges; otherwise the next question starts with
    /// a fresh countdown and no selection.
    fn advance(&mut self) -> EventOutcome {
        if !self.revealed || self.complete {
            return EventOutcome::Ignored;
        }

        self.current += 1;
        if self.current >= self.questions.len() {
            self.complete = true;
            self.earned_badges =
                awards::evaluate(self.score, self.questions.len(), &self.badges);
            EventOutcome::Completed
        } else {
            self.selected = None;
            self.revealed = false;
            self.time_remaining = self.settings.seconds_per_question();
            EventOutcome::Advanced
        }
    }
}

impl fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSession")
            .field("skill_id", &self.skill_id)
            .field("questions_len", &self.questions.len())
            .field("current", &self.current)
            .field("selected", &self.selected)
            .field("revealed", &self.revealed)
            .field("score", &self.score)
            .field("time_remaining", &self.time_remaining)
            .field("complete", &self.complete)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
