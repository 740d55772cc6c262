use quiz_core::session::QuizSession;

/// Counters behind the in-quiz progress header and bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizProgress {
    pub total: usize,
    pub answered: usize,
    pub remaining: usize,
    pub is_complete: bool,
}

impl QuizProgress {
    #[must_use]
    pub fn of(session: &QuizSession) -> Self {
        let total = session.total_questions();
        let answered = if session.is_complete() {
            total
        } else {
            session.current_index() + usize::from(session.is_revealed())
        };

        Self {
            total,
            answered,
            remaining: total.saturating_sub(answered),
            is_complete: session.is_complete(),
        }
    }

    /// Header line for the in-quiz progress bar.
    #[must_use]
    pub fn label(&self) -> String {
        let shown = if self.is_complete {
            self.total
        } else {
            (self.answered + 1).min(self.total)
        };
        format!("Question {shown} of {}", self.total)
    }

    /// Fraction of the quiz shown so far, in `[0, 1]`.
    #[must_use]
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.answered as f64 / self.total as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::model::{Question, QuestionId, QuizSettings, SkillId};
    use quiz_core::session::QuizEvent;
    use quiz_core::time::fixed_now;

    fn build_session() -> QuizSession {
        let questions = (1..=2)
            .map(|id| {
                Question::new(
                    QuestionId::new(id.to_string()),
                    format!("Question {id}?"),
                    vec!["a".into(), "b".into()],
                    0,
                    "Because.",
                )
                .unwrap()
            })
            .collect();
        QuizSession::new(
            SkillId::new("public-speaking"),
            "Confident Public Speaking",
            questions,
            Vec::new(),
            QuizSettings::default(),
            fixed_now(),
        )
        .unwrap()
    }

    #[test]
    fn progress_counts_revealed_questions() {
        let mut session = build_session();
        assert_eq!(
            QuizProgress::of(&session),
            QuizProgress {
                total: 2,
                answered: 0,
                remaining: 2,
                is_complete: false,
            }
        );
        assert_eq!(QuizProgress::of(&session).label(), "Question 1 of 2");

        session.apply(QuizEvent::SelectAnswer(0));
        assert_eq!(QuizProgress::of(&session).answered, 1);

        session.apply(QuizEvent::Advance);
        assert_eq!(QuizProgress::of(&session).label(), "Question 2 of 2");
    }

    #[test]
    fn progress_saturates_at_completion() {
        let mut session = build_session();
        for _ in 0..2 {
            session.apply(QuizEvent::SelectAnswer(0));
            session.apply(QuizEvent::Advance);
        }

        let progress = QuizProgress::of(&session);
        assert!(progress.is_complete);
        assert_eq!(progress.answered, 2);
        assert_eq!(progress.remaining, 0);
        assert!((progress.fraction() - 1.0).abs() < f64::EPSILON);
    }
}
