use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tokio::time::{self, Instant};

use quiz_core::model::{Badge, Question, QuizSummary};
use quiz_core::session::{EventOutcome, QuizEvent, QuizSession};

use super::progress::QuizProgress;
use super::service::QuizService;

//
// ─── INTENTS AND SNAPSHOTS ─────────────────────────────────────────────────────
//

/// Discrete user intents forwarded into the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizIntent {
    SelectAnswer(usize),
    Advance,
}

/// Read model published after every applied event.
///
/// The driver task is the session's only writer; readers hold a watch
/// receiver and see each state exactly as the machine produced it.
#[derive(Debug, Clone)]
pub struct QuizSnapshot {
    /// What the last applied event did, `None` for the initial state.
    pub outcome: Option<EventOutcome>,
    pub skill_name: String,
    pub question: Option<Question>,
    pub index: usize,
    pub total: usize,
    pub selected_answer: Option<usize>,
    pub revealed: bool,
    pub time_remaining: u32,
    pub score: u32,
    pub complete: bool,
    pub progress: QuizProgress,
    /// Earned badges in grant order; populated at completion.
    pub earned_badges: Vec<Badge>,
    /// Final summary; populated at completion.
    pub summary: Option<QuizSummary>,
}

fn snapshot_of(
    session: &QuizSession,
    outcome: Option<EventOutcome>,
    service: &QuizService,
) -> QuizSnapshot {
    let (earned_badges, summary) = if session.is_complete() {
        let summary = match service.summarize(session) {
            Ok(summary) => Some(summary),
            Err(err) => {
                log::warn!("failed to summarize completed session: {err}");
                None
            }
        };
        (service.earned_badges(session), summary)
    } else {
        (Vec::new(), None)
    };

    QuizSnapshot {
        outcome,
        skill_name: session.skill_name().to_string(),
        question: session.current_question().cloned(),
        index: session.current_index(),
        total: session.total_questions(),
        selected_answer: session.selected_answer(),
        revealed: session.is_revealed(),
        time_remaining: session.time_remaining(),
        score: session.score(),
        complete: session.is_complete(),
        progress: QuizProgress::of(session),
        earned_badges,
        summary,
    }
}

//
// ─── HANDLE ────────────────────────────────────────────────────────────────────
//

/// Handle to a running quiz session task.
///
/// The task owns the session and a one-second ticker; intents sent here are
/// serialized with the ticks into one ordered queue, so exactly one event
/// causes each reveal. Dropping the handle closes the queue and ends the
/// task; there is no state to unwind.
pub struct QuizSessionHandle {
    intents: mpsc::Sender<QuizIntent>,
    state: watch::Receiver<QuizSnapshot>,
}

impl QuizSessionHandle {
    /// Spawns the driver task for a freshly started session.
    ///
    /// Must be called from within a tokio runtime.
    #[must_use]
    pub fn spawn(service: QuizService, mut session: QuizSession) -> Self {
        let (intent_tx, mut intent_rx) = mpsc::channel::<QuizIntent>(16);
        let (state_tx, state_rx) = watch::channel(snapshot_of(&session, None, &service));

        tokio::spawn(async move {
            let period = Duration::from_secs(1);
            let mut ticker = time::interval_at(Instant::now() + period, period);

            loop {
                let outcome = tokio::select! {
                    _ = ticker.tick(), if session.timer_active() => {
                        session.apply(QuizEvent::Tick)
                    }
                    intent = intent_rx.recv() => match intent {
                        Some(QuizIntent::SelectAnswer(index)) => {
                            session.apply(QuizEvent::SelectAnswer(index))
                        }
                        Some(QuizIntent::Advance) => {
                            let outcome = session.apply(QuizEvent::Advance);
                            if outcome == EventOutcome::Advanced {
                                // Give the next question its full first second.
                                ticker.reset();
                            }
                            outcome
                        }
                        None => break,
                    },
                };

                match outcome {
                    EventOutcome::Ignored => continue,
                    EventOutcome::Revealed { correct } => {
                        log::debug!(
                            "question {} revealed: correct={correct}",
                            session.current_index()
                        );
                    }
                    EventOutcome::TimeExpired => {
                        log::debug!("question {} timed out", session.current_index());
                    }
                    EventOutcome::Completed => {
                        log::info!(
                            "quiz session complete: skill={} score={}/{}",
                            session.skill_id(),
                            session.score(),
                            session.total_questions()
                        );
                    }
                    EventOutcome::Ticked { .. } | EventOutcome::Advanced => {}
                }

                if state_tx
                    .send(snapshot_of(&session, Some(outcome), &service))
                    .is_err()
                {
                    break;
                }
            }
        });

        Self {
            intents: intent_tx,
            state: state_rx,
        }
    }

    /// Forward an answer selection. A no-op once the question is revealed.
    pub async fn select_answer(&self, index: usize) {
        let _ = self.intents.send(QuizIntent::SelectAnswer(index)).await;
    }

    /// Forward an advance. A no-op unless the current question is revealed.
    pub async fn advance(&self) {
        let _ = self.intents.send(QuizIntent::Advance).await;
    }

    /// The latest published state.
    #[must_use]
    pub fn snapshot(&self) -> QuizSnapshot {
        self.state.borrow().clone()
    }

    /// A watch receiver for awaiting state changes.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<QuizSnapshot> {
        self.state.clone()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::InMemoryCatalog;
    use quiz_core::model::{QuestionId, SkillId};
    use quiz_core::time::fixed_clock;
    use std::sync::Arc;

    fn build_catalog() -> Arc<InMemoryCatalog> {
        let mut catalog = InMemoryCatalog::new(SkillId::new("public-speaking"));
        let questions = (1..=3)
            .map(|id| {
                Question::new(
                    QuestionId::new(id.to_string()),
                    format!("Question {id}?"),
                    vec!["a".into(), "b".into(), "c".into(), "d".into()],
                    1,
                    "Because.",
                )
                .unwrap()
            })
            .collect();
        catalog.insert_question_set(SkillId::new("public-speaking"), questions);
        Arc::new(catalog)
    }

    fn build_handle() -> QuizSessionHandle {
        let catalog = build_catalog();
        let service = QuizService::new(fixed_clock(), catalog.clone(), catalog);
        let session = service
            .start(SkillId::new("public-speaking"), "Confident Public Speaking")
            .unwrap();
        QuizSessionHandle::spawn(service, session)
    }

    // Waits past tick snapshots until the predicate holds.
    async fn wait_until(
        state: &mut watch::Receiver<QuizSnapshot>,
        predicate: impl Fn(&QuizSnapshot) -> bool,
    ) -> QuizSnapshot {
        loop {
            {
                let snapshot = state.borrow_and_update();
                if predicate(&snapshot) {
                    return snapshot.clone();
                }
            }
            state.changed().await.unwrap();
        }
    }

    #[tokio::test]
    async fn initial_snapshot_shows_the_first_question() {
        let handle = build_handle();
        let snapshot = handle.snapshot();
        assert_eq!(snapshot.outcome, None);
        assert_eq!(snapshot.index, 0);
        assert_eq!(snapshot.total, 3);
        assert_eq!(snapshot.time_remaining, 30);
        assert!(!snapshot.revealed);
        assert!(snapshot.question.is_some());
    }

    #[tokio::test]
    async fn intents_drive_the_session_to_completion() {
        let handle = build_handle();
        let mut state = handle.subscribe();
        state.borrow_and_update();

        for _ in 0..3 {
            handle.select_answer(1).await;
            let revealed = wait_until(&mut state, |snapshot| snapshot.revealed).await;
            assert_eq!(
                revealed.outcome,
                Some(EventOutcome::Revealed { correct: true })
            );

            handle.advance().await;
            wait_until(&mut state, |snapshot| !snapshot.revealed || snapshot.complete).await;
        }

        let final_snapshot = handle.snapshot();
        assert!(final_snapshot.complete);
        assert_eq!(final_snapshot.score, 3);
        assert!(final_snapshot.summary.is_some());
        assert!(final_snapshot.question.is_none());
    }

    #[tokio::test]
    async fn intents_after_completion_are_no_ops() {
        let handle = build_handle();
        let mut state = handle.subscribe();
        state.borrow_and_update();

        for _ in 0..3 {
            handle.select_answer(1).await;
            wait_until(&mut state, |snapshot| snapshot.revealed).await;
            handle.advance().await;
            wait_until(&mut state, |snapshot| !snapshot.revealed || snapshot.complete).await;
        }
        assert!(handle.snapshot().complete);

        handle.select_answer(0).await;
        handle.advance().await;
        tokio::time::sleep(Duration::from_millis(50)).await;

        let snapshot = handle.snapshot();
        assert!(snapshot.complete);
        assert_eq!(snapshot.score, 3);
        assert_eq!(snapshot.outcome, Some(EventOutcome::Completed));
    }
}
