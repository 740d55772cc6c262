use std::sync::Arc;
use std::time::Duration;

use catalog::InMemoryCatalog;
use quiz_core::model::{QuizSettings, SkillId};
use quiz_core::session::{EventOutcome, QuizEvent};
use quiz_core::time::fixed_clock;
use services::{QuizService, QuizSessionHandle};

fn embedded_service() -> QuizService {
    let catalog = Arc::new(InMemoryCatalog::from_embedded().unwrap());
    QuizService::new(fixed_clock(), catalog.clone(), catalog)
}

#[test]
fn unknown_skill_runs_the_default_question_set() {
    let service = embedded_service();
    let mut session = service
        .start(SkillId::new("nonexistent-skill"), "Nonexistent")
        .unwrap();

    assert_eq!(session.total_questions(), 5);

    // Answer 3 of 5 correctly: only the completion badge is earned.
    let picks = [1, 2, 1, 0, 0];
    for pick in picks {
        session.apply(QuizEvent::SelectAnswer(pick));
        session.apply(QuizEvent::Advance);
    }

    assert!(session.is_complete());
    assert_eq!(session.score(), 3);

    let summary = service.summarize(&session).unwrap();
    assert!((summary.percentage() - 60.0).abs() < f64::EPSILON);

    let badges = service.earned_badges(&session);
    let names: Vec<_> = badges.iter().map(|badge| badge.name()).collect();
    assert_eq!(names, vec!["First Steps"]);
}

#[test]
fn perfect_run_earns_completion_perfection_and_mastery() {
    let service = embedded_service();
    let mut session = service
        .start(SkillId::new("public-speaking"), "Confident Public Speaking")
        .unwrap();

    // Correct answers for the shipped public-speaking set.
    for pick in [1, 2, 1, 2, 1] {
        let outcome = session.apply(QuizEvent::SelectAnswer(pick));
        assert_eq!(outcome, EventOutcome::Revealed { correct: true });
        session.apply(QuizEvent::Advance);
    }

    assert!(session.is_complete());
    assert_eq!(session.score(), 5);

    let summary = service.summarize(&session).unwrap();
    assert!(summary.is_perfect());

    let names: Vec<_> = service
        .earned_badges(&session)
        .iter()
        .map(|badge| badge.name().to_string())
        .collect();
    assert_eq!(names, vec!["First Steps", "Perfectionist", "Skill Master"]);
}

#[tokio::test]
async fn driver_reveals_on_timeout_with_no_credit() {
    let catalog = Arc::new(InMemoryCatalog::from_embedded().unwrap());
    let service = QuizService::new(fixed_clock(), catalog.clone(), catalog)
        .with_settings(QuizSettings::new(1).unwrap());
    let session = service
        .start(SkillId::new("public-speaking"), "Confident Public Speaking")
        .unwrap();

    let handle = QuizSessionHandle::spawn(service, session);
    let mut state = handle.subscribe();

    let revealed = tokio::time::timeout(Duration::from_secs(5), async {
        loop {
            {
                let snapshot = state.borrow_and_update();
                if snapshot.revealed {
                    break snapshot.clone();
                }
            }
            state.changed().await.unwrap();
        }
    })
    .await
    .expect("countdown should expire within the timeout");

    assert_eq!(revealed.outcome, Some(EventOutcome::TimeExpired));
    assert_eq!(revealed.selected_answer, None);
    assert_eq!(revealed.score, 0);
    assert_eq!(revealed.time_remaining, 0);
}
