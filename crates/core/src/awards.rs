//! Badge-eligibility evaluation for a finished quiz attempt.
//!
//! Runs exactly once, when a session transitions to complete. The granted
//! set is a function of the final score and question count only; the badge
//! list is walked in catalog order so callers see a deterministic sequence.

use crate::model::{Badge, BadgeId, BadgeRule};

/// Evaluates which badges a finished attempt earns.
///
/// `badges` is the full catalog in its fixed order; every badge whose rule is
/// satisfied is granted, in that order. Rules that depend on attempt history
/// (streaks, timing, cross-skill counts) are never satisfied by a single
/// session and evaluate to false.
#[must_use]
pub fn evaluate(score: u32, total_questions: usize, badges: &[Badge]) -> Vec<BadgeId> {
    badges
        .iter()
        .filter(|badge| is_satisfied(badge.rule(), score, total_questions))
        .map(|badge| badge.id().clone())
        .collect()
}

fn is_satisfied(rule: BadgeRule, score: u32, total_questions: usize) -> bool {
    if total_questions == 0 {
        return false;
    }
    let score = score as usize;

    match rule {
        BadgeRule::QuizCompleted => true,
        BadgeRule::PerfectScore => score == total_questions,
        BadgeRule::ScoreAtLeast { percent } => score * 100 >= total_questions * percent as usize,
        // History-dependent rules; a single attempt carries no history.
        BadgeRule::QuizStreak { .. }
        | BadgeRule::PracticeStreak { .. }
        | BadgeRule::CompletedWithin { .. }
        | BadgeRule::DistinctSkills { .. } => false,
    }
}
