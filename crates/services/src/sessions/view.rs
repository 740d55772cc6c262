use quiz_core::model::{Badge, QuizSummary};

//
// ─── SCORE BAND ────────────────────────────────────────────────────────────────
//

/// Coarse rating of a final score, used to pick the results message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    /// 90% and up.
    High,
    /// 70% to 89%.
    Mid,
    /// Below 70%.
    Low,
}

impl ScoreBand {
    #[must_use]
    pub fn for_percentage(percentage: f64) -> Self {
        if percentage >= 90.0 {
            Self::High
        } else if percentage >= 70.0 {
            Self::Mid
        } else {
            Self::Low
        }
    }

    /// Encouragement line shown under the score.
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::High => "Excellent! You've mastered this skill!",
            Self::Mid => "Good job! Keep practicing to improve.",
            Self::Low => "Keep learning! Practice makes perfect.",
        }
    }
}

//
// ─── RESULT VIEW ───────────────────────────────────────────────────────────────
//

/// Presentation model for the results screen.
///
/// Pure data derived from the summary; reveal animation timing is the
/// adapter's concern.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizResultView {
    pub skill_name: String,
    pub score: u32,
    pub total_questions: u32,
    /// Percentage rounded to a whole number for display.
    pub percentage: u32,
    pub band: ScoreBand,
    /// Earned badges in grant order, for sequential reveal.
    pub badges: Vec<Badge>,
}

impl QuizResultView {
    #[must_use]
    pub fn new(skill_name: impl Into<String>, summary: &QuizSummary, badges: Vec<Badge>) -> Self {
        let percentage = summary.percentage();
        Self {
            skill_name: skill_name.into(),
            score: summary.score(),
            total_questions: summary.total_questions(),
            percentage: percentage.round() as u32,
            band: ScoreBand::for_percentage(percentage),
            badges,
        }
    }

    /// The "3 out of 5 correct" line.
    #[must_use]
    pub fn score_line(&self) -> String {
        format!("{} out of {} correct", self.score, self.total_questions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::model::SkillId;
    use quiz_core::time::fixed_now;

    fn summary(score: u32, total: usize) -> QuizSummary {
        QuizSummary::new(
            SkillId::new("public-speaking"),
            score,
            total,
            fixed_now(),
            fixed_now(),
        )
        .unwrap()
    }

    #[test]
    fn bands_follow_the_thresholds() {
        assert_eq!(ScoreBand::for_percentage(100.0), ScoreBand::High);
        assert_eq!(ScoreBand::for_percentage(90.0), ScoreBand::High);
        assert_eq!(ScoreBand::for_percentage(89.9), ScoreBand::Mid);
        assert_eq!(ScoreBand::for_percentage(70.0), ScoreBand::Mid);
        assert_eq!(ScoreBand::for_percentage(60.0), ScoreBand::Low);
    }

    #[test]
    fn view_rounds_percentage_for_display() {
        let view = QuizResultView::new("Confident Public Speaking", &summary(2, 3), Vec::new());
        assert_eq!(view.percentage, 67);
        assert_eq!(view.band, ScoreBand::Low);
        assert_eq!(view.score_line(), "2 out of 3 correct");
    }

    #[test]
    fn perfect_score_reads_as_high() {
        let view = QuizResultView::new("Confident Public Speaking", &summary(5, 5), Vec::new());
        assert_eq!(view.percentage, 100);
        assert_eq!(view.band, ScoreBand::High);
        assert_eq!(view.band.message(), "Excellent! You've mastered this skill!");
    }
}
