use serde::Deserialize;
use std::collections::HashMap;

use quiz_core::model::{
    Badge, BadgeId, BadgeRule, BadgeTier, Question, QuestionId, Skill, SkillId,
};

use crate::repository::{BadgeCatalog, CatalogError, QuestionCatalog, SkillCatalog};

//
// ─── SEED RECORDS ──────────────────────────────────────────────────────────────
//

// Raw serde shapes for the embedded seed file. Records are converted into
// domain types through the validating constructors, so malformed data fails
// at load time rather than mid-session.

#[derive(Debug, Deserialize)]
struct SeedFile {
    default_skill: String,
    skills: Vec<SkillRecord>,
    badges: Vec<BadgeRecord>,
    question_sets: Vec<QuestionSetRecord>,
}

#[derive(Debug, Deserialize)]
struct SkillRecord {
    id: String,
    name: String,
    description: String,
    icon: String,
}

#[derive(Debug, Deserialize)]
struct BadgeRecord {
    id: String,
    name: String,
    description: String,
    tier: String,
    icon: String,
    requirement: String,
    rule: RuleRecord,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum RuleRecord {
    QuizCompleted,
    PerfectScore,
    ScoreAtLeast { percent: u32 },
    QuizStreak { count: u32 },
    PracticeStreak { days: u32 },
    CompletedWithin { seconds: u32 },
    DistinctSkills { count: u32 },
}

#[derive(Debug, Deserialize)]
struct QuestionSetRecord {
    skill_id: String,
    questions: Vec<QuestionRecord>,
}

#[derive(Debug, Deserialize)]
struct QuestionRecord {
    id: String,
    prompt: String,
    options: Vec<String>,
    correct_answer: usize,
    explanation: String,
}

impl SkillRecord {
    fn into_skill(self) -> Result<Skill, quiz_core::Error> {
        Ok(Skill::new(
            SkillId::new(self.id),
            self.name,
            self.description,
            self.icon,
        )?)
    }
}

impl BadgeRecord {
    fn into_badge(self) -> Result<Badge, quiz_core::Error> {
        Ok(Badge::new(
            BadgeId::new(self.id),
            self.name,
            self.description,
            BadgeTier::from_slug(&self.tier)?,
            self.icon,
            self.requirement,
            self.rule.into_rule(),
        )?)
    }
}

impl RuleRecord {
    fn into_rule(self) -> BadgeRule {
        match self {
            RuleRecord::QuizCompleted => BadgeRule::QuizCompleted,
            RuleRecord::PerfectScore => BadgeRule::PerfectScore,
            RuleRecord::ScoreAtLeast { percent } => BadgeRule::ScoreAtLeast { percent },
            RuleRecord::QuizStreak { count } => BadgeRule::QuizStreak { count },
            RuleRecord::PracticeStreak { days } => BadgeRule::PracticeStreak { days },
            RuleRecord::CompletedWithin { seconds } => BadgeRule::CompletedWithin { seconds },
            RuleRecord::DistinctSkills { count } => BadgeRule::DistinctSkills { count },
        }
    }
}

impl QuestionRecord {
    fn into_question(self) -> Result<Question, quiz_core::Error> {
        Ok(Question::new(
            QuestionId::new(self.id),
            self.prompt,
            self.options,
            self.correct_answer,
            self.explanation,
        )?)
    }
}

//
// ─── IN-MEMORY CATALOG ─────────────────────────────────────────────────────────
//

/// All three catalogs backed by in-memory tables.
///
/// The shipped content comes from the embedded seed file; tests fabricate
/// their own instances through [`InMemoryCatalog::new`] and the insert
/// methods.
#[derive(Debug, Clone)]
pub struct InMemoryCatalog {
    default_skill: SkillId,
    skills: Vec<Skill>,
    badges: Vec<Badge>,
    question_sets: HashMap<SkillId, Vec<Question>>,
}

impl InMemoryCatalog {
    /// Creates an empty catalog with the given fallback skill.
    #[must_use]
    pub fn new(default_skill: SkillId) -> Self {
        Self {
            default_skill,
            skills: Vec::new(),
            badges: Vec::new(),
            question_sets: HashMap::new(),
        }
    }

    /// Loads the catalog shipped with the application.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the embedded seed file fails to parse or any
    /// record fails domain validation.
    pub fn from_embedded() -> Result<Self, CatalogError> {
        let seed: SeedFile = serde_json::from_str(include_str!("data/seed.json"))?;

        let mut catalog = Self::new(SkillId::new(seed.default_skill));
        for record in seed.skills {
            catalog.insert_skill(record.into_skill()?);
        }
        for record in seed.badges {
            catalog.insert_badge(record.into_badge()?);
        }
        for set in seed.question_sets {
            let skill_id = SkillId::new(set.skill_id);
            let questions = set
                .questions
                .into_iter()
                .map(QuestionRecord::into_question)
                .collect::<Result<Vec<_>, _>>()?;
            catalog.insert_question_set(skill_id, questions);
        }

        Ok(catalog)
    }

    pub fn insert_skill(&mut self, skill: Skill) {
        self.skills.push(skill);
    }

    pub fn insert_badge(&mut self, badge: Badge) {
        self.badges.push(badge);
    }

    pub fn insert_question_set(&mut self, skill_id: SkillId, questions: Vec<Question>) {
        self.question_sets.insert(skill_id, questions);
    }
}

impl QuestionCatalog for InMemoryCatalog {
    fn questions_for(&self, skill: &SkillId) -> Option<Vec<Question>> {
        self.question_sets.get(skill).cloned()
    }

    fn default_skill(&self) -> SkillId {
        self.default_skill.clone()
    }
}

impl BadgeCatalog for InMemoryCatalog {
    fn badges(&self) -> Vec<Badge> {
        self.badges.clone()
    }

    fn badge(&self, id: &BadgeId) -> Option<Badge> {
        self.badges.iter().find(|badge| badge.id() == id).cloned()
    }
}

impl SkillCatalog for InMemoryCatalog {
    fn skills(&self) -> Vec<Skill> {
        self.skills.clone()
    }

    fn skill(&self, id: &SkillId) -> Option<Skill> {
        self.skills.iter().find(|skill| skill.id() == id).cloned()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::model::BadgeRule;

    #[test]
    fn embedded_seed_parses_and_validates() {
        let catalog = InMemoryCatalog::from_embedded().unwrap();
        assert_eq!(catalog.skills().len(), 12);
        assert_eq!(catalog.badges().len(), 8);
    }

    #[test]
    fn default_skill_has_a_question_set() {
        let catalog = InMemoryCatalog::from_embedded().unwrap();
        let default = catalog.default_skill();
        let questions = catalog.questions_for(&default).unwrap();
        assert_eq!(questions.len(), 5);
        assert_eq!(questions[0].correct_answer(), 1);
    }

    #[test]
    fn unknown_skill_has_no_question_set() {
        let catalog = InMemoryCatalog::from_embedded().unwrap();
        assert!(
            catalog
                .questions_for(&SkillId::new("nonexistent-skill"))
                .is_none()
        );
    }

    #[test]
    fn badge_lookup_by_id() {
        let catalog = InMemoryCatalog::from_embedded().unwrap();
        let badge = catalog.badge(&BadgeId::new("skill-master")).unwrap();
        assert_eq!(badge.name(), "Skill Master");
        assert_eq!(badge.rule(), BadgeRule::ScoreAtLeast { percent: 80 });
    }

    #[test]
    fn badge_order_matches_the_seed_file() {
        let catalog = InMemoryCatalog::from_embedded().unwrap();
        let first: Vec<_> = catalog
            .badges()
            .iter()
            .take(4)
            .map(|badge| badge.id().as_str().to_string())
            .collect();
        assert_eq!(
            first,
            vec!["first-quiz", "quiz-streak-3", "perfect-score", "skill-master"]
        );
    }

    #[test]
    fn skill_search_filters_by_query() {
        let catalog = InMemoryCatalog::from_embedded().unwrap();
        let hits = catalog.search("speak");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id().as_str(), "public-speaking");

        assert!(catalog.search("juggling").is_empty());
        assert_eq!(catalog.search("").len(), 12);
    }
}
