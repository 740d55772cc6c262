use thiserror::Error;

use quiz_core::model::{Badge, BadgeId, Question, Skill, SkillId};

/// Errors surfaced while loading catalog data.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("malformed catalog data: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error(transparent)]
    Invalid(#[from] quiz_core::Error),
}

/// Read-only source of question sets, keyed by skill identifier.
///
/// Catalogs are injected collaborators, passed as `Arc<dyn QuestionCatalog>`
/// so sessions stay testable against fabricated data.
pub trait QuestionCatalog: Send + Sync {
    /// The ordered question set for a skill, if one exists.
    fn questions_for(&self, skill: &SkillId) -> Option<Vec<Question>>;

    /// The skill whose question set stands in when a lookup misses.
    fn default_skill(&self) -> SkillId;
}

/// Read-only source of badge definitions.
pub trait BadgeCatalog: Send + Sync {
    /// All badges, in the catalog's fixed presentation order.
    fn badges(&self) -> Vec<Badge>;

    /// A single badge by identifier.
    fn badge(&self, id: &BadgeId) -> Option<Badge>;
}

/// Read-only source of skill entries for the skill picker.
pub trait SkillCatalog: Send + Sync {
    /// All skills, in the catalog's fixed presentation order.
    fn skills(&self) -> Vec<Skill>;

    /// A single skill by identifier.
    fn skill(&self, id: &SkillId) -> Option<Skill>;

    /// Skills matching a search query on name or description.
    fn search(&self, query: &str) -> Vec<Skill> {
        self.skills()
            .into_iter()
            .filter(|skill| skill.matches_query(query))
            .collect()
    }
}
