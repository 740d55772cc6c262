use thiserror::Error;

use crate::model::ids::SkillId;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SkillError {
    #[error("skill name cannot be empty")]
    EmptyName,
}

/// A named soft-skill domain with an associated question set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skill {
    id: SkillId,
    name: String,
    description: String,
    icon: String,
}

impl Skill {
    /// Creates a skill entry.
    ///
    /// # Errors
    ///
    /// Returns `SkillError::EmptyName` if the display name is blank.
    pub fn new(
        id: SkillId,
        name: impl Into<String>,
        description: impl Into<String>,
        icon: impl Into<String>,
    ) -> Result<Self, SkillError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(SkillError::EmptyName);
        }

        Ok(Self {
            id,
            name,
            description: description.into(),
            icon: icon.into(),
        })
    }

    #[must_use]
    pub fn id(&self) -> &SkillId {
        &self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn icon(&self) -> &str {
        &self.icon
    }

    /// Case-insensitive substring match on name and description, used by the
    /// skill picker's search box.
    #[must_use]
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        self.name.to_lowercase().contains(&query)
            || self.description.to_lowercase().contains(&query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build_skill() -> Skill {
        Skill::new(
            SkillId::new("public-speaking"),
            "Public Speaking",
            "Overcome fear and speak confidently",
            "\u{1f3a4}",
        )
        .unwrap()
    }

    #[test]
    fn skill_rejects_blank_name() {
        let err = Skill::new(SkillId::new("x"), "  ", "desc", "icon").unwrap_err();
        assert!(matches!(err, SkillError::EmptyName));
    }

    #[test]
    fn search_matches_name_case_insensitively() {
        let skill = build_skill();
        assert!(skill.matches_query("PUBLIC"));
        assert!(skill.matches_query("speak"));
    }

    #[test]
    fn search_matches_description() {
        let skill = build_skill();
        assert!(skill.matches_query("confidently"));
        assert!(!skill.matches_query("negotiation"));
    }

    #[test]
    fn blank_query_matches_everything() {
        assert!(build_skill().matches_query("   "));
    }
}
