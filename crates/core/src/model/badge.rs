use thiserror::Error;

use crate::model::ids::BadgeId;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum BadgeError {
    #[error("badge name cannot be empty")]
    EmptyName,

    #[error("unknown badge tier: {0}")]
    UnknownTier(String),
}

//
// ─── TIER ──────────────────────────────────────────────────────────────────────
//

/// Visual tier of a badge, from bronze up to platinum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum BadgeTier {
    Bronze,
    Silver,
    Gold,
    Platinum,
}

impl BadgeTier {
    /// Parses a tier slug as it appears in catalog data.
    ///
    /// # Errors
    ///
    /// Returns `BadgeError::UnknownTier` for anything other than
    /// `bronze`, `silver`, `gold` or `platinum`.
    pub fn from_slug(slug: &str) -> Result<Self, BadgeError> {
        match slug {
            "bronze" => Ok(Self::Bronze),
            "silver" => Ok(Self::Silver),
            "gold" => Ok(Self::Gold),
            "platinum" => Ok(Self::Platinum),
            other => Err(BadgeError::UnknownTier(other.to_string())),
        }
    }

    #[must_use]
    pub fn as_slug(self) -> &'static str {
        match self {
            Self::Bronze => "bronze",
            Self::Silver => "silver",
            Self::Gold => "gold",
            Self::Platinum => "platinum",
        }
    }
}

//
// ─── RULE ──────────────────────────────────────────────────────────────────────
//

/// The condition under which a badge is granted.
///
/// Only the first three variants can be satisfied by a single quiz attempt.
/// The others depend on attempt history, which a session does not carry, so
/// they exist in the catalog but are never granted here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeRule {
    /// Granted for completing any quiz.
    QuizCompleted,
    /// Granted when every question was answered correctly.
    PerfectScore,
    /// Granted when the final percentage reaches `percent`.
    ScoreAtLeast { percent: u32 },
    /// Granted for completing `count` quizzes in a row.
    QuizStreak { count: u32 },
    /// Granted for practicing `days` consecutive days.
    PracticeStreak { days: u32 },
    /// Granted for finishing a quiz within `seconds`.
    CompletedWithin { seconds: u32 },
    /// Granted for completing quizzes in `count` distinct skills.
    DistinctSkills { count: u32 },
}

//
// ─── BADGE ─────────────────────────────────────────────────────────────────────
//

/// An achievement marker with a tier and a granting rule.
///
/// Badges live in a static read-only catalog; sessions only read them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    id: BadgeId,
    name: String,
    description: String,
    tier: BadgeTier,
    icon: String,
    requirement: String,
    rule: BadgeRule,
}

impl Badge {
    /// Creates a badge definition.
    ///
    /// # Errors
    ///
    /// Returns `BadgeError::EmptyName` if the display name is blank.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: BadgeId,
        name: impl Into<String>,
        description: impl Into<String>,
        tier: BadgeTier,
        icon: impl Into<String>,
        requirement: impl Into<String>,
        rule: BadgeRule,
    ) -> Result<Self, BadgeError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(BadgeError::EmptyName);
        }

        Ok(Self {
            id,
            name,
            description: description.into(),
            tier,
            icon: icon.into(),
            requirement: requirement.into(),
            rule,
        })
    }

    #[must_use]
    pub fn id(&self) -> &BadgeId {
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
    pub fn tier(&self) -> BadgeTier {
        self.tier
    }

    #[must_use]
    pub fn icon(&self) -> &str {
        &self.icon
    }

    /// Human-readable requirement text shown on the badges screen.
    #[must_use]
    pub fn requirement(&self) -> &str {
        &self.requirement
    }

    #[must_use]
    pub fn rule(&self) -> BadgeRule {
        self.rule
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_slug_roundtrip() {
        for tier in [
            BadgeTier::Bronze,
            BadgeTier::Silver,
            BadgeTier::Gold,
            BadgeTier::Platinum,
        ] {
            assert_eq!(BadgeTier::from_slug(tier.as_slug()).unwrap(), tier);
        }
    }

    #[test]
    fn unknown_tier_is_rejected() {
        let err = BadgeTier::from_slug("diamond").unwrap_err();
        assert!(matches!(err, BadgeError::UnknownTier(_)));
    }

    #[test]
    fn badge_rejects_blank_name() {
        let err = Badge::new(
            BadgeId::new("first-quiz"),
            " ",
            "desc",
            BadgeTier::Bronze,
            "icon",
            "Complete 1 quiz",
            BadgeRule::QuizCompleted,
        )
        .unwrap_err();
        assert!(matches!(err, BadgeError::EmptyName));
    }

    #[test]
    fn tiers_order_by_prestige() {
        assert!(BadgeTier::Bronze < BadgeTier::Silver);
        assert!(BadgeTier::Gold < BadgeTier::Platinum);
    }
}
