mod badge;
mod ids;
mod question;
mod settings;
mod skill;
mod summary;

pub use ids::{BadgeId, QuestionId, SkillId};

pub use badge::{Badge, BadgeError, BadgeRule, BadgeTier};
pub use question::{Question, QuestionError};
pub use settings::{DEFAULT_SECONDS_PER_QUESTION, QuizSettings, QuizSettingsError};
pub use skill::{Skill, SkillError};
pub use summary::{QuizSummary, QuizSummaryError};
