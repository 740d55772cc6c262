mod driver;
mod progress;
mod service;
mod view;

// Public API of the session subsystem.
pub use crate::error::SessionError;
pub use driver::{QuizIntent, QuizSessionHandle, QuizSnapshot};
pub use progress::QuizProgress;
pub use service::QuizService;
pub use view::{QuizResultView, ScoreBand};
