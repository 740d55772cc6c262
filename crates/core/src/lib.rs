#![forbid(unsafe_code)]

pub mod awards;
pub mod error;
pub mod model;
pub mod session;
pub mod time;

pub use error::Error;
pub use session::{EventOutcome, QuizEvent, QuizSession, QuizSessionError};
pub use time::Clock;
