pub mod config;
pub mod error;
pub mod input;
pub mod logger;
pub mod models;
pub mod quiz;
pub mod solver;
pub mod ui;
pub mod utils;

// Re-exports for convenience
pub use config::Config;
pub use error::{InputError, QuizError, SolveError};
pub use input::handle_key;
pub use models::{App, AppState};
pub use quiz::{
    AnswerRecord, Question, QuestionBank, QuestionState, QuizSession, SessionArena, SessionId,
};
pub use solver::{
    AnglePairKind, CircleCaseKind, KnownValues, Quantity, Solution, SolveOutcome, angle_pair, circle,
};
pub use ui::draw;
