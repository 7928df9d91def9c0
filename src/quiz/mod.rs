pub mod bank;
pub mod session;

pub use bank::{CHOICES_PER_QUESTION, Question, QuestionBank};
pub use session::{AnswerRecord, QuestionState, QuizSession, SessionArena, SessionId};
