use super::bank::{CHOICES_PER_QUESTION, Question, QuestionBank};
use crate::error::QuizError;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerRecord {
    pub selected: usize,
    pub correct: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionState {
    Unanswered,
    Answered(AnswerRecord),
}

/// One quiz-taker's progress through the question bank.
///
/// `score` always equals the number of correct entries in `answered`; both
/// are only changed by `submit` and `reset`.
#[derive(Debug, Clone)]
pub struct QuizSession {
    bank: Arc<QuestionBank>,
    score: usize,
    answered: BTreeMap<usize, AnswerRecord>,
}

impl QuizSession {
    pub fn new(bank: Arc<QuestionBank>) -> Self {
        Self {
            bank,
            score: 0,
            answered: BTreeMap::new(),
        }
    }

    /// Locks in an answer. A question can only be answered once per reset.
    pub fn submit(&mut self, question: usize, selected: usize) -> Result<AnswerRecord, QuizError> {
        let q = self
            .bank
            .get(question)
            .ok_or(QuizError::UnknownQuestion(question))?;
        if selected >= CHOICES_PER_QUESTION {
            return Err(QuizError::InvalidChoice {
                question,
                choice: selected,
            });
        }
        if self.answered.contains_key(&question) {
            return Err(QuizError::AlreadyAnswered(question));
        }

        let record = AnswerRecord {
            selected,
            correct: selected == q.answer,
        };
        self.answered.insert(question, record);
        if record.correct {
            self.score += 1;
        }
        Ok(record)
    }

    pub fn state(&self, question: usize) -> QuestionState {
        match self.answered.get(&question) {
            Some(record) => QuestionState::Answered(*record),
            None => QuestionState::Unanswered,
        }
    }

    pub fn reset(&mut self) {
        self.score = 0;
        self.answered.clear();
    }

    /// `(score, total)`.
    pub fn current_score(&self) -> (usize, usize) {
        (self.score, self.bank.len())
    }

    pub fn answered_count(&self) -> usize {
        self.answered.len()
    }

    pub fn is_complete(&self) -> bool {
        self.answered.len() == self.bank.len()
    }

    pub fn question(&self, index: usize) -> Option<&Question> {
        self.bank.get(index)
    }

    pub fn questions(&self) -> &[Question] {
        self.bank.questions()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SessionId(pub u64);

/// Independently owned quiz sessions, one per quiz-taker.
#[derive(Debug)]
pub struct SessionArena {
    bank: Arc<QuestionBank>,
    sessions: HashMap<SessionId, QuizSession>,
    next_id: u64,
}

impl SessionArena {
    pub fn new(bank: Arc<QuestionBank>) -> Self {
        Self {
            bank,
            sessions: HashMap::new(),
            next_id: 1,
        }
    }

    pub fn open(&mut self) -> SessionId {
        let id = SessionId(self.next_id);
        self.next_id += 1;
        self.sessions
            .insert(id, QuizSession::new(Arc::clone(&self.bank)));
        id
    }

    pub fn get(&self, id: SessionId) -> Option<&QuizSession> {
        self.sessions.get(&id)
    }

    pub fn get_mut(&mut self, id: SessionId) -> Option<&mut QuizSession> {
        self.sessions.get_mut(&id)
    }

    pub fn close(&mut self, id: SessionId) -> bool {
        self.sessions.remove(&id).is_some()
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_session() -> QuizSession {
        QuizSession::new(Arc::new(QuestionBank::embedded().unwrap()))
    }

    #[test]
    fn test_new_session_is_empty() {
        let session = create_test_session();
        assert_eq!(session.current_score(), (0, 6));
        assert_eq!(session.state(0), QuestionState::Unanswered);
        assert!(!session.is_complete());
    }

    #[test]
    fn test_correct_submission_scores() {
        let mut session = create_test_session();
        let record = session.submit(0, 0).unwrap();
        assert_eq!(
            record,
            AnswerRecord {
                selected: 0,
                correct: true
            }
        );
        assert_eq!(session.current_score(), (1, 6));
        assert_eq!(session.state(0), QuestionState::Answered(record));
    }

    #[test]
    fn test_incorrect_submission_does_not_score() {
        let mut session = create_test_session();
        let record = session.submit(2, 3).unwrap();
        assert!(!record.correct);
        assert_eq!(session.current_score(), (0, 6));
        assert_eq!(session.answered_count(), 1);
    }

    #[test]
    fn test_resubmission_is_rejected() {
        let mut session = create_test_session();
        session.submit(0, 0).unwrap();
        for choice in 0..4 {
            assert!(matches!(
                session.submit(0, choice),
                Err(QuizError::AlreadyAnswered(0))
            ));
        }
        assert_eq!(session.current_score(), (1, 6));
        assert_eq!(
            session.state(0),
            QuestionState::Answered(AnswerRecord {
                selected: 0,
                correct: true
            })
        );
    }

    #[test]
    fn test_wrong_answer_stays_locked() {
        let mut session = create_test_session();
        session.submit(1, 2).unwrap();
        assert!(session.submit(1, 0).is_err());
        assert_eq!(session.current_score(), (0, 6));
    }

    #[test]
    fn test_perfect_score_then_reset() {
        let mut session = create_test_session();
        let keys: Vec<usize> = session.questions().iter().map(|q| q.answer).collect();
        for (i, key) in keys.into_iter().enumerate() {
            session.submit(i, key).unwrap();
        }
        assert_eq!(session.current_score(), (6, 6));
        assert!(session.is_complete());

        session.reset();
        assert_eq!(session.current_score(), (0, 6));
        for i in 0..6 {
            assert_eq!(session.state(i), QuestionState::Unanswered);
        }
        assert!(session.submit(0, 0).is_ok());
    }

    #[test]
    fn test_unknown_question_and_invalid_choice() {
        let mut session = create_test_session();
        assert!(matches!(
            session.submit(6, 0),
            Err(QuizError::UnknownQuestion(6))
        ));
        assert!(matches!(
            session.submit(0, 4),
            Err(QuizError::InvalidChoice {
                question: 0,
                choice: 4
            })
        ));
        assert_eq!(session.answered_count(), 0);
        assert_eq!(session.state(6), QuestionState::Unanswered);
    }

    #[test]
    fn test_arena_sessions_are_independent() {
        let mut arena = SessionArena::new(Arc::new(QuestionBank::embedded().unwrap()));
        let alice = arena.open();
        let bob = arena.open();
        assert_ne!(alice, bob);
        assert_eq!(arena.len(), 2);

        arena.get_mut(alice).unwrap().submit(0, 0).unwrap();
        assert_eq!(arena.get(alice).unwrap().current_score(), (1, 6));
        assert_eq!(arena.get(bob).unwrap().current_score(), (0, 6));
        assert_eq!(arena.get(bob).unwrap().state(0), QuestionState::Unanswered);
    }

    #[test]
    fn test_arena_close_does_not_reuse_ids() {
        let mut arena = SessionArena::new(Arc::new(QuestionBank::embedded().unwrap()));
        let first = arena.open();
        assert!(arena.close(first));
        assert!(!arena.close(first));
        assert!(arena.is_empty());
        let second = arena.open();
        assert_ne!(first, second);
        assert!(arena.get(first).is_none());
    }
}
