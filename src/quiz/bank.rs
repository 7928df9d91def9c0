use crate::error::QuizError;
use serde::Deserialize;

pub const CHOICES_PER_QUESTION: usize = 4;

const EMBEDDED_QUESTIONS: &str = include_str!("../../assets/questions.json");

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Question {
    pub prompt: String,
    pub choices: [String; CHOICES_PER_QUESTION],
    pub answer: usize,
}

impl Question {
    pub fn correct_choice(&self) -> &str {
        &self.choices[self.answer]
    }
}

/// Fixed, ordered list of quiz questions. Loaded once and never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    /// Parses the question bank compiled into the binary.
    pub fn embedded() -> Result<Self, QuizError> {
        Self::from_json(EMBEDDED_QUESTIONS)
    }

    pub fn from_json(json: &str) -> Result<Self, QuizError> {
        let questions: Vec<Question> = serde_json::from_str(json)?;
        Self::new(questions)
    }

    pub fn new(questions: Vec<Question>) -> Result<Self, QuizError> {
        if questions.is_empty() {
            return Err(QuizError::InvalidBank("no questions".to_string()));
        }
        if let Some((i, q)) = questions
            .iter()
            .enumerate()
            .find(|(_, q)| q.answer >= CHOICES_PER_QUESTION)
        {
            return Err(QuizError::InvalidBank(format!(
                "question {} has answer index {} but only {} choices",
                i + 1,
                q.answer,
                CHOICES_PER_QUESTION
            )));
        }
        Ok(Self { questions })
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }
}
