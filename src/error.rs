use thiserror::Error;

/// Errors returned by the angle-pair and circle solvers.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolveError {
    #[error("Please enter a non-zero angle for this case.")]
    InsufficientInput,

    #[error("{0}")]
    InsufficientData(String),

    #[error("{value} is outside the accepted range [{min}, {max}]")]
    OutOfRange { value: f64, min: f64, max: f64 },
}

/// Errors raised by the quiz state machine and question bank loading.
#[derive(Error, Debug)]
pub enum QuizError {
    #[error("question {} has already been answered", .0 + 1)]
    AlreadyAnswered(usize),

    #[error("there is no question {}", .0 + 1)]
    UnknownQuestion(usize),

    #[error("choice {choice} does not exist for question {}", .question + 1)]
    InvalidChoice { question: usize, choice: usize },

    #[error("question bank is not valid JSON: {0}")]
    Bank(#[from] serde_json::Error),

    #[error("question bank is invalid: {0}")]
    InvalidBank(String),
}

/// Errors from parsing a typed number field in the terminal UI.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    #[error("{field}: '{text}' is not a number")]
    NotANumber { field: String, text: String },

    #[error("{field} must be between {min} and {max}")]
    OutOfBounds { field: String, min: f64, max: f64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insufficient_input_message() {
        assert_eq!(
            SolveError::InsufficientInput.to_string(),
            "Please enter a non-zero angle for this case."
        );
    }

    #[test]
    fn test_quiz_error_messages_are_one_based() {
        assert_eq!(
            QuizError::AlreadyAnswered(0).to_string(),
            "question 1 has already been answered"
        );
        assert_eq!(
            QuizError::InvalidChoice {
                question: 2,
                choice: 7
            }
            .to_string(),
            "choice 7 does not exist for question 3"
        );
    }
}
