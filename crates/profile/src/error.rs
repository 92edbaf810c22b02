use thiserror::Error;

pub type Result<T> = std::result::Result<T, ValidationError>;

/// Malformed or contradictory questionnaire answers. Always recoverable by
/// asking the user to re-answer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Unknown question id: {id}")]
    UnknownQuestion { id: String },

    #[error("Question {question} has no option '{value}'")]
    UnknownOption { question: String, value: String },

    #[error("Question {question} was answered with an empty selection")]
    EmptySelection { question: String },

    #[error("Question {question} selects '{value}' more than once")]
    DuplicateSelection { question: String, value: String },

    #[error("Question {question} allows at most {limit} selection(s), got {selected}")]
    TooManySelections {
        question: String,
        limit: usize,
        selected: usize,
    },
}
