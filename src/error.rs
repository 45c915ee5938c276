use thiserror::Error;
use validator::ValidationErrors;

use crate::models::Factor;

/// Errors raised by the checked matching facade
#[derive(Error, Debug)]
pub enum MatchError {
    #[error("Invalid actor {id}: {source}")]
    InvalidActor {
        id: String,
        #[source]
        source: ValidationErrors,
    },

    #[error("Invalid task {id}: {source}")]
    InvalidTask {
        id: String,
        #[source]
        source: ValidationErrors,
    },

    #[error("Too many {pool}: {len} exceeds limit of {max}")]
    PoolTooLarge {
        pool: &'static str,
        len: usize,
        max: usize,
    },
}

pub type MatcherResult<T> = Result<T, MatchError>;

/// Errors raised while loading a questionnaire or scoring answers
#[derive(Error, Debug)]
pub enum AssessmentError {
    #[error("Unknown question: {0}")]
    UnknownQuestion(u32),

    #[error("Question {question_id} has no option {option}")]
    UnknownOption { question_id: u32, option: usize },

    #[error("No answers for {}", .0.label())]
    MissingAnswers(Factor),

    #[error("Questionnaire parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid questionnaire: {0}")]
    InvalidQuestionnaire(String),
}

/// Errors raised while installing the tracing subscriber
#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("Invalid log filter: {0}")]
    Filter(#[from] tracing_subscriber::filter::ParseError),

    #[error("Failed to install subscriber: {0}")]
    Install(String),
}
