use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::Factor;

/// Multiple-choice assessment question measuring one factor
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Question {
    pub id: u32,
    #[validate(length(min = 1))]
    pub text: String,
    pub category: Factor,
    #[validate(length(min = 1))]
    #[validate(nested)]
    pub options: Vec<AnswerOption>,
}

/// One selectable answer and the points it is worth (1-5)
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AnswerOption {
    pub text: String,
    #[validate(range(min = 1, max = 5))]
    pub points: u8,
}

/// A respondent's pick for one question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    #[serde(rename = "questionId")]
    pub question_id: u32,
    #[serde(rename = "selectedOption")]
    pub selected_option: usize,
}

impl Answer {
    pub fn new(question_id: u32, selected_option: usize) -> Self {
        Self { question_id, selected_option }
    }
}
