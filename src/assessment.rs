//! Skill assessment: turns questionnaire answers into a [`Profile`].
//!
//! Each question measures one factor and each option is worth 1-5 points.
//! A factor's score is the average of its answered points mapped from the
//! 1-5 scale onto 0-100.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;
use validator::Validate;

use crate::error::AssessmentError;
use crate::models::{Answer, Factor, Profile, Question};

const STANDARD_QUESTIONNAIRE: &str = include_str!("../data/questionnaire.toml");

const MIN_POINTS: f64 = 1.0;
const MAX_POINTS: f64 = 5.0;

/// A validated bank of assessment questions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Questionnaire {
    questions: Vec<Question>,
}

impl Questionnaire {
    /// The built-in twelve-question bank, two questions per factor
    pub fn standard() -> Result<Self, AssessmentError> {
        Self::from_toml(STANDARD_QUESTIONNAIRE)
    }

    /// Parse a question bank from TOML (`[[questions]]` tables)
    pub fn from_toml(source: &str) -> Result<Self, AssessmentError> {
        let questionnaire: Questionnaire = toml::from_str(source)?;
        questionnaire.check()?;
        Ok(questionnaire)
    }

    pub fn new(questions: Vec<Question>) -> Result<Self, AssessmentError> {
        let questionnaire = Self { questions };
        questionnaire.check()?;
        Ok(questionnaire)
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn question(&self, id: u32) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }

    /// Compute a profile from a set of answers
    ///
    /// Every factor needs at least one answer. Answering the same question
    /// twice counts both answers.
    pub fn score(&self, answers: &[Answer]) -> Result<Profile, AssessmentError> {
        let mut totals = [0u32; Factor::ALL.len()];
        let mut counts = [0u32; Factor::ALL.len()];

        for answer in answers {
            let question = self
                .question(answer.question_id)
                .ok_or(AssessmentError::UnknownQuestion(answer.question_id))?;
            let option = question
                .options
                .get(answer.selected_option)
                .ok_or(AssessmentError::UnknownOption {
                    question_id: answer.question_id,
                    option: answer.selected_option,
                })?;

            let slot = question.category as usize;
            totals[slot] += option.points as u32;
            counts[slot] += 1;
        }

        if let Some(factor) = Factor::ALL.into_iter().find(|&f| counts[f as usize] == 0) {
            return Err(AssessmentError::MissingAnswers(factor));
        }

        let profile = Profile::from_fn(|factor| {
            let slot = factor as usize;
            scale_to_percent(totals[slot] as f64 / counts[slot] as f64)
        });

        debug!(answers = answers.len(), ?profile, "Assessment scored");
        Ok(profile)
    }

    fn check(&self) -> Result<(), AssessmentError> {
        let mut seen = HashSet::new();
        for question in &self.questions {
            if !seen.insert(question.id) {
                return Err(AssessmentError::InvalidQuestionnaire(format!(
                    "duplicate question id {}",
                    question.id
                )));
            }
            question.validate().map_err(|e| {
                AssessmentError::InvalidQuestionnaire(format!("question {}: {}", question.id, e))
            })?;
        }

        for factor in Factor::ALL {
            if !self.questions.iter().any(|q| q.category == factor) {
                return Err(AssessmentError::InvalidQuestionnaire(format!(
                    "no questions for {}",
                    factor
                )));
            }
        }
        Ok(())
    }
}

/// Map an average on the 1-5 scale onto 0-100
#[inline]
fn scale_to_percent(average: f64) -> u8 {
    ((average - MIN_POINTS) / (MAX_POINTS - MIN_POINTS) * 100.0).round() as u8
}
