//! Questionnaire response value object and validation.
//!
//! Shape problems (not a sequence, wrong length, non-integer elements) and
//! range problems (an integer outside 1-4) are reported as distinct
//! [`QuestionnaireError`] variants so callers can tell a malformed payload
//! from a well-formed one with a bad answer.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use super::questions::{MAX_ANSWER, MIN_ANSWER, QUESTIONS, QUESTION_COUNT};
use crate::domain::foundation::{DomainError, ErrorCode};

/// Reasons a questionnaire submission is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuestionnaireError {
    #[error("Questionnaire must be a sequence of answers")]
    NotASequence,

    #[error("Questionnaire must have exactly {expected} answers, got {actual}")]
    WrongLength { expected: usize, actual: usize },

    #[error("Answer at position {position} is not an integer")]
    NotAnInteger { position: usize },

    #[error("Answer at position {position} must be between {min} and {max}, got {value}")]
    OutOfRange {
        position: usize,
        value: i64,
        min: i64,
        max: i64,
    },
}

impl QuestionnaireError {
    /// True for shape failures, false for range failures.
    pub fn is_malformed(&self) -> bool {
        !matches!(self, QuestionnaireError::OutOfRange { .. })
    }
}

impl From<QuestionnaireError> for DomainError {
    fn from(err: QuestionnaireError) -> Self {
        let kind = if err.is_malformed() {
            "malformed"
        } else {
            "out_of_range"
        };
        DomainError::new(ErrorCode::InvalidQuestionnaire, err.to_string())
            .with_detail("field", "questionnaire")
            .with_detail("kind", kind)
    }
}

/// A validated answer vector: exactly five answers, each in 1-4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<i64>", into = "Vec<u8>")]
pub struct QuestionnaireResponse([u8; QUESTION_COUNT]);

impl QuestionnaireResponse {
    /// Validates raw integer answers.
    pub fn try_new(answers: &[i64]) -> Result<Self, QuestionnaireError> {
        if answers.len() != QUESTION_COUNT {
            return Err(QuestionnaireError::WrongLength {
                expected: QUESTION_COUNT,
                actual: answers.len(),
            });
        }

        let mut validated = [0u8; QUESTION_COUNT];
        for (position, (&answer, slot)) in answers.iter().zip(validated.iter_mut()).enumerate() {
            if !(MIN_ANSWER..=MAX_ANSWER).contains(&answer) {
                return Err(QuestionnaireError::OutOfRange {
                    position,
                    value: answer,
                    min: MIN_ANSWER,
                    max: MAX_ANSWER,
                });
            }
            *slot = answer as u8;
        }

        Ok(Self(validated))
    }

    /// Validates an untyped JSON payload.
    ///
    /// Integral floats such as `2.0` are accepted; `1.5`, strings, booleans
    /// and nulls are not.
    pub fn from_json(value: &Value) -> Result<Self, QuestionnaireError> {
        let items = value.as_array().ok_or(QuestionnaireError::NotASequence)?;
        if items.len() != QUESTION_COUNT {
            return Err(QuestionnaireError::WrongLength {
                expected: QUESTION_COUNT,
                actual: items.len(),
            });
        }

        let answers = items
            .iter()
            .enumerate()
            .map(|(position, item)| {
                json_integer(item).ok_or(QuestionnaireError::NotAnInteger { position })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::try_new(&answers)
    }

    pub fn answers(&self) -> &[u8; QUESTION_COUNT] {
        &self.0
    }

    /// Answers widened for scoring.
    pub fn as_i64(&self) -> [i64; QUESTION_COUNT] {
        self.0.map(i64::from)
    }

    /// Option text chosen at each position, in question order.
    pub fn option_labels(&self) -> Vec<&'static str> {
        QUESTIONS
            .iter()
            .zip(self.0.iter())
            .filter_map(|(question, &answer)| question.option_label(i64::from(answer)))
            .collect()
    }
}

impl TryFrom<Vec<i64>> for QuestionnaireResponse {
    type Error = QuestionnaireError;

    fn try_from(answers: Vec<i64>) -> Result<Self, Self::Error> {
        Self::try_new(&answers)
    }
}

impl From<QuestionnaireResponse> for Vec<u8> {
    fn from(response: QuestionnaireResponse) -> Self {
        response.0.to_vec()
    }
}

fn json_integer(value: &Value) -> Option<i64> {
    let Value::Number(number) = value else {
        return None;
    };
    if let Some(i) = number.as_i64() {
        return Some(i);
    }
    let f = number.as_f64()?;
    if f.fract() == 0.0 && f >= i64::MIN as f64 && f <= i64::MAX as f64 {
        Some(f as i64)
    } else {
        None
    }
}

/// True iff `value` is a sequence of exactly five integers, each in 1-4.
pub fn validate_questionnaire(value: &Value) -> bool {
    QuestionnaireResponse::from_json(value).is_ok()
}
