//! RiskAssessment - a scored, banded questionnaire submission.

use serde::{Deserialize, Serialize};

use super::level::{RiskLevel, RiskLevelProfile};
use super::questionnaire::{QuestionnaireError, QuestionnaireResponse};
use super::score::RiskScore;
use crate::domain::foundation::{AssessmentId, Timestamp, ValidationError};

/// Outcome of scoring one validated questionnaire submission.
///
/// The score is always in 0-100 and the level agrees with it. Deserialized
/// assessments are re-scored from their response and rejected on mismatch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "StoredAssessment")]
pub struct RiskAssessment {
    id: AssessmentId,
    response: QuestionnaireResponse,
    score: RiskScore,
    level: RiskLevel,
    assessed_at: Timestamp,
}

/// Wire shape of an assessment before its derived fields are checked.
#[derive(Deserialize)]
struct StoredAssessment {
    id: AssessmentId,
    response: QuestionnaireResponse,
    score: RiskScore,
    level: RiskLevel,
    assessed_at: Timestamp,
}

impl TryFrom<StoredAssessment> for RiskAssessment {
    type Error = ValidationError;

    fn try_from(stored: StoredAssessment) -> Result<Self, Self::Error> {
        if !stored.score.is_in_bounds() {
            return Err(ValidationError::out_of_range(
                "score",
                RiskScore::MIN.value(),
                RiskScore::MAX.value(),
                stored.score.value(),
            ));
        }

        let expected = RiskScore::from_response(&stored.response);
        if stored.score != expected {
            return Err(ValidationError::invalid_format(
                "score",
                format!("expected {} for the stored response, got {}", expected, stored.score),
            ));
        }
        if stored.level != expected.level() {
            return Err(ValidationError::invalid_format(
                "level",
                format!("expected {} for score {}, got {}", expected.level(), expected, stored.level),
            ));
        }

        Ok(Self {
            id: stored.id,
            response: stored.response,
            score: stored.score,
            level: stored.level,
            assessed_at: stored.assessed_at,
        })
    }
}

impl RiskAssessment {
    pub fn assess(response: QuestionnaireResponse) -> Self {
        Self::assess_at(response, Timestamp::now())
    }

    pub fn assess_at(response: QuestionnaireResponse, assessed_at: Timestamp) -> Self {
        let score = RiskScore::from_response(&response);
        Self {
            id: AssessmentId::new(),
            response,
            score,
            level: score.level(),
            assessed_at,
        }
    }

    /// Strict path: rejects malformed or out-of-range answers.
    pub fn from_answers(answers: &[i64]) -> Result<Self, QuestionnaireError> {
        Ok(Self::assess(QuestionnaireResponse::try_new(answers)?))
    }

    pub fn id(&self) -> &AssessmentId {
        &self.id
    }

    pub fn response(&self) -> &QuestionnaireResponse {
        &self.response
    }

    pub fn score(&self) -> RiskScore {
        self.score
    }

    pub fn level(&self) -> RiskLevel {
        self.level
    }

    pub fn level_profile(&self) -> RiskLevelProfile {
        self.level.profile()
    }

    pub fn assessed_at(&self) -> &Timestamp {
        &self.assessed_at
    }
}
