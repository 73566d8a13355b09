//! RiskProfileWriter port for persisting assessments to the user profile.

use async_trait::async_trait;
use secrecy::SecretString;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, ValidationError};
use crate::domain::risk::{RiskAssessment, RiskScore};

/// Profile fields written after a questionnaire is scored.
///
/// Serializes to the body of `PUT /auth/profile`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileRiskUpdate {
    pub questionnaire: Vec<u8>,
    pub risk_score: u8,
    pub risk_level: String,
}

impl TryFrom<&RiskAssessment> for ProfileRiskUpdate {
    type Error = DomainError;

    fn try_from(assessment: &RiskAssessment) -> Result<Self, Self::Error> {
        let score = assessment.score();
        let risk_score = score.as_percent().ok_or_else(|| {
            ValidationError::out_of_range(
                "risk_score",
                RiskScore::MIN.value(),
                RiskScore::MAX.value(),
                score.value(),
            )
        })?;

        Ok(Self {
            questionnaire: assessment.response().answers().to_vec(),
            risk_score,
            risk_level: assessment.level().label().to_string(),
        })
    }
}

/// Persists risk results under the authenticated user's profile.
#[async_trait]
pub trait RiskProfileWriter: Send + Sync {
    /// Write the risk fields of the caller's profile.
    async fn save_risk_profile(
        &self,
        access_token: &SecretString,
        update: &ProfileRiskUpdate,
    ) -> Result<(), DomainError>;
}
