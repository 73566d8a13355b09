//! SubmitRiskQuestionnaire - Command handler for scoring and saving a questionnaire.

use std::sync::Arc;

use secrecy::SecretString;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::domain::foundation::{CommandMetadata, DomainError};
use crate::domain::risk::{QuestionnaireResponse, RiskAssessment};
use crate::ports::{ProfileRiskUpdate, RiskProfileWriter};

/// Command to score a questionnaire and store the result on the user's profile.
#[derive(Debug, Clone)]
pub struct SubmitRiskQuestionnaireCommand {
    /// Raw answers as received from the client.
    pub answers: Value,
    pub access_token: SecretString,
}

/// Result of a successful submission.
#[derive(Debug, Clone)]
pub struct SubmitRiskQuestionnaireResult {
    pub assessment: RiskAssessment,
}

/// Handler for questionnaire submissions.
pub struct SubmitRiskQuestionnaireHandler {
    writer: Arc<dyn RiskProfileWriter>,
}

impl SubmitRiskQuestionnaireHandler {
    pub fn new(writer: Arc<dyn RiskProfileWriter>) -> Self {
        Self { writer }
    }

    pub async fn handle(
        &self,
        cmd: SubmitRiskQuestionnaireCommand,
        metadata: CommandMetadata,
    ) -> Result<SubmitRiskQuestionnaireResult, DomainError> {
        let correlation_id = metadata.correlation_id();

        // 1. Validate strictly; out-of-range answers are rejected, not extrapolated
        let response = QuestionnaireResponse::from_json(&cmd.answers).map_err(|e| {
            warn!(
                user_id = %metadata.user_id,
                correlation_id = %correlation_id,
                malformed = e.is_malformed(),
                "Rejected questionnaire submission: {}",
                e
            );
            DomainError::from(e)
        })?;

        // 2. Score and band
        let assessment = RiskAssessment::assess(response);
        debug!(
            assessment_id = %assessment.id(),
            score = assessment.score().value(),
            level = %assessment.level(),
            "Scored questionnaire"
        );

        // 3. Persist to profile
        let update = ProfileRiskUpdate::try_from(&assessment)?;
        self.writer
            .save_risk_profile(&cmd.access_token, &update)
            .await?;

        info!(
            user_id = %metadata.user_id,
            correlation_id = %correlation_id,
            source = metadata.source().unwrap_or("unknown"),
            risk_score = update.risk_score,
            risk_level = %update.risk_level,
            "Saved risk profile"
        );

        Ok(SubmitRiskQuestionnaireResult { assessment })
    }
}
