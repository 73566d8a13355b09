//! Risk profile engine command-line entry point.
//!
//! Reads one JSON request from stdin:
//!
//! ```json
//! { "answers": [3, 2, 4, 3, 2], "monthly_income": 85000,
//!   "factors": { "age": 34, "annual_income": 1020000, "dependents": 2, "horizon_years": 15 },
//!   "user_id": "jane@example.com", "access_token": "..." }
//! ```
//!
//! and writes the assessment (plus persona guidance when an income is given,
//! and the comprehensive score when profile factors are given) as JSON to
//! stdout. When `access_token` is present the assessment is also
//! saved to the configured profile API.

use std::error::Error;
use std::io::Read;
use std::sync::Arc;

use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use risk_profile_engine::adapters::{HttpProfileWriterConfig, HttpRiskProfileWriter};
use risk_profile_engine::application::{
    GetPersonaGuidanceHandler, GetPersonaGuidanceQuery, PersonaGuidance,
    SubmitRiskQuestionnaireCommand, SubmitRiskQuestionnaireHandler,
};
use risk_profile_engine::config::AppConfig;
use risk_profile_engine::domain::foundation::{CommandMetadata, UserId};
use risk_profile_engine::domain::risk::{
    ProfileFactors, QuestionnaireResponse, RiskAssessment, RiskLevelProfile, RiskScore,
};
use risk_profile_engine::telemetry;

#[derive(Debug, Deserialize)]
struct Request {
    answers: Value,
    #[serde(default)]
    monthly_income: Option<f64>,
    #[serde(default)]
    factors: Option<ProfileFactors>,
    #[serde(default)]
    user_id: Option<String>,
    #[serde(default)]
    access_token: Option<SecretString>,
}

#[derive(Debug, Serialize)]
struct Output {
    assessment: RiskAssessment,
    risk_level: RiskLevelProfile,
    saved: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    comprehensive_score: Option<RiskScore>,
    #[serde(skip_serializing_if = "Option::is_none")]
    persona: Option<PersonaGuidance>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load_validated()?;
    telemetry::init_tracing(&config.logging);

    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input)?;
    let request: Request = serde_json::from_str(&input)?;

    let (assessment, saved) = match request.access_token {
        Some(access_token) => {
            let writer = HttpRiskProfileWriter::new(HttpProfileWriterConfig::from(
                &config.profile_api,
            ))?;
            let handler = SubmitRiskQuestionnaireHandler::new(Arc::new(writer));
            let user_id = UserId::new(request.user_id.unwrap_or_else(|| "cli".to_string()))?;
            let metadata = CommandMetadata::new(user_id).with_source("cli");

            let result = handler
                .handle(
                    SubmitRiskQuestionnaireCommand {
                        answers: request.answers,
                        access_token,
                    },
                    metadata,
                )
                .await?;
            (result.assessment, true)
        }
        None => {
            let response = QuestionnaireResponse::from_json(&request.answers)?;
            (RiskAssessment::assess(response), false)
        }
    };

    let persona = request
        .monthly_income
        .map(|monthly_income| {
            GetPersonaGuidanceHandler::new().handle(GetPersonaGuidanceQuery { monthly_income })
        })
        .transpose()?;

    let comprehensive_score = request
        .factors
        .map(|factors| RiskScore::comprehensive(assessment.response(), &factors));

    let output = Output {
        risk_level: assessment.level_profile(),
        assessment,
        saved,
        comprehensive_score,
        persona,
    };
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}
