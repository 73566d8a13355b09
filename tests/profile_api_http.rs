//! Integration tests for the HTTP profile writer.
//!
//! These tests run the writer and the submission handler against a local
//! mock of the backend profile API:
//! 1. The PUT body carries questionnaire, risk_score and risk_level
//! 2. The caller's bearer token is forwarded
//! 3. Non-success statuses map to domain error codes

use std::sync::Arc;
use std::time::Duration;

use secrecy::SecretString;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use risk_profile_engine::adapters::{HttpProfileWriterConfig, HttpRiskProfileWriter};
use risk_profile_engine::application::{
    SubmitRiskQuestionnaireCommand, SubmitRiskQuestionnaireHandler,
};
use risk_profile_engine::domain::foundation::{CommandMetadata, ErrorCode, UserId};
use risk_profile_engine::domain::risk::RiskLevel;
use risk_profile_engine::ports::{ProfileRiskUpdate, RiskProfileWriter};

// =============================================================================
// Test Infrastructure
// =============================================================================

fn token() -> SecretString {
    SecretString::new("secret-token".to_string())
}

fn writer_for(server: &MockServer) -> HttpRiskProfileWriter {
    HttpRiskProfileWriter::new(
        HttpProfileWriterConfig::new(server.uri()).with_timeout(Duration::from_secs(2)),
    )
    .unwrap()
}

fn sample_update() -> ProfileRiskUpdate {
    ProfileRiskUpdate {
        questionnaire: vec![3, 2, 4, 3, 2],
        risk_score: 67,
        risk_level: "High".to_string(),
    }
}

fn metadata() -> CommandMetadata {
    CommandMetadata::new(UserId::new("jane@example.com").unwrap()).with_source("onboarding")
}

// =============================================================================
// Writer
// =============================================================================

#[tokio::test]
async fn writer_puts_profile_body_with_bearer_token() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/auth/profile"))
        .and(header("authorization", "Bearer secret-token"))
        .and(body_json(json!({
            "questionnaire": [3, 2, 4, 3, 2],
            "risk_score": 67,
            "risk_level": "High"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .expect(1)
        .mount(&server)
        .await;

    let result = writer_for(&server)
        .save_risk_profile(&token(), &sample_update())
        .await;

    assert!(result.is_ok(), "unexpected error: {:?}", result.err());
}

#[tokio::test]
async fn writer_maps_unauthorized() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/auth/profile"))
        .respond_with(ResponseTemplate::new(401).set_body_string("invalid token"))
        .mount(&server)
        .await;

    let err = writer_for(&server)
        .save_risk_profile(&token(), &sample_update())
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::Unauthorized);
    assert_eq!(err.details.get("status"), Some(&"401".to_string()));
}

#[tokio::test]
async fn writer_maps_unprocessable_entity_to_validation() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/auth/profile"))
        .respond_with(ResponseTemplate::new(422).set_body_string("risk_score: bad"))
        .mount(&server)
        .await;

    let err = writer_for(&server)
        .save_risk_profile(&token(), &sample_update())
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::ValidationFailed);
    assert!(err.message().contains("risk_score: bad"));
}

#[tokio::test]
async fn writer_maps_server_error_to_external_service() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/auth/profile"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = writer_for(&server)
        .save_risk_profile(&token(), &sample_update())
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::ExternalService);
}

#[tokio::test]
async fn writer_reports_timeout() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/auth/profile"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
        .mount(&server)
        .await;

    let writer = HttpRiskProfileWriter::new(
        HttpProfileWriterConfig::new(server.uri()).with_timeout(Duration::from_millis(200)),
    )
    .unwrap();

    let err = writer
        .save_risk_profile(&token(), &sample_update())
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::Timeout);
}

// =============================================================================
// Handler wired to HTTP writer
// =============================================================================

#[tokio::test]
async fn submission_end_to_end_saves_assessment() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/auth/profile"))
        .and(body_json(json!({
            "questionnaire": [4, 4, 4, 4, 4],
            "risk_score": 100,
            "risk_level": "Very High"
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let handler = SubmitRiskQuestionnaireHandler::new(Arc::new(writer_for(&server)));
    let result = handler
        .handle(
            SubmitRiskQuestionnaireCommand {
                answers: json!([4, 4, 4, 4, 4]),
                access_token: token(),
            },
            metadata(),
        )
        .await
        .unwrap();

    assert_eq!(result.assessment.level(), RiskLevel::VeryHigh);
}

#[tokio::test]
async fn invalid_submission_makes_no_request() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let handler = SubmitRiskQuestionnaireHandler::new(Arc::new(writer_for(&server)));
    let err = handler
        .handle(
            SubmitRiskQuestionnaireCommand {
                answers: json!([1, 2, 3]),
                access_token: token(),
            },
            metadata(),
        )
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::InvalidQuestionnaire);
}
