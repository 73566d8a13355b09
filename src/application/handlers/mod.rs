//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod get_persona_guidance;
pub mod submit_risk_questionnaire;

pub use get_persona_guidance::{
    GetPersonaGuidanceHandler, GetPersonaGuidanceQuery, PersonaGuidance,
};
pub use submit_risk_questionnaire::{
    SubmitRiskQuestionnaireCommand, SubmitRiskQuestionnaireHandler,
    SubmitRiskQuestionnaireResult,
};
