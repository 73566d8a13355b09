//! Risk module - questionnaire scoring and risk level banding.
//!
//! A five-answer questionnaire response is reduced to a weighted 0-100
//! score, which is then banded into one of five [`RiskLevel`]s.
//!
//! # Invariants
//!
//! 1. Weights are constant and sum to 100
//! 2. A validated response always scores within 0-100
//! 3. Raising any single answer never lowers the score
//! 4. Level rank is a non-decreasing step function of the score
//!
//! All operations are pure functions over their arguments.

pub mod assessment;
pub mod comprehensive;
pub mod level;
pub mod questionnaire;
pub mod questions;
pub mod score;

pub use assessment::RiskAssessment;
pub use comprehensive::{calculate_comprehensive_risk_score, ProfileFactors};
pub use level::{
    get_risk_level, get_risk_level_numeric, get_risk_level_string, RiskLevel, RiskLevelProfile,
};
pub use questionnaire::{validate_questionnaire, QuestionnaireError, QuestionnaireResponse};
pub use questions::{
    RiskQuestion, MAX_ANSWER, MIN_ANSWER, QUESTIONS, QUESTION_COUNT, RISK_WEIGHTS,
};
pub use score::{calculate_risk_score, RiskScore};
