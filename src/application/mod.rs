//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates with ports.
//! Commands (questionnaire submission) write through a port; queries
//! (persona guidance) are answered from the domain alone.

pub mod handlers;

pub use handlers::{
    GetPersonaGuidanceHandler, GetPersonaGuidanceQuery, PersonaGuidance,
    SubmitRiskQuestionnaireCommand, SubmitRiskQuestionnaireHandler,
    SubmitRiskQuestionnaireResult,
};
