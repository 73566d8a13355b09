//! Ports - interfaces to external collaborators.
//!
//! The scoring engine itself is pure; the only outbound dependency is the
//! profile API that stores a user's questionnaire and risk result.

mod risk_profile_writer;

pub use risk_profile_writer::{ProfileRiskUpdate, RiskProfileWriter};
