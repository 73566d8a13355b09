//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors)
//! - `risk` - Questionnaire scoring and risk level banding
//! - `persona` - Income persona classification and budget/goal guidance

pub mod foundation;
pub mod persona;
pub mod risk;
