//! Persona module - income-based persona buckets and guidance.
//!
//! Independent of the risk module: a persona is derived from monthly income
//! alone and selects the budget split and savings targets shown during
//! onboarding. There is exactly one threshold table,
//! [`PersonaThresholds::CANONICAL`].

pub mod bucket;
pub mod guidance;
pub mod income;

pub use bucket::{classify_persona, PersonaBucket, PersonaThresholds};
pub use guidance::{BudgetGuidance, BudgetSplit, GoalGuidance};
pub use income::{MonthlyIncome, MAX_PLAUSIBLE_INCOME, MIN_PLAUSIBLE_INCOME};
