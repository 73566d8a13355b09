//! GetPersonaGuidance - Query handler for income-based budget and goal guidance.

use serde::Serialize;
use tracing::debug;

use crate::domain::foundation::DomainError;
use crate::domain::persona::{BudgetGuidance, GoalGuidance, MonthlyIncome, PersonaBucket};

/// Query for the guidance shown on the financial and goals steps.
#[derive(Debug, Clone, Copy)]
pub struct GetPersonaGuidanceQuery {
    pub monthly_income: f64,
}

/// Persona together with its budget split and savings targets.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PersonaGuidance {
    pub persona: PersonaBucket,
    pub monthly_income: MonthlyIncome,
    pub budget: BudgetGuidance,
    pub goals: GoalGuidance,
}

/// Stateless handler; guidance is a pure function of income.
#[derive(Debug, Clone, Copy, Default)]
pub struct GetPersonaGuidanceHandler;

impl GetPersonaGuidanceHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, query: GetPersonaGuidanceQuery) -> Result<PersonaGuidance, DomainError> {
        let income = MonthlyIncome::try_new(query.monthly_income)?;
        let persona = PersonaBucket::for_income(&income);
        debug!(persona = %persona, "Classified persona from income");

        Ok(PersonaGuidance {
            persona,
            monthly_income: income,
            budget: BudgetGuidance::for_income(&income),
            goals: GoalGuidance::for_income(&income),
        })
    }
}
