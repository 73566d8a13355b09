//! Persona-specific budget and goal guidance.
//!
//! Suggested amounts are whole shillings, rounded from fixed fractions or
//! multiples of the validated monthly income.

use serde::Serialize;

use super::bucket::PersonaBucket;
use super::income::MonthlyIncome;

/// Share of monthly income suggested for each expense line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BudgetSplit {
    pub rent: f64,
    pub utilities: f64,
    pub groceries: f64,
    pub transport: f64,
    pub loan_repayments: f64,
}

impl BudgetSplit {
    pub fn for_persona(persona: PersonaBucket) -> Self {
        match persona {
            PersonaBucket::EarlyCareer => Self {
                rent: 0.30,
                utilities: 0.08,
                groceries: 0.15,
                transport: 0.12,
                loan_repayments: 0.15,
            },
            PersonaBucket::FamilyBusiness => Self {
                rent: 0.25,
                utilities: 0.07,
                groceries: 0.20,
                transport: 0.10,
                loan_repayments: 0.08,
            },
            PersonaBucket::SeniorExecutive => Self {
                rent: 0.20,
                utilities: 0.05,
                groceries: 0.12,
                transport: 0.08,
                loan_repayments: 0.05,
            },
            PersonaBucket::General => Self {
                rent: 0.28,
                utilities: 0.08,
                groceries: 0.15,
                transport: 0.10,
                loan_repayments: 0.10,
            },
        }
    }

    /// Combined share of income allocated to the listed expenses.
    pub fn total(&self) -> f64 {
        self.rent + self.utilities + self.groceries + self.transport + self.loan_repayments
    }
}

/// Suggested monthly expense amounts for a persona.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetGuidance {
    pub persona: PersonaBucket,
    pub rent: u64,
    pub utilities: u64,
    pub groceries: u64,
    pub transport: u64,
    pub loan_repayments: u64,
    pub tips: &'static [&'static str],
}

impl BudgetGuidance {
    pub fn for_income(income: &MonthlyIncome) -> Self {
        let persona = PersonaBucket::for_income(income);
        let split = BudgetSplit::for_persona(persona);
        let monthly = income.value();

        Self {
            persona,
            rent: share(monthly, split.rent),
            utilities: share(monthly, split.utilities),
            groceries: share(monthly, split.groceries),
            transport: share(monthly, split.transport),
            loan_repayments: share(monthly, split.loan_repayments),
            tips: budget_tips(persona),
        }
    }

    pub fn total(&self) -> u64 {
        self.rent + self.utilities + self.groceries + self.transport + self.loan_repayments
    }
}

fn budget_tips(persona: PersonaBucket) -> &'static [&'static str] {
    match persona {
        PersonaBucket::EarlyCareer => &[
            "Focus on building emergency fund first",
            "Prioritize high-interest debt payoff",
            "Consider shared living to reduce rent costs",
        ],
        PersonaBucket::FamilyBusiness => &[
            "Budget for children's education expenses",
            "Consider property investment opportunities",
            "Account for irregular business income",
        ],
        PersonaBucket::SeniorExecutive => &[
            "Maximize retirement contributions",
            "Consider tax-advantaged investments",
            "Plan for healthcare cost increases",
        ],
        PersonaBucket::General => &["Build a balanced budget that works for your lifestyle"],
    }
}

/// Suggested savings targets for a persona.
///
/// Targets that do not apply to a persona are `None`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GoalGuidance {
    pub persona: PersonaBucket,
    pub emergency_fund: u64,
    pub retirement: u64,
    pub investment: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debt_payoff: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub education: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub home_down_payment: Option<u64>,
    /// Goals in recommended order of priority.
    pub priorities: [&'static str; 3],
    pub tips: &'static [&'static str],
}

impl GoalGuidance {
    pub fn for_income(income: &MonthlyIncome) -> Self {
        let persona = PersonaBucket::for_income(income);
        let monthly = income.value();
        let annual = income.annual();

        match persona {
            PersonaBucket::EarlyCareer => Self {
                persona,
                emergency_fund: share(monthly, 3.0),
                retirement: share(annual, 8.0),
                investment: share(annual, 0.10),
                debt_payoff: Some(share(annual, 0.30)),
                education: None,
                home_down_payment: None,
                priorities: ["Emergency Fund", "Debt Payoff", "Investment"],
                tips: &[
                    "Start with 3-month emergency fund",
                    "Focus on high-interest debt first",
                    "Begin with small, consistent investments",
                ],
            },
            PersonaBucket::FamilyBusiness => Self {
                persona,
                emergency_fund: share(monthly, 6.0),
                retirement: share(annual, 10.0),
                investment: share(annual, 0.20),
                debt_payoff: None,
                education: Some(share(annual, 0.15)),
                home_down_payment: Some(share(annual, 0.50)),
                priorities: ["Emergency Fund", "Education Fund", "Property Investment"],
                tips: &[
                    "Larger emergency fund for family security",
                    "Education fund grows tax-free",
                    "Real estate can provide rental income",
                ],
            },
            PersonaBucket::SeniorExecutive => Self {
                persona,
                emergency_fund: share(monthly, 12.0),
                retirement: share(annual, 15.0),
                investment: share(annual, 0.30),
                debt_payoff: None,
                education: Some(share(annual, 0.10)),
                home_down_payment: None,
                priorities: [
                    "Retirement Maximization",
                    "Investment Portfolio",
                    "Legacy Planning",
                ],
                tips: &[
                    "Maximize retirement contributions now",
                    "Diversify investment portfolio",
                    "Plan for healthcare costs",
                ],
            },
            PersonaBucket::General => Self {
                persona,
                emergency_fund: share(monthly, 6.0),
                retirement: share(annual, 10.0),
                investment: share(annual, 0.15),
                debt_payoff: None,
                education: None,
                home_down_payment: None,
                priorities: ["Emergency Fund", "Retirement", "Investment"],
                tips: &["Build a balanced financial foundation"],
            },
        }
    }
}

// Income is validated finite and positive, so the cast cannot wrap.
fn share(amount: f64, factor: f64) -> u64 {
    (amount * factor).round() as u64
}
