//! Fixed risk questionnaire catalogue.
//!
//! Position in [`QUESTIONS`] is significant: answers are submitted as an
//! ordered vector and each position carries the weight listed here.

use serde::Serialize;

/// Number of questions in the risk questionnaire.
pub const QUESTION_COUNT: usize = 5;

/// Lowest answer value (the first option of a question).
pub const MIN_ANSWER: i64 = 1;

/// Highest answer value (the last option of a question).
pub const MAX_ANSWER: i64 = 4;

/// Per-position weights. Must sum to 100.
pub const RISK_WEIGHTS: [u8; QUESTION_COUNT] = [25, 20, 30, 15, 10];

/// A single multiple-choice risk question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RiskQuestion {
    pub id: &'static str,
    pub text: &'static str,
    /// Options ordered from most conservative (answer 1) to most aggressive (answer 4).
    pub options: [&'static str; 4],
    pub weight: u8,
}

impl RiskQuestion {
    /// Label for an answer value, if the value names one of the options.
    pub fn option_label(&self, answer: i64) -> Option<&'static str> {
        if !(MIN_ANSWER..=MAX_ANSWER).contains(&answer) {
            return None;
        }
        self.options.get((answer - MIN_ANSWER) as usize).copied()
    }
}

pub const QUESTIONS: [RiskQuestion; QUESTION_COUNT] = [
    RiskQuestion {
        id: "q1",
        text: "What is your primary investment objective?",
        options: [
            "Capital preservation",
            "Income generation",
            "Capital appreciation",
            "Speculation",
        ],
        weight: RISK_WEIGHTS[0],
    },
    RiskQuestion {
        id: "q2",
        text: "What is your investment horizon?",
        options: [
            "Less than 1 year",
            "1-3 years",
            "3-5 years",
            "More than 5 years",
        ],
        weight: RISK_WEIGHTS[1],
    },
    RiskQuestion {
        id: "q3",
        text: "How would you react to a 20% drop in your portfolio value?",
        options: [
            "Sell all investments",
            "Sell some investments",
            "Hold investments",
            "Buy more investments",
        ],
        weight: RISK_WEIGHTS[2],
    },
    RiskQuestion {
        id: "q4",
        text: "Which best describes your knowledge of investments?",
        options: ["None", "Limited", "Good", "Extensive"],
        weight: RISK_WEIGHTS[3],
    },
    RiskQuestion {
        id: "q5",
        text: "How much of your income are you willing to risk for higher returns?",
        options: ["None", "Less than 10%", "10-25%", "More than 25%"],
        weight: RISK_WEIGHTS[4],
    },
];
