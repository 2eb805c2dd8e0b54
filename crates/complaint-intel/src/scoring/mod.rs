//! Deterministic complaint scoring.
//!
//! A complaint is scored by summing independent rule components (category,
//! keywords, repeat flag, customer tier, order value, channel), capping the
//! total at 100, and bucketing that total into severity, priority and risk.
//! Every call is pure: no I/O, no clock, no shared state.

pub mod domain;
pub mod policy;
mod rules;
pub mod weights;

#[cfg(test)]
mod tests;

pub use domain::{Channel, ComplaintCategory, ComplaintInput, CustomerTier};
pub use policy::{Priority, Risk, Severity};
pub use weights::{KEYWORD_SCORE_CAP, KEYWORD_WEIGHTS, TOTAL_SCORE_CAP};

use serde::{Deserialize, Serialize};

/// Point contributions behind a total score, kept for explainability.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub base_score: u32,
    pub category_score: u32,
    pub keyword_score: u32,
    pub repeat_score: u32,
    pub tier_score: u32,
    pub value_score: u32,
    pub channel_score: u32,
}

impl ScoreBreakdown {
    /// Sum of all components before the total cap is applied.
    pub fn raw_total(&self) -> u32 {
        self.base_score
            + self.category_score
            + self.keyword_score
            + self.repeat_score
            + self.tier_score
            + self.value_score
            + self.channel_score
    }

    pub fn total(&self) -> u32 {
        self.raw_total().min(TOTAL_SCORE_CAP)
    }

    /// Components folded into the four groups shown on the results screen.
    pub fn groups(&self) -> [BreakdownGroup; 4] {
        [
            BreakdownGroup {
                label: "Keywords",
                points: self.keyword_score,
            },
            BreakdownGroup {
                label: "Category",
                points: self.category_score,
            },
            BreakdownGroup {
                label: "Customer Value",
                points: self.value_score + self.tier_score,
            },
            BreakdownGroup {
                label: "Context",
                points: self.repeat_score + self.channel_score,
            },
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BreakdownGroup {
    pub label: &'static str,
    pub points: u32,
}

/// Classification produced for a single complaint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringResult {
    pub total_score: u32,
    pub severity: Severity,
    pub priority: Priority,
    pub risk: Risk,
    pub reasons: Vec<String>,
    pub breakdown: ScoreBreakdown,
}

/// Scores a complaint. Total over every well-formed input; unknown category,
/// channel and tier values use their fallback weights.
pub fn score_complaint(input: &ComplaintInput) -> ScoringResult {
    let (breakdown, reasons) = rules::score_input(input);
    let total_score = breakdown.total();
    let severity = Severity::from_score(total_score);

    ScoringResult {
        total_score,
        severity,
        priority: severity.priority(),
        risk: severity.risk(),
        reasons,
        breakdown,
    }
}
