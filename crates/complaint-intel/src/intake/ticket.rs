use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::scoring::{Channel, ComplaintCategory, Priority, Risk, ScoringResult, Severity};

/// Identifier wrapper for triage tickets.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TicketId(pub String);

/// Lifecycle states a complaint ticket can be in on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketStatus {
    Open,
    Resolved,
    Escalated,
    FollowupScheduled,
}

impl TicketStatus {
    pub fn label(&self) -> &'static str {
        match self {
            TicketStatus::Open => "Open",
            TicketStatus::Resolved => "Resolved",
            TicketStatus::Escalated => "Escalated",
            TicketStatus::FollowupScheduled => "Follow-up scheduled",
        }
    }
}

/// Actions an agent can take on an existing ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketAction {
    Resolve,
    Escalate,
    ScheduleFollowup,
}

impl TicketAction {
    pub fn target_status(self) -> TicketStatus {
        match self {
            TicketAction::Resolve => TicketStatus::Resolved,
            TicketAction::Escalate => TicketStatus::Escalated,
            TicketAction::ScheduleFollowup => TicketStatus::FollowupScheduled,
        }
    }
}

/// Agent adjustments to an engine assessment.
///
/// Overrides only ever touch the ticket's copy of the result; the engine
/// output they were derived from is left as it was.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ManualOverride {
    pub severity: Option<Severity>,
    pub priority: Option<Priority>,
    pub risk: Option<Risk>,
}

impl ManualOverride {
    pub fn is_empty(&self) -> bool {
        self.severity.is_none() && self.priority.is_none() && self.risk.is_none()
    }

    /// Returns an adjusted copy. Only the named fields change; the score,
    /// reasons and breakdown stay as the engine produced them.
    pub fn apply(&self, result: &ScoringResult) -> ScoringResult {
        let mut adjusted = result.clone();
        if let Some(severity) = self.severity {
            adjusted.severity = severity;
        }
        if let Some(priority) = self.priority {
            adjusted.priority = priority;
        }
        if let Some(risk) = self.risk {
            adjusted.risk = risk;
        }
        adjusted
    }
}

const CRITICAL_RISK_LEVEL: &str = "critical";

/// Triage ticket routed to the support queue after intake.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplaintTicket {
    pub id: TicketId,
    pub customer_name: String,
    pub contact: String,
    pub issue: ComplaintCategory,
    pub description: String,
    pub channel: Channel,
    pub timestamp: DateTime<Utc>,
    pub status: TicketStatus,
    pub risk_level: String,
    pub sentiment_score: u8,
    pub assessment: ScoringResult,
    pub overridden: bool,
    pub recommended_action: String,
}

impl ComplaintTicket {
    pub fn priority(&self) -> Priority {
        self.assessment.priority
    }

    /// Moves the ticket to the action's status. Escalation also marks the
    /// ticket critical; the assessment itself is not touched.
    pub fn apply_action(&mut self, action: TicketAction) -> TicketStatus {
        self.status = action.target_status();
        if action == TicketAction::Escalate {
            self.risk_level = CRITICAL_RISK_LEVEL.to_string();
        }
        self.status
    }

    pub fn summary(&self) -> String {
        format!(
            "{} [{}] {} risk, severity {}, score {}",
            self.id.0,
            self.assessment.priority,
            self.assessment.risk,
            self.assessment.severity,
            self.assessment.total_score
        )
    }
}
