use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;
use tracing::{debug, info, warn};

use super::form::{FieldErrors, IntakeForm};
use super::samples::SampleComplaint;
use super::ticket::{ComplaintTicket, ManualOverride, TicketAction, TicketId, TicketStatus};
use crate::config::IntakeConfig;
use crate::scoring::{score_complaint, ComplaintInput, ScoringResult};

static TICKET_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_ticket_id(prefix: &str) -> TicketId {
    let id = TICKET_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    TicketId(format!("{prefix}-{id:06}"))
}

/// Service composing form validation, the scoring engine and ticket shaping.
#[derive(Debug, Clone, Default)]
pub struct IntakeService {
    config: IntakeConfig,
}

impl IntakeService {
    pub fn new(config: IntakeConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &IntakeConfig {
        &self.config
    }

    /// Scores an already structured complaint.
    pub fn score(&self, input: &ComplaintInput) -> ScoringResult {
        let result = score_complaint(input);
        debug!(
            category = %input.category,
            total_score = result.total_score,
            priority = %result.priority,
            "complaint scored"
        );
        result
    }

    /// Validates and scores an intake form, applying any agent overrides to
    /// the ticket's copy of the assessment.
    pub fn triage(
        &self,
        form: IntakeForm,
        manual_override: Option<ManualOverride>,
    ) -> Result<ComplaintTicket, IntakeError> {
        if let Err(errors) = form.validate() {
            warn!(fields = %errors.summary(), "intake form rejected");
            return Err(IntakeError::Invalid(errors));
        }

        let assessment = self.score(&form.to_input());
        let manual_override = manual_override.filter(|adjustment| !adjustment.is_empty());
        let overridden = manual_override.is_some();
        let assessment = match manual_override {
            Some(adjustment) => adjustment.apply(&assessment),
            None => assessment,
        };

        let ticket = ComplaintTicket {
            id: next_ticket_id(&self.config.ticket_prefix),
            customer_name: form.customer_name.trim().to_string(),
            contact: form.contact.trim().to_string(),
            issue: form.category,
            description: form.complaint_text,
            channel: form.channel,
            timestamp: Utc::now(),
            status: TicketStatus::Open,
            risk_level: assessment.risk.level().to_string(),
            sentiment_score: self.config.default_sentiment,
            recommended_action: assessment.priority.recommended_action().to_string(),
            assessment,
            overridden,
        };

        info!(
            ticket_id = %ticket.id.0,
            priority = %ticket.assessment.priority,
            risk = %ticket.assessment.risk,
            total_score = ticket.assessment.total_score,
            overridden,
            "complaint triaged"
        );

        Ok(ticket)
    }

    /// Applies an agent action to a ticket and returns the updated copy.
    pub fn act(&self, mut ticket: ComplaintTicket, action: TicketAction) -> ComplaintTicket {
        let previous = ticket.status;
        let status = ticket.apply_action(action);
        info!(
            ticket_id = %ticket.id.0,
            from = previous.label(),
            to = status.label(),
            "ticket status changed"
        );
        ticket
    }

    /// Looks up one of the canned demo complaints by name.
    pub fn sample(&self, name: &str) -> Result<IntakeForm, IntakeError> {
        name.parse::<SampleComplaint>()
            .map(SampleComplaint::form)
            .map_err(IntakeError::UnknownSample)
    }
}

/// Error raised by the intake service.
#[derive(Debug, thiserror::Error)]
pub enum IntakeError {
    #[error("complaint intake failed validation: {}", .0.summary())]
    Invalid(FieldErrors),
    #[error("unknown sample complaint '{0}'")]
    UnknownSample(String),
}
