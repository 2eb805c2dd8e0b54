//! Complaint intake: form validation, scoring and triage ticket shaping.

pub mod form;
pub mod router;
pub mod samples;
pub mod service;
pub mod ticket;

#[cfg(test)]
mod tests;

pub use form::{parse_order_value, FieldErrors, IntakeForm};
pub use router::{intake_router, IntakeRequest, TicketActionRequest};
pub use samples::SampleComplaint;
pub use service::{IntakeError, IntakeService};
pub use ticket::{ComplaintTicket, ManualOverride, TicketAction, TicketId, TicketStatus};
