use axum::body::to_bytes;
use axum::response::Response;
use serde_json::Value;

use crate::config::IntakeConfig;
use crate::intake::{IntakeForm, IntakeService, SampleComplaint};

pub(super) fn intake_service() -> IntakeService {
    IntakeService::new(IntakeConfig {
        ticket_prefix: "TST".to_string(),
        default_sentiment: 40,
    })
}

pub(super) fn valid_form() -> IntakeForm {
    SampleComplaint::Defect.form()
}

pub(super) fn blank_form() -> IntakeForm {
    IntakeForm::default()
}

pub(super) async fn json_body(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    serde_json::from_slice(&bytes).expect("body is json")
}
