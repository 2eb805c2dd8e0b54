use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;

use super::form::IntakeForm;
use super::service::{IntakeError, IntakeService};
use super::ticket::{ComplaintTicket, ManualOverride, TicketAction};
use crate::scoring::ComplaintInput;

/// Body accepted by the intake endpoint.
#[derive(Debug, Deserialize)]
pub struct IntakeRequest {
    pub form: IntakeForm,
    #[serde(default, rename = "override")]
    pub manual_override: Option<ManualOverride>,
}

/// Body accepted by the ticket action endpoint.
#[derive(Debug, Deserialize)]
pub struct TicketActionRequest {
    pub ticket: ComplaintTicket,
    pub action: TicketAction,
}

/// Router builder exposing HTTP endpoints for scoring and intake.
pub fn intake_router(service: Arc<IntakeService>) -> Router {
    Router::new()
        .route("/api/v1/complaints/score", post(score_handler))
        .route("/api/v1/complaints/intake", post(intake_handler))
        .route("/api/v1/complaints/actions", post(action_handler))
        .route("/api/v1/complaints/samples/:kind", get(sample_handler))
        .with_state(service)
}

pub(crate) async fn score_handler(
    State(service): State<Arc<IntakeService>>,
    Json(input): Json<ComplaintInput>,
) -> Response {
    let result = service.score(&input);
    (StatusCode::OK, Json(result)).into_response()
}

pub(crate) async fn intake_handler(
    State(service): State<Arc<IntakeService>>,
    Json(request): Json<IntakeRequest>,
) -> Response {
    match service.triage(request.form, request.manual_override) {
        Ok(ticket) => (StatusCode::CREATED, Json(ticket)).into_response(),
        Err(err) => intake_error_response(err),
    }
}

pub(crate) async fn action_handler(
    State(service): State<Arc<IntakeService>>,
    Json(request): Json<TicketActionRequest>,
) -> Response {
    let ticket = service.act(request.ticket, request.action);
    (StatusCode::OK, Json(ticket)).into_response()
}

pub(crate) async fn sample_handler(
    State(service): State<Arc<IntakeService>>,
    Path(kind): Path<String>,
) -> Response {
    match service.sample(&kind) {
        Ok(form) => (StatusCode::OK, Json(form)).into_response(),
        Err(err) => intake_error_response(err),
    }
}

fn intake_error_response(err: IntakeError) -> Response {
    let message = err.to_string();
    match err {
        IntakeError::Invalid(errors) => {
            let payload = json!({
                "error": "please fill in required fields",
                "fields": errors,
            });
            (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
        }
        IntakeError::UnknownSample(_) => {
            let payload = json!({
                "error": message,
            });
            (StatusCode::NOT_FOUND, Json(payload)).into_response()
        }
    }
}
