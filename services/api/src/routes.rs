use crate::infra::AppState;
use axum::body::Bytes;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use complaint_intel::batch::{score_reader, BatchRow, BatchSummary};
use complaint_intel::error::AppError;
use complaint_intel::intake::{intake_router, IntakeService};
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;
use tracing::info;

#[derive(Debug, Serialize)]
pub(crate) struct BatchResponse {
    pub(crate) summary: BatchSummary,
    pub(crate) rows: Vec<BatchRow>,
}

pub(crate) fn with_service_routes(service: Arc<IntakeService>) -> axum::Router {
    intake_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/complaints/batch",
            axum::routing::post(batch_endpoint),
        )
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

/// Accepts a raw CSV export body and returns every scored row plus counts.
/// Bodies that are not UTF-8 surface as CSV errors.
pub(crate) async fn batch_endpoint(body: Bytes) -> Result<Json<BatchResponse>, AppError> {
    let rows = score_reader(&body[..])?;
    let summary = BatchSummary::from_rows(&rows);
    info!(
        total = summary.total,
        high_risk = summary.high_risk,
        "batch request scored"
    );
    Ok(Json(BatchResponse { summary, rows }))
}
