//! Complaint Intelligence Engine: rule-based complaint scoring, intake triage
//! and batch scoring, plus the configuration and telemetry the API service
//! is assembled from.

pub mod batch;
pub mod config;
pub mod error;
pub mod intake;
pub mod scoring;
pub mod telemetry;
