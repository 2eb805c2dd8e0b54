//! Batch scoring of complaint CSV exports.
//!
//! Input columns are `Id` (optional), `Text`, `Category`, `Channel`,
//! `Customer Tier`, `Order Value` and `Repeat`. Blank cells fall back to the
//! intake defaults.

mod parser;

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use serde::Serialize;
use tracing::info;

use crate::scoring::{score_complaint, Priority, Risk, ScoringResult};
use parser::parse_records;

/// One scored line of a batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchRow {
    pub id: String,
    pub result: ScoringResult,
}

/// Scores every complaint in a CSV stream, preserving input order.
pub fn score_reader<R: Read>(reader: R) -> Result<Vec<BatchRow>, BatchError> {
    let records = parse_records(reader)?;
    let rows: Vec<BatchRow> = records
        .into_iter()
        .map(|record| BatchRow {
            result: score_complaint(&record.input),
            id: record.id,
        })
        .collect();

    info!(rows = rows.len(), "complaint batch scored");
    Ok(rows)
}

pub fn score_path<P: AsRef<Path>>(path: P) -> Result<Vec<BatchRow>, BatchError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| BatchError::Io {
        path: path.display().to_string(),
        source,
    })?;
    score_reader(file)
}

#[derive(Debug, Serialize)]
struct ResultLine<'a> {
    id: &'a str,
    total_score: u32,
    severity: u8,
    priority: &'static str,
    risk: &'static str,
    reasons: String,
}

/// Writes scored rows as CSV with reasons joined by `; `.
pub fn write_results<W: Write>(writer: W, rows: &[BatchRow]) -> Result<(), BatchError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for row in rows {
        csv_writer.serialize(ResultLine {
            id: &row.id,
            total_score: row.result.total_score,
            severity: row.result.severity.level(),
            priority: row.result.priority.label(),
            risk: row.result.risk.label(),
            reasons: row.result.reasons.join("; "),
        })?;
    }
    csv_writer.flush().map_err(BatchError::Write)?;
    Ok(())
}

/// Counts of a batch by risk and priority.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    pub total: usize,
    pub high_risk: usize,
    pub medium_risk: usize,
    pub low_risk: usize,
    /// Complaint counts for P1 through P4, in that order.
    pub by_priority: [usize; 4],
}

impl BatchSummary {
    pub fn from_rows(rows: &[BatchRow]) -> Self {
        let mut summary = BatchSummary {
            total: rows.len(),
            ..BatchSummary::default()
        };

        for row in rows {
            match row.result.risk {
                Risk::High => summary.high_risk += 1,
                Risk::Medium => summary.medium_risk += 1,
                Risk::Low => summary.low_risk += 1,
            }
            let slot = match row.result.priority {
                Priority::P1 => 0,
                Priority::P2 => 1,
                Priority::P3 => 2,
                Priority::P4 => 3,
            };
            summary.by_priority[slot] += 1;
        }

        summary
    }
}

/// Error raised while reading or writing a batch.
#[derive(Debug, thiserror::Error)]
pub enum BatchError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write batch results: {0}")]
    Write(#[source] std::io::Error),
    #[error("malformed complaint csv: {0}")]
    Csv(#[from] csv::Error),
}
