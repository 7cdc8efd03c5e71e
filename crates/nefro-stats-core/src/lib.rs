//! Nefro-Stats Core Library
//!
//! Builds the nephrology department's statistics report from the four
//! dashboard endpoints and exports it for spreadsheets.
//!
//! # Architecture
//!
//! ```text
//!  /estadisticas   /estados   /demograficos   /laboratorios
//!        │             │             │               │
//!        └─────────────┴──────┬──────┴───────────────┘
//!                             │  { "data": ... } envelopes
//!                             ▼
//!                      ReportSources (fail fast on malformed input)
//!                             │
//!                             ▼
//!                ┌───────────────────────────┐
//!                │       build_report        │◀── MonthlyAggregator
//!                │  first-match lookups,     │    (datosMensuales)
//!                │  0 / "0%" fallbacks       │
//!                └─────────────┬─────────────┘
//!                              ▼
//!                      StatisticsReport
//!                              │
//!                 ┌────────────┴────────────┐
//!                 ▼                         ▼
//!            JSON export               CSV rows
//! ```
//!
//! # Core Principle
//!
//! **The transform never fails.** A category missing from a source list is
//! counted as `0` (and `"0%"`); structural problems are rejected earlier,
//! when the envelopes are parsed.
//!
//! # Modules
//!
//! - [`models`]: Source payloads, envelopes and the report shape
//! - [`transform`]: The aggregation transform and its lookup helpers
//! - [`monthly`]: Monthly laboratory aggregation collaborator
//! - [`export`]: JSON and CSV export

pub mod export;
pub mod models;
pub mod monthly;
pub mod transform;

// Re-export commonly used types
pub use export::{ReportExport, SpreadsheetRow};
pub use models::{NumericValue, ParsedInt, ReportSources, StatisticsReport};
pub use monthly::{CalendarMonthAverages, MonthlyAggregator, MonthlyRecord};
pub use transform::build_report;

use thiserror::Error;

/// Errors raised while reading sources or writing exports.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Malformed {envelope} payload: {message}")]
    MalformedInput {
        envelope: &'static str,
        message: String,
    },

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ReportResult<T> = Result<T, ReportError>;
