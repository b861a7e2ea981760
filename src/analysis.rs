//! CSV-backed analysis for the upload panels.
//!
//! Both panels share one pipeline: parse the upload into a [`Table`],
//! validate required columns, then compute a small report. Every failure is
//! scoped to the panel that triggered it.

pub mod classification;
pub mod log_summary;
pub mod table;

pub use classification::ClassificationReport;
pub use log_summary::LogSummary;
pub use table::{Table, TableError, ValidationError};

use thiserror::Error;

/// Failures computing a panel report from an uploaded table.
#[derive(Debug, Error)]
pub enum MetricsError {
    /// Required columns are absent.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// A required column could not be coerced or read.
    #[error(transparent)]
    Table(#[from] TableError),
    /// The upload parsed but carries no data rows.
    #[error("table has no data rows")]
    Empty,
}
