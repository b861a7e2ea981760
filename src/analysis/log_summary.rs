//! Descriptive statistics for uploaded LLM log tables.

use super::MetricsError;
use super::table::Table;

/// Per-request latency column. Unit is whatever the upload used.
pub const LATENCY_COLUMN: &str = "latency";
/// Per-request token count column.
pub const TOKENS_COLUMN: &str = "tokens";

/// Averages rendered by the LLM Systems panel.
#[derive(Debug, Clone, PartialEq)]
pub struct LogSummary {
    /// Arithmetic mean of the `latency` column.
    pub avg_latency: f64,
    /// Arithmetic mean of the `tokens` column.
    pub avg_tokens: f64,
    /// Number of summarized rows.
    pub rows: usize,
}

impl LogSummary {
    /// Summarize a log table. No outlier handling, no windowing.
    pub fn from_table(table: &Table) -> Result<Self, MetricsError> {
        table.require_columns(&[LATENCY_COLUMN, TOKENS_COLUMN])?;
        let latency = table.numeric_column(LATENCY_COLUMN)?;
        let tokens = table.numeric_column(TOKENS_COLUMN)?;
        if latency.is_empty() {
            return Err(MetricsError::Empty);
        }
        Ok(Self {
            avg_latency: mean(&latency),
            avg_tokens: mean(&tokens),
            rows: latency.len(),
        })
    }
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}
