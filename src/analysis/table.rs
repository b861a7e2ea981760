//! Header-addressed tables parsed from comma-separated uploads.
//!
//! Nothing fancy: a header row names the columns, every following row must
//! have the same width, and values stay strings until a caller asks for a
//! numeric view. Column presence is checked explicitly so panels can show
//! which columns an upload is missing instead of silently skipping.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use thiserror::Error;

/// Errors reading or parsing an uploaded table.
#[derive(Debug, Error)]
pub enum TableError {
    /// Failed to read the upload.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// The upload is not a well-formed comma-separated table.
    #[error("parse error on line {line}: {reason}")]
    Parse {
        /// 1-based line number in the upload, counting the header.
        line: usize,
        /// Human-readable cause.
        reason: String,
    },
}

/// Required columns absent from an uploaded table.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("missing required column(s): {}", missing.join(", "))]
pub struct ValidationError {
    /// Every required column that was not found, in request order.
    pub missing: Vec<String>,
}

/// An uploaded table held column-wise under its header names.
#[derive(Debug, Clone)]
pub struct Table {
    headers: Vec<String>,
    columns: Vec<Vec<String>>,
    // 1-based source line of every data row; blank lines are skipped, so
    // row index and file line can diverge.
    source_lines: Vec<usize>,
}

impl Table {
    /// Parse a comma-separated file from disk.
    pub fn from_path(path: &Path) -> Result<Self, TableError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Parse a comma-separated table from any reader.
    ///
    /// The first line is the header; every later non-empty line must match
    /// its width. Values are trimmed of surrounding whitespace.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, TableError> {
        let mut lines = BufReader::new(reader).lines();
        let header_line = lines.next().transpose()?.ok_or(TableError::Parse {
            line: 1,
            reason: "empty file".into(),
        })?;
        let headers: Vec<String> = split_row(&header_line);
        if headers.iter().all(|h| h.is_empty()) {
            return Err(TableError::Parse {
                line: 1,
                reason: "empty header row".into(),
            });
        }
        let mut columns = vec![Vec::new(); headers.len()];
        let mut source_lines = Vec::new();
        for (index, line) in lines.enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let values = split_row(&line);
            if values.len() != headers.len() {
                return Err(TableError::Parse {
                    line: index + 2,
                    reason: format!(
                        "expected {} value(s), found {}",
                        headers.len(),
                        values.len()
                    ),
                });
            }
            source_lines.push(index + 2);
            for (column, value) in columns.iter_mut().zip(values) {
                column.push(value);
            }
        }
        Ok(Self {
            headers,
            columns,
            source_lines,
        })
    }

    /// Column names in file order.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Number of data rows.
    pub fn row_count(&self) -> usize {
        self.columns.first().map(|c| c.len()).unwrap_or(0)
    }

    /// Borrow a column by header name, if present.
    pub fn column(&self, name: &str) -> Option<&[String]> {
        let index = self.headers.iter().position(|h| h == name)?;
        self.columns.get(index).map(|c| c.as_slice())
    }

    /// Check that every required column exists, reporting all absentees.
    pub fn require_columns(&self, required: &[&str]) -> Result<(), ValidationError> {
        let missing: Vec<String> = required
            .iter()
            .filter(|name| !self.headers.iter().any(|h| h == *name))
            .map(|name| (*name).to_string())
            .collect();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(ValidationError { missing })
        }
    }

    /// Borrow several required columns at once, in request order.
    pub fn columns(&self, required: &[&str]) -> Result<Vec<&[String]>, ValidationError> {
        self.require_columns(required)?;
        Ok(required
            .iter()
            .filter_map(|name| self.column(name))
            .collect())
    }

    /// Coerce a column to `f64`, naming the first offending line on failure.
    pub fn numeric_column(&self, name: &str) -> Result<Vec<f64>, TableError> {
        let Some(values) = self.column(name) else {
            return Err(TableError::Parse {
                line: 1,
                reason: format!("unknown column {name:?}"),
            });
        };
        values
            .iter()
            .enumerate()
            .map(|(row, value)| {
                value.parse::<f64>().map_err(|_| TableError::Parse {
                    line: self.source_lines.get(row).copied().unwrap_or(row + 2),
                    reason: format!("column {name:?} value {value:?} is not numeric"),
                })
            })
            .collect()
    }
}

fn split_row(line: &str) -> Vec<String> {
    line.split(',').map(|value| value.trim().to_string()).collect()
}
