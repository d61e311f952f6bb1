// Dweve VBENCH - Vector search benchmark analysis
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Error types for result table loading.

use std::path::PathBuf;
use thiserror::Error;
use vbench_core::AnalysisError;

/// Result type alias for loading operations.
pub type Result<T> = std::result::Result<T, CsvError>;

/// Result table loading errors.
///
/// Every variant except [`CsvError::FileNotFound`] describes a structurally
/// invalid table and converts into
/// [`AnalysisError::MalformedTable`].
///
/// # Examples
///
/// ```
/// use vbench_csv::CsvError;
///
/// let err = CsvError::WidthMismatch {
///     expected: 5,
///     actual: 3,
///     row: 10,
/// };
/// assert!(err.to_string().contains("expected 5 columns"));
/// ```
#[derive(Debug, Error)]
pub enum CsvError {
    /// The input path does not exist.
    #[error("File not found: '{}'", path.display())]
    FileNotFound {
        /// Path that was requested.
        path: PathBuf,
    },

    /// The file has no header line.
    #[error("Result table is empty: no header line")]
    EmptyTable,

    /// CSV parsing error at a specific line.
    #[error("CSV parse error at line {line}: {message}")]
    ParseError {
        /// Line number where the error occurred (1-based).
        line: usize,
        /// Detailed error message.
        message: String,
    },

    /// First header does not name the expected key column.
    #[error("Key column mismatch: expected '{expected}', found '{found}'")]
    KeyColumnMismatch {
        /// Key column name required by the table shape.
        expected: String,
        /// First header actually present.
        found: String,
    },

    /// Header has fewer columns than the table shape needs.
    #[error("Too few columns: table shape needs at least {required}, header has {actual}")]
    TooFewColumns {
        /// Minimum number of columns for the shape.
        required: usize,
        /// Number of header columns.
        actual: usize,
    },

    /// Row has wrong number of columns.
    #[error("Row width mismatch: expected {expected} columns, got {actual} in row {row}")]
    WidthMismatch {
        /// Expected number of columns.
        expected: usize,
        /// Actual number of columns in the row.
        actual: usize,
        /// Data row number where the mismatch occurred (1-based).
        row: usize,
    },

    /// A cell could not be read as the number its column requires.
    #[error("Invalid {expected} in row {row}, column '{column}': '{value}'")]
    InvalidNumber {
        /// Data row number (1-based).
        row: usize,
        /// Header of the offending column.
        column: String,
        /// Kind of number the column holds.
        expected: &'static str,
        /// Raw cell content.
        value: String,
    },

    /// Row or column count exceeded the configured limit.
    #[error("Security limit exceeded: {what} count {actual} exceeds maximum {limit}")]
    SecurityLimit {
        /// What was counted (`row` or `column`).
        what: &'static str,
        /// Maximum allowed.
        limit: usize,
        /// Count encountered.
        actual: usize,
    },

    /// The parsed rows do not form a valid table.
    #[error("Invalid result table: {0}")]
    Table(#[from] AnalysisError),

    /// I/O error while reading.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error from underlying CSV library.
    #[error("CSV library error: {0}")]
    CsvLib(#[from] csv::Error),
}

impl CsvError {
    /// Whether this error describes a malformed table (as opposed to a
    /// missing file).
    pub fn is_malformed(&self) -> bool {
        match self {
            CsvError::FileNotFound { .. } => false,
            CsvError::EmptyTable
            | CsvError::ParseError { .. }
            | CsvError::KeyColumnMismatch { .. }
            | CsvError::TooFewColumns { .. }
            | CsvError::WidthMismatch { .. }
            | CsvError::InvalidNumber { .. }
            | CsvError::SecurityLimit { .. }
            | CsvError::Table(_)
            | CsvError::Io(_)
            | CsvError::CsvLib(_) => true,
        }
    }
}

impl From<CsvError> for AnalysisError {
    fn from(err: CsvError) -> Self {
        match err {
            CsvError::FileNotFound { path } => AnalysisError::FileNotFound { path },
            CsvError::Table(inner) => inner,
            other => AnalysisError::malformed(other.to_string()),
        }
    }
}
