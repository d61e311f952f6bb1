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


//! Structured error types for the vbench CLI.

use std::io;
use std::path::PathBuf;
use thiserror::Error;
use vbench_core::AnalysisError;
use vbench_csv::CsvError;
use vbench_report::ReportError;

/// The main error type for vbench CLI operations.
///
/// Analysis failures keep their own messages; `main` prints every variant
/// as `Error: <message>` and exits with a failure status.
///
/// # Examples
///
/// ```
/// use vbench_cli::CliError;
/// use vbench_core::AnalysisError;
///
/// let err: CliError = AnalysisError::MissingParameter { name: "nb".into() }.into();
/// assert_eq!(err.to_string(), "Missing run parameter 'nb' in file name");
/// ```
#[derive(Error, Debug)]
pub enum CliError {
    /// Metadata, table, selection or statistics failure.
    #[error(transparent)]
    Analysis(#[from] AnalysisError),

    /// Report or chart output failed.
    #[error(transparent)]
    Report(#[from] ReportError),

    /// I/O operation failed (metadata access, stdout).
    #[error("I/O error for '{path}': {message}")]
    Io {
        /// The file path that caused the error
        path: PathBuf,
        /// The error message
        message: String,
    },

    /// Input file exceeds the configured size limit.
    #[error("File '{path}' is too large ({actual} bytes). Maximum allowed: {max} bytes ({max_mb} MB)")]
    FileTooLarge {
        /// The file path that exceeded the limit
        path: PathBuf,
        /// The actual file size in bytes
        actual: u64,
        /// The maximum allowed file size in bytes
        max: u64,
        /// The maximum allowed file size in MB (for display)
        max_mb: u64,
    },

    /// Invalid command-line input.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(String),
}

impl CliError {
    /// Create an I/O error with path context.
    pub fn io_error(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }

    /// Create a file-too-large error.
    pub fn file_too_large(path: impl Into<PathBuf>, actual: u64, max: u64) -> Self {
        Self::FileTooLarge {
            path: path.into(),
            actual,
            max,
            max_mb: max / (1024 * 1024),
        }
    }

    /// Create an invalid input error.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}

impl From<CsvError> for CliError {
    fn from(err: CsvError) -> Self {
        Self::Analysis(err.into())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(source: serde_json::Error) -> Self {
        Self::Json(source.to_string())
    }
}
