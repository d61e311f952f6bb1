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

//! Error types for benchmark result analysis.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for analysis operations.
pub type Result<T> = std::result::Result<T, AnalysisError>;

/// Fatal conditions raised while analysing a benchmark result table.
///
/// A requested key that matches no row is deliberately absent from this
/// enum: it is reported as [`Selection::NotFound`](crate::Selection) and the
/// analysis carries on with the remaining keys.
///
/// # Examples
///
/// ```
/// use vbench_core::AnalysisError;
///
/// let err = AnalysisError::MissingParameter { name: "ef".to_string() };
/// assert_eq!(err.to_string(), "Missing run parameter 'ef' in file name");
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    /// A required `name_digits` token is absent from the file name.
    #[error("Missing run parameter '{name}' in file name")]
    MissingParameter {
        /// Token name without the trailing underscore (`dim`, `nb`, `m`, `ef`).
        name: String,
    },

    /// Run parameters were found but cannot be used.
    ///
    /// Raised for token values that overflow their integer type and for
    /// sidecar metadata files that are not valid JSON parameter records.
    #[error("Invalid run metadata from '{origin}': {reason}")]
    InvalidMetadata {
        /// File name or sidecar path the metadata came from.
        origin: String,
        /// What was wrong with it.
        reason: String,
    },

    /// The input file does not exist.
    #[error("File not found: '{}'", path.display())]
    FileNotFound {
        /// Path that was requested.
        path: PathBuf,
    },

    /// The table is structurally invalid (ragged rows, non-numeric cells,
    /// missing key column, ...).
    #[error("Malformed result table: {reason}")]
    MalformedTable {
        /// Detailed description, usually carrying row and column positions.
        reason: String,
    },

    /// More than one row shares a key. Signals upstream data corruption;
    /// neither row is ever picked.
    #[error("Duplicate key {key}: {count} rows share it")]
    DuplicateKey {
        /// The duplicated key value.
        key: i64,
        /// Number of rows carrying that key.
        count: usize,
    },

    /// The warmup prefix leaves no samples to summarise.
    #[error("Insufficient samples for key {key}: warmup {warmup} leaves nothing of {available} samples")]
    InsufficientSamples {
        /// Key of the row being summarised.
        key: i64,
        /// Requested warmup prefix length.
        warmup: usize,
        /// Number of samples in the row.
        available: usize,
    },
}

impl AnalysisError {
    /// Create a malformed-table error.
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedTable {
            reason: reason.into(),
        }
    }

    /// Create a missing-parameter error for the given token name.
    pub fn missing_parameter(name: impl Into<String>) -> Self {
        Self::MissingParameter { name: name.into() }
    }

    /// Create an invalid-metadata error.
    pub fn invalid_metadata(origin: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidMetadata {
            origin: origin.into(),
            reason: reason.into(),
        }
    }
}
