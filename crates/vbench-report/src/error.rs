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

//! Error types for report rendering.

use thiserror::Error;
use vbench_core::AnalysisError;

/// Result type alias for report operations.
pub type Result<T> = std::result::Result<T, ReportError>;

/// Report and chart rendering errors.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Statistics for a report row could not be computed.
    #[error(transparent)]
    Analysis(#[from] AnalysisError),

    /// The chart backend failed while drawing.
    #[error("Chart rendering error: {0}")]
    Chart(String),

    /// Report serialization failed.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// Unknown report format name.
    #[error("Unknown report format '{0}' (expected text, json or markdown)")]
    UnknownFormat(String),

    /// Writing an output file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ReportError {
    /// Create a chart error from any displayable backend error.
    pub fn chart(err: impl std::fmt::Display) -> Self {
        Self::Chart(err.to_string())
    }
}
