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

//! Analysis configuration.

use crate::table::TableShape;

/// Settings shared by every stage of one analysis run.
///
/// # Example
///
/// ```
/// use vbench_core::{AnalysisConfig, TableShape};
///
/// let config = AnalysisConfig::default()
///     .with_warmup(2)
///     .with_shape(TableShape::single_query());
/// assert_eq!(config.warmup, 2);
/// assert_eq!(config.shape.key_column_name, "id");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AnalysisConfig {
    /// Number of leading samples per row excluded from statistics.
    pub warmup: usize,
    /// Column layout of the input table.
    pub shape: TableShape,
}

impl AnalysisConfig {
    /// Set the warmup prefix length.
    pub fn with_warmup(mut self, warmup: usize) -> Self {
        self.warmup = warmup;
        self
    }

    /// Set the table shape.
    pub fn with_shape(mut self, shape: TableShape) -> Self {
        self.shape = shape;
        self
    }
}
