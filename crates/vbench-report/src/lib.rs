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


//! Reports for vector search benchmark results.
//!
//! Turns the statistics computed by `vbench-core` into something a person
//! reads: a summary table (plain text, JSON or Markdown) and an SVG chart
//! of the per-row latency traces.
//!
//! # Example
//!
//! ```
//! use vbench_core::{extract, ResultRow, ResultTable, TableShape};
//! use vbench_report::{render, ReportFormat, SummaryReport};
//!
//! let params = extract("dim_960_nb_1000000_m_16_ef_200.csv").unwrap();
//! let table = ResultTable::new(
//!     TableShape::top_k_sweep(),
//!     vec!["iter1 (us)".into(), "iter2 (us)".into()],
//!     vec![ResultRow::new(10, vec![900.0, 120.0], Some(0.9))],
//! )
//! .unwrap();
//!
//! let report = SummaryReport::from_table(params, &table, 1).unwrap();
//! let text = render(&report, ReportFormat::Text).unwrap();
//! assert!(text.contains("mean (us)"));
//! ```

pub mod chart;
mod error;
mod format;
mod json;
mod markdown;
mod types;

// Re-export public API
pub use chart::{render_chart, ChartConfig, ChartPanel, CHART_Y_MARGIN_US, DEFAULT_CHART_FILE};
pub use error::{ReportError, Result};
pub use format::{export, render, ReportFormat};
pub use json::to_json_string;
pub use markdown::to_markdown;
pub use types::{ReportRow, SummaryReport, VALUE_HEADERS};
