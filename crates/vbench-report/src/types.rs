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

//! Derived summary report.
//!
//! A [`SummaryReport`] is built from a loaded table and its statistics. It
//! is a separate value: the table itself is never extended with the
//! derived columns.

use serde::{Deserialize, Serialize};
use std::fmt;
use vbench_core::{summarize_all, ResultTable, RunParameters, StatisticsSummary};

/// Column headers of the printed report, after the key column.
pub const VALUE_HEADERS: [&str; 5] = ["recall (%)", "var", "mean (us)", "p95 (us)", "p99 (us)"];

/// One line of the summary report.
///
/// Field order matches the printed column order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReportRow {
    /// Row key (top-k value or run id).
    pub key: i64,
    /// Recall in percent, when the table has a recall column.
    pub recall_percent: Option<f64>,
    /// Population variance of the window (us^2).
    pub variance: f64,
    /// Mean latency (us).
    pub mean: f64,
    /// 95th percentile latency (us).
    pub p95: f64,
    /// 99th percentile latency (us).
    pub p99: f64,
}

impl From<&StatisticsSummary> for ReportRow {
    fn from(summary: &StatisticsSummary) -> Self {
        Self {
            key: summary.key,
            recall_percent: summary.recall_percent,
            variance: summary.variance,
            mean: summary.mean,
            p95: summary.p95,
            p99: summary.p99,
        }
    }
}

/// Per-row latency statistics of one result file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryReport {
    /// Run parameters of the benchmark.
    pub params: RunParameters,
    /// Name of the key column (`k`, `id`, ...).
    pub key_column: String,
    /// Warmup samples excluded from every row.
    pub warmup: usize,
    /// One entry per table row, in table order.
    pub rows: Vec<ReportRow>,
}

impl SummaryReport {
    /// Build a report from precomputed summaries.
    pub fn new(
        params: RunParameters,
        key_column: impl Into<String>,
        warmup: usize,
        summaries: &[StatisticsSummary],
    ) -> Self {
        Self {
            params,
            key_column: key_column.into(),
            warmup,
            rows: summaries.iter().map(ReportRow::from).collect(),
        }
    }

    /// Summarise every row of `table` and build the report.
    ///
    /// # Errors
    ///
    /// Fails with [`AnalysisError::InsufficientSamples`](vbench_core::AnalysisError)
    /// when `warmup` leaves some row without samples.
    pub fn from_table(
        params: RunParameters,
        table: &ResultTable,
        warmup: usize,
    ) -> vbench_core::Result<Self> {
        let summaries = summarize_all(table, warmup)?;
        Ok(Self::new(params, table.key_column(), warmup, &summaries))
    }

    /// Header shown for the key column.
    ///
    /// The top-k sweep's terse `k` is spelled out as `top k`.
    pub fn key_label(&self) -> &str {
        if self.key_column == "k" {
            "top k"
        } else {
            &self.key_column
        }
    }

    /// Header row followed by formatted cells, one vector per report row.
    pub(crate) fn cells(&self) -> (Vec<String>, Vec<Vec<String>>) {
        let mut headers = vec![self.key_label().to_string()];
        headers.extend(VALUE_HEADERS.iter().map(|h| h.to_string()));

        let body = self
            .rows
            .iter()
            .map(|row| {
                vec![
                    row.key.to_string(),
                    row.recall_percent
                        .map(|r| format!("{:.3}", r))
                        .unwrap_or_else(|| "-".to_string()),
                    format!("{:.3}", row.variance),
                    format!("{:.3}", row.mean),
                    format!("{:.3}", row.p95),
                    format!("{:.3}", row.p99),
                ]
            })
            .collect();

        (headers, body)
    }
}

impl fmt::Display for SummaryReport {
    /// Plain-text table with right-aligned columns.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (headers, body) = self.cells();

        let mut widths: Vec<usize> = headers.iter().map(String::len).collect();
        for line in &body {
            for (width, cell) in widths.iter_mut().zip(line) {
                *width = (*width).max(cell.len());
            }
        }

        writeln!(f, "{} (warmup {})", self.params, self.warmup)?;

        let header_line: Vec<String> = headers
            .iter()
            .zip(&widths)
            .map(|(h, w)| format!("{:>width$}", h, width = *w))
            .collect();
        writeln!(f, "{}", header_line.join("  "))?;

        for line in &body {
            let cells: Vec<String> = line
                .iter()
                .zip(&widths)
                .map(|(c, w)| format!("{:>width$}", c, width = *w))
                .collect();
            writeln!(f, "{}", cells.join("  "))?;
        }
        Ok(())
    }
}
