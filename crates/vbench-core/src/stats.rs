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

//! Latency statistics over the post-warmup sample window.
//!
//! All statistics of a row are computed over the same slice: the samples
//! that remain after dropping the first `warmup` trials. The recall column
//! is never part of that slice.
//!
//! - **mean**: arithmetic mean
//! - **p95 / p99**: percentiles with linear interpolation between closest
//!   ranks (`rank = p / 100 * (n - 1)`)
//! - **variance**: population variance (divides by `n`)

use crate::error::{AnalysisError, Result};
use crate::table::{ResultRow, ResultTable};
use serde::{Deserialize, Serialize};

/// Summary statistics for one row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatisticsSummary {
    /// Key of the summarised row.
    pub key: i64,
    /// Number of samples in the window.
    pub window_len: usize,
    /// Mean latency (us).
    pub mean: f64,
    /// 95th percentile latency (us).
    pub p95: f64,
    /// 99th percentile latency (us).
    pub p99: f64,
    /// Population variance (us^2).
    pub variance: f64,
    /// Smallest sample in the window (us).
    pub min: f64,
    /// Largest sample in the window (us).
    pub max: f64,
    /// Recall as a percentage, when the row has a recall value.
    pub recall_percent: Option<f64>,
}

/// Percentile of an ascending-sorted slice, interpolating linearly between
/// the two closest ranks.
///
/// `p` is clamped to `[0, 100]`. Returns `None` for an empty slice.
///
/// # Examples
///
/// ```
/// use vbench_core::stats::percentile;
///
/// let sorted = [100.0, 200.0, 300.0, 400.0, 500.0];
/// assert_eq!(percentile(&sorted, 50.0), Some(300.0));
/// assert!((percentile(&sorted, 95.0).unwrap() - 480.0).abs() < 1e-9);
/// ```
pub fn percentile(sorted: &[f64], p: f64) -> Option<f64> {
    let last = sorted.len().checked_sub(1)?;
    let rank = p.clamp(0.0, 100.0) / 100.0 * last as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    let frac = rank - lo as f64;
    Some(sorted[lo] + (sorted[hi] - sorted[lo]) * frac)
}

/// Arithmetic mean. Returns `None` for an empty slice.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Population variance (divides by `n`). Returns `None` for an empty slice.
pub fn population_variance(values: &[f64]) -> Option<f64> {
    let mean = mean(values)?;
    let sum_sq: f64 = values
        .iter()
        .map(|v| {
            let diff = v - mean;
            diff * diff
        })
        .sum();
    Some(sum_sq / values.len() as f64)
}

/// Summarise one row, skipping the first `warmup` samples.
///
/// # Errors
///
/// Returns [`AnalysisError::InsufficientSamples`] when `warmup` is at least
/// the number of samples in the row.
///
/// # Examples
///
/// ```
/// use vbench_core::{summarize, ResultRow};
///
/// let row = ResultRow::new(10, vec![100.0, 200.0, 300.0, 400.0, 500.0], Some(0.5));
/// let summary = summarize(&row, 0).unwrap();
/// assert_eq!(summary.mean, 300.0);
/// assert_eq!(summary.variance, 20000.0);
/// assert_eq!(summary.recall_percent, Some(50.0));
/// ```
pub fn summarize(row: &ResultRow, warmup: usize) -> Result<StatisticsSummary> {
    let window = row.window(warmup);
    if window.is_empty() {
        return Err(AnalysisError::InsufficientSamples {
            key: row.key,
            warmup,
            available: row.samples.len(),
        });
    }

    let mut sorted = window.to_vec();
    sorted.sort_by(f64::total_cmp);

    let n = sorted.len();
    // the window is non-empty, so none of these fall back
    let mean = mean(&sorted).unwrap_or_default();

    Ok(StatisticsSummary {
        key: row.key,
        window_len: n,
        mean,
        p95: percentile(&sorted, 95.0).unwrap_or(mean),
        p99: percentile(&sorted, 99.0).unwrap_or(mean),
        variance: population_variance(&sorted).unwrap_or_default(),
        min: sorted[0],
        max: sorted[n - 1],
        recall_percent: row.recall.map(|r| r * 100.0),
    })
}

/// Summarise every row of `table`, in table order.
///
/// Fails on the first row whose window is empty; never returns a partial
/// result.
pub fn summarize_all(table: &ResultTable, warmup: usize) -> Result<Vec<StatisticsSummary>> {
    table
        .rows()
        .iter()
        .map(|row| summarize(row, warmup))
        .collect()
}
