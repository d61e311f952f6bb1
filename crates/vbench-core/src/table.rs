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

//! In-memory benchmark result table.
//!
//! A result table is positional: the first column holds the selection key,
//! the following columns hold latency samples in microseconds (one per
//! repeated trial) and, depending on the [`TableShape`], the last column
//! holds recall as a fraction in `[0, 1]`.
//!
//! Tables are immutable once built. Derived values (statistics, reports)
//! are computed into separate structures and never written back.

use crate::error::{AnalysisError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Column layout of a result table.
///
/// Supplied by the caller rather than inferred from the column count.
///
/// # Examples
///
/// ```
/// use vbench_core::TableShape;
///
/// let shape = TableShape::top_k_sweep();
/// assert!(shape.has_recall_column);
/// assert_eq!(shape.key_column_name, "k");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableShape {
    /// Whether the last column is a recall fraction.
    pub has_recall_column: bool,
    /// Expected header of the first (key) column.
    pub key_column_name: String,
}

impl TableShape {
    /// Create a shape with an explicit key column name.
    pub fn new(key_column_name: impl Into<String>, has_recall_column: bool) -> Self {
        Self {
            has_recall_column,
            key_column_name: key_column_name.into(),
        }
    }

    /// Table written by the top-k sweep benchmark: one row per top-k value,
    /// keyed by `k`, recall in the last column.
    pub fn top_k_sweep() -> Self {
        Self::new("k", true)
    }

    /// Table written by the single-query benchmark: one row per query run,
    /// keyed by `id`, recall in the last column.
    pub fn single_query() -> Self {
        Self::new("id", true)
    }

    /// Minimum number of columns a table of this shape must have.
    pub fn min_columns(&self) -> usize {
        // key + one sample (+ recall)
        2 + usize::from(self.has_recall_column)
    }
}

impl Default for TableShape {
    fn default() -> Self {
        Self::top_k_sweep()
    }
}

/// One row of a result table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRow {
    /// Value of the key column (top-k value or run id).
    pub key: i64,
    /// Latency samples in microseconds, in trial order.
    pub samples: Vec<f64>,
    /// Recall fraction, present when the table shape has a recall column.
    pub recall: Option<f64>,
}

impl ResultRow {
    /// Create a row.
    pub fn new(key: i64, samples: Vec<f64>, recall: Option<f64>) -> Self {
        Self {
            key,
            samples,
            recall,
        }
    }

    /// Samples remaining after dropping the first `warmup` trials.
    ///
    /// Returns an empty slice when `warmup` covers every sample.
    pub fn window(&self, warmup: usize) -> &[f64] {
        self.samples.get(warmup..).unwrap_or(&[])
    }
}

/// A fully loaded benchmark result table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultTable {
    shape: TableShape,
    sample_columns: Vec<String>,
    rows: Vec<ResultRow>,
}

impl ResultTable {
    /// Build a table, validating that it is consistent with `shape`.
    ///
    /// `sample_columns` holds the header names of the sample columns, used
    /// for labelling only.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::MalformedTable`] when:
    /// - there are no sample columns
    /// - a row's sample count differs from the number of sample columns
    /// - a row's recall presence disagrees with the shape
    /// - a sample or recall value is not finite
    pub fn new(shape: TableShape, sample_columns: Vec<String>, rows: Vec<ResultRow>) -> Result<Self> {
        if sample_columns.is_empty() {
            return Err(AnalysisError::malformed("table has no sample columns"));
        }

        for (idx, row) in rows.iter().enumerate() {
            if row.samples.len() != sample_columns.len() {
                return Err(AnalysisError::malformed(format!(
                    "row {} (key {}) has {} samples, expected {}",
                    idx + 1,
                    row.key,
                    row.samples.len(),
                    sample_columns.len()
                )));
            }

            if row.recall.is_some() != shape.has_recall_column {
                return Err(AnalysisError::malformed(format!(
                    "row {} (key {}) recall presence does not match table shape",
                    idx + 1,
                    row.key
                )));
            }

            if let Some(pos) = row.samples.iter().position(|s| !s.is_finite()) {
                return Err(AnalysisError::malformed(format!(
                    "row {} (key {}) has non-finite sample at position {}",
                    idx + 1,
                    row.key,
                    pos
                )));
            }

            if row.recall.is_some_and(|r| !r.is_finite()) {
                return Err(AnalysisError::malformed(format!(
                    "row {} (key {}) has non-finite recall",
                    idx + 1,
                    row.key
                )));
            }
        }

        Ok(Self {
            shape,
            sample_columns,
            rows,
        })
    }

    /// Column layout this table was built with.
    pub fn shape(&self) -> &TableShape {
        &self.shape
    }

    /// Name of the key column.
    pub fn key_column(&self) -> &str {
        &self.shape.key_column_name
    }

    /// Header names of the sample columns.
    pub fn sample_columns(&self) -> &[String] {
        &self.sample_columns
    }

    /// Number of samples per row.
    pub fn sample_count(&self) -> usize {
        self.sample_columns.len()
    }

    /// Rows in file order.
    pub fn rows(&self) -> &[ResultRow] {
        &self.rows
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Look up the single row carrying `key`.
    ///
    /// Returns `Ok(None)` when no row matches.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::DuplicateKey`] when several rows match.
    pub fn get(&self, key: i64) -> Result<Option<&ResultRow>> {
        let mut matches = self.rows.iter().filter(|row| row.key == key);
        let first = matches.next();
        let extra = matches.count();

        if extra > 0 {
            return Err(AnalysisError::DuplicateKey {
                key,
                count: extra + 1,
            });
        }
        Ok(first)
    }

    /// Verify that no two rows share a key.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::DuplicateKey`] for the first key (in table
    /// order) that appears more than once.
    pub fn check_unique_keys(&self) -> Result<()> {
        let mut counts: HashMap<i64, usize> = HashMap::with_capacity(self.rows.len());
        for row in &self.rows {
            *counts.entry(row.key).or_default() += 1;
        }

        match self.rows.iter().find(|row| counts[&row.key] > 1) {
            Some(row) => Err(AnalysisError::DuplicateKey {
                key: row.key,
                count: counts[&row.key],
            }),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn columns(n: usize) -> Vec<String> {
        (1..=n).map(|i| format!("iter{} (us)", i)).collect()
    }

    fn sample_table() -> ResultTable {
        ResultTable::new(
            TableShape::top_k_sweep(),
            columns(3),
            vec![
                ResultRow::new(10, vec![1.0, 2.0, 3.0], Some(0.9)),
                ResultRow::new(50, vec![4.0, 5.0, 6.0], Some(0.95)),
                ResultRow::new(100, vec![7.0, 8.0, 9.0], Some(0.99)),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_shape_presets() {
        assert_eq!(TableShape::top_k_sweep().key_column_name, "k");
        assert_eq!(TableShape::single_query().key_column_name, "id");
        assert_eq!(TableShape::default(), TableShape::top_k_sweep());
        assert_eq!(TableShape::top_k_sweep().min_columns(), 3);
        assert_eq!(TableShape::new("run", false).min_columns(), 2);
    }

    #[test]
    fn test_table_accessors() {
        let table = sample_table();
        assert_eq!(table.len(), 3);
        assert!(!table.is_empty());
        assert_eq!(table.sample_count(), 3);
        assert_eq!(table.key_column(), "k");
        assert_eq!(table.rows()[1].key, 50);
    }

    #[test]
    fn test_get() {
        let table = sample_table();
        assert_eq!(table.get(50).unwrap().unwrap().samples, vec![4.0, 5.0, 6.0]);
        assert!(table.get(999).unwrap().is_none());
    }

    #[test]
    fn test_get_duplicate() {
        let table = ResultTable::new(
            TableShape::new("id", false),
            columns(1),
            vec![
                ResultRow::new(42, vec![1.0], None),
                ResultRow::new(42, vec![2.0], None),
            ],
        )
        .unwrap();

        assert_eq!(
            table.get(42).unwrap_err(),
            AnalysisError::DuplicateKey { key: 42, count: 2 }
        );
        assert!(table.check_unique_keys().is_err());
    }

    #[test]
    fn test_check_unique_keys_ok() {
        assert!(sample_table().check_unique_keys().is_ok());
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let err = ResultTable::new(
            TableShape::new("id", false),
            columns(2),
            vec![ResultRow::new(1, vec![1.0], None)],
        )
        .unwrap_err();
        assert!(matches!(err, AnalysisError::MalformedTable { .. }));
    }

    #[test]
    fn test_recall_presence_must_match_shape() {
        let err = ResultTable::new(
            TableShape::top_k_sweep(),
            columns(1),
            vec![ResultRow::new(1, vec![1.0], None)],
        )
        .unwrap_err();
        assert!(matches!(err, AnalysisError::MalformedTable { .. }));
    }

    #[test]
    fn test_non_finite_rejected() {
        let err = ResultTable::new(
            TableShape::new("id", false),
            columns(2),
            vec![ResultRow::new(1, vec![1.0, f64::NAN], None)],
        )
        .unwrap_err();
        assert!(err.to_string().contains("non-finite"));
    }

    #[test]
    fn test_no_sample_columns_rejected() {
        let err = ResultTable::new(TableShape::new("id", false), Vec::new(), Vec::new()).unwrap_err();
        assert!(matches!(err, AnalysisError::MalformedTable { .. }));
    }

    #[test]
    fn test_window() {
        let row = ResultRow::new(1, vec![1.0, 2.0, 3.0], None);
        assert_eq!(row.window(0), &[1.0, 2.0, 3.0]);
        assert_eq!(row.window(2), &[3.0]);
        assert!(row.window(3).is_empty());
        assert!(row.window(10).is_empty());
    }
}
