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

//! Key-based row selection.

use crate::error::Result;
use crate::table::{ResultRow, ResultTable};
use tracing::{debug, warn};

/// Outcome of looking up one requested key.
#[derive(Debug, Clone, PartialEq)]
pub enum Selection<'a> {
    /// Exactly one row carries the key.
    Found {
        /// The requested key.
        key: i64,
        /// The matching row.
        row: &'a ResultRow,
    },
    /// No row carries the key. Not an error: callers may request a superset
    /// of keys across heterogeneous files.
    NotFound {
        /// The requested key.
        key: i64,
    },
}

impl<'a> Selection<'a> {
    /// The key that was requested.
    pub fn key(&self) -> i64 {
        match self {
            Selection::Found { key, .. } | Selection::NotFound { key } => *key,
        }
    }

    /// The matching row, if any.
    pub fn row(&self) -> Option<&'a ResultRow> {
        match self {
            Selection::Found { row, .. } => Some(row),
            Selection::NotFound { .. } => None,
        }
    }

    /// Whether a row was found.
    pub fn is_found(&self) -> bool {
        matches!(self, Selection::Found { .. })
    }

    /// Collect the found rows of `selections`, keeping request order.
    pub fn found_rows(selections: &[Selection<'a>]) -> Vec<&'a ResultRow> {
        selections.iter().filter_map(Selection::row).collect()
    }
}

/// Look up each of `keys` in `table`.
///
/// The result has one entry per requested key, in the order the keys were
/// given (not table order). A key with no match yields
/// [`Selection::NotFound`] and a warning; processing continues.
///
/// # Errors
///
/// Returns [`AnalysisError::DuplicateKey`](crate::AnalysisError::DuplicateKey)
/// when any requested key matches more than one row. Neither row is returned.
///
/// # Examples
///
/// ```
/// use vbench_core::{select_by_key, ResultRow, ResultTable, TableShape};
///
/// let table = ResultTable::new(
///     TableShape::new("k", false),
///     vec!["iter1 (us)".to_string()],
///     vec![ResultRow::new(10, vec![1.0], None), ResultRow::new(50, vec![2.0], None)],
/// )
/// .unwrap();
///
/// let selected = select_by_key(&table, &[50, 999]).unwrap();
/// assert!(selected[0].is_found());
/// assert!(!selected[1].is_found());
/// ```
pub fn select_by_key<'a>(table: &'a ResultTable, keys: &[i64]) -> Result<Vec<Selection<'a>>> {
    let mut selections = Vec::with_capacity(keys.len());

    for &key in keys {
        match table.get(key)? {
            Some(row) => {
                debug!(key, column = table.key_column(), "selected row");
                selections.push(Selection::Found { key, row });
            }
            None => {
                warn!(
                    key,
                    column = table.key_column(),
                    "requested key not found in table, skipping"
                );
                selections.push(Selection::NotFound { key });
            }
        }
    }

    Ok(selections)
}
