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

//! Load benchmark result tables from CSV.

use crate::error::{CsvError, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};
use vbench_core::{ResultRow, ResultTable, TableShape};

/// Default maximum number of data rows.
///
/// Result tables hold one row per top-k value or query run, so real files
/// stay in the thousands. The limit bounds memory for corrupted input.
pub const DEFAULT_MAX_ROWS: usize = 1_000_000;

/// Default maximum number of columns (key + samples + recall).
pub const DEFAULT_MAX_COLUMNS: usize = 1_000_000;

/// Configuration for CSV loading.
///
/// # Examples
///
/// ```
/// # use vbench_csv::LoadConfig;
/// let config = LoadConfig::default();
/// assert_eq!(config.delimiter, b',');
/// assert!(config.trim);
///
/// // Tab-separated export
/// let config = LoadConfig {
///     delimiter: b'\t',
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct LoadConfig {
    /// Field delimiter character (default: `,`).
    pub delimiter: u8,

    /// Whether to trim whitespace around headers and fields (default: `true`).
    ///
    /// The benchmark harness separates fields with `", "`, so trimming is
    /// needed to read its files.
    pub trim: bool,

    /// Maximum number of data rows (default: [`DEFAULT_MAX_ROWS`]).
    pub max_rows: usize,

    /// Maximum number of columns (default: [`DEFAULT_MAX_COLUMNS`]).
    pub max_columns: usize,
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',
            trim: true,
            max_rows: DEFAULT_MAX_ROWS,
            max_columns: DEFAULT_MAX_COLUMNS,
        }
    }
}

/// Load a result table from `path` with the default configuration.
///
/// The whole file is read eagerly.
///
/// # Errors
///
/// - [`CsvError::FileNotFound`] if `path` does not exist
/// - any other [`CsvError`] variant for a structurally invalid table
pub fn load(path: &Path, shape: &TableShape) -> Result<ResultTable> {
    load_with_config(path, shape, &LoadConfig::default())
}

/// Load a result table from `path`.
pub fn load_with_config(path: &Path, shape: &TableShape, config: &LoadConfig) -> Result<ResultTable> {
    if !path.exists() {
        return Err(CsvError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let file = File::open(path)?;
    let table = from_csv_reader_with_config(file, shape, config)?;

    info!(
        path = %path.display(),
        rows = table.len(),
        samples = table.sample_count(),
        "loaded result table"
    );
    Ok(table)
}

/// Parse a result table from an in-memory CSV string.
///
/// # Examples
///
/// ```
/// use vbench_core::TableShape;
/// use vbench_csv::from_csv;
///
/// let csv = "k, iter1 (us), iter2 (us), recall (%)\n10, 120, 130, 0.9\n50, 210, 220, 0.95\n";
/// let table = from_csv(csv, &TableShape::top_k_sweep()).unwrap();
///
/// assert_eq!(table.len(), 2);
/// assert_eq!(table.sample_count(), 2);
/// assert_eq!(table.rows()[1].recall, Some(0.95));
/// ```
pub fn from_csv(csv: &str, shape: &TableShape) -> Result<ResultTable> {
    from_csv_reader_with_config(csv.as_bytes(), shape, &LoadConfig::default())
}

/// Parse a result table from any reader.
///
/// # Process
///
/// 1. Reads the header and checks it against `shape`: the first header
///    must equal `shape.key_column_name`, and there must be room for at
///    least one sample column (plus the recall column when the shape has
///    one).
/// 2. Reads every record, checking the width against the header.
/// 3. Parses the key as an integer, samples and recall as finite floats.
pub fn from_csv_reader_with_config<R: Read>(
    reader: R,
    shape: &TableShape,
    config: &LoadConfig,
) -> Result<ResultTable> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(config.delimiter)
        .has_headers(true)
        .flexible(true)
        .trim(if config.trim {
            csv::Trim::All
        } else {
            csv::Trim::None
        })
        .from_reader(reader);

    let headers: Vec<String> = csv_reader.headers()?.iter().map(str::to_string).collect();
    if headers.is_empty() || headers.iter().all(String::is_empty) {
        return Err(CsvError::EmptyTable);
    }

    let width = headers.len();
    if width > config.max_columns {
        return Err(CsvError::SecurityLimit {
            what: "column",
            limit: config.max_columns,
            actual: width,
        });
    }
    if width < shape.min_columns() {
        return Err(CsvError::TooFewColumns {
            required: shape.min_columns(),
            actual: width,
        });
    }
    if headers[0] != shape.key_column_name {
        return Err(CsvError::KeyColumnMismatch {
            expected: shape.key_column_name.clone(),
            found: headers[0].clone(),
        });
    }

    let samples_end = width - usize::from(shape.has_recall_column);
    let sample_columns = headers[1..samples_end].to_vec();
    debug!(
        width,
        samples = sample_columns.len(),
        recall = shape.has_recall_column,
        "parsed result table header"
    );

    let mut rows = Vec::new();
    for (record_idx, result) in csv_reader.records().enumerate() {
        let row_number = record_idx + 1;
        if record_idx >= config.max_rows {
            return Err(CsvError::SecurityLimit {
                what: "row",
                limit: config.max_rows,
                actual: row_number,
            });
        }

        let record = result.map_err(|e| CsvError::ParseError {
            line: e
                .position()
                .map(|p| p.line() as usize)
                .unwrap_or(row_number + 1),
            message: e.to_string(),
        })?;

        if record.len() != width {
            return Err(CsvError::WidthMismatch {
                expected: width,
                actual: record.len(),
                row: row_number,
            });
        }

        let key = parse_key(&record[0], row_number, &headers[0])?;

        let mut samples = Vec::with_capacity(sample_columns.len());
        for col in 1..samples_end {
            samples.push(parse_finite(&record[col], row_number, &headers[col], "latency sample")?);
        }

        let recall = if shape.has_recall_column {
            let col = width - 1;
            Some(parse_finite(&record[col], row_number, &headers[col], "recall fraction")?)
        } else {
            None
        };

        rows.push(ResultRow::new(key, samples, recall));
    }

    Ok(ResultTable::new(shape.clone(), sample_columns, rows)?)
}

/// Parse a key cell. Integral floats such as `10.0` are accepted.
fn parse_key(field: &str, row: usize, column: &str) -> Result<i64> {
    let invalid = || CsvError::InvalidNumber {
        row,
        column: column.to_string(),
        expected: "integer key",
        value: field.to_string(),
    };

    let trimmed = field.trim();
    if let Ok(key) = trimmed.parse::<i64>() {
        return Ok(key);
    }

    let value: f64 = trimmed.parse().map_err(|_| invalid())?;
    if value.is_finite() && value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        Ok(value as i64)
    } else {
        Err(invalid())
    }
}

/// Parse a finite floating point cell.
fn parse_finite(field: &str, row: usize, column: &str, expected: &'static str) -> Result<f64> {
    match field.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(CsvError::InvalidNumber {
            row,
            column: column.to_string(),
            expected,
            value: field.to_string(),
        }),
    }
}
