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

//! CSV loading of vector search benchmark result tables.
//!
//! The benchmark harness writes one CSV file per run. Its layout is
//! positional:
//!
//! ```text
//! k, iter1 (us), iter2 (us), ..., iterN (us), recall (%)
//! 10, 812, 140, ..., 133, 0.91
//! 50, 907, 231, ..., 229, 0.97
//! ```
//!
//! The first column is the selection key, the last column (when the
//! [`TableShape`](vbench_core::TableShape) says so) is recall as a fraction,
//! and everything in between is a latency sample in microseconds.
//!
//! # Features
//!
//! - **Shape checking**: the key header and minimum width are validated
//!   against the caller's `TableShape`
//! - **Strict numbers**: keys must be integers, samples and recall finite floats
//! - **Configurable**: delimiter, whitespace trimming, row and column limits
//! - **Eager**: the whole file is read into a `ResultTable`
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use vbench_core::TableShape;
//! use vbench_csv::load;
//!
//! let table = load(
//!     Path::new("1-ST-CPU_dim_960_nb_1000000_m_16_ef_200_latencies.csv"),
//!     &TableShape::top_k_sweep(),
//! )
//! .unwrap();
//! println!("{} rows, {} samples each", table.len(), table.sample_count());
//! ```

mod error;
mod load;

// Re-export public API
pub use error::{CsvError, Result};
pub use load::{
    from_csv, from_csv_reader_with_config, load, load_with_config, LoadConfig, DEFAULT_MAX_COLUMNS,
    DEFAULT_MAX_ROWS,
};
