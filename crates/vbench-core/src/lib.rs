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

//! Benchmark result analysis for vector search latency runs.
//!
//! This crate holds the engine behind the `vbench` tool: it models the
//! result tables written by the HNSW benchmark harness, extracts run
//! parameters from result file names, selects rows by key and computes
//! latency statistics.
//!
//! # Pipeline
//!
//! ```text
//! file name ──► RunParameters (labels only)
//! CSV file ──► ResultTable ──► select_by_key ──► selected rows
//!                   │                                 │
//!                   └────────► summarize / summarize_all ──► StatisticsSummary
//! ```
//!
//! Loading a table from disk lives in `vbench-csv`; rendering lives in
//! `vbench-report`.
//!
//! # Example
//!
//! ```
//! use vbench_core::{extract, select_by_key, summarize, ResultRow, ResultTable, TableShape};
//!
//! let params = extract("1-ST-CPU_dim_960_nb_1000000_m_16_ef_200_latencies.csv").unwrap();
//! assert_eq!(params.m, 16);
//!
//! let table = ResultTable::new(
//!     TableShape::top_k_sweep(),
//!     vec!["iter1 (us)".into(), "iter2 (us)".into(), "iter3 (us)".into()],
//!     vec![
//!         ResultRow::new(10, vec![900.0, 110.0, 130.0], Some(0.91)),
//!         ResultRow::new(50, vec![950.0, 210.0, 230.0], Some(0.97)),
//!     ],
//! )
//! .unwrap();
//!
//! let selected = select_by_key(&table, &[50]).unwrap();
//! let row = selected[0].row().unwrap();
//! let summary = summarize(row, 1).unwrap();
//! assert_eq!(summary.mean, 220.0);
//! ```

pub mod config;
pub mod error;
pub mod params;
pub mod select;
pub mod stats;
pub mod table;

pub use config::AnalysisConfig;
pub use error::{AnalysisError, Result};
pub use params::{extract, MetadataSource, RunParameters, DEFAULT_TOP_K};
pub use select::{select_by_key, Selection};
pub use stats::{summarize, summarize_all, StatisticsSummary};
pub use table::{ResultRow, ResultTable, TableShape};
