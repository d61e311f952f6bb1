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


//! Core commands - analysis of benchmark result files

use crate::commands::{self, AnalyzeOptions, KeySelection};
use crate::error::CliError;
use clap::{Subcommand, ValueEnum};
use std::path::PathBuf;
use vbench_core::{AnalysisConfig, MetadataSource, TableShape};
use vbench_report::{ReportFormat, DEFAULT_CHART_FILE};

/// Column layout presets of the benchmark harness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ShapeArg {
    /// One row per top-k value (`k` key column)
    TopK,
    /// One row per repeated query run (`id` key column)
    SingleQuery,
}

impl ShapeArg {
    /// The table shape this preset stands for.
    pub fn to_shape(self) -> TableShape {
        match self {
            ShapeArg::TopK => TableShape::top_k_sweep(),
            ShapeArg::SingleQuery => TableShape::single_query(),
        }
    }
}

/// Core analysis commands.
#[derive(Subcommand)]
pub enum CoreCommands {
    /// Summarise a benchmark result file
    ///
    /// Prints mean, p95, p99, variance and recall for every row after
    /// dropping the warmup runs, and charts the latency trace of the
    /// selected rows.
    Analyze {
        /// Benchmark result CSV file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Number of leading runs per row to discard as warmup
        #[arg(short, long, default_value_t = 0)]
        warmup: usize,

        /// Keys of the rows to chart, in chart order
        #[arg(short, long, value_name = "KEY", num_args = 1.., visible_alias = "plot-top-k")]
        keys: Vec<i64>,

        /// Chart every row
        #[arg(long, conflicts_with = "keys")]
        all: bool,

        /// Column layout of the file
        #[arg(long, value_enum, default_value_t = ShapeArg::TopK)]
        shape: ShapeArg,

        /// Override the expected key column header
        #[arg(long, value_name = "NAME")]
        key_column: Option<String>,

        /// The file has no trailing recall column
        #[arg(long)]
        no_recall: bool,

        /// Read run parameters from a JSON file instead of the file name (needed for harness files named with `M_`, since tokens are case-sensitive)
        #[arg(short, long, value_name = "SIDECAR")]
        params: Option<PathBuf>,

        /// Chart output path
        #[arg(long, value_name = "PATH", default_value = DEFAULT_CHART_FILE)]
        chart: PathBuf,

        /// Do not write a chart
        #[arg(long)]
        no_chart: bool,

        /// Report format (text, json, markdown)
        #[arg(short, long, default_value = "text")]
        format: String,

        /// Report output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show the run parameters of a result file
    ///
    /// Parses the `dim_`, `nb_`, `m_`, `ef_` and `K_` tokens of the file name,
    /// or reads them from a JSON sidecar.
    Params {
        /// Benchmark result file (only its name is used)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Read run parameters from a JSON file instead of the file name (needed for harness files named with `M_`, since tokens are case-sensitive)
        #[arg(short, long, value_name = "SIDECAR")]
        params: Option<PathBuf>,

        /// Print the parameters as JSON
        #[arg(long)]
        json: bool,
    },
}

fn metadata_source(file: PathBuf, sidecar: Option<PathBuf>) -> MetadataSource {
    match sidecar {
        Some(path) => MetadataSource::Sidecar(path),
        None => MetadataSource::Filename(file),
    }
}

impl CoreCommands {
    /// Execute the core command.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the command execution fails.
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            CoreCommands::Analyze {
                file,
                warmup,
                keys,
                all,
                shape,
                key_column,
                no_recall,
                params,
                chart,
                no_chart,
                format,
                output,
            } => {
                let mut table_shape = shape.to_shape();
                if let Some(name) = key_column {
                    table_shape.key_column_name = name;
                }
                if no_recall {
                    table_shape.has_recall_column = false;
                }

                let format: ReportFormat = format.parse()?;
                let options = AnalyzeOptions {
                    metadata: metadata_source(file.clone(), params),
                    file,
                    config: AnalysisConfig::default()
                        .with_warmup(warmup)
                        .with_shape(table_shape),
                    keys: if all {
                        KeySelection::All
                    } else {
                        KeySelection::Keys(keys)
                    },
                    chart: (!no_chart).then_some(chart),
                    format,
                    output,
                };
                commands::analyze(&options)
            }
            CoreCommands::Params { file, params, json } => {
                commands::params(&metadata_source(file, params), json)
            }
        }
    }
}
