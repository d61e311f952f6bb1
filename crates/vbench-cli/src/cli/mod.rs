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


//! CLI command definitions and argument parsing.
//!
//! Commands are organized into the following modules:
//!
//! - [`core`]: Analysis commands (analyze, params)
//! - [`utility`]: Utility commands (completion)

mod core;
mod utility;

use crate::error::CliError;
use clap::{Parser, Subcommand};

pub use self::core::{CoreCommands, ShapeArg};
pub use self::utility::UtilityCommands;

/// vbench - vector search benchmark analysis
///
/// Reads the latency tables written by the HNSW benchmark harness and
/// reports per-row mean, tail percentiles, variance and recall.
///
/// # Examples
///
/// ```bash
/// # Summarise a top-k sweep, dropping two warmup runs, and chart k=10 and k=50
/// vbench analyze 1-ST-CPU_dim_960_nb_1000000_m_16_ef_200_latencies.csv -w 2 -k 10 50
///
/// # Chart every run of a single-query file
/// vbench analyze single.csv --shape single-query --all --params run.json
/// ```
#[derive(Parser)]
#[command(name = "vbench")]
#[command(author, version, about = "vbench - vector search benchmark analysis", long_about = None)]
pub struct Cli {
    /// Show debug diagnostics on stderr
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only show warnings and errors on stderr
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level CLI commands enum.
///
/// ```text
/// Commands
/// ├── Core (analyze, params)
/// └── Utility (completion)
/// ```
#[derive(Subcommand)]
pub enum Commands {
    // Core commands - flattened to appear at top level
    #[command(flatten)]
    Core(CoreCommands),

    // Utility commands - flattened to appear at top level
    #[command(flatten)]
    Utility(UtilityCommands),
}

impl Commands {
    /// Execute the command with the provided arguments.
    ///
    /// # Errors
    ///
    /// Returns the first fatal error of the invoked command.
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            Commands::Core(cmd) => cmd.execute(),
            Commands::Utility(cmd) => cmd.execute(),
        }
    }
}
