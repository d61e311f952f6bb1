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


//! vbench CLI library for command-line parsing and execution.
//!
//! # Commands
//!
//! ## Analysis
//!
//! - **analyze**: Summarise a benchmark result file and chart selected rows
//! - **params**: Show the run parameters encoded in a result file name
//!
//! ## Utilities
//!
//! - **completion**: Generate shell completion scripts (bash, zsh, fish, powershell, elvish)
//!
//! # Logging
//!
//! Diagnostics go to stderr through `tracing`; stdout carries only the
//! report. `RUST_LOG` overrides the `--verbose` / `--quiet` defaults.

pub mod cli;
pub mod commands;
pub mod error;

pub use error::CliError;
