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


//! Params command - show the run parameters of a result file

use super::write_stdout;
use crate::error::CliError;
use vbench_core::{MetadataSource, RunParameters};

/// Print the run parameters from `source`, as aligned text or JSON.
///
/// # Errors
///
/// Returns `Err` if a required token is missing, the sidecar cannot be
/// read, or stdout is closed.
pub fn params(source: &MetadataSource, json: bool) -> Result<(), CliError> {
    let params = source.resolve()?;
    let text = if json {
        serde_json::to_string_pretty(&params)?
    } else {
        format_params(&params)
    };
    write_stdout(&text)
}

/// One `Param <name>: <value>` line per parameter.
///
/// # Examples
///
/// ```
/// use vbench_cli::commands::format_params;
/// use vbench_core::extract;
///
/// let params = extract("dim_960_nb_1000000_m_16_ef_200.csv").unwrap();
/// let text = format_params(&params);
/// assert!(text.contains("Param nb:  1000000"));
/// assert!(text.contains("Param K:   100 (default)"));
/// ```
pub fn format_params(params: &RunParameters) -> String {
    let top_k = match params.top_k {
        Some(k) => k.to_string(),
        None => format!("{} (default)", params.top_k_or_default()),
    };

    [
        ("dim", params.dim.to_string()),
        ("nb", params.nb.to_string()),
        ("m", params.m.to_string()),
        ("ef", params.ef.to_string()),
        ("K", top_k),
    ]
    .iter()
    .map(|(name, value)| format!("Param {:<4} {}\n", format!("{}:", name), value))
    .collect()
}
