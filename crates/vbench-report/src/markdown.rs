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

//! Markdown export for summary reports.

use crate::types::SummaryReport;

/// Render `report` as a Markdown document with a single results table.
pub fn to_markdown(report: &SummaryReport) -> String {
    let (headers, body) = report.cells();
    let mut md = String::new();

    md.push_str("# Latency Summary\n\n");
    md.push_str(&format!(
        "**Parameters:** dim {}, nb {}, m {}, ef {}, K {}\n\n",
        report.params.dim,
        report.params.nb,
        report.params.m,
        report.params.ef,
        report.params.top_k_or_default()
    ));
    md.push_str(&format!("**Warmup:** {} run(s) excluded\n\n", report.warmup));

    md.push_str(&format!("| {} |\n", headers.join(" | ")));
    md.push_str(&format!(
        "|{}\n",
        headers.iter().map(|_| "---:|").collect::<String>()
    ));
    for line in body {
        md.push_str(&format!("| {} |\n", line.join(" | ")));
    }

    md
}
